//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release maintenance commands for the kipu project
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "release")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Project root that all well-known paths are resolved against
    #[arg(short = 'C', long = "root", global = true, default_value = ".")]
    pub root: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bump the project version and add a changelog template entry
    Bump {
        /// Which part to bump: major, minor or patch
        #[arg(default_value = "patch")]
        kind: String,
    },

    /// Convert CHANGELOG.md into docs/changelog.rst
    SyncChangelog,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
