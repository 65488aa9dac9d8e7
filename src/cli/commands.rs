//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{ChangelogConverter, VersionBumper},
};
use anyhow::Context;
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Bump { kind } => execute_bump_command(config, kind),
        Command::SyncChangelog => execute_sync_changelog_command(config),
    }
}

/// Execute the bump command
#[instrument(skip(config))]
fn execute_bump_command(config: &Config, kind: &str) -> anyhow::Result<()> {
    let bumper = VersionBumper::new(config.clone())?;
    let outcome = bumper
        .bump(kind)
        .with_context(|| format!("Failed to bump {kind} version"))?;

    print!("{outcome}");
    info!("Version bumped to {}", outcome.new_version);
    Ok(())
}

/// Execute the sync-changelog command
#[instrument(skip(config))]
fn execute_sync_changelog_command(config: &Config) -> anyhow::Result<()> {
    let converter = ChangelogConverter::new(config.clone());
    let written = converter
        .sync()
        .context("Failed to sync changelog")?;

    println!(
        "Synced {} → {}",
        config.display_path(&config.changelog_md),
        config.display_path(&written)
    );
    Ok(())
}
