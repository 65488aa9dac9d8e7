#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use kipu_release::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Initialize configuration
    let config = Config::from_args(&args)?;

    // A failed command exits non-zero with the error chain on stderr
    cli::execute_command(&config, &args.command)
}
