//! # kipu release tooling
//!
//! Maintenance commands for the kipu release process.
//! This library bumps the project's semantic version, seeds a changelog
//! entry for the new release, and converts the markdown changelog into the
//! reStructuredText copy used by the documentation build.
//!
//! ## Features
//!
//! - Major/minor/patch bumps of the `__version__` string in `kipu/__init__.py`
//! - Dated `Added`/`Changed`/`Fixed` template inserted ahead of the newest release
//! - CHANGELOG.md to docs/changelog.rst conversion through m2r2
//!
//! ## Example
//!
//! ```no_run
//! use kipu_release::{config::Config, core::VersionBumper};
//!
//! let bumper = VersionBumper::new(Config::for_root("."))?;
//! let outcome = bumper.bump("minor")?;
//! println!("Now at {}", outcome.new_version);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
