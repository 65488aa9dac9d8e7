//! Configuration management for the release commands
//!
//! Centralizes the well-known file locations and converter settings.

use crate::{cli::Args, error::ReleaseError, utils::env::EnvUtils};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the Python interpreter used for m2r2
pub const PYTHON_ENV_VAR: &str = "RELEASE_PYTHON";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Project root directory
    pub root: PathBuf,
    /// File holding the `__version__ = "X.Y.Z"` line
    pub version_file: PathBuf,
    /// Markdown changelog
    pub changelog_md: PathBuf,
    /// Generated reStructuredText changelog for the docs
    pub changelog_rst: PathBuf,
    /// Markdown to reStructuredText converter configuration
    pub converter: ConverterConfig,
}

/// Settings for invoking m2r2
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Python interpreter (name on PATH or explicit path)
    pub python: String,
    /// Python module providing the converter
    pub module: String,
    /// Flag asking the converter to overwrite an existing output file
    pub overwrite_flag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_root(".")
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            python: "python3".to_string(),
            module: "m2r2".to_string(),
            overwrite_flag: "--overwrite".to_string(),
        }
    }
}

impl Config {
    /// Default layout rooted at `root`
    pub fn for_root<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            debug: false,
            version_file: root.join("kipu").join("__init__.py"),
            changelog_md: root.join("CHANGELOG.md"),
            changelog_rst: root.join("docs").join("changelog.rst"),
            converter: ConverterConfig::default(),
            root,
        }
    }

    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ReleaseError> {
        let mut config = Self {
            debug: args.debug,
            ..Self::for_root(&args.root)
        };

        config.converter.python =
            EnvUtils::get_var_or_default(PYTHON_ENV_VAR, &config.converter.python);

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ReleaseError> {
        if !self.root.is_dir() {
            return Err(ReleaseError::config(format!(
                "Project root not found: {}",
                self.root.display()
            )));
        }

        if self.converter.python.trim().is_empty() {
            return Err(ReleaseError::config(format!(
                "{PYTHON_ENV_VAR} is set but empty"
            )));
        }

        Ok(())
    }

    /// Path the converter writes next to the markdown changelog
    pub fn converter_output(&self) -> PathBuf {
        self.changelog_md.with_extension("rst")
    }

    /// Render `path` relative to the project root for user-facing messages
    pub fn display_path<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.root).unwrap_or(path).display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_layout() {
        let config = Config::for_root("/project");
        assert_eq!(config.version_file, PathBuf::from("/project/kipu/__init__.py"));
        assert_eq!(config.changelog_md, PathBuf::from("/project/CHANGELOG.md"));
        assert_eq!(config.changelog_rst, PathBuf::from("/project/docs/changelog.rst"));
        assert_eq!(config.converter_output(), PathBuf::from("/project/CHANGELOG.rst"));
        assert_eq!(config.converter.module, "m2r2");
    }

    #[test]
    fn test_display_path_is_root_relative() {
        let config = Config::for_root("/project");
        assert_eq!(
            config.display_path(&config.version_file).to_string(),
            "kipu/__init__.py"
        );
    }

    #[test]
    fn test_validate_rejects_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::for_root(temp_dir.path().join("absent"));
        assert!(matches!(config.validate(), Err(ReleaseError::Config { .. })));

        let config = Config::for_root(temp_dir.path());
        assert!(config.validate().is_ok());
    }
}
