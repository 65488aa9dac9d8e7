//! Version bumping functionality
//!
//! Rewrites the version source file and prepends a changelog template entry.

use crate::{
    config::Config,
    core::{
        changelog::ChangelogDocument,
        version::{BumpKind, SemanticVersion},
        version_file::VersionFileParser,
    },
    error::{ReleaseError, Result},
    utils::fs::FileSystemUtils,
};
use chrono::{Local, NaiveDate};
use std::{
    fmt, io,
    path::{Path, PathBuf},
};
use tracing::{info, instrument, warn};

/// Bumps the project version and seeds the changelog
pub struct VersionBumper {
    config: Config,
    fs_utils: FileSystemUtils,
    parser: VersionFileParser,
}

/// What a successful bump changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    /// Version before the bump
    pub old_version: SemanticVersion,
    /// Version after the bump
    pub new_version: SemanticVersion,
    /// Source file that was rewritten, relative to the project root
    pub version_file: PathBuf,
    /// Changelog that received the template, relative to the project root
    pub changelog: PathBuf,
}

impl VersionBumper {
    /// Create a new version bumper with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            fs_utils: FileSystemUtils::new(),
            parser: VersionFileParser::new()?,
        })
    }

    /// Bump using today's local date for the changelog entry
    pub fn bump(&self, kind: &str) -> Result<BumpOutcome> {
        self.bump_on(kind, Local::now().date_naive())
    }

    /// Bump the version by `kind` and date the new changelog entry `today`
    ///
    /// An unknown kind or an unparseable version file fails before anything is
    /// written. A changelog without entries fails after the version file has
    /// already been rewritten; that write is not rolled back.
    #[instrument(skip(self))]
    pub fn bump_on(&self, kind: &str, today: NaiveDate) -> Result<BumpOutcome> {
        let kind: BumpKind = kind.parse()?;
        let version_path = &self.config.version_file;

        let content = self.read_required(version_path)?;

        let found = self.parser.parse(&content, version_path)?;
        let old_version = found.version;
        let new_version = old_version.bump(kind)?;
        info!("Bumping {} version: {} -> {}", kind, old_version, new_version);

        self.fs_utils
            .write_file(version_path, self.parser.rewrite(&content, &found, &new_version))
            .map_err(|e| ReleaseError::file_system("write", version_path, e))?;

        self.add_changelog_entry(&new_version, today)
            .inspect_err(|_| {
                warn!(
                    "{} already records {}; the changelog was not updated",
                    version_path.display(),
                    new_version
                );
            })?;

        Ok(BumpOutcome {
            old_version,
            new_version,
            version_file: self.relative(version_path),
            changelog: self.relative(&self.config.changelog_md),
        })
    }

    /// Insert the template entry ahead of the newest release
    fn add_changelog_entry(&self, version: &SemanticVersion, today: NaiveDate) -> Result<()> {
        let path = &self.config.changelog_md;

        let raw = self.read_required(path)?;

        let updated = ChangelogDocument::new(raw)
            .with_entry(version, today)
            .ok_or_else(|| {
                ReleaseError::missing_input(
                    format!("Could not find version entries in {}", path.display()),
                    path,
                )
            })?;

        self.fs_utils
            .write_file(path, updated.as_str())
            .map_err(|e| ReleaseError::file_system("write", path, e))?;

        info!("Added changelog template for {}", version);
        Ok(())
    }

    /// Read an input file, reporting absence as missing input
    fn read_required(&self, path: &Path) -> Result<String> {
        self.fs_utils.read_file_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ReleaseError::missing_input(format!("{} not found", path.display()), path)
            } else {
                ReleaseError::file_system("read", path, e)
            }
        })
    }

    fn relative(&self, path: &Path) -> PathBuf {
        PathBuf::from(self.config.display_path(path).to_string())
    }
}

impl BumpOutcome {
    /// Suggested follow-up actions after a bump
    pub fn next_steps(&self) -> Vec<String> {
        let version = &self.new_version;
        vec![
            format!(
                "Edit {} and fill in the changes",
                self.changelog.display()
            ),
            "Run: release sync-changelog".to_string(),
            format!("Commit: git commit -am 'chore: bump version to {version}'"),
            format!("Tag: git tag v{version}"),
            "Push: git push --tags".to_string(),
        ]
    }
}

impl fmt::Display for BumpOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Bumped version: {} → {}",
            self.old_version, self.new_version
        )?;
        writeln!(f, "Updated {}", self.version_file.display())?;
        writeln!(f, "Added changelog template for {}", self.new_version)?;
        writeln!(f)?;
        writeln!(f, "Next steps:")?;
        for (i, step) in self.next_steps().iter().enumerate() {
            writeln!(f, "   {}. {}", i + 1, step)?;
        }
        Ok(())
    }
}
