//! Core release functionality
//!
//! Contains the version arithmetic, the version bumper and the changelog
//! converter.

pub mod bumper;
pub mod changelog;
pub mod converter;
pub mod version;
pub mod version_file;

pub use bumper::{BumpOutcome, VersionBumper};
pub use changelog::ChangelogDocument;
pub use converter::{ChangelogConverter, M2r2Converter, MarkupConverter};
pub use version::{BumpKind, SemanticVersion};
pub use version_file::{VersionFileParser, VersionMatch};
