//! Reading and rewriting the `__version__` assignment in a Python source file
//!
//! The assignment that was parsed is the one that gets rewritten; every other
//! byte is preserved.

use crate::core::version::SemanticVersion;
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, instrument};

/// Locates and substitutes the version string in a source file
pub struct VersionFileParser {
    /// Regex capturing the `X.Y.Z` literal of the assignment
    re_version: Regex,
}

/// A version found in a source file, with the byte range of its literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMatch {
    pub version: SemanticVersion,
    pub span: Range<usize>,
}

impl VersionFileParser {
    /// Create a new version file parser
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_version: Regex::new(r#"__version__ = "(\d+\.\d+\.\d+)""#)
                .map_err(|e| ReleaseError::config(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Find the first numeric version assignment in file content
    ///
    /// `path` is only used for the error message.
    #[instrument(skip(self, content))]
    pub fn parse(&self, content: &str, path: &Path) -> Result<VersionMatch> {
        let literal = self
            .re_version
            .captures(content)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| {
                ReleaseError::missing_input(
                    format!("Could not find version in {}", path.display()),
                    path,
                )
            })?;

        let version: SemanticVersion = literal.as_str().parse().map_err(|e| {
            ReleaseError::missing_input(
                format!("Unusable version '{}': {e}", literal.as_str()),
                path,
            )
        })?;

        debug!(
            "Found version {} in {} at bytes {:?}",
            version,
            path.display(),
            literal.range()
        );
        Ok(VersionMatch {
            version,
            span: literal.range(),
        })
    }

    /// Replace the literal at `found.span` with `version`
    pub fn rewrite(&self, content: &str, found: &VersionMatch, version: &SemanticVersion) -> String {
        let mut rewritten = String::with_capacity(content.len());
        rewritten.push_str(&content[..found.span.start]);
        rewritten.push_str(&version.to_string());
        rewritten.push_str(&content[found.span.end..]);
        rewritten
    }
}
