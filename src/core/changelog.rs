//! Markdown changelog manipulation
//!
//! The document is opaque text apart from the first `## [` entry marker,
//! where new entries are spliced in.

use crate::core::version::SemanticVersion;
use chrono::NaiveDate;

/// Marker that opens every version entry
pub const ENTRY_MARKER: &str = "## [";

/// A markdown changelog held as raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
    raw: String,
}

impl ChangelogDocument {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Byte offset of the first version entry, if any
    pub fn first_entry_offset(&self) -> Option<usize> {
        self.raw.find(ENTRY_MARKER)
    }

    /// Splice a fresh template for `version` in front of the first entry
    ///
    /// Returns `None` when the document has no entries to anchor on.
    pub fn with_entry(&self, version: &SemanticVersion, date: NaiveDate) -> Option<Self> {
        let offset = self.first_entry_offset()?;
        let entry = entry_template(version, date);

        let mut content = String::with_capacity(self.raw.len() + entry.len());
        content.push_str(&self.raw[..offset]);
        content.push_str(&entry);
        content.push_str(&self.raw[offset..]);
        Some(Self::new(content))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Empty `Added`/`Changed`/`Fixed` section for a new release
pub fn entry_template(version: &SemanticVersion, date: NaiveDate) -> String {
    format!(
        "## [{version}] - {date}\n\
         \n\
         ### Added\n\
         - \n\
         \n\
         ### Changed\n\
         - \n\
         \n\
         ### Fixed\n\
         - \n\
         \n\
         ---\n\
         \n",
        date = date.format("%Y-%m-%d"),
    )
}
