//! Semantic version arithmetic

use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` version
///
/// Field order gives the lexicographic tuple ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Which component of the version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl SemanticVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Next version for `kind`; lower components reset to zero
    ///
    /// Fails instead of wrapping when the bumped component is already `u64::MAX`.
    pub fn bump(self, kind: BumpKind) -> Result<Self> {
        let exhausted = || {
            ReleaseError::invalid_argument(format!("Cannot bump {kind} of {self}: component overflows"))
        };

        let next = match kind {
            BumpKind::Major => Self::new(self.major.checked_add(1).ok_or_else(exhausted)?, 0, 0),
            BumpKind::Minor => {
                Self::new(self.major, self.minor.checked_add(1).ok_or_else(exhausted)?, 0)
            }
            BumpKind::Patch => Self::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(exhausted)?,
            ),
        };
        Ok(next)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid =
            || ReleaseError::invalid_argument(format!("'{s}' is not a MAJOR.MINOR.PATCH version"));

        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u64> {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        let version = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

impl BumpKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            other => Err(ReleaseError::invalid_argument(format!(
                "Invalid part: {other}. Use: major, minor, or patch"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_from_0_0_2() {
        let base = SemanticVersion::new(0, 0, 2);
        assert_eq!(base.bump(BumpKind::Patch).unwrap(), SemanticVersion::new(0, 0, 3));
        assert_eq!(base.bump(BumpKind::Minor).unwrap(), SemanticVersion::new(0, 1, 0));
        assert_eq!(base.bump(BumpKind::Major).unwrap(), SemanticVersion::new(1, 0, 0));
    }

    #[test]
    fn test_bump_resets_lower_components() {
        let base = SemanticVersion::new(3, 7, 12);
        assert_eq!(base.bump(BumpKind::Minor).unwrap(), SemanticVersion::new(3, 8, 0));
        assert_eq!(base.bump(BumpKind::Major).unwrap(), SemanticVersion::new(4, 0, 0));
    }

    #[test]
    fn test_bump_refuses_to_overflow() {
        let max: SemanticVersion = "18446744073709551615.0.0".parse().unwrap();
        let err = max.bump(BumpKind::Major).unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidArgument { .. }));
        assert!(err.to_string().contains("major"));

        // Lower components still bump fine.
        assert_eq!(
            max.bump(BumpKind::Patch).unwrap(),
            SemanticVersion::new(u64::MAX, 0, 1)
        );

        let max_patch = SemanticVersion::new(0, 0, u64::MAX);
        assert!(max_patch.bump(BumpKind::Patch).is_err());
        assert_eq!(max_patch.bump(BumpKind::Minor).unwrap(), SemanticVersion::new(0, 1, 0));
    }

    #[test]
    fn test_bump_is_strictly_increasing() {
        let samples = [(0, 0, 0), (0, 9, 9), (1, 2, 3), (10, 0, 99)];
        for (major, minor, patch) in samples {
            let base = SemanticVersion::new(major, minor, patch);
            for kind in [BumpKind::Major, BumpKind::Minor, BumpKind::Patch] {
                assert!(base.bump(kind).unwrap() > base, "{base} bumped {kind} did not grow");
            }
        }
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(SemanticVersion::new(1, 0, 0) > SemanticVersion::new(0, 99, 99));
        assert!(SemanticVersion::new(0, 2, 0) > SemanticVersion::new(0, 1, 9));
    }

    #[test]
    fn test_display_and_parse() {
        let version: SemanticVersion = "12.0.7".parse().unwrap();
        assert_eq!(version, SemanticVersion::new(12, 0, 7));
        assert_eq!(version.to_string(), "12.0.7");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "1.2", "1.2.3.4", "1.x.3", "-1.2.3", "1..3", "+1.2.3"] {
            assert!(bad.parse::<SemanticVersion>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_bump_kind_from_str() {
        assert_eq!("major".parse::<BumpKind>().unwrap(), BumpKind::Major);
        assert_eq!("minor".parse::<BumpKind>().unwrap(), BumpKind::Minor);
        assert_eq!("patch".parse::<BumpKind>().unwrap(), BumpKind::Patch);

        let err = "bogus".parse::<BumpKind>().unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidArgument { .. }));
        assert!(err.to_string().contains("bogus"));
    }
}
