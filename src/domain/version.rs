use crate::domain::prerelease::{self, Identifier};
use crate::error::{Result, ScmVersionError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
///
/// Equality compares every field, build metadata included. Use
/// [`Version::cmp_precedence`] for semver ordering, which ignores build metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Vec<Identifier>,
    pub build: Option<String>,
}

impl Version {
    /// Create a new release version without pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: None,
        }
    }

    /// The baseline used when no tag qualifies: 0.0.0
    pub fn initial() -> Self {
        Version::new(0, 0, 0)
    }

    /// Parse a strict semantic version string (e.g., "1.2.3-beta.1+build.5")
    ///
    /// No `v` prefix or surrounding whitespace is accepted.
    pub fn parse(s: &str) -> Result<Self> {
        let parsed = semver::Version::parse(s).map_err(|e| {
            ScmVersionError::invalid_format(format!("'{}' is not a semantic version: {}", s, e))
        })?;

        let pre = prerelease::parse_prerelease(parsed.pre.as_str())?;
        let build = if parsed.build.is_empty() {
            None
        } else {
            Some(parsed.build.as_str().to_string())
        };

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            pre,
            build,
        })
    }

    /// Compare by semver precedence, ignoring build metadata
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| prerelease::cmp_prerelease(&self.pre, &other.pre))
    }

    /// Returns true if this version has strictly higher precedence than `other`
    pub fn is_newer_than(&self, other: &Version) -> bool {
        self.cmp_precedence(other) == Ordering::Greater
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            let pre: Vec<String> = self.pre.iter().map(|id| id.to_string()).collect();
            write!(f, "-{}", pre.join("."))?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ScmVersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}
