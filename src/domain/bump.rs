//! Version bump transitions
//!
//! Every operation takes the current [`Version`] and returns a new one; the input
//! is never modified.

use crate::domain::prerelease::{self, Identifier};
use crate::domain::version::Version;
use crate::error::{Result, ScmVersionError};
use std::fmt;

/// Bump operation to apply to a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpOperation {
    Major,
    Minor,
    Patch,
    /// Replace build metadata with the given label
    Build(String),
    /// Enter or advance the given pre-release channel
    Prerelease(String),
}

impl fmt::Display for BumpOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpOperation::Major => write!(f, "major"),
            BumpOperation::Minor => write!(f, "minor"),
            BumpOperation::Patch => write!(f, "patch"),
            BumpOperation::Build(label) => write!(f, "build '{}'", label),
            BumpOperation::Prerelease(label) => write!(f, "prerelease '{}'", label),
        }
    }
}

impl Version {
    /// Bump version according to the given operation
    pub fn bump(&self, operation: &BumpOperation) -> Result<Version> {
        match operation {
            BumpOperation::Major => major(self),
            BumpOperation::Minor => minor(self),
            BumpOperation::Patch => patch(self),
            BumpOperation::Build(label) => build(self, label),
            BumpOperation::Prerelease(label) => prerelease(self, label),
        }
    }
}

/// Incompatible API change: major + 1, everything else reset
pub fn major(v: &Version) -> Result<Version> {
    Ok(Version::new(increment(v, v.major, "major")?, 0, 0))
}

/// Backwards-compatible feature: minor + 1, patch reset
pub fn minor(v: &Version) -> Result<Version> {
    Ok(Version::new(v.major, increment(v, v.minor, "minor")?, 0))
}

/// Backwards-compatible fix: patch + 1
pub fn patch(v: &Version) -> Result<Version> {
    Ok(Version::new(v.major, v.minor, increment(v, v.patch, "patch")?))
}

fn increment(v: &Version, field: u64, name: &str) -> Result<u64> {
    field.checked_add(1).ok_or_else(|| {
        ScmVersionError::invalid_format(format!("{} version overflow in '{}'", name, v))
    })
}

/// Replace build metadata, keeping version core and pre-release as-is.
///
/// The label must be dot-separated, non-empty identifiers of ASCII
/// alphanumerics and hyphens.
pub fn build(v: &Version, label: &str) -> Result<Version> {
    validate_build_metadata(label)?;

    Ok(Version {
        build: Some(label.to_string()),
        ..v.clone()
    })
}

/// Enter or advance a pre-release channel.
///
/// - No current pre-release: opens the next patch as `<label>`.
/// - Different channel: same version core, pre-release becomes `<label>`.
/// - Same channel: the counter after the label is incremented (`label`, `label.1`, `label.2`, ...).
///
/// Multi-field labels such as `"rc.1"` are rejected with `UnsupportedFormat`.
pub fn prerelease(v: &Version, label: &str) -> Result<Version> {
    if label.contains('.') {
        return Err(ScmVersionError::unsupported_format(format!(
            "multi-field prerelease not accepted: '{}'",
            label
        )));
    }

    let channel = Identifier::parse(label)?;

    let Some(current_channel) = v.pre.first() else {
        let mut next = patch(v)?;
        next.pre = vec![channel];
        return Ok(next);
    };

    let mut next = Version::new(v.major, v.minor, v.patch);

    if *current_channel != channel {
        next.pre = vec![channel];
        return Ok(next);
    }

    let count = v.pre.get(1).and_then(Identifier::as_number).unwrap_or(0);
    let count = count.checked_add(1).ok_or_else(|| {
        ScmVersionError::invalid_format(format!("prerelease counter overflow in '{}'", v))
    })?;

    next.pre = vec![channel, Identifier::Numeric(count)];
    Ok(next)
}

fn validate_build_metadata(label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(ScmVersionError::invalid_format("Empty build metadata"));
    }

    match label
        .split('.')
        .find(|part| !prerelease::is_valid_identifier(part))
    {
        Some(part) => Err(ScmVersionError::invalid_format(format!(
            "Invalid build metadata '{}': bad identifier '{}'",
            label, part
        ))),
        None => Ok(()),
    }
}
