//! Pre-release identifiers for semantic versioning
//!
//! A pre-release is a dot-separated sequence of identifiers, each either numeric
//! or alphanumeric. According to semver.org: https://semver.org/#spec-item-9

use crate::error::{Result, ScmVersionError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Characters allowed in a single pre-release or build identifier
fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9A-Za-z-]+$").expect("identifier pattern is valid"))
}

/// Returns true if `s` is a non-empty run of ASCII alphanumerics and hyphens.
pub fn is_valid_identifier(s: &str) -> bool {
    identifier_pattern().is_match(s)
}

/// A single pre-release identifier
///
/// # Examples
/// - "alpha" -> Identifier::AlphaNumeric("alpha")
/// - "10" -> Identifier::Numeric(10)
/// - "x-1" -> Identifier::AlphaNumeric("x-1")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Identifier made only of digits, compared numerically
    Numeric(u64),
    /// Identifier containing at least one non-digit, compared by ASCII text
    AlphaNumeric(String),
}

impl Identifier {
    /// Parse a single identifier
    ///
    /// # Returns
    /// * `Ok(Identifier)` - Parsed identifier
    /// * `Err` - If empty, containing invalid characters, or numeric with a leading zero
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Returns the counter value if this identifier is numeric
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Identifier::Numeric(n) => Some(*n),
            Identifier::AlphaNumeric(_) => None,
        }
    }
}

impl FromStr for Identifier {
    type Err = ScmVersionError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(ScmVersionError::invalid_format(
                "Empty pre-release identifier",
            ));
        }

        if !is_valid_identifier(s) {
            return Err(ScmVersionError::invalid_format(format!(
                "Invalid pre-release identifier: '{}'",
                s
            )));
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Identifier::AlphaNumeric(s.to_string()));
        }

        if s.len() > 1 && s.starts_with('0') {
            return Err(ScmVersionError::invalid_format(format!(
                "Numeric pre-release identifier has a leading zero: '{}'",
                s
            )));
        }

        s.parse::<u64>().map(Identifier::Numeric).map_err(|_| {
            ScmVersionError::invalid_format(format!(
                "Numeric pre-release identifier is out of range: '{}'",
                s
            ))
        })
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Parse a dot-separated pre-release string into identifiers.
///
/// An empty string yields an empty sequence.
pub fn parse_prerelease(s: &str) -> Result<Vec<Identifier>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split('.').map(Identifier::parse).collect()
}

/// Compare two pre-release sequences by semver precedence.
///
/// An empty sequence (a normal release) outranks any pre-release.
pub fn cmp_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}
