use std::fmt;

/// Non-fatal issues met while resolving or publishing a version.
/// These are reported to the user but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// Tag parses but does not outrank the baseline found so far
    NotNewer { tag: String, baseline: String },
    /// Tag is newer but lives outside the current branch
    NotReachable { tag: String },
    /// Branch containment could not be determined for the tag
    ReachabilityCheckFailed { tag: String, reason: String },
    /// No tag qualified as a baseline, so commit markers were not scanned
    NoBaselineTag { version: String },
}

impl BoundaryWarning {
    /// The tag this warning concerns, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            BoundaryWarning::UnparsableTag { tag, .. }
            | BoundaryWarning::NotNewer { tag, .. }
            | BoundaryWarning::NotReachable { tag }
            | BoundaryWarning::ReachabilityCheckFailed { tag, .. } => Some(tag),
            BoundaryWarning::NoBaselineTag { .. } => None,
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::NotNewer { tag, baseline } => {
                write!(f, "Tag '{}' is not newer than {}", tag, baseline)
            }
            BoundaryWarning::NotReachable { tag } => {
                write!(f, "Tag '{}' is not in the current branch", tag)
            }
            BoundaryWarning::ReachabilityCheckFailed { tag, reason } => {
                write!(
                    f,
                    "Cannot tell whether tag '{}' is in the current branch: {}",
                    tag, reason
                )
            }
            BoundaryWarning::NoBaselineTag { version } => {
                write!(
                    f,
                    "No version tag found; commits were not scanned, starting from {}",
                    version
                )
            }
        }
    }
}
