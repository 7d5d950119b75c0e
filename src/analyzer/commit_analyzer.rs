use crate::config::MarkersConfig;

/// Bump levels requested by markers in commit summaries
///
/// Both flags may be set; choosing between them is the caller's policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BumpMarkers {
    pub has_major: bool,
    pub has_minor: bool,
}

/// Scans commit summaries for bump markers (`#major`, `#minor` by default)
pub struct CommitAnalyzer {
    markers: MarkersConfig,
}

impl CommitAnalyzer {
    /// Create a new commit analyzer
    pub fn new(markers: MarkersConfig) -> Self {
        CommitAnalyzer { markers }
    }

    /// Classify summaries by case-sensitive substring match on the markers
    pub fn analyze<S: AsRef<str>>(&self, summaries: &[S]) -> BumpMarkers {
        let contains = |marker: &str| {
            !marker.is_empty() && summaries.iter().any(|s| s.as_ref().contains(marker))
        };

        BumpMarkers {
            has_major: contains(&self.markers.major),
            has_minor: contains(&self.markers.minor),
        }
    }
}

impl Default for CommitAnalyzer {
    fn default() -> Self {
        CommitAnalyzer::new(MarkersConfig::default())
    }
}
