use crate::analyzer::commit_analyzer::{BumpMarkers, CommitAnalyzer};
use crate::boundary::BoundaryWarning;
use crate::config::MarkersConfig;
use crate::domain::Version;
use crate::error::Result;
use crate::git::Repository;

/// Outcome of scanning the repository's tags
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Highest reachable version, or 0.0.0
    pub version: Version,
    /// Tag the version was read from; `None` when no tag qualified
    pub tag: Option<String>,
    /// Every tag passed over during the scan, with the reason
    pub skipped: Vec<BoundaryWarning>,
}

/// Determines the current version from tag history and the bump level
/// requested by commits since then
pub struct VersionResolver<'a, R: Repository> {
    repo: &'a R,
    tag_prefix: String,
    analyzer: CommitAnalyzer,
}

impl<'a, R: Repository> VersionResolver<'a, R> {
    /// Create a resolver with no tag prefix and the default markers
    pub fn new(repo: &'a R) -> Self {
        VersionResolver {
            repo,
            tag_prefix: String::new(),
            analyzer: CommitAnalyzer::default(),
        }
    }

    /// Only consider tags starting with `prefix`; the rest is parsed as the version
    pub fn with_tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tag_prefix = prefix.into();
        self
    }

    pub fn with_markers(mut self, markers: MarkersConfig) -> Self {
        self.analyzer = CommitAnalyzer::new(markers);
        self
    }

    /// The current version: highest semver tag reachable from HEAD, or 0.0.0
    pub fn current(&self) -> Result<Version> {
        Ok(self.resolve()?.version)
    }

    /// Scan all tags and pick the highest version contained in the current branch.
    ///
    /// Tags are visited in reverse listing order. A tag replaces the baseline only
    /// when it parses, has strictly higher precedence, and is reachable from HEAD;
    /// among equal versions the first one visited is kept. A failed reachability
    /// query only disqualifies that tag.
    ///
    /// # Returns
    /// * `Ok(Resolution)` - The chosen version and the skipped tags
    /// * `Err` - If the tag list cannot be read
    pub fn resolve(&self) -> Result<Resolution> {
        let tags = self.repo.list_tags()?;

        let mut version = Version::initial();
        let mut source: Option<String> = None;
        let mut skipped = Vec::new();

        for tag in tags.iter().rev() {
            if tag.is_empty() {
                continue;
            }

            let candidate = match self.parse_tag(tag) {
                Ok(candidate) => candidate,
                Err(reason) => {
                    tracing::debug!("Skipping tag {}: {}", tag, reason);
                    skipped.push(BoundaryWarning::UnparsableTag {
                        tag: tag.clone(),
                        reason,
                    });
                    continue;
                }
            };

            if !candidate.is_newer_than(&version) {
                tracing::debug!("Skipping tag {}: not newer than {}", tag, version);
                skipped.push(BoundaryWarning::NotNewer {
                    tag: tag.clone(),
                    baseline: version.to_string(),
                });
                continue;
            }

            match self.repo.is_reachable_from_head(tag) {
                Ok(true) => {}
                Ok(false) => {
                    tracing::debug!("Skipping tag {}: not in current branch", tag);
                    skipped.push(BoundaryWarning::NotReachable { tag: tag.clone() });
                    continue;
                }
                Err(e) => {
                    tracing::warn!("Cannot check branch containment of tag {}: {}", tag, e);
                    skipped.push(BoundaryWarning::ReachabilityCheckFailed {
                        tag: tag.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            }

            tracing::debug!("Tag {} is the new baseline", tag);
            version = candidate;
            source = Some(tag.clone());
        }

        Ok(Resolution {
            version,
            tag: source,
            skipped,
        })
    }

    /// Classify commits made after the tag of `baseline` by their bump markers
    pub fn since(&self, baseline: &Version) -> Result<BumpMarkers> {
        self.since_tag(&self.tag_name(baseline))
    }

    /// Like [`since`](Self::since), for a tag name as returned in [`Resolution::tag`]
    pub fn since_tag(&self, tag: &str) -> Result<BumpMarkers> {
        let summaries = self.repo.commit_summaries_since(tag)?;
        tracing::debug!("{} commits since {}", summaries.len(), tag);
        Ok(self.analyzer.analyze(&summaries))
    }

    /// Tag name under which `version` is published
    pub fn tag_name(&self, version: &Version) -> String {
        format!("{}{}", self.tag_prefix, version)
    }

    fn parse_tag(&self, tag: &str) -> std::result::Result<Version, String> {
        let raw = tag
            .strip_prefix(self.tag_prefix.as_str())
            .ok_or_else(|| format!("missing prefix '{}'", self.tag_prefix))?;
        Version::parse(raw).map_err(|e| e.to_string())
    }
}
