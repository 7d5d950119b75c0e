//! Version resolution from tag history and commit marker analysis

pub mod commit_analyzer;
pub mod version_resolver;

pub use commit_analyzer::{BumpMarkers, CommitAnalyzer};
pub use version_resolver::{Resolution, VersionResolver};
