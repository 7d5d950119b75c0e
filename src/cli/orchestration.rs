//! Main workflow orchestration logic
//!
//! Resolves the current version, picks a bump operation, applies it and
//! optionally persists the result. Kept apart from argument parsing so the
//! workflow can be driven programmatically and against a mock repository.

use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;

use crate::analyzer::{BumpMarkers, VersionResolver};
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{BumpOperation, Version};
use crate::error::{Result, ScmVersionError};
use crate::git::Repository;

/// Default file receiving the computed version
pub const DEFAULT_VERSION_FILE: &str = "./VERSION";

/// Arguments for the version workflow
///
/// Mirrors the CLI Args without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    /// Report the current version and stop
    pub current: bool,
    /// Derive the bump from commit markers, defaulting to patch
    pub auto: bool,
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    /// Pre-release channel to enter or advance
    pub pre: Option<String>,
    /// Build metadata to attach
    pub build: Option<String>,
    /// Write the version file and create the tag
    pub write: bool,
    pub file: PathBuf,
    /// Fetch from the remote first (also subject to config)
    pub fetch: bool,
}

impl Default for WorkflowArgs {
    fn default() -> Self {
        WorkflowArgs {
            current: false,
            auto: false,
            major: false,
            minor: false,
            patch: false,
            pre: None,
            build: None,
            write: false,
            file: PathBuf::from(DEFAULT_VERSION_FILE),
            fetch: true,
        }
    }
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version resolved from tag history
    pub current: Version,
    /// Operation that was applied, if any
    pub operation: Option<BumpOperation>,
    /// Bumped version; `None` when only the current version was requested
    pub updated: Option<Version>,
    /// Tag created for the updated version
    pub tag: Option<String>,
    /// Whether the tag was pushed to the remote
    pub pushed: bool,
    /// Non-fatal warnings collected along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Pick the bump operation.
///
/// Precedence: major (flag or marker) > minor (flag or marker) > patch
/// (flag or `--auto`) > prerelease > build.
pub fn select_operation(args: &WorkflowArgs, markers: BumpMarkers) -> Option<BumpOperation> {
    if args.major || markers.has_major {
        Some(BumpOperation::Major)
    } else if args.minor || markers.has_minor {
        Some(BumpOperation::Minor)
    } else if args.patch || args.auto {
        Some(BumpOperation::Patch)
    } else if let Some(label) = args.pre.as_ref().filter(|l| !l.is_empty()) {
        Some(BumpOperation::Prerelease(label.clone()))
    } else {
        args.build
            .as_ref()
            .filter(|l| !l.is_empty())
            .map(|label| BumpOperation::Build(label.clone()))
    }
}

/// Main version workflow
///
/// 1. Fetch from the configured remote
/// 2. Resolve the current version from tags
/// 3. Select and apply a bump
/// 4. With `write`: write the version file, create the tag, push it
///
/// # Returns
/// * `Ok(WorkflowResult)` - What was resolved and done
/// * `Err(ScmVersionError::NoOp)` - If the bump left the version's precedence unchanged
/// * `Err` - A fetch, resolution, bump, or write failure
pub fn run_workflow<R: Repository>(
    args: &WorkflowArgs,
    repo: &R,
    config: &Config,
) -> Result<WorkflowResult> {
    if args.fetch && config.behavior.fetch {
        let remote = &config.tags.remote;
        tracing::debug!("Fetching from {}", remote);
        repo.fetch(remote).map_err(|e| {
            ScmVersionError::repository(format!("Fetch from '{}' failed: {}", remote, e))
        })?;
    }

    let resolver = VersionResolver::new(repo)
        .with_tag_prefix(config.tags.prefix.clone())
        .with_markers(config.markers.clone());
    let resolution = resolver.resolve()?;
    let current = resolution.version;
    tracing::info!("Current version: {}", current);

    let mut result = WorkflowResult {
        current: current.clone(),
        operation: None,
        updated: None,
        tag: None,
        pushed: false,
        warnings: resolution.skipped,
    };

    if args.current {
        return Ok(result);
    }

    let markers = match (&resolution.tag, args.auto) {
        (_, false) => BumpMarkers::default(),
        (Some(tag), true) => resolver.since_tag(tag)?,
        (None, true) => {
            result.warnings.push(BoundaryWarning::NoBaselineTag {
                version: current.to_string(),
            });
            BumpMarkers::default()
        }
    };

    let operation = select_operation(args, markers);
    let updated = match &operation {
        Some(op) => {
            tracing::debug!("Bump {}", op);
            current.bump(op)?
        }
        None => current.clone(),
    };

    // build metadata alone does not make a new version
    if updated.cmp_precedence(&current) == Ordering::Equal {
        return Err(ScmVersionError::no_op(&updated));
    }

    tracing::info!("Updated version: {}", updated);
    result.operation = operation;
    result.updated = Some(updated.clone());

    if !args.write {
        return Ok(result);
    }

    let text = updated.to_string();
    fs::write(&args.file, &text)?;
    tracing::debug!("Wrote {} to {}", text, args.file.display());

    let tag = resolver.tag_name(&updated);
    repo.create_tag(&tag, &config.tags.tag_message(&text))?;
    result.tag = Some(tag.clone());

    if config.behavior.push {
        repo.push_tag(&config.tags.remote, &tag)?;
        result.pushed = true;
    }

    Ok(result)
}
