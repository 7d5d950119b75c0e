//! User interface module - terminal output for workflow results.
//!
//! - `formatter` - Formatting and printing of individual messages
//! - This module - Reporting a whole workflow run

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_current_version, display_error, display_skipped_tags,
    display_status, display_success, display_updated_version,
};

use crate::boundary::BoundaryWarning;
use crate::cli::WorkflowResult;

/// Report a finished workflow run.
///
/// Skipped tags are listed only when `verbose` is set; other warnings are always shown.
pub fn display_workflow_result(result: &WorkflowResult, verbose: bool) {
    let (skipped, warnings): (Vec<&BoundaryWarning>, Vec<&BoundaryWarning>) =
        result.warnings.iter().partition(|w| w.tag().is_some());

    for warning in warnings
        .into_iter()
        .chain(skipped.iter().copied().filter(|w| is_alarming(w)))
    {
        display_boundary_warning(warning);
    }

    if verbose {
        let skipped: Vec<BoundaryWarning> = skipped.into_iter().cloned().collect();
        display_skipped_tags(&skipped);
    }

    display_current_version(&result.current);

    let Some(updated) = &result.updated else {
        return;
    };
    display_updated_version(updated);

    match &result.tag {
        Some(tag) if result.pushed => display_success(&format!("Created and pushed tag {}", tag)),
        Some(tag) => display_success(&format!("Created tag {}", tag)),
        None => display_status("No write requested"),
    }
}

/// Per-tag problems worth surfacing even without `--debug`
fn is_alarming(warning: &BoundaryWarning) -> bool {
    matches!(warning, BoundaryWarning::ReachabilityCheckFailed { .. })
}
