//! Pure formatting functions for UI output.
//!
//! Functions named `format_*` build the text and are unit tested; the
//! `display_*` functions print it.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::Version;

pub fn format_current_version(version: &Version) -> String {
    format!("Current Version: {}", version)
}

pub fn format_updated_version(version: &Version) -> String {
    format!("Updated Version: {}", version)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_current_version(version: &Version) {
    println!("{}", format_current_version(version));
}

pub fn display_updated_version(version: &Version) {
    println!("{}", style(format_updated_version(version)).bold());
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the tags passed over during resolution, one per line.
pub fn display_skipped_tags(skipped: &[BoundaryWarning]) {
    if skipped.is_empty() {
        return;
    }
    println!("{}", style(format!("Skipped {} tags:", skipped.len())).dim());
    for warning in skipped {
        println!("  - {}", warning);
    }
}
