//! CLI output formatting for catalog runs.
//!
//! Format functions are pure — they build `Vec<String>` lines with no I/O —
//! and each has a `print_*` wrapper that writes to stdout. This keeps the
//! display testable and the call sites one-liners.
//!
//! ```text
//! Made spring/floral/PRD-001
//! Made winter/PRD-002
//! Skipped autumn/PRD-007: missing back, detail 2 image(s)
//! Skipped winter/PRD-001: thumbs.jpg already exists
//!
//! 2 cards made, 2 directories skipped
//! ```

use crate::process::RunSummary;

/// Render the run results as display lines.
pub fn format_summary(summary: &RunSummary) -> Vec<String> {
    let mut lines = Vec::new();

    for dir in &summary.processed {
        lines.push(format!("Made {}", dir.display()));
    }
    for skip in &summary.skipped {
        lines.push(format!("Skipped {}: {}", skip.dir.display(), skip.reason));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "{} {} made, {} {} skipped",
        summary.processed.len(),
        plural(summary.processed.len(), "card", "cards"),
        summary.skipped.len(),
        plural(summary.skipped.len(), "directory", "directories"),
    ));

    lines
}

pub fn print_summary(summary: &RunSummary) {
    for line in format_summary(summary) {
        println!("{line}");
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
