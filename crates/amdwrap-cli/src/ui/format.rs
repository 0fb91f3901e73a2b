//! Formatting utilities for durations and run summaries.

use console::Term;
use owo_colors::OwoColorize;
use std::time::Duration;

use super::colors_enabled;

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use amdwrap_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Per-run module counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Modules rewritten into a define call
    pub wrapped: usize,
    /// Modules left as they were (opted out, already wrapped, plain scripts)
    pub skipped: usize,
    /// Modules that could not be read, parsed or written
    pub failed: usize,
    /// Advisory warnings raised across all modules
    pub warnings: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.wrapped + self.skipped + self.failed
    }

    /// One-line description, e.g. `3 wrapped, 1 skipped, 0 failed (4 modules)`.
    pub fn describe(&self) -> String {
        let mut line = format!(
            "{} wrapped, {} skipped, {} failed ({} module{})",
            self.wrapped,
            self.skipped,
            self.failed,
            self.total(),
            if self.total() == 1 { "" } else { "s" }
        );
        if self.warnings > 0 {
            line.push_str(&format!(", {} warning{}", self.warnings, if self.warnings == 1 { "" } else { "s" }));
        }
        line
    }
}

/// Print a run summary to stderr.
pub fn print_summary(summary: &RunSummary, elapsed: Duration) {
    let width = (Term::stderr().size().1 as usize).min(60);
    let line = summary.describe();
    let time = format!("in {}", format_duration(elapsed));

    eprintln!("{}", "─".repeat(width));
    if !colors_enabled() {
        eprintln!("  {} {}", line, time);
    } else if summary.failed > 0 {
        eprintln!("  {} {}", line.red().bold(), time.dimmed());
    } else {
        eprintln!("  {} {}", line.green(), time.dimmed());
    }
}
