//! Terminal output for status messages and run summaries.
//!
//! Everything here writes to stderr; stdout is reserved for transformed code.
//!
//! # Examples
//!
//! ```no_run
//! use amdwrap_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Wrapped src/Component.js");
//! ui::warning("Mixed default and named exports in src/util.js");
//! ```

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{RunSummary, format_duration, print_summary};
pub use messages::{debug, error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Initialize color support; `--no-color` always wins.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS.store(enabled, Ordering::Relaxed);
    console::set_colors_enabled_stderr(enabled);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
