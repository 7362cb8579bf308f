//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Histogram bar for `count` out of the largest bucket `max_count`
///
/// Non-zero counts always get at least one block.
#[must_use]
pub fn histogram_bar(count: usize, max_count: usize, width: usize) -> String {
    let filled = if max_count == 0 {
        0
    } else {
        (count * width / max_count).max(usize::from(count > 0))
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width.saturating_sub(filled)))
}

/// "guess" or "guesses"
#[must_use]
pub const fn guesses_label(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
