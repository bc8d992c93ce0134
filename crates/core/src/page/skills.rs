//! Scroll-triggered fills for the `.skill-progress` bars.

/// Class of the progress bars that fill when scrolled into view.
pub const PROGRESS_SELECTOR: &str = ".skill-progress";
/// Attribute holding the bar's percentage.
pub const PROGRESS_ATTRIBUTE: &str = "data-progress";
/// Fraction of a bar that must be visible before it fills.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// CSS width for a `data-progress` value, e.g. `"85"` → `"85%"`.
pub fn progress_width(raw: &str) -> Option<String> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then(|| format!("{value}%"))
}
