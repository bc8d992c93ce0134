//! Smooth scrolling for in-page anchor links.

/// Element id an in-page link points at, or `None` for links that leave the
/// page. A bare `#` yields an empty id, which never resolves to an element.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Scroll offset that puts a section's top edge just below the fixed navbar.
pub fn scroll_top(target_offset_top: f64, navbar_height: f64) -> f64 {
    target_offset_top - navbar_height
}
