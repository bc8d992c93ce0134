use serde::{Deserialize, Serialize};

/// Viewport widths at or below this many CSS pixels use the compact profile.
pub const COMPACT_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub label: f64,
    pub value: f64,
    pub title: f64,
}

/// Layout constants for the bar chart, chosen from the current viewport width.
///
/// A profile is computed fresh for every rebuild and never mutated. The
/// `width`/`height` are the chart's own coordinate space (its `viewBox`), not
/// the browser viewport: on compact screens the SVG is scaled down by the
/// page, so the compact profile uses larger fonts and leaves more room for
/// labels to stay legible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportProfile {
    pub is_compact: bool,
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    /// Scales every filled bar relative to the chart width.
    pub bar_width_multiplier: f64,
    /// Extra width added to each background bar.
    pub background_extra: f64,
    pub font_sizes: FontSizes,
}

impl ViewportProfile {
    pub fn standard() -> Self {
        Self {
            is_compact: false,
            width: 800.0,
            height: 500.0,
            margins: Margins {
                top: 40.0,
                right: 40.0,
                bottom: 60.0,
                left: 120.0,
            },
            bar_width_multiplier: 1.0,
            background_extra: 0.0,
            font_sizes: FontSizes {
                label: 16.0,
                value: 14.0,
                title: 24.0,
            },
        }
    }

    pub fn compact() -> Self {
        Self {
            is_compact: true,
            width: 800.0,
            height: 560.0,
            margins: Margins {
                top: 50.0,
                right: 60.0,
                bottom: 40.0,
                left: 170.0,
            },
            bar_width_multiplier: 0.9,
            background_extra: 8.0,
            font_sizes: FontSizes {
                label: 22.0,
                value: 20.0,
                title: 30.0,
            },
        }
    }

    /// Pick the profile for a viewport `viewport_width` CSS pixels wide.
    pub fn for_width(viewport_width: f64, breakpoint: f64) -> Self {
        if viewport_width <= breakpoint {
            Self::compact()
        } else {
            Self::standard()
        }
    }

    pub fn chart_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    pub fn chart_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }
}

impl Default for ViewportProfile {
    fn default() -> Self {
        Self::standard()
    }
}
