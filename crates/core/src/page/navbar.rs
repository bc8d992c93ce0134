/// Scrolling down past this offset hides the navbar.
pub const HIDE_AFTER_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarPosition {
    Shown,
    Hidden,
}

impl NavbarPosition {
    /// CSS `transform` applied to the navbar.
    pub fn transform(self) -> &'static str {
        match self {
            NavbarPosition::Shown => "translateY(0)",
            NavbarPosition::Hidden => "translateY(-100%)",
        }
    }
}

/// Hide-on-scroll-down state, owned by the scroll handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarScroll {
    last_scroll: f64,
    hide_after: f64,
}

impl NavbarScroll {
    pub fn new(hide_after: f64) -> Self {
        Self {
            last_scroll: 0.0,
            hide_after,
        }
    }

    pub fn on_scroll(&mut self, current: f64) -> NavbarPosition {
        let position = if current > self.last_scroll && current > self.hide_after {
            NavbarPosition::Hidden
        } else {
            NavbarPosition::Shown
        };
        self.last_scroll = current;
        position
    }
}

impl Default for NavbarScroll {
    fn default() -> Self {
        Self::new(HIDE_AFTER_PX)
    }
}
