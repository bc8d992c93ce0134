//! Manual interpolation for properties the surface cannot animate natively.
//!
//! The browser drives [`BarFill::tick`] from its per-frame callback; tests
//! drive it with explicit timestamps.

use serde::{Deserialize, Serialize};

/// Default duration of a bar fill, in milliseconds.
pub const BAR_FILL_DURATION_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// One sample of a running fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillFrame {
    pub width: f64,
    /// No further ticks are needed once this is set.
    pub done: bool,
}

/// Width animation of a single bar: `{ target, start, duration }` advanced
/// by [`tick`](Self::tick).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFill {
    target_width: f64,
    start_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

impl BarFill {
    pub fn new(target_width: f64, start_ms: f64) -> Self {
        Self {
            target_width,
            start_ms,
            duration_ms: BAR_FILL_DURATION_MS,
            ease: Ease::OutCubic,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn target_width(&self) -> f64 {
        self.target_width
    }

    /// Progress in `0..=1` at `now_ms`. A non-positive duration completes
    /// immediately.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn tick(&self, now_ms: f64) -> FillFrame {
        let progress = self.progress(now_ms);
        FillFrame {
            width: self.target_width * self.ease.apply(progress),
            done: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_cubic_midpoint() {
        assert!((Ease::OutCubic.apply(0.5) - 0.875).abs() < 1e-12);
        assert_eq!(Ease::OutCubic.apply(0.0), 0.0);
        assert_eq!(Ease::OutCubic.apply(1.0), 1.0);
    }

    #[test]
    fn ease_clamps_input() {
        assert_eq!(Ease::Linear.apply(-1.0), 0.0);
        assert_eq!(Ease::InOutCubic.apply(2.0), 1.0);
    }

    #[test]
    fn fill_halfway_is_eased() {
        let fill = BarFill::new(100.0, 0.0);
        let frame = fill.tick(500.0);
        assert!((frame.width - 87.5).abs() < 0.5, "width = {}", frame.width);
        assert!(!frame.done);
    }

    #[test]
    fn fill_terminates_at_target() {
        let fill = BarFill::new(576.0, 1_000.0);
        assert_eq!(fill.tick(1_000.0).width, 0.0);
        let end = fill.tick(2_000.0);
        assert_eq!(end.width, 576.0);
        assert!(end.done);
        assert!(fill.tick(9_999.0).done);
    }

    #[test]
    fn fill_before_start_stays_at_zero() {
        let fill = BarFill::new(100.0, 500.0);
        assert_eq!(fill.tick(100.0).width, 0.0);
    }

    #[test]
    fn fill_width_is_monotonic() {
        let fill = BarFill::new(300.0, 0.0);
        let mut last = 0.0;
        for ms in (0..=1000).step_by(16) {
            let w = fill.tick(f64::from(ms)).width;
            assert!(w >= last);
            last = w;
        }
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let frame = BarFill::new(50.0, 0.0).with_duration(0.0).tick(0.0);
        assert_eq!(frame.width, 50.0);
        assert!(frame.done);
    }
}
