//! Interpolation helpers and transition timing specs.
//!
//! Every ratio taken against a scroll budget or step size goes through
//! [`safe_ratio`] so a zero or negative denominator degrades to 0
//! instead of producing NaN or infinity.

use serde::{Deserialize, Serialize};

/// Clamp a value into [0, 1].
#[inline]
pub fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Linear interpolation between two values.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Progress ratio `num / den` clamped into [0, 1].
///
/// Returns 0 when the denominator is zero, negative, or not finite.
#[inline]
pub fn safe_ratio(num: f64, den: f64) -> f64 {
    if !(den > 0.0) || !num.is_finite() {
        return 0.0;
    }
    clamp01(num / den)
}

/// Timing curve for a render-layer transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingCurve {
    EaseOut,
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl TimingCurve {
    /// The smooth deceleration curve used for section-level transitions,
    /// cubic-bezier(0.23, 1, 0.32, 1).
    pub const SMOOTH: TimingCurve = TimingCurve::CubicBezier {
        x1: 0.23,
        y1: 1.0,
        x2: 0.32,
        y2: 1.0,
    };

    /// The gentle curve used for card entrances,
    /// cubic-bezier(0.25, 0.46, 0.45, 0.94).
    pub const CARD: TimingCurve = TimingCurve::CubicBezier {
        x1: 0.25,
        y1: 0.46,
        x2: 0.45,
        y2: 0.94,
    };
}

/// Transition spec handed to the render layer along with an animation
/// state. `None` at the call sites means "apply instantly" (reduced
/// motion).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub duration_ms: u64,
    pub curve: TimingCurve,
    pub delay_ms: u64,
}

impl TransitionSpec {
    /// Section-level transition with the smooth curve and no delay.
    pub fn smooth(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            curve: TimingCurve::SMOOTH,
            delay_ms: 0,
        }
    }

    /// Card entrance transition, optionally staggered.
    pub fn card(duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            duration_ms,
            curve: TimingCurve::CARD,
            delay_ms,
        }
    }

    /// Plain ease-out, used for card entrances on narrow viewports.
    pub fn ease_out(duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            duration_ms,
            curve: TimingCurve::EaseOut,
            delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0)).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_safe_ratio_guards() {
        assert_eq!(safe_ratio(50.0, 0.0), 0.0);
        assert_eq!(safe_ratio(50.0, -10.0), 0.0);
        assert_eq!(safe_ratio(f64::INFINITY, 100.0), 0.0);
        assert_eq!(safe_ratio(f64::NAN, 100.0), 0.0);
        assert_eq!(safe_ratio(50.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_safe_ratio_clamps() {
        assert_eq!(safe_ratio(150.0, 100.0), 1.0);
        assert_eq!(safe_ratio(-10.0, 100.0), 0.0);
        assert!((safe_ratio(25.0, 100.0) - 0.25).abs() < 1e-9);
    }
}
