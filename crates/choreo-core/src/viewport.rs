//! Viewport metrics and the motion accessibility preference.

use serde::{Deserialize, Serialize};

/// Width below which the layout is considered narrow (the original
/// site's mobile breakpoint).
pub const NARROW_BREAKPOINT: f64 = 768.0;

/// Current viewport dimensions in px, read fresh on each computation.
///
/// Negative or non-finite inputs are clamped to zero so downstream
/// progress math degrades to rest-state output instead of NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    pub width: f64,
    pub height: f64,
}

impl ViewportMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Whether the viewport is narrow (mobile-sized).
    #[inline]
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_BREAKPOINT
    }
}

/// Live reduced-motion preference. When reduced, transition specs are
/// dropped and secondary motion (float, parallax, rotation, blur) is
/// suppressed; opacity and position end-states are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    #[inline]
    pub fn is_reduced(&self) -> bool {
        matches!(self, MotionPreference::Reduced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitizes_degenerate_dimensions() {
        let vp = ViewportMetrics::new(-100.0, f64::NAN);
        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 0.0);
        assert!(vp.is_narrow());
    }

    #[test]
    fn test_narrow_breakpoint() {
        assert!(ViewportMetrics::new(600.0, 900.0).is_narrow());
        assert!(!ViewportMetrics::new(1280.0, 800.0).is_narrow());
    }
}
