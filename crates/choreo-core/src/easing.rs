//! Pure easing functions for scroll-driven animation.
//!
//! Each function maps a progress value in [0, 1] to an eased value.
//! Inputs are clamped before evaluation; the back ease intentionally
//! overshoots outside [0, 1] near its midpoint.

use serde::{Deserialize, Serialize};

/// Easing curve selector, used by section descriptors and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingKind {
    Linear,
    /// Symmetric cubic: slow start, slow end.
    InOutCubic,
    /// Quartic deceleration, used for section exits.
    OutQuart,
    /// Overshooting ease, used for the contact slide-in.
    InOutBack,
}

impl EasingKind {
    /// Apply the easing function to a progress value.
    ///
    /// The input is clamped to [0, 1]. Output stays in [0, 1] for all
    /// variants except `InOutBack`, which overshoots by design.
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingKind::Linear => t,
            EasingKind::InOutCubic => ease_in_out_cubic(t),
            EasingKind::OutQuart => ease_out_quart(t),
            EasingKind::InOutBack => ease_in_out_back(t),
        }
    }
}

/// Symmetric cubic ease: f(t) = 4t³ for t < 0.5, mirrored above.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// Quartic ease-out: f(t) = 1 - (1-t)⁴
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv
}

/// Back ease in/out with the standard overshoot constants
/// (c1 = 1.70158, c2 = c1 × 1.525). Overshoots below 0 near the start
/// and above 1 near the end before settling.
#[inline]
pub fn ease_in_out_back(t: f64) -> f64 {
    const C1: f64 = 1.70158;
    const C2: f64 = C1 * 1.525;

    if t < 0.5 {
        let u = 2.0 * t;
        (u * u * ((C2 + 1.0) * u - C2)) / 2.0
    } else {
        let u = 2.0 * t - 2.0;
        (u * u * ((C2 + 1.0) * u + C2) + 2.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for easing in [
            EasingKind::Linear,
            EasingKind::InOutCubic,
            EasingKind::OutQuart,
            EasingKind::InOutBack,
        ] {
            assert!((easing.apply(0.0)).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_input_clamped() {
        for easing in [
            EasingKind::Linear,
            EasingKind::InOutCubic,
            EasingKind::OutQuart,
            EasingKind::InOutBack,
        ] {
            assert_eq!(easing.apply(-3.0), easing.apply(0.0));
            assert_eq!(easing.apply(7.5), easing.apply(1.0));
        }
    }

    #[test]
    fn test_monotonic_curves() {
        for easing in [EasingKind::Linear, EasingKind::InOutCubic, EasingKind::OutQuart] {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev - 1e-9, "{:?} not monotonic at t={}", easing, t);
                assert!((0.0..=1.0).contains(&v), "{:?} out of range at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_in_out_cubic_midpoint() {
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_back_ease_overshoots() {
        // Early phase dips below zero, late phase climbs above one.
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for i in 0..=100 {
            let v = ease_in_out_back(i as f64 / 100.0);
            min = min.min(v);
            max = max.max(v);
        }
        assert!(min < 0.0, "expected undershoot, min={}", min);
        assert!(max > 1.0, "expected overshoot, max={}", max);
    }
}
