//! Transform synthesis: phase + local progress → concrete animation
//! state for one section.
//!
//! All outputs are recomputed from scratch each frame; nothing here is
//! mutated across frames. Every ratio is clamped (see `timing`), so a
//! degenerate viewport produces rest-state output rather than NaN.

use std::f64::consts::PI;

use serde::Serialize;

use crate::easing::{ease_in_out_back, ease_in_out_cubic, ease_out_quart};
use crate::timing::{clamp01, safe_ratio, TransitionSpec};
use crate::viewport::{MotionPreference, ViewportMetrics};

/// The sole output artifact consumed by the render layer. Position in
/// px, rotation in degrees, opacity in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationState {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_deg: f64,
    pub opacity: f64,
    pub blur_px: f64,
    pub transition: Option<TransitionSpec>,
    /// Whether the section may intercept pointer interaction.
    pub interactive: bool,
}

impl AnimationState {
    /// Identity transform, fully visible and interactive.
    pub fn rest() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate_deg: 0.0,
            opacity: 1.0,
            blur_px: 0.0,
            transition: None,
            interactive: true,
        }
    }
}

/// Drop the transition spec under reduced motion.
#[inline]
fn transition(motion: MotionPreference, spec: TransitionSpec) -> Option<TransitionSpec> {
    if motion.is_reduced() {
        None
    } else {
        Some(spec)
    }
}

/// Active-phase transform for a default-strategy section.
///
/// `rel` is the scroll distance into the section's budget, `eased` the
/// cubic-eased local progress. A `late_start` fraction keeps the
/// section visually stable until that share of the window has passed,
/// then fades over the remainder (the about section's gentler
/// hand-off).
pub fn default_active(
    rel: f64,
    eased: f64,
    parallax: f64,
    late_start: Option<f64>,
    motion: MotionPreference,
) -> AnimationState {
    if let Some(start) = late_start {
        let late = safe_ratio(eased - start, 1.0 - start);
        return AnimationState {
            translate_x: 0.0,
            translate_y: if motion.is_reduced() { 0.0 } else { -rel * parallax },
            scale: 1.0 - late * 0.02,
            rotate_deg: 0.0,
            opacity: clamp01(1.0 - late * 0.6),
            blur_px: 0.0,
            transition: transition(motion, TransitionSpec::smooth(600)),
            interactive: true,
        };
    }

    let float_y = if motion.is_reduced() {
        0.0
    } else {
        (eased * 2.0 * PI).sin() * 2.0
    };
    AnimationState {
        translate_x: 0.0,
        translate_y: if motion.is_reduced() {
            0.0
        } else {
            -rel * parallax + float_y
        },
        scale: 1.0 - eased * 0.015,
        rotate_deg: if motion.is_reduced() { 0.0 } else { eased * 0.5 },
        // Never fully fades while active.
        opacity: (1.0 - eased * 0.02).max(0.98),
        blur_px: 0.0,
        transition: transition(motion, TransitionSpec::smooth(900)),
        interactive: true,
    }
}

/// Exit-phase transform: the section leaves upward over the spread
/// window and stops intercepting interaction.
pub fn generic_exit(progress: f64, viewport: &ViewportMetrics, motion: MotionPreference) -> AnimationState {
    let e = ease_out_quart(clamp01(progress));
    AnimationState {
        translate_x: 0.0,
        translate_y: -e * viewport.height,
        scale: 1.0 - e * 0.06,
        rotate_deg: if motion.is_reduced() { 0.0 } else { e * 2.0 },
        opacity: 0.0,
        blur_px: 0.0,
        transition: transition(motion, TransitionSpec::smooth(600)),
        interactive: false,
    }
}

/// Anticipation-phase transform: laid out slightly below its slot,
/// invisible and non-interactive, so activation never pops.
pub fn generic_anticipation(progress: f64, motion: MotionPreference) -> AnimationState {
    let e = ease_in_out_cubic(clamp01(progress));
    AnimationState {
        translate_x: 0.0,
        translate_y: (e * 50.0).max(10.0),
        scale: 1.0 - e * 0.02,
        rotate_deg: 0.0,
        opacity: 0.0,
        blur_px: 0.0,
        transition: transition(motion, TransitionSpec::smooth(600)),
        interactive: false,
    }
}

/// Services-section transform: pinned through its stepped budget with
/// a floating oscillation, then a quart-out exit past the hand-off
/// threshold.
///
/// `eased_local` is the cubic-eased local progress of the global
/// active window, which drives the float texture.
#[allow(clippy::too_many_arguments)]
pub fn staggered_reveal(
    y: f64,
    start: f64,
    step_size: f64,
    pinned_steps: u32,
    handoff: f64,
    eased_local: f64,
    viewport: &ViewportMetrics,
    motion: MotionPreference,
) -> AnimationState {
    let rel = y - start;

    if rel < 0.0 {
        // Budget not reached yet: parallax drift upward, mild scale
        // growth, hidden behind the active layers.
        let r = rel.max(-viewport.height);
        return AnimationState {
            translate_x: 0.0,
            translate_y: if motion.is_reduced() { 0.0 } else { r * 0.15 },
            scale: 1.0 + r.abs() * 0.0001,
            rotate_deg: 0.0,
            opacity: 0.0,
            blur_px: 0.0,
            transition: transition(motion, TransitionSpec::smooth(900)),
            interactive: false,
        };
    }

    let step = if step_size > 0.0 {
        (rel / step_size).floor() as u32
    } else {
        0
    };

    if step < pinned_steps {
        // Pinned in place; the float is texture only.
        let (float_x, float_y) = if motion.is_reduced() {
            (0.0, 0.0)
        } else {
            (
                (eased_local * PI * 1.5).cos(),
                (eased_local * 2.0 * PI).sin() * 3.0,
            )
        };
        return AnimationState {
            translate_x: float_x,
            translate_y: float_y,
            scale: 1.0 + (eased_local * PI).sin() * 0.005,
            rotate_deg: 0.0,
            opacity: 1.0,
            blur_px: 0.0,
            transition: transition(motion, TransitionSpec::smooth(900)),
            interactive: true,
        };
    }

    if y >= handoff {
        // Exit over half a viewport of scroll past the threshold.
        let e = ease_out_quart(safe_ratio(y - handoff, viewport.height * 0.5));
        return AnimationState {
            translate_x: 0.0,
            translate_y: -e * viewport.height,
            scale: 1.0 - e * 0.06,
            rotate_deg: if motion.is_reduced() { 0.0 } else { e * 3.0 },
            opacity: clamp01(1.0 - e),
            blur_px: if motion.is_reduced() { 0.0 } else { e * 1.2 },
            transition: transition(motion, TransitionSpec::smooth(1000)),
            interactive: e == 0.0,
        };
    }

    // Final step but still short of the threshold: hold in place.
    AnimationState {
        transition: transition(motion, TransitionSpec::smooth(900)),
        ..AnimationState::rest()
    }
}

/// Contact-section transform: parked off-screen to the right until the
/// hand-off threshold, back-eased slide-in over the configured scroll
/// window, then pinned at rest regardless of further scrolling.
pub fn gated_slide_in(
    y: f64,
    handoff: f64,
    slide_window: f64,
    viewport: &ViewportMetrics,
    motion: MotionPreference,
) -> AnimationState {
    if y < handoff {
        // Anticipatory scale-up as the threshold nears.
        let proximity = safe_ratio(handoff - y, viewport.height * 0.3);
        return AnimationState {
            translate_x: viewport.width,
            translate_y: 0.0,
            scale: 1.0 + proximity * 0.02,
            rotate_deg: 0.0,
            opacity: 0.0,
            blur_px: if motion.is_reduced() { 0.0 } else { 3.0 },
            transition: transition(motion, TransitionSpec::smooth(900)),
            interactive: false,
        };
    }

    let beyond = y - handoff;
    if beyond < slide_window {
        // All five channels share one easing scalar so they reach rest
        // simultaneously. The back ease may overshoot translate_x past
        // its target; opacity is clamped back into range.
        let e = ease_in_out_back(safe_ratio(beyond, slide_window));
        return AnimationState {
            translate_x: (1.0 - e) * viewport.width,
            translate_y: 0.0,
            scale: 0.95 + e * 0.05,
            rotate_deg: if motion.is_reduced() { 0.0 } else { (1.0 - e) * 2.0 },
            opacity: clamp01(e),
            blur_px: if motion.is_reduced() { 0.0 } else { ((1.0 - e) * 2.0).max(0.0) },
            transition: transition(motion, TransitionSpec::smooth(900)),
            interactive: true,
        };
    }

    // Settled: identity rest state, idempotent for any further offset.
    AnimationState {
        transition: transition(motion, TransitionSpec::smooth(900)),
        ..AnimationState::rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> ViewportMetrics {
        ViewportMetrics::new(1280.0, 800.0)
    }

    #[test]
    fn test_active_opacity_floor() {
        for i in 0..=10 {
            let eased = i as f64 / 10.0;
            let state = default_active(eased * 2400.0, eased, 0.25, None, MotionPreference::Full);
            assert!(state.opacity >= 0.98);
            assert!(state.interactive);
        }
    }

    #[test]
    fn test_late_start_holds_until_threshold() {
        // Below 80% eased progress the about section keeps full scale
        // and opacity; only the parallax translation moves.
        let state = default_active(1000.0, 0.5, 0.15, Some(0.8), MotionPreference::Full);
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.opacity, 1.0);
        assert!((state.translate_y + 150.0).abs() < 1e-9);

        let state = default_active(2000.0, 0.9, 0.15, Some(0.8), MotionPreference::Full);
        assert!(state.scale < 1.0);
        assert!(state.opacity < 1.0);
    }

    #[test]
    fn test_exit_leaves_viewport_and_disables_interaction() {
        let vp = viewport();
        let state = generic_exit(1.0, &vp, MotionPreference::Full);
        assert_eq!(state.translate_y, -vp.height);
        assert_eq!(state.opacity, 0.0);
        assert!(!state.interactive);

        // Partial exit still moves upward monotonically.
        let partial = generic_exit(0.5, &vp, MotionPreference::Full);
        assert!(partial.translate_y < 0.0 && partial.translate_y > -vp.height);
    }

    #[test]
    fn test_anticipation_offset_floor() {
        let state = generic_anticipation(0.0, MotionPreference::Full);
        assert_eq!(state.translate_y, 10.0);
        assert_eq!(state.opacity, 0.0);
        assert!(!state.interactive);

        let far = generic_anticipation(1.0, MotionPreference::Full);
        assert_eq!(far.translate_y, 50.0);
    }

    #[test]
    fn test_services_pinned_before_handoff() {
        let vp = viewport();
        let start = 4800.0;
        let step = 2400.0 / 9.0;
        let handoff = start + 8.0 * step;
        // Step 5 of 9: pinned, only the float moves.
        let y = start + 5.0 * step + 1.0;
        let state = staggered_reveal(y, start, step, 8, handoff, 0.5, &vp, MotionPreference::Full);
        assert!(state.translate_y.abs() <= 3.0);
        assert_eq!(state.opacity, 1.0);
        assert!(state.interactive);
    }

    #[test]
    fn test_services_pre_start_drift_capped_at_one_viewport() {
        let vp = viewport();
        let start = 100_000.0;
        // Far above the section: drift and scale growth stop at one
        // viewport height of relative distance.
        let state =
            staggered_reveal(0.0, start, 266.0, 8, start + 2000.0, 0.0, &vp, MotionPreference::Full);
        assert_eq!(state.translate_y, -vp.height * 0.15);
        assert!((state.scale - 1.08).abs() < 1e-9);
        assert_eq!(state.opacity, 0.0);
        assert!(!state.interactive);
    }

    #[test]
    fn test_services_exit_past_handoff() {
        let vp = viewport();
        let start = 4800.0;
        let step = 2400.0 / 9.0;
        let handoff = start + 8.0 * step;

        // Half a viewport past the threshold: fully exited.
        let state = staggered_reveal(
            handoff + 400.0,
            start,
            step,
            8,
            handoff,
            0.9,
            &vp,
            MotionPreference::Full,
        );
        assert_eq!(state.translate_y, -vp.height);
        assert_eq!(state.opacity, 0.0);
        assert!((state.blur_px - 1.2).abs() < 1e-9);
        assert!(!state.interactive);
    }

    #[test]
    fn test_contact_hidden_before_threshold() {
        let vp = viewport();
        let state = gated_slide_in(0.0, 6933.0, 100.0, &vp, MotionPreference::Full);
        assert_eq!(state.translate_x, vp.width);
        assert_eq!(state.opacity, 0.0);
        assert!(!state.interactive);
        assert!(state.scale > 1.0);
    }

    #[test]
    fn test_contact_slide_midpoint_between_edges() {
        let vp = viewport();
        let handoff = 6933.0;
        let state = gated_slide_in(handoff + 50.0, handoff, 100.0, &vp, MotionPreference::Full);
        // Momentary overshoot from the back ease is permissible, but
        // translate_x must have left both endpoints.
        assert!(state.translate_x < vp.width);
        assert_ne!(state.translate_x, 0.0);
        assert!((0.0..=1.0).contains(&state.opacity));
    }

    #[test]
    fn test_contact_idempotent_past_window() {
        let vp = viewport();
        let handoff = 6933.0;
        let settled = gated_slide_in(handoff + 100.0, handoff, 100.0, &vp, MotionPreference::Full);
        for extra in [0.0, 1.0, 500.0, 10_000.0] {
            let state = gated_slide_in(handoff + 100.0 + extra, handoff, 100.0, &vp, MotionPreference::Full);
            assert_eq!(state, settled);
            assert_eq!(state.translate_x, 0.0);
            assert_eq!(state.opacity, 1.0);
            assert!(state.interactive);
        }
    }

    #[test]
    fn test_reduced_motion_drops_transitions_keeps_end_states() {
        let vp = viewport();
        let handoff = 6933.0;
        for y in [0.0, handoff + 50.0, handoff + 500.0] {
            let full = gated_slide_in(y, handoff, 100.0, &vp, MotionPreference::Full);
            let reduced = gated_slide_in(y, handoff, 100.0, &vp, MotionPreference::Reduced);
            assert!(reduced.transition.is_none());
            assert_eq!(reduced.translate_x, full.translate_x);
            assert_eq!(reduced.opacity, full.opacity);
            assert_eq!(reduced.rotate_deg, 0.0);
            assert_eq!(reduced.blur_px, 0.0);
        }
    }

    #[test]
    fn test_zero_viewport_never_produces_nan() {
        let vp = ViewportMetrics::new(0.0, 0.0);
        let states = [
            default_active(0.0, 0.0, 0.25, None, MotionPreference::Full),
            generic_exit(0.5, &vp, MotionPreference::Full),
            generic_anticipation(0.5, MotionPreference::Full),
            staggered_reveal(0.0, 0.0, 0.0, 8, 0.0, 0.0, &vp, MotionPreference::Full),
            gated_slide_in(0.0, 0.0, 0.0, &vp, MotionPreference::Full),
        ];
        for state in states {
            assert!(state.translate_x.is_finite());
            assert!(state.translate_y.is_finite());
            assert!(state.scale.is_finite());
            assert!(state.opacity.is_finite());
            assert!((0.0..=1.0).contains(&state.opacity));
        }
    }
}
