//! Card reveal sub-engine for the services section.
//!
//! Reveal state is a pure function of relative scroll within the
//! section, never of wall-clock time: the visible set is always a
//! prefix of the card list, growing while scrolling forward and
//! shrinking when scrolling back below a card's threshold. Stagger is
//! expressed as a transition delay, not a timer.

use serde::Serialize;

use crate::config::RevealConfig;
use crate::timing::TransitionSpec;
use crate::transform::AnimationState;
use crate::viewport::{MotionPreference, ViewportMetrics};

/// Which cards (and the trailing call-to-action) are visible.
///
/// `revealed` is the length of the visible prefix: card `k` is visible
/// iff `k < revealed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RevealState {
    pub revealed: usize,
    pub cta_visible: bool,
}

impl RevealState {
    #[inline]
    pub fn is_visible(&self, card: usize) -> bool {
        card < self.revealed
    }
}

/// Discrete reveal step size: half a viewport per step, a third on
/// narrow viewports for more gradual pacing.
#[inline]
fn step_size(viewport: &ViewportMetrics) -> f64 {
    if viewport.is_narrow() {
        viewport.height / 3.0
    } else {
        viewport.height / 2.0
    }
}

/// Resolve the reveal state for a relative scroll position within the
/// services section.
///
/// `rel` is scroll distance past the section start; `budget` is the
/// section's total scroll budget. Outside the active window (either
/// direction) the state is empty.
pub fn resolve(rel: f64, budget: f64, viewport: &ViewportMetrics, config: &RevealConfig) -> RevealState {
    if !rel.is_finite() || rel < 0.0 || rel > budget || viewport.height <= 0.0 {
        return RevealState::default();
    }

    let unit = viewport.height * config.min_unit_fraction;
    let step = {
        let size = step_size(viewport);
        if size > 0.0 {
            (rel / size).floor() as usize
        } else {
            0
        }
    };

    // Both thresholds grow with the card index, so the visible set is
    // always a prefix.
    let mut revealed = 0;
    for card in 0..config.card_count {
        let required = (card + 1) as f64;
        if rel >= required * unit && step >= card + 1 {
            revealed = card + 1;
        } else {
            break;
        }
    }

    let cta_visible = revealed == config.card_count
        && step >= config.card_count + 1
        && rel >= (config.card_count + 1) as f64 * unit;

    RevealState {
        revealed,
        cta_visible,
    }
}

/// Entrance duration per viewport class.
fn card_transition(index: usize, viewport: &ViewportMetrics, config: &RevealConfig) -> TransitionSpec {
    let delay = index as u64 * config.stagger_ms;
    if viewport.is_narrow() {
        TransitionSpec::ease_out(1000, delay)
    } else {
        TransitionSpec::card(1500, delay)
    }
}

/// Animation state for one service card.
///
/// Hidden cards wait in position-specific entrance poses: the first
/// rises from below, the second enters from the right with a slight
/// rotation, the third mirrors it from the left. Reveals are staggered
/// by `index × stagger_ms` via the transition delay.
pub fn card_state(
    index: usize,
    state: RevealState,
    viewport: &ViewportMetrics,
    config: &RevealConfig,
    motion: MotionPreference,
) -> AnimationState {
    let narrow = viewport.is_narrow();
    let transition = if motion.is_reduced() {
        None
    } else {
        Some(card_transition(index, viewport, config))
    };

    if state.is_visible(index) {
        return AnimationState {
            transition,
            ..AnimationState::rest()
        };
    }

    let (translate_x, translate_y, rotate_deg, scale) = match index {
        0 => (0.0, if narrow { 60.0 } else { 80.0 }, 0.0, if narrow { 0.95 } else { 0.9 }),
        1 => {
            if narrow {
                (60.0, 0.0, 0.0, 0.9)
            } else {
                (100.0, 0.0, 20.0, 0.85)
            }
        }
        _ => {
            if narrow {
                (-60.0, 0.0, 0.0, 0.9)
            } else {
                (-100.0, 0.0, -20.0, 0.85)
            }
        }
    };

    AnimationState {
        translate_x,
        translate_y,
        scale,
        rotate_deg: if motion.is_reduced() { 0.0 } else { rotate_deg },
        opacity: 0.0,
        blur_px: if motion.is_reduced() {
            0.0
        } else if narrow {
            3.0
        } else {
            6.0
        },
        transition,
        interactive: false,
    }
}

/// Animation state for the trailing call-to-action control.
pub fn cta_state(
    state: RevealState,
    viewport: &ViewportMetrics,
    config: &RevealConfig,
    motion: MotionPreference,
) -> AnimationState {
    let narrow = viewport.is_narrow();
    // The call-to-action continues the card stagger sequence.
    let delay = config.card_count as u64 * config.stagger_ms;
    let transition = if motion.is_reduced() {
        None
    } else if narrow {
        Some(TransitionSpec::ease_out(1000, delay))
    } else {
        Some(TransitionSpec::card(1500, delay))
    };

    if state.cta_visible {
        return AnimationState {
            transition,
            ..AnimationState::rest()
        };
    }

    AnimationState {
        translate_x: 0.0,
        translate_y: if narrow { 30.0 } else { 40.0 },
        scale: 0.8,
        rotate_deg: 0.0,
        opacity: 0.0,
        blur_px: if motion.is_reduced() { 0.0 } else { 4.0 },
        transition,
        interactive: false,
    }
}
