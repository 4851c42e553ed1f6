//! The frame pipeline: one scroll sample in, one animation state per
//! section out.
//!
//! [`Choreographer::frame`] is the engine's single entry point. It is a
//! pure function of the sample, the viewport, and the motion
//! preference; it owns no per-frame mutable state, so scrubbing the
//! scroll offset back and forth always reproduces the same output.

use serde::Serialize;
use tracing::trace;

use crate::config::{ChoreoConfig, RevealConfig};
use crate::easing::ease_in_out_cubic;
use crate::phase::{self, Phase};
use crate::reveal::{self, RevealState};
use crate::section::{PhaseStrategy, Track};
use crate::tracker::ScrollSample;
use crate::transform::{
    default_active, gated_slide_in, generic_anticipation, generic_exit, staggered_reveal,
    AnimationState,
};
use crate::viewport::{MotionPreference, ViewportMetrics};

/// Card reveal output for the staggered section: the discrete state
/// plus a concrete animation state per card and for the trailing
/// call-to-action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealFrame {
    pub state: RevealState,
    pub cards: Vec<AnimationState>,
    pub cta: AnimationState,
}

/// Everything the render layer needs to draw one section this frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFrame {
    pub index: usize,
    pub name: String,
    pub phase: Phase,
    pub state: AnimationState,
    /// Present only for the staggered-reveal section.
    pub reveal: Option<RevealFrame>,
    /// Whether to show the scroll hint arrow under this section.
    pub hint_arrow: bool,
}

/// Drives the per-frame choreography for a [`Track`].
#[derive(Debug, Clone)]
pub struct Choreographer {
    track: Track,
    reveal: RevealConfig,
}

impl Choreographer {
    pub fn new(config: &ChoreoConfig) -> Self {
        Self {
            track: Track::standard(config.track.clone()),
            reveal: config.reveal.clone(),
        }
    }

    /// Build a choreographer over an explicit track.
    pub fn with_track(track: Track, reveal: RevealConfig) -> Self {
        Self { track, reveal }
    }

    #[inline]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Total scrollable height for the current viewport; feeds the
    /// scroll tracker's clamp range.
    #[inline]
    pub fn track_height(&self, viewport: &ViewportMetrics) -> f64 {
        self.track.height(viewport)
    }

    /// Compute this frame's animation state for every section.
    pub fn frame(
        &self,
        sample: ScrollSample,
        viewport: &ViewportMetrics,
        motion: MotionPreference,
    ) -> Vec<SectionFrame> {
        let y = sample.offset;
        let budget = self.track.budget(viewport);
        let count = self.track.len();
        let spread = self.track.config().phase_spread;
        let eased_local = ease_in_out_cubic(phase::local_progress(y, budget));
        let handoff = self.track.handoff_threshold(viewport);

        trace!(offset = y, budget, "choreographing frame");

        self.track
            .sections()
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let section_phase = phase::resolve(index, y, budget, count, spread);
                let start = self.track.section_start(index, viewport);

                let (state, reveal) = match &spec.strategy {
                    PhaseStrategy::Default { parallax, late_start } => {
                        let state = match section_phase {
                            Phase::Active { eased, .. } => {
                                default_active(y - start, eased, *parallax, *late_start, motion)
                            }
                            Phase::Exit { progress } => generic_exit(progress, viewport, motion),
                            Phase::Anticipation { progress } => {
                                generic_anticipation(progress, motion)
                            }
                        };
                        (state, None)
                    }
                    PhaseStrategy::StaggeredReveal => {
                        // The transform resolves its own pre-start, pinned
                        // and exit regimes from the raw offset; the phase
                        // enum is reported but does not drive it.
                        let handoff = handoff.unwrap_or(start + budget);
                        let state = staggered_reveal(
                            y,
                            start,
                            self.track.step_size(viewport),
                            self.track.config().services_steps.saturating_sub(1),
                            handoff,
                            eased_local,
                            viewport,
                            motion,
                        );
                        let reveal_state =
                            reveal::resolve(y - start, budget, viewport, &self.reveal);
                        let cards = (0..self.reveal.card_count)
                            .map(|card| {
                                reveal::card_state(card, reveal_state, viewport, &self.reveal, motion)
                            })
                            .collect();
                        let cta = reveal::cta_state(reveal_state, viewport, &self.reveal, motion);
                        (
                            state,
                            Some(RevealFrame {
                                state: reveal_state,
                                cards,
                                cta,
                            }),
                        )
                    }
                    PhaseStrategy::GatedSlideIn => {
                        let state = match handoff {
                            Some(handoff) => gated_slide_in(
                                y,
                                handoff,
                                self.track.config().slide_window_px,
                                viewport,
                                motion,
                            ),
                            // No staggered section to hand off from: fall
                            // back to the generic phase behavior.
                            None => match section_phase {
                                Phase::Active { eased, .. } => {
                                    default_active(y - start, eased, 0.0, None, motion)
                                }
                                Phase::Exit { progress } => {
                                    generic_exit(progress, viewport, motion)
                                }
                                Phase::Anticipation { progress } => {
                                    generic_anticipation(progress, motion)
                                }
                            },
                        };
                        (state, None)
                    }
                };

                // Shown for the active section only; the last section
                // has nothing to scroll toward.
                let hint_arrow =
                    matches!(section_phase, Phase::Active { .. }) && index + 1 < count;

                SectionFrame {
                    index,
                    name: spec.name.clone(),
                    phase: section_phase,
                    state,
                    reveal,
                    hint_arrow,
                }
            })
            .collect()
    }
}
