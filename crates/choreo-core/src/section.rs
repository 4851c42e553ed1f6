//! Declarative section descriptors and track geometry.
//!
//! Each section of the page declares how it behaves relative to the
//! scroll position through a [`PhaseStrategy`] variant; adding a
//! section to the track is a data change, not a code change.

use serde::{Deserialize, Serialize};

use crate::config::TrackConfig;
use crate::viewport::ViewportMetrics;

/// How a section maps scroll phase to its visual transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PhaseStrategy {
    /// Generic anticipation/active/exit behavior with a parallax factor
    /// and an optional late-start fraction that delays the active-phase
    /// fade until that share of the window has passed.
    Default {
        parallax: f64,
        late_start: Option<f64>,
    },
    /// Pinned section whose budget is subdivided into discrete steps;
    /// hosts the card reveal sub-engine and exits past the hand-off
    /// threshold.
    StaggeredReveal,
    /// Section parked off-screen to the right until the hand-off
    /// threshold, then slid in over a fixed scroll window.
    GatedSlideIn,
}

/// One section of the scroll track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub name: String,
    pub strategy: PhaseStrategy,
}

impl SectionSpec {
    pub fn new(name: impl Into<String>, strategy: PhaseStrategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

/// The full scroll track: the ordered section list plus geometry
/// derived from [`TrackConfig`].
#[derive(Debug, Clone)]
pub struct Track {
    sections: Vec<SectionSpec>,
    config: TrackConfig,
}

impl Track {
    /// The standard four-section marketing page layout.
    pub fn standard(config: TrackConfig) -> Self {
        let sections = vec![
            SectionSpec::new(
                "hero",
                PhaseStrategy::Default {
                    parallax: 0.25,
                    late_start: None,
                },
            ),
            SectionSpec::new(
                "about",
                PhaseStrategy::Default {
                    parallax: 0.15,
                    late_start: Some(config.late_start),
                },
            ),
            SectionSpec::new("services", PhaseStrategy::StaggeredReveal),
            SectionSpec::new("contact", PhaseStrategy::GatedSlideIn),
        ];
        Self { sections, config }
    }

    /// Build a track from an explicit section list.
    pub fn with_sections(sections: Vec<SectionSpec>, config: TrackConfig) -> Self {
        Self { sections, config }
    }

    #[inline]
    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[inline]
    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    /// Scroll distance each section owns: `budget_screens × h`.
    #[inline]
    pub fn budget(&self, viewport: &ViewportMetrics) -> f64 {
        self.config.budget_screens * viewport.height
    }

    /// Total scrollable height: `len × budget`.
    #[inline]
    pub fn height(&self, viewport: &ViewportMetrics) -> f64 {
        self.len() as f64 * self.budget(viewport)
    }

    /// Scroll offset at which a section's budget starts.
    #[inline]
    pub fn section_start(&self, index: usize, viewport: &ViewportMetrics) -> f64 {
        index as f64 * self.budget(viewport)
    }

    /// Size of one discrete step within the staggered-reveal section.
    #[inline]
    pub fn step_size(&self, viewport: &ViewportMetrics) -> f64 {
        let steps = self.config.services_steps.max(1) as f64;
        self.budget(viewport) / steps
    }

    /// The hand-off threshold: the scroll offset at which the
    /// staggered-reveal section's exit begins and the gated section's
    /// entrance is armed. `None` if the track has no staggered section.
    pub fn handoff_threshold(&self, viewport: &ViewportMetrics) -> Option<f64> {
        let index = self
            .sections
            .iter()
            .position(|s| s.strategy == PhaseStrategy::StaggeredReveal)?;
        let pinned_steps = self.config.services_steps.saturating_sub(1) as f64;
        Some(self.section_start(index, viewport) + pinned_steps * self.step_size(viewport))
    }
}
