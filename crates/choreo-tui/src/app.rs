use choreo_core::{
    ChoreoConfig, Choreographer, MotionPreference, ScrollSample, ScrollTracker, SectionFrame,
    ViewportMetrics,
};
use tracing::debug;

use crate::input::Action;

/// Virtual pixel size of one terminal cell. The engine thinks in px;
/// the render layer divides back down to cells.
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Main application state
pub struct App {
    pub config: ChoreoConfig,
    pub choreographer: Choreographer,
    pub tracker: ScrollTracker,
    pub viewport: ViewportMetrics,
    pub motion: MotionPreference,
    /// Latest per-section output, recomputed once per tick.
    pub frames: Vec<SectionFrame>,
    pub last_sample: ScrollSample,
    /// Vertical nudge applied to the services heading, derived from
    /// the frame's scroll delta. Always in [-6, 0] px.
    pub heading_nudge: f64,
    pub pending_key: Option<char>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: ChoreoConfig, cols: u16, rows: u16) -> Self {
        let viewport = viewport_from_cells(cols, rows);
        let choreographer = Choreographer::new(&config);
        let mut tracker = ScrollTracker::new(choreographer.track_height(&viewport));
        let motion = MotionPreference::from_reduced(config.motion.reduced);

        let sample = tracker.sample();
        let frames = choreographer.frame(sample, &viewport, motion);

        Self {
            config,
            choreographer,
            tracker,
            viewport,
            motion,
            frames,
            last_sample: sample,
            heading_nudge: 0.0,
            pending_key: None,
            should_quit: false,
        }
    }

    /// Whether there is unapplied scroll input; drives the fast tick.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tracker.needs_frame()
    }

    /// Fold pending scroll input and recompute every section's state.
    pub fn tick(&mut self) {
        let sample = self.tracker.sample();
        self.heading_nudge = (-sample.delta * 0.6).clamp(-6.0, 0.0);
        self.frames = self.choreographer.frame(sample, &self.viewport, self.motion);
        self.last_sample = sample;
    }

    /// Handle a terminal resize: recompute the viewport metric, the
    /// track height, and the current frame.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = viewport_from_cells(cols, rows);
        self.tracker
            .set_track_height(self.choreographer.track_height(&self.viewport));
        debug!(cols, rows, "viewport resized");
        self.tick();
    }

    pub fn apply(&mut self, action: Action) {
        let step = self.config.ui.scroll_step_px;
        let page = self.viewport.height;

        // Any action other than the first 'g' clears the pending key.
        if action != Action::PendingG {
            self.pending_key = None;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.tracker.scroll_by(step),
            Action::ScrollUp => self.tracker.scroll_by(-step),
            Action::ScrollHalfPageDown => self.tracker.scroll_by(page * 0.5),
            Action::ScrollHalfPageUp => self.tracker.scroll_by(-page * 0.5),
            Action::ScrollPageDown => self.tracker.scroll_by(page),
            Action::ScrollPageUp => self.tracker.scroll_by(-page),
            Action::JumpToTop => self.tracker.scroll_to(0.0),
            Action::JumpToBottom => self
                .tracker
                .scroll_to(self.choreographer.track_height(&self.viewport)),
            Action::PendingG => self.pending_key = Some('g'),
            Action::ToggleReducedMotion => {
                self.motion = if self.motion.is_reduced() {
                    MotionPreference::Full
                } else {
                    MotionPreference::Reduced
                };
                self.tick();
            }
            Action::None => {}
        }
    }

    /// Scroll progress through the whole track, in [0, 1].
    pub fn scroll_progress(&self) -> f64 {
        let height = self.choreographer.track_height(&self.viewport);
        if height > 0.0 {
            self.last_sample.offset / height
        } else {
            0.0
        }
    }

    /// Name of the currently active section, for the status bar.
    pub fn active_section_name(&self) -> &str {
        self.frames
            .iter()
            .find(|f| matches!(f.phase, choreo_core::Phase::Active { .. }))
            .map(|f| f.name.as_str())
            .unwrap_or("-")
    }
}

fn viewport_from_cells(cols: u16, rows: u16) -> ViewportMetrics {
    ViewportMetrics::new(cols as f64 * CELL_WIDTH_PX, rows as f64 * CELL_HEIGHT_PX)
}
