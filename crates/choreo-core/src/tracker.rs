//! Frame-coalescing scroll position tracker.
//!
//! Scroll input can arrive faster than frames are rendered. Deltas
//! accumulate in a pending field and are folded into the current
//! offset once per frame by [`ScrollTracker::sample`], so downstream
//! phase resolution and transform synthesis run at most once per frame
//! on the latest position.

/// One scroll reading, produced once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Current scroll offset in px, clamped to [0, track height].
    pub offset: f64,
    /// Change since the previous sample. Used only for directional
    /// nudges (e.g. the services heading float).
    pub delta: f64,
}

/// Tracks the current scroll offset with per-frame event coalescing.
///
/// Construction starts at offset 0 (top of page), so the first sample
/// is emitted immediately with no blank frame. Dropping the tracker is
/// the unsubscribe; it holds no timers or callbacks.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    offset: f64,
    pending_delta: f64,
    track_height: f64,
}

impl ScrollTracker {
    pub fn new(track_height: f64) -> Self {
        Self {
            offset: 0.0,
            pending_delta: 0.0,
            track_height: track_height.max(0.0),
        }
    }

    /// Update the scrollable track height (e.g. after a resize) and
    /// re-clamp the current offset into the new range.
    pub fn set_track_height(&mut self, track_height: f64) {
        self.track_height = track_height.max(0.0);
        self.offset = self.offset.clamp(0.0, self.track_height);
    }

    /// Current offset as of the last sample.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Queue a scroll delta (positive = down). Multiple deltas within
    /// one frame are batched and applied together at the next sample.
    pub fn scroll_by(&mut self, delta: f64) {
        if delta.is_finite() {
            self.pending_delta += delta;
        }
    }

    /// Jump to an absolute offset, discarding pending deltas.
    pub fn scroll_to(&mut self, offset: f64) {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        self.offset = offset.clamp(0.0, self.track_height);
        self.pending_delta = 0.0;
    }

    /// Whether there is unapplied scroll input. The event loop uses
    /// this to raise its tick rate while input is pending.
    #[inline]
    pub fn needs_frame(&self) -> bool {
        self.pending_delta != 0.0
    }

    /// Fold pending input into the offset and produce this frame's
    /// sample. Call once per rendered frame.
    pub fn sample(&mut self) -> ScrollSample {
        let previous = self.offset;
        if self.pending_delta != 0.0 {
            self.offset = (self.offset + self.pending_delta).clamp(0.0, self.track_height);
            self.pending_delta = 0.0;
        }
        ScrollSample {
            offset: self.offset,
            delta: self.offset - previous,
        }
    }

    /// Reset to the top of the page.
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.pending_delta = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_sample_is_top_of_page() {
        let mut tracker = ScrollTracker::new(9600.0);
        let sample = tracker.sample();
        assert_eq!(sample.offset, 0.0);
        assert_eq!(sample.delta, 0.0);
    }

    #[test]
    fn test_deltas_batch_until_sampled() {
        let mut tracker = ScrollTracker::new(9600.0);
        tracker.scroll_by(10.0);
        tracker.scroll_by(10.0);
        tracker.scroll_by(10.0);
        assert!(tracker.needs_frame());
        assert_eq!(tracker.offset(), 0.0);

        let sample = tracker.sample();
        assert_eq!(sample.offset, 30.0);
        assert_eq!(sample.delta, 30.0);
        assert!(!tracker.needs_frame());
    }

    #[test]
    fn test_offset_clamped_to_track() {
        let mut tracker = ScrollTracker::new(1000.0);
        tracker.scroll_by(5000.0);
        assert_eq!(tracker.sample().offset, 1000.0);

        tracker.scroll_by(-9000.0);
        let sample = tracker.sample();
        assert_eq!(sample.offset, 0.0);
        assert_eq!(sample.delta, -1000.0);
    }

    #[test]
    fn test_scroll_to_discards_pending() {
        let mut tracker = ScrollTracker::new(1000.0);
        tracker.scroll_by(500.0);
        tracker.scroll_to(200.0);
        assert!(!tracker.needs_frame());
        assert_eq!(tracker.sample().offset, 200.0);
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let mut tracker = ScrollTracker::new(1000.0);
        tracker.scroll_to(900.0);
        tracker.set_track_height(400.0);
        assert_eq!(tracker.offset(), 400.0);
    }

    #[test]
    fn test_non_finite_input_ignored() {
        let mut tracker = ScrollTracker::new(1000.0);
        tracker.scroll_by(f64::NAN);
        tracker.scroll_by(f64::INFINITY);
        assert_eq!(tracker.sample().offset, 0.0);
    }

    #[test]
    fn test_zero_track_pins_to_origin() {
        let mut tracker = ScrollTracker::new(0.0);
        tracker.scroll_by(300.0);
        assert_eq!(tracker.sample().offset, 0.0);
    }
}
