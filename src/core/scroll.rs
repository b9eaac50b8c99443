//! Vertical scroll tracking for the header's condensed mode

use super::motion::MotionTimings;

/// Whether the window scroll listener could be installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAttachment {
    /// Listener installed; `ScrollState` follows the viewport
    Attached,
    /// No viewport to listen to (server render, detached document)
    #[default]
    Unavailable,
}

/// Latest scroll offset and the condensed flag derived from it
///
/// Written only by the scroll listener; the flag is recomputed from the
/// stored offset on every read, so it can never be stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    offset_px: f64,
    threshold_px: f64,
}

impl ScrollState {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            offset_px: 0.0,
            threshold_px,
        }
    }

    pub fn from_timings(timings: &MotionTimings) -> Self {
        Self::new(timings.scroll_threshold_px)
    }

    /// Store a new offset; returns `true` when the condensed flag flipped
    pub fn record(&mut self, offset_px: f64) -> bool {
        let was_condensed = self.is_condensed();
        self.offset_px = if offset_px.is_finite() { offset_px } else { 0.0 };
        was_condensed != self.is_condensed()
    }

    pub fn offset_px(&self) -> f64 {
        self.offset_px
    }

    pub fn is_condensed(&self) -> bool {
        self.offset_px > self.threshold_px
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::from_timings(&MotionTimings::default())
    }
}
