//! Header presentation: the transparent/condensed morph and the nav underline

use super::motion::{Easing, Lerp, MotionTimings, Tween};
use super::scroll::ScrollAttachment;

/// Interpolated visual parameters of the fixed header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderVisuals {
    /// Alpha of the white background
    pub background_alpha: f64,
    /// Backdrop blur radius in px
    pub blur_px: f64,
    /// Header height in rem
    pub height_rem: f64,
    /// Alpha of the drop shadow
    pub shadow_alpha: f64,
}

impl HeaderVisuals {
    /// At the top of the page
    pub const EXPANDED: HeaderVisuals = HeaderVisuals {
        background_alpha: 0.0,
        blur_px: 0.0,
        height_rem: 6.0,
        shadow_alpha: 0.0,
    };

    /// Once the page has scrolled past the threshold
    pub const CONDENSED: HeaderVisuals = HeaderVisuals {
        background_alpha: 0.8,
        blur_px: 10.0,
        height_rem: 4.5,
        shadow_alpha: 0.05,
    };

    pub fn for_condensed(condensed: bool) -> Self {
        if condensed {
            Self::CONDENSED
        } else {
            Self::EXPANDED
        }
    }

    /// Inline style for the header element
    pub fn style(&self) -> String {
        format!(
            "background-color: rgba(255, 255, 255, {:.3}); \
             backdrop-filter: blur({:.2}px); \
             -webkit-backdrop-filter: blur({:.2}px); \
             height: {:.3}rem; \
             box-shadow: 0 2px 10px rgba(0, 0, 0, {:.4});",
            self.background_alpha, self.blur_px, self.blur_px, self.height_rem, self.shadow_alpha
        )
    }
}

impl Lerp for HeaderVisuals {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            background_alpha: self.background_alpha.lerp(&to.background_alpha, t),
            blur_px: self.blur_px.lerp(&to.blur_px, t),
            height_rem: self.height_rem.lerp(&to.height_rem, t),
            shadow_alpha: self.shadow_alpha.lerp(&to.shadow_alpha, t),
        }
    }
}

/// Drives the header visuals from the scroll tracker's condensed flag
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderPresentation {
    condensed: bool,
    tween: Tween<HeaderVisuals>,
    duration_ms: f64,
}

impl HeaderPresentation {
    pub fn new(condensed: bool, timings: &MotionTimings) -> Self {
        Self {
            condensed,
            tween: Tween::settled(HeaderVisuals::for_condensed(condensed))
                .with_easing(Easing::EaseInOut),
            duration_ms: timings.header_ms,
        }
    }

    /// Effective condensed flag: without a scroll listener the header stays
    /// condensed so it remains legible over any content
    pub fn resolve(attachment: ScrollAttachment, condensed: bool) -> bool {
        match attachment {
            ScrollAttachment::Attached => condensed,
            ScrollAttachment::Unavailable => true,
        }
    }

    /// Apply the latest flag; returns `true` when a new animation started
    pub fn sync(&mut self, condensed: bool, now: f64) -> bool {
        if condensed == self.condensed {
            return false;
        }
        self.condensed = condensed;
        self.tween
            .retarget(HeaderVisuals::for_condensed(condensed), now, self.duration_ms);
        true
    }

    pub fn is_condensed(&self) -> bool {
        self.condensed
    }

    pub fn sample(&self, now: f64) -> HeaderVisuals {
        self.tween.sample(now)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        !self.tween.is_finished(now)
    }
}

/// Horizontal placement of the underline, relative to the nav container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorRect {
    pub left: f64,
    pub width: f64,
}

impl Lerp for IndicatorRect {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            left: self.left.lerp(&to.left, t),
            width: self.width.lerp(&to.width, t),
        }
    }
}

/// The single underline shared by all nav links
///
/// It is never recreated per link: changing the active link slides the same
/// element from wherever it currently is to the new anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct NavIndicator {
    tween: Tween<IndicatorRect>,
    anchor: Option<usize>,
    placed: bool,
    duration_ms: f64,
}

impl NavIndicator {
    pub fn new(timings: &MotionTimings) -> Self {
        Self {
            tween: Tween::settled(IndicatorRect::default()).with_easing(Easing::EaseOut),
            anchor: None,
            placed: false,
            duration_ms: timings.indicator_ms,
        }
    }

    /// Point the underline at link `anchor` occupying `rect`
    ///
    /// The first placement snaps; later ones animate. Re-measuring the same
    /// anchor (resize, font load) also snaps.
    pub fn move_to(&mut self, anchor: usize, rect: IndicatorRect, now: f64) {
        if !self.placed || self.anchor == Some(anchor) {
            self.tween.jump_to(rect);
        } else if *self.tween.target() != rect {
            self.tween.retarget(rect, now, self.duration_ms);
        }
        self.anchor = Some(anchor);
        self.placed = true;
    }

    /// No nav link matches the current page
    pub fn hide(&mut self) {
        self.anchor = None;
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn is_visible(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn sample(&self, now: f64) -> IndicatorRect {
        self.tween.sample(now)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        !self.tween.is_finished(now)
    }

    pub fn style(&self, now: f64) -> String {
        let rect = self.sample(now);
        format!(
            "left: {:.2}px; width: {:.2}px; opacity: {};",
            rect.left,
            rect.width,
            if self.is_visible() { 1 } else { 0 }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_starts_at_flag() {
        let timings = MotionTimings::default();
        let header = HeaderPresentation::new(false, &timings);
        assert_eq!(header.sample(0.0), HeaderVisuals::EXPANDED);
        assert!(!header.is_animating(0.0));
    }

    #[test]
    fn test_header_morphs_within_duration() {
        let timings = MotionTimings::default();
        let mut header = HeaderPresentation::new(false, &timings);

        assert!(header.sync(true, 1000.0));
        let mid = header.sample(1150.0);
        assert!(mid.height_rem < 6.0 && mid.height_rem > 4.5);
        assert_eq!(header.sample(1300.0), HeaderVisuals::CONDENSED);
        assert!(!header.is_animating(1300.0));
    }

    #[test]
    fn test_header_sync_ignores_unchanged_flag() {
        let timings = MotionTimings::default();
        let mut header = HeaderPresentation::new(true, &timings);
        assert!(!header.sync(true, 10.0));
        assert!(!header.is_animating(10.0));
    }

    #[test]
    fn test_unavailable_scroll_listener_forces_condensed() {
        assert!(HeaderPresentation::resolve(ScrollAttachment::Unavailable, false));
        assert!(!HeaderPresentation::resolve(ScrollAttachment::Attached, false));
        assert!(HeaderPresentation::resolve(ScrollAttachment::Attached, true));
    }

    #[test]
    fn test_header_style_renders_values() {
        let style = HeaderVisuals::CONDENSED.style();
        assert!(style.contains("height: 4.500rem"));
        assert!(style.contains("blur(10.00px)"));
    }

    #[test]
    fn test_indicator_first_placement_snaps() {
        let timings = MotionTimings::default();
        let mut indicator = NavIndicator::new(&timings);
        let rect = IndicatorRect { left: 40.0, width: 60.0 };

        indicator.move_to(1, rect, 0.0);
        assert_eq!(indicator.sample(0.0), rect);
        assert!(indicator.is_visible());
    }

    #[test]
    fn test_indicator_slides_between_links() {
        let timings = MotionTimings::default();
        let mut indicator = NavIndicator::new(&timings);
        let home = IndicatorRect { left: 0.0, width: 40.0 };
        let about = IndicatorRect { left: 200.0, width: 48.0 };

        indicator.move_to(0, home, 0.0);
        indicator.move_to(3, about, 100.0);

        let mid = indicator.sample(200.0);
        assert!(mid.left > 0.0 && mid.left < 200.0);
        assert_eq!(indicator.sample(100.0 + timings.indicator_ms), about);
        assert_eq!(indicator.anchor(), Some(3));
    }

    #[test]
    fn test_indicator_hidden_keeps_position() {
        let timings = MotionTimings::default();
        let mut indicator = NavIndicator::new(&timings);
        let rect = IndicatorRect { left: 10.0, width: 20.0 };
        indicator.move_to(2, rect, 0.0);
        indicator.hide();

        assert!(!indicator.is_visible());
        assert_eq!(indicator.sample(50.0), rect);
        assert!(indicator.style(50.0).ends_with("opacity: 0;"));
    }
}
