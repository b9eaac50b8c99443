//! Page enter/exit choreography
//!
//! Every navigation creates a new page view tagged with a fresh generation.
//! The outgoing view exits while the incoming one enters, both on their own
//! timeline. Timelines are keyed by generation, so anything a later
//! navigation superseded is recognisable as stale and dropped at once instead
//! of finishing.

use super::motion::{Easing, Lerp, MotionTimings};
use super::navigation::SitePage;

/// Lifecycle stage of a mounted page view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Entering,
    Settled,
    Exiting,
}

/// A page view currently in the DOM
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub generation: u64,
    pub page: SitePage,
    pub phase: TransitionPhase,
    /// When the current phase began (ms)
    pub phase_started_at: f64,
    /// Where an exiting view was when it started leaving, so an interrupted
    /// entrance exits from its sampled state instead of jumping
    pub exit_from: Option<PageStyle>,
}

/// Something the UI has to react to after [`PageTransitions::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    Settled(u64),
    Unmounted(u64),
}

/// Visual state of a page view at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageStyle {
    pub opacity: f64,
    /// Downward displacement in px
    pub offset_px: f64,
    /// Exiting views are taken out of flow so the entering view lays out
    /// underneath without a jump
    pub overlay: bool,
}

impl PageStyle {
    pub fn css(&self) -> String {
        let mut css = format!(
            "opacity: {:.3}; transform: translateY({:.2}px);",
            self.opacity, self.offset_px
        );
        if self.overlay {
            css.push_str(" position: absolute; top: 0; left: 0; right: 0; pointer-events: none;");
        }
        css
    }
}

/// Orchestrates the page views mounted by the router outlet
#[derive(Debug, Clone, PartialEq)]
pub struct PageTransitions {
    generation: u64,
    views: Vec<PageView>,
    duration_ms: f64,
    offset_px: f64,
}

impl PageTransitions {
    pub fn new(timings: &MotionTimings) -> Self {
        Self {
            generation: 0,
            views: Vec::new(),
            duration_ms: timings.page_ms,
            offset_px: timings.page_offset_px,
        }
    }

    /// Handle a navigation to `page`
    ///
    /// Returns the generation of the new entering view, or `None` when
    /// `page` is already the current view. Any view still exiting is
    /// unmounted immediately. The current view, entering or settled, starts
    /// exiting from wherever it is at `now`.
    pub fn navigate(&mut self, page: SitePage, now: f64) -> Option<u64> {
        let outgoing = match self.current() {
            Some(view) if view.page == page => return None,
            Some(view) => Some((view.generation, self.style(view.generation, now))),
            None => None,
        };

        self.views.retain(|view| view.phase != TransitionPhase::Exiting);
        if let Some((generation, from)) = outgoing {
            for view in self.views.iter_mut().filter(|v| v.generation == generation) {
                view.phase = TransitionPhase::Exiting;
                view.phase_started_at = now;
                view.exit_from = Some(PageStyle {
                    overlay: false,
                    ..from
                });
            }
        }

        self.generation += 1;
        self.views.push(PageView {
            generation: self.generation,
            page,
            phase: TransitionPhase::Entering,
            phase_started_at: now,
            exit_from: None,
        });
        Some(self.generation)
    }

    /// Advance timelines to `now`
    pub fn tick(&mut self, now: f64) -> Vec<TransitionEvent> {
        let mut events = Vec::new();
        let duration = self.duration_ms;

        for view in &mut self.views {
            if view.phase == TransitionPhase::Entering && now - view.phase_started_at >= duration
            {
                view.phase = TransitionPhase::Settled;
                view.phase_started_at = now;
                events.push(TransitionEvent::Settled(view.generation));
            }
        }

        self.views.retain(|view| {
            let done =
                view.phase == TransitionPhase::Exiting && now - view.phase_started_at >= duration;
            if done {
                events.push(TransitionEvent::Unmounted(view.generation));
            }
            !done
        });

        events
    }

    /// The view the user perceives as current (entering or settled)
    pub fn current(&self) -> Option<&PageView> {
        self.views
            .iter()
            .find(|view| view.phase != TransitionPhase::Exiting)
    }

    pub fn views(&self) -> &[PageView] {
        &self.views
    }

    pub fn view(&self, generation: u64) -> Option<&PageView> {
        self.views.iter().find(|view| view.generation == generation)
    }

    /// Whether the timeline tagged `generation` is still mounted
    pub fn is_live(&self, generation: u64) -> bool {
        self.view(generation).is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether any view is still entering or exiting
    pub fn is_animating(&self) -> bool {
        self.views
            .iter()
            .any(|view| view.phase != TransitionPhase::Settled)
    }

    /// Style of view `generation` at `now`; unknown views render settled
    pub fn style(&self, generation: u64, now: f64) -> PageStyle {
        let Some(view) = self.view(generation) else {
            return self.settled_style();
        };
        let t = if self.duration_ms > 0.0 {
            ((now - view.phase_started_at) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = Easing::Anticipate.apply(t);

        match view.phase {
            TransitionPhase::Settled => self.settled_style(),
            TransitionPhase::Entering => PageStyle {
                opacity: eased.clamp(0.0, 1.0),
                offset_px: self.offset_px * (1.0 - eased),
                overlay: false,
            },
            TransitionPhase::Exiting => {
                let from = view.exit_from.unwrap_or_else(|| self.settled_style());
                PageStyle {
                    opacity: (from.opacity * (1.0 - eased)).clamp(0.0, 1.0),
                    offset_px: from.offset_px.lerp(&self.offset_px, eased),
                    overlay: true,
                }
            }
        }
    }

    fn settled_style(&self) -> PageStyle {
        PageStyle {
            opacity: 1.0,
            offset_px: 0.0,
            overlay: false,
        }
    }
}
