//! One-shot reveal of content blocks as they scroll into view
//!
//! A region starts hidden and displaced. The first time enough of it is
//! visible it flips to revealed and is never observed again: the registry
//! drops its observer as soon as it fires.

use derive_more::Display;

use super::motion::{Easing, MotionTimings};

/// One-shot visibility trigger for a single region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealObserver {
    threshold: f64,
    revealed: bool,
}

impl RevealObserver {
    /// Create an observer firing once `threshold` of the region is visible
    ///
    /// The threshold is clamped to `[0, 1]`; NaN falls back to 0.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed the currently visible fraction of the region
    ///
    /// Returns `true` only on the call that reveals the region.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.revealed {
            return false;
        }
        if visible_fraction > 0.0 && visible_fraction >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

/// Handle to a region registered with a [`RevealRegistry`]
///
/// The generation makes a handle to a released slot harmless even after the
/// slot has been reused by another region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{index}:{generation}")]
pub struct RegionId {
    index: usize,
    generation: u32,
}

impl RegionId {
    /// Parse the `index:generation` form produced by `Display`
    pub fn parse(s: &str) -> Option<Self> {
        let (index, generation) = s.split_once(':')?;
        Some(Self {
            index: index.parse().ok()?,
            generation: generation.parse().ok()?,
        })
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    observer: Option<RevealObserver>,
}

/// Arena of pending reveal observers
///
/// Regions register once, fire once and are dropped, so a long page with
/// many sections only ever holds observers for blocks not yet seen.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing a freshly mounted region
    pub fn register(&mut self, threshold: f64) -> RegionId {
        let observer = Some(RevealObserver::new(threshold));
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.generation = slot.generation.wrapping_add(1);
                slot.observer = observer;
                RegionId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    observer,
                });
                RegionId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Report the visible fraction of a region
    ///
    /// Returns the id exactly once, when the region reveals; the observer is
    /// released at that moment. Unknown, stale or already fired ids are
    /// ignored.
    pub fn report(&mut self, id: RegionId, visible_fraction: f64) -> Option<RegionId> {
        let slot = self.live_slot(id)?;
        let observer = slot.observer.as_mut()?;
        if !observer.observe(visible_fraction) {
            return None;
        }
        slot.observer = None;
        self.free.push(id.index);
        Some(id)
    }

    /// Drop a region that unmounted before revealing
    pub fn release(&mut self, id: RegionId) {
        if let Some(slot) = self.live_slot(id) {
            if slot.observer.take().is_some() {
                self.free.push(id.index);
            }
        }
    }

    pub fn is_observed(&self, id: RegionId) -> bool {
        self.slots
            .get(id.index)
            .is_some_and(|slot| slot.generation == id.generation && slot.observer.is_some())
    }

    /// Number of regions still waiting to reveal
    pub fn observed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.observer.is_some()).count()
    }

    fn live_slot(&mut self, id: RegionId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
    }
}

/// Delay before the `index`-th entry of a staggered group starts revealing
pub fn stagger_delay(index: usize, timings: &MotionTimings) -> f64 {
    index as f64 * timings.stagger_step_ms
}

/// Presentation of a region at a point of its reveal animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub offset_px: f64,
}

impl RevealStyle {
    /// Hidden, displaced state of a region that has not revealed yet
    pub fn hidden(timings: &MotionTimings) -> Self {
        Self {
            opacity: 0.0,
            offset_px: timings.reveal_offset_px,
        }
    }

    pub fn resting() -> Self {
        Self {
            opacity: 1.0,
            offset_px: 0.0,
        }
    }

    /// Style `elapsed_ms` after the reveal fired, honouring `delay_ms`
    pub fn at(elapsed_ms: f64, delay_ms: f64, timings: &MotionTimings) -> Self {
        let t = ((elapsed_ms - delay_ms) / timings.reveal_ms).clamp(0.0, 1.0);
        let eased = Easing::EaseOut.apply(t);
        Self {
            opacity: eased,
            offset_px: timings.reveal_offset_px * (1.0 - eased),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px);",
            self.opacity, self.offset_px
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_fires_once_on_threshold() {
        let mut observer = RevealObserver::new(0.2);
        assert!(!observer.observe(0.0));
        assert!(!observer.observe(0.19));
        assert!(observer.observe(0.2));
        assert!(observer.is_revealed());
        assert!(!observer.observe(0.9));
    }

    #[test]
    fn test_observer_never_unreveals() {
        let mut observer = RevealObserver::new(0.5);
        observer.observe(0.8);
        observer.observe(0.0);
        assert!(observer.is_revealed());
    }

    #[test]
    fn test_zero_threshold_needs_some_visibility() {
        let mut observer = RevealObserver::new(0.0);
        assert!(!observer.observe(0.0));
        assert!(observer.observe(0.01));
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(RevealObserver::new(3.0).threshold(), 1.0);
        assert_eq!(RevealObserver::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealObserver::new(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn test_registry_drops_observer_after_firing() {
        let mut registry = RevealRegistry::new();
        let id = registry.register(0.2);
        assert!(registry.is_observed(id));

        assert_eq!(registry.report(id, 0.1), None);
        assert_eq!(registry.report(id, 0.5), Some(id));
        assert!(!registry.is_observed(id));
        assert_eq!(registry.observed_count(), 0);
        assert_eq!(registry.report(id, 1.0), None);
    }

    #[test]
    fn test_stale_id_does_not_touch_reused_slot() {
        let mut registry = RevealRegistry::new();
        let first = registry.register(0.2);
        registry.release(first);

        let second = registry.register(0.2);
        assert_ne!(first, second);
        assert_eq!(registry.report(first, 1.0), None);
        assert!(registry.is_observed(second));

        registry.release(first);
        assert!(registry.is_observed(second));
    }

    #[test]
    fn test_release_twice_does_not_duplicate_free_slot() {
        let mut registry = RevealRegistry::new();
        let id = registry.register(0.2);
        registry.release(id);
        registry.release(id);

        let a = registry.register(0.2);
        let b = registry.register(0.2);
        assert_ne!(a, b);
        assert_eq!(registry.observed_count(), 2);
    }

    #[test]
    fn test_region_id_display_roundtrip() {
        let mut registry = RevealRegistry::new();
        registry.register(0.2);
        let id = registry.register(0.2);
        assert_eq!(id.to_string(), "1:0");
        assert_eq!(RegionId::parse(&id.to_string()), Some(id));
        assert_eq!(RegionId::parse("nope"), None);
    }

    #[test]
    fn test_reveal_style_waits_for_delay() {
        let timings = MotionTimings::default();
        let delay = stagger_delay(3, &timings);
        assert_eq!(delay, 300.0);

        assert_eq!(RevealStyle::at(299.0, delay, &timings), RevealStyle::hidden(&timings));
        assert_eq!(RevealStyle::at(1100.0, delay, &timings), RevealStyle::resting());
        let mid = RevealStyle::at(700.0, delay, &timings);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    }
}
