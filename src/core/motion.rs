//! Motion primitives shared by every animated surface of the site
//!
//! Everything here is driven by explicit timestamps in milliseconds so the
//! same code runs on the server (where time stands still at zero), in the
//! browser (fed by `requestAnimationFrame`) and in tests.

use serde::{Deserialize, Serialize};

/// Overshoot used by the back-in half of [`Easing::Anticipate`]
const BACK_OVERSHOOT: f64 = 1.70158;

/// Integration step for [`Spring`], in milliseconds
const SPRING_SUBSTEP_MS: f64 = 1.0;

/// Longest gap a single [`Spring::step`] will integrate (a backgrounded tab
/// can hand us several seconds at once)
const SPRING_MAX_STEP_MS: f64 = 64.0;

const SPRING_REST_DELTA: f64 = 0.0005;
const SPRING_REST_SPEED: f64 = 0.005;

/// Every fixed duration, distance and threshold used by the motion layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionTimings {
    /// Duration of a section reveal
    pub reveal_ms: f64,
    /// Vertical displacement of a not-yet-revealed section
    pub reveal_offset_px: f64,
    /// Default visible fraction that triggers a reveal
    pub reveal_threshold: f64,
    /// Delay added per index in a staggered grid
    pub stagger_step_ms: f64,
    /// Duration of the header's transparent <-> condensed morph
    pub header_ms: f64,
    /// Scroll offset beyond which the header condenses
    pub scroll_threshold_px: f64,
    /// Duration of a page enter or exit
    pub page_ms: f64,
    /// Vertical displacement of an entering or exiting page
    pub page_offset_px: f64,
    /// Nav underline slide between links
    pub indicator_ms: f64,
    pub spring_stiffness: f64,
    pub spring_damping: f64,
    pub hover_scale: f64,
    pub press_scale: f64,
    /// Artificial latency of the mock contact submission
    pub submit_delay_ms: u32,
}

impl Default for MotionTimings {
    fn default() -> Self {
        Self {
            reveal_ms: 800.0,
            reveal_offset_px: 50.0,
            reveal_threshold: 0.2,
            stagger_step_ms: 100.0,
            header_ms: 300.0,
            scroll_threshold_px: 10.0,
            page_ms: 500.0,
            page_offset_px: 20.0,
            indicator_ms: 350.0,
            spring_stiffness: 400.0,
            spring_damping: 17.0,
            hover_scale: 1.05,
            press_scale: 0.95,
            submit_delay_ms: 2000,
        }
    }
}

/// Easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
    /// Pulls back briefly before shooting towards the target, front-loading
    /// the visible motion
    Anticipate,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress
    ///
    /// Input outside the range is clamped. Every curve starts at exactly 0
    /// and ends at exactly 1; `Anticipate` dips below 0 on the way.
    pub fn apply(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Anticipate => {
                let p = t * 2.0;
                if p < 1.0 {
                    0.5 * p * p * ((BACK_OVERSHOOT + 1.0) * p - BACK_OVERSHOOT)
                } else {
                    0.5 * (2.0 - 2f64.powf(-10.0 * (p - 1.0)))
                }
            }
        }
    }
}

/// Linear interpolation between two values of the same shape
pub trait Lerp {
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

/// A single eased transition from one value to another
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    started_at: f64,
    duration_ms: f64,
    easing: Easing,
}

impl<T: Lerp + Clone> Tween<T> {
    /// A tween that has already arrived at `value`
    pub fn settled(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            started_at: 0.0,
            duration_ms: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress at `now`, clamped to `[0, 1]`
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: f64) -> T {
        self.from.lerp(&self.to, self.easing.apply(self.progress(now)))
    }

    /// Head towards `to`, starting from wherever the tween currently is
    ///
    /// Interrupting a running tween therefore never jumps.
    pub fn retarget(&mut self, to: T, now: f64, duration_ms: f64) {
        self.from = self.sample(now);
        self.to = to;
        self.started_at = now;
        self.duration_ms = duration_ms;
    }

    /// Place the tween at `value` without animating
    pub fn jump_to(&mut self, value: T) {
        self.from = value.clone();
        self.to = value;
        self.duration_ms = 0.0;
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn target(&self) -> &T {
        &self.to
    }
}

/// Damped harmonic spring with unit mass
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, value: f64) -> Self {
        Self {
            stiffness,
            damping,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Spring configured with the button micro-feedback constants
    pub fn from_timings(timings: &MotionTimings, value: f64) -> Self {
        Self::new(timings.spring_stiffness, timings.spring_damping, value)
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Advance the simulation by `dt_ms`
    ///
    /// Returns `true` while the spring is still moving.
    pub fn step(&mut self, dt_ms: f64) -> bool {
        let mut remaining = dt_ms.clamp(0.0, SPRING_MAX_STEP_MS);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_MS) / 1000.0;
            let force =
                -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force * h;
            self.value += self.velocity * h;
            remaining -= SPRING_SUBSTEP_MS;
        }

        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }

    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Anticipate,
    ];

    #[test]
    fn test_easing_endpoints() {
        for easing in CURVES {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
            assert_eq!(easing.apply(-3.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(7.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_anticipate_pulls_back_then_overtakes_linear() {
        assert!(Easing::Anticipate.apply(0.1) < 0.0);
        assert!(Easing::Anticipate.apply(0.7) > 0.7);
    }

    #[test]
    fn test_anticipate_is_continuous_at_midpoint() {
        let before = Easing::Anticipate.apply(0.4999);
        let after = Easing::Anticipate.apply(0.5001);
        assert!((before - after).abs() < 0.01);
    }

    #[test]
    fn test_tween_samples_between_endpoints() {
        let mut tween = Tween::settled(0.0).with_easing(Easing::Linear);
        tween.retarget(100.0, 1000.0, 200.0);

        assert_eq!(tween.sample(1000.0), 0.0);
        assert_eq!(tween.sample(1100.0), 50.0);
        assert_eq!(tween.sample(1200.0), 100.0);
        assert_eq!(tween.sample(5000.0), 100.0);
        assert!(!tween.is_finished(1199.0));
        assert!(tween.is_finished(1200.0));
    }

    #[test]
    fn test_tween_retarget_midway_starts_from_current_value() {
        let mut tween = Tween::settled(0.0).with_easing(Easing::Linear);
        tween.retarget(100.0, 0.0, 100.0);
        tween.retarget(0.0, 50.0, 100.0);

        assert_eq!(tween.sample(50.0), 50.0);
        assert_eq!(tween.sample(100.0), 25.0);
        assert_eq!(*tween.target(), 0.0);
    }

    #[test]
    fn test_settled_tween_is_finished() {
        let tween = Tween::settled(4.5);
        assert!(tween.is_finished(0.0));
        assert_eq!(tween.sample(123.0), 4.5);
    }

    #[test]
    fn test_spring_reaches_target_and_rests() {
        let timings = MotionTimings::default();
        let mut spring = Spring::from_timings(&timings, 1.0);
        spring.set_target(timings.hover_scale);

        let mut frames = 0;
        while spring.step(16.0) {
            frames += 1;
            assert!(frames < 200, "spring never settled");
        }

        assert_eq!(spring.value(), timings.hover_scale);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let mut spring = Spring::new(400.0, 17.0, 1.0);
        spring.set_target(0.95);

        let mut lowest = f64::MAX;
        for _ in 0..60 {
            spring.step(16.0);
            lowest = lowest.min(spring.value());
        }
        assert!(lowest < 0.95);
    }

    #[test]
    fn test_spring_at_target_does_not_move() {
        let mut spring = Spring::new(400.0, 17.0, 1.0);
        assert!(!spring.step(16.0));
        assert_eq!(spring.value(), 1.0);
    }
}
