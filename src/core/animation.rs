//! # Transitions
//!
//! A [`Tween`] moves a scalar from one value to another over a fixed
//! duration. Colour and height transitions of a message row are both tweens:
//! the colour tween runs 0.0 (surface) ↔ 1.0 (primary), the height tween runs
//! between row counts.
//!
//! Tweens never read the clock themselves. Callers pass the frame's
//! `Instant`, which keeps every transition deterministic under test.
//!
//! Retargeting a running tween starts the new leg from the value it had at
//! that instant, so reversing mid-flight never jumps.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Default transition length.
pub const DEFAULT_DURATION_MS: u64 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Smoothstep: `3t² - 2t³`.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Duration and easing shared by every transition in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            easing: Easing::default(),
        }
    }
}

impl AnimationSpec {
    /// Transitions that settle immediately.
    pub fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    spec: AnimationSpec,
}

impl Tween {
    /// A tween already resting at `value`.
    pub fn settled(value: f32, now: Instant, spec: AnimationSpec) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            spec,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress of the current leg in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()).min(1.0)
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.spec.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.from != self.to && self.progress(now) < 1.0
    }

    /// Start a new leg towards `to` from wherever the tween is at `now`.
    /// Retargeting to the current target is a no-op.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        if to == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
    }

    /// Jump straight to `value` without animating.
    pub fn snap(&mut self, value: f32, now: Instant) {
        self.from = value;
        self.to = value;
        self.start = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(ms: u64, easing: Easing) -> AnimationSpec {
        AnimationSpec {
            duration: Duration::from_millis(ms),
            easing,
        }
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn ease_in_out_is_monotonic_and_symmetric() {
        let mut last = 0.0;
        for step in 0..=100 {
            let value = Easing::EaseInOut.apply(step as f32 / 100.0);
            assert!(value >= last);
            last = value;
        }
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn tween_reaches_target_after_duration() {
        let start = Instant::now();
        let mut tween = Tween::settled(0.0, start, spec(200, Easing::Linear));
        tween.retarget(1.0, start);

        assert_eq!(tween.value_at(start), 0.0);
        assert!((tween.value_at(start + Duration::from_millis(100)) - 0.5).abs() < 1e-3);
        assert_eq!(tween.value_at(start + Duration::from_millis(200)), 1.0);
        assert_eq!(tween.value_at(start + Duration::from_secs(5)), 1.0);
        assert!(tween.is_running(start + Duration::from_millis(199)));
        assert!(!tween.is_running(start + Duration::from_millis(200)));
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_value() {
        let start = Instant::now();
        let mut tween = Tween::settled(0.0, start, spec(100, Easing::Linear));
        tween.retarget(1.0, start);

        let halfway = start + Duration::from_millis(50);
        tween.retarget(0.0, halfway);

        assert!((tween.value_at(halfway) - 0.5).abs() < 1e-3);
        assert!((tween.value_at(halfway + Duration::from_millis(50)) - 0.25).abs() < 1e-3);
        assert_eq!(tween.value_at(halfway + Duration::from_millis(100)), 0.0);
    }

    #[test]
    fn retarget_to_same_target_keeps_running_leg() {
        let start = Instant::now();
        let mut tween = Tween::settled(0.0, start, spec(100, Easing::Linear));
        tween.retarget(1.0, start);
        tween.retarget(1.0, start + Duration::from_millis(50));
        assert!((tween.value_at(start + Duration::from_millis(50)) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn zero_duration_is_immediate() {
        let start = Instant::now();
        let mut tween = Tween::settled(3.0, start, AnimationSpec::instant());
        tween.retarget(9.0, start);
        assert_eq!(tween.value_at(start), 9.0);
        assert!(!tween.is_running(start));
    }

    #[test]
    fn snap_skips_the_transition() {
        let start = Instant::now();
        let mut tween = Tween::settled(0.0, start, spec(100, Easing::EaseInOut));
        tween.retarget(1.0, start);
        tween.snap(4.0, start);
        assert_eq!(tween.value_at(start), 4.0);
        assert_eq!(tween.target(), 4.0);
        assert!(!tween.is_running(start));
    }
}
