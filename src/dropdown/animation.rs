//! Spring-driven value animation.
//!
//! Every animated quantity of the dropdown (expand progress, popup height,
//! slot width) is an [`Animated`] that chases a target with a critically
//! damped spring. Time is always passed in, so rendering and tests decide
//! what "now" is.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut progress = Animated::new(0.0);
//! progress.animate_to(1.0, Instant::now(), &AnimationSpec::default());
//!
//! // Each frame:
//! let value = progress.value(Instant::now());
//! ```

use std::time::Instant;

use serde::Deserialize;

/// Stiffness of the default spring (medium stiffness, no bounce).
pub const DEFAULT_STIFFNESS: f32 = 1500.0;

/// Default distance from the target at which an animation counts as finished.
pub const DEFAULT_THRESHOLD: f32 = 0.01;

/// How animations run. Loaded from the `[animation]` config table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSpec {
    /// When false every change is applied immediately
    pub enabled: bool,
    /// Spring stiffness; higher settles faster
    pub stiffness: f32,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            stiffness: DEFAULT_STIFFNESS,
        }
    }
}

impl AnimationSpec {
    /// Spec that applies every change immediately.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// A value animated towards a target by a critically damped spring.
#[derive(Debug, Clone)]
pub struct Animated {
    /// Value at `started`
    start: f32,
    /// Velocity at `started`, in units per second
    velocity: f32,
    target: f32,
    /// None once snapped; the value is then `target`
    started: Option<Instant>,
    stiffness: f32,
    threshold: f32,
}

impl Animated {
    /// Create an animation resting at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            start: value,
            velocity: 0.0,
            target: value,
            started: None,
            stiffness: DEFAULT_STIFFNESS,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Set the settle threshold (for builder pattern).
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Start animating towards `target` from wherever the value is at `now`.
    ///
    /// Keeps the current velocity, so retargeting mid-flight is continuous.
    /// Does nothing if `target` is already the target.
    pub fn animate_to(&mut self, target: f32, now: Instant, spec: &AnimationSpec) {
        if target == self.target {
            return;
        }
        if !spec.enabled {
            self.snap_to(target);
            return;
        }

        let (value, velocity) = self.sample(now);
        self.start = value;
        self.velocity = velocity;
        self.target = target;
        self.stiffness = if spec.stiffness.is_finite() {
            spec.stiffness.max(1.0)
        } else {
            DEFAULT_STIFFNESS
        };
        self.started = Some(now);
    }

    /// Jump to `target` without animating.
    pub fn snap_to(&mut self, target: f32) {
        self.start = target;
        self.velocity = 0.0;
        self.target = target;
        self.started = None;
    }

    /// Current value.
    pub fn value(&self, now: Instant) -> f32 {
        self.sample(now).0
    }

    /// Whether the value is still moving at `now`.
    pub fn is_running(&self, now: Instant) -> bool {
        match self.started {
            Some(started) => !self.settled(self.elapsed(started, now)),
            None => false,
        }
    }

    fn omega(&self) -> f32 {
        self.stiffness.sqrt()
    }

    fn elapsed(&self, started: Instant, now: Instant) -> f32 {
        now.saturating_duration_since(started).as_secs_f32()
    }

    /// Displacement from the target and velocity `t` seconds after start.
    fn spring(&self, t: f32) -> (f32, f32) {
        let omega = self.omega();
        let d0 = self.start - self.target;
        let c = self.velocity + omega * d0;
        let decay = (-omega * t).exp();
        let displacement = (d0 + c * t) * decay;
        let velocity = (self.velocity - omega * c * t) * decay;
        (displacement, velocity)
    }

    fn settled(&self, t: f32) -> bool {
        let (displacement, velocity) = self.spring(t);
        displacement.abs() < self.threshold && velocity.abs() < self.threshold * self.omega()
    }

    fn sample(&self, now: Instant) -> (f32, f32) {
        let Some(started) = self.started else {
            return (self.target, 0.0);
        };
        let t = self.elapsed(started, now);
        if self.settled(t) {
            return (self.target, 0.0);
        }
        let (displacement, velocity) = self.spring(t);
        (self.target + displacement, velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_new_is_at_rest() {
        let anim = Animated::new(3.0);
        let now = Instant::now();
        assert_eq!(anim.value(now), 3.0);
        assert!(!anim.is_running(now));
    }

    #[test]
    fn test_moves_towards_target_without_overshoot() {
        let t0 = Instant::now();
        let mut anim = Animated::new(0.0);
        anim.animate_to(1.0, t0, &AnimationSpec::default());

        assert_eq!(anim.value(t0), 0.0);
        assert!(anim.is_running(t0));

        let mut last = 0.0;
        for step in 1..=40 {
            let v = anim.value(t0 + ms(step * 10));
            assert!(v >= last, "value went backwards at step {}", step);
            assert!(v <= 1.0, "value overshot at step {}", step);
            last = v;
        }

        let mid = anim.value(t0 + ms(30));
        assert!(mid > 0.1 && mid < 0.9, "mid = {}", mid);
    }

    #[test]
    fn test_settles_on_target() {
        let t0 = Instant::now();
        let mut anim = Animated::new(0.0);
        anim.animate_to(1.0, t0, &AnimationSpec::default());

        let later = t0 + ms(1000);
        assert_eq!(anim.value(later), 1.0);
        assert!(!anim.is_running(later));
    }

    #[test]
    fn test_retarget_is_continuous() {
        let t0 = Instant::now();
        let spec = AnimationSpec::default();
        let mut anim = Animated::new(0.0);
        anim.animate_to(1.0, t0, &spec);

        let t1 = t0 + ms(40);
        let before = anim.value(t1);
        anim.animate_to(0.0, t1, &spec);
        let after = anim.value(t1);

        assert!((before - after).abs() < 1e-5);
        assert_eq!(anim.value(t1 + ms(2000)), 0.0);
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let t0 = Instant::now();
        let spec = AnimationSpec::default();
        let mut anim = Animated::new(0.0);
        anim.animate_to(10.0, t0, &spec);

        let t1 = t0 + ms(50);
        let v = anim.value(t1);
        anim.animate_to(10.0, t1, &spec);
        assert_eq!(anim.value(t1), v);
    }

    #[test]
    fn test_disabled_spec_snaps() {
        let t0 = Instant::now();
        let mut anim = Animated::new(3.0);
        anim.animate_to(7.0, t0, &AnimationSpec::disabled());
        assert_eq!(anim.value(t0), 7.0);
        assert!(!anim.is_running(t0));
    }

    #[test]
    fn test_stiffer_spring_is_faster() {
        let t0 = Instant::now();
        let mut soft = Animated::new(0.0);
        let mut stiff = Animated::new(0.0);
        soft.animate_to(1.0, t0, &AnimationSpec { enabled: true, stiffness: 200.0 });
        stiff.animate_to(1.0, t0, &AnimationSpec { enabled: true, stiffness: 5000.0 });

        let t = t0 + ms(30);
        assert!(stiff.value(t) > soft.value(t));
    }
}
