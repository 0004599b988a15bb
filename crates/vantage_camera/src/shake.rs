//! Camera shake collaborator
//!
//! The engine only ever asks "how much shake time is left"; the decay curve
//! itself belongs to the collaborator. [`ShakeTracker`] is a minimal
//! default, [`NoShake`] the null object for hosts without shake.

/// Remaining-duration source the director's shake facade reads
pub trait ShakeSource {
    /// Seconds of shake remaining; zero or less means not shaking
    fn time_left(&self) -> f32;

    /// Advance the tracker's clock. Default no-op for sources that decay
    /// on their own schedule.
    fn tick(&mut self, _dt: f32) {}
}

/// Null shake source
#[derive(Clone, Copy, Debug, Default)]
pub struct NoShake;

impl ShakeSource for NoShake {
    fn time_left(&self) -> f32 {
        0.0
    }
}

/// Duration-decay shake tracker
///
/// Magnitude fades linearly over the remaining duration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShakeTracker {
    time_left: f32,
    duration: f32,
    magnitude: f32,
}

impl ShakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or extend) a shake. Negative inputs clamp to zero.
    pub fn trigger(&mut self, magnitude: f32, duration: f32) {
        let duration = duration.max(0.0);
        if duration > self.time_left {
            self.time_left = duration;
            self.duration = duration;
        }
        self.magnitude = self.magnitude.max(magnitude.max(0.0));
    }

    /// Current shake magnitude, scaled by remaining time
    pub fn magnitude(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        self.magnitude * (self.time_left / self.duration).clamp(0.0, 1.0)
    }
}

impl ShakeSource for ShakeTracker {
    fn time_left(&self) -> f32 {
        self.time_left
    }

    fn tick(&mut self, dt: f32) {
        self.time_left = (self.time_left - dt).max(0.0);
        if self.time_left == 0.0 {
            self.magnitude = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_decays_to_zero() {
        let mut shake = ShakeTracker::new();
        shake.trigger(1.0, 0.5);
        assert!(shake.time_left() > 0.0);

        for _ in 0..40 {
            shake.tick(0.016);
        }
        assert!((shake.time_left() - 0.0).abs() < 1e-6);
        assert!((shake.magnitude() - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_trigger_extends_but_never_shortens() {
        let mut shake = ShakeTracker::new();
        shake.trigger(1.0, 1.0);
        shake.trigger(0.5, 0.2);
        assert!((shake.time_left() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_inputs_clamp() {
        let mut shake = ShakeTracker::new();
        shake.trigger(-1.0, -1.0);
        assert!((shake.time_left() - 0.0).abs() < 1e-6);
        assert!((shake.magnitude() - 0.0).abs() < 1e-6);
    }
}
