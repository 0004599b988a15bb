//! Camera approach velocity
//!
//! Three independently tunable axis rates sharing one clamp envelope. The
//! rig multiplies each axis by elapsed time to get the per-axis step
//! fraction for position and offset, so the camera can approach a subject
//! faster horizontally than it zooms in depth.

/// 3-axis approach rate with a shared [min, max] envelope
///
/// The envelope always contains every axis value: bounds widen to cover
/// whichever of the axis values (and any explicitly supplied bounds) are
/// most extreme, and every axis write is re-clamped into the envelope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproachVelocity {
    x: f32,
    y: f32,
    z: f32,
    min: f32,
    max: f32,
}

impl ApproachVelocity {
    /// Create from axis rates; the envelope is the span of the three values.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        let min = x.min(y).min(z);
        let max = x.max(y).max(z);
        Self { x, y, z, min, max }
    }

    /// Create with an explicit envelope; bounds widen if an axis value
    /// falls outside them.
    pub fn with_bounds(x: f32, y: f32, z: f32, min: f32, max: f32) -> Self {
        let min = min.min(x).min(y).min(z);
        let max = max.max(x).max(y).max(z);
        Self { x, y, z, min, max }
    }

    /// Uniform rate on all three axes
    pub fn uniform(rate: f32) -> Self {
        Self::new(rate, rate, rate)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x.clamp(self.min, self.max);
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y.clamp(self.min, self.max);
    }

    pub fn set_z(&mut self, z: f32) {
        self.z = z.clamp(self.min, self.max);
    }

    /// Replace the envelope. Bounds widen to keep containing the current
    /// axis values, then nothing needs re-clamping by construction.
    pub fn set_bounds(&mut self, min: f32, max: f32) {
        self.min = min.min(self.x).min(self.y).min(self.z);
        self.max = max.max(self.x).max(self.y).max(self.z);
    }
}

impl Default for ApproachVelocity {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope_holds(v: &ApproachVelocity) -> bool {
        v.min() <= v.max()
            && v.min() <= v.x()
            && v.x() <= v.max()
            && v.min() <= v.y()
            && v.y() <= v.max()
            && v.min() <= v.z()
            && v.z() <= v.max()
    }

    #[test]
    fn test_envelope_spans_axis_values() {
        let v = ApproachVelocity::new(1.0, 3.0, 2.0);
        assert!((v.min() - 1.0).abs() < 1e-6);
        assert!((v.max() - 3.0).abs() < 1e-6);
        assert!(envelope_holds(&v));
    }

    #[test]
    fn test_bounds_widen_for_extreme_axis() {
        // Supplied bounds are narrower than the axis span; the axis wins
        let v = ApproachVelocity::with_bounds(0.5, 5.0, 1.0, 1.0, 2.0);
        assert!(v.min() <= 0.5);
        assert!(v.max() >= 5.0);
        assert!(envelope_holds(&v));
    }

    #[test]
    fn test_setters_clamp_into_envelope() {
        let mut v = ApproachVelocity::with_bounds(1.0, 1.0, 1.0, 0.0, 2.0);
        v.set_x(100.0);
        assert!((v.x() - 2.0).abs() < 1e-6);
        v.set_y(-100.0);
        assert!((v.y() - 0.0).abs() < 1e-6);
        assert!(envelope_holds(&v));
    }

    #[test]
    fn test_set_bounds_keeps_axes_contained() {
        let mut v = ApproachVelocity::new(1.0, 2.0, 3.0);
        v.set_bounds(1.5, 2.5);
        // Envelope must still contain every axis value
        assert!(envelope_holds(&v));
        assert!((v.x() - 1.0).abs() < 1e-6);
        assert!((v.z() - 3.0).abs() < 1e-6);
    }
}
