//! Framing targets
//!
//! A framing target is a trackable point in space with a circular footprint.
//! Game entities own their targets through the arena: they update position
//! and status, the camera only ever reads. Mode rigs hold [`TargetKey`]s so
//! one entity can be tracked by several modes without duplicate bookkeeping.

use slotmap::SlotMap;
use vantage_core::Vec3;

slotmap::new_key_type! {
    /// Stable handle to a [`FramingTarget`] in a [`TargetSet`]
    pub struct TargetKey;
}

/// Lifecycle status supplied by the owning game entity
///
/// Mirrors the host's object bookkeeping: a target is live once initialized
/// and until it is paused, deactivated, or queued for destruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetStatus {
    pub initialized: bool,
    pub paused: bool,
    pub inactive: bool,
    pub pending_destroy: bool,
}

impl TargetStatus {
    pub fn live() -> Self {
        Self {
            initialized: true,
            paused: false,
            inactive: false,
            pending_destroy: false,
        }
    }

    pub fn is_live(&self) -> bool {
        self.initialized && !self.paused && !self.inactive && !self.pending_destroy
    }
}

impl Default for TargetStatus {
    fn default() -> Self {
        Self::live()
    }
}

/// A trackable subject with a radius and an eligibility gate
#[derive(Clone, Debug)]
pub struct FramingTarget {
    /// World position, fed by the owning entity each frame
    pub position: Vec3,
    /// Local offset added to the world position (e.g. aim at the torso,
    /// not the feet)
    pub offset: Vec3,
    /// Footprint radius, fixed at creation
    radius: f32,
    /// Whether the camera may track this subject at all
    pub trackable: bool,
    /// Liveness flags from the owning entity
    pub status: TargetStatus,
}

impl FramingTarget {
    /// Create a live, trackable target. Radius is clamped at zero.
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            offset: Vec3::ZERO,
            radius: radius.max(0.0),
            trackable: true,
            status: TargetStatus::live(),
        }
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Footprint radius (read-only after creation)
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Derived tracking point: world position + local offset
    pub fn location(&self) -> Vec3 {
        self.position.add(self.offset)
    }

    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }

    /// Eligibility gate: trackable flag AND liveness
    pub fn is_trackable(&self) -> bool {
        self.trackable && self.status.is_live()
    }
}

/// Arena of framing targets with stable keys
///
/// Owned by the director; rigs store keys into it. Removing an entry leaves
/// dangling keys in rig lists, which the per-tick prune clears.
#[derive(Default)]
pub struct TargetSet {
    targets: SlotMap<TargetKey, FramingTarget>,
}

impl TargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, target: FramingTarget) -> TargetKey {
        self.targets.insert(target)
    }

    pub fn remove(&mut self, key: TargetKey) -> Option<FramingTarget> {
        self.targets.remove(key)
    }

    pub fn get(&self, key: TargetKey) -> Option<&FramingTarget> {
        self.targets.get(key)
    }

    pub fn get_mut(&mut self, key: TargetKey) -> Option<&mut FramingTarget> {
        self.targets.get_mut(key)
    }

    /// True when the key resolves to a target that passes the eligibility
    /// gate. Dangling keys count as not trackable.
    pub fn is_trackable(&self, key: TargetKey) -> bool {
        self.targets.get(key).is_some_and(FramingTarget::is_trackable)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_position_plus_offset() {
        let t = FramingTarget::new(Vec3::new(1.0, 2.0, 3.0), 1.0)
            .with_offset(Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(t.location(), Vec3::new(1.0, 2.5, 3.0));
    }

    #[test]
    fn test_radius_clamped_at_zero() {
        let t = FramingTarget::new(Vec3::ZERO, -5.0);
        assert!((t.radius() - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_trackable_requires_liveness_and_flag() {
        let mut t = FramingTarget::new(Vec3::ZERO, 1.0);
        assert!(t.is_trackable());

        t.trackable = false;
        assert!(!t.is_trackable());

        t.trackable = true;
        t.status.paused = true;
        assert!(!t.is_trackable());

        t.status.paused = false;
        t.status.pending_destroy = true;
        assert!(!t.is_trackable());
    }

    #[test]
    fn test_dangling_key_is_not_trackable() {
        let mut set = TargetSet::new();
        let key = set.insert(FramingTarget::new(Vec3::ZERO, 1.0));
        assert!(set.is_trackable(key));

        set.remove(key);
        assert!(!set.is_trackable(key));
    }
}
