//! Camera rig
//!
//! Per-mode interpolation state. A rig owns initial/current/target values
//! for every visual property and advances current toward target once per
//! tick. Domain-clamped properties are re-clamped on every write, never
//! only at construction. The rig also carries the mode's tracked subject
//! list and selection, which persist across mode switches until the rig is
//! rebuilt.

use smallvec::SmallVec;
use vantage_core::{Color, Vec3};

use crate::lerp::Interpolate;
use crate::target::{TargetKey, TargetSet};
use crate::velocity::ApproachVelocity;
use crate::viewport::CameraFrame;

/// Valid field-of-view range in degrees
pub const FOV_RANGE: (f32, f32) = (0.0, 360.0);
/// Valid aspect ratio range
pub const ASPECT_RANGE: (f32, f32) = (0.0, 3.0);
/// Valid orthographic size range
pub const ORTHO_SIZE_RANGE: (f32, f32) = (1.0, 25.0);

/// Per-mode camera configuration and interpolation state
#[derive(Clone, Debug)]
pub struct CameraRig {
    /// Background transition endpoints (unclamped)
    pub initial_background: Color,
    pub current_background: Color,
    pub target_background: Color,

    /// Orthographic projection flag, written straight through to the surface
    pub orthographic: bool,

    initial_fov: f32,
    current_fov: f32,
    target_fov: f32,

    initial_aspect: f32,
    current_aspect: f32,
    target_aspect: f32,

    initial_ortho_size: f32,
    current_ortho_size: f32,
    target_ortho_size: f32,

    /// Camera position endpoints (unclamped)
    pub initial_position: Vec3,
    pub current_position: Vec3,
    pub target_position: Vec3,

    /// Positional offset endpoints (unclamped); z is the framing depth
    pub initial_offset: Vec3,
    pub current_offset: Vec3,
    pub target_offset: Vec3,

    display_position: Vec3,

    /// Convergence rate for background, fov, aspect, and orthographic size
    pub property_speed: f32,
    /// Per-axis convergence rates for position and offset
    pub velocity: ApproachVelocity,
    /// Remaining-delta magnitude below which a property stops advancing
    pub threshold: f32,

    targets: SmallVec<[TargetKey; 8]>,
    selected: i32,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            initial_background: Color::BLACK,
            current_background: Color::BLACK,
            target_background: Color::BLACK,

            orthographic: false,

            initial_fov: 60.0,
            current_fov: 60.0,
            target_fov: 60.0,

            initial_aspect: 16.0 / 9.0,
            current_aspect: 16.0 / 9.0,
            target_aspect: 16.0 / 9.0,

            initial_ortho_size: 5.0,
            current_ortho_size: 5.0,
            target_ortho_size: 5.0,

            initial_position: Vec3::ZERO,
            current_position: Vec3::ZERO,
            target_position: Vec3::ZERO,

            initial_offset: Vec3::new(0.0, 0.0, 10.0),
            current_offset: Vec3::new(0.0, 0.0, 10.0),
            target_offset: Vec3::new(0.0, 0.0, 10.0),

            display_position: Vec3::new(0.0, 0.0, 10.0),

            property_speed: 2.0,
            velocity: ApproachVelocity::uniform(1.0),
            threshold: 0.05,

            targets: SmallVec::new(),
            selected: -1,
        }
    }

    // ------------------------------------------------------------------
    // Clamped scalar properties
    // ------------------------------------------------------------------

    pub fn fov(&self) -> f32 {
        self.current_fov
    }

    pub fn target_fov(&self) -> f32 {
        self.target_fov
    }

    pub fn initial_fov(&self) -> f32 {
        self.initial_fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.current_fov = fov.clamp(FOV_RANGE.0, FOV_RANGE.1);
    }

    pub fn set_target_fov(&mut self, fov: f32) {
        self.target_fov = fov.clamp(FOV_RANGE.0, FOV_RANGE.1);
    }

    pub fn set_initial_fov(&mut self, fov: f32) {
        self.initial_fov = fov.clamp(FOV_RANGE.0, FOV_RANGE.1);
    }

    pub fn aspect(&self) -> f32 {
        self.current_aspect
    }

    pub fn target_aspect(&self) -> f32 {
        self.target_aspect
    }

    pub fn initial_aspect(&self) -> f32 {
        self.initial_aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.current_aspect = aspect.clamp(ASPECT_RANGE.0, ASPECT_RANGE.1);
    }

    pub fn set_target_aspect(&mut self, aspect: f32) {
        self.target_aspect = aspect.clamp(ASPECT_RANGE.0, ASPECT_RANGE.1);
    }

    pub fn set_initial_aspect(&mut self, aspect: f32) {
        self.initial_aspect = aspect.clamp(ASPECT_RANGE.0, ASPECT_RANGE.1);
    }

    pub fn ortho_size(&self) -> f32 {
        self.current_ortho_size
    }

    pub fn target_ortho_size(&self) -> f32 {
        self.target_ortho_size
    }

    pub fn initial_ortho_size(&self) -> f32 {
        self.initial_ortho_size
    }

    pub fn set_ortho_size(&mut self, size: f32) {
        self.current_ortho_size = size.clamp(ORTHO_SIZE_RANGE.0, ORTHO_SIZE_RANGE.1);
    }

    pub fn set_target_ortho_size(&mut self, size: f32) {
        self.target_ortho_size = size.clamp(ORTHO_SIZE_RANGE.0, ORTHO_SIZE_RANGE.1);
    }

    pub fn set_initial_ortho_size(&mut self, size: f32) {
        self.initial_ortho_size = size.clamp(ORTHO_SIZE_RANGE.0, ORTHO_SIZE_RANGE.1);
    }

    /// Final world position: current position + current offset, recomputed
    /// at the end of every tick
    pub fn display_position(&self) -> Vec3 {
        self.display_position
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Reset current and target to the configured initial values and
    /// recompute the display position
    pub fn initialize(&mut self) {
        self.current_background = self.initial_background;
        self.target_background = self.initial_background;

        self.current_fov = self.initial_fov;
        self.target_fov = self.initial_fov;

        self.current_aspect = self.initial_aspect;
        self.target_aspect = self.initial_aspect;

        self.current_ortho_size = self.initial_ortho_size;
        self.target_ortho_size = self.initial_ortho_size;

        self.current_position = self.initial_position;
        self.target_position = self.initial_position;

        self.current_offset = self.initial_offset;
        self.target_offset = self.initial_offset;

        self.display_position = self.current_position.add(self.current_offset);
    }

    /// Advance every property one step toward its target.
    ///
    /// Order is load-bearing for deterministic replay: background ->
    /// orthographic size -> fov -> aspect -> offset -> position -> display
    /// position.
    pub fn tick(&mut self, dt: f32) {
        let step = self.property_speed * dt;

        // Background: Euclidean RGBA distance stands in for |delta|
        if Color::distance(&self.current_background, &self.target_background) >= self.threshold {
            self.current_background = self.current_background.lerp(&self.target_background, step);
        }

        let size = Self::step_toward(
            self.current_ortho_size,
            self.target_ortho_size,
            step,
            self.threshold,
        );
        self.set_ortho_size(size);

        let fov = Self::step_toward(self.current_fov, self.target_fov, step, self.threshold);
        self.set_fov(fov);

        let aspect = Self::step_toward(self.current_aspect, self.target_aspect, step, self.threshold);
        self.set_aspect(aspect);

        self.current_offset = Self::step_axes(
            self.current_offset,
            self.target_offset,
            self.velocity,
            dt,
            self.threshold,
        );
        self.current_position = Self::step_axes(
            self.current_position,
            self.target_position,
            self.velocity,
            dt,
            self.threshold,
        );

        self.display_position = self.current_position.add(self.current_offset);
    }

    /// One scalar step. Inside the threshold band the value freezes where
    /// it is rather than snapping to target; it may rest at a small
    /// residual offset indefinitely.
    fn step_toward(current: f32, target: f32, fraction: f32, threshold: f32) -> f32 {
        if (target - current).abs() < threshold {
            current
        } else {
            current.lerp(&target, fraction)
        }
    }

    /// Per-axis step using the velocity envelope's axis rates
    fn step_axes(
        current: Vec3,
        target: Vec3,
        velocity: ApproachVelocity,
        dt: f32,
        threshold: f32,
    ) -> Vec3 {
        Vec3::new(
            Self::step_toward(current.x, target.x, velocity.x() * dt, threshold),
            Self::step_toward(current.y, target.y, velocity.y() * dt, threshold),
            Self::step_toward(current.z, target.z, velocity.z() * dt, threshold),
        )
    }

    /// Snapshot of the values written to the display surface this frame
    pub fn frame(&self) -> CameraFrame {
        CameraFrame {
            background: self.current_background,
            orthographic: self.orthographic,
            ortho_size: self.current_ortho_size,
            fov: self.current_fov,
            aspect: self.current_aspect,
            position: self.display_position,
        }
    }

    // ------------------------------------------------------------------
    // Tracked subjects and selection
    // ------------------------------------------------------------------

    pub fn targets(&self) -> &[TargetKey] {
        &self.targets
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Register a key; duplicates are ignored
    pub fn add_target(&mut self, key: TargetKey) {
        if !self.targets.contains(&key) {
            self.targets.push(key);
        }
    }

    pub fn remove_target(&mut self, key: TargetKey) {
        self.targets.retain(|k| *k != key);
        self.clamp_selection();
    }

    /// Drop keys whose targets are gone or no longer trackable, then
    /// re-clamp the selection to the shrunk list
    pub fn prune(&mut self, set: &TargetSet) {
        self.targets.retain(|k| set.is_trackable(*k));
        self.clamp_selection();
    }

    /// Selected target index; -1 means no single selection (frame the
    /// whole group)
    pub fn selected_index(&self) -> i32 {
        self.selected
    }

    pub fn set_selected_index(&mut self, index: i32) {
        self.selected = index.clamp(-1, self.targets.len() as i32 - 1);
    }

    /// Key of the selected target, if the selection points at one
    pub fn selected_key(&self) -> Option<TargetKey> {
        if self.selected >= 0 && (self.selected as usize) < self.targets.len() {
            Some(self.targets[self.selected as usize])
        } else {
            None
        }
    }

    /// Cycle forward with wraparound; no-op with fewer than two targets
    pub fn next_target(&mut self) {
        let count = self.targets.len() as i32;
        if count < 2 {
            return;
        }
        let next = self.selected + 1;
        self.selected = if next > count - 1 { 0 } else { next };
    }

    /// Cycle backward with wraparound; no-op with fewer than two targets
    pub fn previous_target(&mut self) {
        let count = self.targets.len() as i32;
        if count < 2 {
            return;
        }
        let prev = self.selected - 1;
        self.selected = if prev < 0 { count - 1 } else { prev };
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.clamp(-1, self.targets.len() as i32 - 1);
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::FramingTarget;

    #[test]
    fn test_fov_partial_step_without_overshoot() {
        let mut rig = CameraRig::new();
        rig.threshold = 0.1;
        rig.property_speed = 1.0;
        rig.set_fov(12.0);
        rig.set_target_fov(20.0);

        rig.tick(0.05);

        // 12 + (20 - 12) * 0.05 = 12.4
        assert!((rig.fov() - 12.4).abs() < 1e-4);
        assert!(rig.fov() <= 20.0);
    }

    #[test]
    fn test_large_step_reaches_but_never_overshoots() {
        let mut rig = CameraRig::new();
        rig.property_speed = 10.0;
        rig.set_fov(12.0);
        rig.set_target_fov(20.0);

        // fraction = 10 * 0.5 = 5.0, clamped to 1.0 by the lerp primitive
        rig.tick(0.5);
        assert!((rig.fov() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_freeze_inside_threshold_band() {
        let mut rig = CameraRig::new();
        rig.threshold = 0.1;
        rig.property_speed = 1.0;
        rig.set_fov(19.95);
        rig.set_target_fov(20.0);

        // |delta| = 0.05 < 0.1: the value stops moving and is NOT snapped
        // to target
        for _ in 0..100 {
            rig.tick(0.016);
        }
        assert!((rig.fov() - 19.95).abs() < 1e-5);
        assert!((rig.fov() - rig.target_fov()).abs() > 1e-3);
    }

    #[test]
    fn test_domain_clamps_on_every_write() {
        let mut rig = CameraRig::new();

        rig.set_target_fov(500.0);
        assert!((rig.target_fov() - 360.0).abs() < 1e-6);
        rig.set_fov(-10.0);
        assert!((rig.fov() - 0.0).abs() < 1e-6);

        rig.set_target_aspect(5.0);
        assert!((rig.target_aspect() - 3.0).abs() < 1e-6);

        rig.set_target_ortho_size(0.0);
        assert!((rig.target_ortho_size() - 1.0).abs() < 1e-6);
        rig.set_target_ortho_size(100.0);
        assert!((rig.target_ortho_size() - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_properties_stay_in_domain_across_ticks() {
        let mut rig = CameraRig::new();
        rig.property_speed = 50.0;
        rig.set_fov(0.0);
        rig.set_target_fov(360.0);
        rig.set_target_aspect(3.0);
        rig.set_target_ortho_size(25.0);

        for _ in 0..60 {
            rig.tick(0.016);
            assert!(rig.fov() >= 0.0 && rig.fov() <= 360.0);
            assert!(rig.aspect() >= 0.0 && rig.aspect() <= 3.0);
            assert!(rig.ortho_size() >= 1.0 && rig.ortho_size() <= 25.0);
        }
    }

    #[test]
    fn test_display_position_is_position_plus_offset() {
        let mut rig = CameraRig::new();
        rig.current_position = Vec3::new(1.0, 2.0, 3.0);
        rig.target_position = Vec3::new(5.0, 6.0, 7.0);
        rig.current_offset = Vec3::new(0.0, 1.0, 10.0);
        rig.target_offset = Vec3::new(0.0, 2.0, 20.0);

        rig.tick(0.1);

        let expected = rig.current_position.add(rig.current_offset);
        assert!(rig.display_position().approx_eq(&expected, 1e-4));
    }

    #[test]
    fn test_position_uses_per_axis_velocity() {
        let mut rig = CameraRig::new();
        rig.threshold = 0.001;
        rig.velocity = ApproachVelocity::new(2.0, 1.0, 0.5);
        rig.current_position = Vec3::ZERO;
        rig.target_position = Vec3::new(10.0, 10.0, 10.0);
        rig.current_offset = Vec3::ZERO;
        rig.target_offset = Vec3::ZERO;

        rig.tick(0.1);

        // Fractions: x 0.2, y 0.1, z 0.05
        assert!((rig.current_position.x - 2.0).abs() < 1e-4);
        assert!((rig.current_position.y - 1.0).abs() < 1e-4);
        assert!((rig.current_position.z - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_background_converges_then_freezes() {
        let mut rig = CameraRig::new();
        rig.threshold = 0.05;
        rig.property_speed = 4.0;
        rig.current_background = Color::BLACK;
        rig.target_background = Color::WHITE;

        for _ in 0..300 {
            rig.tick(0.016);
        }

        // Close to white but frozen inside the threshold band
        let d = Color::distance(&rig.current_background, &rig.target_background);
        assert!(d < 0.05);

        let frozen = rig.current_background;
        rig.tick(0.016);
        assert_eq!(rig.current_background, frozen);
    }

    #[test]
    fn test_initialize_resets_to_initials() {
        let mut rig = CameraRig::new();
        rig.set_initial_fov(90.0);
        rig.initial_position = Vec3::new(1.0, 1.0, 1.0);
        rig.initial_offset = Vec3::new(0.0, 0.0, 4.0);
        rig.set_target_fov(120.0);
        rig.current_position = Vec3::new(9.0, 9.0, 9.0);

        rig.initialize();

        assert!((rig.fov() - 90.0).abs() < 1e-6);
        assert!((rig.target_fov() - 90.0).abs() < 1e-6);
        assert_eq!(rig.current_position, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(rig.display_position(), Vec3::new(1.0, 1.0, 5.0));
    }

    #[test]
    fn test_selection_clamps_to_list_bounds() {
        let mut set = TargetSet::new();
        let a = set.insert(FramingTarget::new(Vec3::ZERO, 1.0));
        let b = set.insert(FramingTarget::new(Vec3::ONE, 1.0));

        let mut rig = CameraRig::new();
        rig.add_target(a);
        rig.add_target(b);

        rig.set_selected_index(5);
        assert_eq!(rig.selected_index(), 1);
        rig.set_selected_index(-7);
        assert_eq!(rig.selected_index(), -1);

        // Shrinking the list re-clamps
        rig.set_selected_index(1);
        rig.remove_target(b);
        assert_eq!(rig.selected_index(), 0);
    }

    #[test]
    fn test_cycling_wraps_and_noops() {
        let mut set = TargetSet::new();
        let a = set.insert(FramingTarget::new(Vec3::ZERO, 1.0));

        let mut rig = CameraRig::new();
        rig.add_target(a);
        rig.set_selected_index(0);

        // Single target: no-op
        rig.next_target();
        assert_eq!(rig.selected_index(), 0);
        rig.previous_target();
        assert_eq!(rig.selected_index(), 0);

        let b = set.insert(FramingTarget::new(Vec3::ONE, 1.0));
        let c = set.insert(FramingTarget::new(Vec3::ONE, 2.0));
        rig.add_target(b);
        rig.add_target(c);

        rig.set_selected_index(2);
        rig.next_target();
        assert_eq!(rig.selected_index(), 0);
        rig.previous_target();
        assert_eq!(rig.selected_index(), 2);
    }

    #[test]
    fn test_prune_drops_dead_keys() {
        let mut set = TargetSet::new();
        let a = set.insert(FramingTarget::new(Vec3::ZERO, 1.0));
        let b = set.insert(FramingTarget::new(Vec3::ONE, 1.0));
        let c = set.insert(FramingTarget::new(Vec3::ONE, 2.0));

        let mut rig = CameraRig::new();
        rig.add_target(a);
        rig.add_target(b);
        rig.add_target(c);
        rig.set_selected_index(2);

        set.get_mut(b).unwrap().status.pending_destroy = true;
        set.remove(c);

        rig.prune(&set);
        assert_eq!(rig.targets(), &[a]);
        assert_eq!(rig.selected_index(), 0);
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let mut set = TargetSet::new();
        let a = set.insert(FramingTarget::new(Vec3::ZERO, 1.0));

        let mut rig = CameraRig::new();
        rig.add_target(a);
        rig.add_target(a);
        assert_eq!(rig.target_count(), 1);
    }
}
