//! Mode presets
//!
//! A preset is everything the director applies atomically when a mode is
//! entered for the first time (or reset): background, projection, base
//! position and offset, target fov and depth, initial selection, and the
//! convergence tuning.

use vantage_core::{Color, Vec3};

use crate::modes::FramingMode;
use crate::rig::CameraRig;
use crate::velocity::ApproachVelocity;

/// Everything needed to build one mode's rig
#[derive(Clone, Debug)]
pub struct ModePreset {
    pub background: Color,
    pub orthographic: bool,
    pub base_position: Vec3,
    pub base_offset: Vec3,
    pub target_fov: f32,
    /// Depth the target offset's z axis starts aiming at
    pub offset_depth: f32,
    pub selected_index: i32,
    pub property_speed: f32,
    pub velocity: ApproachVelocity,
    pub threshold: f32,
}

impl ModePreset {
    /// Free movement: neutral perspective camera, nothing tracked
    pub fn free() -> Self {
        Self {
            background: Color::BLACK,
            orthographic: false,
            base_position: Vec3::ZERO,
            base_offset: Vec3::new(0.0, 0.0, 10.0),
            target_fov: 60.0,
            offset_depth: 10.0,
            selected_index: -1,
            property_speed: 2.0,
            velocity: ApproachVelocity::uniform(1.0),
            threshold: 0.05,
        }
    }

    /// Fixed viewpoint: orthographic, locked at the origin
    pub fn fixed() -> Self {
        Self {
            orthographic: true,
            background: Color::from_hex(0x101018),
            ..Self::free()
        }
    }

    /// Single-subject tracking: faster approach, tighter threshold
    pub fn target_one() -> Self {
        Self {
            property_speed: 3.0,
            velocity: ApproachVelocity::uniform(2.0),
            threshold: 0.02,
            offset_depth: 8.0,
            selected_index: 0,
            ..Self::free()
        }
    }

    /// Group framing: slower, wider moves
    pub fn target_all() -> Self {
        Self {
            property_speed: 1.5,
            velocity: ApproachVelocity::uniform(1.0),
            offset_depth: 20.0,
            selected_index: -1,
            ..Self::free()
        }
    }

    /// Built-in preset for a mode
    pub fn for_mode(mode: FramingMode) -> Self {
        match mode {
            FramingMode::Free => Self::free(),
            FramingMode::Fixed => Self::fixed(),
            FramingMode::TargetOne => Self::target_one(),
            FramingMode::TargetAll => Self::target_all(),
        }
    }

    /// Built-in registry name for a mode
    pub fn builtin_name(mode: FramingMode) -> &'static str {
        match mode {
            FramingMode::Free => "free",
            FramingMode::Fixed => "fixed",
            FramingMode::TargetOne => "target_one",
            FramingMode::TargetAll => "target_all",
        }
    }

    /// Build and initialize a rig from this preset.
    ///
    /// Initials come first, then `initialize()`, then the preset's target
    /// fov and offset depth are laid in so the rig starts transitioning
    /// toward them on the first tick.
    pub fn build_rig(&self) -> CameraRig {
        let mut rig = CameraRig::new();
        rig.initial_background = self.background;
        rig.orthographic = self.orthographic;
        rig.initial_position = self.base_position;
        rig.initial_offset = self.base_offset;
        rig.property_speed = self.property_speed;
        rig.velocity = self.velocity;
        rig.threshold = self.threshold;

        rig.initialize();

        rig.set_target_fov(self.target_fov);
        rig.target_offset = Vec3::new(self.base_offset.x, self.base_offset.y, self.offset_depth);
        rig.set_selected_index(self.selected_index);
        rig
    }
}

impl Default for ModePreset {
    fn default() -> Self {
        Self::free()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rig_applies_preset_atomically() {
        let preset = ModePreset::fixed();
        let rig = preset.build_rig();

        assert!(rig.orthographic);
        assert_eq!(rig.current_background, preset.background);
        assert_eq!(rig.current_position, preset.base_position);
        assert!((rig.target_offset.z - preset.offset_depth).abs() < 1e-6);
    }

    #[test]
    fn test_selection_clamps_against_empty_list() {
        // target_one asks for index 0, but a fresh rig has no targets yet
        let rig = ModePreset::target_one().build_rig();
        assert_eq!(rig.selected_index(), -1);
    }

    #[test]
    fn test_target_fov_survives_initialize() {
        let mut preset = ModePreset::free();
        preset.target_fov = 90.0;
        let rig = preset.build_rig();

        // current stays at the initial, target aims at the preset value
        assert!((rig.target_fov() - 90.0).abs() < 1e-6);
        assert!((rig.fov() - 60.0).abs() < 1e-6);
    }
}
