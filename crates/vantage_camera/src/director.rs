//! Camera director
//!
//! The one context object the host constructs. Owns the mode controller,
//! the target arena, the named preset registry, and the shake collaborator.
//! There is exactly one camera system because the host holds exactly one of
//! these, not because of any global state.

use rustc_hash::FxHashMap;
use vantage_core::Color;

use crate::error::CameraError;
use crate::modes::{FramingController, FramingMode, FramingTuning};
use crate::presets::ModePreset;
use crate::shake::{NoShake, ShakeSource};
use crate::target::{FramingTarget, TargetKey, TargetSet};
use crate::viewport::DisplaySurface;

/// Top-level camera coordinator
pub struct CameraDirector {
    controller: FramingController,
    targets: TargetSet,
    presets: FxHashMap<String, ModePreset>,
    /// Registry name each mode's rig is built from
    assignments: [String; FramingMode::COUNT],
    shake: Box<dyn ShakeSource>,
}

impl CameraDirector {
    /// Director with default tuning and no shake collaborator
    pub fn new() -> Self {
        Self::with_shake(Box::new(NoShake))
    }

    pub fn with_shake(shake: Box<dyn ShakeSource>) -> Self {
        let mut presets = FxHashMap::default();
        let mut assignments: [String; FramingMode::COUNT] = Default::default();
        for mode in FramingMode::ALL {
            let name = ModePreset::builtin_name(mode);
            presets.insert(name.to_string(), ModePreset::for_mode(mode));
            assignments[mode.index()] = name.to_string();
        }

        let mut controller = FramingController::new(FramingTuning::default());
        // Initial mode is Free; its rig exists from the start
        controller.ensure_rig(FramingMode::Free, &ModePreset::free());

        Self {
            controller,
            targets: TargetSet::new(),
            presets,
            assignments,
            shake,
        }
    }

    // ------------------------------------------------------------------
    // Frame path
    // ------------------------------------------------------------------

    /// Advance the active mode's camera by one frame and write the result
    /// to the display surface
    pub fn tick(&mut self, dt: f32, surface: &mut dyn DisplaySurface) {
        self.shake.tick(dt);
        self.controller.tick(dt, &self.targets, surface);
    }

    // ------------------------------------------------------------------
    // Modes and presets
    // ------------------------------------------------------------------

    pub fn mode(&self) -> FramingMode {
        self.controller.mode()
    }

    /// Switch the framing mode, building its rig from the assigned preset
    /// on first entry. Re-entering a mode resumes its previous rig.
    pub fn set_mode(&mut self, mode: FramingMode) -> Result<(), CameraError> {
        let preset = self.preset_for(mode)?.clone();
        self.controller.set_mode(mode, &preset);
        Ok(())
    }

    /// Rebuild the active mode's rig from its assigned preset
    pub fn reset_camera(&mut self) -> Result<(), CameraError> {
        let preset = self.preset_for(self.controller.mode())?.clone();
        self.controller.reset_camera(&preset);
        Ok(())
    }

    /// Register (or replace) a named preset
    pub fn register_preset(&mut self, name: impl Into<String>, preset: ModePreset) {
        let name = name.into();
        tracing::debug!(preset = %name, "camera preset registered");
        self.presets.insert(name, preset);
    }

    /// Choose which named preset a mode is built from
    pub fn assign_preset(&mut self, mode: FramingMode, name: &str) -> Result<(), CameraError> {
        if !self.presets.contains_key(name) {
            return Err(CameraError::UnknownPreset(name.to_string()));
        }
        self.assignments[mode.index()] = name.to_string();
        Ok(())
    }

    fn preset_for(&self, mode: FramingMode) -> Result<&ModePreset, CameraError> {
        let name = &self.assignments[mode.index()];
        self.presets
            .get(name)
            .ok_or_else(|| CameraError::UnknownPreset(name.clone()))
    }

    // ------------------------------------------------------------------
    // Targets
    // ------------------------------------------------------------------

    /// Put a target into the arena. It is not tracked by any mode until
    /// [`add_target`](Self::add_target) registers it.
    pub fn spawn_target(&mut self, target: FramingTarget) -> TargetKey {
        self.targets.insert(target)
    }

    /// Remove a target from the arena and from every mode's list
    pub fn despawn_target(&mut self, key: TargetKey) {
        for mode in FramingMode::ALL {
            if let Some(rig) = self.controller.rig_mut(mode) {
                rig.remove_target(key);
            }
        }
        self.targets.remove(key);
    }

    /// Register a target with every listed mode in one call; modes without
    /// a rig yet get one built from their assigned preset
    pub fn add_target(&mut self, key: TargetKey, modes: &[FramingMode]) {
        for &mode in modes {
            let preset = self
                .preset_for(mode)
                .cloned()
                .unwrap_or_else(|_| ModePreset::for_mode(mode));
            self.controller.ensure_rig(mode, &preset);
            if let Some(rig) = self.controller.rig_mut(mode) {
                rig.add_target(key);
            }
        }
        tracing::debug!(modes = modes.len(), "camera target registered");
    }

    /// Deregister a target from every listed mode; the arena entry stays
    pub fn remove_target(&mut self, key: TargetKey, modes: &[FramingMode]) {
        for &mode in modes {
            if let Some(rig) = self.controller.rig_mut(mode) {
                rig.remove_target(key);
            }
        }
    }

    pub fn target(&self, key: TargetKey) -> Option<&FramingTarget> {
        self.targets.get(key)
    }

    /// Host-side mutation: position feeds, status changes
    pub fn target_mut(&mut self, key: TargetKey) -> Option<&mut FramingTarget> {
        self.targets.get_mut(key)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn next_target(&mut self) {
        if let Some(rig) = self.controller.active_rig_mut() {
            rig.next_target();
        }
    }

    pub fn previous_target(&mut self) {
        if let Some(rig) = self.controller.active_rig_mut() {
            rig.previous_target();
        }
    }

    pub fn selected_index(&self) -> i32 {
        self.controller
            .active_rig()
            .map_or(-1, |rig| rig.selected_index())
    }

    pub fn set_selected_index(&mut self, index: i32) {
        if let Some(rig) = self.controller.active_rig_mut() {
            rig.set_selected_index(index);
        }
    }

    // ------------------------------------------------------------------
    // Background and shake
    // ------------------------------------------------------------------

    /// Aim the active mode's background at a new color; the change runs
    /// through normal interpolation, never an instant set
    pub fn change_background(&mut self, color: Color) {
        if let Some(rig) = self.controller.active_rig_mut() {
            rig.target_background = color;
        }
    }

    /// Seconds of shake remaining, straight from the collaborator
    pub fn shake_time_left(&self) -> f32 {
        self.shake.time_left()
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.time_left() > 0.0
    }

    // ------------------------------------------------------------------
    // Escape hatches
    // ------------------------------------------------------------------

    pub fn controller(&self) -> &FramingController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FramingController {
        &mut self.controller
    }
}

impl Default for CameraDirector {
    fn default() -> Self {
        Self::new()
    }
}
