//! Framing modes
//!
//! The mode state machine. Each mode owns one persistent [`CameraRig`],
//! built lazily on first entry and kept across switches, so re-entering a
//! mode resumes exactly where it left off. Per tick the active mode prunes
//! its subject list, recomputes its rig's targets, advances the rig, and
//! emits a frame to the display surface.

use vantage_core::Vec3;

use crate::presets::ModePreset;
use crate::rig::CameraRig;
use crate::target::{FramingTarget, TargetSet};
use crate::viewport::DisplaySurface;

/// How camera targets are derived each tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FramingMode {
    /// No automatic retargeting; external callers steer the rig
    #[default]
    Free,
    /// Locked orthographic view of the arena origin
    Fixed,
    /// Track the selected subject
    TargetOne,
    /// Frame the whole group of subjects
    TargetAll,
}

impl FramingMode {
    pub const COUNT: usize = 4;
    pub const ALL: [FramingMode; Self::COUNT] = [
        FramingMode::Free,
        FramingMode::Fixed,
        FramingMode::TargetOne,
        FramingMode::TargetAll,
    ];

    pub fn index(self) -> usize {
        match self {
            FramingMode::Free => 0,
            FramingMode::Fixed => 1,
            FramingMode::TargetOne => 2,
            FramingMode::TargetAll => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FramingMode::Free => "free",
            FramingMode::Fixed => "fixed",
            FramingMode::TargetOne => "target-one",
            FramingMode::TargetAll => "target-all",
        }
    }
}

/// Tuned game-feel constants for the framing geometry
///
/// None of these are derived from anything physical; they are knobs.
#[derive(Clone, Copy, Debug)]
pub struct FramingTuning {
    /// Offset depth the Fixed mode locks to
    pub fixed_depth: f32,
    /// Orthographic size the Fixed mode locks to
    pub fixed_ortho_size: f32,
    /// Offset depth used when nothing is tracked, and the base for
    /// single-subject framing
    pub default_depth: f32,
    /// Extra depth per unit of subject radius in TargetOne
    pub radius_depth_factor: f32,
    /// Group spread clamp band, lower bound
    pub spread_min: f32,
    /// Group spread clamp band, upper bound
    pub spread_max: f32,
    /// Multiplier on (spread + mean radius) x (count + 1) in TargetAll
    pub group_depth_scale: f32,
}

impl Default for FramingTuning {
    fn default() -> Self {
        Self {
            fixed_depth: 10.0,
            fixed_ortho_size: 10.0,
            default_depth: 10.0,
            radius_depth_factor: 4.0,
            spread_min: 15.0,
            spread_max: 100.0,
            group_depth_scale: 0.25,
        }
    }
}

/// Edge-aware separation between two circular-footprint subjects
///
/// Each subject's x and y are shifted by its own radius toward the other
/// subject (axes where the coordinates are equal are left alone), then the
/// Euclidean distance of the adjusted points is taken. For two subjects
/// apart on a single axis this is center distance minus both radii.
/// Symmetric by construction.
pub fn pair_separation(a: &FramingTarget, b: &FramingTarget) -> f32 {
    let la = a.location();
    let lb = b.location();
    let pa = nudge_toward(la, a.radius(), lb);
    let pb = nudge_toward(lb, b.radius(), la);
    pa.distance(pb)
}

fn nudge_toward(p: Vec3, radius: f32, other: Vec3) -> Vec3 {
    let mut q = p;
    if other.x > p.x {
        q.x += radius;
    } else if other.x < p.x {
        q.x -= radius;
    }
    if other.y > p.y {
        q.y += radius;
    } else if other.y < p.y {
        q.y -= radius;
    }
    q
}

/// Mode-keyed collection of rigs plus the active-mode pointer
pub struct FramingController {
    rigs: [Option<CameraRig>; FramingMode::COUNT],
    mode: FramingMode,
    pub tuning: FramingTuning,
}

impl FramingController {
    pub fn new(tuning: FramingTuning) -> Self {
        Self {
            rigs: [None, None, None, None],
            mode: FramingMode::Free,
            tuning,
        }
    }

    pub fn mode(&self) -> FramingMode {
        self.mode
    }

    /// Switch the active mode. Same-mode calls are no-ops; a mode entered
    /// for the first time gets a rig built from the preset. Rigs of other
    /// modes are untouched.
    pub fn set_mode(&mut self, mode: FramingMode, preset: &ModePreset) {
        if mode == self.mode {
            return;
        }
        tracing::debug!(from = self.mode.name(), to = mode.name(), "camera mode switch");
        self.mode = mode;
        self.ensure_rig(mode, preset);
    }

    /// Build the mode's rig from the preset if it does not exist yet
    pub fn ensure_rig(&mut self, mode: FramingMode, preset: &ModePreset) {
        let slot = &mut self.rigs[mode.index()];
        if slot.is_none() {
            *slot = Some(preset.build_rig());
        }
    }

    /// Throw away the active mode's rig and rebuild it from the preset
    pub fn reset_camera(&mut self, preset: &ModePreset) {
        self.rigs[self.mode.index()] = Some(preset.build_rig());
    }

    pub fn rig(&self, mode: FramingMode) -> Option<&CameraRig> {
        self.rigs[mode.index()].as_ref()
    }

    pub fn rig_mut(&mut self, mode: FramingMode) -> Option<&mut CameraRig> {
        self.rigs[mode.index()].as_mut()
    }

    pub fn active_rig(&self) -> Option<&CameraRig> {
        self.rig(self.mode)
    }

    pub fn active_rig_mut(&mut self) -> Option<&mut CameraRig> {
        self.rigs[self.mode.index()].as_mut()
    }

    /// One frame: prune, retarget, advance, emit. The order is fixed.
    pub fn tick(&mut self, dt: f32, targets: &TargetSet, surface: &mut dyn DisplaySurface) {
        let tuning = self.tuning;
        let mode = self.mode;
        let Some(rig) = self.rigs[mode.index()].as_mut() else {
            return;
        };

        rig.prune(targets);

        match mode {
            FramingMode::Free => {}
            FramingMode::Fixed => Self::retarget_fixed(rig, &tuning),
            FramingMode::TargetOne => Self::retarget_one(rig, targets, &tuning),
            FramingMode::TargetAll => Self::retarget_all(rig, targets, &tuning),
        }

        rig.tick(dt);
        surface.apply(&rig.frame());
    }

    fn retarget_fixed(rig: &mut CameraRig, tuning: &FramingTuning) {
        rig.orthographic = true;
        rig.target_position = Vec3::ZERO;
        rig.target_offset.z = tuning.fixed_depth;
        rig.set_target_ortho_size(tuning.fixed_ortho_size);
    }

    fn retarget_one(rig: &mut CameraRig, targets: &TargetSet, tuning: &FramingTuning) {
        if let Some(subject) = rig.selected_key().and_then(|key| targets.get(key)) {
            rig.target_position = subject.location();
            rig.target_offset.z =
                tuning.default_depth + subject.radius() * tuning.radius_depth_factor;
        } else if rig.target_count() == 0 {
            rig.target_position = Vec3::ZERO;
            rig.target_offset.z = tuning.default_depth;
        }
        // Targets present but nothing selected: leave the targets standing
    }

    fn retarget_all(rig: &mut CameraRig, targets: &TargetSet, tuning: &FramingTuning) {
        let mut subjects: Vec<&FramingTarget> = Vec::with_capacity(rig.target_count());
        for key in rig.targets() {
            if let Some(subject) = targets.get(*key) {
                subjects.push(subject);
            }
        }
        // Guard the division: no subjects, no recomputation
        if subjects.is_empty() {
            return;
        }

        let count = subjects.len() as f32;
        let mut sum = Vec3::ZERO;
        let mut radius_sum = 0.0;
        for subject in &subjects {
            sum = sum.add(subject.location());
            radius_sum += subject.radius();
        }
        let centroid = sum.scale(1.0 / count);
        let mean_radius = radius_sum / count;

        let mut spread = 0.0_f32;
        for i in 0..subjects.len() {
            for j in (i + 1)..subjects.len() {
                spread = spread.max(pair_separation(subjects[i], subjects[j]));
            }
        }
        let spread = spread.clamp(tuning.spread_min, tuning.spread_max);

        rig.target_position = centroid;
        rig.target_offset.z = (spread + mean_radius) * (count + 1.0) * tuning.group_depth_scale;
    }
}
