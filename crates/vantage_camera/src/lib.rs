//! Vantage camera engine
//!
//! Decides where the viewport sits, what it shows, and how it changes over
//! time as a match moves between free movement, a fixed viewpoint,
//! single-subject tracking, and whole-group framing.
//!
//! # Architecture
//!
//! - [`CameraRig`] - per-mode interpolation state: advances background color,
//!   field of view, aspect ratio, orthographic size, position, and offset
//!   toward their targets every tick
//! - [`FramingController`] - the mode state machine; owns one persistent rig
//!   per mode and recomputes targets from tracked subjects each frame
//! - [`FramingTarget`] / [`TargetSet`] - trackable subjects with radius and
//!   liveness, stored in an arena with stable keys
//! - [`CameraDirector`] - the top-level context object the host constructs
//!   once: presets, multi-mode target registration, shake queries, tick
//!
//! # Example
//!
//! ```ignore
//! let mut director = CameraDirector::new();
//! let player = director.spawn_target(FramingTarget::new(Vec3::ZERO, 1.0));
//! director.add_target(player, &[FramingMode::TargetOne, FramingMode::TargetAll]);
//! director.set_mode(FramingMode::TargetOne)?;
//!
//! // Each frame:
//! director.tick(dt, &mut surface);
//! ```

pub mod director;
pub mod error;
pub mod lerp;
pub mod modes;
pub mod presets;
pub mod rig;
pub mod shake;
pub mod target;
pub mod velocity;
pub mod viewport;

pub use director::CameraDirector;
pub use error::CameraError;
pub use lerp::Interpolate;
pub use modes::{FramingController, FramingMode, FramingTuning};
pub use presets::ModePreset;
pub use rig::CameraRig;
pub use shake::{NoShake, ShakeSource, ShakeTracker};
pub use target::{FramingTarget, TargetKey, TargetSet, TargetStatus};
pub use velocity::ApproachVelocity;
pub use viewport::{CameraFrame, DisplaySurface, RecordingSurface};

pub use vantage_core::{Color, Vec3};
