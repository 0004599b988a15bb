//! Error types
//!
//! Numeric input is clamped rather than rejected throughout the engine, so
//! the only fallible surface is the named preset registry.

use thiserror::Error;

/// Camera engine errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CameraError {
    /// A preset name was looked up that was never registered
    #[error("unknown camera preset `{0}`")]
    UnknownPreset(String),
}
