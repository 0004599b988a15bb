//! Vantage core value types
//!
//! Shared math and visual primitives for the camera engine: [`Vec3`] for
//! positions, offsets, and rate envelopes, and [`Color`] for background
//! transitions.

mod color;
mod vec;

pub use color::Color;
pub use vec::Vec3;
