//! Camera driven by the trackball controls.
//!
//! The camera is a plain perspective camera described by an eye position,
//! a look-at target and an up vector; the controls mutate those three
//! fields and the renderer reads back matrices or a GPU uniform.

/// Core camera struct and GPU uniform types.
pub mod core;

pub use self::core::{Camera, CameraUniform};
