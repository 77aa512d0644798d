// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Trackball camera controls for 3D viewers.
//!
//! Translates raw pointer, touch, wheel, and keyboard input into camera
//! transform updates: arcball rotation around a target, distance-based
//! zoom, and screen-space panning. Optionally feeds shader uniforms with
//! the viewport width and the eye-to-target depth.
//!
//! # Key entry points
//!
//! - [`controls::TrackballControls`] - the interaction state machine
//! - [`camera::Camera`] - the controlled perspective camera
//! - [`input::InputEvent`] - platform-agnostic input events
//! - [`options::Options`] - TOML-backed configuration presets
//!
//! # Usage
//!
//! ```
//! use trackball::{Camera, ControlOptions, InputEvent, MouseButton,
//!     ScreenRect, TrackballControls};
//!
//! let mut controls =
//!     TrackballControls::new(Camera::default(), &ControlOptions::default());
//! controls.update_bounds(ScreenRect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let consumed = controls.handle_event(InputEvent::PointerDown {
//!     button: MouseButton::Left,
//!     x: 400.0,
//!     y: 300.0,
//! });
//! assert!(consumed);
//! let _ = controls.handle_event(InputEvent::PointerMoved { x: 420.0, y: 300.0 });
//! let _ = controls.handle_event(InputEvent::PointerUp {
//!     button: MouseButton::Left,
//!     x: 420.0,
//!     y: 300.0,
//! });
//!
//! for event in controls.drain_events() {
//!     log::debug!("{event:?}");
//! }
//! ```
//!
//! Host integrations are feature-gated: `viewer` converts winit window
//! events, `web` converts DOM events via `web-sys`, and `gpu` uploads the
//! camera and viewport uniforms through wgpu.

pub mod camera;
pub mod controls;
pub mod error;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod input;
pub mod options;
pub mod uniforms;

pub use camera::{Camera, CameraUniform};
pub use controls::{ControlEvent, ControlState, TrackballControls};
pub use error::TrackballError;
pub use input::{
    InputEvent, MouseButton, ScreenRect, ScrollDelta, TouchTracker, Touches,
};
pub use options::{
    CameraOptions, ControlAction, ControlOptions, KeybindingOptions, Options,
};
pub use uniforms::{UniformFeed, ViewportUniform};
