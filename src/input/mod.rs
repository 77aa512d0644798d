//! Input handling: platform-agnostic event types, element bounds, and
//! touch aggregation feeding the trackball controls.

/// Platform-agnostic input events.
pub mod event;
/// Element bounds in page coordinates.
pub mod screen;
/// Per-finger touch aggregation.
pub mod touch;

pub use event::{InputEvent, MouseButton, ScrollDelta, Touches};
pub use screen::ScreenRect;
pub use touch::{TouchPhase, TouchTracker};
