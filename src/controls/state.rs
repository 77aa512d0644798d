use crate::input::MouseButton;
use crate::options::ControlAction;

/// Active gesture of the trackball state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlState {
    /// No gesture in progress.
    #[default]
    None,
    /// Pointer drag rotates around the target.
    Rotate,
    /// Pointer drag zooms toward / away from the target.
    Zoom,
    /// Pointer drag pans eye and target together.
    Pan,
    /// Single-finger drag rotates.
    TouchRotate,
    /// Two-finger pinch zooms while the midpoint pans.
    TouchZoomPan,
}

impl ControlState {
    /// Gesture started by pressing `button` with no other gesture active.
    #[must_use]
    pub fn from_button(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::Rotate,
            MouseButton::Middle => Self::Zoom,
            MouseButton::Right => Self::Pan,
            MouseButton::Other(_) => Self::None,
        }
    }
}

impl From<ControlAction> for ControlState {
    fn from(action: ControlAction) -> Self {
        match action {
            ControlAction::Rotate => Self::Rotate,
            ControlAction::Zoom => Self::Zoom,
            ControlAction::Pan => Self::Pan,
        }
    }
}

/// Notifications queued by the controls for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    /// An interaction began (pointer down, touch start, wheel).
    Start,
    /// The camera moved; the host should redraw.
    Change,
    /// An interaction ended.
    End,
}
