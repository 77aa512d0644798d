use glam::Vec2;

/// Platform-agnostic input events.
///
/// These are fed into
/// [`TrackballControls::handle_event`](crate::TrackballControls::handle_event).
/// Positions are page coordinates, in the same space as the
/// [`ScreenRect`](super::ScreenRect) passed to `update_bounds`.
///
/// Keyboard input goes through
/// [`handle_key_down`](crate::TrackballControls::handle_key_down) and
/// [`handle_key_up`](crate::TrackballControls::handle_key_up) instead, so
/// this type stays `Copy`.
///
/// # Example
///
/// ```ignore
/// let consumed = controls.handle_event(InputEvent::PointerMoved {
///     x: 100.0,
///     y: 200.0,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed over the controlled element.
    PointerDown {
        /// Which button was pressed.
        button: MouseButton,
        /// Horizontal page position.
        x: f32,
        /// Vertical page position.
        y: f32,
    },
    /// Cursor moved to an absolute page position.
    PointerMoved {
        /// Horizontal page position.
        x: f32,
        /// Vertical page position.
        y: f32,
    },
    /// Mouse button released.
    PointerUp {
        /// Which button was released.
        button: MouseButton,
        /// Horizontal page position.
        x: f32,
        /// Vertical page position.
        y: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount.
        delta: ScrollDelta,
    },
    /// First finger(s) touched the element.
    TouchStart(Touches),
    /// Active touches moved.
    TouchMove(Touches),
    /// A finger was lifted; carries the touches still active.
    TouchEnd(Touches),
    /// Context menu requested (usually a right click).
    ContextMenu,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
    /// Any other button, by platform index.
    Other(u16),
}

/// Scroll amount, positive when scrolling away from the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollDelta {
    /// Scroll in lines (wheel notches).
    Lines(f32),
    /// Scroll in pixels (trackpads, high-resolution wheels).
    Pixels(f32),
}

impl ScrollDelta {
    /// Convert to wheel units: three per line, one per 40 pixels.
    #[must_use]
    pub fn wheel_units(self) -> f32 {
        match self {
            Self::Lines(lines) => lines * 3.0,
            Self::Pixels(pixels) => pixels / 40.0,
        }
    }

    /// Normalize a DOM `WheelEvent` `deltaY` and `deltaMode` pair.
    ///
    /// DOM `deltaY` is positive toward the user, so the sign is flipped.
    /// Line mode reports about three lines per notch; page mode one page
    /// per notch. Both become notches.
    #[must_use]
    pub fn from_dom(delta_y: f64, delta_mode: u32) -> Self {
        let delta_y = -delta_y as f32;
        match delta_mode {
            DOM_DELTA_PIXEL => Self::Pixels(delta_y),
            DOM_DELTA_LINE => Self::Lines(delta_y / DOM_LINES_PER_NOTCH),
            _ => Self::Lines(delta_y),
        }
    }
}

// `WheelEvent.deltaMode` values.
const DOM_DELTA_PIXEL: u32 = 0;
const DOM_DELTA_LINE: u32 = 1;

const DOM_LINES_PER_NOTCH: f32 = 3.0;

/// Maximum number of touch points carried by [`Touches`].
const MAX_TRACKED: usize = 2;

/// Snapshot of the active touch list.
///
/// Only the first two positions drive gestures, so only those are
/// stored; `count` is the full number of active touches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Touches {
    count: usize,
    points: [Vec2; MAX_TRACKED],
}

impl Touches {
    /// Build a snapshot from the full list of active touch positions.
    #[must_use]
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut tracked = [Vec2::ZERO; MAX_TRACKED];
        for (slot, point) in tracked.iter_mut().zip(points) {
            *slot = *point;
        }
        Self {
            count: points.len(),
            points: tracked,
        }
    }

    /// Number of active touches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no touch is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Page position of the `index`-th touch, if tracked.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Vec2> {
        (index < self.count.min(MAX_TRACKED)).then(|| self.points[index])
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(index) => Self::Other(index),
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseScrollDelta> for ScrollDelta {
    fn from(delta: winit::event::MouseScrollDelta) -> Self {
        match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => Self::Lines(y),
            winit::event::MouseScrollDelta::PixelDelta(pos) => {
                Self::Pixels(pos.y as f32)
            }
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event into an input event.
    ///
    /// `cursor` is the last cursor position reported by the window, since
    /// winit button events carry no position. Touch events are not handled
    /// here; route them through a [`TouchTracker`](super::TouchTracker).
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
        cursor: Vec2,
    ) -> Option<Self> {
        use winit::event::{ElementState, WindowEvent};

        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let button = MouseButton::from(*button);
                Some(match state {
                    ElementState::Pressed => Self::PointerDown {
                        button,
                        x: cursor.x,
                        y: cursor.y,
                    },
                    ElementState::Released => Self::PointerUp {
                        button,
                        x: cursor.x,
                        y: cursor.y,
                    },
                })
            }
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::PointerMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(Self::Scroll {
                delta: ScrollDelta::from(*delta),
            }),
            _ => None,
        }
    }
}

#[cfg(feature = "web")]
impl MouseButton {
    /// Map a DOM `MouseEvent.button` index.
    #[must_use]
    pub fn from_dom_index(index: i16) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            other => Self::Other(other.max(0) as u16),
        }
    }
}

#[cfg(feature = "web")]
impl InputEvent {
    /// Convert a DOM `mousedown` event.
    #[must_use]
    pub fn pointer_down(event: &web_sys::MouseEvent) -> Self {
        Self::PointerDown {
            button: MouseButton::from_dom_index(event.button()),
            x: event.page_x() as f32,
            y: event.page_y() as f32,
        }
    }

    /// Convert a DOM `mousemove` event.
    #[must_use]
    pub fn pointer_moved(event: &web_sys::MouseEvent) -> Self {
        Self::PointerMoved {
            x: event.page_x() as f32,
            y: event.page_y() as f32,
        }
    }

    /// Convert a DOM `mouseup` event.
    #[must_use]
    pub fn pointer_up(event: &web_sys::MouseEvent) -> Self {
        Self::PointerUp {
            button: MouseButton::from_dom_index(event.button()),
            x: event.page_x() as f32,
            y: event.page_y() as f32,
        }
    }

    /// Convert a DOM `wheel` event.
    #[must_use]
    pub fn scroll(event: &web_sys::WheelEvent) -> Self {
        Self::Scroll {
            delta: ScrollDelta::from_dom(event.delta_y(), event.delta_mode()),
        }
    }

    /// Convert a DOM `touchstart` event.
    #[must_use]
    pub fn touch_start(event: &web_sys::TouchEvent) -> Self {
        Self::TouchStart(dom_touches(event))
    }

    /// Convert a DOM `touchmove` event.
    #[must_use]
    pub fn touch_move(event: &web_sys::TouchEvent) -> Self {
        Self::TouchMove(dom_touches(event))
    }

    /// Convert a DOM `touchend` event.
    #[must_use]
    pub fn touch_end(event: &web_sys::TouchEvent) -> Self {
        Self::TouchEnd(dom_touches(event))
    }
}

#[cfg(feature = "web")]
fn dom_touches(event: &web_sys::TouchEvent) -> Touches {
    let list = event.touches();
    let points: Vec<Vec2> = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| Vec2::new(touch.page_x() as f32, touch.page_y() as f32))
        .collect();
    Touches::from_points(&points)
}
