//! Input listeners: pointer, wheel, touch, context-menu, and keyboard
//! handling for [`TrackballControls`].
//!
//! Every handler returns whether the event was consumed, i.e. whether the
//! host should prevent the platform default and stop propagation.

use glam::Vec2;

use super::{ControlEvent, ControlState, TrackballControls};
use crate::input::{InputEvent, MouseButton, ScrollDelta, Touches};

/// Zoom-start shift per wheel unit.
const WHEEL_ZOOM_STEP: f32 = 0.01;

// ── Unified input handler ──

impl TrackballControls {
    /// Process a platform-agnostic input event.
    ///
    /// Returns `true` when the event was consumed. Disconnected controls
    /// consume nothing; disabled controls consume only context-menu
    /// requests so right-drag panning never pops a menu.
    ///
    /// # Example
    ///
    /// ```ignore
    /// if controls.handle_event(InputEvent::PointerMoved { x, y }) {
    ///     event.prevent_default();
    /// }
    /// ```
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        if !self.connected {
            return false;
        }
        match event {
            InputEvent::ContextMenu => true,
            InputEvent::PointerDown { button, x, y } => {
                self.on_pointer_down(button, x, y)
            }
            InputEvent::PointerMoved { x, y } => self.on_pointer_moved(x, y),
            InputEvent::PointerUp { .. } => self.on_pointer_up(),
            InputEvent::Scroll { delta } => self.on_scroll(delta),
            InputEvent::TouchStart(touches) => self.on_touch_start(touches),
            InputEvent::TouchMove(touches) => self.on_touch_move(touches),
            InputEvent::TouchEnd(_) => self.on_touch_end(),
        }
    }

    /// Key pressed. While no gesture is active, holding a bound key makes
    /// the next pointer drag perform that gesture instead of the button's.
    ///
    /// Auto-repeated presses are ignored until the key is released.
    /// Returns `true` if the key selected a gesture.
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        if !self.connected || !self.enabled || self.key_held {
            return false;
        }
        self.key_held = true;
        self.prev_state = self.state;

        if self.state != ControlState::None {
            return false;
        }

        let next = match self.keybindings.lookup(key).map(ControlState::from) {
            Some(ControlState::Rotate) if !self.no_rotate => ControlState::Rotate,
            Some(ControlState::Zoom) if !self.no_zoom => ControlState::Zoom,
            Some(ControlState::Pan) if !self.no_pan => ControlState::Pan,
            _ => return false,
        };
        log::debug!("key {key} selects {next:?}");
        self.state = next;
        true
    }

    /// Key released: restore the gesture active before the key went down.
    /// A gesture that ended while the key was held is not restored.
    ///
    /// Returns `true` if a held key was released.
    pub fn handle_key_up(&mut self) -> bool {
        if !self.connected || !self.enabled {
            return false;
        }
        self.state = self.prev_state;
        std::mem::take(&mut self.key_held)
    }

    // ── Pointer ──

    fn on_pointer_down(&mut self, button: MouseButton, x: f32, y: f32) -> bool {
        if !self.enabled {
            return false;
        }

        if self.state == ControlState::None {
            self.state = ControlState::from_button(button);
        }

        match self.state {
            ControlState::Rotate if !self.no_rotate => {
                self.rotate_start = self.mouse_projection_on_ball(x, y);
                self.rotate_end = self.rotate_start;
            }
            ControlState::Zoom if !self.no_zoom => {
                self.zoom_start = self.mouse_on_screen(x, y);
                self.zoom_end = self.zoom_start;
            }
            ControlState::Pan if !self.no_pan => {
                self.pan_start = self.mouse_on_screen(x, y);
                self.pan_end = self.pan_start;
            }
            _ => {}
        }
        log::debug!("pointer {button:?} down, gesture {:?}", self.state);

        self.pointer_captured = true;
        self.events.push(ControlEvent::Start);
        true
    }

    fn on_pointer_moved(&mut self, x: f32, y: f32) -> bool {
        if !self.enabled || !self.pointer_captured {
            return false;
        }

        match self.state {
            ControlState::Rotate if !self.no_rotate => {
                self.rotate_end = self.mouse_projection_on_ball(x, y);
            }
            ControlState::Zoom if !self.no_zoom => {
                self.zoom_end = self.mouse_on_screen(x, y);
            }
            ControlState::Pan if !self.no_pan => {
                self.pan_end = self.mouse_on_screen(x, y);
            }
            _ => {}
        }

        self.update();
        true
    }

    fn on_pointer_up(&mut self) -> bool {
        if !self.enabled || !self.pointer_captured {
            return false;
        }

        self.update();
        self.state = ControlState::None;
        self.prev_state = ControlState::None;
        self.pointer_captured = false;
        self.events.push(ControlEvent::End);
        true
    }

    // ── Wheel ──

    fn on_scroll(&mut self, delta: ScrollDelta) -> bool {
        if !self.enabled || self.no_zoom {
            return false;
        }

        self.events.push(ControlEvent::Start);
        self.zoom_start.y += delta.wheel_units() * WHEEL_ZOOM_STEP;
        self.update();
        self.events.push(ControlEvent::End);
        true
    }

    // ── Touch ──

    fn on_touch_start(&mut self, touches: Touches) -> bool {
        if !self.enabled {
            return false;
        }

        match (touches.len(), touches.get(0), touches.get(1)) {
            (1, Some(p), _) => {
                self.state = ControlState::TouchRotate;
                self.rotate_start = self.mouse_projection_on_ball(p.x, p.y);
                self.rotate_end = self.rotate_start;
            }
            (2, Some(p1), Some(p2)) => {
                self.state = ControlState::TouchZoomPan;
                let distance = p1.distance(p2);
                self.touch_zoom_distance_start = distance;
                self.touch_zoom_distance_end = distance;
                self.pan_start = self.touch_midpoint(p1, p2);
                self.pan_end = self.pan_start;
            }
            _ => self.state = ControlState::None,
        }
        log::debug!("{} touch(es) down, gesture {:?}", touches.len(), self.state);

        self.events.push(ControlEvent::Start);
        true
    }

    fn on_touch_move(&mut self, touches: Touches) -> bool {
        if !self.enabled {
            return false;
        }

        match (touches.len(), touches.get(0), touches.get(1)) {
            (1, Some(p), _) => {
                self.rotate_end = self.mouse_projection_on_ball(p.x, p.y);
            }
            (2, Some(p1), Some(p2)) => {
                self.touch_zoom_distance_end = p1.distance(p2);
                self.pan_end = self.touch_midpoint(p1, p2);
            }
            _ => self.state = ControlState::None,
        }

        self.update();
        true
    }

    fn on_touch_end(&mut self) -> bool {
        if !self.enabled {
            return false;
        }

        self.update();
        self.state = ControlState::None;
        self.prev_state = ControlState::None;
        self.events.push(ControlEvent::End);
        true
    }

    /// Midpoint of two touches as a screen fraction.
    fn touch_midpoint(&self, p1: Vec2, p2: Vec2) -> Vec2 {
        (self.mouse_on_screen(p1.x, p1.y) + self.mouse_on_screen(p2.x, p2.y))
            * 0.5
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::Camera;
    use crate::input::ScreenRect;
    use crate::options::ControlOptions;

    const SCREEN: ScreenRect = ScreenRect::new(0.0, 0.0, 800.0, 600.0);

    fn controls() -> TrackballControls {
        let mut controls =
            TrackballControls::new(Camera::default(), &ControlOptions::default());
        controls.update_bounds(SCREEN);
        controls
    }

    fn events(controls: &mut TrackballControls) -> Vec<ControlEvent> {
        controls.drain_events().collect()
    }

    fn touches(points: &[(f32, f32)]) -> Touches {
        let points: Vec<Vec2> =
            points.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
        Touches::from_points(&points)
    }

    #[test]
    fn pointer_gesture_lifecycle() {
        let mut controls = controls();
        assert!(controls.handle_event(InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 400.0,
            y: 300.0,
        }));
        assert_eq!(controls.state(), ControlState::Rotate);
        assert!(controls.has_pointer_capture());

        assert!(controls.handle_event(InputEvent::PointerMoved { x: 450.0, y: 300.0 }));
        assert!(controls.handle_event(InputEvent::PointerUp {
            button: MouseButton::Left,
            x: 450.0,
            y: 300.0,
        }));
        assert_eq!(controls.state(), ControlState::None);
        assert!(!controls.has_pointer_capture());
        assert_eq!(
            events(&mut controls),
            vec![ControlEvent::Start, ControlEvent::Change, ControlEvent::End]
        );
    }

    #[test]
    fn buttons_map_to_gestures() {
        for (button, expected) in [
            (MouseButton::Left, ControlState::Rotate),
            (MouseButton::Middle, ControlState::Zoom),
            (MouseButton::Right, ControlState::Pan),
            (MouseButton::Other(4), ControlState::None),
        ] {
            let mut controls = controls();
            let _ = controls.handle_event(InputEvent::PointerDown {
                button,
                x: 10.0,
                y: 10.0,
            });
            assert_eq!(controls.state(), expected, "{button:?}");
        }
    }

    #[test]
    fn moves_without_capture_are_ignored() {
        let mut controls = controls();
        assert!(!controls.handle_event(InputEvent::PointerMoved { x: 10.0, y: 10.0 }));
        assert!(!controls.handle_event(InputEvent::PointerUp {
            button: MouseButton::Left,
            x: 10.0,
            y: 10.0,
        }));
        assert!(events(&mut controls).is_empty());
    }

    #[test]
    fn disabled_controls_ignore_input() {
        let mut controls = controls();
        controls.enabled = false;
        assert!(!controls.handle_event(InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 400.0,
            y: 300.0,
        }));
        assert!(!controls.handle_event(InputEvent::Scroll {
            delta: ScrollDelta::Lines(1.0),
        }));
        assert!(!controls.handle_event(InputEvent::TouchStart(touches(&[(1.0, 1.0)]))));
        assert!(!controls.handle_key_down("KeyA"));
        assert_eq!(controls.state(), ControlState::None);
        assert_eq!(controls.camera().eye, Vec3::new(0.0, 0.0, 10.0));
        assert!(events(&mut controls).is_empty());

        // The context menu is still suppressed.
        assert!(controls.handle_event(InputEvent::ContextMenu));
    }

    #[test]
    fn disposed_controls_ignore_everything() {
        let mut controls = controls();
        let _ = controls.handle_event(InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 400.0,
            y: 300.0,
        });
        controls.dispose();
        assert!(!controls.is_connected());
        assert!(!controls.has_pointer_capture());
        assert!(!controls.handle_event(InputEvent::ContextMenu));
        assert!(!controls.handle_event(InputEvent::PointerMoved { x: 500.0, y: 300.0 }));

        controls.connect();
        assert!(controls.handle_event(InputEvent::ContextMenu));
    }

    #[test]
    fn wheel_ignored_when_zoom_locked() {
        let mut controls = controls();
        controls.no_zoom = true;
        assert!(!controls.handle_event(InputEvent::Scroll {
            delta: ScrollDelta::Pixels(120.0),
        }));
        assert!(events(&mut controls).is_empty());
        assert_eq!(controls.camera().eye, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn held_key_overrides_button_gesture() {
        let mut controls = controls();
        assert!(controls.handle_key_down("KeyD"));
        assert_eq!(controls.state(), ControlState::Pan);

        let _ = controls.handle_event(InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 400.0,
            y: 300.0,
        });
        assert_eq!(controls.state(), ControlState::Pan);
        let _ = controls.handle_event(InputEvent::PointerMoved { x: 480.0, y: 300.0 });
        assert!((controls.target() - Vec3::new(-0.3, 0.0, 0.0)).length() < 1e-5);

        assert!(controls.handle_key_up());
        assert_eq!(controls.state(), ControlState::None);
    }

    #[test]
    fn key_repeat_does_not_stick_gesture() {
        let mut controls = controls();
        assert!(controls.handle_key_down("KeyA"));
        assert!(!controls.handle_key_down("KeyA"));
        assert_eq!(controls.state(), ControlState::Rotate);
        assert!(controls.handle_key_up());
        assert_eq!(controls.state(), ControlState::None);
    }

    #[test]
    fn locked_or_unbound_keys_select_nothing() {
        let mut controls = controls();
        controls.no_zoom = true;
        assert!(!controls.handle_key_down("KeyS"));
        assert_eq!(controls.state(), ControlState::None);
        let _ = controls.handle_key_up();

        assert!(!controls.handle_key_down("KeyQ"));
        assert_eq!(controls.state(), ControlState::None);
    }

    #[test]
    fn pinch_out_zooms_in() {
        let mut controls = controls();
        assert!(controls.handle_event(InputEvent::TouchStart(touches(&[
            (300.0, 300.0),
            (500.0, 300.0),
        ]))));
        assert_eq!(controls.state(), ControlState::TouchZoomPan);

        assert!(controls.handle_event(InputEvent::TouchMove(touches(&[
            (250.0, 300.0),
            (550.0, 300.0),
        ]))));
        // 200 px apart → 300 px apart; midpoint unchanged, so no pan.
        let camera = controls.camera();
        assert!((camera.target_distance() - 10.0 * 200.0 / 300.0).abs() < 1e-4);
        assert!(camera.target.length() < 1e-6);

        assert!(controls.handle_event(InputEvent::TouchEnd(touches(&[]))));
        assert_eq!(controls.state(), ControlState::None);
        assert_eq!(
            events(&mut controls),
            vec![ControlEvent::Start, ControlEvent::Change, ControlEvent::End]
        );
    }

    #[test]
    fn two_finger_drag_pans() {
        let mut controls = controls();
        let _ = controls.handle_event(InputEvent::TouchStart(touches(&[
            (300.0, 300.0),
            (500.0, 300.0),
        ])));
        let _ = controls.handle_event(InputEvent::TouchMove(touches(&[
            (380.0, 300.0),
            (580.0, 300.0),
        ])));
        let camera = controls.camera();
        assert!((camera.target_distance() - 10.0).abs() < 1e-4);
        assert!((camera.target - Vec3::new(-0.3, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn one_finger_drag_rotates() {
        let mut controls = controls();
        let _ = controls.handle_event(InputEvent::TouchStart(touches(&[(400.0, 300.0)])));
        assert_eq!(controls.state(), ControlState::TouchRotate);
        let _ = controls.handle_event(InputEvent::TouchMove(touches(&[(500.0, 300.0)])));
        let camera = controls.camera();
        assert!(camera.eye.x < 0.0);
        assert!((camera.target_distance() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn coincident_touches_leave_distance_alone() {
        let mut controls = controls();
        let _ = controls.handle_event(InputEvent::TouchStart(touches(&[
            (400.0, 300.0),
            (400.0, 300.0),
        ])));
        let _ = controls.handle_event(InputEvent::TouchMove(touches(&[
            (350.0, 300.0),
            (450.0, 300.0),
        ])));
        let camera = controls.camera();
        assert!(camera.eye.is_finite());
        assert!((camera.target_distance() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn three_touches_cancel_gesture() {
        let mut controls = controls();
        let _ = controls.handle_event(InputEvent::TouchStart(touches(&[
            (1.0, 1.0),
            (2.0, 2.0),
            (3.0, 3.0),
        ])));
        assert_eq!(controls.state(), ControlState::None);
    }

    #[test]
    fn key_released_after_drag_restores_no_gesture() {
        let mut controls = controls();
        let _ = controls.handle_event(InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 400.0,
            y: 300.0,
        });
        assert!(!controls.handle_key_down("KeyD"));
        let _ = controls.handle_event(InputEvent::PointerUp {
            button: MouseButton::Left,
            x: 400.0,
            y: 300.0,
        });
        assert!(controls.handle_key_up());
        assert_eq!(controls.state(), ControlState::None);

        let _ = controls.handle_event(InputEvent::PointerDown {
            button: MouseButton::Right,
            x: 400.0,
            y: 300.0,
        });
        assert_eq!(controls.state(), ControlState::Pan);
    }

    #[test]
    fn key_released_after_touch_restores_no_gesture() {
        let mut controls = controls();
        let _ = controls.handle_event(InputEvent::TouchStart(touches(&[(400.0, 300.0)])));
        let _ = controls.handle_key_down("KeyA");
        let _ = controls.handle_event(InputEvent::TouchEnd(touches(&[])));
        let _ = controls.handle_key_up();
        assert_eq!(controls.state(), ControlState::None);
    }

    #[test]
    fn extra_touch_mid_gesture_cancels_it() {
        let mut controls = controls();
        let _ = controls.handle_event(InputEvent::TouchStart(touches(&[
            (300.0, 300.0),
            (500.0, 300.0),
        ])));
        assert_eq!(controls.state(), ControlState::TouchZoomPan);

        assert!(controls.handle_event(InputEvent::TouchMove(touches(&[
            (250.0, 300.0),
            (550.0, 300.0),
            (400.0, 100.0),
        ]))));
        assert_eq!(controls.state(), ControlState::None);
        let camera = controls.camera();
        assert!((camera.target_distance() - 10.0).abs() < 1e-4);
        assert_eq!(camera.target, Vec3::ZERO);
    }
}
