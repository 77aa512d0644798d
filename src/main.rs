//! Interactive trackball demo: a bare window whose pointer, wheel, touch,
//! and keyboard input drive a camera, logging every camera change.
//!
//! ```text
//! RUST_LOG=info trackball [preset.toml]
//! ```
//!
//! Hold `KeyA`/`KeyS`/`KeyD` (by default) to force rotate/zoom/pan,
//! `KeyR` resets the camera, `Escape` quits.

use std::{path::Path, sync::Arc};

use glam::Vec2;
use trackball::{
    ControlEvent, InputEvent, Options, ScreenRect, TouchTracker,
    TrackballControls,
};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

struct DemoApp {
    window: Option<Arc<Window>>,
    controls: Option<TrackballControls>,
    options: Options,
    touches: TouchTracker,
    cursor: Vec2,
}

impl DemoApp {
    fn new(options: Options) -> Self {
        Self {
            window: None,
            controls: None,
            options,
            touches: TouchTracker::new(),
            cursor: Vec2::ZERO,
        }
    }

    fn report_changes(&mut self) {
        let Some(controls) = &mut self.controls else {
            return;
        };
        if drain_changed(controls) {
            let camera = controls.camera();
            log::info!(
                "eye {:.3} target {:.3} up {:.3} distance {:.3}",
                camera.eye,
                camera.target,
                camera.up,
                camera.target_distance()
            );
            // Damped motion keeps settling on later frames.
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &winit::event::KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let Some(controls) = &mut self.controls else {
            return;
        };

        match (event.state, code) {
            (ElementState::Pressed, KeyCode::Escape) => event_loop.exit(),
            (ElementState::Pressed, KeyCode::KeyR) => controls.reset(),
            (ElementState::Pressed, _) => {
                let _ = controls.handle_key_down(&format!("{code:?}"));
            }
            (ElementState::Released, _) => {
                let _ = controls.handle_key_up();
            }
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title("Trackball");
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let screen = ScreenRect::from_size(size.width as f32, size.height as f32);
        self.controls = Some(TrackballControls::from_options(&self.options, screen));
        self.window = Some(window);
        log::info!("window {}x{} ready", size.width, size.height);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                if let Some(controls) = &mut self.controls {
                    controls.handle_resize(ScreenRect::from_size(
                        size.width as f32,
                        size.height as f32,
                    ));
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::Focused(false) => self.touches.clear(),
            WindowEvent::RedrawRequested => {
                if let Some(controls) = &mut self.controls {
                    controls.update();
                }
            }
            WindowEvent::KeyboardInput { event: key, .. } => {
                if !key.repeat {
                    self.handle_key(event_loop, key);
                }
            }
            _ => {}
        }

        let input = match &event {
            WindowEvent::Touch(touch) => self.touches.handle_winit(touch),
            other => InputEvent::from_window_event(other, self.cursor),
        };
        if let (Some(input), Some(controls)) = (input, &mut self.controls) {
            let _ = controls.handle_event(input);
        }

        self.report_changes();
    }
}

/// Take the queued control events, reporting whether the camera changed.
fn drain_changed(controls: &mut TrackballControls) -> bool {
    controls
        .drain_events()
        .fold(false, |changed, e| changed || e == ControlEvent::Change)
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = DemoApp::new(options);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackball::{Camera, ControlOptions, MouseButton};

    #[test]
    fn damped_drag_settles_over_frames() {
        let options = ControlOptions {
            static_moving: false,
            ..ControlOptions::default()
        };
        let mut controls = TrackballControls::new(Camera::default(), &options);
        controls.update_bounds(ScreenRect::from_size(800.0, 600.0));
        for event in [
            InputEvent::PointerDown { button: MouseButton::Left, x: 400.0, y: 300.0 },
            InputEvent::PointerMoved { x: 500.0, y: 300.0 },
            InputEvent::PointerUp { button: MouseButton::Left, x: 500.0, y: 300.0 },
        ] {
            let _ = controls.handle_event(event);
        }
        assert!(drain_changed(&mut controls));
        let released = controls.camera().eye;

        // One update per redraw until a frame brings no change.
        let mut frames = 0;
        loop {
            controls.update();
            if !drain_changed(&mut controls) {
                break;
            }
            frames += 1;
            assert!(frames < 1000, "damped motion never settled");
        }
        assert!(frames > 1);
        assert!(controls.camera().eye.x < released.x);
        assert!((controls.camera().target_distance() - 10.0).abs() < 1e-3);
    }
}
