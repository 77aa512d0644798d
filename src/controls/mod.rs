//! Trackball camera controls.
//!
//! [`TrackballControls`] owns the [`Camera`] and every piece of transient
//! interaction state. Input arrives through
//! [`handle_event`](TrackballControls::handle_event) and the key handlers;
//! each gesture records a start and end point, and
//! [`update`](TrackballControls::update) turns the difference into a
//! rotation, zoom, or pan of the camera around its target.
//!
//! With `static_moving` (the default) a gesture is consumed in one update.
//! Without it, each update consumes `dynamic_damping_factor` of what is
//! left, so the host has to keep calling `update` every frame for the
//! motion to ease out.

mod arcball;
mod gestures;
mod listeners;
mod state;

use glam::{Vec2, Vec3};

pub use self::state::{ControlEvent, ControlState};
use crate::camera::Camera;
use crate::input::ScreenRect;
use crate::options::{ControlOptions, KeybindingOptions, Options};
use crate::uniforms::{UniformFeed, ViewportUniform};

/// Minimum squared eye displacement reported as a [`ControlEvent::Change`].
const CHANGE_EPSILON: f32 = 0.000_001;

/// Interactive trackball controller for a perspective camera.
pub struct TrackballControls {
    camera: Camera,

    /// Whether input is processed at all.
    pub enabled: bool,
    /// Rotation gain. 2.0 together with `static_moving` makes rotation
    /// free of hysteresis: any closed drag path restores the orientation.
    pub rotate_speed: f32,
    /// Zoom gain.
    pub zoom_speed: f32,
    /// Pan gain.
    pub pan_speed: f32,
    /// Disable rotation.
    pub no_rotate: bool,
    /// Disable zoom.
    pub no_zoom: bool,
    /// Disable panning.
    pub no_pan: bool,
    /// Suppress camera roll from drags near the rim of the ball.
    pub no_roll: bool,
    /// Apply gestures in a single update instead of easing them out.
    pub static_moving: bool,
    /// Fraction of the remaining gesture consumed per update when
    /// `static_moving` is off.
    pub dynamic_damping_factor: f32,
    /// Closest allowed eye-to-target distance.
    pub min_distance: f32,
    /// Farthest allowed eye-to-target distance.
    pub max_distance: f32,

    keybindings: KeybindingOptions,
    screen: ScreenRect,

    state: ControlState,
    prev_state: ControlState,

    /// Target → eye vector, valid during `update`.
    eye: Vec3,
    rotate_start: Vec3,
    rotate_end: Vec3,
    zoom_start: Vec2,
    zoom_end: Vec2,
    touch_zoom_distance_start: f32,
    touch_zoom_distance_end: f32,
    pan_start: Vec2,
    pan_end: Vec2,

    last_position: Vec3,
    target0: Vec3,
    position0: Vec3,
    up0: Vec3,

    connected: bool,
    pointer_captured: bool,
    key_held: bool,

    uniforms: Option<UniformFeed>,
    events: Vec<ControlEvent>,
}

impl TrackballControls {
    /// Wrap `camera` in trackball controls.
    ///
    /// The camera's current eye, target, and up become the state restored
    /// by [`reset`](Self::reset). The controls start connected with an
    /// empty screen rect; call [`update_bounds`](Self::update_bounds)
    /// before the first pointer interaction.
    #[must_use]
    pub fn new(camera: Camera, options: &ControlOptions) -> Self {
        let mut controls = Self {
            camera,
            enabled: true,
            rotate_speed: 2.0,
            zoom_speed: 1.2,
            pan_speed: 0.3,
            no_rotate: false,
            no_zoom: false,
            no_pan: false,
            no_roll: false,
            static_moving: true,
            dynamic_damping_factor: 0.2,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            keybindings: KeybindingOptions::default(),
            screen: ScreenRect::default(),
            state: ControlState::None,
            prev_state: ControlState::None,
            eye: camera.eye - camera.target,
            rotate_start: Vec3::ZERO,
            rotate_end: Vec3::ZERO,
            zoom_start: Vec2::ZERO,
            zoom_end: Vec2::ZERO,
            touch_zoom_distance_start: 0.0,
            touch_zoom_distance_end: 0.0,
            pan_start: Vec2::ZERO,
            pan_end: Vec2::ZERO,
            last_position: Vec3::ZERO,
            target0: camera.target,
            position0: camera.eye,
            up0: camera.up,
            connected: false,
            pointer_captured: false,
            key_held: false,
            uniforms: None,
            events: Vec::new(),
        };
        controls.apply_options(options);
        controls.connect();

        // Settle the camera against the configured limits. Nobody is
        // listening yet, so the resulting change notification is dropped.
        controls.update();
        controls.events.clear();
        controls
    }

    /// Build camera and controls from a full options preset.
    #[must_use]
    pub fn from_options(options: &Options, screen: ScreenRect) -> Self {
        let camera = Camera::from_options(&options.camera, screen.aspect());
        let mut controls = Self::new(camera, &options.controls);
        controls.keybindings = options.keybindings.clone();
        controls.update_bounds(screen);
        controls
    }

    /// Replace every interaction parameter with the values in `options`.
    pub fn apply_options(&mut self, options: &ControlOptions) {
        self.enabled = options.enabled;
        self.rotate_speed = options.rotate_speed;
        self.zoom_speed = options.zoom_speed;
        self.pan_speed = options.pan_speed;
        self.no_rotate = options.no_rotate;
        self.no_zoom = options.no_zoom;
        self.no_pan = options.no_pan;
        self.no_roll = options.no_roll;
        self.static_moving = options.static_moving;
        self.dynamic_damping_factor = options.dynamic_damping_factor;
        self.min_distance = options.min_distance;
        self.max_distance = options.max_distance;
    }

    /// Snapshot the current interaction parameters, e.g. to save a preset.
    #[must_use]
    pub fn options(&self) -> ControlOptions {
        ControlOptions {
            enabled: self.enabled,
            rotate_speed: self.rotate_speed,
            zoom_speed: self.zoom_speed,
            pan_speed: self.pan_speed,
            no_rotate: self.no_rotate,
            no_zoom: self.no_zoom,
            no_pan: self.no_pan,
            no_roll: self.no_roll,
            static_moving: self.static_moving,
            dynamic_damping_factor: self.dynamic_damping_factor,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Start listening for input. Called by [`new`](Self::new).
    pub fn connect(&mut self) {
        if !self.connected {
            log::debug!("trackball controls connected");
        }
        self.connected = true;
    }

    /// Stop listening for input and release any pointer capture.
    ///
    /// Every event is ignored until [`connect`](Self::connect) is called
    /// again.
    pub fn dispose(&mut self) {
        if self.connected {
            log::debug!("trackball controls disposed");
        }
        self.connected = false;
        self.pointer_captured = false;
        self.key_held = false;
    }

    /// Whether the controls are listening for input.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Whether a pointer drag is in progress. While true, the host should
    /// route pointer moves and releases from the whole window, not just
    /// the controlled element.
    #[must_use]
    pub fn has_pointer_capture(&self) -> bool {
        self.pointer_captured
    }

    // ── Bounds ───────────────────────────────────────────────────────────

    /// Record the element's bounds in page coordinates.
    ///
    /// Must be refreshed when the element is resized and when the page is
    /// scrolled; hosts typically call it at the start of every pointer or
    /// touch interaction.
    pub fn update_bounds(&mut self, screen: ScreenRect) {
        self.screen = screen;
        if let Some(feed) = &mut self.uniforms {
            feed.set_renderer_width(screen.width);
        }
    }

    /// Resize hook: update bounds and the camera's aspect ratio.
    pub fn handle_resize(&mut self, screen: ScreenRect) {
        self.update_bounds(screen);
        if screen.has_area() {
            self.camera.aspect = screen.aspect();
        }
    }

    /// Current element bounds.
    #[must_use]
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    // ── Camera ───────────────────────────────────────────────────────────

    /// The controlled camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the controlled camera. Call
    /// [`update`](Self::update) afterwards to re-apply distance limits.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.camera.target
    }

    /// Move the orbit target; the camera keeps its eye position and looks
    /// at the new target.
    pub fn set_target(&mut self, target: Vec3) {
        self.camera.look_at(target);
    }

    /// Active gesture.
    #[must_use]
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Key bindings for keyboard-selected gestures.
    #[must_use]
    pub fn keybindings(&self) -> &KeybindingOptions {
        &self.keybindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn keybindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.keybindings
    }

    /// Take all queued notifications, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, ControlEvent> {
        self.events.drain(..)
    }

    // ── Update / reset ───────────────────────────────────────────────────

    /// Apply pending gestures to the camera.
    ///
    /// Called by the event handlers; with `static_moving` off the host
    /// should also call it every frame so damped motion can settle.
    pub fn update(&mut self) {
        self.eye = self.camera.eye - self.camera.target;

        if !self.no_rotate {
            self.rotate_camera();
        }
        if !self.no_zoom {
            self.zoom_camera();
        }
        if !self.no_pan {
            self.pan_camera();
        }

        self.camera.eye = self.camera.target + self.eye;
        self.check_distances();
        self.camera.look_at(self.camera.target);

        if self.last_position.distance_squared(self.camera.eye)
            > CHANGE_EPSILON
        {
            log::trace!(
                "camera moved to {} (target {})",
                self.camera.eye,
                self.camera.target
            );
            self.events.push(ControlEvent::Change);
            self.last_position = self.camera.eye;
        }

        if let Some(feed) = &mut self.uniforms {
            feed.set_target_depth(self.camera.target_distance());
        }
    }

    /// Restore the camera placement captured at construction.
    pub fn reset(&mut self) {
        log::debug!("trackball controls reset");
        self.state = ControlState::None;
        self.prev_state = ControlState::None;

        self.camera.eye = self.position0;
        self.camera.up = self.up0;
        self.camera.look_at(self.target0);
        self.eye = self.camera.eye - self.camera.target;

        self.events.push(ControlEvent::Change);
        self.last_position = self.camera.eye;
    }

    // ── Shader uniforms ──────────────────────────────────────────────────

    /// Start feeding viewport width and target depth into a uniform.
    pub fn attach_uniforms(&mut self) {
        let mut feed = UniformFeed::default();
        feed.set_renderer_width(self.screen.width);
        feed.set_target_depth(self.camera.target_distance());
        self.uniforms = Some(feed);
    }

    /// Stop feeding uniforms.
    pub fn detach_uniforms(&mut self) {
        self.uniforms = None;
    }

    /// The attached uniform feed, if any.
    #[must_use]
    pub fn uniforms(&self) -> Option<&UniformFeed> {
        self.uniforms.as_ref()
    }

    /// The uniform value if it changed since the last call.
    pub fn take_uniform_update(&mut self) -> Option<ViewportUniform> {
        self.uniforms.as_mut().and_then(UniformFeed::take)
    }
}
