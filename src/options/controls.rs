use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Trackball interaction parameters.
pub struct ControlOptions {
    /// Whether the controls react to input at all.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Rotation gain. Keep at 2.0 with static moving for hysteresis-free
    /// rotation: any closed drag path then leaves the orientation
    /// unchanged (Shoemake 1992, ARCBALL).
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub rotate_speed: f32,
    /// Zoom gain.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Pan gain.
    #[schemars(title = "Pan Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Disable rotation.
    #[schemars(title = "Lock Rotation")]
    pub no_rotate: bool,
    /// Disable zoom.
    #[schemars(title = "Lock Zoom")]
    pub no_zoom: bool,
    /// Disable panning.
    #[schemars(title = "Lock Pan")]
    pub no_pan: bool,
    /// Project the pointer onto a hyperbolic sheet so drags near the rim
    /// don't roll the camera.
    #[schemars(title = "No Roll")]
    pub no_roll: bool,
    /// Apply gestures immediately instead of easing them out over later
    /// updates. Must stay on for hysteresis-free rotation.
    #[schemars(title = "Static Moving")]
    pub static_moving: bool,
    /// Fraction of the remaining gesture consumed per update when static
    /// moving is off.
    #[schemars(title = "Damping", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub dynamic_damping_factor: f32,
    /// Closest allowed eye-to-target distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed eye-to-target distance.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
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
        }
    }
}
