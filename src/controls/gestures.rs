//! Gesture application: rotate, zoom, pan, and distance limits.
//!
//! Each step reads its gesture's start/end pair, applies the difference to
//! the target → eye vector (or to the target itself for panning), and then
//! advances the start point: all the way to the end with static moving,
//! or by the damping fraction otherwise.

use glam::{Quat, Vec2, Vec3};

use super::arcball::{
    arc_between, ball_ndc, ball_to_world, project_on_ball, screen_fraction,
    with_length,
};
use super::{ControlState, TrackballControls};

impl TrackballControls {
    /// Page position as a fraction of the element's extent.
    #[must_use]
    pub fn mouse_on_screen(&self, x: f32, y: f32) -> Vec2 {
        screen_fraction(&self.screen, x, y)
    }

    /// Page position lifted onto the arcball, in world space relative to
    /// the target.
    #[must_use]
    pub fn mouse_projection_on_ball(&self, x: f32, y: f32) -> Vec3 {
        let ball = project_on_ball(ball_ndc(&self.screen, x, y), self.no_roll);
        let eye = self.camera.eye - self.camera.target;
        ball_to_world(ball, eye, self.camera.up)
    }

    /// Rotate eye and up by the arc between the rotate start and end.
    pub(crate) fn rotate_camera(&mut self) {
        let Some((axis, angle)) = arc_between(self.rotate_start, self.rotate_end)
        else {
            return;
        };
        let angle = angle * self.rotate_speed;
        let quaternion = Quat::from_axis_angle(axis, -angle);

        self.eye = quaternion * self.eye;
        self.camera.up = quaternion * self.camera.up;
        self.rotate_end = quaternion * self.rotate_end;

        if self.static_moving {
            self.rotate_start = self.rotate_end;
        } else {
            let damping = Quat::from_axis_angle(
                axis,
                angle * (self.dynamic_damping_factor - 1.0),
            );
            self.rotate_start = damping * self.rotate_start;
        }
    }

    /// Scale the eye distance by the pinch ratio or the vertical zoom drag.
    pub(crate) fn zoom_camera(&mut self) {
        if self.state == ControlState::TouchZoomPan {
            let start = self.touch_zoom_distance_start;
            let end = self.touch_zoom_distance_end;
            // Coincident fingers give no usable ratio.
            if start > 0.0 && end > 0.0 {
                self.eye *= start / end;
            }
            self.touch_zoom_distance_start = end;
            return;
        }

        let factor =
            1.0 + (self.zoom_end.y - self.zoom_start.y) * self.zoom_speed;
        if factor != 1.0 && factor > 0.0 {
            self.eye *= factor;
            if self.static_moving {
                self.zoom_start = self.zoom_end;
            } else {
                self.zoom_start.y += (self.zoom_end.y - self.zoom_start.y)
                    * self.dynamic_damping_factor;
            }
        }
    }

    /// Translate eye and target in the view plane.
    pub(crate) fn pan_camera(&mut self) {
        let mut mouse_change = self.pan_end - self.pan_start;
        if mouse_change.length_squared() == 0.0 {
            return;
        }

        mouse_change *= self.eye.length() * self.pan_speed;
        let up = self.camera.up;
        let pan = with_length(self.eye.cross(up), mouse_change.x)
            + with_length(up, mouse_change.y);

        self.camera.eye += pan;
        self.camera.target += pan;

        if self.static_moving {
            self.pan_start = self.pan_end;
        } else {
            self.pan_start +=
                (self.pan_end - self.pan_start) * self.dynamic_damping_factor;
        }
    }

    /// Clamp the eye distance to `[min_distance, max_distance]`.
    pub(crate) fn check_distances(&mut self) {
        if self.no_zoom && self.no_pan {
            return;
        }
        let target = self.camera.target;
        if self.eye.length_squared() > self.max_distance * self.max_distance {
            self.eye = with_length(self.eye, self.max_distance);
            self.camera.eye = target + self.eye;
        }
        if self.eye.length_squared() < self.min_distance * self.min_distance {
            self.eye = with_length(self.eye, self.min_distance);
            self.camera.eye = target + self.eye;
        }
    }
}
