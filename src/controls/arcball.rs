//! Arcball projection math (Shoemake 1992, "ARCBALL: a user interface for
//! specifying three-dimensional orientation using a mouse").
//!
//! Pointer positions are normalized to `[-1, 1]` around the element
//! center, lifted onto a unit sphere (or a hyperbolic sheet when roll is
//! suppressed), and expressed in the camera's world-space frame.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::{Vec2, Vec3};

use crate::input::ScreenRect;

/// `v` rescaled to `length`; a zero vector stays zero.
pub(crate) fn with_length(v: Vec3, length: f32) -> Vec3 {
    v.normalize_or_zero() * length
}

/// Position relative to the element, in `[0, 1]` across its extent.
///
/// A degenerate rect maps everything to the origin so gestures become
/// no-ops instead of producing non-finite values.
pub(crate) fn screen_fraction(screen: &ScreenRect, x: f32, y: f32) -> Vec2 {
    if !screen.has_area() {
        return Vec2::ZERO;
    }
    Vec2::new(
        (x - screen.left) / screen.width,
        (y - screen.top) / screen.height,
    )
}

/// Position relative to the element center, in `[-1, 1]`, y up.
pub(crate) fn ball_ndc(screen: &ScreenRect, x: f32, y: f32) -> Vec2 {
    if !screen.has_area() {
        return Vec2::ZERO;
    }
    let half_w = screen.width * 0.5;
    let half_h = screen.height * 0.5;
    Vec2::new(
        (x - half_w - screen.left) / half_w,
        (half_h + screen.top - y) / half_h,
    )
}

/// Lift a normalized pointer position onto the arcball.
///
/// Inside the unit circle the point lands on the sphere; outside it is
/// clamped to the rim. With `no_roll` the sphere is blended into the
/// hyperbola `z = 1 / (2 r)` past `r = 1/√2`, which never reaches the rim.
pub(crate) fn project_on_ball(ndc: Vec2, no_roll: bool) -> Vec3 {
    let length = ndc.length();
    if no_roll {
        let z = if length < FRAC_1_SQRT_2 {
            (1.0 - length * length).sqrt()
        } else {
            0.5 / length
        };
        ndc.extend(z)
    } else if length > 1.0 {
        ndc.extend(0.0).normalize()
    } else {
        ndc.extend((1.0 - length * length).sqrt())
    }
}

/// Express ball coordinates in world space using the camera frame: `y`
/// along `up`, `x` along `up × eye`, `z` along `eye` (target → camera).
pub(crate) fn ball_to_world(ball: Vec3, eye: Vec3, up: Vec3) -> Vec3 {
    with_length(up, ball.y)
        + with_length(up.cross(eye), ball.x)
        + with_length(eye, ball.z)
}

/// Axis and angle of the arc from `start` to `end`.
///
/// `None` when the vectors are degenerate, coincident, or antiparallel
/// (no unique axis).
pub(crate) fn arc_between(start: Vec3, end: Vec3) -> Option<(Vec3, f32)> {
    let denom = start.length() * end.length();
    if denom <= 0.0 {
        return None;
    }
    let angle = (start.dot(end) / denom).clamp(-1.0, 1.0).acos();
    if angle.is_nan() || angle <= 0.0 {
        return None;
    }
    let axis = start.cross(end).normalize_or_zero();
    if axis == Vec3::ZERO {
        return None;
    }
    Some((axis, angle))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenRect = ScreenRect::new(100.0, 50.0, 200.0, 100.0);

    #[test]
    fn screen_fraction_is_relative_to_element() {
        assert_eq!(screen_fraction(&SCREEN, 200.0, 100.0), Vec2::new(0.5, 0.5));
        assert_eq!(screen_fraction(&SCREEN, 100.0, 50.0), Vec2::ZERO);
        assert_eq!(
            screen_fraction(&ScreenRect::default(), 10.0, 10.0),
            Vec2::ZERO
        );
    }

    #[test]
    fn ball_ndc_flips_y_and_centers() {
        assert_eq!(ball_ndc(&SCREEN, 200.0, 100.0), Vec2::ZERO);
        assert_eq!(ball_ndc(&SCREEN, 300.0, 50.0), Vec2::new(1.0, 1.0));
        assert_eq!(ball_ndc(&SCREEN, 100.0, 150.0), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn inside_points_land_on_unit_sphere() {
        let p = project_on_ball(Vec2::new(0.3, -0.4), false);
        assert!((p.length() - 1.0).abs() < 1e-6);
        assert!((p.z - (1.0f32 - 0.25).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn outside_points_clamp_to_rim() {
        let p = project_on_ball(Vec2::new(2.0, 0.0), false);
        assert_eq!(p, Vec3::X);
    }

    #[test]
    fn no_roll_uses_hyperbolic_sheet() {
        let inner = project_on_ball(Vec2::new(0.5, 0.0), true);
        assert!((inner.z - 0.75f32.sqrt()).abs() < 1e-6);

        let outer = project_on_ball(Vec2::new(0.8, 0.0), true);
        assert!((outer.z - 0.625).abs() < 1e-6);
        assert_eq!(outer.x, 0.8);

        // Far from the center the sheet stays above the equator.
        let far = project_on_ball(Vec2::new(4.0, 0.0), true);
        assert!(far.z > 0.0);
    }

    #[test]
    fn ball_center_maps_to_eye_direction() {
        let world =
            ball_to_world(Vec3::Z, Vec3::new(0.0, 0.0, 10.0), Vec3::Y);
        assert!((world - Vec3::Z).length() < 1e-6);

        let right = ball_to_world(Vec3::X, Vec3::new(0.0, 0.0, 10.0), Vec3::Y);
        assert!((right - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn arc_between_reports_axis_and_angle() {
        let (axis, angle) = arc_between(Vec3::Z, Vec3::X).unwrap();
        assert!((axis - Vec3::Y).length() < 1e-6);
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn degenerate_arcs_are_rejected() {
        assert_eq!(arc_between(Vec3::Z, Vec3::Z), None);
        assert_eq!(arc_between(Vec3::ZERO, Vec3::X), None);
        assert_eq!(arc_between(Vec3::Z, Vec3::NEG_Z), None);
    }
}
