//! View-matrix composition and decomposition shared by both camera models.
//!
//! Matrices are right-handed and map model (globe) coordinates into eye
//! space, with the viewer looking down -Z and +Y up on screen. At heading,
//! tilt and roll of zero the viewer looks straight down at the pivot with
//! north up.

use glam::{DMat3, DMat4, DVec3};

use crate::globe::{GeodeticPosition, Globe};

/// Offset in degrees between the look-at tilt (measured from straight down
/// at the pivot) and the first-person tilt (measured from the horizon).
pub const TILT_CONVENTION_OFFSET: f64 = 90.0;

/// Below this value of sin(tilt), heading and roll are coupled and the
/// caller's roll is kept.
const SINGULAR_TILT_SINE: f64 = 1e-10;

/// Pose recovered from a view matrix relative to an origin point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingParameters {
    /// Geographic position of the origin point.
    pub origin: GeodeticPosition,
    /// Distance from the eye to the origin along the view axis.
    pub range: f64,
    /// Heading in degrees, clockwise from north.
    pub heading: f64,
    /// Tilt in degrees from straight down at the origin, in [0, 180].
    pub tilt: f64,
    /// Roll in degrees.
    pub roll: f64,
}

/// Rotation applying roll, then tilt, then heading, in that order from the
/// eye's point of view.
fn orientation(heading: f64, tilt: f64, roll: f64) -> DMat4 {
    DMat4::from_rotation_z(-roll.to_radians())
        * DMat4::from_rotation_x(-tilt.to_radians())
        * DMat4::from_rotation_z(heading.to_radians())
}

/// View matrix for a viewer standing at `eye_position` and rotated by
/// heading, tilt and roll relative to the local surface frame there.
#[must_use]
pub fn first_person_modelview(
    eye_position: &GeodeticPosition,
    heading: f64,
    tilt: f64,
    roll: f64,
    globe: &Globe,
) -> DMat4 {
    let eye_point = globe.geographic_to_cartesian(eye_position);
    let axes = globe.local_coordinate_axes(eye_point);
    orientation(heading, tilt, roll) * axes.model_to_local(eye_point)
}

/// View matrix for a viewer orbiting `look_at_position` at `range`,
/// keeping the pivot centered in the viewport.
#[must_use]
pub fn look_at_modelview(
    look_at_position: &GeodeticPosition,
    range: f64,
    heading: f64,
    tilt: f64,
    roll: f64,
    globe: &Globe,
) -> DMat4 {
    DMat4::from_translation(DVec3::new(0.0, 0.0, -range))
        * first_person_modelview(look_at_position, heading, tilt, roll, globe)
}

/// Eye position in model coordinates.
#[must_use]
pub fn extract_eye_point(modelview: &DMat4) -> DVec3 {
    let rotation = DMat3::from_mat4(*modelview);
    -(rotation.transpose() * modelview.w_axis.truncate())
}

/// Unit viewing direction in model coordinates.
#[must_use]
pub fn extract_forward_vector(modelview: &DMat4) -> DVec3 {
    -DVec3::new(modelview.x_axis.z, modelview.y_axis.z, modelview.z_axis.z)
        .normalize()
}

/// Decompose `modelview` into a pose relative to `origin`.
///
/// Roll is recovered from the matrix whenever the view is not aligned with
/// the surface normal at `origin`, so it can differ slightly from the
/// caller's `roll` once the origin's frame is rotated against the frame the
/// matrix was built in. Only at nadir and zenith is `roll` used as given,
/// with heading absorbing the remaining rotation. Composing a look-at
/// matrix from the result reproduces `modelview`.
#[must_use]
pub fn extract_viewing_parameters(
    modelview: &DMat4,
    origin: DVec3,
    roll: f64,
    globe: &Globe,
) -> ViewingParameters {
    let axes = globe.local_coordinate_axes(origin);
    let local = *modelview * axes.local_to_model(origin);
    // (row, col) element accessor; glam stores columns.
    let m = |row: usize, col: usize| local.col(col)[row];

    let range = -m(2, 3);
    let cos_tilt = m(2, 2);
    let sin_tilt = m(0, 2).hypot(m(1, 2));
    let tilt = sin_tilt.atan2(cos_tilt);

    let roll = if sin_tilt > SINGULAR_TILT_SINE {
        m(0, 2).atan2(m(1, 2))
    } else {
        roll.to_radians()
    };

    let (sr, cr) = roll.sin_cos();
    let cos_heading = cr * m(0, 0) - sr * m(1, 0);
    let sin_heading = sr * m(1, 1) - cr * m(0, 1);
    let heading = sin_heading.atan2(cos_heading);

    ViewingParameters {
        origin: globe.cartesian_to_geographic(origin),
        range,
        heading: heading.to_degrees(),
        tilt: tilt.to_degrees(),
        roll: roll.to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::{Ellipsoid, Projection};

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn nadir_first_person_is_pure_translation() {
        let radius = 1000.0;
        let globe = Globe::new(Ellipsoid::sphere(radius), Projection::Ellipsoidal);
        let m = first_person_modelview(
            &GeodeticPosition::default(),
            0.0,
            0.0,
            0.0,
            &globe,
        );
        let expected = DMat4::from_translation(DVec3::new(0.0, 0.0, -radius));
        assert!(m.abs_diff_eq(expected, 1e-9));
    }

    #[test]
    fn eye_point_and_forward_at_nadir() {
        let radius = 1000.0;
        let globe = Globe::new(Ellipsoid::sphere(radius), Projection::Ellipsoidal);
        let m = look_at_modelview(
            &GeodeticPosition::default(),
            250.0,
            0.0,
            0.0,
            0.0,
            &globe,
        );
        let eye = extract_eye_point(&m);
        assert!(eye.abs_diff_eq(DVec3::new(0.0, 0.0, 1250.0), 1e-9));
        let forward = extract_forward_vector(&m);
        assert!(forward.abs_diff_eq(-DVec3::Z, 1e-12));
    }

    #[test]
    fn positive_tilt_lifts_view_toward_horizon() {
        let globe = Globe::wgs84();
        let target = GeodeticPosition::new(10.0, 20.0, 0.0);
        let m = look_at_modelview(&target, 1.0e5, 0.0, 60.0, 0.0, &globe);
        let eye = extract_eye_point(&m);
        let eye_pos = globe.cartesian_to_geographic(eye);
        // Heading 0 looks north, so the eye sits south of the target.
        assert!(eye_pos.latitude < target.latitude);
        assert!(approx_eq(eye_pos.longitude, target.longitude, 1e-6));
    }

    #[test]
    fn decomposition_recovers_look_at_pose() {
        let globe = Globe::wgs84();
        let target = GeodeticPosition::new(-12.0, 131.0, 450.0);
        let m = look_at_modelview(&target, 2.5e4, -35.0, 55.0, 12.0, &globe);
        let origin = globe.geographic_to_cartesian(&target);
        let params = extract_viewing_parameters(&m, origin, 0.0, &globe);
        assert!(approx_eq(params.range, 2.5e4, 1e-6));
        assert!(approx_eq(params.heading, -35.0, 1e-9));
        assert!(approx_eq(params.tilt, 55.0, 1e-9));
        assert!(approx_eq(params.roll, 12.0, 1e-9));
        assert!(approx_eq(params.origin.latitude, -12.0, 1e-9));
        assert!(approx_eq(params.origin.altitude, 450.0, 1e-6));
    }

    #[test]
    fn nadir_decomposition_keeps_caller_roll() {
        let globe = Globe::wgs84();
        let target = GeodeticPosition::new(0.0, 0.0, 0.0);
        let m = look_at_modelview(&target, 1.0e4, 30.0, 0.0, 20.0, &globe);
        let origin = globe.geographic_to_cartesian(&target);
        let params = extract_viewing_parameters(&m, origin, 5.0, &globe);
        assert!(approx_eq(params.roll, 5.0, 1e-12));
        // Heading absorbs the rest of the combined rotation.
        assert!(approx_eq(params.heading, 15.0, 1e-9));
        let rebuilt = look_at_modelview(
            &params.origin,
            params.range,
            params.heading,
            params.tilt,
            params.roll,
            &globe,
        );
        assert!(rebuilt.abs_diff_eq(m, 1e-6));
    }
}
