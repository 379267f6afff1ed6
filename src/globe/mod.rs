//! Globe model consumed by the cameras.
//!
//! A [`Globe`] pairs a reference [`Ellipsoid`] with a [`Projection`] and
//! exposes the point/position transforms and local surface frames that the
//! view-matrix code builds on.

/// Geographic ↔ Cartesian projections and the reference ellipsoid.
pub mod projection;
/// Latitude/longitude/altitude value type.
pub mod position;

use glam::{DMat4, DVec3, DVec4};

pub use self::position::GeodeticPosition;
pub use self::projection::{Ellipsoid, Projection};
use crate::error::GeocamError;

/// Orthonormal east/north/up frame at a point on or above the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalAxes {
    /// East-pointing unit vector.
    pub x: DVec3,
    /// North-pointing unit vector.
    pub y: DVec3,
    /// Surface normal (up).
    pub z: DVec3,
}

impl LocalAxes {
    /// Transform from the local frame at `origin` into model coordinates.
    #[must_use]
    pub fn local_to_model(&self, origin: DVec3) -> DMat4 {
        DMat4::from_cols(
            self.x.extend(0.0),
            self.y.extend(0.0),
            self.z.extend(0.0),
            origin.extend(1.0),
        )
    }

    /// Transform from model coordinates into the local frame at `origin`.
    #[must_use]
    pub fn model_to_local(&self, origin: DVec3) -> DMat4 {
        DMat4::from_cols(
            DVec4::new(self.x.x, self.y.x, self.z.x, 0.0),
            DVec4::new(self.x.y, self.y.y, self.z.y, 0.0),
            DVec4::new(self.x.z, self.y.z, self.z.z, 0.0),
            DVec4::new(
                -self.x.dot(origin),
                -self.y.dot(origin),
                -self.z.dot(origin),
                1.0,
            ),
        )
    }
}

/// Reference ellipsoid plus the projection used to lay it out in space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Globe {
    ellipsoid: Ellipsoid,
    projection: Projection,
}

impl Globe {
    /// Create a globe from an ellipsoid and projection.
    #[must_use]
    pub const fn new(ellipsoid: Ellipsoid, projection: Projection) -> Self {
        Self {
            ellipsoid,
            projection,
        }
    }

    /// Create a globe after checking that the ellipsoid is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`GeocamError::InvalidGlobe`] if the equatorial radius is not
    /// a positive finite number or the eccentricity squared lies outside
    /// [0, 1).
    pub fn try_new(
        ellipsoid: Ellipsoid,
        projection: Projection,
    ) -> Result<Self, GeocamError> {
        let radius = ellipsoid.equatorial_radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeocamError::InvalidGlobe(format!(
                "equatorial radius must be positive, got {radius}"
            )));
        }
        let e2 = ellipsoid.eccentricity_squared;
        if !(0.0..1.0).contains(&e2) {
            return Err(GeocamError::InvalidGlobe(format!(
                "eccentricity squared must be in [0, 1), got {e2}"
            )));
        }
        Ok(Self::new(ellipsoid, projection))
    }

    /// WGS84 ellipsoid in 3D.
    #[must_use]
    pub const fn wgs84() -> Self {
        Self::new(Ellipsoid::WGS84, Projection::Ellipsoidal)
    }

    /// Reference ellipsoid.
    #[must_use]
    pub const fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Active projection.
    #[must_use]
    pub const fn projection(&self) -> Projection {
        self.projection
    }

    /// Same ellipsoid laid out with a different projection.
    #[must_use]
    pub const fn with_projection(&self, projection: Projection) -> Self {
        Self::new(self.ellipsoid, projection)
    }

    /// Semi-major axis in meters.
    #[must_use]
    pub const fn equatorial_radius(&self) -> f64 {
        self.ellipsoid.equatorial_radius
    }

    /// Whether the globe is currently shown as a flat map.
    #[must_use]
    pub const fn is_2d(&self) -> bool {
        self.projection.is_2d()
    }

    /// Cartesian point for a geographic position.
    #[must_use]
    pub fn geographic_to_cartesian(&self, position: &GeodeticPosition) -> DVec3 {
        self.projection
            .geographic_to_cartesian(&self.ellipsoid, position)
    }

    /// Geographic position for a Cartesian point.
    #[must_use]
    pub fn cartesian_to_geographic(&self, point: DVec3) -> GeodeticPosition {
        self.projection.cartesian_to_geographic(&self.ellipsoid, point)
    }

    /// Outward unit surface normal through `point`.
    #[must_use]
    pub fn surface_normal_at_point(&self, point: DVec3) -> DVec3 {
        self.projection.surface_normal_at_point(&self.ellipsoid, point)
    }

    /// North-pointing unit tangent at `point`.
    #[must_use]
    pub fn north_tangent_at_point(&self, point: DVec3) -> DVec3 {
        self.projection.north_tangent_at_point(&self.ellipsoid, point)
    }

    /// East/north/up frame at `point`.
    ///
    /// The normal is authoritative; east and north are re-orthogonalized
    /// against it.
    #[must_use]
    pub fn local_coordinate_axes(&self, point: DVec3) -> LocalAxes {
        let z = self.surface_normal_at_point(point);
        let north = self.north_tangent_at_point(point);
        let x = north.cross(z).normalize();
        let y = z.cross(x).normalize();
        LocalAxes { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn local_axes_at_origin_match_world_axes() {
        let globe = Globe::new(Ellipsoid::sphere(1000.0), Projection::Ellipsoidal);
        let point = globe.geographic_to_cartesian(&GeodeticPosition::default());
        let axes = globe.local_coordinate_axes(point);
        assert!(axes.x.abs_diff_eq(DVec3::X, 1e-12));
        assert!(axes.y.abs_diff_eq(DVec3::Y, 1e-12));
        assert!(axes.z.abs_diff_eq(DVec3::Z, 1e-12));
    }

    #[test]
    fn local_transforms_are_inverse() {
        let globe = Globe::wgs84();
        let point = globe
            .geographic_to_cartesian(&GeodeticPosition::new(-41.0, 174.0, 300.0));
        let axes = globe.local_coordinate_axes(point);
        let round = axes.model_to_local(point) * axes.local_to_model(point);
        assert!(round.abs_diff_eq(DMat4::IDENTITY, 1e-6));
        let local_origin = axes.model_to_local(point).transform_point3(point);
        assert!(local_origin.abs_diff_eq(DVec3::ZERO, 1e-6));
    }

    #[test]
    fn flat_globe_uses_plane_frame() {
        let globe = Globe::wgs84().with_projection(Projection::Equirectangular);
        assert!(globe.is_2d());
        let axes = globe.local_coordinate_axes(DVec3::new(5.0, -3.0, 10.0));
        assert_eq!(axes.x, DVec3::X);
        assert_eq!(axes.y, DVec3::Y);
        assert_eq!(axes.z, DVec3::Z);
    }

    #[test]
    fn try_new_rejects_bad_ellipsoids() {
        assert!(Globe::try_new(Ellipsoid::sphere(0.0), Projection::Ellipsoidal)
            .is_err());
        assert!(Globe::try_new(
            Ellipsoid {
                equatorial_radius: 1.0,
                eccentricity_squared: 1.0,
            },
            Projection::Ellipsoidal,
        )
        .is_err());
        let ok = Globe::try_new(Ellipsoid::WGS84, Projection::Equirectangular);
        assert!(ok.is_ok_and(|g| approx_eq(g.equatorial_radius(), 6_378_137.0)));
    }
}
