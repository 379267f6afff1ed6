//! Geographic ↔ Cartesian projections.
//!
//! Cartesian frame: +Y through the north pole, +Z through (0°, 0°), +X
//! through (0°, 90°E). The equirectangular projection lays the globe on the
//! z = 0 plane with +Y north and +Z up.

use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::position::GeodeticPosition;

/// Reference ellipsoid described by its equatorial radius and first
/// eccentricity squared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis in meters.
    pub equatorial_radius: f64,
    /// First eccentricity squared, in [0, 1).
    pub eccentricity_squared: f64,
}

impl Ellipsoid {
    /// WGS84 reference ellipsoid.
    pub const WGS84: Self = Self {
        equatorial_radius: 6_378_137.0,
        eccentricity_squared: 0.006_694_379_990_13,
    };

    /// Perfect sphere with the given radius.
    #[must_use]
    pub const fn sphere(radius: f64) -> Self {
        Self {
            equatorial_radius: radius,
            eccentricity_squared: 0.0,
        }
    }

    /// Semi-minor axis in meters.
    #[must_use]
    pub fn polar_radius(&self) -> f64 {
        self.equatorial_radius * (1.0 - self.eccentricity_squared).sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

/// How the globe surface is laid out in Cartesian space.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Round 3D globe, geocentric Cartesian coordinates.
    #[default]
    Ellipsoidal,
    /// Flat 2D map, plate carrée scaled by the equatorial radius.
    Equirectangular,
}

impl Projection {
    /// Whether this projection renders the globe as a flat plane.
    #[must_use]
    pub const fn is_2d(self) -> bool {
        matches!(self, Self::Equirectangular)
    }

    /// Map a geographic position to a Cartesian point.
    #[must_use]
    pub fn geographic_to_cartesian(
        self,
        ellipsoid: &Ellipsoid,
        position: &GeodeticPosition,
    ) -> DVec3 {
        let lat = position.latitude.to_radians();
        let lon = position.longitude.to_radians();
        let h = position.altitude;
        let a = ellipsoid.equatorial_radius;

        match self {
            Self::Ellipsoidal => {
                let (sin_lat, cos_lat) = lat.sin_cos();
                let (sin_lon, cos_lon) = lon.sin_cos();
                let e2 = ellipsoid.eccentricity_squared;
                // Prime vertical radius of curvature.
                let rpm = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
                DVec3::new(
                    (rpm + h) * cos_lat * sin_lon,
                    (rpm * (1.0 - e2) + h) * sin_lat,
                    (rpm + h) * cos_lat * cos_lon,
                )
            }
            Self::Equirectangular => DVec3::new(a * lon, a * lat, h),
        }
    }

    /// Map a Cartesian point back to a geographic position.
    #[must_use]
    pub fn cartesian_to_geographic(
        self,
        ellipsoid: &Ellipsoid,
        point: DVec3,
    ) -> GeodeticPosition {
        let a = ellipsoid.equatorial_radius;
        match self {
            Self::Ellipsoidal => ecef_to_geodetic(ellipsoid, point),
            Self::Equirectangular => GeodeticPosition::new(
                (point.y / a).to_degrees(),
                (point.x / a).to_degrees(),
                point.z,
            ),
        }
    }

    /// Outward unit geodetic normal through `point`.
    ///
    /// Off the surface this is the normal at the foot of the perpendicular,
    /// so every point on one normal line shares the same up vector.
    #[must_use]
    pub fn surface_normal_at_point(
        self,
        ellipsoid: &Ellipsoid,
        point: DVec3,
    ) -> DVec3 {
        match self {
            Self::Ellipsoidal => {
                let pos = ecef_to_geodetic(ellipsoid, point);
                let (sin_lat, cos_lat) = pos.latitude.to_radians().sin_cos();
                let (sin_lon, cos_lon) =
                    pos.longitude.to_radians().sin_cos();
                DVec3::new(cos_lat * sin_lon, sin_lat, cos_lat * cos_lon)
                    .normalize()
            }
            Self::Equirectangular => DVec3::Z,
        }
    }

    /// Unit vector tangent to the surface at `point`, pointing north.
    #[must_use]
    pub fn north_tangent_at_point(
        self,
        ellipsoid: &Ellipsoid,
        point: DVec3,
    ) -> DVec3 {
        match self {
            Self::Ellipsoidal => {
                let pos = ecef_to_geodetic(ellipsoid, point);
                let (sin_lat, cos_lat) = pos.latitude.to_radians().sin_cos();
                let (sin_lon, cos_lon) =
                    pos.longitude.to_radians().sin_cos();
                DVec3::new(-sin_lat * sin_lon, cos_lat, -sin_lat * cos_lon)
                    .normalize()
            }
            Self::Equirectangular => DVec3::Y,
        }
    }
}

/// Closed-form geocentric → geodetic conversion after H. Vermeille, "An
/// analytical method to transform geocentric into geodetic coordinates"
/// (J. Geodesy, 2011).
fn ecef_to_geodetic(ellipsoid: &Ellipsoid, point: DVec3) -> GeodeticPosition {
    // Conventional ECEF axes: X through (0°, 0°), Y through (0°, 90°E), Z north.
    let (x, y, z) = (point.z, point.x, point.y);
    let a = ellipsoid.equatorial_radius;
    let e2 = ellipsoid.eccentricity_squared;
    let e4 = e2 * e2;

    let xx_yy = x * x + y * y;
    let sqrt_xx_yy = xx_yy.sqrt();
    let p = xx_yy / (a * a);
    let q = z * z * (1.0 - e2) / (a * a);
    let r = (p + q - e4) / 6.0;
    let evolute_border = 8.0 * r * r * r + e4 * p * q;

    let (phi, h) = if evolute_border > 0.0 || q != 0.0 {
        let u = if evolute_border > 0.0 {
            // General case, outside the evolute.
            let rad1 = evolute_border.sqrt();
            let rad2 = (e4 * p * q).sqrt();
            if evolute_border > 10.0 * e2 {
                let rad3 = ((rad1 + rad2) * (rad1 + rad2)).cbrt();
                r + 0.5 * rad3 + 2.0 * r * r / rad3
            } else {
                r + 0.5 * ((rad1 + rad2) * (rad1 + rad2)).cbrt()
                    + 0.5 * ((rad1 - rad2) * (rad1 - rad2)).cbrt()
            }
        } else {
            // Inside the evolute, near the center.
            let rad1 = (-evolute_border).sqrt();
            let rad2 = (-8.0 * r * r * r).sqrt();
            let rad3 = (e4 * p * q).sqrt();
            let angle = 2.0 * rad3.atan2(rad1 + rad2) / 3.0;
            -4.0 * r * angle.sin() * (std::f64::consts::FRAC_PI_6 + angle).cos()
        };
        let v = (u * u + e4 * q).sqrt();
        let w = e2 * (u + v - q) / (2.0 * v);
        let k = (u + v) / ((w * w + u + v).sqrt() + w);
        let d = k * sqrt_xx_yy / (k + e2);
        let sqrt_dd_zz = (d * d + z * z).sqrt();
        (
            2.0 * z.atan2(sqrt_dd_zz + d),
            (k + e2 - 1.0) * sqrt_dd_zz / k,
        )
    } else if e2 > 0.0 {
        // Singular disk in the equatorial plane around the center.
        let rad1 = (1.0 - e2).sqrt();
        let rad2 = (e2 - p).sqrt();
        let e = e2.sqrt();
        (
            rad2 / (e * rad2 + rad1 * p.sqrt()),
            -a * rad1 * rad2 / e,
        )
    } else {
        // Center of a sphere.
        (0.0, -a)
    };

    let s2 = std::f64::consts::SQRT_2;
    let lambda = if (s2 - 1.0) * y < sqrt_xx_yy + x {
        // -135° < λ < 135°
        2.0 * y.atan2(sqrt_xx_yy + x)
    } else if sqrt_xx_yy + y < (s2 + 1.0) * x {
        // -225° < λ < 45°
        -std::f64::consts::FRAC_PI_2 + 2.0 * x.atan2(sqrt_xx_yy - y)
    } else {
        // -45° < λ < 225°
        std::f64::consts::FRAC_PI_2 - 2.0 * x.atan2(sqrt_xx_yy + y)
    };

    GeodeticPosition::new(phi.to_degrees(), lambda.to_degrees(), h)
}
