//! Angle normalization and clamping in degrees.
//!
//! Wrapping maps any finite angle into the half-open interval (-180, 180],
//! so +180 is kept and -180 becomes +180. Every function here is idempotent.

/// Wrap an angle in degrees into (-180, 180].
#[inline]
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Clamp a latitude in degrees to [-90, 90].
#[inline]
#[must_use]
pub fn clamp_latitude(degrees: f64) -> f64 {
    degrees.clamp(-90.0, 90.0)
}

/// Wrap a longitude in degrees into (-180, 180].
#[inline]
#[must_use]
pub fn normalize_longitude(degrees: f64) -> f64 {
    normalize_degrees(degrees)
}
