use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::angle::{clamp_latitude, normalize_longitude};

/// Geographic location plus height above the ellipsoid.
///
/// Latitude and longitude are in degrees, altitude in meters. Values are not
/// validated on construction; cameras normalize them in `apply_limits`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Position", inline)]
#[serde(default)]
pub struct GeodeticPosition {
    /// Latitude in degrees, north positive.
    #[schemars(title = "Latitude", range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    #[schemars(title = "Longitude", range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    /// Height above the ellipsoid in meters.
    #[schemars(title = "Altitude", range(min = 0.0))]
    pub altitude: f64,
}

impl GeodeticPosition {
    /// Create a position from degrees and meters.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Clamp latitude, wrap longitude and floor altitude at zero.
    pub(crate) fn apply_limits(&mut self) {
        self.latitude = clamp_latitude(self.latitude);
        self.longitude = normalize_longitude(self.longitude);
        self.altitude = self.altitude.max(0.0);
    }
}

impl fmt::Display for GeodeticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}°, {:.6}°, {:.2} m)",
            self.latitude, self.longitude, self.altitude
        )
    }
}
