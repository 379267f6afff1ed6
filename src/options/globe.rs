use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GeocamError;
use crate::globe::{Ellipsoid, Globe, Projection};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Globe", inline)]
#[serde(default)]
/// Reference ellipsoid and projection.
pub struct GlobeOptions {
    /// Semi-major axis in meters.
    #[schemars(title = "Equatorial Radius", range(min = 1.0))]
    pub equatorial_radius: f64,
    /// First eccentricity squared; zero for a sphere.
    #[schemars(title = "Eccentricity²", range(min = 0.0, max = 0.99))]
    pub eccentricity_squared: f64,
    /// Round globe or flat map.
    #[schemars(title = "Projection")]
    pub projection: Projection,
}

impl Default for GlobeOptions {
    fn default() -> Self {
        Self {
            equatorial_radius: Ellipsoid::WGS84.equatorial_radius,
            eccentricity_squared: Ellipsoid::WGS84.eccentricity_squared,
            projection: Projection::Ellipsoidal,
        }
    }
}

impl GlobeOptions {
    /// Create the configured globe.
    ///
    /// # Errors
    ///
    /// Returns [`GeocamError::InvalidGlobe`] if the ellipsoid parameters
    /// are out of range.
    pub fn build(&self) -> Result<Globe, GeocamError> {
        Globe::try_new(
            Ellipsoid {
                equatorial_radius: self.equatorial_radius,
                eccentricity_squared: self.eccentricity_squared,
            },
            self.projection,
        )
    }
}
