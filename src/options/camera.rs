use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, FreeCamera, LookAtCamera};
use crate::globe::{GeodeticPosition, Globe};

/// Which camera model a preset starts in.
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
pub enum CameraModel {
    /// Arc-ball camera orbiting `position`.
    #[default]
    LookAt,
    /// First-person camera standing at `position`.
    Free,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera pose.
///
/// For the free model `range` is the eye altitude and replaces
/// `position.altitude`, matching the navigator's range accessor.
pub struct CameraOptions {
    /// Camera model.
    #[schemars(title = "Model")]
    pub model: CameraModel,
    /// Look-at target, or eye position for the free model.
    pub position: GeodeticPosition,
    /// Distance to the target in meters, or eye altitude.
    #[schemars(title = "Range", range(min = 1.0), extend("step" = 1000.0))]
    pub range: f64,
    /// Heading in degrees.
    #[schemars(title = "Heading", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub heading: f64,
    /// Tilt in degrees, in the chosen model's convention.
    #[schemars(title = "Tilt", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub tilt: f64,
    /// Roll in degrees.
    #[schemars(title = "Roll", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub roll: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            model: CameraModel::LookAt,
            position: GeodeticPosition::new(30.0, -110.0, 0.0),
            range: 10.0e6,
            heading: 0.0,
            tilt: 0.0,
            roll: 0.0,
        }
    }
}

impl CameraOptions {
    /// Create the configured camera on `globe`.
    #[must_use]
    pub fn build(&self, globe: Arc<Globe>) -> Camera {
        match self.model {
            CameraModel::LookAt => {
                let mut camera = LookAtCamera::new(globe);
                camera.position = self.position;
                camera.range = self.range;
                camera.heading = self.heading;
                camera.tilt = self.tilt;
                camera.roll = self.roll;
                camera.into()
            }
            CameraModel::Free => {
                let mut camera = FreeCamera::new(globe);
                camera.position = self.position;
                camera.set_range(self.range);
                camera.heading = self.heading;
                camera.tilt = self.tilt;
                camera.roll = self.roll;
                camera.into()
            }
        }
    }
}
