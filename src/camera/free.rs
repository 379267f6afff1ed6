//! First-person camera positioned directly at the eye point.

use std::fmt;
use std::sync::Arc;

use glam::DMat4;

use super::look_at::LookAtCamera;
use super::view::{
    extract_eye_point, extract_forward_vector, extract_viewing_parameters,
    look_at_modelview, TILT_CONVENTION_OFFSET,
};
use crate::globe::{GeodeticPosition, Globe};
use crate::util::angle::normalize_degrees;

/// Camera placed at `position` with its own heading, tilt and roll.
///
/// Tilt is measured from the horizon: 0 looks level, -90 straight down,
/// +90 straight up. The altitude of `position` doubles as the camera's
/// range.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeCamera {
    globe: Arc<Globe>,
    /// Eye position.
    pub position: GeodeticPosition,
    /// Heading in degrees.
    pub heading: f64,
    /// Tilt in degrees.
    pub tilt: f64,
    /// Roll in degrees.
    pub roll: f64,
}

impl FreeCamera {
    /// Create a camera 10,000 km above western North America, looking
    /// straight down.
    #[must_use]
    pub fn new(globe: Arc<Globe>) -> Self {
        Self {
            globe,
            position: GeodeticPosition::new(30.0, -110.0, 10.0e6),
            heading: 0.0,
            tilt: -TILT_CONVENTION_OFFSET,
            roll: 0.0,
        }
    }

    /// Globe this camera is associated with.
    #[must_use]
    pub fn globe(&self) -> &Arc<Globe> {
        &self.globe
    }

    /// Associate the camera with another globe.
    pub fn set_globe(&mut self, globe: Arc<Globe>) {
        self.globe = globe;
    }

    /// Altitude of the eye in meters.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.position.altitude
    }

    /// Set the altitude of the eye in meters.
    pub fn set_range(&mut self, range: f64) {
        self.position.altitude = range;
    }

    /// Clamp and wrap every field into its domain. Idempotent.
    ///
    /// Unlike [`LookAtCamera::apply_limits`] nothing changes on a flat
    /// globe: tilt is not forced and altitude is not capped.
    pub fn apply_limits(&mut self) {
        self.position.apply_limits();
        self.heading = normalize_degrees(self.heading);
        self.tilt = self.tilt.clamp(-90.0, 90.0);
        self.roll = normalize_degrees(self.roll);
    }

    /// Build the world → eye matrix for the current pose.
    ///
    /// Applies limits first, so the camera's fields may change.
    pub fn create_view_matrix(&mut self) -> DMat4 {
        self.apply_limits();
        look_at_modelview(
            &self.position,
            0.0,
            self.heading,
            self.tilt + TILT_CONVENTION_OFFSET,
            self.roll,
            &self.globe,
        )
    }

    /// Write the look-at pose equivalent to this camera into `out`.
    ///
    /// `out.range` selects how far along the view direction the new target
    /// sits; it is brought within `out`'s limits before use. Limits are
    /// applied to both cameras.
    pub fn as_look_at_camera<'a>(
        &mut self,
        out: &'a mut LookAtCamera,
    ) -> &'a mut LookAtCamera {
        let modelview = self.create_view_matrix();
        out.apply_limits();

        let eye_point = extract_eye_point(&modelview);
        let forward = extract_forward_vector(&modelview);
        let target_point = eye_point + forward * out.range;
        let params = extract_viewing_parameters(
            &modelview,
            target_point,
            self.roll,
            &self.globe,
        );

        out.position = params.origin;
        out.heading = params.heading;
        out.tilt = params.tilt;
        out.roll = params.roll;
        out.apply_limits();

        log::trace!("free {self} -> look-at {out}");
        out
    }

    /// Copy the pose of `other` into this camera, keeping this camera's
    /// globe.
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.position = other.position;
        self.heading = other.heading;
        self.tilt = other.tilt;
        self.roll = other.roll;
        self
    }
}

impl fmt::Display for FreeCamera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "eye {} heading {:.4}° tilt {:.4}° roll {:.4}°",
            self.position, self.heading, self.tilt, self.roll
        )
    }
}
