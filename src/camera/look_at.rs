//! Arc-ball camera orbiting a target position on the globe.

use std::fmt;
use std::sync::Arc;

use glam::DMat4;

use super::free::FreeCamera;
use super::view::{
    extract_eye_point, extract_viewing_parameters, look_at_modelview,
    TILT_CONVENTION_OFFSET,
};
use crate::globe::{GeodeticPosition, Globe};
use crate::util::angle::normalize_degrees;

/// Smallest permitted distance between eye and target, in meters.
pub const MIN_RANGE: f64 = 1.0;

/// Camera that looks at a target position from `range` meters away.
///
/// Heading is measured clockwise from north, tilt from straight down at the
/// target (0 = nadir, 90 = horizon), roll about the view axis. Fields can be
/// written freely; [`LookAtCamera::apply_limits`] brings them back into their
/// domains and runs automatically before any view matrix is built.
#[derive(Debug, Clone, PartialEq)]
pub struct LookAtCamera {
    globe: Arc<Globe>,
    /// Target the camera orbits.
    pub position: GeodeticPosition,
    /// Distance from the eye to the target in meters.
    pub range: f64,
    /// Heading in degrees.
    pub heading: f64,
    /// Tilt in degrees.
    pub tilt: f64,
    /// Roll in degrees.
    pub roll: f64,
}

impl LookAtCamera {
    /// Create a camera looking straight down at western North America from
    /// 10,000 km.
    #[must_use]
    pub fn new(globe: Arc<Globe>) -> Self {
        Self {
            globe,
            position: GeodeticPosition::new(30.0, -110.0, 0.0),
            range: 10.0e6,
            heading: 0.0,
            tilt: 0.0,
            roll: 0.0,
        }
    }

    /// Globe this camera is associated with.
    #[must_use]
    pub fn globe(&self) -> &Arc<Globe> {
        &self.globe
    }

    /// Associate the camera with another globe, e.g. after a 2D/3D switch.
    ///
    /// Limits for the new globe take effect on the next
    /// [`LookAtCamera::apply_limits`].
    pub fn set_globe(&mut self, globe: Arc<Globe>) {
        self.globe = globe;
    }

    /// Largest permitted range, if the globe imposes one.
    ///
    /// Flat globes cap the range at the length of the equator.
    #[must_use]
    pub fn max_range(&self) -> Option<f64> {
        self.globe
            .is_2d()
            .then(|| std::f64::consts::TAU * self.globe.equatorial_radius())
    }

    /// Clamp and wrap every field into its domain. Idempotent.
    pub fn apply_limits(&mut self) {
        self.position.apply_limits();
        self.range = self.range.max(MIN_RANGE);
        self.heading = normalize_degrees(self.heading);
        self.tilt = self.tilt.clamp(0.0, 90.0);
        self.roll = normalize_degrees(self.roll);

        if let Some(max_range) = self.max_range() {
            // A globe smaller than MIN_RANGE still keeps the range floor.
            self.range = self.range.min(max_range).max(MIN_RANGE);
            self.tilt = 0.0;
        }
    }

    /// Build the world → eye matrix for the current pose.
    ///
    /// Applies limits first, so the camera's fields may change.
    pub fn create_view_matrix(&mut self) -> DMat4 {
        self.apply_limits();
        look_at_modelview(
            &self.position,
            self.range,
            self.heading,
            self.tilt,
            self.roll,
            &self.globe,
        )
    }

    /// Write the first-person pose equivalent to this camera into `out`.
    ///
    /// Limits are applied to both cameras. Only the pose of `out` is
    /// written; its globe association is left alone.
    pub fn as_free_camera<'a>(
        &mut self,
        out: &'a mut FreeCamera,
    ) -> &'a mut FreeCamera {
        let modelview = self.create_view_matrix();
        let eye_point = extract_eye_point(&modelview);
        let params = extract_viewing_parameters(
            &modelview,
            eye_point,
            self.roll,
            &self.globe,
        );

        out.position = params.origin;
        out.heading = params.heading;
        out.tilt = params.tilt - TILT_CONVENTION_OFFSET;
        out.roll = params.roll;
        out.apply_limits();

        log::trace!("look-at {self} -> free {out}");
        out
    }

    /// Copy the pose of `other` into this camera, keeping this camera's
    /// globe.
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.position = other.position;
        self.range = other.range;
        self.heading = other.heading;
        self.tilt = other.tilt;
        self.roll = other.roll;
        self
    }
}

impl fmt::Display for LookAtCamera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "target {} range {:.2} m heading {:.4}° tilt {:.4}° roll {:.4}°",
            self.position, self.range, self.heading, self.tilt, self.roll
        )
    }
}
