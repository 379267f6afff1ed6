//! Navigator facade over the active camera.
//!
//! The navigator owns exactly one [`Camera`] and exposes look-at style
//! accessors regardless of which model is active, converting on demand when
//! the free camera is in use.

use std::sync::Arc;

use glam::DMat4;

use crate::camera::{Camera, FreeCamera, LookAtCamera, MIN_RANGE};
use crate::error::GeocamError;
use crate::globe::{GeodeticPosition, Globe};

/// Holds the active camera and mediates model switches.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    camera: Camera,
}

impl Navigator {
    /// Create a navigator driving `camera`.
    #[must_use]
    pub fn new(camera: impl Into<Camera>) -> Self {
        Self {
            camera: camera.into(),
        }
    }

    /// Start building a navigator.
    #[must_use]
    pub fn builder() -> NavigatorBuilder {
        NavigatorBuilder::default()
    }

    /// Active camera.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Active camera, mutably.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Replace the active camera.
    pub fn set_camera(&mut self, camera: impl Into<Camera>) {
        let camera = camera.into();
        log::debug!(
            "navigator camera {} -> {}",
            self.camera.model_name(),
            camera.model_name()
        );
        self.camera = camera;
    }

    /// Globe the active camera is associated with.
    #[must_use]
    pub fn globe(&self) -> &Arc<Globe> {
        self.camera.globe()
    }

    /// Associate the active camera with another globe.
    pub fn set_globe(&mut self, globe: Arc<Globe>) {
        log::debug!(
            "navigator globe rebound ({:?} -> {:?})",
            self.camera.globe().projection(),
            globe.projection()
        );
        self.camera.set_globe(globe);
    }

    /// View matrix of the active camera. Applies limits first.
    pub fn create_view_matrix(&mut self) -> DMat4 {
        self.camera.create_view_matrix()
    }

    /// Position the active camera looks at.
    ///
    /// For a free camera this is the point at its altitude along the view
    /// direction.
    #[must_use]
    pub fn look_at_location(&self) -> GeodeticPosition {
        match &self.camera {
            Camera::LookAt(camera) => camera.position,
            Camera::Free(_) => self.as_look_at_camera(None).position,
        }
    }

    /// Move the look-at target.
    ///
    /// A free camera is converted to look-at, retargeted and converted back,
    /// keeping its range and orientation relative to the new target.
    pub fn set_look_at_location(&mut self, position: GeodeticPosition) {
        if let Camera::LookAt(camera) = &mut self.camera {
            camera.position = position;
            return;
        }
        let mut look_at = self.as_look_at_camera(None);
        look_at.position = position;
        if let Camera::Free(camera) = &mut self.camera {
            let _ = look_at.as_free_camera(camera);
        }
    }

    /// Look-at range, or altitude of a free camera.
    #[must_use]
    pub fn range(&self) -> f64 {
        match &self.camera {
            Camera::LookAt(camera) => camera.range,
            Camera::Free(camera) => camera.range(),
        }
    }

    /// Set the look-at range, or the altitude of a free camera.
    pub fn set_range(&mut self, range: f64) {
        match &mut self.camera {
            Camera::LookAt(camera) => camera.range = range,
            Camera::Free(camera) => camera.set_range(range),
        }
    }

    /// Heading of the active camera in degrees.
    #[must_use]
    pub fn heading(&self) -> f64 {
        match &self.camera {
            Camera::LookAt(camera) => camera.heading,
            Camera::Free(camera) => camera.heading,
        }
    }

    /// Set the heading of the active camera.
    pub fn set_heading(&mut self, heading: f64) {
        match &mut self.camera {
            Camera::LookAt(camera) => camera.heading = heading,
            Camera::Free(camera) => camera.heading = heading,
        }
    }

    /// Tilt of the active camera in degrees, in that camera's own
    /// convention.
    #[must_use]
    pub fn tilt(&self) -> f64 {
        match &self.camera {
            Camera::LookAt(camera) => camera.tilt,
            Camera::Free(camera) => camera.tilt,
        }
    }

    /// Set the tilt of the active camera, in that camera's own convention.
    pub fn set_tilt(&mut self, tilt: f64) {
        match &mut self.camera {
            Camera::LookAt(camera) => camera.tilt = tilt,
            Camera::Free(camera) => camera.tilt = tilt,
        }
    }

    /// Roll of the active camera in degrees.
    #[must_use]
    pub fn roll(&self) -> f64 {
        match &self.camera {
            Camera::LookAt(camera) => camera.roll,
            Camera::Free(camera) => camera.roll,
        }
    }

    /// Set the roll of the active camera.
    pub fn set_roll(&mut self, roll: f64) {
        match &mut self.camera {
            Camera::LookAt(camera) => camera.roll = roll,
            Camera::Free(camera) => camera.roll = roll,
        }
    }

    /// Active pose as a free camera.
    ///
    /// The pose is copied into `dest` when given (keeping its globe),
    /// otherwise into a fresh camera on the active globe. The navigator's
    /// own camera is left untouched.
    #[must_use]
    pub fn as_free_camera(&self, dest: Option<FreeCamera>) -> FreeCamera {
        let mut out =
            dest.unwrap_or_else(|| FreeCamera::new(Arc::clone(self.globe())));
        match &self.camera {
            Camera::Free(camera) => {
                let _ = out.copy_from(camera);
            }
            Camera::LookAt(camera) => {
                let _ = camera.clone().as_free_camera(&mut out);
            }
        }
        out
    }

    /// Active pose as a look-at camera.
    ///
    /// When converting from a free camera, `dest.range` picks the target
    /// distance. Without a `dest` the free camera's altitude is used.
    #[must_use]
    pub fn as_look_at_camera(&self, dest: Option<LookAtCamera>) -> LookAtCamera {
        match &self.camera {
            Camera::LookAt(camera) => match dest {
                Some(mut out) => {
                    let _ = out.copy_from(camera);
                    out
                }
                None => camera.clone(),
            },
            Camera::Free(camera) => {
                let mut out = dest.unwrap_or_else(|| {
                    let mut out = LookAtCamera::new(Arc::clone(camera.globe()));
                    out.range = default_look_at_range(camera);
                    out
                });
                let _ = camera.clone().as_look_at_camera(&mut out);
                out
            }
        }
    }

    /// Make the look-at model active, converting the current pose.
    pub fn switch_to_look_at(&mut self) {
        if !self.camera.is_look_at() {
            let camera = self.as_look_at_camera(None);
            self.set_camera(camera);
        }
    }

    /// Make the free model active, converting the current pose.
    pub fn switch_to_free(&mut self) {
        if self.camera.is_look_at() {
            let camera = self.as_free_camera(None);
            self.set_camera(camera);
        }
    }
}

/// Target distance used when a free camera is converted without a
/// destination camera.
fn default_look_at_range(camera: &FreeCamera) -> f64 {
    let altitude = camera.range();
    if altitude >= MIN_RANGE {
        altitude
    } else {
        log::warn!(
            "free camera altitude {altitude} below minimum range, using \
             {MIN_RANGE}"
        );
        MIN_RANGE
    }
}

/// Builder for [`Navigator`].
#[derive(Debug, Default)]
pub struct NavigatorBuilder {
    camera: Option<Camera>,
    globe: Option<Arc<Globe>>,
}

impl NavigatorBuilder {
    /// Camera to drive. Required.
    #[must_use]
    pub fn camera(mut self, camera: impl Into<Camera>) -> Self {
        self.camera = Some(camera.into());
        self
    }

    /// Globe to associate the camera with, replacing its current one.
    #[must_use]
    pub fn globe(mut self, globe: Arc<Globe>) -> Self {
        self.globe = Some(globe);
        self
    }

    /// Build the navigator.
    ///
    /// # Errors
    ///
    /// Returns [`GeocamError::MissingArgument`] if no camera was supplied.
    pub fn build(self) -> Result<Navigator, GeocamError> {
        let mut camera =
            self.camera.ok_or(GeocamError::MissingArgument("camera"))?;
        if let Some(globe) = self.globe {
            camera.set_globe(globe);
        }
        log::debug!("navigator built with {camera}");
        Ok(Navigator { camera })
    }
}
