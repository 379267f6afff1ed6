use std::fmt;
use std::sync::Arc;

use glam::DMat4;

use super::free::FreeCamera;
use super::look_at::LookAtCamera;
use crate::globe::Globe;

/// One of the two camera models.
#[derive(Debug, Clone, PartialEq)]
pub enum Camera {
    /// Arc-ball camera orbiting a target.
    LookAt(LookAtCamera),
    /// First-person camera at the eye point.
    Free(FreeCamera),
}

impl Camera {
    /// Globe the wrapped camera is associated with.
    #[must_use]
    pub fn globe(&self) -> &Arc<Globe> {
        match self {
            Self::LookAt(camera) => camera.globe(),
            Self::Free(camera) => camera.globe(),
        }
    }

    /// Associate the wrapped camera with another globe.
    pub fn set_globe(&mut self, globe: Arc<Globe>) {
        match self {
            Self::LookAt(camera) => camera.set_globe(globe),
            Self::Free(camera) => camera.set_globe(globe),
        }
    }

    /// Whether this is the look-at model.
    #[must_use]
    pub const fn is_look_at(&self) -> bool {
        matches!(self, Self::LookAt(_))
    }

    /// Short model name for log lines.
    #[must_use]
    pub const fn model_name(&self) -> &'static str {
        match self {
            Self::LookAt(_) => "look-at",
            Self::Free(_) => "free",
        }
    }

    /// Clamp and wrap the wrapped camera's fields.
    pub fn apply_limits(&mut self) {
        match self {
            Self::LookAt(camera) => camera.apply_limits(),
            Self::Free(camera) => camera.apply_limits(),
        }
    }

    /// View matrix of the wrapped camera. Applies limits first.
    pub fn create_view_matrix(&mut self) -> DMat4 {
        match self {
            Self::LookAt(camera) => camera.create_view_matrix(),
            Self::Free(camera) => camera.create_view_matrix(),
        }
    }
}

impl From<LookAtCamera> for Camera {
    fn from(camera: LookAtCamera) -> Self {
        Self::LookAt(camera)
    }
}

impl From<FreeCamera> for Camera {
    fn from(camera: FreeCamera) -> Self {
        Self::Free(camera)
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LookAt(camera) => write!(f, "look-at: {camera}"),
            Self::Free(camera) => write!(f, "free: {camera}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::Projection;

    #[test]
    fn dispatches_to_wrapped_model() {
        let globe = Arc::new(Globe::wgs84());
        let mut look_at = LookAtCamera::new(Arc::clone(&globe));
        let mut camera = Camera::from(look_at.clone());
        assert!(camera.is_look_at());
        assert_eq!(camera.model_name(), "look-at");
        assert_eq!(camera.create_view_matrix(), look_at.create_view_matrix());

        let mut free = FreeCamera::new(globe);
        let mut camera = Camera::from(free.clone());
        assert!(!camera.is_look_at());
        assert_eq!(camera.create_view_matrix(), free.create_view_matrix());
    }

    #[test]
    fn rebinding_globe_changes_limits() {
        let mut look_at = LookAtCamera::new(Arc::new(Globe::wgs84()));
        look_at.tilt = 45.0;
        let mut camera = Camera::from(look_at);
        camera.apply_limits();
        let Camera::LookAt(inner) = &camera else {
            unreachable!("constructed from a look-at camera");
        };
        assert_eq!(inner.tilt, 45.0);

        camera.set_globe(Arc::new(
            Globe::wgs84().with_projection(Projection::Equirectangular),
        ));
        assert!(camera.globe().is_2d());
        camera.apply_limits();
        let Camera::LookAt(inner) = &camera else {
            unreachable!("constructed from a look-at camera");
        };
        assert_eq!(inner.tilt, 0.0);
    }
}
