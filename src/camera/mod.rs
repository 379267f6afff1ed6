//! Camera models for viewing a geodetic globe.
//!
//! Provides an arc-ball [`LookAtCamera`] orbiting a target, a first-person
//! [`FreeCamera`] placed at the eye, and lossless conversion between the
//! two through their shared view matrix.

/// Model-agnostic camera wrapper.
pub mod core;
/// First-person camera.
pub mod free;
/// Arc-ball camera.
pub mod look_at;
/// View-matrix composition and decomposition.
pub mod view;

pub use self::core::Camera;
pub use self::free::FreeCamera;
pub use self::look_at::{LookAtCamera, MIN_RANGE};
pub use self::view::{ViewingParameters, TILT_CONVENTION_OFFSET};
