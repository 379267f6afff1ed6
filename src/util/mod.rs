//! Shared numeric helpers.

pub mod angle;
