// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera pose model for viewing a geodetic globe.
//!
//! Geocam describes where a viewer sits relative to an ellipsoidal (or
//! flattened) globe and turns that pose into a world → eye view matrix.
//!
//! # Key entry points
//!
//! - [`camera::LookAtCamera`] - arc-ball camera orbiting a target at a range
//! - [`camera::FreeCamera`] - first-person camera at the eye point
//! - [`navigator::Navigator`] - facade over whichever model is active
//! - [`options::Options`] - TOML presets for the globe and initial pose
//!
//! # Conversions
//!
//! Both models derive the same kind of view matrix. Converting one into the
//! other composes its matrix, then decomposes it relative to the new
//! model's origin (the eye for the free camera, a point along the view
//! direction for the look-at camera), so the rendered view is preserved.
//! Every field is clamped or wrapped by `apply_limits` before a matrix is
//! built.

pub mod camera;
pub mod error;
pub mod globe;
pub mod navigator;
pub mod options;
pub mod util;

pub use camera::{Camera, FreeCamera, LookAtCamera};
pub use error::GeocamError;
pub use globe::{GeodeticPosition, Globe};
pub use navigator::{Navigator, NavigatorBuilder};
