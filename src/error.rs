//! Crate-level error types.

use std::fmt;

/// Errors produced by the geocam crate.
#[derive(Debug)]
pub enum GeocamError {
    /// A required collaborator (globe, camera) was not supplied.
    MissingArgument(&'static str),
    /// Globe parameters that cannot describe an ellipsoid.
    InvalidGlobe(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for GeocamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument(name) => {
                write!(f, "missing required argument: {name}")
            }
            Self::InvalidGlobe(msg) => write!(f, "invalid globe: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GeocamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GeocamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
