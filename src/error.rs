//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbital crate.
///
/// Pointer event handling never fails; these only surface while building a
/// controller or moving configuration in and out of files.
#[derive(Debug)]
pub enum OrbitalError {
    /// Rejected controller configuration (non-finite speed, bounds or
    /// starting position).
    InvalidOptions(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Recorded gesture trace could not be decoded.
    TraceParse(String),
}

impl fmt::Display for OrbitalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOptions(msg) => {
                write!(f, "invalid orbit options: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::TraceParse(msg) => write!(f, "trace parse error: {msg}"),
        }
    }
}

impl std::error::Error for OrbitalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitalError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
