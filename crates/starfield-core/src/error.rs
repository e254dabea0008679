//! Error types for the starfield core.

use thiserror::Error;

/// Rejected configuration override.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The value could not be parsed for this key.
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    /// The value parsed but lies outside the accepted range.
    #[error("value out of range for {key}: {value:?}")]
    OutOfRange { key: &'static str, value: String },
}

/// Failure reported by a drawing surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// No paintable surface exists (e.g. the 2D context was not granted).
    #[error("drawing surface unavailable")]
    Unavailable,

    /// A draw call failed; the message comes from the host.
    #[error("draw call failed: {0}")]
    Draw(String),
}
