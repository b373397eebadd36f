//! Crate-level error types.

use std::fmt;

/// Errors produced by the vz-cube crate.
#[derive(Debug)]
pub enum CubeError {
    /// No render target was supplied when the view was built.
    MissingRenderTarget,
    /// A field-of-view string is not a usable CSS length.
    InvalidLength(String),
    /// The render target rejected a transform instruction.
    Render(String),
    /// The device-tilt adapter failed to initialize.
    TiltInit(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRenderTarget => {
                write!(f, "render target not found: a pivot handle is required")
            }
            Self::InvalidLength(value) => {
                write!(f, "invalid perspective length: {value:?}")
            }
            Self::Render(msg) => write!(f, "render error: {msg}"),
            Self::TiltInit(msg) => {
                write!(f, "tilt adapter init error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CubeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CubeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
