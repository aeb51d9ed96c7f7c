//! Error types for the ncs_snap library

use thiserror::Error;

/// Result type alias for ncs_snap parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised at the two parsing boundaries of the engine.
///
/// These are the only fallible inputs the engine accepts; everything else
/// is derived from compile-time grids. Matcher operations swallow these
/// into `None`/empty results: a malformed color from an external source is
/// an expected outcome, not a fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Hex color string is not `#RRGGBB` / `RRGGBB`
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    /// NCS notation could not be tokenized as `S BBCC-H`
    #[error("invalid NCS code {input:?}: {reason}")]
    InvalidCode { input: String, reason: String },

    /// Hue token letters are not a valid position on the NCS hue circle
    #[error("invalid hue token {token:?}")]
    InvalidHueToken { token: String },
}

impl ParseError {
    /// Create an invalid-hex error with context
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-code error with context
    pub fn invalid_code(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCode {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
