//! Error types for RUT construction, parsing, and validation.

use thiserror::Error;

/// Stable error codes attached to every [`RutError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Malformed numeric body
    MalformedBody,
    /// E002: Malformed check character
    MalformedCheckCharacter,
    /// E003: Well-formed RUT whose check character doesn't match its body
    InvalidChecksum,
    /// E004: Generator range outside the body grammar
    InvalidRange,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MalformedBody => "E001",
            ErrorCode::MalformedCheckCharacter => "E002",
            ErrorCode::InvalidChecksum => "E003",
            ErrorCode::InvalidRange => "E004",
        }
    }
}

/// Error raised while building, parsing, checking, or generating a RUT.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RutError {
    #[error("[E001] malformed rut body: {text:?}")]
    MalformedBody { text: String },

    #[error("[E002] malformed check character: {text:?}")]
    MalformedCheckCharacter { text: String },

    #[error(
        "[E003] {message}: {rut:?} (expected check character {})",
        .expected.map_or_else(|| "none".to_string(), |c| format!("{c:?}"))
    )]
    InvalidChecksum {
        rut: String,
        /// `None` only for the empty sentinel, which has no body.
        expected: Option<char>,
        message: String,
    },

    #[error("[E004] invalid generator range [{min}, {max})")]
    InvalidRange { min: u32, max: u32 },
}

impl RutError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RutError::MalformedBody { .. } => ErrorCode::MalformedBody,
            RutError::MalformedCheckCharacter { .. } => ErrorCode::MalformedCheckCharacter,
            RutError::InvalidChecksum { .. } => ErrorCode::InvalidChecksum,
            RutError::InvalidRange { .. } => ErrorCode::InvalidRange,
        }
    }

    pub(crate) fn malformed_body(text: impl Into<String>) -> Self {
        RutError::MalformedBody { text: text.into() }
    }

    pub(crate) fn malformed_check(text: impl Into<String>) -> Self {
        RutError::MalformedCheckCharacter { text: text.into() }
    }
}

/// Error reported by the field-level validation adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message} (field {field:?})")]
    InvalidField { field: String, message: String },
}

impl ValidationError {
    /// Names of the fields this failure is attached to.
    pub fn member_names(&self) -> Vec<&str> {
        match self {
            ValidationError::InvalidField { field, .. } => vec![field.as_str()],
        }
    }
}
