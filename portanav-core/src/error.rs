//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum NavError {
    /// Section id not present in the registry
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// A menu entry or panel the shell should expose is absent
    #[error("Missing presentation element: {0}")]
    MissingElement(String),

    /// Registry construction rejected its input
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The shell exposes no menu entries or no panels at all;
    /// navigation cannot function and setup halts
    #[error("Presentation shell is missing its menu or panel collection")]
    InitializationFailed,
}

impl NavError {
    /// Whether it is expected behavior (stale fragment, absent element, etc.)
    /// is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::UnknownSection(_) | Self::MissingElement(_) | Self::ValidationError(_) => true,
            Self::InitializationFailed => false,
        }
    }
}

/// Core layer Result type alias
pub type NavResult<T> = std::result::Result<T, NavError>;
