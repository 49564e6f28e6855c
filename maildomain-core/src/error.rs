//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A required form field is still empty
    #[error("Domain form is incomplete")]
    Incomplete,

    /// A save request is already in flight
    #[error("Save already in progress")]
    SaveInFlight,

    /// A connection test is already in flight
    #[error("Connection test already in progress")]
    TestInFlight,

    /// The remote call failed before producing a usable response
    #[error("Transport error: {0}")]
    Transport(String),

    /// A collaborator payload could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// Whether it is expected behavior (command precondition rejections) used
    /// for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Incomplete | Self::SaveInFlight | Self::TestInFlight
        )
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
