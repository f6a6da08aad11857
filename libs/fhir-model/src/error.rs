//! Error types for FHIR models

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A required element was not set when `build()` ran. Carries the
    /// element path, e.g. `NutritionOrder.status`.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A value does not conform to the lexical rules of its primitive type,
    /// or a choice element carries more than one variant.
    #[error("Invalid value for {element}: {reason}")]
    InvalidValue {
        element: &'static str,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(element: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            element,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
