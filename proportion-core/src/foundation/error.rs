/// Convenience result type used across Proportion.
pub type ProportionResult<T> = Result<T, ProportionError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is a deterministic consequence of the input; there is nothing transient to
/// retry.
#[derive(thiserror::Error, Debug)]
pub enum ProportionError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration documents.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl ProportionError {
    /// Build a [`ProportionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ProportionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error came from a failed validation pass.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for ProportionError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
