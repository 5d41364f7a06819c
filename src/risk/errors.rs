// Risk scoring error types
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    /// The snapshot carries a value the engine refuses to score.
    #[error("Validation failed for {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Invalid scoring rules: {message}")]
    InvalidRules { message: String },
}

impl RiskError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        RiskError::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_rules(message: impl Into<String>) -> Self {
        RiskError::InvalidRules {
            message: message.into(),
        }
    }

    /// Name of the offending input field, if this is a validation failure.
    pub fn field(&self) -> Option<&str> {
        match self {
            RiskError::ValidationError { field, .. } => Some(field),
            RiskError::InvalidRules { .. } => None,
        }
    }
}
