use std::fmt;

use crate::risk::RiskError;

#[derive(Debug)]
pub enum AppError {
    ConfigError(String),
    ValidationError(String),
    RiskError(RiskError),
    IoError(String),
    SerializationError(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::RiskError(err) => write!(f, "Risk scoring error: {}", err),
            AppError::IoError(msg) => write!(f, "I/O error: {}", msg),
            AppError::SerializationError(msg) => write!(f, "JSON serialization error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::RiskError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RiskError> for AppError {
    fn from(err: RiskError) -> Self {
        AppError::RiskError(err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_error_is_wrapped() {
        let err: AppError = RiskError::validation("monthly_income", "must not be negative, got -1").into();
        assert_eq!(
            err.to_string(),
            "Risk scoring error: Validation failed for monthly_income: must not be negative, got -1"
        );
    }
}
