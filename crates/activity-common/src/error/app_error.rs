//! Application error types
//!
//! Unified error handling for the entire application.

use activity_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Leaderboard computation could not complete
    #[error("Aggregation failed")]
    AggregationFailed,

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration and startup errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 500 Internal Server Error
            Self::AggregationFailed | Self::Config(_) => 500,

            // Map domain errors to appropriate status codes
            Self::Domain(e) => e.status_code(),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::AggregationFailed => "AGGREGATION_FAILED",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
