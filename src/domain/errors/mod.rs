// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone)]
pub enum DomainError {
    /// Invalid arguments provided
    BadArgs(String),
    /// Invalid time range
    InvalidTimeRange(String),
    /// Metadata not yet known (duration NaN, infinite, or <= 0)
    MetadataUnknown(String),
    /// Value outside the allowed range
    OutOfRange(String),
    /// Validation failed
    ValidationFailed(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::InvalidTimeRange(msg) => write!(f, "Invalid time range: {}", msg),
            DomainError::MetadataUnknown(msg) => write!(f, "Metadata unknown: {}", msg),
            DomainError::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
            DomainError::ValidationFailed(msg) => write!(f, "Validation failed: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
