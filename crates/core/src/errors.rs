//! Core error types for the market dashboard.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use marketdash_market_data::MarketDataError;
use thiserror::Error;

use crate::constants::MIN_PASSWORD_LENGTH;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    /// Display is the user-facing message.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    ConstraintViolation(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Invalid payload")]
    InvalidPayload,

    #[error("Password must be at least {} characters", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,

    #[error("{0}")]
    InvalidInput(String),
}

impl Error {
    /// Whether the error is a duplicate-key conflict, either caught by a
    /// pre-check or raised by the storage layer's unique constraint.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Error::ConstraintViolation(_) | Error::Database(DatabaseError::UniqueViolation(_))
        )
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Error::Unexpected(format!("Password hashing failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(
            Error::from(ValidationError::PasswordTooShort).to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            Error::from(ValidationError::MissingFields).to_string(),
            "Missing fields"
        );
    }

    #[test]
    fn test_conflict_detection() {
        assert!(Error::ConstraintViolation("dup".into()).is_conflict());
        assert!(Error::Database(DatabaseError::UniqueViolation("users.email".into())).is_conflict());
        assert!(!Error::Database(DatabaseError::QueryFailed("boom".into())).is_conflict());
    }
}
