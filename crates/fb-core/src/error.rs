//! # ForumError
//!
//! Centralized error handling for the forum-board ecosystem.
//! Validation failures are raised synchronously; the caller decides how to
//! present them.

use thiserror::Error;

/// The primary error type for all store operations.
#[derive(Error, Debug)]
pub enum ForumError {
    /// Username already taken by another member
    #[error("username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("user not found with ID {0}")]
    UserNotFound(i64),

    #[error("post not found with ID {0}")]
    PostNotFound(i64),

    /// Topic outside the fixed board set
    #[error("unknown board '{0}'")]
    UnknownBoard(String),

    /// Blank or malformed input (e.g. empty title)
    #[error("validation error: {0}")]
    Validation(String),

    /// Durable backend failure (e.g. disk full, permission denied)
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Hashing or verifying a password failed
    #[error("password error: {0}")]
    Password(String),
}

impl ForumError {
    pub fn storage(err: impl std::fmt::Display) -> Self {
        ForumError::Storage(err.to_string())
    }
}

/// A specialized Result type for forum-board logic.
pub type Result<T> = std::result::Result<T, ForumError>;
