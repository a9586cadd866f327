//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors from registration and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email address is syntactically invalid.
    #[error("Invalid email address: {0}")]
    InvalidEmail(#[from] stockroom_core::EmailError),

    /// The password does not meet requirements.
    #[error("{0}")]
    WeakPassword(String),

    /// The email is already registered.
    #[error("Email already registered")]
    EmailTaken,

    /// Unknown email or wrong password. Deliberately indistinguishable to
    /// callers so login cannot be used to probe registered addresses.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password hashing failed.
    #[error("Failed to hash password")]
    PasswordHash,

    /// A repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
