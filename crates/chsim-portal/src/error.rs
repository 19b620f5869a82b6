use thiserror::Error;

/// Failures reported by the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("User already registered")]
    AlreadyRegistered,

    #[error("Unable to validate email address: invalid format")]
    InvalidEmail,

    #[error("Password should be at least {min} characters")]
    WeakPassword { min: usize },

    #[error("Auth session missing")]
    NotAuthenticated,

    #[error("Invalid news post: {0}")]
    InvalidPost(String),
}
