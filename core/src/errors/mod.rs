//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{ChannelError, CheckError, ValidationError};

use thiserror::Error;

use crate::domain::entities::verification_session::SessionStatus;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid session transition: {from} -> {to}")]
    InvalidTransition {
        from: SessionStatus,
        to: SessionStatus,
    },

    #[error("No verification session in progress")]
    NoActiveSession,

    #[error("Session flag store error: {message}")]
    FlagStore { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Check(#[from] CheckError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
