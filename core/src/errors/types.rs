//! Specific error types for device checks, messaging and validation.

use thiserror::Error;

use crate::domain::entities::check_result::CheckKind;

/// Errors raised inside a device-check probe.
///
/// A flagged device is a boolean outcome, not an error; only unexpected
/// probe failures surface here, and they abort the whole verdict attempt.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{kind} probe failed: {message}")]
    ProbeFailed { kind: CheckKind, message: String },
}

/// Errors raised by the external messaging channel
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Messaging channel unavailable for {destination}")]
    Unavailable { destination: String },

    #[error("Message dispatch failed: {message}")]
    SendFailed { message: String },
}

/// Validation errors for user-supplied input
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Please enter your phone number")]
    MissingPhone,

    #[error("Invalid phone number format: {phone}")]
    InvalidPhone { phone: String },
}
