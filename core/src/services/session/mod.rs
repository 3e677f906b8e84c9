//! Verification session module
//!
//! This module provides the SMS verification half of the pipeline:
//! - Credential minting (generated codes or a fixed token)
//! - One-shot dispatch over the messaging channel
//! - The countdown-gated `Pending -> Sent -> Expired` state machine
//! - Resend, skip and cancel handling

mod controller;
mod credential;
mod traits;

#[cfg(test)]
mod tests;

pub use controller::VerificationSessionController;
pub use credential::CredentialMinter;
pub use traits::{MessagingChannel, SessionFlagStore};
