//! # BharatSecure Infrastructure
//!
//! Concrete collaborator implementations for the verification pipeline,
//! plugging into the trait seams defined by `bs_core`:
//!
//! - **Probes**: simulated jailbreak/malware/integrity detectors
//! - **Channel**: SMS delivery via console logging or `sms:` URL composition
//! - **Store**: session flag persistence (in-memory, JSON file) and
//!   change notification
//! - **Navigation**: a recording navigator standing in for the shell router

pub mod channel;
pub mod navigation;
pub mod probes;
pub mod store;

use thiserror::Error;

/// Infrastructure-specific error types
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Flag store I/O error
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Flag store serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
