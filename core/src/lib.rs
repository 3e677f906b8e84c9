//! # BharatSecure Core
//!
//! Core domain and service layer for the BharatSecure verification pipeline.
//! This crate contains the domain entities, the device security scan engine,
//! the SMS verification session controller, the login flow orchestrator that
//! sequences them, and the error types shared across the workspace.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
