//! Shared utilities and common types for the BharatSecure verification pipeline
//!
//! This crate provides common functionality used across the workspace:
//! - Configuration types (environment, logging, scan timing, verification flow)
//! - Utility functions (phone number validation and masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LoggingConfig, ProbeTiming, SecurityScanConfig, TokenSource,
    VerificationFlowConfig,
};
pub use utils::phone;
