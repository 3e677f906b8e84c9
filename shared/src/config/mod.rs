//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `scan` - Device security scan timing and outcome profiles
//! - `verification` - Verification flow destination, token source and expiry

pub mod environment;
pub mod scan;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LoggingConfig};
pub use scan::{ProbeTiming, SecurityScanConfig};
pub use verification::{TokenSource, VerificationFlowConfig, DEFAULT_EXPIRY_SECONDS};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Device security scan configuration
    #[serde(default)]
    pub scan: SecurityScanConfig,

    /// Verification flow configuration
    #[serde(default)]
    pub verification: VerificationFlowConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            scan: SecurityScanConfig::default(),
            verification: VerificationFlowConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for the detected environment
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        Self {
            environment: env,
            logging: LoggingConfig::for_environment(env),
            ..Default::default()
        }
    }

    /// Load configuration from the environment's config file plus
    /// `BSEC__`-prefixed environment variables.
    ///
    /// The file is optional; variables override file values
    /// (e.g. `BSEC__VERIFICATION__EXPIRY_SECONDS=15`).
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let env = Environment::from_env();

        config::Config::builder()
            .add_source(config::File::with_name(env.config_file()).required(false))
            .add_source(config::Environment::with_prefix("BSEC").separator("__"))
            .build()?
            .try_deserialize()
    }
}
