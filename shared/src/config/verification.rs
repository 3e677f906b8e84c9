//! Verification flow configuration

use serde::{Deserialize, Serialize};

/// Default expiry window for a dispatched verification code, in seconds
pub const DEFAULT_EXPIRY_SECONDS: u32 = 20;

/// serde `default` provider for [`VerificationFlowConfig::expiry_seconds`]
fn default_expiry_seconds() -> u32 {
    DEFAULT_EXPIRY_SECONDS
}

/// Where the credential embedded in the outbound message comes from.
///
/// `Generated` mints a random 6-digit code per attempt; `Fixed` sends an
/// opaque token provisioned out of band.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "token")]
pub enum TokenSource {
    /// Random 6-digit numeric code, minted per attempt
    Generated,
    /// Fixed opaque token string
    Fixed(String),
}

impl Default for TokenSource {
    fn default() -> Self {
        TokenSource::Generated
    }
}

/// Configuration for the verification flow
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationFlowConfig {
    /// Destination phone number for the verification message
    pub destination: String,

    /// Credential source for the outbound message
    #[serde(default)]
    pub token_source: TokenSource,

    /// Seconds before a dispatched code expires and the session is
    /// promoted
    #[serde(default = "default_expiry_seconds")]
    pub expiry_seconds: u32,
}

impl Default for VerificationFlowConfig {
    fn default() -> Self {
        Self {
            destination: String::from("+919025740156"),
            token_source: TokenSource::default(),
            expiry_seconds: DEFAULT_EXPIRY_SECONDS,
        }
    }
}

impl VerificationFlowConfig {
    /// Create a configuration for the given destination
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Default::default()
        }
    }

    /// Use a fixed token instead of generated codes
    pub fn with_fixed_token(mut self, token: impl Into<String>) -> Self {
        self.token_source = TokenSource::Fixed(token.into());
        self
    }

    /// Override the expiry window
    pub fn with_expiry_seconds(mut self, seconds: u32) -> Self {
        self.expiry_seconds = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VerificationFlowConfig::default();
        assert_eq!(config.destination, "+919025740156");
        assert_eq!(config.token_source, TokenSource::Generated);
        assert_eq!(config.expiry_seconds, 20);
    }

    #[test]
    fn test_builder() {
        let config = VerificationFlowConfig::new("+919876543210")
            .with_fixed_token("BSEC-TOKEN-01")
            .with_expiry_seconds(15);

        assert_eq!(config.destination, "+919876543210");
        assert_eq!(
            config.token_source,
            TokenSource::Fixed("BSEC-TOKEN-01".to_string())
        );
        assert_eq!(config.expiry_seconds, 15);
    }

    #[test]
    fn test_token_source_serde() {
        let generated: TokenSource = serde_json::from_str(r#"{"mode":"generated"}"#).unwrap();
        assert_eq!(generated, TokenSource::Generated);

        let fixed: TokenSource =
            serde_json::from_str(r#"{"mode":"fixed","token":"BSEC-TOKEN-01"}"#).unwrap();
        assert_eq!(fixed, TokenSource::Fixed("BSEC-TOKEN-01".to_string()));

        let json = serde_json::to_string(&TokenSource::Generated).unwrap();
        assert_eq!(json, r#"{"mode":"generated"}"#);
    }
}
