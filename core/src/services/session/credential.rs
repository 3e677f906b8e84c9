//! Credential minting.

use rand::Rng;

use bs_shared::config::TokenSource;

use crate::domain::entities::verification_session::Credential;

/// Mints the credential embedded in each outbound message.
///
/// Every attempt mints anew; a generated code is additionally guaranteed
/// distinct from the immediately prior one, so a resend never repeats the
/// code it replaces. A fixed token source hands out the configured token
/// verbatim.
#[derive(Debug, Clone)]
pub struct CredentialMinter {
    source: TokenSource,
    last_code: Option<String>,
}

impl CredentialMinter {
    /// Create a minter for the configured token source
    pub fn new(source: TokenSource) -> Self {
        Self {
            source,
            last_code: None,
        }
    }

    /// Mint the credential for a new verification attempt
    pub fn mint(&mut self) -> Credential {
        match &self.source {
            TokenSource::Generated => {
                let code = self.fresh_code();
                self.last_code = Some(code.clone());
                Credential::Code(code)
            }
            TokenSource::Fixed(token) => Credential::Token(token.clone()),
        }
    }

    fn fresh_code(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let code = format!("{:06}", rng.gen_range(0..1_000_000));
            if self.last_code.as_deref() != Some(code.as_str()) {
                return code;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::verification_session::CODE_LENGTH;

    #[test]
    fn test_generated_code_format() {
        let mut minter = CredentialMinter::new(TokenSource::Generated);
        for _ in 0..100 {
            match minter.mint() {
                Credential::Code(code) => {
                    assert_eq!(code.len(), CODE_LENGTH);
                    assert!(code.chars().all(|c| c.is_ascii_digit()));
                }
                Credential::Token(_) => panic!("generated source must mint codes"),
            }
        }
    }

    #[test]
    fn test_consecutive_codes_are_distinct() {
        let mut minter = CredentialMinter::new(TokenSource::Generated);
        let mut previous = minter.mint();
        for _ in 0..100 {
            let next = minter.mint();
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn test_fixed_source_mints_configured_token() {
        let mut minter = CredentialMinter::new(TokenSource::Fixed("BSEC-TOKEN-01".to_string()));
        assert_eq!(
            minter.mint(),
            Credential::Token("BSEC-TOKEN-01".to_string())
        );
        // the fixed token is reissued verbatim on every attempt
        assert_eq!(
            minter.mint(),
            Credential::Token("BSEC-TOKEN-01".to_string())
        );
    }
}
