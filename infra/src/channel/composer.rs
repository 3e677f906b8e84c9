//! `sms:` URL composition channel
//!
//! Mirrors the OS message-composer integration: the credential message is
//! encoded into a platform `sms:` URL and handed to an opener (the OS
//! linking layer). iOS and Android disagree on the body separator, so the
//! dialect is part of the channel configuration.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use bs_core::services::session::MessagingChannel;
use bs_shared::utils::phone::mask_phone_number;

/// Platform whose `sms:` URL dialect to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `sms:<number>&body=<text>`
    Ios,
    /// `sms:<number>?body=<text>`
    Android,
}

impl Platform {
    fn body_separator(&self) -> char {
        match self {
            Platform::Ios => '&',
            Platform::Android => '?',
        }
    }
}

/// Opens composed URLs through the OS linking layer
#[async_trait]
pub trait UrlOpener: Send + Sync {
    /// Whether the OS can handle this URL
    fn can_open(&self, url: &str) -> bool;

    /// Open the URL; the message composer takes over from here
    async fn open(&self, url: &str) -> Result<(), String>;
}

/// Channel that delegates delivery to the platform message composer.
///
/// Delivery is fire-and-forget: opening the composer successfully is all
/// the confirmation this channel can give.
pub struct ComposerSmsChannel<O: UrlOpener> {
    opener: O,
    platform: Platform,
}

impl<O: UrlOpener> ComposerSmsChannel<O> {
    /// Create a channel for the given platform dialect
    pub fn new(opener: O, platform: Platform) -> Self {
        Self { opener, platform }
    }

    fn compose_url(&self, destination: &str, body: &str) -> String {
        format!(
            "sms:{}{}body={}",
            destination,
            self.platform.body_separator(),
            percent_encode(body)
        )
    }
}

#[async_trait]
impl<O: UrlOpener> MessagingChannel for ComposerSmsChannel<O> {
    fn can_send(&self, destination: &str) -> bool {
        self.opener.can_open(&self.compose_url(destination, ""))
    }

    async fn send(&self, destination: &str, body: &str) -> Result<String, String> {
        let url = self.compose_url(destination, body);
        if !self.opener.can_open(&url) {
            return Err("SMS is not available on this device".to_string());
        }

        self.opener.open(&url).await?;

        let message_id = format!("composer_{}", Uuid::new_v4());
        info!(
            target: "sms_channel",
            provider = "composer",
            destination = %mask_phone_number(destination),
            platform = ?self.platform,
            message_id = %message_id,
            "Opened message composer"
        );
        Ok(message_id)
    }
}

/// Percent-encode everything outside the URL-safe unreserved set
fn percent_encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{:02X}", byte));
            }
        }
    }
    encoded
}
