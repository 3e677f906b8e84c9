//! Console SMS channel
//!
//! A mock channel for development and testing: messages are logged
//! instead of sent, message ids are generated locally, and failure or
//! unsupported-channel behavior can be simulated.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use bs_core::services::session::MessagingChannel;
use bs_shared::utils::phone::{is_valid_phone, mask_phone_number};

/// Messaging channel that logs messages instead of sending them
#[derive(Clone)]
pub struct ConsoleSmsChannel {
    /// Counter for tracking number of messages dispatched
    message_count: Arc<AtomicU64>,
    /// Whether to simulate dispatch failures (for testing)
    simulate_failure: bool,
    /// Whether the channel reports itself as supported
    supported: bool,
}

impl ConsoleSmsChannel {
    /// Create a new console channel
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            supported: true,
        }
    }

    /// Create a channel with configurable options
    pub fn with_options(supported: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            supported,
        }
    }

    /// Total number of messages dispatched
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for ConsoleSmsChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagingChannel for ConsoleSmsChannel {
    fn can_send(&self, destination: &str) -> bool {
        self.supported && is_valid_phone(destination)
    }

    async fn send(&self, destination: &str, body: &str) -> Result<String, String> {
        let masked = mask_phone_number(destination);

        if !self.can_send(destination) {
            return Err(format!("SMS is not available for {}", masked));
        }

        if self.simulate_failure {
            warn!(
                destination = %masked,
                "Console SMS channel simulating dispatch failure"
            );
            return Err("Simulated SMS dispatch failure".to_string());
        }

        let message_id = format!("console_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "sms_channel",
            provider = "console",
            destination = %masked,
            message_id = %message_id,
            message_length = body.len(),
            message_number = count,
            "SMS dispatched (console)"
        );

        Ok(message_id)
    }
}
