//! Collaborator traits for the verification session.

use async_trait::async_trait;

/// External messaging transport used to deliver the credential.
///
/// The controller only learns whether the local invocation succeeded;
/// there is no delivery acknowledgment protocol.
#[async_trait]
pub trait MessagingChannel: Send + Sync {
    /// Whether the channel can compose a message for this destination
    fn can_send(&self, destination: &str) -> bool;

    /// Dispatch a message, returning a provider message id
    async fn send(&self, destination: &str, body: &str) -> Result<String, String>;
}

/// Persisted boolean session flag owned by the app shell storage layer.
///
/// Written once per successful verification, cleared on logout, and read
/// by the shell router on every navigation decision.
#[async_trait]
pub trait SessionFlagStore: Send + Sync {
    /// Persist the flag
    async fn set(&self, authenticated: bool) -> Result<(), String>;

    /// Read the flag
    async fn get(&self) -> Result<bool, String>;
}
