//! Verification session entity for SMS-based admission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// Length of a generated verification code
pub const CODE_LENGTH: usize = 6;

/// The credential delivered to the user over the messaging channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Credential {
    /// Random 6-digit numeric code
    Code(String),
    /// Fixed opaque server token
    Token(String),
}

impl Credential {
    /// The string embedded in the outbound message
    pub fn value(&self) -> &str {
        match self {
            Credential::Code(code) => code,
            Credential::Token(token) => token,
        }
    }
}

/// Lifecycle state of a verification session.
///
/// Transitions are strictly forward: `Pending -> Sent -> Expired`, with
/// `Cancelled` reachable from the two non-terminal states. A session never
/// regresses; resending discards it and mints a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Created, credential minted, nothing dispatched yet
    Pending,
    /// Message dispatched, countdown running
    Sent,
    /// Countdown elapsed (or skipped); the promotion signal
    Expired,
    /// Abandoned by the surrounding navigation
    Cancelled,
}

impl SessionStatus {
    /// Whether no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Expired | SessionStatus::Cancelled)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Pending => write!(f, "pending"),
            SessionStatus::Sent => write!(f, "sent"),
            SessionStatus::Expired => write!(f, "expired"),
            SessionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of one countdown step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No countdown is running (nothing sent yet, or already terminal)
    Idle,
    /// Seconds left before the window closes
    Remaining(u32),
    /// The window just closed. Reported exactly once per session; this is
    /// the signal that promotes the app session to authenticated.
    Expired,
}

/// One in-flight verification attempt: a minted credential, its
/// destination, and the expiry countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSession {
    /// Unique identifier for this attempt
    pub id: Uuid,

    /// Credential embedded in the outbound message
    pub credential: Credential,

    /// Destination phone number
    pub destination: String,

    /// When the message was dispatched, if it was
    pub sent_at: Option<DateTime<Utc>>,

    /// Full expiry window in seconds
    pub expiry_seconds: u32,

    /// Seconds remaining on the countdown
    pub remaining_seconds: u32,

    /// Current lifecycle state
    pub status: SessionStatus,
}

impl VerificationSession {
    /// Create a pending session for a freshly minted credential
    pub fn new(credential: Credential, destination: String, expiry_seconds: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            credential,
            destination,
            sent_at: None,
            expiry_seconds,
            remaining_seconds: expiry_seconds,
            status: SessionStatus::Pending,
        }
    }

    /// Record a successful dispatch and open the expiry window
    pub fn mark_sent(&mut self) -> DomainResult<()> {
        if self.status != SessionStatus::Pending {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: SessionStatus::Sent,
            });
        }
        self.status = SessionStatus::Sent;
        self.sent_at = Some(Utc::now());
        self.remaining_seconds = self.expiry_seconds;
        Ok(())
    }

    /// Apply one one-second countdown step.
    ///
    /// Only a `Sent` session counts down; the step that reaches zero
    /// transitions to `Expired` and is the only one that reports
    /// `TickOutcome::Expired`.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != SessionStatus::Sent {
            return TickOutcome::Idle;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.status = SessionStatus::Expired;
            TickOutcome::Expired
        } else {
            TickOutcome::Remaining(self.remaining_seconds)
        }
    }

    /// Close the window immediately, bypassing the countdown.
    ///
    /// Valid only once the message has been sent; skipping a `Pending`
    /// session is rejected.
    pub fn skip(&mut self) -> DomainResult<()> {
        if self.status != SessionStatus::Sent {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: SessionStatus::Expired,
            });
        }
        self.remaining_seconds = 0;
        self.status = SessionStatus::Expired;
        Ok(())
    }

    /// Abandon the session when the surrounding navigation aborts
    pub fn cancel(&mut self) -> DomainResult<()> {
        if self.status.is_terminal() {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: SessionStatus::Cancelled,
            });
        }
        self.status = SessionStatus::Cancelled;
        Ok(())
    }
}
