//! Verification session controller.

use std::sync::Arc;

use tokio::time::{interval, Duration, MissedTickBehavior};

use bs_shared::config::VerificationFlowConfig;
use bs_shared::utils::phone::{is_valid_phone, mask_phone_number};

use crate::domain::entities::verification_session::{TickOutcome, VerificationSession};
use crate::errors::{ChannelError, DomainError, DomainResult, ValidationError};

use super::credential::CredentialMinter;
use super::traits::MessagingChannel;

/// Drives one SMS verification attempt at a time through the
/// `Pending -> Sent -> Expired` state machine.
///
/// The controller owns the in-flight session; screens read it through
/// [`session`](Self::session) and drive transitions through the
/// operations below. A discarded session (resend, cancel) takes its
/// countdown with it.
pub struct VerificationSessionController<M: MessagingChannel> {
    /// Messaging channel for credential delivery
    channel: Arc<M>,
    /// Credential minter for this controller's token source
    minter: CredentialMinter,
    /// Flow configuration
    config: VerificationFlowConfig,
    /// The in-flight session, if any
    session: Option<VerificationSession>,
}

impl<M: MessagingChannel> VerificationSessionController<M> {
    /// Create a controller over the given channel
    pub fn new(channel: Arc<M>, config: VerificationFlowConfig) -> Self {
        let minter = CredentialMinter::new(config.token_source.clone());
        Self {
            channel,
            minter,
            config,
            session: None,
        }
    }

    /// The in-flight session, if any
    pub fn session(&self) -> Option<&VerificationSession> {
        self.session.as_ref()
    }

    /// Begin a verification attempt: mint a fresh credential, dispatch it
    /// over the messaging channel exactly once, and open the expiry
    /// window.
    ///
    /// On a channel failure the session stays `Pending` (kept for
    /// inspection), no countdown starts, and the credential is abandoned;
    /// the next `start`/`resend` mints a new one.
    ///
    /// # Arguments
    ///
    /// * `destination` - The phone number to send the credential to
    ///
    /// # Returns
    ///
    /// * `Ok(&VerificationSession)` - The dispatched session, now `Sent`
    /// * `Err(DomainError)` - If validation or the channel failed
    pub async fn start(&mut self, destination: &str) -> DomainResult<&VerificationSession> {
        if !is_valid_phone(destination) {
            return Err(ValidationError::InvalidPhone {
                phone: mask_phone_number(destination),
            }
            .into());
        }

        let credential = self.minter.mint();
        let mut session = VerificationSession::new(
            credential,
            destination.to_string(),
            self.config.expiry_seconds,
        );
        let body = self.compose_message(&session);
        let masked = mask_phone_number(destination);

        tracing::info!(
            destination = %masked,
            session_id = %session.id,
            event = "credential_minted",
            "Minted verification credential"
        );

        if !self.channel.can_send(destination) {
            tracing::warn!(
                destination = %masked,
                session_id = %session.id,
                event = "channel_unavailable",
                "Messaging channel unavailable"
            );
            self.session = Some(session);
            return Err(ChannelError::Unavailable {
                destination: masked,
            }
            .into());
        }

        match self.channel.send(destination, &body).await {
            Ok(message_id) => {
                session.mark_sent()?;
                tracing::info!(
                    destination = %masked,
                    session_id = %session.id,
                    message_id = %message_id,
                    expiry_seconds = session.expiry_seconds,
                    event = "code_sent",
                    "Verification message dispatched"
                );
                Ok(&*self.session.insert(session))
            }
            Err(message) => {
                tracing::error!(
                    destination = %masked,
                    session_id = %session.id,
                    error = %message,
                    event = "channel_send_failed",
                    "Verification message dispatch failed"
                );
                self.session = Some(session);
                Err(ChannelError::SendFailed { message }.into())
            }
        }
    }

    /// Discard the current session and start over with the same
    /// destination: fresh credential, full expiry window.
    pub async fn resend(&mut self) -> DomainResult<&VerificationSession> {
        let destination = match self.session.take() {
            Some(previous) => {
                tracing::info!(
                    session_id = %previous.id,
                    event = "session_discarded",
                    "Discarding session for resend"
                );
                previous.destination
            }
            None => return Err(DomainError::NoActiveSession),
        };
        self.start(&destination).await
    }

    /// Apply one one-second countdown step.
    ///
    /// [`TickOutcome::Expired`] is returned exactly once per session, on
    /// the step that closes the window; it is the only signal that
    /// promotes the app session to authenticated.
    pub fn tick(&mut self) -> TickOutcome {
        match self.session.as_mut() {
            Some(session) => {
                let outcome = session.tick();
                if outcome == TickOutcome::Expired {
                    tracing::info!(
                        session_id = %session.id,
                        event = "session_expired",
                        "Verification window closed"
                    );
                }
                outcome
            }
            None => TickOutcome::Idle,
        }
    }

    /// Close the window immediately (manual override). Valid only once
    /// the message has been sent.
    pub fn skip(&mut self) -> DomainResult<&VerificationSession> {
        let session = self.session.as_mut().ok_or(DomainError::NoActiveSession)?;
        session.skip()?;
        tracing::info!(
            session_id = %session.id,
            event = "countdown_skipped",
            "Countdown skipped"
        );
        Ok(&*session)
    }

    /// Cancel the in-flight session when the surrounding navigation
    /// aborts. Missing or already-terminal sessions are left untouched.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.cancel().is_ok() {
                tracing::info!(
                    session_id = %session.id,
                    event = "session_cancelled",
                    "Verification session cancelled"
                );
            }
        }
    }

    /// Drive the countdown with a recurring one-second tick until the
    /// window closes.
    ///
    /// Cancellation is cooperative: dropping the returned future stops
    /// the timer, and a resend discards it along with the session.
    pub async fn run_countdown(&mut self) -> TickOutcome {
        let mut timer = interval(Duration::from_secs(1));
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately; consume it so every
        // subsequent tick marks one elapsed second
        timer.tick().await;
        loop {
            timer.tick().await;
            match self.tick() {
                TickOutcome::Remaining(_) => continue,
                outcome => return outcome,
            }
        }
    }

    fn compose_message(&self, session: &VerificationSession) -> String {
        format!(
            "Your BharatSecure verification code is: {}. Please enter this code to complete your login. Valid for {} seconds.",
            session.credential.value(),
            session.expiry_seconds,
        )
    }
}
