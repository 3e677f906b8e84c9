//! Login flow orchestration.

use std::sync::Arc;

use bs_shared::config::VerificationFlowConfig;
use bs_shared::utils::phone::{is_valid_phone, mask_phone_number};

use crate::domain::entities::check_result::SecurityVerdict;
use crate::domain::entities::verification_session::TickOutcome;
use crate::domain::value_objects::Route;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::services::security::SecurityCheckEngine;
use crate::services::session::{
    MessagingChannel, SessionFlagStore, VerificationSessionController,
};

use super::traits::Navigator;

/// Sequences the whole login pipeline over the collaborator seams:
/// phone entry, the device security scan, credential dispatch, and the
/// countdown-gated admission to the home area.
///
/// The flow never retries on its own; failed verdicts and channel errors
/// are handed back so the user decides between retry and abandon.
pub struct LoginFlow<M, F, N>
where
    M: MessagingChannel,
    F: SessionFlagStore,
    N: Navigator,
{
    /// Device security scan engine
    engine: Arc<SecurityCheckEngine>,
    /// Verification session controller
    controller: VerificationSessionController<M>,
    /// Persisted session flag (app shell storage)
    flag_store: Arc<F>,
    /// Route transitions (app shell router)
    navigator: Arc<N>,
    /// Flow configuration
    config: VerificationFlowConfig,
}

impl<M, F, N> LoginFlow<M, F, N>
where
    M: MessagingChannel,
    F: SessionFlagStore,
    N: Navigator,
{
    /// Assemble the flow from its collaborators
    pub fn new(
        engine: Arc<SecurityCheckEngine>,
        channel: Arc<M>,
        flag_store: Arc<F>,
        navigator: Arc<N>,
        config: VerificationFlowConfig,
    ) -> Self {
        let controller = VerificationSessionController::new(channel, config.clone());
        Self {
            engine,
            controller,
            flag_store,
            navigator,
            config,
        }
    }

    /// The scan engine, for progress subscriptions
    pub fn engine(&self) -> &SecurityCheckEngine {
        &self.engine
    }

    /// The session controller, for session inspection
    pub fn controller(&self) -> &VerificationSessionController<M> {
        &self.controller
    }

    /// Validate the phone number typed at login and move to the scan
    /// screen.
    pub fn submit_phone(&self, phone: &str) -> DomainResult<()> {
        let trimmed = phone.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingPhone.into());
        }
        if !is_valid_phone(trimmed) {
            return Err(ValidationError::InvalidPhone {
                phone: mask_phone_number(trimmed),
            }
            .into());
        }

        tracing::info!(
            phone = %mask_phone_number(trimmed),
            event = "login_submitted",
            "Phone number accepted; starting security check"
        );
        self.navigator.push(Route::SecurityCheck);
        Ok(())
    }

    /// Run the device scan.
    ///
    /// On a clean verdict the session flag is persisted and the flow moves
    /// to the verification screen. A failed verdict is returned for the
    /// retry/back decision; re-invoking this method re-runs the whole
    /// battery.
    pub async fn run_security_check(&mut self) -> DomainResult<SecurityVerdict> {
        let verdict = self.engine.run().await?;

        if verdict.overall_passed {
            self.flag_store
                .set(true)
                .await
                .map_err(|message| DomainError::FlagStore { message })?;
            self.navigator.replace(Route::Verification);
        }

        Ok(verdict)
    }

    /// Abandon a failed scan and return to login
    pub fn back_to_login(&self) {
        self.navigator.replace(Route::Login);
    }

    /// Dispatch the verification code to the configured destination
    pub async fn send_code(&mut self) -> DomainResult<()> {
        let destination = self.config.destination.clone();
        self.controller.start(&destination).await?;
        Ok(())
    }

    /// Discard the current attempt and dispatch a fresh code
    pub async fn resend_code(&mut self) -> DomainResult<()> {
        self.controller.resend().await?;
        Ok(())
    }

    /// Drive the countdown to completion.
    ///
    /// On expiry the authenticated side effect fires exactly once: the
    /// shell router is moved to the home area. A session cancelled
    /// underneath the countdown admits nothing.
    pub async fn drive_countdown(&mut self) -> DomainResult<()> {
        match self.controller.run_countdown().await {
            TickOutcome::Expired => {
                tracing::info!(
                    event = "session_authenticated",
                    "Verification window elapsed; admitting session"
                );
                self.navigator.replace(Route::Home);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Manual override: close the window now and admit the session
    pub fn skip_timer(&mut self) -> DomainResult<()> {
        self.controller.skip()?;
        tracing::info!(
            event = "session_authenticated",
            "Countdown skipped; admitting session"
        );
        self.navigator.replace(Route::Home);
        Ok(())
    }

    /// Abort verification and return to the previous screen
    pub fn abort_verification(&mut self) {
        self.controller.cancel();
        self.navigator.back();
    }

    /// Clear the session flag and return the shell to login.
    ///
    /// The store write is the logout notification; a broadcasting store
    /// implementation pushes it to the router without polling.
    pub async fn logout(&self) -> DomainResult<()> {
        self.flag_store
            .set(false)
            .await
            .map_err(|message| DomainError::FlagStore { message })?;
        tracing::info!(event = "logout", "Session flag cleared");
        self.navigator.replace(Route::Login);
        Ok(())
    }
}
