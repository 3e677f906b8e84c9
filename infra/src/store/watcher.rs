//! Session-flag change notification
//!
//! [`BroadcastFlagStore`] decorates any store so that every write is
//! pushed to subscribers over a watch channel: the logout action notifies
//! the shell router directly instead of being discovered by polling.
//! [`FlagPoller`] keeps the interval-based re-read for shells that still
//! want it, with the period and store injected for testability.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::debug;

use bs_core::services::session::SessionFlagStore;

/// Store decorator that broadcasts every write
pub struct BroadcastFlagStore<S: SessionFlagStore> {
    inner: Arc<S>,
    tx: watch::Sender<bool>,
}

impl<S: SessionFlagStore> BroadcastFlagStore<S> {
    /// Wrap a store, seeding subscribers with `initial`
    pub fn new(inner: Arc<S>, initial: bool) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { inner, tx }
    }

    /// Observe flag changes without polling the store
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

#[async_trait]
impl<S: SessionFlagStore> SessionFlagStore for BroadcastFlagStore<S> {
    async fn set(&self, authenticated: bool) -> Result<(), String> {
        self.inner.set(authenticated).await?;
        self.tx.send_replace(authenticated);
        debug!(authenticated, "Session flag change broadcast");
        Ok(())
    }

    async fn get(&self) -> Result<bool, String> {
        self.inner.get().await
    }
}

/// Periodic re-reader of the session flag.
///
/// `run` polls until the future is dropped; read errors keep the last
/// observed value rather than flapping the router.
pub struct FlagPoller<S: SessionFlagStore> {
    store: Arc<S>,
    period: Duration,
    tx: watch::Sender<bool>,
}

impl<S: SessionFlagStore> FlagPoller<S> {
    /// Create a poller over the given store and period
    pub fn new(store: Arc<S>, period: Duration) -> Self {
        let (tx, _) = watch::channel(false);
        Self { store, period, tx }
    }

    /// Observe the polled flag value
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Poll the store on the configured period. Runs until dropped.
    pub async fn run(&self) {
        let mut timer = interval(self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            timer.tick().await;
            if let Ok(flag) = self.store.get().await {
                if *self.tx.borrow() != flag {
                    debug!(flag, "Session flag changed");
                }
                self.tx.send_replace(flag);
            }
        }
    }
}
