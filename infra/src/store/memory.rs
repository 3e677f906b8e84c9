//! In-memory session flag store.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use bs_core::services::session::SessionFlagStore;

/// Process-local flag store, primarily for tests and demos
#[derive(Debug, Default)]
pub struct InMemoryFlagStore {
    flag: AtomicBool,
}

impl InMemoryFlagStore {
    /// Create a store with the flag cleared
    pub fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl SessionFlagStore for InMemoryFlagStore {
    async fn set(&self, authenticated: bool) -> Result<(), String> {
        self.flag.store(authenticated, Ordering::SeqCst);
        Ok(())
    }

    async fn get(&self) -> Result<bool, String> {
        Ok(self.flag.load(Ordering::SeqCst))
    }
}
