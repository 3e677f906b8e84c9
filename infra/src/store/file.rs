//! JSON-file session flag store.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use bs_core::services::session::SessionFlagStore;

use crate::InfrastructureError;

#[derive(Debug, Default, Serialize, Deserialize)]
struct FlagDocument {
    has_logged_in: bool,
}

/// Flag store persisted as a small JSON document.
///
/// The durable analogue of the mobile shell's key-value storage: one
/// boolean, written on login, cleared on logout.
#[derive(Debug, Clone)]
pub struct JsonFileFlagStore {
    path: PathBuf,
}

impl JsonFileFlagStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_document(&self) -> Result<FlagDocument, InfrastructureError> {
        match fs::read_to_string(&self.path).await {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            // a store that was never written reads as logged out
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FlagDocument::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, document: &FlagDocument) -> Result<(), InfrastructureError> {
        let json = serde_json::to_string(document)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionFlagStore for JsonFileFlagStore {
    async fn set(&self, authenticated: bool) -> Result<(), String> {
        let document = FlagDocument {
            has_logged_in: authenticated,
        };
        self.write_document(&document)
            .await
            .map_err(|e| e.to_string())?;
        debug!(path = %self.path.display(), authenticated, "Session flag persisted");
        Ok(())
    }

    async fn get(&self) -> Result<bool, String> {
        self.read_document()
            .await
            .map(|document| document.has_logged_in)
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("bsec-flag-{}.json", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_unwritten_store_reads_logged_out() {
        let store = JsonFileFlagStore::new(scratch_path());
        assert!(!store.get().await.unwrap());
    }

    #[tokio::test]
    async fn test_flag_round_trip() {
        let path = scratch_path();
        let store = JsonFileFlagStore::new(&path);

        store.set(true).await.unwrap();
        assert!(store.get().await.unwrap());

        // a second store over the same file observes the write
        let reader = JsonFileFlagStore::new(&path);
        assert!(reader.get().await.unwrap());

        store.set(false).await.unwrap();
        assert!(!reader.get().await.unwrap());

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_corrupt_document_is_an_error() {
        let path = scratch_path();
        fs::write(&path, "not json").await.unwrap();

        let store = JsonFileFlagStore::new(&path);
        assert!(store.get().await.is_err());

        let _ = fs::remove_file(&path).await;
    }
}
