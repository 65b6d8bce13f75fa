use anyhow::Result;
use async_trait::async_trait;
use object_store::local::LocalFileSystem;
use object_store::path::Path;
use object_store::{ObjectStore, PutPayload};
use shared_types::Customer;
use std::sync::Arc;

use super::config::StorageConfig;
use super::error::StorageError;
use super::traits::CustomerStore;

const COLLECTION_FILE: &str = "customers.json";

/// Persists the whole customer collection as one pretty-printed JSON array.
pub struct JsonFileStore {
    store: Arc<dyn ObjectStore>,
    path: Path,
}

impl JsonFileStore {
    pub fn from_config(config: StorageConfig) -> Result<Self> {
        let store: Arc<dyn ObjectStore> = match config {
            StorageConfig::Local { path } => Arc::new(LocalFileSystem::new_with_prefix(path)?),
        };
        Ok(Self {
            store,
            path: Path::from(COLLECTION_FILE),
        })
    }
}

#[async_trait]
impl CustomerStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Customer>> {
        let result = self
            .store
            .get(&self.path)
            .await
            .map_err(|e| StorageError::Read(e.to_string()))?;
        let bytes = result
            .bytes()
            .await
            .map_err(|e| StorageError::Read(e.to_string()))?;
        let customers = serde_json::from_slice(&bytes)
            .map_err(|e| StorageError::Read(format!("invalid collection file: {e}")))?;
        Ok(customers)
    }

    async fn save(&self, customers: &[Customer]) -> Result<()> {
        let json =
            serde_json::to_vec_pretty(customers).map_err(|e| StorageError::Write(e.to_string()))?;
        // LocalFileSystem stages the upload and renames it into place, so a
        // concurrent load never observes a half-written collection.
        self.store
            .put(&self.path, PutPayload::from(json))
            .await
            .map_err(|e| StorageError::Write(e.to_string()))?;
        Ok(())
    }

    async fn exists(&self) -> Result<bool> {
        match self.store.head(&self.path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
