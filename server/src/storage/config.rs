use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StorageConfig {
    Local { path: PathBuf },
}

impl StorageConfig {
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local { path: path.into() }
    }

    pub fn from_env() -> Self {
        let path = std::env::var("STORAGE_PATH").unwrap_or_else(|_| "./data".to_string());
        Self::local(path)
    }
}
