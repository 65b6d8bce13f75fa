use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read customer collection: {0}")]
    Read(String),

    #[error("failed to write customer collection: {0}")]
    Write(String),
}
