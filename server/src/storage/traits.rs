use anyhow::Result;
use async_trait::async_trait;
use shared_types::Customer;

/// Whole-collection access to the persisted customer data.
///
/// Every operation reads or rewrites the full collection; there is no
/// indexing and no partial access.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Reads and parses the entire persisted collection.
    async fn load(&self) -> Result<Vec<Customer>>;

    /// Serializes the full collection and replaces the persisted copy.
    /// No partially written collection is visible to a subsequent `load`.
    async fn save(&self, customers: &[Customer]) -> Result<()>;

    /// Whether a collection file has been written at all.
    async fn exists(&self) -> Result<bool>;
}
