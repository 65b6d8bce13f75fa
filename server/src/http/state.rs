use crate::storage::CustomerStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application state shared across handlers
pub struct AppState {
    pub storage: Arc<dyn CustomerStore>,
    /// Held across each create's load-append-save cycle so concurrent
    /// creates serialize. Read-only handlers do not take it.
    pub write_lock: Mutex<()>,
}

impl AppState {
    pub fn new(storage: Arc<dyn CustomerStore>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }
}
