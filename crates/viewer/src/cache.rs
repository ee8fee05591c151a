//! In-memory cache for rendered invitation pages.
//!
//! Entries are keyed by public path (`/i/{slug}`) and live until the
//! revalidation endpoint invalidates them; there is no TTL. A stale entry
//! is the accepted failure mode of the protocol, not an error.

use std::collections::HashMap;

use tokio::sync::RwLock;
use velora_core::models::Invitation;
use velora_core::types::Timestamp;

/// A cached page payload.
#[derive(Debug, Clone)]
pub struct CachedPage {
    pub invitation: Invitation,
    pub cached_at: Timestamp,
}

/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct PageCache {
    entries: RwLock<HashMap<String, CachedPage>>,
}

impl PageCache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, path: &str) -> Option<CachedPage> {
        self.entries.read().await.get(path).cloned()
    }

    pub async fn insert(&self, path: String, invitation: Invitation) {
        let entry = CachedPage {
            invitation,
            cached_at: chrono::Utc::now(),
        };
        self.entries.write().await.insert(path, entry);
    }

    /// Drop the entry for `path`. Returns whether an entry existed, so
    /// repeated invalidation of the same path stays observable as a no-op.
    pub async fn invalidate(&self, path: &str) -> bool {
        self.entries.write().await.remove(path).is_some()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new()
    }
}
