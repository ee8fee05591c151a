use std::sync::Arc;

use velora_client::{DataClient, InvitationAdapter};
use velora_core::error::ServiceError;

use crate::cache::PageCache;
use crate::config::ViewerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ViewerConfig>,
    /// Cached public pages, keyed by path.
    pub cache: Arc<PageCache>,
    /// Slug-keyed invitation reads and revalidation bookkeeping.
    pub invitations: Arc<InvitationAdapter>,
}

impl AppState {
    pub fn from_config(config: ViewerConfig) -> Result<Self, ServiceError> {
        let client = Arc::new(DataClient::new(
            &config.data_service_url,
            config.data_service_key.clone(),
        )?);

        Ok(Self {
            config: Arc::new(config),
            cache: Arc::new(PageCache::new()),
            invitations: Arc::new(InvitationAdapter::new(client)),
        })
    }
}
