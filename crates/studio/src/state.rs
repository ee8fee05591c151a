use std::sync::Arc;

use velora_client::{DataClient, InvitationAdapter, ResellerAdapter, UserAdapter};
use velora_core::error::ServiceError;
use velora_engine::EntityManager;

use crate::config::StudioConfig;
use crate::resources;
use crate::revalidate::RevalidationClient;

pub type InvitationManager = EntityManager<InvitationAdapter>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<StudioConfig>,
    /// Entity manager for the users admin surface.
    pub users: Arc<EntityManager<UserAdapter>>,
    /// Entity manager for the resellers admin surface.
    pub resellers: Arc<EntityManager<ResellerAdapter>>,
    /// Entity manager for the invitations surface.
    pub invitations: Arc<InvitationManager>,
    /// Revalidation forwarder (hop 1 of the protocol).
    pub revalidator: Arc<RevalidationClient>,
}

impl AppState {
    /// Wire the full state from configuration: one data-service client
    /// shared by every adapter, one manager per admin resource.
    pub fn from_config(config: StudioConfig) -> Result<Self, ServiceError> {
        let client = Arc::new(DataClient::new(
            &config.data_service_url,
            config.data_service_key.clone(),
        )?);

        let users = Arc::new(resources::users::manager(Arc::clone(&client)));
        let resellers = Arc::new(resources::resellers::manager(Arc::clone(&client)));

        let invitations = Arc::new(EntityManager::new(InvitationAdapter::new(Arc::clone(
            &client,
        ))));

        let revalidator = Arc::new(RevalidationClient::new(
            config.public_app_url.clone(),
            config.revalidate_secret.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            users,
            resellers,
            invitations,
            revalidator,
        })
    }
}
