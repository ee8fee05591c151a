//! User resource wiring: manager construction and view derivations.

use std::sync::Arc;

use chrono::Duration;
use velora_client::{DataClient, UserAdapter};
use velora_core::models::User;
use velora_core::types::Timestamp;
use velora_engine::presentation::{
    trailing_window_trend, ActionSpec, ColumnSpec, StatCard, TableSpec,
};
use velora_engine::{EntityManager, Filters, ResourceHooks};

use crate::error::AppError;

/// Build the user entity manager.
///
/// The HTTP request is the confirmation for deletes, so the gate always
/// confirms; UI surfaces construct their own gate.
pub fn manager(client: Arc<DataClient>) -> EntityManager<UserAdapter> {
    let hooks = ResourceHooks::new()
        .with_delete_prompt(|user: &User| {
            format!(
                "Delete user {}? Their invitations will be unpublished.",
                user.email
            )
        })
        .with_export(|items: &[User], _filters: &Filters| {
            tracing::info!(rows = items.len(), "users export prepared");
        });

    EntityManager::with_hooks(UserAdapter::new(client), hooks)
}

/// Derive the stat cards for the users admin page.
pub fn statistics(items: &[User], total: u64, now: Timestamp) -> Vec<StatCard> {
    // "Active" means the account has authored at least one invitation.
    let active = items.iter().filter(|u| u.invitation_count >= 1).count() as i64;

    let signups: Vec<Timestamp> = items.iter().map(|u| u.created_at).collect();
    let window = Duration::days(30);
    let new_this_month = signups
        .iter()
        .filter(|t| **t > now - window && **t <= now)
        .count() as i64;

    vec![
        StatCard::new("Total Users", total as i64, "All registered accounts"),
        StatCard::new("Active Users", active, "Users with at least one invitation"),
        StatCard::new("New This Month", new_this_month, "Sign-ups in the last 30 days")
            .with_trend(trailing_window_trend(&signups, now, window, "vs previous 30 days")),
    ]
}

/// Column and action descriptors for the users admin table.
pub fn table_spec() -> TableSpec {
    TableSpec {
        columns: vec![
            ColumnSpec {
                key: "email",
                label: "Email",
                sortable: true,
            },
            ColumnSpec {
                key: "full_name",
                label: "Name",
                sortable: true,
            },
            ColumnSpec {
                key: "role",
                label: "Role",
                sortable: false,
            },
            ColumnSpec {
                key: "invitation_count",
                label: "Invitations",
                sortable: true,
            },
            ColumnSpec {
                key: "created_at",
                label: "Joined",
                sortable: true,
            },
        ],
        actions: vec![
            ActionSpec {
                id: "edit",
                label: "Edit",
                destructive: false,
            },
            ActionSpec {
                id: "delete",
                label: "Delete",
                destructive: true,
            },
        ],
    }
}

/// Serialize users as CSV for the export endpoint.
pub fn to_csv(items: &[User]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for user in items {
        writer
            .serialize(user)
            .map_err(|e| AppError::Internal(format!("CSV serialization failed: {e}")))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("CSV was not UTF-8: {e}")))
}
