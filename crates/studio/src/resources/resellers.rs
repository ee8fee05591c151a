//! Reseller resource wiring: manager construction and view derivations.

use std::sync::Arc;

use velora_client::{DataClient, ResellerAdapter};
use velora_core::models::Reseller;
use velora_engine::presentation::{ActionSpec, ColumnSpec, StatCard, TableSpec};
use velora_engine::{EntityManager, Filters, ResourceHooks};

use crate::error::AppError;

pub fn manager(client: Arc<DataClient>) -> EntityManager<ResellerAdapter> {
    let hooks = ResourceHooks::new()
        .with_delete_prompt(|reseller: &Reseller| {
            format!(
                "Delete reseller {}? Outstanding commissions must be settled first.",
                reseller.company_name
            )
        })
        .with_export(|items: &[Reseller], _filters: &Filters| {
            tracing::info!(rows = items.len(), "resellers export prepared");
        });

    EntityManager::with_hooks(ResellerAdapter::new(client), hooks)
}

/// Derive the stat cards for the resellers admin page.
pub fn statistics(items: &[Reseller], total: u64) -> Vec<StatCard> {
    let active = items.iter().filter(|r| r.is_active).count() as i64;
    let sold: i64 = items.iter().map(|r| r.invitation_count).sum();

    vec![
        StatCard::new("Total Resellers", total as i64, "All partner accounts"),
        StatCard::new("Active Resellers", active, "Partners currently selling"),
        StatCard::new("Invitations Sold", sold, "Across the listed partners"),
    ]
}

pub fn table_spec() -> TableSpec {
    TableSpec {
        columns: vec![
            ColumnSpec {
                key: "company_name",
                label: "Company",
                sortable: true,
            },
            ColumnSpec {
                key: "contact_email",
                label: "Contact",
                sortable: false,
            },
            ColumnSpec {
                key: "commission_pct",
                label: "Commission %",
                sortable: true,
            },
            ColumnSpec {
                key: "invitation_count",
                label: "Sold",
                sortable: true,
            },
            ColumnSpec {
                key: "is_active",
                label: "Active",
                sortable: false,
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

pub fn to_csv(items: &[Reseller]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for reseller in items {
        writer
            .serialize(reseller)
            .map_err(|e| AppError::Internal(format!("CSV serialization failed: {e}")))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("CSV was not UTF-8: {e}")))
}
