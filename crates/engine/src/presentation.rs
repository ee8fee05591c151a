//! Pure view-model derivation.
//!
//! Everything here is recomputed deterministically from its inputs and
//! cheap enough to recompute on every state change; callers that want to
//! skip recomputation use [`crate::memo::Memo`]. Nothing in this module
//! reads hidden state -- even "now" is an explicit input.

use chrono::Duration;
use serde::Serialize;
use velora_core::types::Timestamp;

/// One statistics card for an admin page header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: i64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl StatCard {
    pub fn new(title: impl Into<String>, value: i64, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value,
            description: description.into(),
            trend: None,
        }
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }
}

/// Movement indicator on a stat card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    /// Signed change against the previous window.
    pub value: i64,
    pub label: String,
    pub positive: bool,
}

/// One column descriptor for an admin table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
}

/// One row action descriptor. The UI binds callbacks by `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub destructive: bool,
}

/// Column and action descriptors for an admin table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSpec {
    pub columns: Vec<ColumnSpec>,
    pub actions: Vec<ActionSpec>,
}

/// Compare the trailing `window` against the window before it.
///
/// `value` is the signed difference between the number of `timestamps` in
/// `(now - window, now]` and the number in `(now - 2*window, now - window]`.
/// A flat period counts as positive.
pub fn trailing_window_trend(
    timestamps: &[Timestamp],
    now: Timestamp,
    window: Duration,
    label: impl Into<String>,
) -> Trend {
    let current_start = now - window;
    let previous_start = now - window - window;

    let current = timestamps
        .iter()
        .filter(|t| **t > current_start && **t <= now)
        .count() as i64;
    let previous = timestamps
        .iter()
        .filter(|t| **t > previous_start && **t <= current_start)
        .count() as i64;

    let value = current - previous;
    Trend {
        value,
        label: label.into(),
        positive: value >= 0,
    }
}
