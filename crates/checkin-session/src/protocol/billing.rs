//! Derived billing aggregates.
//!
//! Billing is never authored by this client. It is either fetched (the
//! last value the backend computed, possibly stale) or recomputed by an
//! explicit refresh request.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Monetary aggregate over a session's orders and stay-level charges.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionBilling {
    pub session_id: String,

    /// Stay-level room charge in minor currency units (yen).
    pub room_charge: i64,

    /// Sum of non-cancelled service orders.
    pub service_charge: i64,

    pub total: i64,

    #[serde(default)]
    pub lines: Vec<BillingLine>,

    /// When the backend last computed this aggregate.
    pub computed_at: DateTime<Utc>,
}

/// One line of the itemized bill.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingLine {
    pub description: String,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    pub amount: i64,
}

fn default_quantity() -> u32 {
    1
}
