//! Service order payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a service order.
///
/// Orders are never deleted through this API — cancellation is a status
/// change that keeps the row in the session's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Delivered,
    Cancelled,

    /// A status this client version does not know about.
    #[serde(other)]
    Unknown,
}

/// A single ordered service or item, tied to exactly one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    pub id: String,

    pub session_id: String,

    pub item_name: String,

    pub quantity: u32,

    /// Price per unit in minor currency units (yen).
    pub unit_price: i64,

    pub status: OrderStatus,

    pub ordered_at: DateTime<Utc>,

    /// Free-text reason supplied at cancellation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
}

/// Payload for `POST /sessions/{id}/orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub item_name: String,

    pub quantity: u32,

    /// Defaults to the item's catalog price when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<i64>,
}

impl CreateOrderRequest {
    pub fn new(item_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
            unit_price: None,
        }
    }
}

/// Partial-update payload for `PATCH /orders/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// Body for `POST /orders/{id}/cancel`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CancelOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
