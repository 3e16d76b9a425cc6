//! Check-in session lifecycle payloads.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::protocol::billing::SessionBilling;
use crate::protocol::order::ServiceOrder;

/// Lifecycle status of a check-in session.
///
/// The full status set is owned by the backend; statuses added server-side
/// deserialize as [`SessionStatus::Unknown`] rather than failing. The client
/// only ever distinguishes active-like statuses from the rest
/// (see [`SessionStatus::is_active`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    /// Guest is currently occupying the room.
    Active,

    /// Stay extended past the original check-out; still occupying.
    Extended,

    /// Checked out; billing finalized.
    Completed,

    /// Check-in cancelled before completion.
    Cancelled,

    /// A status this client version does not know about.
    #[serde(other)]
    Unknown,
}

impl SessionStatus {
    /// True iff the guest is currently occupying the room.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active | Self::Extended)
    }

    /// The wire literal for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Extended => "EXTENDED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// One guest's occupancy of a room, the unit that orders and billing
/// attach to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinSession {
    /// Opaque backend identifier.
    pub id: String,

    /// Human-readable composite identifier (`{room}-{YYYYMMDD}-{seq}`),
    /// distinct from [`id`](Self::id).
    pub session_number: String,

    pub status: SessionStatus,

    pub room_id: String,

    pub room_number: String,

    pub guest_name: String,

    pub check_in_at: DateTime<Utc>,

    /// Absent while occupancy is ongoing. Once set, the backend rejects
    /// further order creation for this session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CheckinSession {
    /// True iff this session's status is active-like.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Stay length in days, rounded up.
    ///
    /// Open sessions are measured against the current time, so the value
    /// changes on every call until check-out — it is a live estimate, not
    /// a stored field.
    pub fn duration_days(&self) -> i64 {
        const DAY_MS: i64 = 24 * 60 * 60 * 1000;
        let end = self.check_out_at.unwrap_or_else(Utc::now);
        let ms = (end - self.check_in_at).num_milliseconds();
        ms / DAY_MS + i64::from(ms % DAY_MS > 0)
    }
}

/// A session with its relations included (`GET /sessions/{id}/details`).
#[derive(Debug, Clone, Deserialize)]
pub struct SessionWithDetails {
    #[serde(flatten)]
    pub session: CheckinSession,

    #[serde(default)]
    pub orders: Vec<ServiceOrder>,

    /// Absent when billing has not been computed yet.
    #[serde(default)]
    pub billing: Option<SessionBilling>,
}

/// Reduced session projection for list views.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    pub session_number: String,
    pub status: SessionStatus,
    pub room_number: String,
    pub guest_name: String,
    pub check_in_at: DateTime<Utc>,
    #[serde(default)]
    pub check_out_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /sessions` (the check-in event).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub room_id: String,

    pub guest_name: String,

    /// Defaults to the server clock when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateSessionRequest {
    pub fn new(room_id: impl Into<String>, guest_name: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            guest_name: guest_name.into(),
            check_in_at: None,
            notes: None,
        }
    }
}

/// Partial-update payload for `PATCH /sessions/{id}`.
///
/// Unset fields are omitted from the request body and left untouched by
/// the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for `POST /sessions/{id}/checkout` (the terminal transition).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Defaults to the server clock when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Search criteria for `GET /sessions/search` and `GET /sessions/summaries`.
///
/// Only set fields are sent; unset fields are omitted from the query string
/// entirely rather than sent empty.
#[derive(Debug, Clone, Default)]
pub struct SessionSearchCriteria {
    pub status: Option<SessionStatus>,
    pub room_number: Option<String>,
    pub guest_name: Option<String>,
    pub check_in_after: Option<DateTime<Utc>>,
    pub check_in_before: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
}

impl SessionSearchCriteria {
    /// Encode the defined criteria as query pairs.
    ///
    /// Timestamps serialize as ISO 8601; everything else by display
    /// coercion.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(room_number) = &self.room_number {
            pairs.push(("roomNumber", room_number.clone()));
        }
        if let Some(guest_name) = &self.guest_name {
            pairs.push(("guestName", guest_name.clone()));
        }
        if let Some(after) = self.check_in_after {
            pairs.push(("checkInAfter", iso8601(after)));
        }
        if let Some(before) = self.check_in_before {
            pairs.push(("checkInBefore", iso8601(before)));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

fn iso8601(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
