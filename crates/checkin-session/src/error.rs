//! # Error Types
//!
//! Every failure surfaced by [`SessionClient`](crate::SessionClient) is
//! normalized into a [`SessionError`] — callers never see a raw transport
//! error. The mapping from an HTTP response to an error code is an ordered
//! chain of checks (see [`SessionError::from_response`]):
//!
//! 1. A structured backend error body with a `code` field is passed through
//!    verbatim with its message and details.
//! 2. HTTP 404 becomes [`SessionErrorCode::SessionNotFound`] with a fixed
//!    localized message.
//! 3. HTTP 409 becomes [`SessionErrorCode::RoomAlreadyOccupied`] with a
//!    fixed localized message.
//! 4. Anything else becomes [`SessionErrorCode::Unknown`] with the
//!    operation-specific default message.
//!
//! Requests that never produce an HTTP response at all (connect failure,
//! timeout) take the same catch-all code, with the underlying cause kept
//! in the error's `details`.
//!
//! The session-number codec fails synchronously with the separate
//! [`SessionNumberError`] — no network call is involved, so it does not go
//! through the `SessionError` shape.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Convenient Result alias for session API operations.
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Localized message for a session that does not exist (HTTP 404).
pub const SESSION_NOT_FOUND_MESSAGE: &str = "セッションが見つかりません";

/// Localized message for a room that already has an active session (HTTP 409).
pub const ROOM_ALREADY_OCCUPIED_MESSAGE: &str = "この部屋は既にチェックイン中です";

/// Closed set of error codes a [`SessionError`] can carry.
///
/// Backend-declared domain codes that the client has no special handling
/// for are preserved verbatim in [`SessionErrorCode::Backend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionErrorCode {
    /// The requested session does not exist.
    SessionNotFound,

    /// The room already has an active session (check-in conflict).
    RoomAlreadyOccupied,

    /// A domain code declared by the backend, passed through verbatim.
    Backend(String),

    /// Catch-all for any other failure, including requests that never
    /// produced an HTTP response (connect failure, timeout).
    Unknown,
}

impl SessionErrorCode {
    /// The wire literal for this code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::RoomAlreadyOccupied => "ROOM_ALREADY_OCCUPIED",
            Self::Backend(code) => code,
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Map a wire code literal to the most specific variant.
    ///
    /// Codes the client knows about fold into their dedicated variants so
    /// that callers can match on them; everything else is kept verbatim.
    fn from_wire(code: &str) -> Self {
        match code {
            "SESSION_NOT_FOUND" => Self::SessionNotFound,
            "ROOM_ALREADY_OCCUPIED" => Self::RoomAlreadyOccupied,
            other => Self::Backend(other.to_string()),
        }
    }
}

impl std::fmt::Display for SessionErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized session API failure.
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct SessionError {
    /// Error code from the closed taxonomy (or a verbatim backend code).
    pub code: SessionErrorCode,

    /// Human-readable, localized message.
    pub message: String,

    /// Opaque diagnostic payload. Shape depends on the failure origin and
    /// is not guaranteed stable.
    pub details: Option<serde_json::Value>,
}

/// Structured error body the backend attaches to failed responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: Option<String>,
    details: Option<serde_json::Value>,
}

impl SessionError {
    /// Map a non-success HTTP response to a [`SessionError`].
    ///
    /// `default_message` is the operation-specific fallback describing what
    /// action failed; it is used only when the response carries no
    /// structured error body and the status has no dedicated mapping.
    pub(crate) fn from_response(status: StatusCode, body: &str, default_message: &str) -> Self {
        if let Some(err) = Self::from_structured_body(body) {
            return err;
        }

        match status {
            StatusCode::NOT_FOUND => Self {
                code: SessionErrorCode::SessionNotFound,
                message: SESSION_NOT_FOUND_MESSAGE.to_string(),
                details: None,
            },
            StatusCode::CONFLICT => Self {
                code: SessionErrorCode::RoomAlreadyOccupied,
                message: ROOM_ALREADY_OCCUPIED_MESSAGE.to_string(),
                details: None,
            },
            _ => Self {
                code: SessionErrorCode::Unknown,
                message: default_message.to_string(),
                details: Some(serde_json::json!({
                    "status": status.as_u16(),
                    "body": body,
                })),
            },
        }
    }

    /// Try to decode a structured backend error body.
    ///
    /// The backend's domain code takes priority over any status-based
    /// mapping and is passed through verbatim.
    fn from_structured_body(body: &str) -> Option<Self> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        if parsed.code.is_empty() {
            return None;
        }

        let code = SessionErrorCode::from_wire(&parsed.code);
        let message = parsed.message.unwrap_or_else(|| match &code {
            SessionErrorCode::SessionNotFound => SESSION_NOT_FOUND_MESSAGE.to_string(),
            SessionErrorCode::RoomAlreadyOccupied => ROOM_ALREADY_OCCUPIED_MESSAGE.to_string(),
            other => other.as_str().to_string(),
        });

        Some(Self {
            code,
            message,
            details: parsed.details,
        })
    }

    /// A request that never produced an HTTP response. Uses the same
    /// catch-all code as any other unmapped failure; the underlying cause
    /// is kept in `details`.
    pub(crate) fn transport(default_message: &str, err: &reqwest::Error) -> Self {
        Self {
            code: SessionErrorCode::Unknown,
            message: default_message.to_string(),
            details: Some(serde_json::json!({ "reason": err.to_string() })),
        }
    }

    /// A successful response whose body could not be decoded.
    pub(crate) fn decode(default_message: &str, err: &serde_json::Error) -> Self {
        Self {
            code: SessionErrorCode::Unknown,
            message: default_message.to_string(),
            details: Some(serde_json::json!({ "reason": err.to_string() })),
        }
    }
}

/// Local validation failure from the session-number codec.
///
/// Thrown synchronously by [`parse_session_number`](crate::parse_session_number);
/// deliberately not a [`SessionError`] since no API call is involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionNumberError {
    /// The session number does not have exactly three hyphen-separated segments.
    #[error("Invalid session number format")]
    InvalidFormat,

    /// The date segment is not exactly eight ASCII digits.
    #[error("Invalid session number date segment: {0}")]
    InvalidDateSegment(String),

    /// The sequence segment is not a decimal integer.
    #[error("Invalid session number sequence: {0}")]
    InvalidSequence(String),
}
