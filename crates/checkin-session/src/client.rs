//! # Session API HTTP Client
//!
//! [`SessionClient`] translates domain operations into calls against the
//! resource-oriented session API and normalizes every failure into a
//! [`SessionError`]. It holds no state beyond the outbound HTTP client —
//! the operations are a stateless function set parameterized by a base URL
//! and a per-request timeout.
//!
//! Each operation supplies its own default failure message describing what
//! action failed; the generic fallback code alone would not be actionable
//! for a caller.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::SessionApiConfig;
use crate::error::{SessionError, SessionResult};
use crate::protocol::billing::SessionBilling;
use crate::protocol::order::{
    CancelOrderRequest, CreateOrderRequest, ServiceOrder, UpdateOrderRequest,
};
use crate::protocol::session::{
    CheckinSession, CheckoutRequest, CreateSessionRequest, SessionSearchCriteria, SessionSummary,
    SessionWithDetails, UpdateSessionRequest,
};

/// HTTP client for the check-in session API.
pub struct SessionClient {
    http: reqwest::Client,
    base_url: String,
}

impl SessionClient {
    /// Build a client from a [`SessionApiConfig`].
    pub fn new(config: &SessionApiConfig) -> SessionResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SessionError::transport("HTTPクライアントの初期化に失敗しました", &e))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client for a base URL with default timeouts
    /// (convenience for simple use cases).
    pub fn from_base_url(base_url: impl Into<String>) -> SessionResult<Self> {
        Self::new(&SessionApiConfig::new(base_url))
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ─── Core request plumbing ──────────────────────────────────────────

    /// Issue a request and decode the JSON response body.
    ///
    /// Applies the uniform error policy: transport failures, non-success
    /// statuses, and undecodable bodies all surface as [`SessionError`]
    /// carrying `default_message`.
    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
        default_message: &'static str,
    ) -> SessionResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, "Sending session API request");

        let response = request
            .send()
            .await
            .map_err(|e| SessionError::transport(default_message, &e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SessionError::transport(default_message, &e))?;

        if !status.is_success() {
            tracing::warn!(
                %method,
                %url,
                status = status.as_u16(),
                "Session API request failed"
            );
            return Err(SessionError::from_response(status, &text, default_message));
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "Failed to decode session API response");
            SessionError::decode(default_message, &e)
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        default_message: &'static str,
    ) -> SessionResult<T> {
        self.send(
            Method::GET,
            path,
            &[],
            None::<&serde_json::Value>,
            default_message,
        )
        .await
    }

    // ─── Session lifecycle ──────────────────────────────────────────────

    /// Create a session (the check-in event).
    pub async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> SessionResult<CheckinSession> {
        let session: CheckinSession = self
            .send(
                Method::POST,
                "/sessions",
                &[],
                Some(request),
                "セッションの作成に失敗しました",
            )
            .await?;

        tracing::info!(
            session_id = %session.id,
            room_number = %session.room_number,
            "Session created"
        );
        Ok(session)
    }

    /// Fetch a session by its opaque identifier.
    pub async fn get_session(&self, session_id: &str) -> SessionResult<CheckinSession> {
        self.get(
            &format!("/sessions/{session_id}"),
            "セッションの取得に失敗しました",
        )
        .await
    }

    /// Fetch a session with its orders and billing included.
    pub async fn get_session_with_details(
        &self,
        session_id: &str,
    ) -> SessionResult<SessionWithDetails> {
        self.get(
            &format!("/sessions/{session_id}/details"),
            "セッション詳細の取得に失敗しました",
        )
        .await
    }

    /// Fetch a session by its session-number string.
    ///
    /// The number is passed through as-is; it is not parsed locally.
    pub async fn get_session_by_number(
        &self,
        session_number: &str,
    ) -> SessionResult<CheckinSession> {
        self.get(
            &format!("/sessions/by-number/{session_number}"),
            "セッション番号での取得に失敗しました",
        )
        .await
    }

    /// The active session occupying a room, by room id.
    ///
    /// `None` is a valid, non-error result meaning the room is vacant.
    pub async fn get_active_session_by_room(
        &self,
        room_id: &str,
    ) -> SessionResult<Option<CheckinSession>> {
        self.get(
            &format!("/sessions/active-by-room/{room_id}"),
            "部屋のアクティブセッション取得に失敗しました",
        )
        .await
    }

    /// The active session occupying a room, by room number.
    ///
    /// `None` is a valid, non-error result meaning the room is vacant.
    pub async fn get_active_session_by_room_number(
        &self,
        room_number: &str,
    ) -> SessionResult<Option<CheckinSession>> {
        self.get(
            &format!("/sessions/active-by-room-number/{room_number}"),
            "部屋番号でのアクティブセッション取得に失敗しました",
        )
        .await
    }

    /// Partially update a session. Unset fields are left untouched.
    pub async fn update_session(
        &self,
        session_id: &str,
        request: &UpdateSessionRequest,
    ) -> SessionResult<CheckinSession> {
        self.send(
            Method::PATCH,
            &format!("/sessions/{session_id}"),
            &[],
            Some(request),
            "セッションの更新に失敗しました",
        )
        .await
    }

    /// Check out a session (terminal transition) and return the final bill.
    pub async fn checkout_session(
        &self,
        session_id: &str,
        request: &CheckoutRequest,
    ) -> SessionResult<SessionBilling> {
        let billing: SessionBilling = self
            .send(
                Method::POST,
                &format!("/sessions/{session_id}/checkout"),
                &[],
                Some(request),
                "チェックアウト処理に失敗しました",
            )
            .await?;

        tracing::info!(session_id, total = billing.total, "Session checked out");
        Ok(billing)
    }

    /// Search sessions by criteria. Unset criteria are omitted from the
    /// query string entirely.
    pub async fn search_sessions(
        &self,
        criteria: &SessionSearchCriteria,
    ) -> SessionResult<Vec<CheckinSession>> {
        self.send(
            Method::GET,
            "/sessions/search",
            &criteria.to_query_pairs(),
            None::<&serde_json::Value>,
            "セッションの検索に失敗しました",
        )
        .await
    }

    /// List sessions as reduced summaries, with the same criteria
    /// encoding as [`search_sessions`](Self::search_sessions).
    pub async fn get_session_summaries(
        &self,
        criteria: &SessionSearchCriteria,
    ) -> SessionResult<Vec<SessionSummary>> {
        self.send(
            Method::GET,
            "/sessions/summaries",
            &criteria.to_query_pairs(),
            None::<&serde_json::Value>,
            "セッション一覧の取得に失敗しました",
        )
        .await
    }

    // ─── Orders ─────────────────────────────────────────────────────────

    /// Create an order bound to a session.
    pub async fn create_order(
        &self,
        session_id: &str,
        request: &CreateOrderRequest,
    ) -> SessionResult<ServiceOrder> {
        let order: ServiceOrder = self
            .send(
                Method::POST,
                &format!("/sessions/{session_id}/orders"),
                &[],
                Some(request),
                "注文の作成に失敗しました",
            )
            .await?;

        tracing::info!(order_id = %order.id, session_id, "Order created");
        Ok(order)
    }

    /// Full order history for a session, not just pending orders.
    pub async fn get_session_orders(&self, session_id: &str) -> SessionResult<Vec<ServiceOrder>> {
        self.get(
            &format!("/sessions/{session_id}/orders"),
            "注文履歴の取得に失敗しました",
        )
        .await
    }

    /// Partially update an order.
    pub async fn update_order(
        &self,
        order_id: &str,
        request: &UpdateOrderRequest,
    ) -> SessionResult<ServiceOrder> {
        self.send(
            Method::PATCH,
            &format!("/orders/{order_id}"),
            &[],
            Some(request),
            "注文の更新に失敗しました",
        )
        .await
    }

    /// Cancel an order — a status change, not a deletion.
    pub async fn cancel_order(
        &self,
        order_id: &str,
        reason: Option<&str>,
    ) -> SessionResult<ServiceOrder> {
        let body = CancelOrderRequest {
            reason: reason.map(str::to_string),
        };
        let order: ServiceOrder = self
            .send(
                Method::POST,
                &format!("/orders/{order_id}/cancel"),
                &[],
                Some(&body),
                "注文のキャンセルに失敗しました",
            )
            .await?;

        tracing::info!(order_id, "Order cancelled");
        Ok(order)
    }

    // ─── Billing ────────────────────────────────────────────────────────

    /// The last computed billing for a session. May be stale; use
    /// [`refresh_session_billing`](Self::refresh_session_billing) to force
    /// recomputation.
    pub async fn get_session_billing(&self, session_id: &str) -> SessionResult<SessionBilling> {
        self.get(
            &format!("/sessions/{session_id}/billing"),
            "請求情報の取得に失敗しました",
        )
        .await
    }

    /// Force server-side recomputation of a session's billing.
    pub async fn refresh_session_billing(&self, session_id: &str) -> SessionResult<SessionBilling> {
        self.send(
            Method::POST,
            &format!("/sessions/{session_id}/billing/refresh"),
            &[],
            None::<&serde_json::Value>,
            "請求情報の再計算に失敗しました",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = SessionClient::from_base_url("https://hotel.example/api/").unwrap();
        assert_eq!(client.base_url(), "https://hotel.example/api");
    }
}
