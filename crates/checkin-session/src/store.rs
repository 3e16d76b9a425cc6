//! # Session State Store
//!
//! [`SessionStore`] holds "the session currently being worked on" plus its
//! orders and billing as one consistent unit, refreshed explicitly rather
//! than automatically. State slots are private; readers only get
//! references, and mutation happens solely through the load operations.
//!
//! The `&mut self` receivers make overlapping loads on a single store
//! impossible to express, which is the contract: one in-flight load per
//! store instance. Independent stores share nothing.

use crate::client::SessionClient;
use crate::error::{SessionError, SessionResult};
use crate::protocol::billing::SessionBilling;
use crate::protocol::order::ServiceOrder;
use crate::protocol::session::CheckinSession;

/// In-memory cache of the current session, its orders, and its billing.
pub struct SessionStore {
    client: SessionClient,
    current_session: Option<CheckinSession>,
    session_orders: Vec<ServiceOrder>,
    session_billing: Option<SessionBilling>,
    loading: bool,
    last_error: Option<SessionError>,
}

impl SessionStore {
    /// Create an empty store backed by the given client.
    pub fn new(client: SessionClient) -> Self {
        Self {
            client,
            current_session: None,
            session_orders: Vec::new(),
            session_billing: None,
            loading: false,
            last_error: None,
        }
    }

    // ─── Read-only views ────────────────────────────────────────────────

    /// The session currently loaded, if any.
    pub fn current_session(&self) -> Option<&CheckinSession> {
        self.current_session.as_ref()
    }

    /// Orders of the current session, oldest first. Empty when nothing is
    /// loaded.
    pub fn session_orders(&self) -> &[ServiceOrder] {
        &self.session_orders
    }

    /// Billing of the current session. Absent is distinct from "zero
    /// charges": billing may legitimately not exist yet for a brand-new
    /// session.
    pub fn session_billing(&self) -> Option<&SessionBilling> {
        self.session_billing.as_ref()
    }

    /// Whether a load is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The error from the most recent failed load, cleared when the next
    /// load starts.
    pub fn last_error(&self) -> Option<&SessionError> {
        self.last_error.as_ref()
    }

    /// The client this store loads through, for one-off calls that should
    /// not go through the cache.
    pub fn client(&self) -> &SessionClient {
        &self.client
    }

    // ─── Load operations ────────────────────────────────────────────────

    /// Load a session, its orders, and its billing as one unit.
    ///
    /// The three fetches run concurrently and the cache only transitions
    /// once all of them settle, so readers never observe a partial mix of
    /// old and new state. A billing failure degrades to "no billing yet"
    /// rather than failing the load; a session or orders failure aborts
    /// the whole operation, records the error, and leaves the previous
    /// state untouched.
    pub async fn load_session(&mut self, session_id: &str) -> SessionResult<()> {
        self.loading = true;
        self.last_error = None;

        let (session, orders, billing) = tokio::join!(
            self.client.get_session(session_id),
            self.client.get_session_orders(session_id),
            self.client.get_session_billing(session_id),
        );

        let result = match (session, orders) {
            (Ok(session), Ok(orders)) => {
                let billing = match billing {
                    Ok(billing) => Some(billing),
                    Err(err) => {
                        tracing::debug!(
                            session_id,
                            error = %err,
                            "Billing not available, treating as absent"
                        );
                        None
                    }
                };

                tracing::info!(session_id, order_count = orders.len(), "Session loaded");
                self.current_session = Some(session);
                self.session_orders = orders;
                self.session_billing = billing;
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(session_id, error = %err, "Session load failed");
                self.last_error = Some(err.clone());
                Err(err)
            }
        };

        self.loading = false;
        result
    }

    /// Load whatever session currently occupies a room.
    ///
    /// A vacant room is a valid, non-error outcome: all three state slots
    /// are cleared and the call succeeds. An occupied room delegates to
    /// [`load_session`](Self::load_session).
    pub async fn load_session_by_room_number(&mut self, room_number: &str) -> SessionResult<()> {
        self.loading = true;
        self.last_error = None;

        let active = match self.client.get_active_session_by_room_number(room_number).await {
            Ok(active) => active,
            Err(err) => {
                tracing::warn!(room_number, error = %err, "Active session lookup failed");
                self.last_error = Some(err.clone());
                self.loading = false;
                return Err(err);
            }
        };

        match active {
            Some(session) => self.load_session(&session.id).await,
            None => {
                tracing::info!(room_number, "Room is vacant, clearing session state");
                self.current_session = None;
                self.session_orders.clear();
                self.session_billing = None;
                self.loading = false;
                Ok(())
            }
        }
    }

    /// Reload the current session in full. No-op when nothing is loaded.
    pub async fn refresh(&mut self) -> SessionResult<()> {
        let Some(session_id) = self.current_session.as_ref().map(|s| s.id.clone()) else {
            return Ok(());
        };
        self.load_session(&session_id).await
    }
}
