//! # checkin-session
//!
//! A Rust client for a hotel check-in session and billing REST API.
//!
//! This crate covers the check-in session lifecycle: creating a room-stay
//! session, attaching service orders to it, computing and refreshing its
//! billing, and minting/parsing the human-readable session number.
//!
//! ## Quick Start
//!
//! ```ignore
//! use checkin_session::{
//!     CreateSessionRequest, SessionApiConfig, SessionClient, SessionStore,
//! };
//!
//! #[tokio::main]
//! async fn main() -> checkin_session::SessionResult<()> {
//!     // Load config from environment or checkin.toml
//!     let config = SessionApiConfig::discover(None).expect("config");
//!     let client = SessionClient::new(&config)?;
//!
//!     // Check a guest in
//!     let session = client
//!         .create_session(&CreateSessionRequest::new("room-101", "山田太郎"))
//!         .await?;
//!     println!("Checked in: {}", session.session_number);
//!
//!     // Work against the cached view of one session
//!     let mut store = SessionStore::new(client);
//!     store.load_session(&session.id).await?;
//!     println!("Orders so far: {}", store.session_orders().len());
//!     Ok(())
//! }
//! ```
//!
//! ## Three cooperating parts
//!
//! | Part | Type | Role |
//! |------|------|------|
//! | Client | [`SessionClient`] | REST operations, error normalization |
//! | Codec | [`generate_session_number`] / [`parse_session_number`] | session-number minting and parsing |
//! | Store | [`SessionStore`] | current session + orders + billing, explicit refresh |
//!
//! ## Configuration
//!
//! See [`SessionApiConfig`] for the full reference. The simplest setup
//! uses environment variables:
//!
//! ```bash
//! export CHECKIN_API_BASE_URL="https://hotel.example/api"
//! ```
//!
//! Or a `checkin.toml` file:
//!
//! ```toml
//! base_url = "https://hotel.example/api"
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod session_number;
pub mod store;

// ─── Public re-exports ──────────────────────────────────────────────────

pub use client::SessionClient;
pub use config::{ConfigError, SessionApiConfig};
pub use error::{SessionError, SessionErrorCode, SessionNumberError, SessionResult};
pub use protocol::{
    BillingLine, CheckinSession, CheckoutRequest, CreateOrderRequest, CreateSessionRequest,
    OrderStatus, ServiceOrder, SessionBilling, SessionSearchCriteria, SessionStatus,
    SessionSummary, SessionWithDetails, UpdateOrderRequest, UpdateSessionRequest,
};
pub use session_number::{ParsedSessionNumber, generate_session_number, parse_session_number};
pub use store::SessionStore;
