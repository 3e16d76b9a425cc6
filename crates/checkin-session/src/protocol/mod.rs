//! Wire payload types for the session API, grouped by resource:
//!
//! - [`session`]: check-in session lifecycle payloads.
//! - [`order`]: service order payloads.
//! - [`billing`]: derived billing aggregates.

pub mod billing;
pub mod order;
pub mod session;

pub use billing::{BillingLine, SessionBilling};
pub use order::{
    CancelOrderRequest, CreateOrderRequest, OrderStatus, ServiceOrder, UpdateOrderRequest,
};
pub use session::{
    CheckinSession, CheckoutRequest, CreateSessionRequest, SessionSearchCriteria, SessionStatus,
    SessionSummary, SessionWithDetails, UpdateSessionRequest,
};
