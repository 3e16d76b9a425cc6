//! Check a guest in, order room service, and check out.
//!
//! Points at `CHECKIN_API_BASE_URL` (or `http://localhost:3000/api`).
//!
//! ```bash
//! CHECKIN_API_BASE_URL=http://localhost:3000/api cargo run --example checkin_flow
//! ```

use checkin_session::{
    CheckoutRequest, CreateOrderRequest, CreateSessionRequest, SessionApiConfig, SessionClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = SessionApiConfig::discover(None)?;
    println!("Session API at {}", config.base_url);

    let client = SessionClient::new(&config)?;

    // Check in
    let session = client
        .create_session(&CreateSessionRequest::new("room-101", "山田太郎"))
        .await?;
    println!("Checked in: {} ({})", session.session_number, session.id);

    // Order room service
    let order = client
        .create_order(&session.id, &CreateOrderRequest::new("ルームサービス朝食", 2))
        .await?;
    println!("Ordered: {} x{}", order.item_name, order.quantity);

    // Check out and print the final bill
    let billing = client
        .checkout_session(&session.id, &CheckoutRequest::default())
        .await?;
    println!("Final bill: ¥{}", billing.total);
    for line in &billing.lines {
        println!("  {} x{}: ¥{}", line.description, line.quantity, line.amount);
    }

    Ok(())
}
