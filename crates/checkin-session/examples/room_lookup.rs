//! Look up whatever session currently occupies a room and show its state.
//!
//! ```bash
//! cargo run --example room_lookup -- 101
//! ```

use checkin_session::{SessionApiConfig, SessionClient, SessionSearchCriteria, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let room_number = std::env::args().nth(1).unwrap_or_else(|| "101".to_string());

    let config = SessionApiConfig::discover(None)?;
    let mut store = SessionStore::new(SessionClient::new(&config)?);

    store.load_session_by_room_number(&room_number).await?;

    match store.current_session() {
        Some(session) => {
            println!(
                "Room {}: {} since {} ({} days so far)",
                room_number,
                session.guest_name,
                session.check_in_at,
                session.duration_days()
            );
            println!("Orders: {}", store.session_orders().len());
            match store.session_billing() {
                Some(billing) => println!("Billing so far: ¥{}", billing.total),
                None => println!("Billing not computed yet"),
            }
        }
        None => {
            println!("Room {room_number} is vacant");
            // One-off call past the cache: who stayed here recently?
            let criteria = SessionSearchCriteria {
                room_number: Some(room_number.clone()),
                limit: Some(3),
                ..Default::default()
            };
            for past in store.client().search_sessions(&criteria).await? {
                println!("  previously: {} ({})", past.guest_name, past.session_number);
            }
        }
    }

    Ok(())
}
