#![allow(dead_code)]

use checkin_session::SessionClient;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Build a client pointing at the given wiremock server.
pub fn client_for(server: &MockServer) -> SessionClient {
    SessionClient::from_base_url(server.uri()).expect("client construction")
}

/// A plausible active session body.
pub fn session_json(id: &str, room_number: &str, status: &str) -> Value {
    json!({
        "id": id,
        "sessionNumber": format!("{room_number}-20250115-001"),
        "status": status,
        "roomId": format!("room-{room_number}"),
        "roomNumber": room_number,
        "guestName": "山田太郎",
        "checkInAt": "2025-01-15T15:00:00Z",
    })
}

/// A pending service order bound to `session_id`.
pub fn order_json(id: &str, session_id: &str) -> Value {
    json!({
        "id": id,
        "sessionId": session_id,
        "itemName": "ルームサービス朝食",
        "quantity": 2,
        "unitPrice": 1800,
        "status": "PENDING",
        "orderedAt": "2025-01-15T18:00:00Z",
    })
}

/// A computed billing aggregate for `session_id`.
pub fn billing_json(session_id: &str, total: i64) -> Value {
    json!({
        "sessionId": session_id,
        "roomCharge": total - 3600,
        "serviceCharge": 3600,
        "total": total,
        "lines": [
            {"description": "宿泊料金", "quantity": 1, "amount": total - 3600},
            {"description": "ルームサービス朝食", "quantity": 2, "amount": 3600}
        ],
        "computedAt": "2025-01-17T10:00:00Z",
    })
}
