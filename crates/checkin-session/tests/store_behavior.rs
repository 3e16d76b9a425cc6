//! Cache semantics tests for `SessionStore` against a wiremock backend.

mod support;

use checkin_session::{SessionErrorCode, SessionStore};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{billing_json, client_for, order_json, session_json};

/// Mount session + orders mocks for `session_id`; billing is mounted
/// separately so tests can vary it.
async fn mount_session_and_orders(server: &MockServer, session_id: &str, room: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/sessions/{session_id}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(session_json(session_id, room, "ACTIVE")),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/sessions/{session_id}/orders")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([order_json("o1", session_id)])),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn load_session_populates_all_three_slots() {
    let server = MockServer::start().await;
    mount_session_and_orders(&server, "s1", "101").await;
    Mock::given(method("GET"))
        .and(path("/sessions/s1/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(billing_json("s1", 15600)))
        .mount(&server)
        .await;

    let mut store = SessionStore::new(client_for(&server));
    store.load_session("s1").await.unwrap();

    assert_eq!(store.current_session().unwrap().id, "s1");
    assert_eq!(store.session_orders().len(), 1);
    assert_eq!(store.session_billing().unwrap().total, 15600);
    assert!(store.last_error().is_none());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn billing_failure_degrades_to_absent_without_failing_the_load() {
    let server = MockServer::start().await;
    mount_session_and_orders(&server, "s1", "101").await;
    // Brand-new session: billing not computed yet.
    Mock::given(method("GET"))
        .and(path("/sessions/s1/billing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut store = SessionStore::new(client_for(&server));
    store.load_session("s1").await.unwrap();

    assert_eq!(store.current_session().unwrap().id, "s1");
    assert_eq!(store.session_orders().len(), 1);
    assert!(store.session_billing().is_none());
    assert!(store.last_error().is_none());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn session_fetch_failure_preserves_previous_state() {
    let server = MockServer::start().await;
    mount_session_and_orders(&server, "s1", "101").await;
    Mock::given(method("GET"))
        .and(path("/sessions/s1/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(billing_json("s1", 15600)))
        .mount(&server)
        .await;
    // The second session errors on the session fetch itself.
    Mock::given(method("GET"))
        .and(path("/sessions/s2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sessions/s2/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sessions/s2/billing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut store = SessionStore::new(client_for(&server));
    store.load_session("s1").await.unwrap();

    let err = store.load_session("s2").await.unwrap_err();
    assert_eq!(err.code, SessionErrorCode::Unknown);

    // No partial overwrite: the s1 triple is still intact.
    assert_eq!(store.current_session().unwrap().id, "s1");
    assert_eq!(store.session_orders().len(), 1);
    assert_eq!(store.session_billing().unwrap().total, 15600);
    assert_eq!(store.last_error().unwrap().code, SessionErrorCode::Unknown);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn orders_fetch_failure_also_aborts_the_load() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sessions/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json("s1", "101", "ACTIVE")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sessions/s1/orders"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sessions/s1/billing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut store = SessionStore::new(client_for(&server));
    store.load_session("s1").await.unwrap_err();

    assert!(store.current_session().is_none());
    assert!(store.session_orders().is_empty());
    assert!(store.last_error().is_some());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn vacant_room_clears_state_and_succeeds() {
    let server = MockServer::start().await;
    mount_session_and_orders(&server, "s1", "101").await;
    Mock::given(method("GET"))
        .and(path("/sessions/s1/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(billing_json("s1", 15600)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sessions/active-by-room-number/102"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
        .mount(&server)
        .await;

    let mut store = SessionStore::new(client_for(&server));
    store.load_session("s1").await.unwrap();
    assert!(store.current_session().is_some());

    store.load_session_by_room_number("102").await.unwrap();

    assert!(store.current_session().is_none());
    assert!(store.session_orders().is_empty());
    assert!(store.session_billing().is_none());
    assert!(store.last_error().is_none());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn occupied_room_delegates_to_full_load() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sessions/active-by-room-number/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json("s1", "101", "ACTIVE")))
        .mount(&server)
        .await;
    mount_session_and_orders(&server, "s1", "101").await;
    Mock::given(method("GET"))
        .and(path("/sessions/s1/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(billing_json("s1", 15600)))
        .mount(&server)
        .await;

    let mut store = SessionStore::new(client_for(&server));
    store.load_session_by_room_number("101").await.unwrap();

    assert_eq!(store.current_session().unwrap().id, "s1");
    assert_eq!(store.session_orders().len(), 1);
    assert_eq!(store.session_billing().unwrap().total, 15600);
}

#[tokio::test]
async fn room_lookup_failure_sets_error_and_rethrows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sessions/active-by-room-number/101"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut store = SessionStore::new(client_for(&server));
    let err = store.load_session_by_room_number("101").await.unwrap_err();

    assert_eq!(err.code, SessionErrorCode::Unknown);
    assert_eq!(store.last_error().unwrap().code, SessionErrorCode::Unknown);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn refresh_is_a_noop_until_something_is_loaded() {
    let server = MockServer::start().await;

    let mut store = SessionStore::new(client_for(&server));
    store.refresh().await.unwrap();

    assert!(store.current_session().is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn refresh_reloads_the_current_session_in_full() {
    let server = MockServer::start().await;
    mount_session_and_orders(&server, "s1", "101").await;
    // First load: billing missing; after refresh: billing computed.
    Mock::given(method("GET"))
        .and(path("/sessions/s1/billing"))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let mut store = SessionStore::new(client_for(&server));
    store.load_session("s1").await.unwrap();
    assert!(store.session_billing().is_none());

    Mock::given(method("GET"))
        .and(path("/sessions/s1/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(billing_json("s1", 15600)))
        .mount(&server)
        .await;

    store.refresh().await.unwrap();
    assert_eq!(store.session_billing().unwrap().total, 15600);
}
