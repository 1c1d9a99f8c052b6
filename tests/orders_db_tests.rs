//! Integration tests for the order workflow against a live test database.
//!
//! Requires a reachable Postgres instance; connection comes from
//! TEST_DATABASE_URL (see tests/common/mod.rs).

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

use crate::common::{build_app_with_db, setup_test_db};

async fn setup_app() -> Router {
    let db = setup_test_db().await.expect("Failed to connect to test DB");
    build_app_with_db(db)
}

async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn unique_email() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("asha+{nanos}@example.com")
}

fn order_body(email: &str) -> Value {
    json!({
        "customerName": "Asha",
        "customerEmail": email,
        "customerPhone": "+91-9000000000",
        "shippingAddress": "12 Gallery Lane, Pune",
        "items": [
            {"productName": "Sunset Oil", "price": "100.00", "quantity": 2},
            {"productName": "Monsoon Sketch", "price": "49.50", "quantity": 1}
        ],
        "paymentMethod": "razorpay"
    })
}

async fn create_order(app: &Router) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/orders",
        Some(order_body(&unique_email())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_create_order_computes_exact_total_and_starts_created() {
    let app = setup_app().await;

    let order = create_order(&app).await;
    assert_eq!(order["totalAmount"], json!("249.50"));
    assert_eq!(order["status"], json!("CREATED"));
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
    assert_eq!(order["items"][0]["subtotal"], json!("200.00"));
    assert_eq!(order["items"][1]["subtotal"], json!("49.50"));

    // Round-trips through the store with the same total
    let id = order["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/api/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["totalAmount"], json!("249.50"));
    assert_eq!(fetched["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_unknown_order_returns_not_found() {
    let app = setup_app().await;

    let (status, body) = send(&app, Method::GET, "/api/orders/2000000000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Order not found"));
}

#[tokio::test]
async fn test_update_status_on_unknown_order_returns_not_found() {
    let app = setup_app().await;

    let (status, _body) = send(
        &app,
        Method::PUT,
        "/api/orders/2000000000/status?status=SHIPPED",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_status_persists_new_status() {
    let app = setup_app().await;

    let order = create_order(&app).await;
    let id = order["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/orders/{id}/status?status=PROCESSING"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], json!("PROCESSING"));

    // Survives a fresh read
    let (status, fetched) = send(&app, Method::GET, &format!("/api/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["status"], json!("PROCESSING"));
}

#[tokio::test]
async fn test_cancelled_order_cannot_change_status() {
    let app = setup_app().await;

    let order = create_order(&app).await;
    let id = order["id"].as_i64().unwrap();

    let (status, cancelled) = send(
        &app,
        Method::PUT,
        &format!("/api/orders/{id}/status?status=CANCELLED"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["status"], json!("CANCELLED"));

    let (status, _body) = send(
        &app,
        Method::PUT,
        &format!("/api/orders/{id}/status?status=PROCESSING"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, fetched) = send(&app, Method::GET, &format!("/api/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["status"], json!("CANCELLED"));
}

#[tokio::test]
async fn test_orders_by_customer_email_returns_only_that_customer() {
    let app = setup_app().await;

    let email = unique_email();
    let (status, _body) = send(&app, Method::POST, "/api/orders", Some(order_body(&email))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, orders) = send(
        &app,
        Method::GET,
        &format!("/api/orders/customer/{email}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["customerEmail"], json!(email));
}
