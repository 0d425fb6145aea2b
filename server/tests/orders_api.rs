//! Order placement, the admin fulfilment view, and the delivery workflow

mod common;

use common::{register_and_signin, send, test_app};
use http::StatusCode;
use serde_json::{Value, json};
use std::time::Duration;

fn order_payload(total: f64) -> Value {
    json!({
        "items": [
            {"productId": "product:mouse", "name": "Wireless Mouse", "unitPrice": total, "quantity": 1}
        ],
        "total": total
    })
}

async fn place_order(app: &axum::Router, token: &str, total: f64) -> String {
    let (status, body) = send(app, "POST", "/api/orders", Some(token), Some(order_payload(total))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["order"]["status"], "New");
    body["order"]["id"]
        .as_str()
        .expect("order id missing")
        .to_string()
}

#[tokio::test]
async fn create_order_requires_items() {
    let app = test_app().await;
    let user = register_and_signin(&app, "alice@example.com", "alice", "hunter2").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(&user),
        Some(json!({"items": [], "total": 0.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Order must contain at least one item.");
}

#[tokio::test]
async fn create_order_starts_in_new() {
    let app = test_app().await;
    let user = register_and_signin(&app, "alice@example.com", "alice", "hunter2").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(&user),
        Some(order_payload(24.99)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["order"]["status"], "New");
    assert_eq!(body["order"]["total"], json!(24.99));
    assert_eq!(body["order"]["items"][0]["name"], "Wireless Mouse");
}

#[tokio::test]
async fn own_orders_are_listed_newest_first() {
    let app = test_app().await;
    let user = register_and_signin(&app, "alice@example.com", "alice", "hunter2").await;

    let first = place_order(&app, &user, 1.0).await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    let second = place_order(&app, &user, 2.0).await;

    let (status, body) = send(&app, "GET", "/api/orders/user", Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().expect("expected an array");
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["id"], json!(second));
    assert_eq!(orders[1]["id"], json!(first));
}

#[tokio::test]
async fn admin_list_is_forbidden_for_customers() {
    let app = test_app().await;
    let _admin = register_and_signin(&app, "admin@example.com", "admin", "hunter2").await;
    let user = register_and_signin(&app, "bob@example.com", "bob", "hunter2").await;

    let (status, body) = send(&app, "GET", "/api/orders", Some(&user), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied: Admins only.");
}

#[tokio::test]
async fn admin_list_sorts_pending_work_first() {
    let app = test_app().await;
    let admin = register_and_signin(&app, "admin@example.com", "admin", "hunter2").await;
    let user = register_and_signin(&app, "alice@example.com", "alice", "hunter2").await;

    // Four orders in creation order; the middle two get shipped/delivered
    let mut ids = Vec::new();
    for total in [1.0, 2.0, 3.0, 4.0] {
        ids.push(place_order(&app, &user, total).await);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/orders/{}", ids[0]),
        Some(&admin),
        Some(json!({"status": "Shipped"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/orders/{}", ids[2]),
        Some(&admin),
        Some(json!({"status": "Delivered"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Expected: New (newest), New (older), Shipped, Delivered
    let (status, body) = send(&app, "GET", "/api/orders", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let orders = body["orders"].as_array().expect("expected orders array");
    let listed: Vec<(&str, &str)> = orders
        .iter()
        .map(|o| {
            (
                o["id"].as_str().unwrap_or_default(),
                o["status"].as_str().unwrap_or_default(),
            )
        })
        .collect();

    assert_eq!(
        listed,
        vec![
            (ids[3].as_str(), "New"),
            (ids[1].as_str(), "New"),
            (ids[0].as_str(), "Shipped"),
            (ids[2].as_str(), "Delivered"),
        ]
    );
    assert_eq!(body["currentPage"], json!(1));
    assert_eq!(body["totalPages"], json!(1));
}

#[tokio::test]
async fn admin_set_status_is_idempotent_and_validates_input() {
    let app = test_app().await;
    let admin = register_and_signin(&app, "admin@example.com", "admin", "hunter2").await;
    let user = register_and_signin(&app, "alice@example.com", "alice", "hunter2").await;
    let id = place_order(&app, &user, 5.0).await;

    // Repeating the same status is a successful no-op
    for _ in 0..2 {
        let (status, body) = send(
            &app,
            "PATCH",
            &format!("/api/orders/{id}"),
            Some(&admin),
            Some(json!({"status": "Shipped"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["order"]["status"], "Shipped");
    }

    // Unknown status string
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/orders/{id}"),
        Some(&admin),
        Some(json!({"status": "Cancelled"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status.");

    // Unknown order id
    let (status, _) = send(
        &app,
        "PATCH",
        "/api/orders/missing",
        Some(&admin),
        Some(json!({"status": "Shipped"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delivery_confirmation_workflow() {
    let app = test_app().await;
    let admin = register_and_signin(&app, "admin@example.com", "admin", "hunter2").await;
    let owner = register_and_signin(&app, "alice@example.com", "alice", "hunter2").await;
    let stranger = register_and_signin(&app, "bob@example.com", "bob", "hunter2").await;
    let id = place_order(&app, &owner, 9.99).await;

    // Not shipped yet
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/orders/user/{id}"),
        Some(&owner),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Order must be shipped before it can be delivered."
    );

    // Someone else's order is off limits regardless of status
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/orders/user/{id}"),
        Some(&stranger),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied: Not your order.");

    // Ship it, then the owner can confirm delivery
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/orders/{id}"),
        Some(&admin),
        Some(json!({"status": "Shipped"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/orders/user/{id}"),
        Some(&owner),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["status"], "Delivered");

    // Delivered is terminal for the customer path
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/orders/user/{id}"),
        Some(&owner),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // A missing order answers like a foreign one
    let (status, _) = send(&app, "PATCH", "/api/orders/user/missing", Some(&owner), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
