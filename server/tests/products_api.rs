//! Product catalog CRUD, authorization, and pagination

mod common;

use common::{register_and_signin, send, test_app};
use http::StatusCode;
use serde_json::json;

fn sample_product() -> serde_json::Value {
    json!({
        "name": "Wireless Mouse",
        "price": 24.99,
        "description": "Quiet clicks",
        "stock": 5
    })
}

#[tokio::test]
async fn product_writes_require_an_admin() {
    let app = test_app().await;
    // First account is the admin, second is a regular customer
    let _admin = register_and_signin(&app, "admin@example.com", "admin", "hunter2").await;
    let user = register_and_signin(&app, "bob@example.com", "bob", "hunter2").await;

    let (status, _) = send(&app, "POST", "/api/products", None, Some(sample_product())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(&user),
        Some(sample_product()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied: Admins only.");
}

#[tokio::test]
async fn catalog_crud_roundtrip() {
    let app = test_app().await;
    let admin = register_and_signin(&app, "admin@example.com", "admin", "hunter2").await;

    // Create
    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(&admin),
        Some(sample_product()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Wireless Mouse");
    assert_eq!(body["formattedPrice"], "Ksh 24.99");
    assert_eq!(body["isInStock"], json!(true));
    let id = body["id"].as_str().expect("product id missing").to_string();

    // Public read
    let (status, body) = send(&app, "GET", &format!("/api/products/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Wireless Mouse");

    // Update
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/products/{id}"),
        Some(&admin),
        Some(json!({"price": 19.99, "stock": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["formattedPrice"], "Ksh 19.99");
    assert_eq!(body["isInStock"], json!(false));

    // Delete
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/products/{id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/api/products/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_invalid_fields() {
    let app = test_app().await;
    let admin = register_and_signin(&app, "admin@example.com", "admin", "hunter2").await;

    // Name too short
    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(&admin),
        Some(json!({"name": "ab", "price": 1.0, "stock": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Negative price
    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(&admin),
        Some(json!({"name": "Widget", "price": -1.0, "stock": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Negative stock
    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(&admin),
        Some(json!({"name": "Widget", "price": 1.0, "stock": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_product_returns_404() {
    let app = test_app().await;
    let admin = register_and_signin(&app, "admin@example.com", "admin", "hunter2").await;

    let (status, _) = send(&app, "GET", "/api/products/missing", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/products/missing",
        Some(&admin),
        Some(json!({"price": 2.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/products/missing", Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_is_public_and_paginated() {
    let app = test_app().await;
    let admin = register_and_signin(&app, "admin@example.com", "admin", "hunter2").await;

    for i in 0..12 {
        let (status, _) = send(
            &app,
            "POST",
            "/api/products",
            Some(&admin),
            Some(json!({"name": format!("Product {i:02}"), "price": 10.0, "stock": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/api/products?page=2&limit=5", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().map(|a| a.len()), Some(5));
    assert_eq!(body["currentPage"], json!(2));
    assert_eq!(body["totalPages"], json!(3));
    assert_eq!(body["totalProducts"], json!(12));

    let (status, body) = send(&app, "GET", "/api/products?page=3&limit=5", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().map(|a| a.len()), Some(2));
}
