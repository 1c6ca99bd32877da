//! API integration tests
//!
//! Each test spins up its own server instance with empty in-memory
//! stores, so tests are independent and can run in parallel.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    let health: HealthBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(health.status, "ok");
    assert!(!health.timestamp.is_empty());
}

// ============================================================================
// Order Tests
// ============================================================================

#[tokio::test]
async fn test_create_order() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = OrderRequest::unique();

    let response = server.post("/api/orders", &request).await.unwrap();
    let order: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(order.order_id >= 1);
    assert_eq!(order.order_desc, request.order_desc);
    assert_eq!(order.cart.unwrap().cart_id, 1);
}

#[tokio::test]
async fn test_create_order_minimal_body_gets_defaults() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Only a description and a cart reference; date and fee are defaulted
    let body = json!({"orderDesc": "Bare order", "cart": {"cartId": 3}});
    let response = server.post("/api/orders", &body).await.unwrap();
    let order: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(order.order_desc, "Bare order");
    assert_eq!(order.order_fee, 0.0);
    assert!(!order.order_date.is_empty());
}

#[tokio::test]
async fn test_get_order() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = OrderRequest::unique();

    let response = server.post("/api/orders", &request).await.unwrap();
    let created: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/orders/{}", created.order_id))
        .await
        .unwrap();
    let order: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(order.order_id, created.order_id);
    assert_eq!(order.order_desc, request.order_desc);
}

#[tokio::test]
async fn test_get_absent_order_returns_error_envelope() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/orders/999999").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    assert_eq!(error.code, "NOT_FOUND");
    assert!(error.message.contains("999999"));
    assert!(!error.timestamp.is_empty());
}

#[tokio::test]
async fn test_update_order_path_id_wins() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/orders", &OrderRequest::unique()).await.unwrap();
    let created: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // Body carries a different id; the path id is authoritative
    let body = json!({
        "orderId": 424242,
        "orderDesc": "Updated order",
        "orderFee": 12.5,
    });
    let response = server
        .put(&format!("/api/orders/{}", created.order_id), &body)
        .await
        .unwrap();
    let updated: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.order_id, created.order_id);
    assert_eq!(updated.order_desc, "Updated order");

    let response = server
        .get(&format!("/api/orders/{}", created.order_id))
        .await
        .unwrap();
    let fetched: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.order_desc, "Updated order");
}

#[tokio::test]
async fn test_delete_order_returns_true() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/orders", &OrderRequest::unique()).await.unwrap();
    let created: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete(&format!("/api/orders/{}", created.order_id))
        .await
        .unwrap();
    let deleted: bool = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(deleted);

    // Fetching after delete reports the resource as unknown
    let response = server
        .get(&format!("/api/orders/{}", created.order_id))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_absent_order_still_returns_true() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete("/api/orders/999999").await.unwrap();
    let deleted: bool = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(deleted);
}

#[tokio::test]
async fn test_list_orders_empty_collection() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/orders").await.unwrap();
    let body: CollectionBody<OrderResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.collection.is_empty());
}

#[tokio::test]
async fn test_list_orders() {
    let server = TestServer::start().await.expect("Failed to start server");

    for _ in 0..3 {
        server.post("/api/orders", &OrderRequest::unique()).await.unwrap();
    }

    let response = server.get("/api/orders").await.unwrap();
    let body: CollectionBody<OrderResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.collection.len(), 3);
}

#[tokio::test]
async fn test_create_order_empty_desc_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = json!({"orderDesc": ""});
    let response = server.post("/api/orders", &body).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    assert_eq!(error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_order_id_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/orders/not-a-number").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    assert_eq!(error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Product Tests
// ============================================================================

#[tokio::test]
async fn test_create_product() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = ProductRequest::unique();

    let response = server.post("/api/products", &request).await.unwrap();
    let product: ProductResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(product.product_id >= 1);
    assert_eq!(product.product_title, request.product_title);
    assert_eq!(product.sku, request.sku);
    assert_eq!(product.category.unwrap().category_title, "Computer");
}

#[tokio::test]
async fn test_update_product_title() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/products", &ProductRequest::unique())
        .await
        .unwrap();
    let created: ProductResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let mut request = ProductRequest::unique();
    request.product_title = "UpdatedProduct".to_string();
    let response = server
        .put(&format!("/api/products/{}", created.product_id), &request)
        .await
        .unwrap();
    let updated: ProductResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.product_id, created.product_id);
    assert_eq!(updated.product_title, "UpdatedProduct");

    let response = server
        .get(&format!("/api/products/{}", created.product_id))
        .await
        .unwrap();
    let fetched: ProductResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.product_title, "UpdatedProduct");
}

#[tokio::test]
async fn test_get_absent_product_returns_error_envelope() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/products/999999").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    assert_eq!(error.code, "NOT_FOUND");
    assert!(error.message.contains("Product"));
}

#[tokio::test]
async fn test_list_products() {
    let server = TestServer::start().await.expect("Failed to start server");

    server
        .post("/api/products", &ProductRequest::unique())
        .await
        .unwrap();
    server
        .post("/api/products", &ProductRequest::unique())
        .await
        .unwrap();

    let response = server.get("/api/products").await.unwrap();
    let body: CollectionBody<ProductResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.collection.len(), 2);
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = UserRequest::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(user.user_id >= 1);
    assert_eq!(user.email, request.email);
    assert_eq!(
        user.credential.unwrap().username,
        request.credential.unwrap().username
    );
}

#[tokio::test]
async fn test_create_user_invalid_email_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = json!({"email": "not-an-email"});
    let response = server.post("/api/users", &body).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    assert_eq!(error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_user() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &UserRequest::unique()).await.unwrap();
    let created: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete(&format!("/api/users/{}", created.user_id))
        .await
        .unwrap();
    let deleted: bool = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(deleted);

    let response = server
        .get(&format!("/api/users/{}", created.user_id))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(error.code, "NOT_FOUND");
    assert!(error.message.contains("User"));
}

#[tokio::test]
async fn test_list_users_empty_collection() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/users").await.unwrap();
    let body: CollectionBody<UserResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.collection.is_empty());
}
