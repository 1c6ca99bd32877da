//! Route definitions
//!
//! All resource routes mounted under /api, with the health probe outside it.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{health, orders, products, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// Resource routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(order_routes())
        .merge(product_routes())
        .merge(user_routes())
}

/// Order routes
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(orders::create_order))
        .route("/orders", get(orders::list_orders))
        .route("/orders/:id", get(orders::get_order))
        .route("/orders/:id", put(orders::update_order))
        .route("/orders/:id", delete(orders::delete_order))
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(products::create_product))
        .route("/products", get(products::list_products))
        .route("/products/:id", get(products::get_product))
        .route("/products/:id", put(products::update_product))
        .route("/products/:id", delete(products::delete_product))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users", get(users::list_users))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::delete_user))
}
