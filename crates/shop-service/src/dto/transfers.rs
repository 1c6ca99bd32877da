//! Transfer DTOs - the wire representation of each resource
//!
//! All transfers serialize as camelCase JSON. Identity fields are optional
//! on the way in (the store is authoritative) and omitted when absent on
//! the way out. Relation references are carried by value and deserialize
//! from a missing field or an explicit `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shop_core::ResourceId;
use validator::Validate;

// ============================================================================
// Order
// ============================================================================

/// Order transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderTransfer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<ResourceId>,

    #[serde(default = "Utc::now")]
    pub order_date: DateTime<Utc>,

    #[validate(length(min = 1, message = "Order description must not be empty"))]
    pub order_desc: String,

    #[serde(default)]
    pub order_fee: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart: Option<CartTransfer>,
}

/// Cart reference carried by an order transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTransfer {
    pub cart_id: ResourceId,
    #[serde(default)]
    pub user_id: ResourceId,
}

// ============================================================================
// Product
// ============================================================================

/// Product transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductTransfer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ResourceId>,

    #[validate(length(min = 1, message = "Product title must not be empty"))]
    pub product_title: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub sku: String,

    #[serde(default)]
    pub price_unit: f64,

    #[serde(default)]
    pub quantity: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryTransfer>,
}

/// Category reference carried by a product transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTransfer {
    pub category_id: ResourceId,
    #[serde(default)]
    pub category_title: String,
}

// ============================================================================
// User
// ============================================================================

/// User transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserTransfer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ResourceId>,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub credential: Option<CredentialTransfer>,
}

/// Credential reference carried by a user transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CredentialTransfer {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub is_enabled: bool,

    #[serde(default)]
    pub is_account_non_expired: bool,

    #[serde(default)]
    pub is_account_non_locked: bool,

    #[serde(default)]
    pub is_credentials_non_expired: bool,
}
