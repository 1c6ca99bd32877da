//! Order entity - a placed order referencing the cart it was built from

use chrono::{DateTime, Utc};

use crate::value_objects::ResourceId;

/// Order entity
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Option<ResourceId>,
    pub order_date: DateTime<Utc>,
    pub order_desc: String,
    pub order_fee: f64,
    /// Cart reference, carried by value; never fabricated by mapping
    pub cart: Option<Cart>,
}

/// Cart reference owned by an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cart {
    pub cart_id: ResourceId,
    pub user_id: ResourceId,
}

impl Order {
    /// Create a new Order without identity; the store assigns one on save
    pub fn new(order_date: DateTime<Utc>, order_desc: String, order_fee: f64, cart: Option<Cart>) -> Self {
        Self {
            id: None,
            order_date,
            order_desc,
            order_fee,
            cart,
        }
    }

    /// Check whether the order carries a cart reference
    #[inline]
    pub fn has_cart(&self) -> bool {
        self.cart.is_some()
    }
}

impl Cart {
    pub fn new(cart_id: ResourceId, user_id: ResourceId) -> Self {
        Self { cart_id, user_id }
    }
}
