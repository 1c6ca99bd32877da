//! Product entity - a catalog item referencing its category

use crate::value_objects::ResourceId;

/// Product entity
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<ResourceId>,
    pub product_title: String,
    pub image_url: String,
    pub sku: String,
    pub price_unit: f64,
    pub quantity: i32,
    /// Category reference, carried by value; never fabricated by mapping
    pub category: Option<Category>,
}

/// Category reference owned by a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub category_id: ResourceId,
    pub category_title: String,
}

impl Product {
    /// Create a new Product without identity; the store assigns one on save
    pub fn new(
        product_title: String,
        image_url: String,
        sku: String,
        price_unit: f64,
        quantity: i32,
        category: Option<Category>,
    ) -> Self {
        Self {
            id: None,
            product_title,
            image_url,
            sku,
            price_unit,
            quantity,
            category,
        }
    }

    /// Check whether any stock remains
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }
}

impl Category {
    pub fn new(category_id: ResourceId, category_title: String) -> Self {
        Self {
            category_id,
            category_title,
        }
    }
}
