//! Entity to Transfer mappers
//!
//! Implements `From` conversions in both directions for each resource.
//! Conversions are total and pure; nested relations are mapped by the
//! relation's own `From` impls, and an absent relation stays absent.

use shop_core::entities::{Cart, Category, Credential, Order, Product, User};

use super::transfers::{
    CartTransfer, CategoryTransfer, CredentialTransfer, OrderTransfer, ProductTransfer,
    UserTransfer,
};

// ============================================================================
// Order Mappers
// ============================================================================

impl From<&Order> for OrderTransfer {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            order_date: order.order_date,
            order_desc: order.order_desc.clone(),
            order_fee: order.order_fee,
            cart: order.cart.map(CartTransfer::from),
        }
    }
}

impl From<Order> for OrderTransfer {
    fn from(order: Order) -> Self {
        Self::from(&order)
    }
}

impl From<OrderTransfer> for Order {
    fn from(transfer: OrderTransfer) -> Self {
        Self {
            id: transfer.order_id,
            order_date: transfer.order_date,
            order_desc: transfer.order_desc,
            order_fee: transfer.order_fee,
            cart: transfer.cart.map(Cart::from),
        }
    }
}

impl From<Cart> for CartTransfer {
    fn from(cart: Cart) -> Self {
        Self {
            cart_id: cart.cart_id,
            user_id: cart.user_id,
        }
    }
}

impl From<CartTransfer> for Cart {
    fn from(transfer: CartTransfer) -> Self {
        Self {
            cart_id: transfer.cart_id,
            user_id: transfer.user_id,
        }
    }
}

// ============================================================================
// Product Mappers
// ============================================================================

impl From<&Product> for ProductTransfer {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_title: product.product_title.clone(),
            image_url: product.image_url.clone(),
            sku: product.sku.clone(),
            price_unit: product.price_unit,
            quantity: product.quantity,
            category: product.category.clone().map(CategoryTransfer::from),
        }
    }
}

impl From<Product> for ProductTransfer {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.id,
            product_title: product.product_title,
            image_url: product.image_url,
            sku: product.sku,
            price_unit: product.price_unit,
            quantity: product.quantity,
            category: product.category.map(CategoryTransfer::from),
        }
    }
}

impl From<ProductTransfer> for Product {
    fn from(transfer: ProductTransfer) -> Self {
        Self {
            id: transfer.product_id,
            product_title: transfer.product_title,
            image_url: transfer.image_url,
            sku: transfer.sku,
            price_unit: transfer.price_unit,
            quantity: transfer.quantity,
            category: transfer.category.map(Category::from),
        }
    }
}

impl From<Category> for CategoryTransfer {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.category_id,
            category_title: category.category_title,
        }
    }
}

impl From<CategoryTransfer> for Category {
    fn from(transfer: CategoryTransfer) -> Self {
        Self {
            category_id: transfer.category_id,
            category_title: transfer.category_title,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserTransfer {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            credential: user.credential.clone().map(CredentialTransfer::from),
        }
    }
}

impl From<User> for UserTransfer {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            credential: user.credential.map(CredentialTransfer::from),
        }
    }
}

impl From<UserTransfer> for User {
    fn from(transfer: UserTransfer) -> Self {
        Self {
            id: transfer.user_id,
            first_name: transfer.first_name,
            last_name: transfer.last_name,
            email: transfer.email,
            credential: transfer.credential.map(Credential::from),
        }
    }
}

impl From<Credential> for CredentialTransfer {
    fn from(credential: Credential) -> Self {
        Self {
            username: credential.username,
            password: credential.password,
            is_enabled: credential.is_enabled,
            is_account_non_expired: credential.is_account_non_expired,
            is_account_non_locked: credential.is_account_non_locked,
            is_credentials_non_expired: credential.is_credentials_non_expired,
        }
    }
}

impl From<CredentialTransfer> for Credential {
    fn from(transfer: CredentialTransfer) -> Self {
        Self {
            username: transfer.username,
            password: transfer.password,
            is_enabled: transfer.is_enabled,
            is_account_non_expired: transfer.is_account_non_expired,
            is_account_non_locked: transfer.is_account_non_locked,
            is_credentials_non_expired: transfer.is_credentials_non_expired,
        }
    }
}
