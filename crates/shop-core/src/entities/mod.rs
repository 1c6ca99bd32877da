//! Domain entities - persisted resource representations

mod order;
mod product;
mod user;

pub use order::{Cart, Order};
pub use product::{Category, Product};
pub use user::{Credential, User};
