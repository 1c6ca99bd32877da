//! Store traits (ports) for the domain layer

mod stores;

pub use stores::{OrderStore, ProductStore, StoreResult, UserStore};
