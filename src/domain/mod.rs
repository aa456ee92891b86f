//! Domain layer: the cart and catalog data structures
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading). Abnormal conditions are status values, not errors: every
//! operation is total over any cart or catalog state.

pub mod cart;
pub mod catalog;

pub use cart::{Cart, CartIterator};
pub use catalog::{
    CatalogIterator, CatalogNode, CatalogTree, ProductLocation, RemoveOutcome, StockRecord,
};
