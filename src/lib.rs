//! Product catalog and shopping cart core
//!
//! An arena-backed catalog tree and a linked cart form the domain layer;
//! the application layer imports catalogs from CSV and runs the shopping
//! session; the CLI layer renders both and drives them interactively.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;

pub use application::{load_catalog, parse_catalog, StoreSession};
pub use domain::{Cart, CatalogTree, ProductLocation, RemoveOutcome, StockRecord};
