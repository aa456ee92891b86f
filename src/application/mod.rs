//! Application layer: catalog import and the shopping session
//!
//! This layer brings catalogs into memory and orchestrates the domain
//! structures; everything that can actually fail lives here.

pub mod error;
pub mod import;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use import::{load_catalog, parse_catalog};
pub use session::{
    CartAddOutcome, CartRemoveOutcome, CartSummary, Receipt, ReceiptLine, StoreSession,
};
