//! Shopping session: one catalog, one cart, and the inventory rules
//! connecting them

use chrono::{DateTime, Local};
use itertools::Itertools;
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{Cart, CatalogTree, RemoveOutcome};

/// Outcome of moving a product into the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAddOutcome {
    /// Product appended to the cart; carries the stock left afterwards.
    Added { remaining: u32 },
    /// The catalog knows the product but its stock is exhausted.
    OutOfStock,
    /// The catalog has no product with that name.
    UnknownProduct,
}

/// Outcome of taking a product back out of the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartRemoveOutcome {
    /// One unit removed from the cart (and restocked when the product
    /// still resolves in the catalog).
    Removed,
    /// No cart entry matches the product.
    NotInCart,
}

/// Totals over the current cart contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub total_price: Decimal,
    pub total_items: usize,
}

/// One grouped line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub product: String,
    pub quantity: usize,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Checkout result: grouped lines, grand total, and issue time.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub item_count: usize,
    pub total: Decimal,
    pub issued_at: DateTime<Local>,
}

/// Owns one catalog and one cart and mediates the inventory adjustments
/// around cart actions: stock is decremented when a unit enters the cart
/// and restocked by one when a unit leaves it short of checkout.
#[derive(Debug)]
pub struct StoreSession {
    catalog: CatalogTree,
    cart: Cart,
}

impl StoreSession {
    pub fn new(catalog: CatalogTree) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    pub fn catalog(&self) -> &CatalogTree {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Moves one unit of `product` from catalog stock into the cart.
    /// Unknown and exhausted products are refused, leaving the cart
    /// untouched.
    pub fn add_to_cart(&mut self, product: &str) -> CartAddOutcome {
        let Some(found) = self.catalog.locate(product) else {
            return CartAddOutcome::UnknownProduct;
        };
        match self
            .catalog
            .remove_product(&found.department, &found.category, product)
        {
            RemoveOutcome::Decremented { remaining } => {
                self.cart.add(product);
                debug!("added {} to cart, {} left in stock", product, remaining);
                CartAddOutcome::Added { remaining }
            }
            RemoveOutcome::OutOfStock => CartAddOutcome::OutOfStock,
            RemoveOutcome::NotFound => CartAddOutcome::UnknownProduct,
        }
    }

    /// Removes the first matching cart entry; when the product still
    /// resolves in the catalog, one unit goes back into stock.
    pub fn remove_from_cart(&mut self, product: &str) -> CartRemoveOutcome {
        if !self.cart.remove(product) {
            return CartRemoveOutcome::NotInCart;
        }
        if let Some(found) = self.catalog.locate(product) {
            self.catalog.add_product(
                &found.department,
                &found.category,
                product,
                found.record.price,
                found.record.quantity + 1,
            );
        }
        debug!("removed {} from cart", product);
        CartRemoveOutcome::Removed
    }

    /// Item count and total price of the cart as it stands. Entries whose
    /// product no longer resolves in the catalog price at zero.
    pub fn summary(&self) -> CartSummary {
        let mut total_price = Decimal::ZERO;
        let mut total_items = 0;
        for item in self.cart.iter() {
            total_items += 1;
            if let Some(found) = self.catalog.locate(item) {
                total_price += found.record.price;
            }
        }
        CartSummary {
            total_price,
            total_items,
        }
    }

    /// Prices the cart and clears it. Duplicate entries collapse into one
    /// line each, in first-seen order; stock stays decremented because the
    /// units are sold.
    pub fn checkout(&mut self) -> Receipt {
        let items = self.cart.items();
        let counts = items.iter().counts();
        let mut lines = Vec::new();
        let mut total = Decimal::ZERO;
        for product in items.iter().unique() {
            let quantity = counts.get(product).copied().unwrap_or(0);
            let unit_price = self
                .catalog
                .locate(product)
                .map(|found| found.record.price)
                .unwrap_or(Decimal::ZERO);
            let line_total = unit_price * Decimal::from(quantity);
            total += line_total;
            lines.push(ReceiptLine {
                product: product.clone(),
                quantity,
                unit_price,
                line_total,
            });
        }
        let item_count = items.len();
        self.cart.clear();
        debug!("checkout complete: {} items", item_count);
        Receipt {
            lines,
            item_count,
            total,
            issued_at: Local::now(),
        }
    }

    /// Empties the cart without restocking.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }
}
