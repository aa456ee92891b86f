//! Integration tests for StoreSession inventory and checkout rules

use rust_decimal::Decimal;

use storecart::application::{CartAddOutcome, CartRemoveOutcome, StoreSession};
use storecart::domain::CatalogTree;

fn price(text: &str) -> Decimal {
    text.parse().unwrap()
}

fn sample_session() -> StoreSession {
    let mut catalog = CatalogTree::new();
    catalog.add_product("Electronics", "Laptops", "MacBook", price("2000.00"), 2);
    catalog.add_product("Grocery", "Produce", "Bananas", price("1.29"), 140);
    catalog.add_product("Grocery", "Produce", "Avocado", price("2.50"), 0);
    StoreSession::new(catalog)
}

fn stock_of(session: &StoreSession, product: &str) -> u32 {
    session
        .catalog()
        .locate(product)
        .map(|found| found.record.quantity)
        .unwrap_or(0)
}

// ============================================================
// Cart Addition Tests
// ============================================================

#[test]
fn given_stocked_product_when_adding_to_cart_then_stock_decrements() {
    // Arrange
    let mut session = sample_session();

    // Act
    let outcome = session.add_to_cart("Bananas");

    // Assert: one unit moved from shelf to cart
    assert_eq!(outcome, CartAddOutcome::Added { remaining: 139 });
    assert_eq!(stock_of(&session, "Bananas"), 139);
    assert_eq!(session.cart().items(), vec!["Bananas"]);
}

#[test]
fn given_exhausted_product_when_adding_to_cart_then_cart_is_unchanged() {
    // Arrange: Avocado starts at zero stock
    let mut session = sample_session();

    // Act
    let outcome = session.add_to_cart("Avocado");

    // Assert
    assert_eq!(outcome, CartAddOutcome::OutOfStock);
    assert!(session.cart().is_empty());
    assert_eq!(stock_of(&session, "Avocado"), 0);
}

#[test]
fn given_unknown_product_when_adding_to_cart_then_reports_unknown() {
    let mut session = sample_session();

    let outcome = session.add_to_cart("Durian");

    assert_eq!(outcome, CartAddOutcome::UnknownProduct);
    assert!(session.cart().is_empty());
}

#[test]
fn given_two_units_in_stock_when_adding_three_times_then_third_is_refused() {
    // Arrange
    let mut session = sample_session();

    // Act + Assert: the shelf empties one unit per add
    assert_eq!(
        session.add_to_cart("MacBook"),
        CartAddOutcome::Added { remaining: 1 }
    );
    assert_eq!(
        session.add_to_cart("MacBook"),
        CartAddOutcome::Added { remaining: 0 }
    );
    assert_eq!(session.add_to_cart("MacBook"), CartAddOutcome::OutOfStock);
    assert_eq!(session.cart().len(), 2);
}

// ============================================================
// Cart Removal Tests
// ============================================================

#[test]
fn given_item_in_cart_when_removing_then_one_unit_is_restocked() {
    // Arrange
    let mut session = sample_session();
    session.add_to_cart("Bananas");
    assert_eq!(stock_of(&session, "Bananas"), 139);

    // Act
    let outcome = session.remove_from_cart("Bananas");

    // Assert: the unit goes back on the shelf
    assert_eq!(outcome, CartRemoveOutcome::Removed);
    assert_eq!(stock_of(&session, "Bananas"), 140);
    assert!(session.cart().is_empty());
}

#[test]
fn given_item_not_in_cart_when_removing_then_stock_is_untouched() {
    // Arrange
    let mut session = sample_session();
    session.add_to_cart("Bananas");

    // Act
    let outcome = session.remove_from_cart("MacBook");

    // Assert
    assert_eq!(outcome, CartRemoveOutcome::NotInCart);
    assert_eq!(stock_of(&session, "MacBook"), 2);
    assert_eq!(session.cart().items(), vec!["Bananas"]);
}

#[test]
fn given_duplicate_items_when_removing_one_then_only_one_unit_returns() {
    // Arrange
    let mut session = sample_session();
    session.add_to_cart("Bananas");
    session.add_to_cart("Bananas");
    assert_eq!(stock_of(&session, "Bananas"), 138);

    // Act
    session.remove_from_cart("Bananas");

    // Assert
    assert_eq!(stock_of(&session, "Bananas"), 139);
    assert_eq!(session.cart().items(), vec!["Bananas"]);
}

// ============================================================
// Summary Tests
// ============================================================

#[test]
fn given_mixed_cart_when_summarizing_then_totals_cover_duplicates() {
    // Arrange
    let mut session = sample_session();
    session.add_to_cart("Bananas");
    session.add_to_cart("MacBook");
    session.add_to_cart("Bananas");

    // Act
    let summary = session.summary();

    // Assert: 2 x 1.29 + 2000.00
    assert_eq!(summary.total_items, 3);
    assert_eq!(summary.total_price, price("2002.58"));
}

#[test]
fn given_empty_cart_when_summarizing_then_totals_are_zero() {
    let session = sample_session();

    let summary = session.summary();

    assert_eq!(summary.total_items, 0);
    assert_eq!(summary.total_price, Decimal::ZERO);
}

// ============================================================
// Checkout Tests
// ============================================================

#[test]
fn given_duplicates_when_checking_out_then_receipt_groups_in_first_seen_order() {
    // Arrange
    let mut session = sample_session();
    session.add_to_cart("Bananas");
    session.add_to_cart("MacBook");
    session.add_to_cart("Bananas");

    // Act
    let receipt = session.checkout();

    // Assert: one line per product, ordered by first appearance
    assert_eq!(receipt.lines.len(), 2);
    assert_eq!(receipt.lines[0].product, "Bananas");
    assert_eq!(receipt.lines[0].quantity, 2);
    assert_eq!(receipt.lines[0].unit_price, price("1.29"));
    assert_eq!(receipt.lines[0].line_total, price("2.58"));
    assert_eq!(receipt.lines[1].product, "MacBook");
    assert_eq!(receipt.lines[1].quantity, 1);
    assert_eq!(receipt.lines[1].line_total, price("2000.00"));
    assert_eq!(receipt.item_count, 3);
    assert_eq!(receipt.total, price("2002.58"));
}

#[test]
fn given_checkout_when_complete_then_cart_clears_and_stock_stays_sold() {
    // Arrange
    let mut session = sample_session();
    session.add_to_cart("Bananas");
    session.add_to_cart("Bananas");

    // Act
    session.checkout();

    // Assert: sold units do not return to the shelf
    assert!(session.cart().is_empty());
    assert_eq!(stock_of(&session, "Bananas"), 138);
}

#[test]
fn given_empty_cart_when_checking_out_then_receipt_is_empty() {
    let mut session = sample_session();

    let receipt = session.checkout();

    assert!(receipt.lines.is_empty());
    assert_eq!(receipt.item_count, 0);
    assert_eq!(receipt.total, Decimal::ZERO);
}

// ============================================================
// Cart Reset Tests
// ============================================================

#[test]
fn given_filled_cart_when_clearing_then_stock_is_not_restored() {
    // Arrange
    let mut session = sample_session();
    session.add_to_cart("Bananas");
    session.add_to_cart("MacBook");

    // Act
    session.clear_cart();

    // Assert: clearing abandons the units without restocking
    assert!(session.cart().is_empty());
    assert_eq!(stock_of(&session, "Bananas"), 139);
    assert_eq!(stock_of(&session, "MacBook"), 1);
}
