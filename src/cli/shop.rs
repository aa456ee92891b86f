//! Interactive shopping session over stdin

use std::io::{self, BufRead};

use crate::application::session::{CartAddOutcome, CartRemoveOutcome, Receipt, StoreSession};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::CatalogTree;

const HELP: &str = "\
  add <product>      move one unit from stock into the cart
  remove <product>   put one unit back on the shelf
  items              list the cart in arrival order
  total              cart totals
  tree               show the catalog
  clear              empty the cart without checkout
  checkout           print a receipt and empty the cart
  help               this overview
  quit               leave the store";

/// Runs the interactive session until `quit` or end of input.
pub fn run(catalog: CatalogTree) -> CliResult<()> {
    let mut session = StoreSession::new(catalog);
    output::header("Welcome to the store");
    output::detail("type `help` for the available commands");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        output::prompt("store>");
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let (verb, argument) = split_verb(line.trim());
        match verb {
            "" => continue,
            "add" => add(&mut session, argument),
            "remove" => remove(&mut session, argument),
            "items" | "cart" => show_items(&session),
            "total" => show_total(&session),
            "tree" | "catalog" => show_catalog(&session),
            "clear" => {
                session.clear_cart();
                output::success("cart emptied");
            }
            "checkout" => print_receipt(&session.checkout()),
            "help" => output::info(HELP),
            "quit" | "exit" | "q" => break,
            other => output::warning(&format!("unknown command: {other}")),
        }
    }
    Ok(())
}

fn split_verb(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    }
}

fn add(session: &mut StoreSession, product: &str) {
    if product.is_empty() {
        output::warning("usage: add <product>");
        return;
    }
    match session.add_to_cart(product) {
        CartAddOutcome::Added { remaining } => {
            output::success(&format!("{product} added, {remaining} left in stock"));
        }
        CartAddOutcome::OutOfStock => {
            output::warning(&format!("no more {product} available in stock"));
        }
        CartAddOutcome::UnknownProduct => {
            output::warning(&format!("{product} not found in the inventory"));
        }
    }
}

fn remove(session: &mut StoreSession, product: &str) {
    if product.is_empty() {
        output::warning("usage: remove <product>");
        return;
    }
    match session.remove_from_cart(product) {
        CartRemoveOutcome::Removed => {
            output::success(&format!("{product} returned to the shelf"));
        }
        CartRemoveOutcome::NotInCart => {
            output::warning(&format!("{product} is not in the cart"));
        }
    }
}

fn show_items(session: &StoreSession) {
    if session.cart().is_empty() {
        output::detail("the cart is empty");
        return;
    }
    for (position, item) in session.cart().iter().enumerate() {
        output::info(&format!("{:>3}. {}", position + 1, item));
    }
    show_total(session);
}

fn show_total(session: &StoreSession) {
    let summary = session.summary();
    output::detail(&format!(
        "{} items, total ${:.2}",
        summary.total_items, summary.total_price
    ));
}

fn show_catalog(session: &StoreSession) {
    print!("{}", session.catalog().render());
}

fn print_receipt(receipt: &Receipt) {
    if receipt.lines.is_empty() {
        output::detail("the cart is empty, nothing to check out");
        return;
    }
    output::header(&format!(
        "Receipt ({})",
        receipt.issued_at.format("%Y-%m-%d %H:%M")
    ));
    for line in &receipt.lines {
        output::info(&format!(
            "{:>3} x {:<24} ${:>9} each  ${:>9}",
            line.quantity,
            line.product,
            format!("{:.2}", line.unit_price),
            format!("{:.2}", line.line_total)
        ));
    }
    output::action(
        "Total",
        &format!("${:.2} for {} items", receipt.total, receipt.item_count),
    );
    output::success("your items have been checked out");
}
