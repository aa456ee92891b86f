//! Catalog display as a box-drawing terminal tree

use generational_arena::Index;
use termtree::Tree;

use crate::domain::CatalogTree;

/// Convert the catalog into a `termtree` tree for display. Product labels
/// carry price and stock next to the name.
pub fn display_tree(catalog: &CatalogTree) -> Tree<String> {
    build(catalog, catalog.root())
}

fn build(catalog: &CatalogTree, idx: Index) -> Tree<String> {
    let Some(node) = catalog.node(idx) else {
        return Tree::new(String::new());
    };
    let label = match node.record {
        Some(record) => format!(
            "{} (${:.2}, {} in stock)",
            node.name, record.price, record.quantity
        ),
        None => node.name.clone(),
    };
    Tree::new(label).with_leaves(node.children.iter().map(|&child| build(catalog, child)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_display_tree_labels_products_with_price_and_stock() {
        let mut catalog = CatalogTree::new();
        catalog.add_product(
            "Electronics",
            "Laptops",
            "MacBook",
            "2000.00".parse::<Decimal>().unwrap(),
            10,
        );

        let rendered = display_tree(&catalog).to_string();

        assert!(rendered.starts_with("store"));
        assert!(rendered.contains("Electronics"));
        assert!(rendered.contains("MacBook ($2000.00, 10 in stock)"));
    }
}
