use std::collections::BTreeMap;

use generational_arena::{Arena, Index};
use rust_decimal::Decimal;
use tracing::instrument;

/// Price and stock level carried by product leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockRecord {
    pub price: Decimal,
    pub quantity: u32,
}

/// Node in the catalog hierarchy.
#[derive(Debug)]
pub struct CatalogNode {
    /// Department, category, or product name
    pub name: String,
    /// Present on product leaves, absent on container nodes
    pub record: Option<StockRecord>,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<Index>,
}

/// Outcome of an inventory decrement.
///
/// Stock exhaustion and missing products are ordinary states of the
/// catalog, reported as values rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// One unit removed; carries the quantity left in stock.
    Decremented { remaining: u32 },
    /// The product exists but its quantity is already zero.
    OutOfStock,
    /// No product with that name under the given department and category.
    NotFound,
}

/// Where a product sits in the hierarchy, with its current record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLocation {
    pub department: String,
    pub category: String,
    pub record: StockRecord,
}

/// Arena-based product hierarchy: store, then departments, categories,
/// and product leaves.
///
/// Three levels deep by convention only; the structure itself is a
/// general-purpose n-ary tree. Sibling names are unique by exact match
/// and children keep insertion order.
#[derive(Debug)]
pub struct CatalogTree {
    /// Arena storage for all catalog nodes
    arena: Arena<CatalogNode>,
    /// Index of the fixed store root
    root: Index,
}

impl Default for CatalogTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogTree {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(CatalogNode {
            name: "store".to_string(),
            record: None,
            children: Vec::new(),
        });
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn node(&self, idx: Index) -> Option<&CatalogNode> {
        self.arena.get(idx)
    }

    /// Returns the child of `parent` with exactly this name, creating and
    /// appending a container child when none exists. Idempotent for
    /// existing names; the sole descent mechanism for department and
    /// category levels.
    #[instrument(level = "trace", skip(self))]
    pub fn get_or_create(&mut self, parent: Index, name: &str) -> Index {
        if let Some(existing) = self.find_child(parent, name) {
            return existing;
        }
        let child = self.arena.insert(CatalogNode {
            name: name.to_string(),
            record: None,
            children: Vec::new(),
        });
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(child);
        }
        child
    }

    /// Inserts or overwrites a product under department and category,
    /// creating missing containers along the path.
    ///
    /// An existing product takes the NEW price and quantity, so repeated
    /// imports of the same product overwrite rather than accumulate.
    #[instrument(level = "trace", skip(self))]
    pub fn add_product(
        &mut self,
        department: &str,
        category: &str,
        product: &str,
        price: Decimal,
        quantity: u32,
    ) {
        let category_idx = self.resolve_category(department, category);
        let record = StockRecord { price, quantity };
        match self.find_child(category_idx, product) {
            Some(existing) => {
                if let Some(node) = self.arena.get_mut(existing) {
                    node.record = Some(record);
                }
            }
            None => {
                let node = self.arena.insert(CatalogNode {
                    name: product.to_string(),
                    record: Some(record),
                    children: Vec::new(),
                });
                if let Some(parent) = self.arena.get_mut(category_idx) {
                    parent.children.push(node);
                }
            }
        }
    }

    /// Decrements a product's stock by one, floored at zero.
    ///
    /// Path resolution creates missing department and category containers,
    /// the same as the other path operations.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_product(
        &mut self,
        department: &str,
        category: &str,
        product: &str,
    ) -> RemoveOutcome {
        let category_idx = self.resolve_category(department, category);
        let Some(product_idx) = self.find_child(category_idx, product) else {
            return RemoveOutcome::NotFound;
        };
        match self.arena.get_mut(product_idx).and_then(|node| node.record.as_mut()) {
            Some(record) if record.quantity > 0 => {
                record.quantity -= 1;
                RemoveOutcome::Decremented {
                    remaining: record.quantity,
                }
            }
            Some(_) => RemoveOutcome::OutOfStock,
            // A name match without a record is a container, not a product
            None => RemoveOutcome::NotFound,
        }
    }

    /// Department names in insertion order.
    pub fn departments(&self) -> Vec<String> {
        self.child_names(self.root)
    }

    /// Category names of a department, creating the department when
    /// absent.
    pub fn categories(&mut self, department: &str) -> Vec<String> {
        let department_idx = self.get_or_create(self.root, department);
        self.child_names(department_idx)
    }

    /// Snapshot of the product records under a category, keyed by name.
    /// Department and category are created when absent.
    pub fn products(&mut self, department: &str, category: &str) -> BTreeMap<String, StockRecord> {
        let category_idx = self.resolve_category(department, category);
        let mut products = BTreeMap::new();
        if let Some(category_node) = self.arena.get(category_idx) {
            for &child in &category_node.children {
                if let Some(node) = self.arena.get(child) {
                    if let Some(record) = node.record {
                        products.insert(node.name.clone(), record);
                    }
                }
            }
        }
        products
    }

    /// First product with this exact name, scanning departments and
    /// categories in insertion order.
    ///
    /// Read-only: unlike the path operations this never creates nodes.
    pub fn locate(&self, product: &str) -> Option<ProductLocation> {
        let root = self.arena.get(self.root)?;
        for &department_idx in &root.children {
            let Some(department) = self.arena.get(department_idx) else {
                continue;
            };
            for &category_idx in &department.children {
                let Some(category) = self.arena.get(category_idx) else {
                    continue;
                };
                for &product_idx in &category.children {
                    let Some(node) = self.arena.get(product_idx) else {
                        continue;
                    };
                    if node.name == product {
                        if let Some(record) = node.record {
                            return Some(ProductLocation {
                                department: department.name.clone(),
                                category: category.name.clone(),
                                record,
                            });
                        }
                    }
                }
            }
        }
        None
    }

    /// Indented textual dump of the whole hierarchy.
    pub fn render(&self) -> String {
        self.render_from(self.root, 0)
    }

    /// Indented textual dump of the subtree rooted at `node`.
    ///
    /// Two spaces per level and one `- name` line per node; product nodes
    /// get price (two decimals) and quantity lines one level deeper.
    pub fn render_from(&self, node: Index, indent: usize) -> String {
        let mut rendered = String::new();
        self.render_into(node, indent, &mut rendered);
        rendered
    }

    fn render_into(&self, node_idx: Index, indent: usize, out: &mut String) {
        let Some(node) = self.arena.get(node_idx) else {
            return;
        };
        let name = if node.name.is_empty() {
            "Unnamed"
        } else {
            node.name.as_str()
        };
        out.push_str(&format!("{}- {}\n", "  ".repeat(indent), name));
        if let Some(record) = node.record {
            let pad = "  ".repeat(indent + 1);
            out.push_str(&format!("{}- Price: ${:.2}\n", pad, record.price));
            out.push_str(&format!("{}- Quantity: {}\n", pad, record.quantity));
        }
        for &child in &node.children {
            self.render_into(child, indent + 1, out);
        }
    }

    pub fn iter(&self) -> CatalogIterator<'_> {
        CatalogIterator::new(self)
    }

    /// Longest path from the root, counted in nodes.
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.arena.get(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Number of product leaves in the hierarchy.
    pub fn product_count(&self) -> usize {
        self.iter().filter(|(_, node)| node.record.is_some()).count()
    }

    fn resolve_category(&mut self, department: &str, category: &str) -> Index {
        let department_idx = self.get_or_create(self.root, department);
        self.get_or_create(department_idx, category)
    }

    fn find_child(&self, parent: Index, name: &str) -> Option<Index> {
        let parent_node = self.arena.get(parent)?;
        parent_node
            .children
            .iter()
            .copied()
            .find(|&child| self.arena.get(child).is_some_and(|node| node.name == name))
    }

    fn child_names(&self, parent: Index) -> Vec<String> {
        match self.arena.get(parent) {
            Some(node) => node
                .children
                .iter()
                .filter_map(|&child| self.arena.get(child).map(|n| n.name.clone()))
                .collect(),
            None => Vec::new(),
        }
    }
}

pub struct CatalogIterator<'a> {
    tree: &'a CatalogTree,
    stack: Vec<Index>,
}

impl<'a> CatalogIterator<'a> {
    fn new(tree: &'a CatalogTree) -> Self {
        Self {
            tree,
            stack: vec![tree.root],
        }
    }
}

impl<'a> Iterator for CatalogIterator<'a> {
    type Item = (Index, &'a CatalogNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
