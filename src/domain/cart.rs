use generational_arena::{Arena, Index};

/// Single unit of a product selected for purchase.
#[derive(Debug)]
struct CartEntry {
    /// Product identifier as named in the catalog
    product: String,
    /// Index of the successor entry, None for the tail
    next: Option<Index>,
}

/// Ordered multiset of product identifiers, stored as a singly linked
/// chain over a generational arena.
///
/// The head index owns the first entry and each entry owns its successor
/// link, so the chain is acyclic by construction. Duplicate identifiers
/// are independent units added at different times.
#[derive(Debug)]
pub struct Cart {
    arena: Arena<CartEntry>,
    head: Option<Index>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of entries currently in the cart.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Appends one unit of `item` at the tail, preserving arrival order.
    pub fn add(&mut self, item: &str) {
        let entry = self.arena.insert(CartEntry {
            product: item.to_string(),
            next: None,
        });
        match self.tail() {
            Some(tail) => self.arena[tail].next = Some(entry),
            None => self.head = Some(entry),
        }
    }

    /// Unlinks the first entry whose identifier equals `item` exactly.
    ///
    /// Returns true when an entry was removed. With duplicates present,
    /// each call removes only the earliest remaining unit.
    pub fn remove(&mut self, item: &str) -> bool {
        let mut previous: Option<Index> = None;
        let mut current = self.head;
        while let Some(idx) = current {
            if self.arena[idx].product == item {
                let next = self.arena[idx].next;
                match previous {
                    Some(prev_idx) => self.arena[prev_idx].next = next,
                    None => self.head = next,
                }
                self.arena.remove(idx);
                return true;
            }
            previous = current;
            current = self.arena[idx].next;
        }
        false
    }

    /// Materialized snapshot of identifiers in cart order, duplicates
    /// included.
    pub fn items(&self) -> Vec<String> {
        self.iter().map(String::from).collect()
    }

    pub fn iter(&self) -> CartIterator<'_> {
        CartIterator {
            cart: self,
            current: self.head,
        }
    }

    /// Drops the whole chain at once.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
    }

    fn tail(&self) -> Option<Index> {
        let mut current = self.head?;
        while let Some(next) = self.arena[current].next {
            current = next;
        }
        Some(current)
    }
}

pub struct CartIterator<'a> {
    cart: &'a Cart,
    current: Option<Index>,
}

impl<'a> Iterator for CartIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let entry = self.cart.arena.get(idx)?;
        self.current = entry.next;
        Some(entry.product.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_links_at_tail() {
        let mut cart = Cart::new();
        cart.add("milk");
        cart.add("bread");
        assert_eq!(cart.items(), vec!["milk", "bread"]);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_remove_relinks_predecessor() {
        let mut cart = Cart::new();
        cart.add("a");
        cart.add("b");
        cart.add("c");
        assert!(cart.remove("b"));
        assert_eq!(cart.items(), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_head_moves_head_link() {
        let mut cart = Cart::new();
        cart.add("a");
        cart.add("b");
        assert!(cart.remove("a"));
        assert_eq!(cart.items(), vec!["b"]);
        assert!(cart.remove("b"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_resets_head_and_storage() {
        let mut cart = Cart::new();
        cart.add("a");
        cart.add("a");
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }
}
