//! The in-memory cart mapping: product id → positive quantity.
//!
//! Invariants:
//! - every stored quantity is strictly positive; a decrement that reaches
//!   zero removes the entry entirely,
//! - every key refers to a product id (membership is enforced by the
//!   callers that hold the catalog; [`Cart::retain_known`] prunes strays
//!   loaded from disk).

use crate::catalog::Catalog;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product id → quantity mapping. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<String, u32>,
}

impl Cart {
    /// Increment the quantity for `id` by one, inserting at 1 if absent.
    pub fn add(&mut self, id: &str) {
        let qty = self.entries.entry(id.to_string()).or_insert(0);
        *qty = qty.saturating_add(1);
    }

    /// Increment an existing entry by one.
    ///
    /// Returns false (and changes nothing) when no entry exists.
    pub fn increment(&mut self, id: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(qty) => {
                *qty = qty.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Decrement an entry by one, removing it when the quantity reaches zero.
    ///
    /// Returns false (and changes nothing) when no entry exists.
    pub fn decrement(&mut self, id: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(qty) => {
                *qty = qty.saturating_sub(1);
                if *qty == 0 {
                    self.entries.remove(id);
                }
                true
            }
            None => false,
        }
    }

    /// Current quantity for `id`, zero when absent.
    #[must_use]
    pub fn quantity(&self, id: &str) -> u32 {
        self.entries.get(id).copied().unwrap_or(0)
    }

    /// Sum of all quantities (the badge number).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.entries.values().map(|&qty| u64::from(qty)).sum()
    }

    /// Sum of price × quantity over all entries, recomputed fresh.
    ///
    /// Entries whose id is unknown to the catalog contribute nothing;
    /// such entries only exist transiently before [`Cart::retain_known`].
    #[must_use]
    pub fn total(&self, catalog: &Catalog) -> Decimal {
        self.entries
            .iter()
            .filter_map(|(id, &qty)| {
                catalog
                    .get(id)
                    .map(|product| product.price * Decimal::from(qty))
            })
            .sum()
    }

    /// Iterate over entries as `(id, quantity)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(id, &qty)| (id.as_str(), qty))
    }

    /// Drop entries that refer to unknown products or carry a zero
    /// quantity. Used when adopting a mapping loaded from disk.
    pub fn retain_known(&mut self, catalog: &Catalog) {
        self.entries
            .retain(|id, qty| *qty > 0 && catalog.contains(id));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Cart;
    use crate::catalog::Catalog;
    use rust_decimal::Decimal;

    #[test]
    fn add_inserts_then_increments() {
        let mut cart = Cart::default();
        cart.add("p3");
        assert_eq!(cart.quantity("p3"), 1);
        cart.add("p3");
        assert_eq!(cart.quantity("p3"), 2);
    }

    #[test]
    fn increment_requires_existing_entry() {
        let mut cart = Cart::default();
        assert!(!cart.increment("p1"));
        assert_eq!(cart.quantity("p1"), 0);

        cart.add("p1");
        assert!(cart.increment("p1"));
        assert_eq!(cart.quantity("p1"), 2);
    }

    #[test]
    fn decrement_at_one_removes_entry() {
        let mut cart = Cart::default();
        cart.add("p1");
        assert!(cart.decrement("p1"));
        assert_eq!(cart.quantity("p1"), 0);
        assert!(cart.is_empty());

        // A second decrement on the now-absent entry is a no-op.
        assert!(!cart.decrement("p1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn add_twice_then_decrement_scenario() {
        let catalog = Catalog::demo();
        let mut cart = Cart::default();
        cart.add("p3");
        cart.add("p3");
        assert!(cart.decrement("p3"));

        assert_eq!(cart.quantity("p3"), 1);
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total(&catalog), Decimal::new(2999, 2));
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let catalog = Catalog::demo();
        let mut cart = Cart::default();
        cart.add("p1"); // 59.99
        cart.add("p1");
        cart.add("p4"); // 49.99

        // 2 × 59.99 + 49.99
        assert_eq!(cart.total(&catalog), Decimal::new(16997, 2));
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn retain_known_prunes_strays_and_zeros() {
        let catalog = Catalog::demo();
        let json = r#"{"p1": 2, "ghost": 1, "p3": 0}"#;
        let mut cart: Cart = serde_json::from_str(json).expect("valid mapping");
        cart.retain_known(&catalog);

        assert_eq!(cart.quantity("p1"), 2);
        assert_eq!(cart.quantity("ghost"), 0);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut cart = Cart::default();
        cart.add("p1");
        cart.add("p1");
        cart.add("p6");

        let json = serde_json::to_string(&cart).expect("cart serializes");
        assert_eq!(json, r#"{"p1":2,"p6":1}"#);
    }
}
