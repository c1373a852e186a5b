//! # Store Module
//!
//! The store aggregate: an ordered product collection, catalog queries,
//! and the order operation that sequences per-product purchases.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store.order(shopping_list)                         │
//! │                                                                         │
//! │  for each line item, in caller order:                                   │
//! │       product.buy(quantity) ──► Ok(price)  ──► total += price          │
//! │                             └─► Err(e)     ──► return Err(e)           │
//! │                                                                         │
//! │  NOT ATOMIC: a failure on line N leaves lines 1..N-1 committed.        │
//! │  There is no rollback; the caller must not assume all-or-nothing       │
//! │  semantics when reporting a failed order.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::CoreResult;
use crate::product::ProductHandle;

// =============================================================================
// Line Item
// =============================================================================

/// One (product, quantity) pair within an order request.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub product: ProductHandle,
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item. Quantity is validated at purchase time, not
    /// here.
    pub fn new(product: ProductHandle, quantity: i64) -> Self {
        LineItem { product, quantity }
    }
}

// =============================================================================
// Store
// =============================================================================

/// A single store's product collection.
///
/// Products are held in insertion order. The store owns the collection
/// but not the products themselves: handles may be shared with callers,
/// and removing a product from the store does not otherwise alter it.
/// Duplicates (by identity or by value) are permitted; nothing here
/// deduplicates.
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Vec<ProductHandle>,
}

impl Store {
    /// Creates a store over an initial product list.
    pub fn new(products: Vec<ProductHandle>) -> Self {
        Store { products }
    }

    /// Appends a product to the collection. No validation, no dedup.
    pub fn add_product(&mut self, product: ProductHandle) {
        self.products.push(product);
    }

    /// Removes the first structurally-equal match from the collection.
    ///
    /// Returns `false` when no product matches. The removed product is
    /// not otherwise altered; callers holding a handle keep a live
    /// product.
    pub fn remove_product(&mut self, product: &ProductHandle) -> bool {
        match self.products.iter().position(|p| p == product) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of products in the collection, active or not.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total stock across ALL products, active and inactive alike.
    pub fn total_quantity(&self) -> i64 {
        self.products.iter().map(|p| p.quantity()).sum()
    }

    /// The active products, in store order.
    ///
    /// Returns a fresh snapshot sequence each call, not a live view; the
    /// handles inside it still point at the live products.
    pub fn active_products(&self) -> Vec<ProductHandle> {
        self.products
            .iter()
            .filter(|p| p.is_active())
            .cloned()
            .collect()
    }

    /// Processes a shopping list, returning the charged grand total.
    ///
    /// Line items are purchased in caller-supplied order and their
    /// charged prices accumulated. The operation fails fast on the first
    /// purchase error and performs NO rollback: stock mutations from
    /// earlier line items remain committed (see the module header).
    pub fn order(&self, shopping_list: &[LineItem]) -> CoreResult<f64> {
        let mut total = 0.0;

        for line in shopping_list {
            total += line.product.buy(line.quantity)?;
        }

        Ok(total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::product::Product;
    use crate::promotion::Promotion;

    fn test_store() -> Store {
        Store::new(vec![
            ProductHandle::new(Product::new("MacBook Air M2", 1450.0, 100).unwrap()),
            ProductHandle::new(Product::new("Bose Earbuds", 250.0, 500).unwrap()),
            ProductHandle::new(Product::new("Google Pixel 7", 500.0, 250).unwrap()),
        ])
    }

    #[test]
    fn test_add_and_remove_product() {
        let mut store = test_store();
        let product = ProductHandle::new(Product::non_stocked("Windows License", 125.0).unwrap());

        store.add_product(product.clone());
        assert_eq!(store.len(), 4);

        assert!(store.remove_product(&product));
        assert_eq!(store.len(), 3);

        // Absent product: quiet false, nothing removed.
        assert!(!store.remove_product(&product));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_matches_structurally() {
        let mut store = test_store();
        // A distinct instance with equal fields matches the stored one.
        let twin = ProductHandle::new(Product::new("Bose Earbuds", 250.0, 500).unwrap());
        assert!(store.remove_product(&twin));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_total_quantity_counts_inactive() {
        let store = test_store();
        assert_eq!(store.total_quantity(), 850);

        // Deactivation does not change the total: it sums ALL products.
        store.active_products()[0].deactivate();
        assert_eq!(store.total_quantity(), 850);
    }

    #[test]
    fn test_active_products_filters_and_preserves_order() {
        let store = test_store();
        let all = store.active_products();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name(), "MacBook Air M2");
        assert_eq!(all[2].name(), "Google Pixel 7");

        all[1].deactivate();
        let filtered = store.active_products();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name(), "MacBook Air M2");
        assert_eq!(filtered[1].name(), "Google Pixel 7");
    }

    #[test]
    fn test_active_products_is_idempotent() {
        let store = test_store();
        let first = store.active_products();
        let second = store.active_products();
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_accumulates_total() {
        let store = test_store();
        let products = store.active_products();

        let total = store
            .order(&[
                LineItem::new(products[0].clone(), 2),
                LineItem::new(products[1].clone(), 3),
            ])
            .unwrap();

        assert_eq!(total, 1450.0 * 2.0 + 250.0 * 3.0);
        assert_eq!(products[0].quantity(), 98);
        assert_eq!(products[1].quantity(), 497);
    }

    #[test]
    fn test_order_applies_promotions() {
        let store = test_store();
        let products = store.active_products();
        products[2].set_promotion(Some(Promotion::BuyTwoGetOneFree));

        let total = store
            .order(&[LineItem::new(products[2].clone(), 3)])
            .unwrap();
        assert_eq!(total, 1000.0); // pay for 2 of 3
    }

    #[test]
    fn test_order_failure_keeps_earlier_mutations() {
        let store = test_store();
        let products = store.active_products();

        let err = store
            .order(&[
                LineItem::new(products[0].clone(), 2),
                LineItem::new(products[1].clone(), 1_000_000),
            ])
            .unwrap_err();

        assert!(matches!(err, StoreError::InsufficientStock { .. }));
        // The first line committed and is NOT rolled back.
        assert_eq!(products[0].quantity(), 98);
        // The failing line never mutated its product.
        assert_eq!(products[1].quantity(), 500);
    }

    #[test]
    fn test_order_duplicate_lines_hit_same_stock() {
        let store = test_store();
        let products = store.active_products();

        let total = store
            .order(&[
                LineItem::new(products[0].clone(), 2),
                LineItem::new(products[0].clone(), 3),
            ])
            .unwrap();
        assert_eq!(total, 1450.0 * 5.0);
        assert_eq!(products[0].quantity(), 95);
    }

    #[test]
    fn test_empty_order_is_free() {
        let store = test_store();
        assert_eq!(store.order(&[]).unwrap(), 0.0);
    }
}
