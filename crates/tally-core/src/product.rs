//! # Product Module
//!
//! The sellable product entity: stock, activation state, promotion
//! attachment, and the purchase contract.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Product.buy(quantity)                              │
//! │                                                                         │
//! │  1. quantity <= 0?        ──► Validation error (all variants)          │
//! │  2. Limited: over maximum? ──► LimitExceeded  (before stock check)     │
//! │  3. Stocked: inactive?     ──► NotActive      (before stock check)     │
//! │             over stock?    ──► InsufficientStock                       │
//! │  4. Stocked: decrement stock; deactivate at exactly 0                  │
//! │  5. Charge: promotion.apply(price, qty)  or  price * qty               │
//! │                                                                         │
//! │  Check order is part of the contract: a request violating both the     │
//! │  cap and the stock must report LimitExceeded.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::error::{CoreResult, StoreError};
use crate::promotion::Promotion;
use crate::validation::{
    validate_price, validate_product_name, validate_purchase_quantity, validate_quantity,
};

// =============================================================================
// Product Kind
// =============================================================================

/// Stock-tracking behavior of a product.
///
/// Each variant overrides only its legality-check step of the purchase;
/// the stock mutation itself is shared (see `Product::take_stock`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Quantity-tracked, deactivates at zero, no purchase cap.
    Standard,

    /// No stock concept (digital license, service fee). Quantity is
    /// fixed at the 0 sentinel, the product is constructed active, and
    /// setting a quantity is rejected.
    NonStocked,

    /// Standard stock tracking plus a per-purchase cap.
    Limited { maximum: i64 },
}

// =============================================================================
// Product
// =============================================================================

/// A product in the store.
///
/// ## Invariants
/// - `price >= 0` always (enforced at construction)
/// - `quantity >= 0` always; a purchase never drives it below 0
/// - Standard/Limited: `active == false` whenever `quantity == 0`
/// - `name` is immutable after creation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    price: f64,
    quantity: i64,
    active: bool,
    promotion: Option<Promotion>,
    kind: ProductKind,
}

impl Product {
    /// Creates a standard quantity-tracked product.
    ///
    /// Fails if the name is empty, the price is negative, or the
    /// quantity is negative. A product created with zero stock starts
    /// deactivated.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Product;
    ///
    /// let product = Product::new("MacBook Air M2", 1450.0, 100).unwrap();
    /// assert!(product.is_active());
    /// assert_eq!(product.quantity(), 100);
    /// ```
    pub fn new(name: &str, price: f64, quantity: i64) -> CoreResult<Self> {
        Self::build(name, price, quantity, ProductKind::Standard)
    }

    /// Creates a non-stocked product (digital license, service).
    ///
    /// Always active; the quantity sentinel is fixed at 0.
    pub fn non_stocked(name: &str, price: f64) -> CoreResult<Self> {
        let mut product = Self::build(name, price, 0, ProductKind::NonStocked)?;
        product.active = true;
        Ok(product)
    }

    /// Creates a stock-tracked product with a per-purchase maximum.
    ///
    /// The maximum is pass-through input and is not validated; a
    /// nonsensical cap simply makes every purchase fail the cap check.
    pub fn limited(name: &str, price: f64, quantity: i64, maximum: i64) -> CoreResult<Self> {
        Self::build(name, price, quantity, ProductKind::Limited { maximum })
    }

    fn build(name: &str, price: f64, quantity: i64, kind: ProductKind) -> CoreResult<Self> {
        validate_product_name(name)?;
        validate_price(price)?;
        validate_quantity(quantity)?;

        Ok(Product {
            name: name.to_string(),
            price,
            quantity,
            active: quantity > 0,
            promotion: None,
            kind,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The product name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit price.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Current stock level. Non-stocked products return 0 by convention.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// The stock-tracking variant of this product.
    #[inline]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Whether the product can currently be purchased (stocked variants).
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The attached promotion, if any.
    #[inline]
    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Activates the product. Unconditional flag set, no validation.
    #[inline]
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Deactivates the product. Unconditional flag set, no validation.
    #[inline]
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Sets the stock level.
    ///
    /// Fails on negative quantities. Setting the quantity to exactly 0
    /// deactivates the product. Non-stocked products reject this
    /// operation outright, before any validation.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        if self.kind == ProductKind::NonStocked {
            return Err(StoreError::UnsupportedOperation {
                operation: "set quantity".to_string(),
                name: self.name.clone(),
            });
        }

        validate_quantity(quantity)?;

        self.quantity = quantity;
        if self.quantity == 0 {
            self.deactivate();
        }
        Ok(())
    }

    /// Attaches a promotion, or detaches the current one with `None`.
    ///
    /// No validation on attach; the same promotion value may be attached
    /// to any number of products.
    #[inline]
    pub fn set_promotion(&mut self, promotion: Option<Promotion>) {
        self.promotion = promotion;
    }

    // -------------------------------------------------------------------------
    // Purchase
    // -------------------------------------------------------------------------

    /// Buys `quantity` units, returning the charged total.
    ///
    /// All legality checks run before any state is mutated, in the order
    /// documented in the module header. On success the stocked variants
    /// decrement their stock and deactivate at exactly 0; the charged
    /// total is the attached promotion's result when one is present,
    /// otherwise `price * quantity`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Product;
    ///
    /// let mut product = Product::new("Google Pixel 7", 500.0, 250).unwrap();
    /// let total = product.buy(2).unwrap();
    /// assert_eq!(total, 1000.0);
    /// assert_eq!(product.quantity(), 248);
    /// ```
    pub fn buy(&mut self, quantity: i64) -> CoreResult<f64> {
        validate_purchase_quantity(quantity)?;

        match self.kind {
            // No stock or activity gate: non-stocked products are
            // constructed active and sell in any quantity.
            ProductKind::NonStocked => {}
            ProductKind::Limited { maximum } => {
                if quantity > maximum {
                    return Err(StoreError::LimitExceeded {
                        name: self.name.clone(),
                        maximum,
                        requested: quantity,
                    });
                }
                self.take_stock(quantity)?;
            }
            ProductKind::Standard => self.take_stock(quantity)?,
        }

        Ok(self.charge(quantity))
    }

    /// Shared stock mutation for the stocked variants: activity gate,
    /// stock-sufficiency gate, decrement, deactivate at 0.
    fn take_stock(&mut self, quantity: i64) -> CoreResult<()> {
        if !self.active {
            return Err(StoreError::NotActive {
                name: self.name.clone(),
            });
        }
        if quantity > self.quantity {
            return Err(StoreError::InsufficientStock {
                name: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }

        self.quantity -= quantity;
        if self.quantity == 0 {
            self.deactivate();
        }
        Ok(())
    }

    /// Charged total for `quantity` units. An attached promotion
    /// REPLACES the plain computation; it is not additive.
    fn charge(&self, quantity: i64) -> f64 {
        match &self.promotion {
            Some(promotion) => promotion.apply(self.price, quantity),
            None => self.price * quantity as f64,
        }
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// Human-readable one-line summary with variant-specific fields and
    /// the promotion label if one is attached.
    pub fn display(&self) -> String {
        let mut line = match self.kind {
            ProductKind::Standard => {
                format!("{}, Price: {}, Quantity: {}", self.name, self.price, self.quantity)
            }
            ProductKind::NonStocked => {
                format!("{}, Price: {} (Non-stocked)", self.name, self.price)
            }
            ProductKind::Limited { maximum } => format!(
                "{}, Price: {}, Quantity: {}, Max per order: {}",
                self.name, self.price, self.quantity, maximum
            ),
        };
        if let Some(promotion) = &self.promotion {
            line.push_str(&format!(", Promotion: {}", promotion.label()));
        }
        line
    }
}

// =============================================================================
// Product Handle
// =============================================================================

/// Shared, mutable reference to a product.
///
/// The store, a caller-built shopping list, and a catalog snapshot may
/// all reference the same product; a purchase through any of them must
/// be visible through the others. The engine is single-threaded with no
/// suspension points, so `Rc<RefCell<_>>` carries that shared identity;
/// callers adding threads must add external locking.
#[derive(Debug, Clone)]
pub struct ProductHandle(Rc<RefCell<Product>>);

impl ProductHandle {
    /// Wraps a product in a shared handle.
    pub fn new(product: Product) -> Self {
        ProductHandle(Rc::new(RefCell::new(product)))
    }

    /// Buys `quantity` units. See [`Product::buy`].
    pub fn buy(&self, quantity: i64) -> CoreResult<f64> {
        self.0.borrow_mut().buy(quantity)
    }

    /// The product name.
    pub fn name(&self) -> String {
        self.0.borrow().name().to_string()
    }

    /// Current stock level.
    pub fn quantity(&self) -> i64 {
        self.0.borrow().quantity()
    }

    /// Whether the product is active.
    pub fn is_active(&self) -> bool {
        self.0.borrow().is_active()
    }

    /// Activates the product.
    pub fn activate(&self) {
        self.0.borrow_mut().activate();
    }

    /// Deactivates the product.
    pub fn deactivate(&self) {
        self.0.borrow_mut().deactivate();
    }

    /// Sets the stock level. See [`Product::set_quantity`].
    pub fn set_quantity(&self, quantity: i64) -> CoreResult<()> {
        self.0.borrow_mut().set_quantity(quantity)
    }

    /// Attaches or detaches a promotion.
    pub fn set_promotion(&self, promotion: Option<Promotion>) {
        self.0.borrow_mut().set_promotion(promotion);
    }

    /// Human-readable one-line summary. See [`Product::display`].
    pub fn display(&self) -> String {
        self.0.borrow().display()
    }

    /// Runs `f` with read access to the product.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Product) -> R,
    {
        f(&self.0.borrow())
    }

    /// Runs `f` with write access to the product.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Product) -> R,
    {
        f(&mut self.0.borrow_mut())
    }

    /// Whether two handles point at the same product instance.
    pub fn same_product(&self, other: &ProductHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Structural equality: two handles compare equal when the products they
/// point at are field-for-field equal, whether or not they are the same
/// instance. Store removal matches on this.
impl PartialEq for ProductHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_product(other) || *self.0.borrow() == *other.0.borrow()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
