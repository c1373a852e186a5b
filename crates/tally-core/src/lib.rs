//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally, a single-store retail
//! pricing/inventory engine. It contains all business logic as pure,
//! synchronous functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (tally-cli)                         │   │
//! │  │    menu loop ──► input parsing ──► rendering                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │ promotion │  │   store   │  │  catalog  │  │   │
//! │  │   │  Product  │  │ Promotion │  │   Store   │  │  Catalog  │  │   │
//! │  │   │  variants │  │ discounts │  │   order   │  │ bootstrap │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • SINGLE-THREADED          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The product entity, its variants, and the purchase contract
//! - [`promotion`] - Pluggable pricing promotions
//! - [`store`] - The store aggregate and the order operation
//! - [`catalog`] - Declarative catalog bootstrap
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **No I/O**: database, network, and file system access are forbidden here
//! 2. **Explicit Errors**: all failures are typed enum variants, never strings
//!    or panics
//! 3. **Single logical caller**: operations are synchronous with no suspension
//!    points; concurrent access needs external locking
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{LineItem, Product, ProductHandle, Promotion, Store};
//!
//! let laptop = ProductHandle::new(Product::new("MacBook Air M2", 1450.0, 100).unwrap());
//! laptop.set_promotion(Some(Promotion::percentage_discount(10.0)));
//!
//! let store = Store::new(vec![laptop.clone()]);
//! let total = store.order(&[LineItem::new(laptop.clone(), 1)]).unwrap();
//!
//! assert_eq!(total, 1305.0);
//! assert_eq!(laptop.quantity(), 99);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod product;
pub mod promotion;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Store` instead of
// `use tally_core::store::Store`

pub use catalog::{Catalog, ProductConfig};
pub use error::{CoreResult, StoreError, ValidationError};
pub use product::{Product, ProductHandle, ProductKind};
pub use promotion::Promotion;
pub use store::{LineItem, Store};
