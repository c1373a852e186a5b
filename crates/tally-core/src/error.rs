//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                          │
//! │  ├── StoreError       - Purchase/catalog rule violations                │
//! │  └── ValidationError  - Malformed input (construction, quantities)      │
//! │                                                                         │
//! │  CLI (apps/cli)                                                         │
//! │  └── prints the Display message and re-prompts                          │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → caller                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, amounts)
//! 3. Errors are enum variants, never String
//! 4. Every variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Business rule violations raised by products and the store.
///
/// All variants are raised synchronously at the point of violation and
/// propagate unmodified through `Store::order`. The core performs no
/// recovery; the caller (the CLI) is the sole recovery point.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Purchase attempted on a deactivated product.
    ///
    /// Stocked products deactivate automatically when their quantity
    /// reaches zero, so this is also the error a sold-out product
    /// produces on the next purchase attempt.
    #[error("product {name} is not active")]
    NotActive { name: String },

    /// Purchase quantity exceeds the current stock level.
    #[error("insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Purchase quantity exceeds a limited product's per-order maximum.
    ///
    /// Checked before the stock level, so a request violating both the
    /// cap and the stock reports the cap.
    #[error("cannot buy more than {maximum} of {name} per order, requested {requested}")]
    LimitExceeded {
        name: String,
        maximum: i64,
        requested: i64,
    },

    /// The operation does not apply to this product variant.
    ///
    /// Raised when setting a quantity on a non-stocked product, which has
    /// no stock concept.
    #[error("cannot {operation} for non-stocked product {name}")]
    UnsupportedOperation { operation: String, name: String },

    /// Catalog configuration could not be parsed.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These cover malformed constructor input (empty name, negative price or
/// quantity) and non-positive purchase quantities. Used for early
/// validation before any state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type CoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::InsufficientStock {
            name: "Google Pixel 7".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for Google Pixel 7: available 3, requested 5"
        );

        let err = StoreError::LimitExceeded {
            name: "Shipping".to_string(),
            maximum: 1,
            requested: 2,
        };
        assert_eq!(
            err.to_string(),
            "cannot buy more than 1 of Shipping per order, requested 2"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price cannot be negative");
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let store_err: StoreError = validation_err.into();
        assert!(matches!(store_err, StoreError::Validation(_)));
    }
}
