//! # Error Types
//!
//! Domain-specific error types for cartwheel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cartwheel-core errors (this file)                                     │
//! │  ├── CoreError        - Transfer / tracer / cart / validation failures │
//! │  ├── ParseError       - Record text form could not be read             │
//! │  └── ValidationError  - Field value outside the domain                 │
//! │                                                                         │
//! │  cartwheel-catalog errors (separate crate)                             │
//! │  └── CatalogError     - Catalog file could not be read or written      │
//! │                                                                         │
//! │  checkout app                                                          │
//! │  └── anyhow::Error    - Reported once at the process boundary          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (UPC, byte offset, cart id)
//! 3. Errors are enum variants, never String
//! 4. "Not found" is never an error here: lookups return `Option`

use thiserror::Error;

use crate::cart::CartId;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These represent programming-usage faults or broken preconditions. An
/// ordinary catalog miss is *not* one of these.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A transfer asked for more items than the source cart holds.
    ///
    /// ## When This Occurs
    /// - `TransferEngine::relocate(5, ..)` on a cart holding 3 items
    #[error("Cannot move {requested} items: source cart {cart} holds only {available}")]
    NotEnoughItems {
        cart: CartId,
        requested: usize,
        available: usize,
    },

    /// A single-item move was attempted from an empty cart.
    #[error("Cart {0} is empty, nothing to move")]
    EmptyCart(CartId),

    /// The cart tracer was handed carts it cannot place.
    ///
    /// ## When This Occurs
    /// - First observation where neither "destination and spare empty" nor
    ///   "only destination non-empty" holds
    /// - A later observation mentions a cart that was not part of the first one
    #[error("Invalid argument: {0}")]
    TracerUsage(String),

    /// A field value breaks a domain rule.
    ///
    /// ## When This Occurs
    /// - `GroceryItem::validate` on a negative price or a non-numeric UPC
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Parse Error
// =============================================================================

/// Failures while reading the record text form.
///
/// Offsets are byte positions into the text handed to the reader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended in the middle of a record.
    #[error("unexpected end of input while reading {field}")]
    UnexpectedEnd { field: &'static str },

    /// A string field did not start with a double quote.
    #[error("expected '\"' to open {field} at byte {offset}")]
    ExpectedQuote { field: &'static str, offset: usize },

    /// A string field was opened but never closed.
    #[error("unterminated {field} starting at byte {offset}")]
    UnterminatedString { field: &'static str, offset: usize },

    /// The comma separating two fields is missing.
    #[error("expected ',' after {field} at byte {offset}")]
    ExpectedComma { field: &'static str, offset: usize },

    /// The price is not a finite decimal number.
    #[error("invalid price '{text}' at byte {offset}")]
    InvalidPrice { text: String, offset: usize },

    /// Extra characters follow a single record.
    #[error("unexpected trailing input at byte {offset}")]
    TrailingInput { offset: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. letters inside a UPC).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// NaN or infinite floating value.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let cart = CartId::new();
        let err = CoreError::NotEnoughItems {
            cart,
            requested: 5,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            format!("Cannot move 5 items: source cart {} holds only 3", cart)
        );
    }

    #[test]
    fn test_parse_error_messages() {
        let err = ParseError::ExpectedComma {
            field: "brand name",
            offset: 17,
        };
        assert_eq!(err.to_string(), "expected ',' after brand name at byte 17");

        let err = ParseError::InvalidPrice {
            text: "abc".to_string(),
            offset: 40,
        };
        assert_eq!(err.to_string(), "invalid price 'abc' at byte 40");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let err: CoreError = ValidationError::NotFinite {
            field: "price".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: price must be a finite number");
    }
}
