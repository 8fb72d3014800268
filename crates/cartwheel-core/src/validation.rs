//! # Validation Module
//!
//! Field checks for grocery item data.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Record reader (item.rs)                                      │
//! │  └── Structure: quotes, commas, a finite decimal price                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── UPC format (digits only, bounded length)                          │
//! │  └── Price domain (finite, not negative)                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Catalog ingest logs violations but keeps the record:                  │
//! │  the domain rules are advisory, not enforced                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest UPC accepted (GTIN-14).
pub const MAX_UPC_LENGTH: usize = 14;

/// Validates a UPC code.
///
/// ## Rules
/// - Must not be empty
/// - At most 14 characters
/// - ASCII digits only
///
/// ## Example
/// ```rust
/// use cartwheel_core::validation::validate_upc;
///
/// assert!(validate_upc("00688267039317").is_ok());
/// assert!(validate_upc("").is_err());
/// assert!(validate_upc("ABC-123").is_err());
/// ```
pub fn validate_upc(upc: &str) -> ValidationResult<()> {
    if upc.is_empty() {
        return Err(ValidationError::Required {
            field: "upc".to_string(),
        });
    }

    if upc.len() > MAX_UPC_LENGTH {
        return Err(ValidationError::TooLong {
            field: "upc".to_string(),
            max: MAX_UPC_LENGTH,
        });
    }

    if !upc.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "upc".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative; zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use cartwheel_core::validation::validate_price;
///
/// assert!(validate_price(10.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    validate_amount("price", price)?;

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a monetary amount that may be negative (e.g. an expected total).
pub fn validate_amount(field: &str, amount: f64) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_upc() {
        assert!(validate_upc("00075457129000").is_ok());
        assert!(validate_upc("123").is_ok());

        assert!(matches!(
            validate_upc(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_upc("000754571290001"),
            Err(ValidationError::TooLong { max: 14, .. })
        ));
        assert!(matches!(
            validate_upc("0007 5457"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(1099.99).is_ok());
        assert!(matches!(
            validate_price(-0.01),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_price(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("expected total", -5.0).is_ok());
        assert!(validate_amount("expected total", f64::NAN).is_err());
    }
}
