//! # Tolerance Module
//!
//! Equality and ordering for floating-point prices.
//!
//! ## Why Tolerance?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 == 0.3                     → false  ❌                     │
//! │    1.49 + 2.75 + 5.99 == 10.23          → false  ❌                     │
//! │                                                                         │
//! │  OUR SOLUTION: "close enough" equality                                  │
//! │                                                                         │
//! │    |a - b| < max(EPSILON_ABSOLUTE, EPSILON_RELATIVE × max(|a|, |b|))    │
//! │                                                                         │
//! │    small magnitudes  → absolute tolerance (1e-4)                        │
//! │    large magnitudes  → relative tolerance (1e-8 of the larger value)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every price equality or price-based ordering in the workspace goes
//! through this module. Never compare two prices with `==`.
//!
//! ## Non-finite Input
//! NaN and infinities are outside the domain. Debug builds assert on them;
//! release builds answer `false` from the equality predicates, so a NaN is
//! never "equal" to anything.

use crate::item::WeakOrdering;

// =============================================================================
// Constants
// =============================================================================

/// Absolute tolerance, used when both magnitudes are small.
pub const EPSILON_ABSOLUTE: f64 = 1e-4;

/// Relative tolerance, a fraction of the larger magnitude.
pub const EPSILON_RELATIVE: f64 = 1e-8;

// =============================================================================
// Predicates
// =============================================================================

/// Returns true when `lhs` and `rhs` are equal within the default tolerance.
///
/// ## Example
/// ```rust
/// use cartwheel_core::tolerance::tolerant_eq;
///
/// assert!(tolerant_eq(0.1 + 0.2, 0.3));
/// assert!(tolerant_eq(9.99999, 10.00001));
/// assert!(!tolerant_eq(9.99, 10.00));
/// ```
#[inline]
pub fn tolerant_eq(lhs: f64, rhs: f64) -> bool {
    tolerant_eq_with(lhs, rhs, EPSILON_ABSOLUTE, EPSILON_RELATIVE)
}

/// Same rule as [`tolerant_eq`] with caller-supplied constants.
///
/// The checkout verification uses a looser absolute tolerance (1e-3) than
/// item comparison does.
///
/// ## Example
/// ```rust
/// use cartwheel_core::tolerance::tolerant_eq_with;
///
/// assert!(tolerant_eq_with(35.8905, 35.89, 1e-3, 1e-8));
/// assert!(!tolerant_eq_with(35.8905, 35.89, 1e-4, 1e-8));
/// ```
pub fn tolerant_eq_with(lhs: f64, rhs: f64, absolute: f64, relative: f64) -> bool {
    debug_assert!(
        lhs.is_finite() && rhs.is_finite(),
        "tolerant comparison of non-finite values: {lhs} vs {rhs}"
    );

    let magnitude = lhs.abs().max(rhs.abs());
    (lhs - rhs).abs() < absolute.max(relative * magnitude)
}

/// Three-way comparison of two prices under the default tolerance.
///
/// Tolerant-equal values are `Equivalent`; otherwise the numerically smaller
/// value is `Less`.
///
/// ## Example
/// ```rust
/// use cartwheel_core::tolerance::tolerant_cmp;
/// use cartwheel_core::WeakOrdering;
///
/// assert_eq!(tolerant_cmp(1.49, 2.75), WeakOrdering::Less);
/// assert_eq!(tolerant_cmp(2.75, 2.75000001), WeakOrdering::Equivalent);
/// ```
pub fn tolerant_cmp(lhs: f64, rhs: f64) -> WeakOrdering {
    if tolerant_eq(lhs, rhs) {
        WeakOrdering::Equivalent
    } else if lhs < rhs {
        WeakOrdering::Less
    } else {
        WeakOrdering::Greater
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
