//! # Checkout Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Checkout                                       │
//! │                                                                         │
//! │  broken cart (eggs on top, milk at the bottom)                         │
//! │       │  carefully_move + CartTracer                                    │
//! │       ▼                                                                 │
//! │  working cart (same order)                                             │
//! │       │  drain top-down                                                 │
//! │       ▼                                                                 │
//! │  checkout line (FIFO: eggs first)                                      │
//! │       │  Catalog::find(upc) per item                                    │
//! │       ▼                                                                 │
//! │  Receipt ──► total ──► compared with the expected amount               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, info, warn};

use cartwheel_catalog::sample::demo_items;
use cartwheel_catalog::Catalog;
use cartwheel_core::transfer::{carefully_move, NoopObserver};
use cartwheel_core::{tolerant_eq, tolerant_eq_with, Cart, CartTracer, CoreResult, GroceryItem};

use crate::receipt::{Receipt, ReceiptLine};

/// Relative tolerance for the total check.
pub const TOTAL_RELATIVE_TOLERANCE: f64 = 1e-8;

/// The demo cart: eggs on top, milk at the bottom.
pub fn broken_cart() -> Cart {
    // heaviest first so the lightest ends up on top
    Cart::with_items(demo_items().into_iter().rev())
}

/// Moves everything from `broken` onto a fresh cart, order preserved.
///
/// Each frame of the move is handed to `trace` when given.
pub fn rescue_cart(broken: &mut Cart, trace: Option<&mut dyn FnMut(String)>) -> CoreResult<Cart> {
    let mut working = Cart::new();

    let moves = match trace {
        Some(sink) => {
            let mut tracer = CartTracer::new().with_sink(sink);
            carefully_move(broken, &mut working, &mut tracer)?
        }
        None => carefully_move(broken, &mut working, &mut NoopObserver)?,
    };

    info!(moves, items = working.len(), "Groceries moved to a working cart");
    Ok(working)
}

/// Unloads the cart top item first, which is the order they reach the belt.
pub fn checkout_line(cart: Cart) -> VecDeque<GroceryItem> {
    cart.into_iter().collect()
}

/// Scans every item in the line against the catalog.
pub fn ring_up(mut line: VecDeque<GroceryItem>, catalog: &Catalog) -> Receipt {
    let mut receipt = Receipt::new();

    while let Some(on_belt) = line.pop_front() {
        match catalog.find(on_belt.upc_code()) {
            Some(found) => {
                debug!(upc = %found.upc_code(), price = found.price(), "Item scanned");
                receipt.push(ReceiptLine::Found {
                    item: found.clone(),
                });
            }
            None => {
                warn!(upc = %on_belt.upc_code(), product = %on_belt.product_name(), "Item not in catalog");
                let (upc, _, product_name, _) = on_belt.into_parts();
                receipt.push(ReceiptLine::NotFound { upc, product_name });
            }
        }
    }

    receipt
}

/// Outcome of comparing the receipt total with what the customer expected.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Verification {
    pub total: f64,
    pub expected: f64,
    pub passed: bool,
}

impl Verification {
    pub fn check(total: f64, expected: f64, tolerance: f64) -> Self {
        Verification {
            total,
            expected,
            passed: tolerant_eq_with(total, expected, tolerance, TOTAL_RELATIVE_TOLERANCE),
        }
    }

    /// The line reported on stderr.
    pub fn summary(&self) -> &'static str {
        if self.passed {
            "PASS - Amount matches expected."
        } else {
            "FAIL - Mismatch in amounts."
        }
    }
}

/// Amounts are compared with the price tolerance.
impl PartialEq for Verification {
    fn eq(&self, other: &Self) -> bool {
        self.passed == other.passed
            && tolerant_eq(self.total, other.total)
            && tolerant_eq(self.expected, other.expected)
    }
}
