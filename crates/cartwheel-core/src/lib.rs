//! # cartwheel-core: Pure Domain Logic for cartwheel
//!
//! Grocery items, carts and the order-preserving cart transfer. Everything in
//! here is deterministic and free of I/O; the catalog crate owns the files
//! and the checkout app owns the console.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        cartwheel Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 checkout (apps/checkout)                        │   │
//! │  │   demo carts ──► transfer ──► checkout queue ──► receipt        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ cartwheel-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │ tolerance │  │   cart    │  │ transfer  │  │   │
//! │  │   │GroceryItem│  │ tolerant  │  │   Cart    │  │  engine   │  │   │
//! │  │   │  records  │  │   _eq     │  │  CartId   │  │ observers │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO CONSOLE • NO ENVIRONMENT • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            cartwheel-catalog (price database)                   │   │
//! │  │           record files, UPC lookup, shared instance             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tolerance`] - Floating point comparison with an absolute/relative window
//! - [`item`] - `GroceryItem`, its ordering and its record text form
//! - [`cart`] - LIFO carts with stable identity
//! - [`transfer`] - The order-preserving relocation and its observer hook
//! - [`trace`] - Text rendering of a transfer in progress
//! - [`validation`] - Field rules for item data
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cartwheel_core::transfer::{carefully_move, NoopObserver};
//! use cartwheel_core::{Cart, GroceryItem};
//!
//! let mut broken = Cart::with_items([
//!     GroceryItem::new("1", "any", "milk", 3.19),
//!     GroceryItem::new("2", "any", "eggs", 2.75),
//! ]);
//! let mut working = Cart::new();
//!
//! let moves = carefully_move(&mut broken, &mut working, &mut NoopObserver).unwrap();
//!
//! assert_eq!(moves, 3);
//! assert!(broken.is_empty());
//! assert_eq!(working.top().unwrap().product_name(), "eggs");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod item;
pub mod tolerance;
pub mod trace;
pub mod transfer;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartId};
pub use error::{CoreError, CoreResult, ParseError, ValidationError};
pub use item::{records, GroceryItem, RecordReader, WeakOrdering};
pub use tolerance::{tolerant_eq, tolerant_eq_with};
pub use trace::CartTracer;
pub use transfer::{carefully_move, MoveEvent, MoveObserver, NoopObserver, TransferEngine};
