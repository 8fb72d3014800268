//! # Transfer Engine
//!
//! Relocates a stack of items between carts without changing their order,
//! one item at a time, using a third cart as scratch space.
//!
//! ## The Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  relocate(n, source, destination, spare)                                │
//! │                                                                         │
//! │    n = 0  → nothing to do                                               │
//! │    n = 1  → move top of source onto destination, notify observer        │
//! │    n > 1  → relocate(n-1, source, spare, destination)                   │
//! │             move top of source onto destination, notify observer        │
//! │             relocate(n-1, spare, destination, source)                   │
//! │                                                                         │
//! │  Before:   source: A B C     destination: -       spare: -             │
//! │  After:    source: -         destination: A B C   spare: -             │
//! │            (top first)                                                  │
//! │                                                                         │
//! │  Moves:    exactly 2^n - 1, i.e. O(2^n). This is the three-peg puzzle   │
//! │            and the exponential cost is the point, not a defect.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - An item is popped before it is pushed; it never sits in two carts.
//! - No item is lost or duplicated.
//! - Reading any cart top-down, the relocated items appear in their original
//!   top-down order.
//!
//! Recursion depth equals `n`. Since the move count doubles with every item,
//! the move count becomes impractical long before the depth matters.

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};

// =============================================================================
// Observation
// =============================================================================

/// The three carts in the roles they play at one moment of a transfer.
#[derive(Debug, Clone, Copy)]
pub struct CartRoles<'a> {
    pub source: &'a Cart,
    pub destination: &'a Cart,
    pub spare: &'a Cart,
}

impl<'a> CartRoles<'a> {
    /// `[source, destination, spare]`
    pub fn carts(&self) -> [&'a Cart; 3] {
        [self.source, self.destination, self.spare]
    }

    /// Total number of items across the three carts.
    pub fn item_count(&self) -> usize {
        self.carts().iter().map(|cart| cart.len()).sum()
    }
}

/// Notification sent after every single-item move.
#[derive(Debug, Clone, Copy)]
pub struct MoveEvent<'a> {
    /// Zero-based index of the move that just completed.
    pub sequence: u64,
    /// Carts in their roles for the recursive call that made the move.
    pub carts: CartRoles<'a>,
}

/// Hook invoked synchronously while a transfer runs.
///
/// Returning an error aborts the transfer; the error surfaces from
/// [`TransferEngine::relocate`] unchanged.
pub trait MoveObserver {
    /// Called once before the first move of a top-level transfer.
    fn on_start(&mut self, _carts: &CartRoles<'_>) -> CoreResult<()> {
        Ok(())
    }

    /// Called after every single-item move.
    fn on_move(&mut self, event: &MoveEvent<'_>) -> CoreResult<()>;
}

impl<F> MoveObserver for F
where
    F: FnMut(&MoveEvent<'_>) -> CoreResult<()>,
{
    fn on_move(&mut self, event: &MoveEvent<'_>) -> CoreResult<()> {
        self(event)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MoveObserver for NoopObserver {
    fn on_move(&mut self, _event: &MoveEvent<'_>) -> CoreResult<()> {
        Ok(())
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Runs relocations and counts the moves they make.
///
/// ## Example
/// ```rust
/// use cartwheel_core::transfer::{NoopObserver, TransferEngine};
/// use cartwheel_core::{Cart, GroceryItem};
///
/// let mut source = Cart::with_items(["C", "B", "A"].map(|n| GroceryItem::new("0", "", n, 1.0)));
/// let mut destination = Cart::new();
/// let mut spare = Cart::new();
///
/// let mut observer = NoopObserver;
/// let mut engine = TransferEngine::new(&mut observer);
/// engine.relocate(3, &mut source, &mut destination, &mut spare).unwrap();
///
/// assert_eq!(engine.moves(), 7);
/// assert_eq!(destination.top().unwrap().product_name(), "A");
/// ```
pub struct TransferEngine<'o, O: MoveObserver + ?Sized> {
    observer: &'o mut O,
    moves: u64,
}

impl<'o, O: MoveObserver + ?Sized> TransferEngine<'o, O> {
    pub fn new(observer: &'o mut O) -> Self {
        TransferEngine { observer, moves: 0 }
    }

    /// Moves made so far, across every `relocate` call on this engine.
    #[inline]
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Moves the top `count` items of `source` onto `destination`, keeping
    /// their order, with `spare` as scratch space.
    ///
    /// ## Errors
    /// - `NotEnoughItems` if `source` holds fewer than `count` items
    /// - whatever the observer returns
    pub fn relocate(
        &mut self,
        count: usize,
        source: &mut Cart,
        destination: &mut Cart,
        spare: &mut Cart,
    ) -> CoreResult<()> {
        if count > source.len() {
            return Err(CoreError::NotEnoughItems {
                cart: source.id(),
                requested: count,
                available: source.len(),
            });
        }

        self.relocate_top(count, source, destination, spare)
    }

    fn relocate_top(
        &mut self,
        count: usize,
        source: &mut Cart,
        destination: &mut Cart,
        spare: &mut Cart,
    ) -> CoreResult<()> {
        match count {
            0 => Ok(()),
            1 => self.move_one(source, destination, spare),
            _ => {
                // destination and spare swap roles for the sub-call
                self.relocate_top(count - 1, source, spare, destination)?;
                self.move_one(source, destination, spare)?;
                self.relocate_top(count - 1, spare, destination, source)
            }
        }
    }

    fn move_one(&mut self, source: &mut Cart, destination: &mut Cart, spare: &mut Cart) -> CoreResult<()> {
        source.move_top_to(destination)?;

        let event = MoveEvent {
            sequence: self.moves,
            carts: CartRoles {
                source,
                destination,
                spare,
            },
        };
        self.moves += 1;
        self.observer.on_move(&event)
    }
}

/// Moves every item of `from` onto `to`, preserving order.
///
/// Allocates the spare cart, announces the starting state with
/// [`MoveObserver::on_start`] and returns the number of moves made.
pub fn carefully_move<O: MoveObserver + ?Sized>(
    from: &mut Cart,
    to: &mut Cart,
    observer: &mut O,
) -> CoreResult<u64> {
    let mut spare = Cart::new();

    observer.on_start(&CartRoles {
        source: from,
        destination: to,
        spare: &spare,
    })?;

    let mut engine = TransferEngine::new(observer);
    engine.relocate(from.len(), from, to, &mut spare)?;
    Ok(engine.moves())
}

/// `2^count - 1`, saturating at `u64::MAX`.
pub const fn expected_moves(count: usize) -> u64 {
    if count >= 64 {
        u64::MAX
    } else {
        (1u64 << count) - 1
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
