//! # Cart
//!
//! A last-in-first-out stack of grocery items: the working storage of the
//! transfer algorithm.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every cart gets a CartId (UUID v4) when it is created.                 │
//! │                                                                         │
//! │  The transfer algorithm keeps rotating which cart plays "source",       │
//! │  "destination" and "spare". Observers tell the physical carts apart     │
//! │  by CartId, never by role or position.                                  │
//! │                                                                         │
//! │     broken  ─┐                                                          │
//! │     working ─┼─► relocate(n, source, destination, spare)                │
//! │     spare   ─┘        roles change, CartIds do not                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Cart` is deliberately not `Clone`: a clone would carry the same items
//! under a second identity. Use [`Cart::snapshot`] for an owned copy of the
//! contents.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::item::GroceryItem;

// =============================================================================
// Cart Identity
// =============================================================================

/// Stable identity token of a physical cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(Uuid);

impl CartId {
    /// Generates a fresh identity.
    pub fn new() -> Self {
        CartId(Uuid::new_v4())
    }
}

impl Default for CartId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A LIFO stack of items. Duplicates are allowed.
///
/// ## Example
/// ```rust
/// use cartwheel_core::{Cart, GroceryItem};
///
/// let mut cart = Cart::new();
/// cart.push(GroceryItem::new("1", "A", "milk", 3.19));
/// cart.push(GroceryItem::new("2", "B", "eggs", 2.75));
///
/// assert_eq!(cart.top().map(GroceryItem::product_name), Some("eggs"));
/// assert_eq!(cart.len(), 2);
/// ```
#[derive(Debug)]
pub struct Cart {
    id: CartId,
    /// Bottom of the stack first, top last.
    items: Vec<GroceryItem>,
}

impl Cart {
    /// Creates an empty cart with a fresh identity.
    pub fn new() -> Self {
        Cart {
            id: CartId::new(),
            items: Vec::new(),
        }
    }

    /// Creates a cart by pushing `items` in order; the last one ends up on top.
    pub fn with_items(items: impl IntoIterator<Item = GroceryItem>) -> Self {
        Cart {
            id: CartId::new(),
            items: items.into_iter().collect(),
        }
    }

    #[inline]
    pub fn id(&self) -> CartId {
        self.id
    }

    pub fn push(&mut self, item: GroceryItem) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<GroceryItem> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<&GroceryItem> {
        self.items.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items from the top of the stack down to the bottom.
    pub fn iter_top_down(&self) -> impl DoubleEndedIterator<Item = &GroceryItem> + ExactSizeIterator {
        self.items.iter().rev()
    }

    /// Owned copy of the items, bottom first.
    pub fn snapshot(&self) -> Vec<GroceryItem> {
        self.items.clone()
    }

    /// Moves the top item onto `destination`.
    ///
    /// The item is popped before it is pushed, so it never sits in both carts.
    pub fn move_top_to(&mut self, destination: &mut Cart) -> CoreResult<()> {
        let item = self.pop().ok_or(CoreError::EmptyCart(self.id))?;
        destination.push(item);
        Ok(())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains the cart from the top down.
impl IntoIterator for Cart {
    type Item = GroceryItem;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<GroceryItem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> GroceryItem {
        GroceryItem::new("0", "any brand", name, 1.0)
    }

    #[test]
    fn test_lifo_order() {
        let mut cart = Cart::with_items([named("milk"), named("bread"), named("eggs")]);

        assert_eq!(cart.top().unwrap().product_name(), "eggs");
        assert_eq!(cart.pop().unwrap().product_name(), "eggs");
        assert_eq!(cart.pop().unwrap().product_name(), "bread");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_iter_top_down_and_into_iter() {
        let cart = Cart::with_items([named("milk"), named("eggs")]);

        let names: Vec<_> = cart.iter_top_down().map(GroceryItem::product_name).collect();
        assert_eq!(names, ["eggs", "milk"]);

        let drained: Vec<_> = cart.into_iter().map(|i| i.product_name().to_string()).collect();
        assert_eq!(drained, ["eggs", "milk"]);
    }

    #[test]
    fn test_move_top_to() {
        let mut from = Cart::with_items([named("milk"), named("eggs")]);
        let mut to = Cart::new();

        from.move_top_to(&mut to).unwrap();
        assert_eq!(from.len(), 1);
        assert_eq!(to.top().unwrap().product_name(), "eggs");
    }

    #[test]
    fn test_move_from_empty_cart_fails() {
        let mut from = Cart::new();
        let mut to = Cart::new();

        let err = from.move_top_to(&mut to).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCart(id) if id == from.id()));
        assert!(to.is_empty());
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = Cart::new();
        let b = Cart::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_duplicates_allowed() {
        let cart = Cart::with_items([named("eggs"), named("eggs")]);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.snapshot()[0], cart.snapshot()[1]);
    }
}
