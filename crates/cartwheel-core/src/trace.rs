//! # Cart Tracer
//!
//! A [`MoveObserver`] that renders the three carts side by side after every
//! move, so a person can follow the transfer.
//!
//! ## Frame Layout
//! ```text
//! After   3 moves:     Broken Cart              Working Cart             Spare Cart
//!                      ---------------------------------------------------------------------------
//!                      apple pie
//!                      hotdogs                  bread
//!                      rice krispies            eggs
//!                      milk
//!                      ===========================================================================
//! ```
//!
//! ## Stable Columns
//! The engine keeps swapping which cart is "source", "destination" and
//! "spare". The tracer pins each physical cart to a column by [`CartId`] the
//! first time it sees them:
//!
//! | First observation                          | source | destination | spare |
//! |--------------------------------------------|--------|-------------|-------|
//! | destination and spare empty                | 0      | 1           | 2     |
//! | only destination holds items               | 1      | 0           | 2     |
//! | anything else                              | usage error             ||
//!
//! Later observations must only mention those three carts.
//!
//! The tracer only builds strings; where the frames go is up to the caller.

use crate::cart::{Cart, CartId};
use crate::error::{CoreError, CoreResult};
use crate::transfer::{CartRoles, MoveEvent, MoveObserver};

/// Column titles, in column order.
pub const DEFAULT_LABELS: [&str; 3] = ["Broken Cart", "Working Cart", "Spare Cart"];

const COLUMN_WIDTH: usize = 25;
const MARGIN: usize = 21;
const NAME_WIDTH: usize = COLUMN_WIDTH - 1;
const SHORTENED_NAME: usize = 21;

type Sink<'s> = Box<dyn FnMut(String) + 's>;

/// Renders transfer progress as text frames.
///
/// ## Example
/// ```rust
/// use cartwheel_core::trace::CartTracer;
/// use cartwheel_core::transfer::carefully_move;
/// use cartwheel_core::{Cart, GroceryItem};
///
/// let mut broken = Cart::with_items([GroceryItem::new("1", "any", "milk", 3.19)]);
/// let mut working = Cart::new();
/// let mut tracer = CartTracer::new();
///
/// carefully_move(&mut broken, &mut working, &mut tracer).unwrap();
///
/// let frames = tracer.take_frames();
/// assert_eq!(frames.len(), 2); // starting state + one move
/// assert!(frames[1].starts_with("After   1 moves:"));
/// ```
pub struct CartTracer<'s> {
    labels: [String; 3],
    columns: Option<[(CartId, usize); 3]>,
    frames: Vec<String>,
    sink: Option<Sink<'s>>,
}

impl<'s> CartTracer<'s> {
    /// Tracer with the default column labels that keeps frames in memory.
    pub fn new() -> Self {
        CartTracer {
            labels: DEFAULT_LABELS.map(String::from),
            columns: None,
            frames: Vec::new(),
            sink: None,
        }
    }

    /// Replaces the column labels.
    pub fn with_labels(mut self, labels: [impl Into<String>; 3]) -> Self {
        self.labels = labels.map(Into::into);
        self
    }

    /// Hands every frame to `sink` instead of keeping it.
    pub fn with_sink(mut self, sink: impl FnMut(String) + 's) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Frames kept so far (empty when a sink is installed).
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn take_frames(&mut self) -> Vec<String> {
        std::mem::take(&mut self.frames)
    }

    fn first_columns(carts: &CartRoles<'_>) -> CoreResult<[(CartId, usize); 3]> {
        let CartRoles {
            source,
            destination,
            spare,
        } = *carts;

        if destination.is_empty() && spare.is_empty() {
            Ok([(source.id(), 0), (destination.id(), 1), (spare.id(), 2)])
        } else if source.is_empty() && !destination.is_empty() && spare.is_empty() {
            Ok([(source.id(), 1), (destination.id(), 0), (spare.id(), 2)])
        } else {
            Err(CoreError::TracerUsage(
                "order of carts passed to the tracer is incorrect".to_string(),
            ))
        }
    }

    /// Carts arranged by column, establishing the mapping on first use.
    fn arrange<'c>(&mut self, carts: &CartRoles<'c>) -> CoreResult<[&'c Cart; 3]> {
        let columns = match self.columns {
            Some(columns) => columns,
            None => {
                let columns = Self::first_columns(carts)?;
                self.columns = Some(columns);
                columns
            }
        };

        let mut arranged = [carts.source; 3];
        let mut filled = [false; 3];
        for cart in carts.carts() {
            let column = columns
                .iter()
                .find(|(id, _)| *id == cart.id())
                .map(|(_, column)| *column)
                .ok_or_else(|| {
                    CoreError::TracerUsage(format!(
                        "cart {} was not part of the first observation",
                        cart.id()
                    ))
                })?;
            arranged[column] = cart;
            filled[column] = true;
        }

        if filled.contains(&false) {
            return Err(CoreError::TracerUsage(
                "the same cart was passed in two roles".to_string(),
            ));
        }
        Ok(arranged)
    }

    fn render(&self, moves: u64, arranged: [&Cart; 3]) -> String {
        let rule_width = COLUMN_WIDTH * arranged.len();
        let mut frame = format!("After {moves:>3} moves:     ");

        for label in &self.labels {
            let label: String = label.chars().take(COLUMN_WIDTH).collect();
            frame.push_str(&format!("{label:<COLUMN_WIDTH$}"));
        }
        frame.push_str(&format!("\n{:MARGIN$}{}\n", "", "-".repeat(rule_width)));

        let tallest = arranged.iter().map(|cart| cart.len()).max().unwrap_or(0);
        for height in (1..=tallest).rev() {
            frame.push_str(&" ".repeat(MARGIN));
            for cart in arranged {
                // the item sitting at this height, counted from the bottom
                let item = cart.iter_top_down().rev().nth(height - 1);
                match item {
                    Some(item) => frame.push_str(&cell(item.product_name())),
                    None => frame.push_str(&" ".repeat(COLUMN_WIDTH)),
                }
            }
            frame.push('\n');
        }

        frame.push_str(&format!("{:MARGIN$}{}\n", "", "=".repeat(rule_width)));
        frame
    }

    fn emit(&mut self, frame: String) {
        match self.sink.as_mut() {
            Some(sink) => sink(frame),
            None => self.frames.push(frame),
        }
    }
}

impl Default for CartTracer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Names longer than a column are cut to 21 characters plus "...".
fn cell(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH {
        let shortened: String = name.chars().take(SHORTENED_NAME).collect();
        format!("{shortened}... ")
    } else {
        format!("{name:<COLUMN_WIDTH$}")
    }
}

impl MoveObserver for CartTracer<'_> {
    fn on_start(&mut self, carts: &CartRoles<'_>) -> CoreResult<()> {
        let arranged = self.arrange(carts)?;
        let frame = self.render(0, arranged);
        self.emit(frame);
        Ok(())
    }

    fn on_move(&mut self, event: &MoveEvent<'_>) -> CoreResult<()> {
        let arranged = self.arrange(&event.carts)?;
        let frame = self.render(event.sequence + 1, arranged);
        self.emit(frame);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::GroceryItem;
    use crate::transfer::{carefully_move, TransferEngine};

    fn cart_of(names: &[&str]) -> Cart {
        // first name on top
        Cart::with_items(names.iter().rev().map(|n| GroceryItem::new("0", "any", *n, 1.0)))
    }

    #[test]
    fn test_frame_count_and_headers() {
        let mut broken = cart_of(&["eggs", "bread", "milk"]);
        let mut working = Cart::new();
        let mut tracer = CartTracer::new();

        carefully_move(&mut broken, &mut working, &mut tracer).unwrap();
        let frames = tracer.take_frames();

        assert_eq!(frames.len(), 8);
        assert!(frames[0].starts_with("After   0 moves:     Broken Cart"));
        assert!(frames[7].starts_with("After   7 moves:"));
        assert!(tracer.frames().is_empty());
    }

    #[test]
    fn test_columns_stay_with_physical_carts() {
        let mut broken = cart_of(&["eggs", "bread"]);
        let mut working = Cart::new();
        let mut tracer = CartTracer::new();

        carefully_move(&mut broken, &mut working, &mut tracer).unwrap();
        let frames = tracer.take_frames();

        // after the first of three moves eggs sits alone in the spare cart
        let eggs_row = frames[1].lines().find(|l| l.contains("eggs")).unwrap();
        assert_eq!(eggs_row.find("eggs"), Some(MARGIN + 2 * COLUMN_WIDTH));

        // at the end both items are in the working cart column
        let last = frames.last().unwrap();
        let rows: Vec<&str> = last.lines().skip(2).take(2).collect();
        assert_eq!(rows[0].find("eggs"), Some(MARGIN + COLUMN_WIDTH));
        assert_eq!(rows[1].find("bread"), Some(MARGIN + COLUMN_WIDTH));
    }

    #[test]
    fn test_long_names_are_shortened() {
        assert_eq!(cell("milk").len(), COLUMN_WIDTH);
        let long = cell("Smart Living 10.5 X 8 Notebook College Ruled");
        assert_eq!(long, "Smart Living 10.5 X 8... ");
        assert_eq!(long.len(), COLUMN_WIDTH);
    }

    #[test]
    fn test_first_observation_with_swapped_roles() {
        let full = cart_of(&["eggs"]);
        let empty_a = Cart::new();
        let empty_b = Cart::new();
        let mut tracer = CartTracer::new();

        // source already empty, destination holds the items
        tracer
            .on_start(&CartRoles {
                source: &empty_a,
                destination: &full,
                spare: &empty_b,
            })
            .unwrap();

        let frame = &tracer.frames()[0];
        let row = frame.lines().nth(2).unwrap();
        assert_eq!(row.find("eggs"), Some(MARGIN));
    }

    #[test]
    fn test_invalid_first_observation() {
        let a = cart_of(&["eggs"]);
        let b = cart_of(&["milk"]);
        let c = Cart::new();
        let mut tracer = CartTracer::new();

        let err = tracer
            .on_start(&CartRoles {
                source: &a,
                destination: &b,
                spare: &c,
            })
            .unwrap_err();
        assert!(matches!(err, CoreError::TracerUsage(_)));
    }

    #[test]
    fn test_unknown_cart_is_a_usage_error() {
        let mut tracer = CartTracer::new();
        let mut source = cart_of(&["eggs"]);
        let mut destination = Cart::new();
        let mut spare = Cart::new();

        carefully_move(&mut source, &mut destination, &mut tracer).unwrap();

        // a second transfer involving a fresh spare cart
        let err = TransferEngine::new(&mut tracer)
            .relocate(1, &mut destination, &mut source, &mut spare)
            .unwrap_err();
        assert!(matches!(err, CoreError::TracerUsage(_)));
    }

    #[test]
    fn test_sink_receives_frames() {
        let mut received = Vec::new();
        {
            let mut tracer = CartTracer::new()
                .with_labels(["A", "B", "C"])
                .with_sink(|frame| received.push(frame));
            let mut source = cart_of(&["eggs"]);
            let mut destination = Cart::new();
            carefully_move(&mut source, &mut destination, &mut tracer).unwrap();
            assert!(tracer.frames().is_empty());
        }

        assert_eq!(received.len(), 2);
        assert!(received[0].contains(&format!("{:<25}B", "A")));
    }
}
