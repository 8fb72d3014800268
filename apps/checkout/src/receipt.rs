//! # Receipt
//!
//! What the customer is charged, line by line.
//!
//! ## Text Form
//! ```text
//! "00688267039317", "any brand", "eggs", 2.75
//! Item not found! UPC("00835841005255"), product("bread") => FREE!
//! "09073649000493", "any brand", "apple pie", 5.99
//! -------------------------
//! Total  $8.74
//! ```
//!
//! Found items print in record form; a line that isn't in the catalog costs
//! nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use cartwheel_core::item::write_quoted;
use cartwheel_core::{tolerant_eq, GroceryItem};

/// One line on the receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReceiptLine {
    /// Catalog entry for the scanned item; charged at the catalog price.
    Found { item: GroceryItem },

    /// Scanned item with no catalog entry; free.
    NotFound { upc: String, product_name: String },
}

impl ReceiptLine {
    /// Amount charged for this line.
    pub fn amount(&self) -> f64 {
        match self {
            ReceiptLine::Found { item } => item.price(),
            ReceiptLine::NotFound { .. } => 0.0,
        }
    }
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptLine::Found { item } => write!(f, "{item}"),
            ReceiptLine::NotFound { upc, product_name } => {
                f.write_str("Item not found! UPC(")?;
                write_quoted(f, upc)?;
                f.write_str("), product(")?;
                write_quoted(f, product_name)?;
                f.write_str(") => FREE!")
            }
        }
    }
}

/// A finished receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub printed_at: DateTime<Utc>,
    pub lines: Vec<ReceiptLine>,
    pub total: f64,
}

impl Receipt {
    /// Starts an empty receipt stamped with the current time.
    pub fn new() -> Self {
        Receipt {
            id: Uuid::new_v4(),
            printed_at: Utc::now(),
            lines: Vec::new(),
            total: 0.0,
        }
    }

    /// Adds a line and its amount to the total.
    pub fn push(&mut self, line: ReceiptLine) {
        self.total += line.amount();
        self.lines.push(line);
    }

    /// Lines that were not in the catalog.
    pub fn not_found(&self) -> impl Iterator<Item = &ReceiptLine> {
        self.lines
            .iter()
            .filter(|line| matches!(line, ReceiptLine::NotFound { .. }))
    }

    /// Human readable receipt with the total in `currency`.
    pub fn display<'a>(&'a self, currency: &'a str) -> ReceiptDisplay<'a> {
        ReceiptDisplay {
            receipt: self,
            currency,
        }
    }
}

/// Same id, timestamp and lines; totals are compared with the price tolerance.
impl PartialEq for Receipt {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.printed_at == other.printed_at
            && self.lines == other.lines
            && tolerant_eq(self.total, other.total)
    }
}

/// Text form of a [`Receipt`], see [`Receipt::display`].
pub struct ReceiptDisplay<'a> {
    receipt: &'a Receipt,
    currency: &'a str,
}

impl fmt::Display for ReceiptDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.receipt.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{}", "-".repeat(25))?;
        writeln!(f, "Total  {}{:.2}", self.currency, self.receipt.total)
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}
