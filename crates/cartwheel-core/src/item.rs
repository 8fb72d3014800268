//! # Grocery Item
//!
//! The priced retail item record, its comparison rules and its text form.
//!
//! ## Record Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         GroceryItem                                     │
//! │                                                                         │
//! │  Field          Type     Notes                                          │
//! │  ─────────────  ───────  ────────────────────────────────────────────   │
//! │  upc_code       String   Primary key, fixed-format numeric code         │
//! │  brand_name     String   May contain spaces and punctuation             │
//! │  product_name   String   May contain spaces and punctuation             │
//! │  price          f64      Dollars, compared with tolerance only          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Text Form
//! ```text
//! "00024600017008", "Morton", "Morton Kosher Salt Coarse", 15.17
//! "00041520893307", "Smart Living", "Smart Living 10.5\" X 8\" Notebook", 18.98
//! ```
//! String fields are double-quoted with `\"` and `\\` escapes. The price is
//! unquoted and locale independent. Records are separated by any whitespace.
//! Whatever `Display` writes, [`RecordReader`] reads back.
//!
//! ## Ordering
//! Items are ordered by UPC, then product name, then brand name, then price.
//! Prices that are tolerant-equal compare as [`WeakOrdering::Equivalent`], so
//! two items can be equivalent without being identical (9.99999 vs 10.00001).
//! For that reason `Eq` and `Ord` are not implemented.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreResult, ParseError};
use crate::tolerance::{tolerant_cmp, tolerant_eq};
use crate::validation::{validate_price, validate_upc};

// =============================================================================
// Weak Ordering
// =============================================================================

/// Result of a three-way comparison in which distinct values may tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeakOrdering {
    Less,
    Equivalent,
    Greater,
}

impl WeakOrdering {
    /// Swaps `Less` and `Greater`.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            WeakOrdering::Less => WeakOrdering::Greater,
            WeakOrdering::Equivalent => WeakOrdering::Equivalent,
            WeakOrdering::Greater => WeakOrdering::Less,
        }
    }

    /// Returns true for `Equivalent`.
    #[inline]
    pub const fn is_equivalent(self) -> bool {
        matches!(self, WeakOrdering::Equivalent)
    }
}

impl From<Ordering> for WeakOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => WeakOrdering::Less,
            Ordering::Equal => WeakOrdering::Equivalent,
            Ordering::Greater => WeakOrdering::Greater,
        }
    }
}

/// Lets a weak ordering drive `sort_by` and friends.
impl From<WeakOrdering> for Ordering {
    fn from(ordering: WeakOrdering) -> Self {
        match ordering {
            WeakOrdering::Less => Ordering::Less,
            WeakOrdering::Equivalent => Ordering::Equal,
            WeakOrdering::Greater => Ordering::Greater,
        }
    }
}

// =============================================================================
// Grocery Item
// =============================================================================

/// A priced retail item.
///
/// A value type: no identity beyond its field content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroceryItem {
    upc_code: String,
    brand_name: String,
    product_name: String,
    price: f64,
}

impl GroceryItem {
    /// Creates an item. Strings are moved in when owned, copied otherwise.
    ///
    /// ## Example
    /// ```rust
    /// use cartwheel_core::GroceryItem;
    ///
    /// let eggs = GroceryItem::new("00688267039317", "any brand", "eggs", 2.75);
    /// assert_eq!(eggs.upc_code(), "00688267039317");
    /// ```
    pub fn new(
        upc_code: impl Into<String>,
        brand_name: impl Into<String>,
        product_name: impl Into<String>,
        price: f64,
    ) -> Self {
        GroceryItem {
            upc_code: upc_code.into(),
            brand_name: brand_name.into(),
            product_name: product_name.into(),
            price,
        }
    }

    /// UPC code (primary key).
    #[inline]
    pub fn upc_code(&self) -> &str {
        &self.upc_code
    }

    #[inline]
    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    #[inline]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Consumes the item, handing back `(upc_code, brand_name, product_name, price)`.
    pub fn into_parts(self) -> (String, String, String, f64) {
        (self.upc_code, self.brand_name, self.product_name, self.price)
    }

    pub fn set_upc_code(&mut self, upc_code: impl Into<String>) -> &mut Self {
        self.upc_code = upc_code.into();
        self
    }

    pub fn set_brand_name(&mut self, brand_name: impl Into<String>) -> &mut Self {
        self.brand_name = brand_name.into();
        self
    }

    pub fn set_product_name(&mut self, product_name: impl Into<String>) -> &mut Self {
        self.product_name = product_name.into();
        self
    }

    pub fn set_price(&mut self, price: f64) -> &mut Self {
        self.price = price;
        self
    }

    /// Checks the UPC and price against the domain rules.
    ///
    /// Parsing accepts any quoted UPC and any finite price; this is the
    /// stricter check a catalog applies afterwards.
    pub fn validate(&self) -> CoreResult<()> {
        validate_upc(&self.upc_code)?;
        validate_price(self.price)?;
        Ok(())
    }

    /// Three-way comparison: UPC, product name, brand name, then price.
    ///
    /// ## Example
    /// ```rust
    /// use cartwheel_core::{GroceryItem, WeakOrdering};
    ///
    /// let a = GroceryItem::new("1", "Brand", "Name", 9.99999);
    /// let b = GroceryItem::new("1", "Brand", "Name", 10.00001);
    /// assert_eq!(a.weak_cmp(&b), WeakOrdering::Equivalent);
    /// ```
    pub fn weak_cmp(&self, other: &Self) -> WeakOrdering {
        let strings = self
            .upc_code
            .cmp(&other.upc_code)
            .then_with(|| self.product_name.cmp(&other.product_name))
            .then_with(|| self.brand_name.cmp(&other.brand_name));

        match strings {
            Ordering::Equal => tolerant_cmp(self.price, other.price),
            decided => decided.into(),
        }
    }
}

/// Exact string fields, tolerant price. Cheapest and most likely to differ first.
impl PartialEq for GroceryItem {
    fn eq(&self, other: &Self) -> bool {
        self.upc_code == other.upc_code
            && self.brand_name == other.brand_name
            && self.product_name == other.product_name
            && tolerant_eq(self.price, other.price)
    }
}

impl PartialOrd for GroceryItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.weak_cmp(other).into())
    }
}

// =============================================================================
// Text Form: Writing
// =============================================================================

/// Writes `field` in double quotes, escaping `"` and `\` with a backslash.
///
/// ```rust
/// use cartwheel_core::item::write_quoted;
///
/// let mut out = String::new();
/// write_quoted(&mut out, r#"10.5" pad"#).unwrap();
/// assert_eq!(out, r#""10.5\" pad""#);
/// ```
pub fn write_quoted<W: fmt::Write + ?Sized>(out: &mut W, field: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in field.chars() {
        if c == '"' || c == '\\' {
            out.write_char('\\')?;
        }
        out.write_char(c)?;
    }
    out.write_char('"')
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.upc_code)?;
        f.write_str(", ")?;
        write_quoted(f, &self.brand_name)?;
        f.write_str(", ")?;
        write_quoted(f, &self.product_name)?;
        // `{}` on f64 is the shortest text that parses back to the same value
        write!(f, ", {}", self.price)
    }
}

// =============================================================================
// Text Form: Reading
// =============================================================================

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn quoted(&mut self, field: &'static str) -> Result<String, ParseError> {
        self.skip_whitespace();
        let start = self.pos;
        match self.bump() {
            Some('"') => {}
            Some(_) => return Err(ParseError::ExpectedQuote { field, offset: start }),
            None => return Err(ParseError::UnexpectedEnd { field }),
        }

        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(value),
                Some('\\') => match self.bump() {
                    Some(escaped) => value.push(escaped),
                    None => return Err(ParseError::UnterminatedString { field, offset: start }),
                },
                Some(c) => value.push(c),
                None => return Err(ParseError::UnterminatedString { field, offset: start }),
            }
        }
    }

    fn comma(&mut self, after: &'static str) -> Result<(), ParseError> {
        self.skip_whitespace();
        let offset = self.pos;
        match self.bump() {
            Some(',') => Ok(()),
            Some(_) => Err(ParseError::ExpectedComma { field: after, offset }),
            None => Err(ParseError::UnexpectedEnd { field: "field separator" }),
        }
    }

    fn digits(&mut self) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            count += 1;
        }
        count
    }

    /// Longest decimal prefix: `[+-]digits[.digits][(e|E)[+-]digits]`.
    fn price(&mut self) -> Result<f64, ParseError> {
        self.skip_whitespace();
        if self.at_end() {
            return Err(ParseError::UnexpectedEnd { field: "price" });
        }

        let start = self.pos;
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        let mut mantissa = self.digits();
        if self.peek() == Some('.') {
            self.bump();
            mantissa += self.digits();
        }

        if mantissa > 0 && matches!(self.peek(), Some('e' | 'E')) {
            let before_exponent = self.pos;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if self.digits() == 0 {
                self.pos = before_exponent;
            }
        }

        let text = &self.input[start..self.pos];
        let invalid = || ParseError::InvalidPrice {
            text: if text.is_empty() {
                self.input[start..]
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_string()
            } else {
                text.to_string()
            },
            offset: start,
        };

        if mantissa == 0 {
            return Err(invalid());
        }
        // overflowing exponents parse to infinity; those are not prices
        match text.parse::<f64>() {
            Ok(price) if price.is_finite() => Ok(price),
            _ => Err(invalid()),
        }
    }

    fn record(&mut self) -> Result<GroceryItem, ParseError> {
        let upc_code = self.quoted("upc code")?;
        self.comma("upc code")?;
        let brand_name = self.quoted("brand name")?;
        self.comma("brand name")?;
        let product_name = self.quoted("product name")?;
        self.comma("product name")?;
        let price = self.price()?;

        Ok(GroceryItem {
            upc_code,
            brand_name,
            product_name,
            price,
        })
    }
}

/// Reads whitespace-separated records from text.
///
/// Yields records in order. The first malformed record is yielded as an
/// error and ends the iteration; nothing after it is read and no partial
/// record is ever produced.
///
/// ## Example
/// ```rust
/// use cartwheel_core::item::RecordReader;
///
/// let text = r#""1", "A", "Apple", 0.5   "2", "B", "Bread", oops"#;
/// let mut reader = RecordReader::new(text);
///
/// assert!(reader.next().unwrap().is_ok());
/// assert!(reader.next().unwrap().is_err());
/// assert!(reader.next().is_none());
/// ```
pub struct RecordReader<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

impl<'a> RecordReader<'a> {
    pub fn new(input: &'a str) -> Self {
        RecordReader {
            cursor: Cursor { input, pos: 0 },
            done: false,
        }
    }

    /// Byte offset just past the last record read (or the failure point).
    pub fn offset(&self) -> usize {
        self.cursor.pos
    }
}

impl Iterator for RecordReader<'_> {
    type Item = Result<GroceryItem, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.cursor.skip_whitespace();
        if self.cursor.at_end() {
            self.done = true;
            return None;
        }

        let record = self.cursor.record();
        if record.is_err() {
            self.done = true;
        }
        Some(record)
    }
}

/// Convenience for `RecordReader::new`.
pub fn records(input: &str) -> RecordReader<'_> {
    RecordReader::new(input)
}

/// Parses exactly one record; only whitespace may surround it.
impl FromStr for GroceryItem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor { input: s, pos: 0 };
        let item = cursor.record()?;
        cursor.skip_whitespace();
        if !cursor.at_end() {
            return Err(ParseError::TrailingInput { offset: cursor.pos });
        }
        Ok(item)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
