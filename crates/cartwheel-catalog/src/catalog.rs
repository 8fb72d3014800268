//! # Catalog
//!
//! UPC → grocery item lookup table, built once from a record file.
//!
//! ## Ingestion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Building the catalog                                 │
//! │                                                                         │
//! │  "00024600017008", "Morton", "Morton Kosher Salt Coarse", 15.17        │
//! │  "00033674100066", "Nature's Way", "Forskohlii - 60 Ct", 6.11          │
//! │  "00024600017008", "Morton", "Morton Kosher Salt Fine", 14.99  ← wins  │
//! │  "00041520893307", "Smart Living", oops                        ← stop  │
//! │  "00000000000001", "never", "read", 1.00                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  { 00024600017008 → Salt Fine, 00033674100066 → Forskohlii }           │
//! │                                                                         │
//! │  • duplicate UPCs: the later record replaces the earlier one           │
//! │  • first malformed record: warn! and stop, keep what was read          │
//! │  • domain rule violations (odd UPC, negative price): warn!, keep       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Building a catalog never fails. A catalog that could not find or read its
//! source is empty and says so in the log.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, info, warn};

use cartwheel_core::{records, GroceryItem};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

static SHARED: OnceLock<Catalog> = OnceLock::new();

/// Read-only lookup table of grocery items keyed by UPC.
///
/// Deliberately not `Clone`: one catalog is built and then shared by
/// reference.
///
/// ## Example
/// ```rust
/// use cartwheel_catalog::Catalog;
///
/// let catalog = Catalog::from_source(r#""123", "BrandX", "Widget", 9.99"#);
///
/// assert_eq!(catalog.size(), 1);
/// assert_eq!(catalog.find("123").map(|item| item.product_name()), Some("Widget"));
/// assert!(catalog.find("999").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Catalog {
    items: HashMap<String, GroceryItem>,
    /// File the records came from, if any.
    source: Option<PathBuf>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from record text.
    pub fn from_source(text: &str) -> Self {
        let mut catalog = Catalog::new();
        catalog.ingest(text);
        catalog
    }

    /// Builds a catalog from items already in memory; last one wins per UPC.
    pub fn from_items(items: impl IntoIterator<Item = GroceryItem>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.upc_code().to_string(), item))
            .collect();
        Catalog { items, source: None }
    }

    /// Builds a catalog from a record file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so a damaged file
    /// still yields the records before the damage.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| CatalogError::read(path, e))?;
        let text = String::from_utf8_lossy(&bytes);

        let mut catalog = Catalog::from_source(&text);
        catalog.source = Some(path.to_path_buf());

        info!(path = %path.display(), items = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Builds the catalog described by `config`.
    ///
    /// Never fails: a missing or unreadable file produces an empty catalog
    /// and a warning.
    pub fn open(config: &CatalogConfig) -> Self {
        match Self::try_open(config) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "Proceeding with empty catalog");
                Catalog::new()
            }
        }
    }

    /// Like [`Catalog::open`], but reports why no catalog could be read.
    pub fn try_open(config: &CatalogConfig) -> CatalogResult<Self> {
        let path = config.resolve().ok_or_else(|| CatalogError::NoSource {
            dir: config.search_dir.clone(),
            tried: config.candidates.clone(),
        })?;

        debug!(path = %path.display(), "Catalog source selected");
        Self::load(path)
    }

    /// The process-wide catalog, built from `config` on the first call.
    ///
    /// Later calls return the same instance and ignore their argument.
    pub fn shared(config: &CatalogConfig) -> &'static Catalog {
        SHARED.get_or_init(|| Catalog::open(config))
    }

    fn ingest(&mut self, text: &str) {
        let mut reader = records(text);
        let mut index = 0usize;

        while let Some(record) = reader.next() {
            match record {
                Ok(item) => {
                    check_fields(index, &item);
                    if let Some(previous) = self.items.insert(item.upc_code().to_string(), item) {
                        debug!(upc = %previous.upc_code(), record = index, "Duplicate UPC replaced");
                    }
                    index += 1;
                }
                Err(e) => {
                    warn!(
                        record = index,
                        offset = reader.offset(),
                        error = %e,
                        "Malformed catalog record, ignoring the rest of the source"
                    );
                }
            }
        }
    }

    /// Looks up an item by UPC.
    pub fn find(&self, upc: &str) -> Option<&GroceryItem> {
        self.items.get(upc)
    }

    /// Number of distinct UPCs.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Same as [`Catalog::len`].
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &GroceryItem> {
        self.items.values()
    }

    /// File the catalog was read from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Writes every item in record form, one per line, sorted by UPC.
    ///
    /// The output reads back into an equal catalog.
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        let mut items: Vec<&GroceryItem> = self.items.values().collect();
        items.sort_by(|a, b| a.weak_cmp(b).into());

        for item in items {
            writeln!(out, "{item}")?;
        }
        out.flush()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a GroceryItem;
    type IntoIter = std::collections::hash_map::Values<'a, String, GroceryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

/// Logs domain rule violations; the record is kept either way.
fn check_fields(index: usize, item: &GroceryItem) {
    if let Err(e) = item.validate() {
        warn!(record = index, upc = %item.upc_code(), error = %e, "Suspicious catalog record");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_core::tolerant_eq;

    const THREE_RECORDS: &str = r#"
        "00024600017008",   "Morton",         "Morton Kosher Salt Coarse",                                    15.17
        "00033674100066",   "Nature's Way",   "Nature's Way Forskohlii - 60 Ct",                               6.11
        "00041520893307",   "Smart Living",   "Smart Living 10.5\" X 8\" 3 Subject Notebook College Ruled",   18.98
    "#;

    #[test]
    fn test_find_hit_and_miss() {
        let catalog = Catalog::from_source(r#""123","BrandX","Widget",9.99"#);

        let widget = catalog.find("123").unwrap();
        assert!(tolerant_eq(widget.price(), 9.99));
        assert_eq!(widget.brand_name(), "BrandX");
        assert!(catalog.find("999").is_none());
    }

    #[test]
    fn test_reads_escaped_quotes() {
        let catalog = Catalog::from_source(THREE_RECORDS);

        assert_eq!(catalog.size(), 3);
        assert_eq!(
            catalog.find("00041520893307").unwrap().product_name(),
            r#"Smart Living 10.5" X 8" 3 Subject Notebook College Ruled"#
        );
    }

    #[test]
    fn test_stops_at_first_malformed_record() {
        let text = r#"
            "1", "A", "Apple", 0.50
            "2", "B", "Bread", 1.25
            "3", "C", "Cheese", not-a-price
            "4", "D", "Dates", 3.00
        "#;

        let catalog = Catalog::from_source(text);
        assert_eq!(catalog.size(), 2);
        assert!(catalog.find("3").is_none());
        assert!(catalog.find("4").is_none());
    }

    #[test]
    fn test_last_record_wins() {
        let text = r#""1", "A", "Apple", 0.50  "1", "A", "Apple", 0.75"#;

        let catalog = Catalog::from_source(text);
        assert_eq!(catalog.size(), 1);
        assert!(tolerant_eq(catalog.find("1").unwrap().price(), 0.75));
    }

    #[test]
    fn test_empty_and_blank_sources() {
        assert!(Catalog::from_source("").is_empty());
        assert!(Catalog::from_source("  \n\t ").is_empty());
    }

    #[test]
    fn test_suspicious_records_are_kept() {
        let catalog = Catalog::from_source(r#""not-a-upc", "A", "Refund", -1.00"#);
        assert_eq!(catalog.size(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.dat");
        std::fs::write(&path, THREE_RECORDS).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.size(), 3);
        assert_eq!(catalog.source(), Some(path.as_path()));
    }

    #[test]
    fn test_load_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.dat");
        let mut bytes = br#""1", "A", "Apple", 0.50 "2", "B", "Br"#.to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(br#"ad", 1.25"#);
        std::fs::write(&path, bytes).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.size(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(dir.path().join("missing.dat")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_open_probes_candidates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("Sample_GroceryItem_Database.dat"),
            r#""1", "A", "Apple", 0.50"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("Grocery_UPC_Database-Medium.dat"),
            THREE_RECORDS,
        )
        .unwrap();

        let catalog = Catalog::open(&CatalogConfig::new().search_dir(dir.path()));
        assert_eq!(catalog.size(), 3);
    }

    #[test]
    fn test_open_without_source_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::new().search_dir(dir.path());

        assert!(Catalog::open(&config).is_empty());
        assert!(matches!(
            Catalog::try_open(&config),
            Err(CatalogError::NoSource { .. })
        ));
    }

    #[test]
    fn test_write_to_reads_back() {
        let catalog = Catalog::from_source(THREE_RECORDS);

        let mut out = Vec::new();
        catalog.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(r#""00024600017008""#));

        let reread = Catalog::from_source(&text);
        assert_eq!(reread.size(), catalog.size());
        for item in &catalog {
            assert_eq!(reread.find(item.upc_code()), Some(item));
        }
    }

    #[test]
    fn test_from_items_knows_every_demo_item() {
        let catalog = Catalog::from_items(crate::sample::sample_items(40));
        assert_eq!(catalog.size(), 46);

        for (upc, _, name, price) in crate::sample::DEMO_ITEMS {
            let item = catalog.find(upc).unwrap();
            assert_eq!(item.product_name(), name);
            assert!(tolerant_eq(item.price(), price));
        }
    }

    #[test]
    fn test_shared_is_built_once() {
        let dir = tempfile::tempdir().unwrap();
        let first = Catalog::shared(&CatalogConfig::new().search_dir(dir.path()));
        let second = Catalog::shared(&CatalogConfig::new().explicit_path("elsewhere.dat"));
        assert!(std::ptr::eq(first, second));
    }
}
