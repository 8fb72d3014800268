//! # Catalog Source Configuration
//!
//! Where the catalog file comes from.
//!
//! ## Resolution Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Finding the catalog file                           │
//! │                                                                         │
//! │  explicit_path set? ──yes──► use it (missing file → empty catalog)     │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  search_dir/Grocery_UPC_Database-Full.dat     exists? ──► use it       │
//! │  search_dir/Grocery_UPC_Database-Large.dat    exists? ──► use it       │
//! │  search_dir/Grocery_UPC_Database-Medium.dat   exists? ──► use it       │
//! │  search_dir/Grocery_UPC_Database-Small.dat    exists? ──► use it       │
//! │  search_dir/Sample_GroceryItem_Database.dat   exists? ──► use it       │
//! │       │ none                                                            │
//! │       ▼                                                                 │
//! │  empty catalog + warning                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

/// Candidate file names, highest priority first.
pub const DEFAULT_CANDIDATES: [&str; 5] = [
    "Grocery_UPC_Database-Full.dat",
    "Grocery_UPC_Database-Large.dat",
    "Grocery_UPC_Database-Medium.dat",
    "Grocery_UPC_Database-Small.dat",
    "Sample_GroceryItem_Database.dat",
];

/// Environment variable naming an explicit catalog file.
pub const ENV_CATALOG: &str = "CARTWHEEL_CATALOG";

/// Environment variable naming the directory to probe.
pub const ENV_CATALOG_DIR: &str = "CARTWHEEL_CATALOG_DIR";

/// Catalog source configuration.
///
/// ## Example
/// ```rust
/// use cartwheel_catalog::CatalogConfig;
///
/// let config = CatalogConfig::new()
///     .search_dir("/var/lib/cartwheel")
///     .candidates(["prices.dat"]);
///
/// assert_eq!(
///     config.candidate_paths(),
///     vec![std::path::PathBuf::from("/var/lib/cartwheel/prices.dat")]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory the candidate names are resolved against.
    /// Default: current working directory
    pub search_dir: PathBuf,

    /// File names probed in order.
    /// Default: [`DEFAULT_CANDIDATES`]
    pub candidates: Vec<String>,

    /// Skips probing when set.
    pub explicit_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Probes the default candidates in the current directory.
    pub fn new() -> Self {
        CatalogConfig {
            search_dir: PathBuf::from("."),
            candidates: DEFAULT_CANDIDATES.iter().map(|name| name.to_string()).collect(),
            explicit_path: None,
        }
    }

    /// Sets the directory to probe.
    pub fn search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = dir.into();
        self
    }

    /// Replaces the candidate file names.
    pub fn candidates<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.candidates = names.into_iter().map(Into::into).collect();
        self
    }

    /// Uses this file and skips probing.
    pub fn explicit_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    /// Defaults overridden by `CARTWHEEL_CATALOG` and `CARTWHEEL_CATALOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`CatalogConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(dir) = lookup(ENV_CATALOG_DIR).filter(|v| !v.is_empty()) {
            config = config.search_dir(dir);
        }
        if let Some(path) = lookup(ENV_CATALOG).filter(|v| !v.is_empty()) {
            config = config.explicit_path(path);
        }

        config
    }

    /// Candidate names resolved against the search directory.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        self.candidates
            .iter()
            .map(|name| self.search_dir.join(name))
            .collect()
    }

    /// The file to load: the explicit path, else the first candidate that exists.
    pub fn resolve(&self) -> Option<PathBuf> {
        if let Some(path) = &self.explicit_path {
            return Some(path.clone());
        }

        self.candidate_paths()
            .into_iter()
            .find(|path| Path::new(path).is_file())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.search_dir, PathBuf::from("."));
        assert_eq!(config.candidates.len(), 5);
        assert_eq!(config.candidates[0], "Grocery_UPC_Database-Full.dat");
        assert!(config.explicit_path.is_none());
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_CATALOG_DIR, "/srv/prices"),
            (ENV_CATALOG, "/tmp/override.dat"),
        ]
        .into_iter()
        .collect();

        let config = CatalogConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.search_dir, PathBuf::from("/srv/prices"));
        assert_eq!(config.explicit_path, Some(PathBuf::from("/tmp/override.dat")));
    }

    #[test]
    fn test_empty_variables_are_ignored() {
        let config = CatalogConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config, CatalogConfig::new());
    }

    #[test]
    fn test_resolve_respects_priority() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Grocery_UPC_Database-Small.dat"), "").unwrap();
        std::fs::write(dir.path().join("Sample_GroceryItem_Database.dat"), "").unwrap();

        let config = CatalogConfig::new().search_dir(dir.path());
        assert_eq!(
            config.resolve(),
            Some(dir.path().join("Grocery_UPC_Database-Small.dat"))
        );
    }

    #[test]
    fn test_resolve_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::new().search_dir(dir.path());
        assert_eq!(config.resolve(), None);
    }

    #[test]
    fn test_explicit_path_skips_probing() {
        let config = CatalogConfig::new().explicit_path("does-not-exist.dat");
        assert_eq!(config.resolve(), Some(PathBuf::from("does-not-exist.dat")));
    }
}
