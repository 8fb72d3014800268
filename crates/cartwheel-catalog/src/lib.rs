//! # cartwheel-catalog: Price Catalog for cartwheel
//!
//! This crate turns record files into a UPC lookup table.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        cartwheel Data Flow                              │
//! │                                                                         │
//! │  checkout (resolving each drained item)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 cartwheel-catalog (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ CatalogConfig │    │    Catalog    │    │    sample    │  │   │
//! │  │   │  (config.rs)  │───►│ (catalog.rs)  │    │  (seed data) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ candidates    │    │ find(upc)     │    │ demo items   │  │   │
//! │  │   │ search dir    │    │ size()        │    │ generator    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Record file                                │   │
//! │  │   ./Grocery_UPC_Database-Full.dat (or the next candidate)       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Where the catalog file is looked for
//! - [`catalog`] - The lookup table and its ingestion rules
//! - [`sample`] - Demo and generated items
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cartwheel_catalog::{Catalog, CatalogConfig};
//!
//! let catalog = Catalog::open(&CatalogConfig::from_env());
//! if let Some(item) = catalog.find("00688267039317") {
//!     println!("{item}");
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod sample;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
