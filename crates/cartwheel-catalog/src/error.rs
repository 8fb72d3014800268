//! # Catalog Error Types
//!
//! Error types for catalog file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (open, read, write)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds the file path                       │
//! │       │                                                                 │
//! │       ├──► Catalog::open  → logged, empty catalog                      │
//! │       │                                                                 │
//! │       └──► seed / checkout → anyhow at the binary boundary             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed records are not errors here: ingestion stops and logs.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog operation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading a catalog file failed.
    ///
    /// ## When This Occurs
    /// - File doesn't exist
    /// - File permissions issue
    #[error("Could not read catalog file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a catalog file failed.
    #[error("Could not write catalog file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Refusing to replace an existing catalog file.
    #[error("Catalog file '{}' already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// None of the candidate files exist.
    #[error("No catalog file found in '{}' (tried: {})", dir.display(), tried.join(", "))]
    NoSource { dir: PathBuf, tried: Vec<String> },
}

impl CatalogError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_the_path() {
        let err = CatalogError::read(
            "missing.dat",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "Could not read catalog file 'missing.dat': gone");

        let err = CatalogError::NoSource {
            dir: PathBuf::from("."),
            tried: vec!["a.dat".to_string(), "b.dat".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "No catalog file found in '.' (tried: a.dat, b.dat)"
        );
    }
}
