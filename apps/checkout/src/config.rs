//! Checkout configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; command line flags override both.

use std::env;

use cartwheel_catalog::CatalogConfig;

use crate::cli::Cli;

/// Default absolute tolerance when checking the receipt total.
pub const DEFAULT_TOTAL_TOLERANCE: f64 = 1e-3;

/// Checkout configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutConfig {
    /// Where the catalog comes from
    pub catalog: CatalogConfig,

    /// Print transfer frames to stderr
    pub trace: bool,

    /// Symbol printed before the total
    pub currency: String,

    /// Absolute tolerance for the total check (relative is fixed at 1e-8)
    pub total_tolerance: f64,

    /// Print the receipt as JSON
    pub json: bool,
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = CheckoutConfig {
            catalog: CatalogConfig::from_lookup(&lookup),

            trace: match lookup("CARTWHEEL_TRACE") {
                Some(value) => parse_bool(&value)
                    .ok_or_else(|| ConfigError::InvalidValue("CARTWHEEL_TRACE".to_string()))?,
                None => true,
            },

            currency: lookup("CARTWHEEL_CURRENCY").unwrap_or_else(|| "$".to_string()),

            total_tolerance: lookup("CARTWHEEL_TOTAL_TOLERANCE")
                .unwrap_or_else(|| DEFAULT_TOTAL_TOLERANCE.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CARTWHEEL_TOTAL_TOLERANCE".to_string()))?,

            json: false,
        };

        config.validate()?;
        Ok(config)
    }

    /// Applies command line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(dir) = &cli.catalog_dir {
            self.catalog = self.catalog.search_dir(dir);
        }
        if let Some(path) = &cli.catalog {
            self.catalog = self.catalog.explicit_path(path);
        }
        if cli.no_trace {
            self.trace = false;
        }
        if let Some(symbol) = &cli.currency {
            self.currency = symbol.clone();
        }
        if let Some(tolerance) = cli.tolerance {
            self.total_tolerance = tolerance;
        }
        self.json |= cli.json;

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.total_tolerance.is_finite() || self.total_tolerance < 0.0 {
            return Err(ConfigError::InvalidValue("total tolerance".to_string()));
        }
        Ok(())
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            catalog: CatalogConfig::new(),
            trace: true,
            currency: "$".to_string(),
            total_tolerance: DEFAULT_TOTAL_TOLERANCE,
            json: false,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key: &str| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults() {
        let config = CheckoutConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CheckoutConfig::default());
    }

    #[test]
    fn test_environment_values() {
        let config = CheckoutConfig::from_lookup(lookup_from(&[
            ("CARTWHEEL_TRACE", "off"),
            ("CARTWHEEL_CURRENCY", "£"),
            ("CARTWHEEL_TOTAL_TOLERANCE", "0.005"),
            ("CARTWHEEL_CATALOG", "/data/prices.dat"),
        ]))
        .unwrap();

        assert!(!config.trace);
        assert_eq!(config.currency, "£");
        assert_eq!(config.total_tolerance, 0.005);
        assert_eq!(
            config.catalog.explicit_path,
            Some(PathBuf::from("/data/prices.dat"))
        );
    }

    #[test]
    fn test_invalid_values() {
        let err = CheckoutConfig::from_lookup(lookup_from(&[("CARTWHEEL_TRACE", "maybe")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CARTWHEEL_TRACE");

        assert!(CheckoutConfig::from_lookup(lookup_from(&[(
            "CARTWHEEL_TOTAL_TOLERANCE",
            "-1"
        )]))
        .is_err());
    }

    #[test]
    fn test_cli_overrides_environment() {
        let config = CheckoutConfig::from_lookup(lookup_from(&[
            ("CARTWHEEL_CURRENCY", "£"),
            ("CARTWHEEL_CATALOG_DIR", "/srv"),
        ]))
        .unwrap();
        let cli = Cli::parse_from(["checkout", "--no-trace", "--currency", "€", "--json"]);

        let config = config.with_cli(&cli).unwrap();
        assert!(!config.trace);
        assert!(config.json);
        assert_eq!(config.currency, "€");
        assert_eq!(config.catalog.search_dir, PathBuf::from("/srv"));
    }
}
