//! # cartwheel checkout
//!
//! A wheel on the shopping cart broke. The groceries are moved, one at a
//! time and without ever putting a heavier item on a lighter one, onto a
//! working cart; then they are rung up and the total is checked against
//! what the customer expected to pay.
//!
//! ## Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdout   prompt for the expected amount, receipt (text or JSON)        │
//! │  stderr   transfer frames, PASS/FAIL, tracing diagnostics               │
//! │  stdin    expected amount, only when not given on the command line      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod checkout;
pub mod cli;
pub mod config;
pub mod receipt;

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use serde::Serialize;
use tracing::info;

use cartwheel_catalog::Catalog;
use cartwheel_core::validation::validate_amount;

use crate::checkout::{broken_cart, checkout_line, rescue_cart, ring_up, Verification};
use crate::config::CheckoutConfig;
use crate::receipt::Receipt;

pub use cli::Cli;
pub use config::ConfigError;

/// Everything a checkout produced.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub receipt: Receipt,
    pub verification: Verification,
}

/// Runs one checkout.
///
/// `expected` is the amount given on the command line; without it the
/// amount is prompted for on `out` and read from `input`. Transfer frames
/// and the PASS/FAIL line go to `err`.
pub fn run(
    config: &CheckoutConfig,
    catalog: &Catalog,
    expected: Option<&str>,
    mut input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
) -> anyhow::Result<Outcome> {
    let mut broken = broken_cart();

    let working = if config.trace {
        let mut failed = None;
        let mut sink = |frame: String| {
            if failed.is_none() {
                failed = writeln!(err, "{frame}").err();
            }
        };
        let working = rescue_cart(&mut broken, Some(&mut sink))?;
        if let Some(e) = failed {
            return Err(e).context("writing transfer trace");
        }
        working
    } else {
        rescue_cart(&mut broken, None)?
    };

    let expected = match expected {
        Some(text) => parse_expected(text)?,
        None => prompt_expected(&mut input, &mut out)?,
    };

    let receipt = ring_up(checkout_line(working), catalog);
    let verification = Verification::check(receipt.total, expected, config.total_tolerance);
    let outcome = Outcome {
        receipt,
        verification,
    };

    if config.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
    } else {
        write!(out, "{}", outcome.receipt.display(&config.currency))?;
    }
    out.flush()?;

    writeln!(err, "{}", outcome.verification.summary())?;
    info!(
        receipt = %outcome.receipt.id,
        total = outcome.receipt.total,
        expected,
        passed = outcome.verification.passed,
        "Checkout complete"
    );

    Ok(outcome)
}

/// Parses an expected amount such as `25.30` or ` 7 `.
pub fn parse_expected(text: &str) -> anyhow::Result<f64> {
    let amount: f64 = text
        .trim()
        .parse()
        .with_context(|| format!("expected amount '{}' is not a number", text.trim()))?;
    validate_amount("expected amount", amount)?;
    Ok(amount)
}

fn prompt_expected(input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<f64> {
    write!(out, "What is your expected amount due?  ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("reading expected amount")? == 0 {
        bail!("no expected amount given on stdin");
    }
    parse_expected(&line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_catalog::sample::demo_items;
    use cartwheel_core::tolerant_eq;

    fn quiet() -> CheckoutConfig {
        CheckoutConfig {
            trace: false,
            ..CheckoutConfig::default()
        }
    }

    #[test]
    fn test_run_with_expected_argument() {
        let catalog = Catalog::from_items(demo_items());
        let mut out = Vec::new();
        let mut err = Vec::new();

        let outcome = run(&quiet(), &catalog, Some("25.30"), std::io::empty(), &mut out, &mut err).unwrap();

        assert!(outcome.verification.passed);
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(r#""00688267039317", "any brand", "eggs", 2.75"#));
        assert!(out.ends_with("Total  $25.30\n"));
        assert_eq!(String::from_utf8(err).unwrap(), "PASS - Amount matches expected.\n");
    }

    #[test]
    fn test_run_prompts_when_no_argument() {
        let catalog = Catalog::from_items(demo_items());
        let mut out = Vec::new();
        let mut err = Vec::new();

        let outcome = run(&quiet(), &catalog, None, &b"20\n"[..], &mut out, &mut err).unwrap();

        assert!(!outcome.verification.passed);
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("What is your expected amount due?  "));
        assert_eq!(String::from_utf8(err).unwrap(), "FAIL - Mismatch in amounts.\n");
    }

    #[test]
    fn test_run_traces_to_err() {
        let catalog = Catalog::from_items(demo_items());
        let mut err = Vec::new();

        run(
            &CheckoutConfig::default(),
            &catalog,
            Some("25.3"),
            std::io::empty(),
            std::io::sink(),
            &mut err,
        )
        .unwrap();

        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("After   0 moves:     Broken Cart"));
        assert!(err.contains("After  63 moves:"));
        assert!(err.ends_with("PASS - Amount matches expected.\n"));
    }

    #[test]
    fn test_run_json() {
        let catalog = Catalog::new();
        let config = CheckoutConfig {
            json: true,
            ..quiet()
        };
        let mut out = Vec::new();

        let outcome = run(&config, &catalog, Some("0"), std::io::empty(), &mut out, std::io::sink()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["receipt"]["lines"].as_array().unwrap().len(), 6);
        assert!(tolerant_eq(value["receipt"]["total"].as_f64().unwrap(), 0.0));
        assert_eq!(value["verification"]["passed"], true);
        assert!(outcome.verification.passed);
    }

    #[test]
    fn test_bad_expected_amount() {
        let catalog = Catalog::new();
        let result = run(&quiet(), &catalog, Some("lots"), std::io::empty(), std::io::sink(), std::io::sink());
        assert!(result.is_err());

        assert!(parse_expected("nan").is_err());
        assert!(tolerant_eq(parse_expected(" 35.89\n").unwrap(), 35.89));
    }

    #[test]
    fn test_prompt_without_input() {
        let catalog = Catalog::new();
        let result = run(&quiet(), &catalog, None, std::io::empty(), std::io::sink(), std::io::sink());
        assert!(result.is_err());
    }
}
