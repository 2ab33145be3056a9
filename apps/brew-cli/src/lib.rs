//! # brew-cli
//!
//! Console front end: one order per invocation.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. MenuConfig      → PricingEngine (base prices, size, extras)        │
//! │  2. prompt          → CoffeeOrder                                       │
//! │  3. OrderProcessor  → total                                             │
//! │       ├── InMemoryOrderStore::save   (persistence sink)                │
//! │       └── ConsoleNotifier::notify    ("Order ready: ...")              │
//! │  4. summary         → "Stored 1 order(s). Last total: $4.90"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A pricing error ends the run at step 3. The store stays empty and no
//! notification or summary is printed.

pub mod config;
pub mod error;
pub mod notify;
pub mod prompt;
pub mod store;

use std::io::{BufRead, Write};

use brew_core::{CoffeeOrder, Money, OrderProcessor, OrderSink};

pub use config::{MenuConfig, MenuConfigError};
pub use error::{CliError, CliResult};
pub use notify::ConsoleNotifier;
pub use store::{InMemoryOrderStore, StoredOrder};

/// The closing line printed after a successful order.
pub fn summary_line(stored: usize, total: Money) -> String {
    format!("Stored {stored} order(s). Last total: {total}")
}

/// Prompts for one order on `input`, prices it and reports on `output`.
///
/// Returns the total on success. Errors are returned untouched; the caller
/// decides how the process exits.
pub fn run<R: BufRead, W: Write>(
    menu: &MenuConfig,
    input: &mut R,
    output: &mut W,
) -> CliResult<Money> {
    let engine = menu.build_engine();
    let order = prompt::read_order(input, output, &menu.beverage_names(), &menu.size_names())?;

    let mut store = InMemoryOrderStore::new();
    let total = {
        let mut processor = OrderProcessor::new(
            &engine,
            |priced: &CoffeeOrder, total: Money| store.save(priced, total),
            ConsoleNotifier::new(&mut *output),
        );
        processor.process(&order)?
    };

    writeln!(output, "{}", summary_line(store.len(), total))?;
    output.flush()?;

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::PricingError;
    use std::io::Cursor;

    fn run_with(answers: &str) -> (CliResult<Money>, String) {
        let menu = MenuConfig::reference().unwrap();
        let mut input = Cursor::new(answers.to_string());
        let mut output = Vec::new();

        let result = run(&menu, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_latte_session() {
        let (result, output) = run_with("latte\nmedium\nsoy, oat\n");

        assert_eq!(result.unwrap(), Money::from_cents(490));
        assert_eq!(
            output,
            "Choose beverage (espresso/latte/cappuccino): \
             Choose size (small/medium/large): \
             Extras (comma separated, blank for none): \
             Order ready: Medium Latte with soy, oat. Total: $4.90\n\
             Stored 1 order(s). Last total: $4.90\n"
        );
    }

    #[test]
    fn test_unknown_extra_session() {
        let (result, output) = run_with("Cappuccino\nsmall\nwater\n");

        assert_eq!(result.unwrap(), Money::from_cents(380));
        assert!(output.ends_with(
            "Order ready: Small Cappuccino with water. Total: $3.80\n\
             Stored 1 order(s). Last total: $3.80\n"
        ));
    }

    #[test]
    fn test_unknown_beverage_prints_nothing_after_prompts() {
        let (result, output) = run_with("mocha\nsmall\n\n");

        assert!(matches!(
            result,
            Err(CliError::Pricing(PricingError::UnknownBeverage(ref b))) if b == "mocha"
        ));
        assert!(!output.contains("Order ready"));
        assert!(!output.contains("Stored"));
    }

    #[test]
    fn test_unknown_size_is_an_error() {
        let (result, _) = run_with("espresso\nventi\n\n");
        assert_eq!(result.unwrap_err().to_string(), "Unknown size: venti");
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(1, Money::from_cents(350)),
            "Stored 1 order(s). Last total: $3.50"
        );
    }
}
