//! # Order Record
//!
//! The value a caller hands to the processor: which beverage, which size,
//! which extras. Nothing is validated here; the pricing engine decides
//! whether the order can be priced.

use serde::{Deserialize, Serialize};

use crate::validation::{normalize_token, parse_extras};

/// A requested coffee.
///
/// ## Lifecycle
/// ```text
/// raw input ──► CoffeeOrder::from_raw ──► OrderProcessor::process(&order)
///                                               │
///                                               ├──► PriceCalculator
///                                               ├──► OrderSink::save(&order, total)
///                                               └──► Notifier::notify(describe())
/// ```
/// The record is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeOrder {
    /// Beverage lookup key, e.g. `"latte"`.
    pub beverage: String,

    /// Size lookup key, e.g. `"medium"`.
    pub size: String,

    /// Extras in the order they were requested. May be empty.
    pub extras: Vec<String>,
}

impl CoffeeOrder {
    /// Creates an order from already-normalised values.
    pub fn new(beverage: impl Into<String>, size: impl Into<String>, extras: Vec<String>) -> Self {
        CoffeeOrder {
            beverage: beverage.into(),
            size: size.into(),
            extras,
        }
    }

    /// Creates an order from raw input strings.
    ///
    /// Beverage and size are trimmed and lower-cased; extras are split on
    /// commas with blank entries dropped.
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::CoffeeOrder;
    ///
    /// let order = CoffeeOrder::from_raw(" Latte", "MEDIUM ", "soy, oat,");
    /// assert_eq!(order.beverage, "latte");
    /// assert_eq!(order.size, "medium");
    /// assert_eq!(order.extras, vec!["soy", "oat"]);
    /// ```
    pub fn from_raw(beverage: &str, size: &str, extras_csv: &str) -> Self {
        CoffeeOrder {
            beverage: normalize_token(beverage),
            size: normalize_token(size),
            extras: parse_extras(extras_csv),
        }
    }

    /// Human-readable summary of the order.
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::CoffeeOrder;
    ///
    /// let order = CoffeeOrder::from_raw("latte", "medium", "soy, oat");
    /// assert_eq!(order.describe(), "Medium Latte with soy, oat.");
    ///
    /// let plain = CoffeeOrder::from_raw("espresso", "large", "");
    /// assert_eq!(plain.describe(), "Large Espresso with no extras.");
    /// ```
    pub fn describe(&self) -> String {
        let extras_part = if self.extras.is_empty() {
            "no extras".to_string()
        } else {
            self.extras.join(", ")
        };

        format!(
            "{} {} with {}.",
            title_case(&self.size),
            title_case(&self.beverage),
            extras_part
        )
    }
}

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
///
/// `"flat white"` → `"Flat White"`, `"half-caf"` → `"Half-Caf"`.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================
