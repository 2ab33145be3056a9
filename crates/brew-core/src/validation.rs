//! # Validation Module
//!
//! Input normalisation and price-table checks.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input collaborator                                           │
//! │  └── normalize_token / parse_extras (trim, lower-case, split)          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Menu load                                                     │
//! │  └── validate_price_table (keys present, 0 <= price <= ceiling)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: PricingEngine::calculate                                     │
//! │  └── UnknownBeverage / UnknownSize (the order itself is never checked) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brew_core::validation::{normalize_token, parse_extras};
//!
//! assert_eq!(normalize_token("  Latte "), "latte");
//! assert_eq!(parse_extras(" Soy, ,OAT "), vec!["soy", "oat"]);
//! ```

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::money::Money;

/// Highest price a single menu entry may carry: $1,000,000.00.
///
/// Totals are sums of a handful of menu prices, so this keeps every
/// pipeline far from `i64` overflow.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Input Normalisation
// =============================================================================

/// Trims surrounding whitespace and lower-cases a lookup key.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Splits a comma-separated extras line into normalised entries.
///
/// Blank entries are dropped, so `""` and `" , "` both yield no extras.
/// Duplicates and unknown names are kept: pricing decides what they cost.
pub fn parse_extras(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_token)
        .filter(|extra| !extra.is_empty())
        .collect()
}

// =============================================================================
// Price Validators
// =============================================================================

/// Validates a single price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (e.g. the small-size surcharge)
/// - Must not exceed [`MAX_PRICE_CENTS`]
///
/// ## Example
/// ```rust
/// use brew_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents("latte", 350).is_ok());
/// assert!(validate_price_cents("small", 0).is_ok());
/// assert!(validate_price_cents("latte", -1).is_err());
/// assert!(validate_price_cents("latte", i64::MAX).is_err());
/// ```
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
            cents,
        });
    }

    if cents > MAX_PRICE_CENTS {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max: MAX_PRICE_CENTS,
            cents,
        });
    }

    Ok(())
}

/// Validates a lookup key of a price table.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must not contain whitespace or commas (they could never be typed as a
///   single extras entry)
pub fn validate_menu_key(table: &str, key: &str) -> ValidationResult<()> {
    let trimmed = key.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: format!("{table} key"),
        });
    }

    if trimmed.chars().any(|c| c.is_whitespace() || c == ',') {
        return Err(ValidationError::InvalidFormat {
            field: format!("{table}.{trimmed}"),
            reason: "must not contain whitespace or commas".to_string(),
        });
    }

    Ok(())
}

/// Validates a whole price table (base prices or a surcharge table).
///
/// Every key must pass [`validate_menu_key`] and every price
/// [`validate_price_cents`]. The first violation is returned.
pub fn validate_price_table(table: &str, prices: &HashMap<String, Money>) -> ValidationResult<()> {
    for (key, price) in prices {
        validate_menu_key(table, key)?;
        validate_price_cents(&format!("{table}.{key}"), price.cents())?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
