//! # Error Types
//!
//! Domain-specific error types for brew-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  brew-core errors (this file)                                          │
//! │  ├── PricingError     - An order cannot be priced (fail-fast)          │
//! │  └── ValidationError  - A price table or input is malformed            │
//! │                                                                         │
//! │  brew-cli errors (app crate)                                           │
//! │  └── CliError         - What the console user sees                     │
//! │                                                                         │
//! │  Flow: PricingError → OrderProcessor::process → CliError → exit code   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in the message
//! 3. Errors are enum variants, never String
//! 4. Unrecognised extras are NOT errors (they cost nothing)

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors that abort a price calculation.
///
/// Both variants are unrecoverable at the point of calculation: no partial
/// total is produced and no side effect runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Beverage is not on the base-price table.
    ///
    /// ## When This Occurs
    /// - Customer asks for something the menu never carried ("mocha")
    /// - Input was not normalised (should not happen via `CoffeeOrder::from_raw`)
    #[error("Unknown beverage: {0}")]
    UnknownBeverage(String),

    /// Size is not on the surcharge table.
    ///
    /// ## User Workflow
    /// ```text
    /// Order (latte, venti)
    ///      │
    ///      ▼
    /// SizeModifier lookup: "venti" missing
    ///      │
    ///      ▼
    /// UnknownSize("venti") → whole calculation aborted
    /// ```
    #[error("Unknown size: {0}")]
    UnknownSize(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Validation errors for price tables and raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Price must not be negative.
    #[error("{field} must not be negative (got {cents} cents)")]
    MustBeNonNegative { field: String, cents: i64 },

    /// Price is above the menu ceiling.
    #[error("{field} must be at most {max} cents (got {cents})")]
    TooLarge { field: String, max: i64, cents: i64 },

    /// Invalid format (e.g., whitespace inside a menu key).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for pricing results.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_messages() {
        let err = PricingError::UnknownBeverage("mocha".to_string());
        assert_eq!(err.to_string(), "Unknown beverage: mocha");

        let err = PricingError::UnknownSize("venti".to_string());
        assert_eq!(err.to_string(), "Unknown size: venti");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "beverages.latte".to_string(),
            cents: -5,
        };
        assert_eq!(
            err.to_string(),
            "beverages.latte must not be negative (got -5 cents)"
        );

        let err = ValidationError::Required {
            field: "beverage".to_string(),
        };
        assert_eq!(err.to_string(), "beverage is required");

        let err = ValidationError::TooLarge {
            field: "beverages.mocha".to_string(),
            max: 100_000_000,
            cents: i64::MAX,
        };
        assert_eq!(
            err.to_string(),
            "beverages.mocha must be at most 100000000 cents (got 9223372036854775807)"
        );
    }
}
