//! # CLI Error Type
//!
//! Everything that can stop the console app.
//!
//! ```text
//! PricingError ──┬──► CliError ──► anyhow (main) ──► non-zero exit
//! io::Error ─────┘
//!
//! Menu loading fails before `run` starts and reaches `main` as a
//! `MenuConfigError` directly.
//! ```

use brew_core::PricingError;

/// Console application errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The order could not be priced. Nothing was stored or announced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
