//! # brew
//!
//! Console entry point: load the menu, take one order, exit.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, so stdout stays the conversation)
//! 2. Load the menu configuration
//! 3. Run one order against stdin/stdout
//!
//! Any error ends the process with a non-zero status.

use std::io;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use brew_cli::MenuConfig;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let menu = MenuConfig::load().context("failed to load menu")?;
    info!(
        beverages = menu.beverages.len(),
        sizes = menu.sizes.len(),
        extras = menu.extras.len(),
        "Menu loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match brew_cli::run(&menu, &mut input, &mut output) {
        Ok(total) => {
            info!(total = %total, "Order complete");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Order failed");
            Err(e.into())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show pricing and storage events
/// - `RUST_LOG=brew_core=trace` - Trace the core crate only
/// - Default: warnings, plus info from the app
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,brew=info,brew_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
