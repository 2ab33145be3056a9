//! # brew-core: Pure Pricing Logic for Brew Counter
//!
//! This crate prices coffee orders. It contains no I/O: storing orders and
//! telling anyone about them are capabilities the caller injects.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Brew Counter Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    brew-cli (console)                           │   │
//! │  │    prompt ──► CoffeeOrder ──► OrderProcessor ──► summary        │   │
//! │  │               InMemoryOrderStore        ConsoleNotifier         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ brew-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   order   │  │  pricing  │  │ processor │  │   money   │  │   │
//! │  │   │CoffeeOrder│  │  Engine   │  │ OrderSink │  │   Money   │  │   │
//! │  │   │ describe  │  │ Modifiers │  │ Notifier  │  │  (cents)  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`order`] - The order record and its description
//! - [`pricing`] - Base prices plus an ordered modifier pipeline
//! - [`processor`] - Pricing followed by persistence, then notification
//! - [`money`] - Integer-cents money type
//! - [`error`] - Pricing and validation errors
//! - [`validation`] - Input normalisation and price-table checks
//!
//! ## Example Usage
//!
//! ```rust
//! use brew_core::{CoffeeOrder, Money, OrderProcessor, PricingEngine};
//!
//! let mut stored = Vec::new();
//! let mut messages = Vec::new();
//!
//! let total = {
//!     let mut processor = OrderProcessor::new(
//!         PricingEngine::reference(),
//!         |order: &CoffeeOrder, total: Money| stored.push((order.clone(), total)),
//!         |message: &str| messages.push(message.to_string()),
//!     );
//!     processor.process(&CoffeeOrder::from_raw("latte", "medium", "soy, oat")).unwrap()
//! };
//!
//! assert_eq!(total.to_string(), "$4.90");
//! assert_eq!(stored.len(), 1);
//! assert_eq!(messages[0], "Order ready: Medium Latte with soy, oat. Total: $4.90");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod processor;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{PricingError, PricingResult, ValidationError};
pub use money::Money;
pub use order::CoffeeOrder;
pub use pricing::{
    extras_modifier, percentage_modifier, price_table, size_modifier, ExtrasModifier, Modifier,
    PriceCalculator, PricingEngine, SizeModifier,
};
pub use processor::{order_ready_message, Notifier, OrderProcessor, OrderSink};
