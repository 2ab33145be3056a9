//! # Pricing Engine
//!
//! Base-price lookup followed by an ordered pipeline of modifiers.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       PricingEngine::calculate                          │
//! │                                                                         │
//! │  CoffeeOrder { latte, medium, [soy, oat] }                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  base_prices["latte"] ──── missing? ──► Err(UnknownBeverage)           │
//! │       │ $3.50                                                           │
//! │       ▼                                                                 │
//! │  modifiers[0] SizeModifier ── unknown size? ──► Err(UnknownSize)       │
//! │       │ $4.00                                                           │
//! │       ▼                                                                 │
//! │  modifiers[1] ExtrasModifier  (unknown extras add $0.00)               │
//! │       │ $4.90                                                           │
//! │       ▼                                                                 │
//! │  Ok($4.90)                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Modifiers run strictly left to right and each receives the running total
//! produced by the one before it. The first error aborts the whole
//! calculation; a partial total is never returned.
//!
//! ## Rounding
//! Every value is a [`Money`] in whole cents, so the result is always rounded
//! to 2 decimal places. Modifiers that scale the total (see
//! [`percentage_modifier`]) round half-to-even at the point they apply.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::order::CoffeeOrder;
use crate::validation::normalize_token;

// =============================================================================
// Reference Menu
// =============================================================================

/// Reference base prices in cents.
pub const REFERENCE_BASE_PRICES: &[(&str, i64)] =
    &[("espresso", 250), ("latte", 350), ("cappuccino", 380)];

/// Reference size surcharges in cents.
pub const REFERENCE_SIZE_SURCHARGES: &[(&str, i64)] =
    &[("small", 0), ("medium", 50), ("large", 100)];

/// Reference per-extra surcharges in cents.
pub const REFERENCE_EXTRA_SURCHARGES: &[(&str, i64)] =
    &[("soy", 40), ("oat", 50), ("vanilla", 60), ("caramel", 70)];

/// Builds a lookup table with normalised keys from `(name, cents)` pairs.
pub fn price_table<K: AsRef<str>>(
    entries: impl IntoIterator<Item = (K, i64)>,
) -> HashMap<String, Money> {
    entries
        .into_iter()
        .map(|(name, cents)| (normalize_token(name.as_ref()), Money::from_cents(cents)))
        .collect()
}

fn reference_lookup(table: &[(&str, i64)], key: &str) -> Option<Money> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, cents)| Money::from_cents(*cents))
}

// =============================================================================
// Contracts
// =============================================================================

/// The pricing contract the order processor depends on.
pub trait PriceCalculator {
    /// Prices an order, or explains why it cannot be priced.
    fn calculate(&self, order: &CoffeeOrder) -> PricingResult<Money>;
}

impl<C: PriceCalculator + ?Sized> PriceCalculator for &C {
    fn calculate(&self, order: &CoffeeOrder) -> PricingResult<Money> {
        (**self).calculate(order)
    }
}

/// One step of the pricing pipeline: `(order, running_total) -> new_total`.
///
/// Any `Fn(&CoffeeOrder, Money) -> PricingResult<Money>` is a modifier, so
/// plain functions and closures can be registered directly.
///
/// ## Example
/// ```rust
/// use brew_core::{CoffeeOrder, Money, PricingEngine, PricingResult};
///
/// let mut engine = PricingEngine::reference();
/// engine.add_modifier(|_: &CoffeeOrder, total: Money| -> PricingResult<Money> {
///     Ok(total + Money::from_cents(25)) // cup deposit
/// });
///
/// let order = CoffeeOrder::from_raw("espresso", "small", "");
/// assert_eq!(engine.calculate(&order).unwrap(), Money::from_cents(275));
/// ```
pub trait Modifier {
    /// Returns the new running total.
    fn apply(&self, order: &CoffeeOrder, running_total: Money) -> PricingResult<Money>;
}

impl<F> Modifier for F
where
    F: Fn(&CoffeeOrder, Money) -> PricingResult<Money>,
{
    fn apply(&self, order: &CoffeeOrder, running_total: Money) -> PricingResult<Money> {
        self(order, running_total)
    }
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// Base-price table plus an ordered list of modifiers.
///
/// ## Invariants
/// - Base-price keys are stored normalised (trimmed, lower-case)
/// - `calculate` depends only on the order, the table and the modifiers
/// - The engine never mutates its own base-price table
pub struct PricingEngine {
    base_prices: HashMap<String, Money>,
    modifiers: Vec<Box<dyn Modifier>>,
}

impl PricingEngine {
    /// Creates an engine with no modifiers.
    pub fn new(base_prices: HashMap<String, Money>) -> Self {
        PricingEngine {
            base_prices: base_prices
                .into_iter()
                .map(|(name, price)| (normalize_token(&name), price))
                .collect(),
            modifiers: Vec::new(),
        }
    }

    /// Creates an engine with an initial modifier pipeline.
    pub fn with_modifiers(
        base_prices: HashMap<String, Money>,
        modifiers: Vec<Box<dyn Modifier>>,
    ) -> Self {
        let mut engine = PricingEngine::new(base_prices);
        engine.modifiers = modifiers;
        engine
    }

    /// The reference menu: espresso, latte, cappuccino, priced by size then extras.
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::{CoffeeOrder, PricingEngine};
    ///
    /// let engine = PricingEngine::reference();
    /// let order = CoffeeOrder::from_raw("latte", "medium", "soy, oat");
    /// assert_eq!(engine.calculate(&order).unwrap().to_string(), "$4.90");
    /// ```
    pub fn reference() -> Self {
        PricingEngine::with_modifiers(
            price_table(REFERENCE_BASE_PRICES.iter().copied()),
            vec![
                Box::new(SizeModifier::default()),
                Box::new(ExtrasModifier::default()),
            ],
        )
    }

    /// Appends a modifier to the end of the pipeline.
    ///
    /// Affects every later call to [`calculate`](Self::calculate); results
    /// already returned are untouched.
    pub fn add_modifier<M: Modifier + 'static>(&mut self, modifier: M) {
        self.modifiers.push(Box::new(modifier));
    }

    /// Number of registered modifiers.
    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }

    /// Base price for a beverage, if it is on the menu.
    pub fn base_price(&self, beverage: &str) -> Option<Money> {
        self.base_prices.get(&normalize_token(beverage)).copied()
    }

    /// Prices an order.
    ///
    /// ## Errors
    /// - [`PricingError::UnknownBeverage`] if the beverage has no base price;
    ///   no modifier runs in that case
    /// - Any error a modifier returns (e.g. [`PricingError::UnknownSize`]),
    ///   which stops the pipeline immediately
    pub fn calculate(&self, order: &CoffeeOrder) -> PricingResult<Money> {
        let base = self
            .base_price(&order.beverage)
            .ok_or_else(|| PricingError::UnknownBeverage(order.beverage.clone()))?;

        let total = self
            .modifiers
            .iter()
            .try_fold(base, |running, modifier| modifier.apply(order, running))?;

        debug!(
            beverage = %order.beverage,
            size = %order.size,
            base = %base,
            total = %total,
            modifiers = self.modifiers.len(),
            "Order priced"
        );

        Ok(total)
    }
}

impl PriceCalculator for PricingEngine {
    fn calculate(&self, order: &CoffeeOrder) -> PricingResult<Money> {
        PricingEngine::calculate(self, order)
    }
}

impl fmt::Debug for PricingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricingEngine")
            .field("base_prices", &self.base_prices)
            .field("modifiers", &self.modifiers.len())
            .finish()
    }
}

// =============================================================================
// Built-in Modifiers
// =============================================================================

/// Adds a fixed surcharge per size. Unknown sizes are an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeModifier {
    surcharges: HashMap<String, Money>,
}

impl SizeModifier {
    /// Creates a size modifier from a surcharge table.
    pub fn new(surcharges: HashMap<String, Money>) -> Self {
        SizeModifier {
            surcharges: surcharges
                .into_iter()
                .map(|(name, price)| (normalize_token(&name), price))
                .collect(),
        }
    }
}

impl Default for SizeModifier {
    /// small $0.00, medium $0.50, large $1.00
    fn default() -> Self {
        SizeModifier::new(price_table(REFERENCE_SIZE_SURCHARGES.iter().copied()))
    }
}

impl Modifier for SizeModifier {
    fn apply(&self, order: &CoffeeOrder, running_total: Money) -> PricingResult<Money> {
        let surcharge = self
            .surcharges
            .get(&normalize_token(&order.size))
            .copied()
            .ok_or_else(|| PricingError::UnknownSize(order.size.clone()))?;

        Ok(running_total + surcharge)
    }
}

/// Adds a surcharge for every recognised extra. Unknown extras cost nothing.
///
/// Duplicates are charged once per occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtrasModifier {
    surcharges: HashMap<String, Money>,
}

impl ExtrasModifier {
    /// Creates an extras modifier from a surcharge table.
    pub fn new(surcharges: HashMap<String, Money>) -> Self {
        ExtrasModifier {
            surcharges: surcharges
                .into_iter()
                .map(|(name, price)| (normalize_token(&name), price))
                .collect(),
        }
    }
}

impl Default for ExtrasModifier {
    /// soy $0.40, oat $0.50, vanilla $0.60, caramel $0.70
    fn default() -> Self {
        ExtrasModifier::new(price_table(REFERENCE_EXTRA_SURCHARGES.iter().copied()))
    }
}

impl Modifier for ExtrasModifier {
    fn apply(&self, order: &CoffeeOrder, running_total: Money) -> PricingResult<Money> {
        let extras_total: Money = order
            .extras
            .iter()
            .filter_map(|extra| self.surcharges.get(&normalize_token(extra)).copied())
            .sum();

        Ok(running_total + extras_total)
    }
}

/// Reference size modifier as a plain function.
pub fn size_modifier(order: &CoffeeOrder, running_total: Money) -> PricingResult<Money> {
    let surcharge = reference_lookup(REFERENCE_SIZE_SURCHARGES, &normalize_token(&order.size))
        .ok_or_else(|| PricingError::UnknownSize(order.size.clone()))?;

    Ok(running_total + surcharge)
}

/// Reference extras modifier as a plain function.
pub fn extras_modifier(order: &CoffeeOrder, running_total: Money) -> PricingResult<Money> {
    let extras_total: Money = order
        .extras
        .iter()
        .filter_map(|extra| reference_lookup(REFERENCE_EXTRA_SURCHARGES, &normalize_token(extra)))
        .sum();

    Ok(running_total + extras_total)
}

/// Adjusts the running total by a rate in basis points.
///
/// Positive `bps` is a surcharge, negative a discount: `-1000` takes 10% off
/// whatever the earlier modifiers produced. Rounds half-to-even.
///
/// ## Example
/// ```rust
/// use brew_core::{percentage_modifier, CoffeeOrder, PricingEngine};
///
/// let mut engine = PricingEngine::reference();
/// engine.add_modifier(percentage_modifier(-1000));
///
/// // $4.90 - 10% = $4.41
/// let order = CoffeeOrder::from_raw("latte", "medium", "soy, oat");
/// assert_eq!(engine.calculate(&order).unwrap().cents(), 441);
/// ```
pub fn percentage_modifier(bps: i64) -> impl Modifier {
    move |_: &CoffeeOrder, running_total: Money| -> PricingResult<Money> {
        Ok(running_total + running_total.apply_rate_bps(bps))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
