//! # Order Processor
//!
//! Prices an order, then hands it to the injected side effects.
//!
//! ## Processing Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      OrderProcessor::process                            │
//! │                                                                         │
//! │  1. calculator.calculate(order) ─── Err ──► return Err (no side effects)│
//! │           │ Ok(total)                                                   │
//! │           ▼                                                             │
//! │  2. sink.save(order, total)                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. notifier.notify("Order ready: ... Total: $4.90")                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  4. return Ok(total)                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence always happens before notification.

use tracing::{info, warn};

use crate::error::PricingResult;
use crate::money::Money;
use crate::order::CoffeeOrder;
use crate::pricing::PriceCalculator;

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Where priced orders go (memory, file, database...).
///
/// Implemented for any `FnMut(&CoffeeOrder, Money)`.
pub trait OrderSink {
    /// Records a priced order.
    fn save(&mut self, order: &CoffeeOrder, total: Money);
}

impl<F> OrderSink for F
where
    F: FnMut(&CoffeeOrder, Money),
{
    fn save(&mut self, order: &CoffeeOrder, total: Money) {
        self(order, total)
    }
}

/// Where human-readable messages go (console, log, push...).
///
/// Implemented for any `FnMut(&str)`.
pub trait Notifier {
    /// Delivers one message.
    fn notify(&mut self, message: &str);
}

impl<F> Notifier for F
where
    F: FnMut(&str),
{
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// The message sent for a completed order.
///
/// ## Example
/// ```rust
/// use brew_core::{order_ready_message, CoffeeOrder, Money};
///
/// let order = CoffeeOrder::from_raw("espresso", "large", "");
/// assert_eq!(
///     order_ready_message(&order, Money::from_cents(350)),
///     "Order ready: Large Espresso with no extras. Total: $3.50"
/// );
/// ```
pub fn order_ready_message(order: &CoffeeOrder, total: Money) -> String {
    format!("Order ready: {} Total: {}", order.describe(), total)
}

// =============================================================================
// Order Processor
// =============================================================================

/// Composes a calculator with a persistence sink and a notification sink.
///
/// Holds no state besides its three collaborators.
#[derive(Debug)]
pub struct OrderProcessor<C, S, N> {
    calculator: C,
    sink: S,
    notifier: N,
}

impl<C, S, N> OrderProcessor<C, S, N>
where
    C: PriceCalculator,
    S: OrderSink,
    N: Notifier,
{
    /// Creates a processor from its collaborators.
    pub fn new(calculator: C, sink: S, notifier: N) -> Self {
        OrderProcessor {
            calculator,
            sink,
            notifier,
        }
    }

    /// Prices an order and triggers both side effects.
    ///
    /// ## Errors
    /// Any pricing error is returned unchanged. Neither the sink nor the
    /// notifier is called in that case.
    pub fn process(&mut self, order: &CoffeeOrder) -> PricingResult<Money> {
        let total = match self.calculator.calculate(order) {
            Ok(total) => total,
            Err(e) => {
                warn!(beverage = %order.beverage, size = %order.size, error = %e, "Order rejected");
                return Err(e);
            }
        };

        self.sink.save(order, total);
        self.notifier.notify(&order_ready_message(order, total));

        info!(beverage = %order.beverage, total = %total, "Order processed");
        Ok(total)
    }

    /// Gives the collaborators back to the caller.
    pub fn into_parts(self) -> (C, S, N) {
        (self.calculator, self.sink, self.notifier)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use crate::pricing::PricingEngine;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Event {
        Saved(CoffeeOrder, Money),
        Notified(String),
    }

    #[test]
    fn test_success_saves_then_notifies() {
        let events = RefCell::new(Vec::new());
        let engine = PricingEngine::reference();
        let order = CoffeeOrder::from_raw("latte", "medium", "soy, oat");

        let total = {
            let mut processor = OrderProcessor::new(
                &engine,
                |o: &CoffeeOrder, t: Money| events.borrow_mut().push(Event::Saved(o.clone(), t)),
                |m: &str| events.borrow_mut().push(Event::Notified(m.to_string())),
            );
            processor.process(&order).unwrap()
        };

        assert_eq!(total, Money::from_cents(490));
        assert_eq!(
            events.into_inner(),
            vec![
                Event::Saved(order, Money::from_cents(490)),
                Event::Notified(
                    "Order ready: Medium Latte with soy, oat. Total: $4.90".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_unknown_beverage_has_no_side_effects() {
        let mut saved = 0;
        let mut notified = 0;
        let order = CoffeeOrder::from_raw("mocha", "small", "");

        let result = {
            let mut processor = OrderProcessor::new(
                PricingEngine::reference(),
                |_: &CoffeeOrder, _: Money| saved += 1,
                |_: &str| notified += 1,
            );
            processor.process(&order)
        };

        assert_eq!(result, Err(PricingError::UnknownBeverage("mocha".to_string())));
        assert_eq!(saved, 0);
        assert_eq!(notified, 0);
    }

    #[test]
    fn test_unknown_size_has_no_side_effects() {
        let mut saved = Vec::new();
        let mut messages = Vec::new();
        let order = CoffeeOrder::from_raw("latte", "venti", "oat");

        let result = {
            let mut processor = OrderProcessor::new(
                PricingEngine::reference(),
                |o: &CoffeeOrder, t: Money| saved.push((o.clone(), t)),
                |m: &str| messages.push(m.to_string()),
            );
            processor.process(&order)
        };

        assert!(matches!(result, Err(PricingError::UnknownSize(ref s)) if s == "venti"));
        assert!(saved.is_empty());
        assert!(messages.is_empty());
    }

    #[test]
    fn test_each_success_calls_each_sink_once() {
        let mut saved = Vec::new();
        let mut messages = Vec::new();

        {
            let mut processor = OrderProcessor::new(
                PricingEngine::reference(),
                |o: &CoffeeOrder, t: Money| saved.push((o.beverage.clone(), t)),
                |m: &str| messages.push(m.to_string()),
            );
            processor
                .process(&CoffeeOrder::from_raw("espresso", "large", ""))
                .unwrap();
            processor
                .process(&CoffeeOrder::from_raw("cappuccino", "small", "water"))
                .unwrap();
        }

        assert_eq!(
            saved,
            vec![
                ("espresso".to_string(), Money::from_cents(350)),
                ("cappuccino".to_string(), Money::from_cents(380)),
            ]
        );
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[1],
            "Order ready: Small Cappuccino with water. Total: $3.80"
        );
    }

    #[test]
    fn test_into_parts_returns_sinks() {
        struct Count(usize);
        impl OrderSink for Count {
            fn save(&mut self, _: &CoffeeOrder, _: Money) {
                self.0 += 1;
            }
        }

        let mut processor =
            OrderProcessor::new(PricingEngine::reference(), Count(0), |_: &str| {});
        processor
            .process(&CoffeeOrder::from_raw("latte", "small", ""))
            .unwrap();

        let (engine, count, _) = processor.into_parts();
        assert_eq!(count.0, 1);
        assert_eq!(engine.modifier_count(), 2);
    }
}
