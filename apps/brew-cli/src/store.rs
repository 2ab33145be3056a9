//! # In-Memory Order Store
//!
//! The persistence sink used by the console app. It lives on the stack of
//! `run` and is dropped when the process exits; nothing is written anywhere.

use brew_core::{CoffeeOrder, Money, OrderSink};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// One priced order as kept by the store.
#[derive(Debug, Clone, Serialize)]
pub struct StoredOrder {
    /// Store-assigned identifier (UUID v4).
    pub id: Uuid,

    /// The order exactly as it was priced.
    pub order: CoffeeOrder,

    /// Total returned by the pricing engine.
    pub total: Money,

    /// When the store received the order.
    pub stored_at: DateTime<Utc>,
}

/// Caller-owned list of priced orders, in arrival order.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: Vec<StoredOrder>,
}

impl InMemoryOrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an order and returns the stored record.
    pub fn record(&mut self, order: &CoffeeOrder, total: Money) -> &StoredOrder {
        let stored = StoredOrder {
            id: Uuid::new_v4(),
            order: order.clone(),
            total,
            stored_at: Utc::now(),
        };
        debug!(id = %stored.id, total = %total, "Order stored");

        self.orders.push(stored);
        &self.orders[self.orders.len() - 1]
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// The most recently stored order.
    pub fn last(&self) -> Option<&StoredOrder> {
        self.orders.last()
    }

    /// All stored orders, oldest first.
    pub fn orders(&self) -> &[StoredOrder] {
        &self.orders
    }
}

impl OrderSink for InMemoryOrderStore {
    fn save(&mut self, order: &CoffeeOrder, total: Money) {
        self.record(order, total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_keeps_arrival_order() {
        let mut store = InMemoryOrderStore::new();
        assert!(store.is_empty());

        store.save(&CoffeeOrder::from_raw("latte", "medium", "soy"), Money::from_cents(440));
        store.save(&CoffeeOrder::from_raw("espresso", "small", ""), Money::from_cents(250));

        assert_eq!(store.len(), 2);
        assert_eq!(store.orders()[0].order.beverage, "latte");
        assert_eq!(store.last().map(|s| s.total), Some(Money::from_cents(250)));
        assert_ne!(store.orders()[0].id, store.orders()[1].id);
    }

    #[test]
    fn test_stored_order_serializes_total_in_cents() {
        let mut store = InMemoryOrderStore::new();
        let stored = store.record(
            &CoffeeOrder::from_raw("cappuccino", "small", "water"),
            Money::from_cents(380),
        );

        let json = serde_json::to_value(stored).unwrap();
        assert_eq!(json["total"], 380);
        assert_eq!(json["order"]["extras"][0], "water");
        assert!(json["stored_at"].is_string());
    }
}
