//! Order representation held by the [`OrderStore`](crate::order_store::OrderStore).
//!
//! Identity, type, side and price are fixed at construction. Quantity is
//! the only mutable field and is signed: a fill can drive it below zero
//! and that value must stay observable.

use crate::order_type::OrderType;
use crate::side::Side;

/// Caller-assigned order identifier.
pub type OrderId = i32;

/// Price as a real number. Market orders conventionally carry `0.0`.
pub type Price = f64;

/// Remaining quantity.
pub type Quantity = i64;

/// A single live order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    order_type: OrderType,
    side: Side,
    price: Price,
    quantity: Quantity,
}

impl Order {
    pub fn new(
        id: OrderId,
        order_type: OrderType,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Order {
            id,
            order_type,
            side,
            price,
            quantity,
        }
    }

    /// Convenience constructor for a market order (price `0.0`).
    pub fn market(id: OrderId, side: Side, quantity: Quantity) -> Self {
        Order::new(id, OrderType::Market, side, 0.0, quantity)
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Overwrite the remaining quantity. No clamping is applied.
    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    /// Returns `true` if nothing remains on the order.
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_quantity_keeps_negative_values() {
        let mut o = Order::new(7, OrderType::Limit, Side::Sell, 100.0, 5);
        o.set_quantity(-3);
        assert_eq!(o.quantity(), -3);
        assert!(!o.is_filled());
        assert_eq!(o.id(), 7);
        assert_eq!(o.price(), 100.0);
    }

    #[test]
    fn market_constructor_uses_zero_price() {
        let o = Order::market(1, Side::Buy, 10);
        assert_eq!(o.order_type(), OrderType::Market);
        assert_eq!(o.price(), 0.0);
    }
}
