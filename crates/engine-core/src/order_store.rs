//! Insertion-ordered store of live orders.
//!
//! Position in the store is the only priority there is: the matcher scans
//! from the front and takes the first eligible counterparty. There are no
//! price levels and no time stamps.
//!
//! The store exclusively owns every [`Order`]. The matcher works with
//! positional indices and asks the store to mutate or remove; it never
//! holds a reference across a removal.

use crate::order::{Order, OrderId, Quantity};

#[derive(Debug, Default, Clone)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        OrderStore::default()
    }

    /// Append an order at the back. Duplicate ids are accepted.
    pub fn add(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Remove every order with `id`, returning how many were removed.
    pub fn cancel(&mut self, id: OrderId) -> usize {
        let before = self.orders.len();
        self.orders.retain(|o| o.id() != id);
        before - self.orders.len()
    }

    /// Current contents in store order.
    pub fn snapshot(&self) -> &[Order] {
        &self.orders
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    /// Returns `true` if at least one live order has `id`.
    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.iter().any(|o| o.id() == id)
    }

    /// Drop all live orders.
    pub fn clear(&mut self) {
        self.orders.clear();
    }

    // -------------------------------------------------------------------------
    // Positional access for the matcher
    // -------------------------------------------------------------------------

    /// Set the quantity of the order at `index`.
    ///
    /// Returns `None` if `index` is out of range.
    pub(crate) fn set_quantity_at(&mut self, index: usize, quantity: Quantity) -> Option<()> {
        let order = self.orders.get_mut(index)?;
        order.set_quantity(quantity);
        Some(())
    }

    /// Remove and return the order at `index`, shifting later orders down.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<Order> {
        if index < self.orders.len() {
            Some(self.orders.remove(index))
        } else {
            None
        }
    }
}
