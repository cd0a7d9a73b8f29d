//! Matching engine facade.
//!
//! Owns one [`OrderStore`] and one [`Matcher`] and exposes the caller
//! operations:
//! - `add_order`: append to the store.
//! - `cancel_order`: remove by id, with a notice only if something went.
//! - `match_orders`: market pass then good-till-cancelled pass.
//! - `print_orders`: one status line per live order.
//!
//! `process_message` routes an [`InputMessage`] to the operation above
//! and wraps the results as [`OutputMessage`]s for the text codec.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, Rejected};
use crate::matcher::{MatchOutcome, Matcher};
use crate::messages::{CancelNotice, InputMessage, OutputMessage};
use crate::order::{Order, OrderId};
use crate::order_store::OrderStore;
use crate::order_type::OrderType;

#[derive(Debug, Default)]
pub struct MatchingEngine {
    store: OrderStore,
    matcher: Matcher,
    config: EngineConfig,
}

impl MatchingEngine {
    /// Create a new, empty, permissive engine.
    pub fn new() -> Self {
        MatchingEngine::default()
    }

    /// Create an empty engine with the given strictness.
    pub fn with_config(config: EngineConfig) -> Self {
        MatchingEngine {
            store: OrderStore::new(),
            matcher: Matcher::new(&config),
            config,
        }
    }

    /// Process a single input message and return any output events.
    ///
    /// On refusal the [`Rejected`] still carries the events produced before
    /// the refusal, so callers can emit them ahead of the error.
    pub fn process_message(&mut self, msg: InputMessage) -> Result<Vec<OutputMessage>, Rejected> {
        match msg {
            InputMessage::NewOrder(order) => {
                self.add_order(order)?;
                Ok(Vec::new())
            }
            InputMessage::Cancel(req) => Ok(self
                .cancel_order(req.id)?
                .map(OutputMessage::from)
                .into_iter()
                .collect()),
            InputMessage::Match => {
                let MatchOutcome { notices, error } = self.match_orders();
                let outputs = notices.into_iter().map(OutputMessage::from).collect();
                match error {
                    None => Ok(outputs),
                    Some(error) => Err(Rejected { error, outputs }),
                }
            }
            InputMessage::Print => Ok(self.print_orders()),
            InputMessage::Flush => {
                self.flush();
                Ok(Vec::new())
            }
        }
    }

    /// Append an order to the end of the store.
    ///
    /// Permissive by default; see [`EngineConfig`] for the checks that can
    /// be switched on.
    pub fn add_order(&mut self, order: Order) -> Result<(), EngineError> {
        self.validate(&order)?;
        debug!(
            id = order.id(),
            order_type = ?order.order_type(),
            side = ?order.side(),
            price = order.price(),
            quantity = order.quantity(),
            "order added"
        );
        self.store.add(order);
        Ok(())
    }

    /// Remove every live order with `id`.
    ///
    /// Returns a notice if at least one order was removed. An unknown id is
    /// a silent no-op unless `reject_unknown_cancel` is set.
    pub fn cancel_order(&mut self, id: OrderId) -> Result<Option<CancelNotice>, EngineError> {
        let removed = self.store.cancel(id);
        if removed == 0 {
            if self.config.reject_unknown_cancel {
                return Err(EngineError::UnknownOrderId(id));
            }
            return Ok(None);
        }

        debug!(id, removed, "order cancelled");
        Ok(Some(CancelNotice { id }))
    }

    /// Run both matching passes over the current store.
    pub fn match_orders(&mut self) -> MatchOutcome {
        self.matcher.match_orders(&mut self.store)
    }

    /// One [`OutputMessage::OrderStatus`] per live order, in store order.
    pub fn print_orders(&self) -> Vec<OutputMessage> {
        self.store
            .iter()
            .cloned()
            .map(OutputMessage::OrderStatus)
            .collect()
    }

    /// Drop every live order.
    pub fn flush(&mut self) {
        self.store.clear();
    }

    /// Read-only view of the live orders.
    pub fn orders(&self) -> &[Order] {
        self.store.snapshot()
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn validate(&self, order: &Order) -> Result<(), EngineError> {
        if self.config.reject_non_positive_quantity && order.quantity() <= 0 {
            return Err(EngineError::NonPositiveQuantity {
                id: order.id(),
                quantity: order.quantity(),
            });
        }

        let priced = match order.order_type() {
            OrderType::Market => false,
            OrderType::Limit | OrderType::GoodTillCancelled | OrderType::FillOrKillLimit => true,
        };
        // `!(p > 0.0)` also rejects NaN.
        if self.config.reject_non_positive_price && priced && !(order.price() > 0.0) {
            return Err(EngineError::NonPositivePrice {
                id: order.id(),
                price: order.price(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::CancelRequest;
    use crate::side::Side;

    #[test]
    fn process_message_routes_every_variant() {
        let mut engine = MatchingEngine::new();

        let out = engine
            .process_message(InputMessage::NewOrder(Order::new(
                1,
                OrderType::GoodTillCancelled,
                Side::Buy,
                102.0,
                10,
            )))
            .unwrap();
        assert!(out.is_empty());

        engine
            .process_message(InputMessage::NewOrder(Order::new(
                2,
                OrderType::Limit,
                Side::Sell,
                100.0,
                15,
            )))
            .unwrap();

        let out = engine.process_message(InputMessage::Match).unwrap();
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0], OutputMessage::Matched(n) if n.counterparty_id == 2));

        let out = engine.process_message(InputMessage::Print).unwrap();
        assert_eq!(out.len(), 1);
        match &out[0] {
            OutputMessage::OrderStatus(o) => assert_eq!((o.id(), o.quantity()), (2, 5)),
            other => panic!("unexpected {:?}", other),
        }

        let out = engine
            .process_message(InputMessage::Cancel(CancelRequest { id: 2 }))
            .unwrap();
        assert_eq!(out, vec![OutputMessage::cancelled(2)]);

        engine.add_order(Order::market(9, Side::Sell, 1)).unwrap();
        let out = engine.process_message(InputMessage::Flush).unwrap();
        assert!(out.is_empty());
        assert!(engine.orders().is_empty());
    }

    #[test]
    fn permissive_add_accepts_anything() {
        let mut engine = MatchingEngine::new();
        engine
            .add_order(Order::new(1, OrderType::Limit, Side::Buy, -5.0, 0))
            .unwrap();
        engine
            .add_order(Order::new(1, OrderType::Limit, Side::Buy, 5.0, -1))
            .unwrap();
        assert_eq!(engine.orders().len(), 2);
    }

    #[test]
    fn strict_add_rejects_non_positive_inputs() {
        let mut engine = MatchingEngine::with_config(EngineConfig::strict());

        let err = engine
            .add_order(Order::new(1, OrderType::Limit, Side::Buy, 100.0, 0))
            .unwrap_err();
        assert_eq!(err, EngineError::NonPositiveQuantity { id: 1, quantity: 0 });

        let err = engine
            .add_order(Order::new(2, OrderType::GoodTillCancelled, Side::Buy, 0.0, 5))
            .unwrap_err();
        assert_eq!(err, EngineError::NonPositivePrice { id: 2, price: 0.0 });

        // Market orders are exempt from the price check.
        engine.add_order(Order::market(3, Side::Buy, 5)).unwrap();
        assert_eq!(engine.orders().len(), 1);
    }

    #[test]
    fn strict_cancel_rejects_unknown_id() {
        let config = EngineConfig {
            reject_unknown_cancel: true,
            ..EngineConfig::default()
        };
        let mut engine = MatchingEngine::with_config(config);
        assert_eq!(
            engine.cancel_order(4).unwrap_err(),
            EngineError::UnknownOrderId(4)
        );
    }

    #[test]
    fn rejected_match_still_reports_earlier_fills() {
        let mut engine = MatchingEngine::with_config(EngineConfig::strict());
        engine
            .add_order(Order::new(1, OrderType::Limit, Side::Sell, 100.0, 10))
            .unwrap();
        engine.add_order(Order::market(2, Side::Sell, 3)).unwrap();
        engine
            .add_order(Order::new(3, OrderType::Limit, Side::Buy, 90.0, 3))
            .unwrap();
        engine
            .add_order(Order::new(4, OrderType::GoodTillCancelled, Side::Buy, 100.0, 20))
            .unwrap();

        let rejected = engine.process_message(InputMessage::Match).unwrap_err();

        assert!(matches!(
            rejected.error,
            EngineError::QuantityUnderflow { incoming_id: 4, counterparty_id: 1, .. }
        ));
        assert_eq!(rejected.outputs.len(), 1);
        assert!(matches!(
            rejected.outputs[0],
            OutputMessage::Matched(n) if n.incoming_id == 2 && n.counterparty_id == 3
        ));
        let ids: Vec<_> = engine.orders().iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn rejected_add_carries_no_outputs() {
        let mut engine = MatchingEngine::with_config(EngineConfig::strict());
        let rejected = engine
            .process_message(InputMessage::NewOrder(Order::market(1, Side::Buy, 0)))
            .unwrap_err();
        assert_eq!(rejected.error, EngineError::NonPositiveQuantity { id: 1, quantity: 0 });
        assert!(rejected.outputs.is_empty());
    }
}
