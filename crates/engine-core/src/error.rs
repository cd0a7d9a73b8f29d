//! Error types for the core matching engine.
//!
//! With the default [`EngineConfig`](crate::config::EngineConfig) the
//! engine is infallible: unknown cancels, non-positive inputs and
//! undersized counterparties are all absorbed. The first four variants are
//! only produced when the matching strict flag is switched on.

use thiserror::Error;

use crate::messages::OutputMessage;
use crate::order::{OrderId, Price, Quantity};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Cancel requested for an id with no live order.
    #[error("unknown order id {0}")]
    UnknownOrderId(OrderId),

    /// Order submitted with a quantity of zero or less.
    #[error("order {id} has non-positive quantity {quantity}")]
    NonPositiveQuantity { id: OrderId, quantity: Quantity },

    /// Non-market order submitted with a price of zero or less.
    #[error("order {id} has non-positive price {price}")]
    NonPositivePrice { id: OrderId, price: Price },

    /// Counterparty cannot cover the incoming order's quantity.
    #[error(
        "order {counterparty_id} holds {available} but order {incoming_id} requires {requested}"
    )]
    QuantityUnderflow {
        incoming_id: OrderId,
        counterparty_id: OrderId,
        requested: Quantity,
        available: Quantity,
    },

    /// A positional handle passed to the matcher does not address a live
    /// order. Not reachable through [`MatchingEngine`](crate::MatchingEngine).
    #[error("no order at store index {0}")]
    InvalidIndex(usize),
}

/// A refused message together with whatever it produced before the refusal.
///
/// Only a `Match` can produce output before failing: fills executed ahead
/// of a refused one are real and their notices are carried here.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct Rejected {
    pub error: EngineError,
    pub outputs: Vec<OutputMessage>,
}

impl From<EngineError> for Rejected {
    fn from(error: EngineError) -> Self {
        Rejected {
            error,
            outputs: Vec::new(),
        }
    }
}
