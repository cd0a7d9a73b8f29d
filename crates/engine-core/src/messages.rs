//! Message types used by the core matching engine.
//!
//! These are **transport-agnostic** logical messages:
//! - [`InputMessage`]: what the engine consumes.
//! - [`OutputMessage`]: what the engine produces.
//!
//! Rendering to text lives in the `engine-protocol` crate; this module
//! is purely logical.

use crate::order::{Order, OrderId, Price, Quantity};

/// A request into the matching engine.
#[derive(Debug, Clone, PartialEq)]
pub enum InputMessage {
    /// Append an order to the store.
    NewOrder(Order),

    /// Remove every live order with the given id.
    Cancel(CancelRequest),

    /// Run the market pass followed by the good-till-cancelled pass.
    Match,

    /// List every live order in store order.
    Print,

    /// Drop all live orders.
    Flush,
}

/// An event emitted by the matching engine.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputMessage {
    /// An order was cancelled.
    Cancelled(CancelNotice),

    /// An incoming order was filled against a counterparty.
    Matched(MatchNotice),

    /// One line of an order listing.
    OrderStatus(Order),
}

/// Cancel request (input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelRequest {
    pub id: OrderId,
}

/// Cancellation notice (output). Only produced when something was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelNotice {
    pub id: OrderId,
}

/// Fill notice (output).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchNotice {
    pub incoming_id: OrderId,
    pub counterparty_id: OrderId,

    /// Always the counterparty's price.
    pub price: Price,

    /// Incoming order's requested quantity, subtracted from the counterparty.
    pub quantity: Quantity,
}

impl OutputMessage {
    /// Convenience constructor for a cancellation notice.
    pub fn cancelled(id: OrderId) -> Self {
        OutputMessage::Cancelled(CancelNotice { id })
    }
}

impl From<MatchNotice> for OutputMessage {
    fn from(notice: MatchNotice) -> Self {
        OutputMessage::Matched(notice)
    }
}

impl From<CancelNotice> for OutputMessage {
    fn from(notice: CancelNotice) -> Self {
        OutputMessage::Cancelled(notice)
    }
}
