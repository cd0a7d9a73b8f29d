//! Matching algorithm over an [`OrderStore`].
//!
//! `match_orders` runs two passes in a fixed order:
//! 1. every `Market` order, then
//! 2. every `GoodTillCancelled` order,
//!
//! each over the store as left by the previous pass. For each incoming
//! order the store is scanned from the front and the *first* order on the
//! opposite side whose price crosses is taken. There is no ranking among
//! eligible counterparties.
//!
//! A fill always prices at the counterparty's price and subtracts the
//! incoming order's full quantity from the counterparty. The incoming
//! order is then removed whether or not the quantities reconciled; the
//! counterparty is removed only if it lands exactly on zero.
//!
//! The passes walk the store with an index cursor. When a removal happens
//! ahead of the cursor nothing moves; when it happens behind the cursor
//! the cursor is pulled back by one. Every order is visited exactly once.

use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::messages::MatchNotice;
use crate::order::{Order, Quantity};
use crate::order_store::OrderStore;
use crate::order_type::MatchPass;
use crate::side::Side;

/// Fills produced by one `match_orders` call.
///
/// `error` is set when a fill was refused; `notices` still lists every
/// fill executed before that point, in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    pub notices: Vec<MatchNotice>,
    pub error: Option<EngineError>,
}

/// Result of a single fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Execution {
    pub notice: MatchNotice,

    /// The counterparty reached exactly zero and was removed from the store.
    pub counterparty_removed: bool,
}

/// Stateless matcher; only carries the strictness it was built with.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    reject_quantity_underflow: bool,
}

impl Matcher {
    pub fn new(config: &EngineConfig) -> Self {
        Matcher {
            reject_quantity_underflow: config.reject_quantity_underflow,
        }
    }

    /// Run the market pass and then the good-till-cancelled pass.
    ///
    /// Returns the fills in execution order. With underflow rejection on,
    /// the first refused fill stops the call; earlier fills stand and are
    /// reported alongside the error.
    pub fn match_orders(&self, store: &mut OrderStore) -> MatchOutcome {
        let mut outcome = MatchOutcome::default();
        for pass in MatchPass::ALL {
            if let Err(err) = self.run_pass(store, pass, &mut outcome.notices) {
                outcome.error = Some(err);
                break;
            }
        }
        outcome
    }

    /// Fill the order at `incoming` against the order at `counterparty`.
    ///
    /// Does not remove the incoming order; that is the calling pass's job.
    pub fn execute_order(
        &self,
        store: &mut OrderStore,
        incoming: usize,
        counterparty: usize,
    ) -> Result<Execution, EngineError> {
        let (incoming_id, requested) = store
            .get(incoming)
            .map(|o| (o.id(), o.quantity()))
            .ok_or(EngineError::InvalidIndex(incoming))?;
        let (counterparty_id, available, price) = store
            .get(counterparty)
            .map(|o| (o.id(), o.quantity(), o.price()))
            .ok_or(EngineError::InvalidIndex(counterparty))?;

        if self.reject_quantity_underflow && available < requested {
            return Err(EngineError::QuantityUnderflow {
                incoming_id,
                counterparty_id,
                requested,
                available,
            });
        }

        // Unguarded, but wraps instead of panicking at the ends of i64.
        let remaining = available.wrapping_sub(requested);
        store
            .set_quantity_at(counterparty, remaining)
            .ok_or(EngineError::InvalidIndex(counterparty))?;

        debug!(
            incoming_id,
            counterparty_id,
            price,
            quantity = requested,
            remaining,
            "orders matched"
        );

        let counterparty_removed = store.get(counterparty).is_some_and(Order::is_filled);
        if counterparty_removed {
            store.remove_at(counterparty);
        } else if remaining < 0 {
            warn!(
                counterparty_id,
                remaining, "counterparty quantity went negative"
            );
        }

        Ok(Execution {
            notice: MatchNotice {
                incoming_id,
                counterparty_id,
                price,
                quantity: requested,
            },
            counterparty_removed,
        })
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    fn run_pass(
        &self,
        store: &mut OrderStore,
        pass: MatchPass,
        notices: &mut Vec<MatchNotice>,
    ) -> Result<(), EngineError> {
        trace!(?pass, live = store.len(), "matching pass started");

        let mut cursor = 0;
        while let Some(order) = store.get(cursor) {
            if order.order_type().pass() != Some(pass) {
                cursor += 1;
                continue;
            }

            let quantity = order.quantity();
            let Some(counterparty) = find_match(store, cursor, quantity, false) else {
                cursor += 1;
                continue;
            };

            let execution = self.execute_order(store, cursor, counterparty)?;
            if execution.counterparty_removed && counterparty < cursor {
                cursor -= 1;
            }
            // The incoming order is consumed by a single fill.
            store.remove_at(cursor);
            notices.push(execution.notice);
        }

        trace!(?pass, live = store.len(), "matching pass finished");
        Ok(())
    }
}

/// Scan the store from the front for the first counterparty of the order at
/// `incoming`.
///
/// With `full_match` set the counterparty must also hold at least
/// `quantity`. Returns `None` if `incoming` is out of range or nothing
/// qualifies.
pub fn find_match(
    store: &OrderStore,
    incoming: usize,
    quantity: Quantity,
    full_match: bool,
) -> Option<usize> {
    let order = store.get(incoming)?;
    store.iter().position(|candidate| {
        candidate.side() != order.side()
            && crosses(order, candidate)
            && (!full_match || candidate.quantity() >= quantity)
    })
}

/// Price crossing for `incoming` against a resting `candidate`.
///
/// A buy needs the candidate at or below its price; a sell needs it at or
/// above. Market orders are compared with their literal price.
pub fn crosses(incoming: &Order, candidate: &Order) -> bool {
    match incoming.side() {
        Side::Buy => candidate.price() <= incoming.price(),
        Side::Sell => candidate.price() >= incoming.price(),
    }
}
