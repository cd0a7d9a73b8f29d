//! Engine behaviour switches.
//!
//! The default is fully permissive. Every check is an explicit opt-in so
//! that a default engine behaves exactly like the plain matching rules.

/// Strictness flags consulted by the engine and matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Cancelling an id that is not live returns `UnknownOrderId`.
    pub reject_unknown_cancel: bool,

    /// `add_order` rejects quantities `<= 0`.
    pub reject_non_positive_quantity: bool,

    /// `add_order` rejects non-market prices `<= 0`.
    pub reject_non_positive_price: bool,

    /// A fill whose counterparty holds less than the incoming quantity
    /// returns `QuantityUnderflow` instead of going negative.
    pub reject_quantity_underflow: bool,
}

impl EngineConfig {
    /// All checks off.
    pub fn permissive() -> Self {
        EngineConfig::default()
    }

    /// All checks on.
    pub fn strict() -> Self {
        EngineConfig {
            reject_unknown_cancel: true,
            reject_non_positive_quantity: true,
            reject_non_positive_price: true,
            reject_quantity_underflow: true,
        }
    }
}
