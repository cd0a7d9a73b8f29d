//! Order type.
//!
//! Only `Market` and `GoodTillCancelled` orders are ever the incoming side
//! of a matching pass. `Limit` and `FillOrKillLimit` orders rest in the
//! store until they are picked as a counterparty or cancelled.

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OrderType {
    Market,
    Limit,
    GoodTillCancelled,
    FillOrKillLimit,
}

/// A matching pass, in the order the matcher runs them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MatchPass {
    Market,
    GoodTillCancelled,
}

impl MatchPass {
    /// Every pass, in run order.
    pub const ALL: [MatchPass; 2] = [MatchPass::Market, MatchPass::GoodTillCancelled];
}

impl OrderType {
    /// Ordinal used by the order listing.
    pub fn ordinal(self) -> u8 {
        match self {
            OrderType::Market => 0,
            OrderType::Limit => 1,
            OrderType::GoodTillCancelled => 2,
            OrderType::FillOrKillLimit => 3,
        }
    }

    /// The pass in which orders of this type are the incoming side, if any.
    pub fn pass(self) -> Option<MatchPass> {
        match self {
            OrderType::Market => Some(MatchPass::Market),
            OrderType::GoodTillCancelled => Some(MatchPass::GoodTillCancelled),
            OrderType::Limit | OrderType::FillOrKillLimit => None,
        }
    }

    /// Whether orders of this type are actively matched by a pass.
    pub fn is_incoming(self) -> bool {
        self.pass().is_some()
    }

    /// Parse the script char (`M`, `L`, `G`, `F`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(OrderType::Market),
            'L' => Some(OrderType::Limit),
            'G' => Some(OrderType::GoodTillCancelled),
            'F' => Some(OrderType::FillOrKillLimit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_market_and_gtc_are_incoming() {
        assert!(OrderType::Market.is_incoming());
        assert!(OrderType::GoodTillCancelled.is_incoming());
        assert!(!OrderType::Limit.is_incoming());
        assert!(!OrderType::FillOrKillLimit.is_incoming());
    }

    #[test]
    fn passes_run_market_first() {
        assert_eq!(
            MatchPass::ALL.map(Some),
            [OrderType::Market.pass(), OrderType::GoodTillCancelled.pass()]
        );
    }

    #[test]
    fn ordinals() {
        assert_eq!(OrderType::Market.ordinal(), 0);
        assert_eq!(OrderType::Limit.ordinal(), 1);
        assert_eq!(OrderType::GoodTillCancelled.ordinal(), 2);
        assert_eq!(OrderType::FillOrKillLimit.ordinal(), 3);
    }

    #[test]
    fn parses_script_chars() {
        assert_eq!(OrderType::from_char('M'), Some(OrderType::Market));
        assert_eq!(OrderType::from_char('L'), Some(OrderType::Limit));
        assert_eq!(OrderType::from_char('G'), Some(OrderType::GoodTillCancelled));
        assert_eq!(OrderType::from_char('F'), Some(OrderType::FillOrKillLimit));
        assert_eq!(OrderType::from_char('X'), None);
    }
}
