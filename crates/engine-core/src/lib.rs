//! engine-core
//!
//! Pure matching engine logic:
//! - order representation
//! - insertion-ordered order store
//! - two-pass matcher (market, then good-till-cancelled)
//! - engine facade and messages

pub mod side;
pub mod order_type;
pub mod order;
pub mod order_store;
pub mod matcher;
pub mod messages;
pub mod matching_engine;
pub mod config;
pub mod error;

pub use side::Side;
pub use order_type::{MatchPass, OrderType};

pub use messages::{
    CancelNotice,
    CancelRequest,
    InputMessage,
    MatchNotice,
    OutputMessage,
};

pub use order::{Order, OrderId, Price, Quantity};
pub use order_store::OrderStore;
pub use matcher::{find_match, Execution, MatchOutcome, Matcher};
pub use matching_engine::MatchingEngine;
pub use config::EngineConfig;
pub use error::{EngineError, Rejected};
