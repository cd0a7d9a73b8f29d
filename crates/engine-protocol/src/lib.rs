//! engine-protocol
//!
//! Text encoding/decoding for the matching engine.
//!
//! This crate is responsible for turning script lines into logical engine
//! messages (`engine_core::InputMessage`) and engine events
//! (`engine_core::OutputMessage`) into the diagnostic lines printed by
//! callers.
//!
//! - [`csv_codec`] : CSV scripts in, diagnostic lines out

pub mod csv_codec;

pub use csv_codec::{format_output, parse_input_line};
