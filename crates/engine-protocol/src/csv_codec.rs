// crates/engine-protocol/src/csv_codec.rs

//! CSV script codec.
//!
//! Input format (lines → `InputMessage`):
//!
//! - New order:
//!   `N, id(signed int), type(char M L G or F), side(char B or S), price(real), qty(int)`
//!
//! - Cancel:
//!   `C, id(signed int)`
//!
//! - Match:
//!   `M`
//!
//! - Print:
//!   `P`
//!
//! - Flush:
//!   `F`
//!
//! Output format (`OutputMessage` → line):
//!
//! - Cancelled:
//!   `Order <id> has been cancelled.`
//!
//! - Matched:
//!   `Matched OrderID: <incomingId> with OrderID: <counterpartyId> at price: <price>`
//!
//! - Order status:
//!   `OrderId: <id> Type: <ordinal> Side: <ordinal> Price: <price> Quantity: <qty>`
//!
//! Prices are always printed with five decimal places.

use std::num::{ParseFloatError, ParseIntError};

use engine_core::{CancelRequest, InputMessage, Order, OrderType, OutputMessage, Side};

/// Parse a single CSV line into an `InputMessage`.
///
/// Returns `None` for blank lines, comments (starting with `#`) and
/// anything malformed.
pub fn parse_input_line(line: &str) -> Option<InputMessage> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let tokens = split_and_trim(trimmed, ',');
    if tokens.is_empty() {
        return None;
    }

    let msg_type = single_char(&tokens[0])?;

    match msg_type {
        'N' => parse_new_order(&tokens),
        'C' => parse_cancel(&tokens),
        'M' => bare(&tokens, InputMessage::Match),
        'P' => bare(&tokens, InputMessage::Print),
        'F' => bare(&tokens, InputMessage::Flush),
        _ => None,
    }
}

fn parse_new_order(tokens: &[String]) -> Option<InputMessage> {
    // N, id, type, side, price, qty
    if tokens.len() != 6 {
        return None;
    }

    let id = parse_i32(&tokens[1]).ok()?;
    let order_type = OrderType::from_char(single_char(&tokens[2])?)?;
    let side = Side::from_char(single_char(&tokens[3])?)?;
    let price = parse_f64(&tokens[4]).ok()?;
    let quantity = parse_i64(&tokens[5]).ok()?;

    Some(InputMessage::NewOrder(Order::new(
        id, order_type, side, price, quantity,
    )))
}

fn parse_cancel(tokens: &[String]) -> Option<InputMessage> {
    // C, id
    if tokens.len() != 2 {
        return None;
    }

    let id = parse_i32(&tokens[1]).ok()?;
    Some(InputMessage::Cancel(CancelRequest { id }))
}

fn bare(tokens: &[String], msg: InputMessage) -> Option<InputMessage> {
    if tokens.len() == 1 {
        Some(msg)
    } else {
        None
    }
}

/// Format an `OutputMessage` as a diagnostic line.
pub fn format_output(msg: &OutputMessage) -> String {
    match msg {
        OutputMessage::Cancelled(c) => format!("Order {} has been cancelled.", c.id),
        OutputMessage::Matched(m) => format!(
            "Matched OrderID: {} with OrderID: {} at price: {:.5}",
            m.incoming_id, m.counterparty_id, m.price
        ),
        OutputMessage::OrderStatus(o) => format_order(o),
    }
}

/// Format one order-listing line.
pub fn format_order(order: &Order) -> String {
    format!(
        "OrderId: {} Type: {} Side: {} Price: {:.5} Quantity: {}",
        order.id(),
        order.order_type().ordinal(),
        order.side().ordinal(),
        order.price(),
        order.quantity()
    )
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn split_and_trim(s: &str, delimiter: char) -> Vec<String> {
    s.split(delimiter)
        .map(|tok| tok.trim().to_string())
        .collect()
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(c)
}

fn parse_i32(s: &str) -> Result<i32, ParseIntError> {
    s.parse::<i32>()
}

fn parse_i64(s: &str) -> Result<i64, ParseIntError> {
    s.parse::<i64>()
}

fn parse_f64(s: &str) -> Result<f64, ParseFloatError> {
    s.parse::<f64>()
}
