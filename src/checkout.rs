//! Checkout Message
//!
//! Derives the human-readable order summary and the outbound deep-link URL
//! that stands in for a checkout flow: ordering happens by sending the
//! summary to a fixed contact over a messaging service. Pure functions of the
//! cart contents; opening the link is the caller's decision.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rust_decimal::Decimal;

use crate::lines::CartLine;

/// Destination contact id for order messages.
pub const ORDER_CONTACT: &str = "7006502449";

const MESSAGE_BASE: &str = "https://wa.me";

/// `encodeURIComponent` encoding: everything except alphanumerics and
/// `- _ . ! ~ * ' ( )` is percent-encoded, and spaces become `%20`.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Format a rupee amount with two decimal places and no digit grouping.
pub fn rupees(amount: Decimal) -> String {
    format!("\u{20b9}{amount:.2}")
}

fn line_summary(line: &CartLine) -> String {
    let mut text = format!(
        "\u{2022} {} (Qty: {}) - {}",
        line.name,
        line.quantity,
        rupees(line.subtotal())
    );

    if let Some(size) = &line.size {
        text.push_str(&format!(" | Size: {size}"));
    }
    if let Some(color) = &line.color {
        text.push_str(&format!(" | Color: {color}"));
    }
    if let Some(customization) = &line.customization {
        if !customization.stickers.is_empty() {
            let names = customization
                .stickers
                .iter()
                .map(|sticker| sticker.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            text.push_str(&format!(" | Custom stickers: {names}"));
        }
    }

    text
}

/// Build the plain-text order summary: one bullet per line, then the total.
pub fn checkout_message(lines: &[CartLine], total: Decimal) -> String {
    let order_details = lines
        .iter()
        .map(line_summary)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Hi! I'd like to place an order from OODD:\n\n{order_details}\n\nTotal: {}\n\nPlease let me know the next steps. Thank you!",
        rupees(total)
    )
}

/// Build the outbound deep-link URL with the percent-encoded order summary.
pub fn checkout_url(lines: &[CartLine], total: Decimal) -> String {
    let message = checkout_message(lines, total);
    let encoded = utf8_percent_encode(&message, MESSAGE_ENCODE_SET);

    format!("{MESSAGE_BASE}/{ORDER_CONTACT}?text={encoded}")
}
