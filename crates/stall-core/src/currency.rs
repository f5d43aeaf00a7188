//! Price formatting for display.
//!
//! All prices render as a `$`-prefixed amount with exactly two decimal
//! places and no grouping separators.

use rust_decimal::Decimal;

/// Format a decimal amount as a display price, e.g. `$59.99`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}
