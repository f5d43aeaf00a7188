//! `stall cart` — show cart line rows, total, and item count.

use crate::output::{OutputMode, render};
use stall_core::render::EMPTY_CART_ROW;
use stall_core::storefront::Storefront;
use std::io::Write;

/// Execute `stall cart`.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_cart(output: OutputMode, front: &Storefront) -> anyhow::Result<()> {
    let panel = front.panel();
    render(output, &panel, |panel, w| {
        if panel.is_empty() {
            writeln!(w, "{EMPTY_CART_ROW}")?;
        } else {
            for line in &panel.lines {
                writeln!(
                    w,
                    "{:<4} {:<24} {} x {}  {}",
                    line.id, line.title, line.unit_price, line.quantity, line.line_total
                )?;
            }
        }
        writeln!(w, "total: {}  items: {}", panel.total, panel.count)
    })
}
