//! One module per CLI subcommand.

pub mod add;
pub mod cart;
pub mod categories;
pub mod completions;
pub mod contact;
pub mod dec;
pub mod inc;
pub mod list;
pub mod show;

use serde::Serialize;
use stall_core::currency::format_price;
use stall_core::storefront::Storefront;
use std::io::Write;

/// Shared post-mutation summary printed by the cart commands.
#[derive(Debug, Serialize)]
pub struct CartSummary {
    pub id: String,
    pub quantity: u32,
    pub count: u64,
    /// Formatted aggregate total, e.g. `$29.99`.
    pub total: String,
}

impl CartSummary {
    pub fn for_product(front: &Storefront, id: &str) -> Self {
        Self {
            id: id.to_string(),
            quantity: front.cart().quantity(id),
            count: front.cart().count(),
            total: format_price(front.cart().total(front.catalog())),
        }
    }
}

/// Human rendering shared by `add`/`inc`/`dec`.
pub fn write_summary(w: &mut dyn std::io::Write, summary: &CartSummary) -> std::io::Result<()> {
    writeln!(
        w,
        "{} x{}  (cart: {} items, total {})",
        summary.id, summary.quantity, summary.count, summary.total
    )
}
