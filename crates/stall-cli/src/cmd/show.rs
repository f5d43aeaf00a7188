//! `stall show` — display details for a single product.

use crate::output::{CliError, OutputMode, pretty_kv, render, render_error};
use clap::Args;
use serde::Serialize;
use stall_core::action::{Action, Outcome};
use stall_core::error::ErrorCode;
use stall_core::storefront::Storefront;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Product id to display.
    pub id: String,
}

/// Full product detail as returned in JSON output.
#[derive(Debug, Serialize)]
pub struct ShowProduct {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Formatted price, e.g. `$29.99`.
    pub price: String,
    pub image: String,
    /// Current cart quantity for this product.
    pub in_cart: u32,
}

/// Execute `stall show <id>`.
///
/// # Errors
///
/// Returns an error when the product does not exist or rendering fails.
pub fn run_show(args: &ShowArgs, output: OutputMode, front: &mut Storefront) -> anyhow::Result<()> {
    let Outcome::Details(details) = front.apply(&Action::ShowDetails(args.id.clone())) else {
        render_error(
            output,
            &CliError::from_code(
                ErrorCode::ProductNotFound,
                format!("product '{}' not found", args.id),
            ),
        )?;
        anyhow::bail!("product '{}' not found", args.id);
    };

    let item = ShowProduct {
        in_cart: front.cart().quantity(&details.id),
        id: details.id,
        title: details.title,
        category: details.category,
        price: details.price,
        image: details.image,
    };

    render(output, &item, |item, w| {
        pretty_kv(w, "id", &item.id)?;
        pretty_kv(w, "title", &item.title)?;
        pretty_kv(w, "category", &item.category)?;
        pretty_kv(w, "price", &item.price)?;
        pretty_kv(w, "image", &item.image)?;
        pretty_kv(w, "in cart", item.in_cart.to_string())
    })
}
