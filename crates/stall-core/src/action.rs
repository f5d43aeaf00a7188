//! The discrete user actions and their dispatch outcomes.
//!
//! Every interaction surface (TUI keys, CLI subcommands) reduces user
//! intent to an [`Action`] and hands it to
//! [`Storefront::apply`](crate::storefront::Storefront::apply), which
//! mutates the stores, persists the cart, and reports what changed.

use crate::currency::format_price;
use crate::catalog::Product;

/// A user interaction, independent of how it was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add one unit of a product to the cart.
    Add(String),
    /// Increment an existing cart entry.
    Increment(String),
    /// Decrement a cart entry, removing it at zero.
    Decrement(String),
    /// Flip cart-panel visibility.
    ToggleCart,
    /// Surface product details without blocking the interaction loop.
    ShowDetails(String),
}

/// Details payload for [`Action::ShowDetails`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Formatted price, e.g. `$29.99`.
    pub price: String,
    pub image: String,
}

impl ProductDetails {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: format_price(product.price),
            image: product.image.clone(),
        }
    }
}

/// What an applied action changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The cart mutated and was persisted; the cart panel needs redrawing.
    CartChanged,
    /// Cart-panel visibility flipped to the contained value.
    PanelToggled { open: bool },
    /// Details requested; payload for the detail pane.
    Details(ProductDetails),
    /// The action referred to something that does not exist; nothing
    /// changed.
    Ignored,
}
