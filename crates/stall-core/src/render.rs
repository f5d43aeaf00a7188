//! Pure view projections consumed by both the TUI and the CLI output
//! layer: product cards from catalog + view state, and the cart panel
//! from cart + catalog.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::currency::format_price;
use crate::lazy::LazyImages;
use crate::view::ViewState;
use serde::Serialize;

/// Placeholder row shown when the cart has no entries.
pub const EMPTY_CART_ROW: &str = "Your cart is empty.";

/// One product card in the grid.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Formatted unit price, e.g. `$59.99`.
    pub price: String,
    /// Resolved image URL once the placeholder has loaded; `None` while
    /// still pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One line row in the cart panel.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub id: String,
    pub title: String,
    /// Formatted unit price.
    pub unit_price: String,
    pub quantity: u32,
    /// Formatted price × quantity for this line.
    pub line_total: String,
}

/// The cart panel: line rows, aggregate total, and the badge count.
#[derive(Debug, Clone, Serialize)]
pub struct CartPanel {
    pub lines: Vec<CartLine>,
    /// Formatted aggregate total.
    pub total: String,
    /// Sum of all quantities (the badge number).
    pub count: u64,
}

impl CartPanel {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Project the filtered catalog into grid cards, resolving each card's
/// image against the lazy loader.
#[must_use]
pub fn product_cards(catalog: &Catalog, view: &ViewState, lazy: &LazyImages) -> Vec<ProductCard> {
    view.filter(catalog)
        .into_iter()
        .map(|product| ProductCard {
            id: product.id.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: format_price(product.price),
            image: lazy.is_loaded(&product.id).then(|| product.image.clone()),
        })
        .collect()
}

/// Project the cart into panel rows. Lines appear in catalog order so the
/// panel is deterministic across redraws.
#[must_use]
pub fn cart_panel(catalog: &Catalog, cart: &Cart) -> CartPanel {
    let lines: Vec<CartLine> = catalog
        .products()
        .iter()
        .filter_map(|product| {
            let quantity = cart.quantity(&product.id);
            (quantity > 0).then(|| CartLine {
                id: product.id.clone(),
                title: product.title.clone(),
                unit_price: format_price(product.price),
                quantity,
                line_total: format_price(product.price * rust_decimal::Decimal::from(quantity)),
            })
        })
        .collect();

    CartPanel {
        lines,
        total: format_price(cart.total(catalog)),
        count: cart.count(),
    }
}

#[cfg(test)]
mod tests {
    use super::{cart_panel, product_cards};
    use crate::cart::Cart;
    use crate::catalog::Catalog;
    use crate::lazy::LazyImages;
    use crate::view::ViewState;

    #[test]
    fn cards_follow_the_active_filter() {
        let catalog = Catalog::demo();
        let mut view = ViewState::default();
        view.set_category("Audio");
        let lazy = LazyImages::default();

        let cards = product_cards(&catalog, &view, &lazy);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].price, "$59.99");
        // Nothing observed yet, so every image is still pending.
        assert!(cards.iter().all(|c| c.image.is_none()));
    }

    #[test]
    fn loaded_cards_carry_their_image_url() {
        let catalog = Catalog::demo();
        let view = ViewState::default();
        let mut lazy = LazyImages::default();
        lazy.rebind(catalog.products().iter().map(|p| p.id.clone()));
        lazy.load_all();

        let cards = product_cards(&catalog, &view, &lazy);
        assert!(cards.iter().all(|c| c.image.is_some()));
    }

    #[test]
    fn empty_cart_panel_has_no_lines_and_zero_total() {
        let catalog = Catalog::demo();
        let panel = cart_panel(&catalog, &Cart::default());
        assert!(panel.is_empty());
        assert_eq!(panel.total, "$0.00");
        assert_eq!(panel.count, 0);
    }

    #[test]
    fn panel_lines_carry_unit_and_line_totals() {
        let catalog = Catalog::demo();
        let mut cart = Cart::default();
        cart.add("p4");
        cart.add("p4");
        cart.add("p1");

        let panel = cart_panel(&catalog, &cart);
        assert_eq!(panel.lines.len(), 2);
        // Catalog order: p1 before p4.
        assert_eq!(panel.lines[0].id, "p1");
        assert_eq!(panel.lines[1].quantity, 2);
        assert_eq!(panel.lines[1].line_total, "$99.98");
        assert_eq!(panel.total, "$159.97");
        assert_eq!(panel.count, 3);
    }
}
