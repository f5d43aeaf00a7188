//! The storefront façade: explicit stores wired together and driven by
//! the action dispatcher.
//!
//! One `Storefront` is constructed at startup and passed by reference to
//! whichever front end is running. All state lives here; the front ends
//! only translate input into [`Action`]s and paint the projections.

use crate::action::{Action, Outcome, ProductDetails};
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::lazy::LazyImages;
use crate::render::{CartPanel, ProductCard, cart_panel, product_cards};
use crate::store::CartStore;
use crate::view::ViewState;

#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    cart: CartStore,
    view: ViewState,
    lazy: LazyImages,
    panel_open: bool,
}

impl Storefront {
    /// Wire the stores together and bind the lazy loader to the initial
    /// (unfiltered) grid.
    #[must_use]
    pub fn new(catalog: Catalog, cart: CartStore, lazy_margin_rows: usize) -> Self {
        let mut front = Self {
            catalog,
            cart,
            view: ViewState::default(),
            lazy: LazyImages::new(lazy_margin_rows),
            panel_open: false,
        };
        front.rebind_grid();
        front
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn lazy(&self) -> &LazyImages {
        &self.lazy
    }

    #[must_use]
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Update the search query and re-bind the redrawn grid's
    /// placeholders.
    pub fn set_query(&mut self, raw: &str) {
        self.view.set_query(raw);
        self.rebind_grid();
    }

    /// Update the category filter and re-bind the redrawn grid's
    /// placeholders.
    pub fn set_category(&mut self, value: &str) {
        self.view.set_category(value);
        self.rebind_grid();
    }

    /// Clear query and category back to their defaults.
    pub fn clear_filters(&mut self) {
        self.view.clear();
        self.rebind_grid();
    }

    /// Feed viewport geometry to the lazy loader: the topmost visible
    /// grid row and the number of rows shown.
    pub fn observe_grid(&mut self, first_visible: usize, viewport_rows: usize) {
        self.lazy.observe(first_visible, viewport_rows);
    }

    /// No viewport geometry available: load every placeholder now.
    pub fn load_all_images(&mut self) {
        self.lazy.load_all();
    }

    /// The filtered grid as renderable cards.
    #[must_use]
    pub fn cards(&self) -> Vec<ProductCard> {
        product_cards(&self.catalog, &self.view, &self.lazy)
    }

    /// The cart panel projection.
    #[must_use]
    pub fn panel(&self) -> CartPanel {
        cart_panel(&self.catalog, self.cart.cart())
    }

    /// Dispatch one action: mutate, persist, and report what to redraw.
    pub fn apply(&mut self, action: &Action) -> Outcome {
        match action {
            Action::Add(id) => {
                if self.cart.add(&self.catalog, id) {
                    Outcome::CartChanged
                } else {
                    Outcome::Ignored
                }
            }
            Action::Increment(id) => {
                if self.cart.increment(id) {
                    Outcome::CartChanged
                } else {
                    Outcome::Ignored
                }
            }
            Action::Decrement(id) => {
                if self.cart.decrement(id) {
                    Outcome::CartChanged
                } else {
                    Outcome::Ignored
                }
            }
            Action::ToggleCart => {
                self.panel_open = !self.panel_open;
                Outcome::PanelToggled {
                    open: self.panel_open,
                }
            }
            Action::ShowDetails(id) => match self.catalog.get(id) {
                Some(product) => Outcome::Details(ProductDetails::from_product(product)),
                None => {
                    tracing::warn!(product = %id, "details ignored: unknown product id");
                    Outcome::Ignored
                }
            },
        }
    }

    fn rebind_grid(&mut self) {
        let ids: Vec<String> = self
            .view
            .filter(&self.catalog)
            .into_iter()
            .map(|p| p.id.clone())
            .collect();
        self.lazy.rebind(ids);
    }
}
