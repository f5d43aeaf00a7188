//! stall-core: the stores and state machines behind the stall storefront.
//!
//! Everything here is independent of any rendering surface: the catalog
//! and cart stores, the view filter, the action dispatcher, the lazy
//! image loader, and the contact form can all be driven (and tested)
//! without a terminal attached.
//!
//! # Conventions
//!
//! - **Errors**: library types use `thiserror`; fallible entry points
//!   return `anyhow::Result` where the caller just reports.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`).
//!   Recoverable storage problems are warnings, never failures.

pub mod action;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod currency;
pub mod error;
pub mod lazy;
pub mod render;
pub mod store;
pub mod storefront;
pub mod view;

pub use action::{Action, Outcome, ProductDetails};
pub use cart::Cart;
pub use catalog::{ALL_CATEGORIES, Catalog, CatalogError, Product};
pub use contact::{ContactForm, ContactStatus};
pub use lazy::{ImageSlot, LazyImages};
pub use render::{CartLine, CartPanel, EMPTY_CART_ROW, ProductCard};
pub use store::CartStore;
pub use storefront::Storefront;
pub use view::{CategoryFilter, ViewState};
