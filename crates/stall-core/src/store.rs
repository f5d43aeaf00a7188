//! Durable cart storage: one JSON file holding the id → quantity mapping.
//!
//! The file is read once when the store opens and rewritten in full after
//! every mutation. Both directions are forgiving: an absent or malformed
//! file yields an empty cart, and a failed write is logged and swallowed,
//! leaving the in-memory cart authoritative for the session.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::ErrorCode;
use std::path::{Path, PathBuf};

/// File name of the persisted cart inside the data directory.
pub const CART_FILE: &str = "cart.json";

/// The cart plus its backing file.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    path: PathBuf,
}

impl CartStore {
    /// Open the store at `path`, loading any persisted mapping.
    ///
    /// Never fails: a missing file means an empty cart, a malformed file
    /// is logged and replaced by an empty cart, and entries referring to
    /// products the catalog does not know are pruned.
    #[must_use]
    pub fn open(path: PathBuf, catalog: &Catalog) -> Self {
        let mut cart = load_cart(&path);
        cart.retain_known(catalog);
        Self { cart, path }
    }

    /// Read access to the underlying mapping.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add one unit of `id`, inserting the entry if absent.
    ///
    /// Unknown product ids are a logged no-op, never an error.
    pub fn add(&mut self, catalog: &Catalog, id: &str) -> bool {
        if !catalog.contains(id) {
            tracing::warn!(product = id, "add ignored: unknown product id");
            return false;
        }
        self.cart.add(id);
        self.persist();
        true
    }

    /// Increment an existing entry. Absent entries are a no-op.
    pub fn increment(&mut self, id: &str) -> bool {
        if self.cart.increment(id) {
            self.persist();
            true
        } else {
            tracing::warn!(product = id, "increment ignored: no cart entry");
            false
        }
    }

    /// Decrement an entry, removing it at zero. Absent entries are a no-op.
    pub fn decrement(&mut self, id: &str) -> bool {
        if self.cart.decrement(id) {
            self.persist();
            true
        } else {
            tracing::warn!(product = id, "decrement ignored: no cart entry");
            false
        }
    }

    /// Write the full mapping to the backing file, best effort.
    fn persist(&self) {
        if let Err(err) = self.try_persist() {
            tracing::warn!(
                code = %ErrorCode::CartWriteFailed,
                path = %self.path.display(),
                "cart not persisted: {err}"
            );
        }
    }

    fn try_persist(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&self.cart)?;
        std::fs::write(&self.path, json)
    }
}

fn load_cart(path: &Path) -> Cart {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Cart::default(),
        Err(err) => {
            tracing::warn!(
                code = %ErrorCode::CartFileUnreadable,
                path = %path.display(),
                "starting with an empty cart: {err}"
            );
            return Cart::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(cart) => cart,
        Err(err) => {
            tracing::warn!(
                code = %ErrorCode::CartFileUnreadable,
                path = %path.display(),
                "cart file is not a valid id->quantity mapping, starting empty: {err}"
            );
            Cart::default()
        }
    }
}
