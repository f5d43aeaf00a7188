//! One-shot lazy loading for product images.
//!
//! Each rendered image placeholder is a tiny state machine:
//! {pending} → {loaded}. A placeholder loads when its grid row comes
//! within a configurable margin of the visible viewport, and once loaded
//! it is never observed again. A full grid redraw replaces every
//! placeholder, so the loader must be re-bound afterwards. When no
//! viewport geometry exists (non-interactive output), everything loads
//! immediately.

/// Default proximity margin, in grid rows.
pub const DEFAULT_MARGIN_ROWS: usize = 8;

/// Load state of a single image placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Pending,
    Loaded,
}

/// Tracks the placeholder for each product row of the current grid.
#[derive(Debug, Clone)]
pub struct LazyImages {
    slots: Vec<(String, ImageSlot)>,
    margin_rows: usize,
}

impl LazyImages {
    #[must_use]
    pub fn new(margin_rows: usize) -> Self {
        Self {
            slots: Vec::new(),
            margin_rows,
        }
    }

    /// Replace the tracked placeholders with the given grid rows, all
    /// pending. Call after every full grid redraw.
    pub fn rebind<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots = ids
            .into_iter()
            .map(|id| (id.into(), ImageSlot::Pending))
            .collect();
    }

    /// Mark every placeholder whose row index falls within the viewport
    /// plus the margin as loaded. Rows are grid indices; `first_visible`
    /// is the topmost rendered row and `viewport_rows` the number of
    /// rows shown.
    ///
    /// Idempotent per slot: loaded slots stay loaded.
    pub fn observe(&mut self, first_visible: usize, viewport_rows: usize) {
        let start = first_visible.saturating_sub(self.margin_rows);
        let end = first_visible
            .saturating_add(viewport_rows)
            .saturating_add(self.margin_rows);
        for (row, (_, slot)) in self.slots.iter_mut().enumerate() {
            if row >= start && row < end {
                *slot = ImageSlot::Loaded;
            }
        }
    }

    /// Fallback when no viewport geometry is available: load everything.
    pub fn load_all(&mut self) {
        for (_, slot) in &mut self.slots {
            *slot = ImageSlot::Loaded;
        }
    }

    /// Whether the placeholder for `id` has loaded.
    #[must_use]
    pub fn is_loaded(&self, id: &str) -> bool {
        self.slots
            .iter()
            .any(|(slot_id, slot)| slot_id == id && *slot == ImageSlot::Loaded)
    }

    /// Number of placeholders still pending.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|(_, slot)| *slot == ImageSlot::Pending)
            .count()
    }
}

impl Default for LazyImages {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::LazyImages;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("p{i}")).collect()
    }

    #[test]
    fn rows_near_the_viewport_load() {
        let mut lazy = LazyImages::new(2);
        lazy.rebind(ids(20));
        lazy.observe(5, 4); // rows 3..11 are in range

        assert!(!lazy.is_loaded("p2"));
        assert!(lazy.is_loaded("p3"));
        assert!(lazy.is_loaded("p10"));
        assert!(!lazy.is_loaded("p11"));
    }

    #[test]
    fn loaded_slots_never_return_to_pending_without_rebind() {
        let mut lazy = LazyImages::new(0);
        lazy.rebind(ids(10));
        lazy.observe(0, 3);
        assert!(lazy.is_loaded("p0"));

        // Scrolling away keeps already-loaded slots loaded.
        lazy.observe(7, 3);
        assert!(lazy.is_loaded("p0"));
        assert!(lazy.is_loaded("p7"));
    }

    #[test]
    fn observing_twice_has_no_additional_effect() {
        let mut lazy = LazyImages::new(1);
        lazy.rebind(ids(6));
        lazy.observe(0, 2);
        let pending = lazy.pending_count();
        lazy.observe(0, 2);
        assert_eq!(lazy.pending_count(), pending);
    }

    #[test]
    fn rebind_resets_all_placeholders() {
        let mut lazy = LazyImages::new(0);
        lazy.rebind(ids(4));
        lazy.load_all();
        assert_eq!(lazy.pending_count(), 0);

        // The redraw replaces every placeholder, so they start pending again.
        lazy.rebind(ids(4));
        assert_eq!(lazy.pending_count(), 4);
    }

    #[test]
    fn load_all_fallback_loads_everything() {
        let mut lazy = LazyImages::default();
        lazy.rebind(ids(3));
        lazy.load_all();
        assert!(lazy.is_loaded("p0"));
        assert!(lazy.is_loaded("p2"));
        assert_eq!(lazy.pending_count(), 0);
    }
}
