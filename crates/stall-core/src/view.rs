//! Ephemeral view state: the search query and the category filter.
//!
//! Held in memory only; a new process always starts with an empty query
//! and the `all` category.

use crate::catalog::{ALL_CATEGORIES, Catalog, Product};

/// The selected category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction (the `all` sentinel).
    #[default]
    All,
    /// Only products whose category equals this value.
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter from its option value; `all` maps to [`Self::All`].
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// The option value this filter was selected from.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    /// Display label: the value with its first character capitalized.
    #[must_use]
    pub fn label(&self) -> String {
        capitalize(self.value())
    }

    /// Whether a product category passes this filter.
    #[must_use]
    pub fn allows(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

/// Capitalize the first character of a label, leaving the rest unchanged.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Search query plus category selection.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    query: String,
    category: CategoryFilter,
}

impl ViewState {
    /// Store the trimmed, lowercased search text.
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.trim().to_lowercase();
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Store the selected category option value.
    pub fn set_category(&mut self, value: &str) {
        self.category = CategoryFilter::from_value(value);
    }

    #[must_use]
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// True when no query and no category restriction are active.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.category == CategoryFilter::All
    }

    /// Reset to the empty query and the `all` category.
    pub fn clear(&mut self) {
        self.query.clear();
        self.category = CategoryFilter::All;
    }

    /// A product is shown iff its category passes the filter AND its
    /// title contains the query case-insensitively. The empty query
    /// matches everything.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category.allows(&product.category)
            && product.title.to_lowercase().contains(&self.query)
    }

    /// Filter the catalog in insertion order; no ranking.
    #[must_use]
    pub fn filter<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.products().iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryFilter, ViewState, capitalize};
    use crate::catalog::Catalog;

    #[test]
    fn query_is_trimmed_and_lowercased() {
        let mut view = ViewState::default();
        view.set_query("  SPEAKER ");
        assert_eq!(view.query(), "speaker");
    }

    #[test]
    fn empty_query_matches_everything() {
        let catalog = Catalog::demo();
        let view = ViewState::default();
        assert_eq!(view.filter(&catalog).len(), catalog.len());
    }

    #[test]
    fn audio_speaker_selects_exactly_the_portable_speaker() {
        let catalog = Catalog::demo();
        let mut view = ViewState::default();
        view.set_category("Audio");
        view.set_query("speaker");

        let shown = view.filter(&catalog);
        let titles: Vec<&str> = shown.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Portable Speaker"]);
    }

    #[test]
    fn category_only_filter_keeps_catalog_order() {
        let catalog = Catalog::demo();
        let mut view = ViewState::default();
        view.set_category("Accessories");

        let titles: Vec<&str> = view
            .filter(&catalog)
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Gaming Mouse", "Mechanical Keyboard"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = Catalog::demo();
        let mut view = ViewState::default();
        view.set_query("WIRELESS");
        let shown = view.filter(&catalog);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "p1");
    }

    #[test]
    fn all_sentinel_round_trips() {
        let filter = CategoryFilter::from_value("all");
        assert_eq!(filter, CategoryFilter::All);
        assert_eq!(filter.value(), "all");
        assert_eq!(filter.label(), "All");
    }

    #[test]
    fn capitalize_leaves_tail_untouched() {
        assert_eq!(capitalize("audio"), "Audio");
        assert_eq!(capitalize("4K gear"), "4K gear");
        assert_eq!(capitalize(""), "");
    }
}
