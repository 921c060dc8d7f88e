//! Category pills with exclusive selection.

use crate::catalog::Catalog;
use crate::render::{ALL_CATEGORIES, CategorySelector};

/// One clickable category control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPill {
    pub label: String,
    pub active: bool,
}

/// The pill bar. At most one pill is active; after a pill is selected,
/// exactly that one is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pills: Vec<CategoryPill>,
}

impl CategoryFilter {
    /// Pills for `labels` in the given order, with the first one active.
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pills = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| CategoryPill {
                label: label.into(),
                active: i == 0,
            })
            .collect();
        Self { pills }
    }

    /// "Todos" followed by every catalog category, "Todos" active.
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(std::iter::once(ALL_CATEGORIES).chain(catalog.categories()))
    }

    /// Activate the pill labelled `label` and deactivate the rest.
    ///
    /// Returns the selector the grid must be redrawn with. A label with no
    /// matching pill still yields a selector but leaves no pill active.
    pub fn select(&mut self, label: &str) -> CategorySelector {
        for pill in &mut self.pills {
            pill.active = pill.label == label;
        }
        CategorySelector::from_label(label)
    }

    #[must_use]
    pub fn pills(&self) -> &[CategoryPill] {
        &self.pills
    }

    #[must_use]
    pub fn active(&self) -> Option<&CategoryPill> {
        self.pills.iter().find(|pill| pill.active)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::tests::seeded;

    fn active_count(filter: &CategoryFilter) -> usize {
        filter.pills().iter().filter(|p| p.active).count()
    }

    #[test]
    fn test_for_catalog_starts_with_all_active() {
        let filter = CategoryFilter::for_catalog(&seeded());
        let labels: Vec<&str> = filter.pills().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec![ALL_CATEGORIES, "A", "B"]);
        assert_eq!(filter.active().unwrap().label, ALL_CATEGORIES);
        assert_eq!(active_count(&filter), 1);
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut filter = CategoryFilter::for_catalog(&seeded());

        let selector = filter.select("B");
        assert_eq!(selector, CategorySelector::Category("B".to_string()));
        assert_eq!(filter.active().unwrap().label, "B");
        assert_eq!(active_count(&filter), 1);

        let selector = filter.select(ALL_CATEGORIES);
        assert_eq!(selector, CategorySelector::All);
        assert_eq!(filter.active().unwrap().label, ALL_CATEGORIES);
        assert_eq!(active_count(&filter), 1);
    }

    #[test]
    fn test_select_unknown_label_clears_active() {
        let mut filter = CategoryFilter::for_catalog(&seeded());
        let selector = filter.select("Jardín");
        assert_eq!(selector.label(), "Jardín");
        assert!(filter.active().is_none());
    }
}
