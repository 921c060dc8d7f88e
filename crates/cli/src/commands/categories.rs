//! Category listing.

use nexo_core::{Catalog, CategorySelector, render};
use nexo_storefront::config::DataSources;
use nexo_storefront::data::{DataError, StorefrontData};

/// Categories in pill-bar order with the number of products each one shows.
#[must_use]
pub fn category_counts(catalog: &Catalog) -> Vec<(String, usize)> {
    catalog
        .categories()
        .into_iter()
        .map(|category| {
            let selector = CategorySelector::Category(category.to_string());
            (category.to_string(), render::select(catalog, &selector).len())
        })
        .collect()
}

/// Log every category with its product count.
///
/// # Errors
///
/// Returns `DataError` if the catalog fails to load.
pub fn run(sources: &DataSources) -> Result<(), DataError> {
    let data = StorefrontData::load(sources)?;

    tracing::info!("Todos: {}", data.catalog.len());
    for (category, count) in category_counts(&data.catalog) {
        tracing::info!("{category}: {count}");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_follow_first_appearance() {
        let data = StorefrontData::builtin().unwrap();
        let counts = category_counts(&data.catalog);

        assert_eq!(counts.len(), 5);
        assert_eq!(counts[0], ("Herramientas Eléctricas".to_string(), 2));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), data.catalog.len());
    }
}
