//! Category selection and product card projection.
//!
//! Selection is a pure function over the catalog; the card view models
//! carry preformatted strings so templates only place them.

use crate::catalog::{Catalog, Product};
use crate::types::ProductId;

/// Label of the pill that shows every product.
pub const ALL_CATEGORIES: &str = "Todos";

/// Number of description characters shown on a card.
pub const SUMMARY_LENGTH: usize = 90;

/// Which products the grid shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Category(String),
}

impl CategorySelector {
    /// Interpret a pill label. [`ALL_CATEGORIES`] selects everything; any
    /// other string is a category, whether or not a product uses it.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    /// The pill label for this selector.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(category) => category,
        }
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => product.category == *category,
        }
    }
}

/// Products visible for `selector`, in catalog order.
#[must_use]
pub fn select<'a>(catalog: &'a Catalog, selector: &CategorySelector) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|product| selector.matches(product))
        .collect()
}

/// Card shown in the product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Carried by both the "details" and the "add to cart" controls.
    pub id: ProductId,
    pub image_path: String,
    pub title: String,
    pub category: String,
    /// `"{seller} • ★ {rating}"`
    pub meta: String,
    pub summary: String,
    pub price: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            image_path: product.image_path.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            meta: format!("{} • ★ {}", product.seller, product.rating_display()),
            summary: summarize(&product.description),
            price: product.price.display(),
        }
    }
}

/// Build the complete card set for one grid draw.
///
/// Callers replace the whole grid with the result; nothing is diffed.
#[must_use]
pub fn render(catalog: &Catalog, selector: &CategorySelector) -> Vec<ProductCard> {
    select(catalog, selector)
        .into_iter()
        .map(ProductCard::from)
        .collect()
}

/// First [`SUMMARY_LENGTH`] characters of `description`, with `...` appended
/// only when something was cut. No word-boundary handling.
#[must_use]
pub fn summarize(description: &str) -> String {
    let mut summary: String = description.chars().take(SUMMARY_LENGTH).collect();
    if summary.len() < description.len() {
        summary.push_str("...");
    }
    summary
}
