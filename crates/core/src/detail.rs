//! Product detail modal.
//!
//! Two states, `Hidden` and `Visible`. Opening an unknown product does
//! nothing; opening a known one replaces whatever the modal showed before.

use serde::Deserialize;

use crate::catalog::{Catalog, Product};
use crate::types::ProductId;

/// Everything the modal shows for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub id: ProductId,
    pub image_path: String,
    pub category: String,
    pub title: String,
    /// `"{seller} • ★ {rating} • {sales_count} ventas"`
    pub meta: String,
    pub price: String,
    /// Full description, never truncated.
    pub description: String,
    pub stock_status: String,
    /// One entry per list item, catalog order.
    pub features: Vec<String>,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            image_path: product.image_path.clone(),
            category: product.category.clone(),
            title: product.title.clone(),
            meta: format!(
                "{} • ★ {} • {} ventas",
                product.seller,
                product.rating_display(),
                product.sales_count
            ),
            price: product.price.display(),
            description: product.description.clone(),
            stock_status: product.stock_status.clone(),
            features: product.features.clone(),
        }
    }
}

/// What a click on the open modal landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickTarget {
    /// The background overlay element itself.
    Overlay,
    /// Anything inside the modal body.
    Content,
}

/// Modal visibility and contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailView {
    #[default]
    Hidden,
    Visible(ProductDetail),
}

impl DetailView {
    /// Show `id`. Returns `false` and leaves the modal untouched when the
    /// catalog has no such product.
    pub fn open(&mut self, catalog: &Catalog, id: ProductId) -> bool {
        let Some(product) = catalog.find(id) else {
            return false;
        };
        *self = Self::Visible(ProductDetail::from(product));
        true
    }

    pub fn close(&mut self) {
        *self = Self::Hidden;
    }

    /// Click-outside-to-dismiss: only a click on the overlay closes.
    pub fn handle_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Overlay {
            self.close();
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    #[must_use]
    pub const fn detail(&self) -> Option<&ProductDetail> {
        match self {
            Self::Visible(detail) => Some(detail),
            Self::Hidden => None,
        }
    }
}
