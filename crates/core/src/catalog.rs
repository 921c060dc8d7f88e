//! Read-only product catalog.
//!
//! The catalog is populated once from data and never mutated afterwards.
//! Products keep the order they were loaded in; that order is the display
//! order everywhere.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId};

/// Highest allowed product rating.
const MAX_RATING: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product id must be greater than zero")]
    ZeroId,
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("product {id} has rating {rating}, expected 0 to 5")]
    RatingOutOfRange { id: ProductId, rating: Decimal },
}

/// A product as defined in the catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub seller: String,
    pub rating: Decimal,
    pub sales_count: u64,
    pub price: Price,
    pub image_path: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub stock_status: String,
}

impl Product {
    /// Rating as shown to shoppers, without trailing zeros (`4.70` → `4.7`).
    #[must_use]
    pub fn rating_display(&self) -> String {
        self.rating.normalize().to_string()
    }
}

/// Ordered, immutable collection of products with lookup by ID.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if an ID is zero or repeated, or a rating is
    /// outside `0..=5`.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if product.id.get() == 0 {
                return Err(CatalogError::ZeroId);
            }
            if product.rating.is_sign_negative() || product.rating > MAX_RATING {
                return Err(CatalogError::RatingOutOfRange {
                    id: product.id,
                    rating: product.rating,
                });
            }
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse a catalog from its JSON data file (an array of products).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, or any validation
    /// error from [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).and_then(|&i| self.products.get(i))
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    /// Minimal product for tests; only `id` and `category` vary.
    pub fn product(id: u32, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Producto {id}"),
            category: category.to_string(),
            seller: "Ferretería El Ingeniero".to_string(),
            rating: Decimal::new(45, 1),
            sales_count: 410,
            price: Price::new(Decimal::new(150_000, 3)),
            image_path: format!("img/{id}.png"),
            description: "Descripción corta.".to_string(),
            features: vec!["Garantía de 1 año".to_string()],
            stock_status: "En stock".to_string(),
        }
    }

    pub fn seeded() -> Catalog {
        Catalog::new(vec![product(1, "A"), product(2, "B"), product(3, "A")]).unwrap()
    }

    #[test]
    fn test_find_known_and_unknown() {
        let catalog = seeded();
        assert_eq!(catalog.find(ProductId::new(2)).unwrap().category, "B");
        assert!(catalog.find(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_products_keep_load_order() {
        let catalog = seeded();
        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_categories_first_appearance_order() {
        assert_eq!(seeded().categories(), vec!["A", "B"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![product(1, "A"), product(1, "B")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id.get() == 1));
    }

    #[test]
    fn test_zero_id_rejected() {
        let result = Catalog::new(vec![product(0, "A")]);
        assert!(matches!(result, Err(CatalogError::ZeroId)));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut p = product(1, "A");
        p.rating = Decimal::new(51, 1);
        assert!(matches!(
            Catalog::new(vec![p]),
            Err(CatalogError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_json_with_empty_features() {
        let json = r#"[{
            "id": 5,
            "title": "Kit de rodillo",
            "category": "Pintura",
            "seller": "Pinturas El Color",
            "rating": "4.3",
            "sales_count": 310,
            "price": "75.40000",
            "image_path": "img/rodillo.png",
            "description": "Kit básico de pintura.",
            "stock_status": "En stock"
        }]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let p = catalog.find(ProductId::new(5)).unwrap();
        assert!(p.features.is_empty());
        assert_eq!(p.rating_display(), "4.3");
        assert_eq!(p.price.display(), "$75.40");
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_rating_display_drops_trailing_zeros() {
        let mut p = product(1, "A");
        p.rating = Decimal::new(470, 2);
        assert_eq!(p.rating_display(), "4.7");
        p.rating = Decimal::new(40, 1);
        assert_eq!(p.rating_display(), "4");
    }
}
