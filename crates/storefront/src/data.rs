//! Storefront datasets.
//!
//! The catalog, the neighborhood lookup and the saved addresses are plain
//! JSON. Built-in copies are compiled in; any of them can be replaced by a
//! file through configuration.

use std::path::{Path, PathBuf};

use nexo_core::{Catalog, CatalogError, LookupError, NeighborhoodLookup, SavedAddress};
use thiserror::Error;

use crate::config::DataSources;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");
const BUILTIN_NEIGHBORHOODS: &str = include_str!("../data/neighborhoods.json");
const BUILTIN_ADDRESSES: &str = include_str!("../data/addresses.json");

/// Error loading a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Everything the storefront renders from.
#[derive(Debug, Clone)]
pub struct StorefrontData {
    pub catalog: Catalog,
    pub neighborhoods: NeighborhoodLookup,
    pub saved_addresses: Vec<SavedAddress>,
}

impl StorefrontData {
    /// Load every dataset, falling back to the built-in copy when no path is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns `DataError` if a configured file cannot be read or any dataset
    /// fails to parse or validate.
    pub fn load(sources: &DataSources) -> Result<Self, DataError> {
        let catalog = Catalog::from_json(&read_or(sources.catalog_path.as_deref(), BUILTIN_CATALOG)?)?;
        let neighborhoods = NeighborhoodLookup::from_json(&read_or(
            sources.neighborhoods_path.as_deref(),
            BUILTIN_NEIGHBORHOODS,
        )?)?;
        let saved_addresses = SavedAddress::list_from_json(&read_or(
            sources.addresses_path.as_deref(),
            BUILTIN_ADDRESSES,
        )?)?;

        tracing::info!(
            products = catalog.len(),
            categories = catalog.categories().len(),
            cities = neighborhoods.len(),
            saved_addresses = saved_addresses.len(),
            "Storefront data loaded"
        );

        Ok(Self {
            catalog,
            neighborhoods,
            saved_addresses,
        })
    }

    /// The built-in datasets.
    ///
    /// # Errors
    ///
    /// Returns `DataError` only if the compiled-in data is invalid.
    pub fn builtin() -> Result<Self, DataError> {
        Self::load(&DataSources::default())
    }
}

fn read_or(path: Option<&Path>, builtin: &str) -> Result<String, DataError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(builtin.to_string()),
    }
}
