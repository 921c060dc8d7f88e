//! Application state shared across handlers.

use std::sync::Arc;

use nexo_core::{AddressAssistant, Catalog, SavedAddress};

use crate::config::StorefrontConfig;
use crate::data::StorefrontData;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything behind it is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    address_book: Option<AddressBook>,
}

/// Collaborators of the address pages. Present only when the feature is on.
pub struct AddressBook {
    pub assistant: AddressAssistant,
    pub saved: Vec<SavedAddress>,
    pub form_action: String,
}

impl AppState {
    /// Compose the application from configuration and loaded data.
    ///
    /// The address book is wired in only when it is enabled and has at least
    /// one city to offer.
    #[must_use]
    pub fn new(config: StorefrontConfig, data: StorefrontData) -> Self {
        let StorefrontData {
            catalog,
            neighborhoods,
            saved_addresses,
        } = data;

        let address_book = if config.address_book.enabled && !neighborhoods.is_empty() {
            Some(AddressBook {
                assistant: AddressAssistant::new(neighborhoods),
                saved: saved_addresses,
                form_action: config.address_book.form_action.clone(),
            })
        } else {
            tracing::info!("Address book disabled");
            None
        };

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                address_book,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Address book collaborators, if the feature is active.
    #[must_use]
    pub fn address_book(&self) -> Option<&AddressBook> {
        self.inner.address_book.as_ref()
    }
}
