//! Nexo Core - Storefront domain logic.
//!
//! This crate holds everything the storefront does that does not need a
//! browser or an HTTP server:
//! - `storefront` - Public store binary (renders these models with askama)
//! - `cli` - Data file validation and inspection
//!
//! # Architecture
//!
//! No I/O, no HTTP, no templates. Components receive their data at
//! construction (catalog, neighborhood lookup) and expose plain view models,
//! so every behavior can be tested without a rendering environment.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs and prices
//! - [`catalog`] - Read-only product catalog with lookup by ID
//! - [`render`] - Category selection and product card projection
//! - [`filter`] - Category pills with exclusive selection
//! - [`detail`] - Product detail modal state machine
//! - [`cart`] - Cart counter with best-effort display sync
//! - [`address`] - City → neighborhood dropdown and address edit form

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod address;
pub mod cart;
pub mod catalog;
pub mod detail;
pub mod filter;
pub mod render;
pub mod types;

pub use address::{
    AddressAssistant, AddressForm, EditPayload, FormMode, LookupError, NeighborhoodLookup,
    NeighborhoodSelect, SavedAddress, ScrollRequest, SelectOption,
};
pub use cart::{CartCounter, CartDisplay};
pub use catalog::{Catalog, CatalogError, Product};
pub use detail::{ClickTarget, DetailView, ProductDetail};
pub use filter::{CategoryFilter, CategoryPill};
pub use render::{ALL_CATEGORIES, CategorySelector, ProductCard};
pub use types::*;
