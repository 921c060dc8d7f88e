//! Session-backed models for storefront.

pub mod session;

