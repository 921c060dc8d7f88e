//! Custom Askama template filters.

use std::fmt::Display;

/// Short content hash of `static/css/main.css`, computed by `build.rs`.
///
/// Appended to the stylesheet URL as a cache buster:
/// `{{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}
