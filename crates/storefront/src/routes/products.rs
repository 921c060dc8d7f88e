//! Product route handlers.
//!
//! The grid, the category bar and the product modal are HTMX fragments
//! rendered from the catalog on every request.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nexo_core::{
    ALL_CATEGORIES, CategoryFilter, CategoryPill, ClickTarget, DetailView, ProductCard,
    ProductDetail, ProductId, render,
};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;

/// Query parameters for the product grid.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// Query parameters for closing the modal.
#[derive(Debug, Deserialize)]
pub struct CloseQuery {
    /// Where the click landed. Absent for the close button.
    pub target: Option<ClickTarget>,
}

/// Product grid fragment, with the category bar swapped out-of-band.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub pills: Vec<CategoryPill>,
    pub cards: Vec<ProductCard>,
    pub oob: bool,
}

/// Product modal fragment. Renders the empty overlay when `detail` is `None`.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_modal.html")]
pub struct ProductModalTemplate {
    pub detail: Option<ProductDetail>,
}

impl From<&DetailView> for ProductModalTemplate {
    fn from(view: &DetailView) -> Self {
        Self {
            detail: view.detail().cloned(),
        }
    }
}

/// Redraw the grid for one category.
///
/// A missing `category` means "Todos". Any other label filters by exact
/// match, so unknown labels give an empty grid and no active pill.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog();
    let label = query.category.as_deref().unwrap_or(ALL_CATEGORIES);

    let mut filter = CategoryFilter::for_catalog(catalog);
    let selector = filter.select(label);
    let cards = render::render(catalog, &selector);
    tracing::debug!(category = selector.label(), shown = cards.len(), "Grid redrawn");

    ProductGridTemplate {
        pills: filter.pills().to_vec(),
        cards,
        oob: true,
    }
}

/// Open the product modal.
///
/// Unknown or malformed ids leave the page untouched (`204 No Content`).
#[instrument(skip(state))]
pub async fn details(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let mut view = DetailView::default();
    let opened = id
        .parse::<ProductId>()
        .is_ok_and(|id| view.open(state.catalog(), id));

    if !opened {
        tracing::debug!(%id, "No product to show");
        return StatusCode::NO_CONTENT.into_response();
    }

    ProductModalTemplate::from(&view).into_response()
}

/// Close the product modal.
///
/// Overlay clicks and the close button hide it; clicks on the modal
/// content leave it open (`204 No Content`).
#[instrument(skip(state))]
pub async fn close(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<CloseQuery>,
) -> Response {
    let mut view = DetailView::default();
    if let Ok(id) = id.parse::<ProductId>() {
        view.open(state.catalog(), id);
    }

    match query.target {
        Some(target) => view.handle_click(target),
        None => view.close(),
    }

    if view.is_visible() {
        return StatusCode::NO_CONTENT.into_response();
    }

    ProductModalTemplate::from(&view).into_response()
}
