//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Store page (all products, cart counter reset)
//! GET  /health                 - Health check
//!
//! # Products (HTMX fragments)
//! GET  /products?category=     - Product grid + out-of-band category bar
//! GET  /products/{id}/details  - Product modal (204 for unknown ids)
//! GET  /products/{id}/details/close?target= - Hidden modal (204 for content clicks)
//!
//! # Cart (HTMX fragments)
//! POST /cart/add               - Increment counter (returns badge, triggers cart-updated)
//! GET  /cart/count             - Cart count badge
//!
//! # Address book (only when enabled)
//! GET  /account/addresses                - Address form + saved addresses
//! GET  /account/addresses/neighborhoods  - Neighborhood select for a city
//! GET  /account/addresses/form           - Address form filled for editing
//! ```

pub mod addresses;
pub mod cart;
pub mod products;
pub mod store;

use axum::{
    Router,
    extract::Request,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}/details", get(products::details))
        .route("/{id}/details/close", get(products::close))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/count", get(cart::count))
}

/// Create the address book routes router.
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(addresses::index))
        .route("/neighborhoods", get(addresses::neighborhoods))
        .route("/form", get(addresses::form))
}

/// Create all routes for the storefront.
///
/// Address routes are mounted only when the state carries an address book.
pub fn routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/", get(store::index))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes());

    if state.address_book().is_some() {
        router.nest("/account/addresses", address_routes())
    } else {
        router
    }
}

/// Build the complete application: routes, static files and middleware.
///
/// Sentry layers are added by the binary on top of this.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());
    let static_dir = state.config().static_dir.clone();
    let csp = middleware::content_security_policy(&state.config().address_book.form_action);

    Router::new()
        .route("/health", get(health))
        .merge(routes(&state))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn_with_state(
            csp,
            middleware::security_headers_middleware,
        ))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
