//! Store page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use nexo_core::{CartCounter, CategoryFilter, CategoryPill, CategorySelector, ProductCard, render};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::session::save_cart;
use crate::state::AppState;

/// Store page template.
#[derive(Template, WebTemplate)]
#[template(path = "store/index.html")]
pub struct StoreIndexTemplate {
    pub pills: Vec<CategoryPill>,
    pub cards: Vec<ProductCard>,
    pub cart_count: u64,
    pub address_book_enabled: bool,
    /// Render the category bar in place, not out-of-band.
    pub oob: bool,
}

/// Display the store page.
///
/// Every product, "Todos" active, modal hidden. Loading the page starts a
/// fresh cart tally.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let cart = CartCounter::new();
    save_cart(&session, &cart).await?;

    let catalog = state.catalog();
    Ok(StoreIndexTemplate {
        pills: CategoryFilter::for_catalog(catalog).pills().to_vec(),
        cards: render::render(catalog, &CategorySelector::All),
        cart_count: cart.count(),
        address_book_enabled: state.address_book().is_some(),
        oob: false,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };

    use crate::routes::test_support::{body_string, get, send, session_cookie, test_app};

    #[tokio::test]
    async fn test_index_renders_every_product() {
        let app = test_app();
        let response = get(&app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert_eq!(body.matches("class=\"product-card\"").count(), 9);
        assert!(body.contains("id=\"productsGrid\""));
        assert!(body.contains("id=\"productModal\""));
        assert!(body.contains("Taladro inalámbrico profesional"));
        assert!(body.contains("$754.10"));
    }

    #[tokio::test]
    async fn test_index_activates_all_pill_first() {
        let app = test_app();
        let body = body_string(get(&app, "/").await).await;

        let all = body.find(">Todos<").unwrap();
        let power_tools = body.find(">Herramientas Eléctricas<").unwrap();
        assert!(all < power_tools);
        assert_eq!(body.matches("category-pill active").count(), 1);
    }

    #[tokio::test]
    async fn test_index_resets_cart_counter() {
        let app = test_app();
        let response = get(&app, "/").await;
        let cookie = session_cookie(&response);

        let add = |cookie: String| {
            Request::post("/cart/add")
                .header(header::COOKIE, cookie)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("product_id=1"))
                .unwrap()
        };
        send(&app, add(cookie.clone())).await;
        send(&app, add(cookie.clone())).await;

        let reload = Request::get("/")
            .header(header::COOKIE, cookie.clone())
            .body(Body::empty())
            .unwrap();
        let body = body_string(send(&app, reload).await).await;
        assert!(body.contains("id=\"cartCount\" class=\"cart-count\">0<"));

        let count = Request::get("/cart/count")
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        assert!(body_string(send(&app, count).await).await.contains(">0<"));
    }
}
