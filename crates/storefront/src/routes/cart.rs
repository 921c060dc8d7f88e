//! Cart route handlers.
//!
//! The cart is a tally of "add to cart" clicks kept in the session. It is
//! not tied to products and resets when the store page loads.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse},
};
use nexo_core::CartDisplay;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::models::session::{load_cart, save_cart};

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: Option<String>,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub cart_count: u64,
}

/// The badge a counter update is written to.
#[derive(Debug, Default)]
struct CartBadge {
    shown: Option<u64>,
}

impl CartDisplay for CartBadge {
    fn show_count(&mut self, count: u64) {
        self.shown = Some(count);
    }
}

/// Add one to the cart tally (HTMX).
///
/// Returns the updated badge and triggers `cart-updated` for anything else
/// listening.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<impl IntoResponse> {
    let mut cart = load_cart(&session).await?;
    let mut badge = CartBadge::default();
    let count = cart.increment(Some(&mut badge));
    save_cart(&session, &cart).await?;

    let product = form.product_id.unwrap_or_default();
    add_breadcrumb("cart", "Added to cart", &[("product_id", product.as_str())]);
    tracing::info!(product_id = %product, count, "Cart incremented");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            cart_count: badge.shown.unwrap_or(count),
        },
    ))
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;
    Ok(CartCountTemplate {
        cart_count: cart.count(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };

    use crate::routes::test_support::{body_string, get, send, session_cookie, test_app};

    fn add_request(cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::post("/cart/add")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from("product_id=4")).unwrap()
    }

    async fn start_session(app: &Router) -> String {
        session_cookie(&get(app, "/").await)
    }

    #[tokio::test]
    async fn test_add_increments_and_triggers() {
        let app = test_app();
        let cookie = start_session(&app).await;

        let response = send(&app, add_request(Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("HX-Trigger").unwrap(), "cart-updated");
        assert!(body_string(response).await.contains(">1<"));
    }

    #[tokio::test]
    async fn test_add_n_times_shows_n() {
        let app = test_app();
        let cookie = start_session(&app).await;

        let mut last = String::new();
        for _ in 0..3 {
            last = body_string(send(&app, add_request(Some(&cookie))).await).await;
        }
        assert!(last.contains(">3<"));

        let count = Request::get("/cart/count")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        assert!(body_string(send(&app, count).await).await.contains(">3<"));
    }

    #[tokio::test]
    async fn test_add_without_session_starts_at_one() {
        let app = test_app();
        let response = send(&app, add_request(None)).await;
        assert!(body_string(response).await.contains(">1<"));
    }

    #[tokio::test]
    async fn test_count_without_session_is_zero() {
        let app = test_app();
        let body = body_string(get(&app, "/cart/count").await).await;
        assert!(body.contains("id=\"cartCount\""));
        assert!(body.contains(">0<"));
    }
}
