//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! Every page is server-rendered. Third-party origins are the HTMX bundle on
//! unpkg and, when configured, the external endpoint the address form posts to.

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};
use url::Url;

/// Build the Content Security Policy for a storefront whose address form
/// posts to `form_action`.
///
/// A relative action keeps `form-action 'self'`; an absolute http(s) action
/// adds its origin.
#[must_use]
pub fn content_security_policy(form_action: &str) -> HeaderValue {
    let form_sources = match form_action_origin(form_action) {
        Some(origin) => format!("'self' {origin}"),
        None => "'self'".to_string(),
    };

    let policy = format!(
        "default-src 'none'; \
         script-src 'self' https://unpkg.com; \
         style-src 'self'; \
         font-src 'self'; \
         img-src 'self' data:; \
         connect-src 'self'; \
         frame-src 'none'; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action {form_sources}; \
         frame-ancestors 'none'; \
         upgrade-insecure-requests"
    );

    // Origins serialize as ASCII
    HeaderValue::from_str(&policy)
        .unwrap_or_else(|_| HeaderValue::from_static("default-src 'none'"))
}

fn form_action_origin(form_action: &str) -> Option<String> {
    let url = Url::parse(form_action).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.origin().ascii_serialization())
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY`
/// - `X-Content-Type-Options: nosniff`
/// - `Referrer-Policy: same-origin`
/// - `Content-Security-Policy` (see [`content_security_policy`])
/// - `Permissions-Policy` denying device features
/// - `Cross-Origin-Opener-Policy: same-origin`
///
/// No `Cross-Origin-Embedder-Policy`: unpkg serves HTMX without a CORP header.
pub async fn security_headers_middleware(
    State(csp): State<HeaderValue>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("same-origin"));
    headers.insert(CONTENT_SECURITY_POLICY, csp);

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "accelerometer=(), \
             camera=(), \
             geolocation=(), \
             gyroscope=(), \
             magnetometer=(), \
             microphone=(), \
             payment=(), \
             usb=()",
        ),
    );

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, http::Request as HttpRequest, routing::get};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_headers_applied() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(
                content_security_policy("/account/addresses"),
                security_headers_middleware,
            ));

        let response = app
            .oneshot(HttpRequest::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let headers = response.headers();

        assert_eq!(headers.get(X_FRAME_OPTIONS).unwrap(), "DENY");
        let csp = headers.get(CONTENT_SECURITY_POLICY).unwrap().to_str().unwrap();
        assert!(csp.contains("script-src 'self' https://unpkg.com"));
        assert!(csp.contains("form-action 'self';"));
        assert!(headers.get("cross-origin-embedder-policy").is_none());
    }

    #[test]
    fn test_external_form_action_origin_allowed() {
        let csp = content_security_policy("https://cuentas.example.co:8443/direcciones?x=1");
        let csp = csp.to_str().unwrap();
        assert!(csp.contains("form-action 'self' https://cuentas.example.co:8443;"));
        assert!(!csp.contains("/direcciones"));
    }

    #[test]
    fn test_relative_or_unusable_form_action_stays_self() {
        for action in ["/account/addresses", "", "javascript:alert(1)", "mailto:a@b.co"] {
            let csp = content_security_policy(action);
            assert!(csp.to_str().unwrap().contains("form-action 'self';"), "{action}");
        }
    }
}
