//! Request error type with Sentry reporting.
//!
//! Most storefront paths cannot fail: unknown products answer `204`, unknown
//! cities give a disabled dropdown. What is left is the session store and
//! requests for a feature this instance does not serve.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors a storefront handler can return.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or writing the visitor session failed.
    #[error("session store failure: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// The route belongs to a feature that is switched off.
    #[error("{0} is not enabled")]
    FeatureDisabled(&'static str),
}

impl AppError {
    /// HTTP status sent to the client.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::FeatureDisabled(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(error = %self, sentry_event_id = %event_id, "Request failed");
            return (status, "Error interno, intenta de nuevo").into_response();
        }

        tracing::debug!(error = %self, %status, "Request rejected");
        (status, self.to_string()).into_response()
    }
}

/// Handler result.
pub type Result<T> = std::result::Result<T, AppError>;

/// Record a shopper action as a Sentry breadcrumb.
///
/// The trail shows up on any error reported later in the same scope.
pub fn add_breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) {
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_owned()),
        message: Some(message.to_owned()),
        level: sentry::Level::Info,
        data: data
            .iter()
            .map(|(key, value)| ((*key).to_owned(), serde_json::Value::from(*value)))
            .collect(),
        ..Default::default()
    });
}
