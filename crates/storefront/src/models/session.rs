//! Session-related types.
//!
//! The visitor's cart counter is the only state kept between requests.

use nexo_core::CartCounter;
use tower_sessions::Session;

/// Session keys.
pub mod keys {
    /// Key for the visitor's cart counter.
    pub const CART_COUNTER: &str = "cart_counter";
}

/// Load the cart counter, starting from zero when none is stored.
///
/// # Errors
///
/// Returns the session store error if the session cannot be read.
pub async fn load_cart(session: &Session) -> Result<CartCounter, tower_sessions::session::Error> {
    Ok(session
        .get::<CartCounter>(keys::CART_COUNTER)
        .await?
        .unwrap_or_default())
}

/// Store the cart counter.
///
/// # Errors
///
/// Returns the session store error if the session cannot be written.
pub async fn save_cart(
    session: &Session,
    cart: &CartCounter,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART_COUNTER, cart).await
}
