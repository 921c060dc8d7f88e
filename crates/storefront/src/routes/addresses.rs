//! Address book route handlers.
//!
//! Mounted only when the address book is enabled. The form posts to a
//! configurable action that is handled outside this service; these routes
//! only drive the form itself: the city → neighborhood dropdown and edit
//! population from a saved address.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{AppendHeaders, IntoResponse},
};
use nexo_core::{
    AddressForm, EditPayload, SavedAddress, ScrollRequest,
    address::{ScrollBehavior, ScrollBlock},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session::load_cart;
use crate::state::{AddressBook, AppState};

/// Query sent by the city select when it changes.
///
/// Named after the form fields so HTMX can send the select's own value.
#[derive(Debug, Deserialize)]
pub struct NeighborhoodQuery {
    #[serde(rename = "ciudad", default)]
    pub city: String,
    #[serde(rename = "barrio", default)]
    pub neighborhood: String,
}

/// A saved address together with the payload its edit button carries.
pub struct SavedAddressView {
    pub address: SavedAddress,
    pub payload: EditPayload,
}

impl From<&SavedAddress> for SavedAddressView {
    fn from(address: &SavedAddress) -> Self {
        Self {
            address: address.clone(),
            payload: EditPayload::from(address),
        }
    }
}

/// Address page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/addresses.html")]
pub struct AddressesTemplate {
    pub form: AddressForm,
    pub form_action: String,
    pub cities: Vec<String>,
    pub saved: Vec<SavedAddressView>,
    pub cart_count: u64,
}

/// Address form fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/address_form.html")]
pub struct AddressFormTemplate {
    pub form: AddressForm,
    pub form_action: String,
    pub cities: Vec<String>,
}

/// Neighborhood select fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/neighborhood_select.html")]
pub struct NeighborhoodSelectTemplate {
    pub form: AddressForm,
}

fn address_book(state: &AppState) -> Result<&AddressBook> {
    state
        .address_book()
        .ok_or(AppError::FeatureDisabled("address book"))
}

fn cities(book: &AddressBook) -> Vec<String> {
    book.assistant
        .lookup()
        .cities()
        .map(str::to_string)
        .collect()
}

/// `HX-Reswap` value that swaps the form and brings it into view.
const fn reswap(scroll: ScrollRequest) -> &'static str {
    match (scroll.behavior, scroll.block) {
        (ScrollBehavior::Smooth, ScrollBlock::Start) => "outerHTML show:top",
    }
}

/// Display the address page: a blank form and the saved addresses.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let book = address_book(&state)?;
    let cart = load_cart(&session).await?;

    Ok(AddressesTemplate {
        form: book.assistant.blank_form(),
        form_action: book.form_action.clone(),
        cities: cities(book),
        saved: book.saved.iter().map(SavedAddressView::from).collect(),
        cart_count: cart.count(),
    })
}

/// Rebuild the neighborhood select for a city (HTMX).
///
/// Unknown or empty cities give the disabled placeholder.
#[instrument(skip(state))]
pub async fn neighborhoods(
    State(state): State<AppState>,
    Query(query): Query<NeighborhoodQuery>,
) -> Result<impl IntoResponse> {
    let book = address_book(&state)?;

    let mut form = book.assistant.blank_form();
    form.change_city(book.assistant.lookup(), &query.city);
    if !query.neighborhood.is_empty() {
        form.neighborhood = book
            .assistant
            .neighborhood_select(&query.city, &query.neighborhood);
    }

    Ok(NeighborhoodSelectTemplate { form })
}

/// Render the form filled from an edit button's payload (HTMX).
///
/// Missing payload keys leave their fields empty.
#[instrument(skip(state))]
pub async fn form(
    State(state): State<AppState>,
    Query(payload): Query<EditPayload>,
) -> Result<impl IntoResponse> {
    let book = address_book(&state)?;
    let (form, scroll) = book.assistant.edit_form(&payload);

    Ok((
        AppendHeaders([("HX-Reswap", reswap(scroll))]),
        AddressFormTemplate {
            form,
            form_action: book.form_action.clone(),
            cities: cities(book),
        },
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{body_string, get, test_app};

    #[tokio::test]
    async fn test_index_starts_in_create_mode() {
        let app = test_app();
        let response = get(&app, "/account/addresses").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("id=\"direccion-form\""));
        assert!(body.contains("id=\"direccion_form_action\" name=\"action\" value=\"crear\""));
        assert!(body.contains("Nueva dirección"));
        assert!(body.contains("Primero selecciona una ciudad"));
        assert!(body.contains("id=\"id_barrio\" name=\"barrio\" disabled"));
    }

    #[tokio::test]
    async fn test_index_lists_saved_addresses_with_payload() {
        let app = test_app();
        let body = body_string(get(&app, "/account/addresses").await).await;
        assert!(body.contains("Laura Gómez"));
        assert!(body.contains("class=\"btn-edit-direccion\""));
        assert!(body.contains("hx-vals='{"));
        // askama escapes quotes inside the attribute; browsers decode them
        assert!(body.contains("&#34;is_primary&#34;:&#34;1&#34;"));
    }

    #[tokio::test]
    async fn test_neighborhoods_for_configured_city() {
        let app = test_app();
        let body = body_string(get(&app, "/account/addresses/neighborhoods?ciudad=Cali").await).await;
        assert!(body.contains("Selecciona un barrio"));
        assert!(body.contains("<option value=\"Granada\""));
        assert!(!body.contains("disabled"));
    }

    #[tokio::test]
    async fn test_neighborhoods_for_unknown_city() {
        let app = test_app();
        let body = body_string(get(&app, "/account/addresses/neighborhoods?ciudad=Pasto").await).await;
        assert!(body.contains("Primero selecciona una ciudad"));
        assert!(body.contains("disabled"));
        assert_eq!(body.matches("<option").count(), 1);
    }

    #[tokio::test]
    async fn test_neighborhoods_preselects_known_value() {
        let app = test_app();
        let body = body_string(
            get(&app, "/account/addresses/neighborhoods?ciudad=Cali&barrio=Granada").await,
        )
        .await;
        assert!(body.contains("<option value=\"Granada\" selected>"));
    }

    #[tokio::test]
    async fn test_form_applies_edit_payload() {
        let app = test_app();
        let response = get(
            &app,
            "/account/addresses/form?id=7&contact_name=Ana&phone=3001234567&city=Cali&neighborhood=Granada&is_primary=1",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("HX-Reswap").unwrap(),
            "outerHTML show:top"
        );

        let body = body_string(response).await;
        assert!(body.contains("name=\"action\" value=\"actualizar\""));
        assert!(body.contains("id=\"direccion_id\" name=\"direccion_id\" value=\"7\""));
        assert!(body.contains("value=\"Ana\""));
        assert!(body.contains("Editar dirección"));
        assert!(body.contains("<option value=\"Cali\" selected>"));
        assert!(body.contains("<option value=\"Granada\" selected>"));
        assert!(body.contains("id=\"esPrincipal\" name=\"esPrincipal\" checked"));
    }

    #[tokio::test]
    async fn test_form_missing_keys_clear_fields() {
        let app = test_app();
        let body = body_string(get(&app, "/account/addresses/form?contact_name=Ana").await).await;
        assert!(body.contains("id=\"id_telefono_contacto\" name=\"telefonoContacto\" value=\"\""));
        assert!(body.contains("Primero selecciona una ciudad"));
        assert!(!body.contains(" checked"));
    }

    #[tokio::test]
    async fn test_form_primary_marker_must_be_one() {
        let app = test_app();
        let body = body_string(get(&app, "/account/addresses/form?is_primary=true").await).await;
        assert!(!body.contains(" checked"));
    }

    #[tokio::test]
    async fn test_form_fields_match_submission_endpoint() {
        let app = test_app();
        let body = body_string(
            get(&app, "/account/addresses/form?id=7&contact_name=Ana&phone=300&is_primary=1").await,
        )
        .await;
        assert!(body.contains("name=\"action\" value=\"actualizar\""));
        assert!(body.contains("name=\"direccion_id\" value=\"7\""));
        assert!(body.contains("name=\"nombreContacto\" value=\"Ana\""));
        assert!(body.contains("name=\"telefonoContacto\" value=\"300\""));
        assert!(body.contains("name=\"ciudad\""));
        assert!(body.contains("name=\"barrio\""));
        assert!(body.contains("name=\"complemento\""));
        // no value attribute so the browser submits "on"
        assert!(body.contains("<input type=\"checkbox\" id=\"esPrincipal\" name=\"esPrincipal\" checked>"));
        assert!(!body.contains("name=\"form_action\""));
        assert!(!body.contains("name=\"nombre_contacto\""));
        assert!(!body.contains("name=\"es_principal\""));
    }
}
