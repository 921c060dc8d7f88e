//! Address form assistant.
//!
//! Two behaviors on top of a static city → neighborhoods lookup:
//!
//! - the neighborhood dropdown is rebuilt whenever the city changes
//! - an "edit" control fills the form from a flat key/value payload and
//!   switches it to update mode
//!
//! There is no way back from update mode to create mode other than a fresh
//! form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder shown while no configured city is selected.
pub const CITY_FIRST_PLACEHOLDER: &str = "Primero selecciona una ciudad";

/// First option of a populated neighborhood dropdown.
pub const NEIGHBORHOOD_PLACEHOLDER: &str = "Selecciona un barrio";

/// Form heading in create mode.
pub const CREATE_HEADING: &str = "Nueva dirección";

/// Form heading once an address is being edited.
pub const EDIT_HEADING: &str = "Editar dirección";

/// Payload value that marks the primary address.
pub const PRIMARY_MARKER: &str = "1";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid neighborhood data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid saved address data: {0}")]
    SavedAddresses(serde_json::Error),
}

// =============================================================================
// Neighborhood Lookup
// =============================================================================

/// City → neighborhoods, both in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeighborhoodLookup(IndexMap<String, Vec<String>>);

impl NeighborhoodLookup {
    #[must_use]
    pub const fn new(cities: IndexMap<String, Vec<String>>) -> Self {
        Self(cities)
    }

    /// Parse the lookup from a JSON object of `"city": ["neighborhood", ...]`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Parse` for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, LookupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Neighborhoods for `city`, or `None` if the city is not configured.
    #[must_use]
    pub fn neighborhoods(&self, city: &str) -> Option<&[String]> {
        self.0.get(city).map(Vec::as_slice)
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Dependent Dropdown
// =============================================================================

/// One `<option>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }

    fn named(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

/// The neighborhood `<select>`: its options, enabled state and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborhoodSelect {
    options: Vec<SelectOption>,
    disabled: bool,
    value: String,
}

impl Default for NeighborhoodSelect {
    fn default() -> Self {
        Self {
            options: vec![SelectOption::placeholder(CITY_FIRST_PLACEHOLDER)],
            disabled: true,
            value: String::new(),
        }
    }
}

impl NeighborhoodSelect {
    /// Dropdown for `city` with `selected` preselected when it is one of
    /// the city's neighborhoods.
    #[must_use]
    pub fn for_city(lookup: &NeighborhoodLookup, city: &str, selected: &str) -> Self {
        let mut select = Self::default();
        select.populate(lookup, city, selected);
        select
    }

    /// Rebuild the options from scratch for `city`.
    ///
    /// Unconfigured (or empty) city: a single disabled placeholder.
    /// Otherwise: placeholder plus one option per neighborhood, enabled.
    pub fn populate(&mut self, lookup: &NeighborhoodLookup, city: &str, selected: &str) {
        self.options.clear();
        self.value.clear();

        let Some(neighborhoods) = lookup.neighborhoods(city) else {
            self.options
                .push(SelectOption::placeholder(CITY_FIRST_PLACEHOLDER));
            self.disabled = true;
            return;
        };

        self.options
            .push(SelectOption::placeholder(NEIGHBORHOOD_PLACEHOLDER));
        self.options
            .extend(neighborhoods.iter().map(|n| SelectOption::named(n)));
        self.disabled = false;

        if !selected.is_empty() && self.options.iter().any(|o| o.value == selected) {
            self.value = selected.to_string();
        }
    }

    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Value of the selected option; empty means the placeholder.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether `option` is the one the dropdown shows.
    #[must_use]
    pub fn is_selected(&self, option: &SelectOption) -> bool {
        option.value == self.value
    }
}

// =============================================================================
// Edit Payload & Saved Addresses
// =============================================================================

/// Flat key/value payload carried by an "edit" control.
///
/// Every key is optional; a missing key clears its form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    /// [`PRIMARY_MARKER`] for the primary address, anything else otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<String>,
}

/// A shipping address already stored for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAddress {
    pub id: String,
    pub contact_name: String,
    pub phone: String,
    #[serde(default)]
    pub complement: String,
    pub city: String,
    pub neighborhood: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl SavedAddress {
    /// Parse a JSON array of saved addresses.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::SavedAddresses` for malformed JSON.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, LookupError> {
        serde_json::from_str(json).map_err(LookupError::SavedAddresses)
    }
}

impl From<&SavedAddress> for EditPayload {
    fn from(address: &SavedAddress) -> Self {
        Self {
            id: Some(address.id.clone()),
            contact_name: Some(address.contact_name.clone()),
            phone: Some(address.phone.clone()),
            complement: Some(address.complement.clone()),
            city: Some(address.city.clone()),
            neighborhood: Some(address.neighborhood.clone()),
            is_primary: Some(if address.is_primary { PRIMARY_MARKER } else { "0" }.to_string()),
        }
    }
}

// =============================================================================
// Address Form
// =============================================================================

/// Whether the form creates a new address or updates an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Update,
}

impl FormMode {
    /// Value of the hidden mode field read by the submission endpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "crear",
            Self::Update => "actualizar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
}

/// Request to bring the form into view after it was filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

/// Client-side state of the address form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressForm {
    pub mode: FormMode,
    pub record_id: String,
    pub contact_name: String,
    pub phone: String,
    pub complement: String,
    pub city: String,
    pub neighborhood: NeighborhoodSelect,
    pub is_primary: bool,
    pub heading: String,
}

impl Default for AddressForm {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            record_id: String::new(),
            contact_name: String::new(),
            phone: String::new(),
            complement: String::new(),
            city: String::new(),
            neighborhood: NeighborhoodSelect::default(),
            is_primary: false,
            heading: CREATE_HEADING.to_string(),
        }
    }
}

impl AddressForm {
    /// City select changed: rebuild the neighborhood dropdown with nothing
    /// preselected.
    pub fn change_city(&mut self, lookup: &NeighborhoodLookup, city: &str) {
        city.clone_into(&mut self.city);
        self.neighborhood.populate(lookup, city, "");
    }

    /// Fill the form from an edit control's payload and switch to update
    /// mode.
    pub fn apply_edit(&mut self, lookup: &NeighborhoodLookup, payload: &EditPayload) -> ScrollRequest {
        fn field(value: Option<&String>) -> String {
            value.cloned().unwrap_or_default()
        }

        self.mode = FormMode::Update;
        self.record_id = field(payload.id.as_ref());
        self.contact_name = field(payload.contact_name.as_ref());
        self.phone = field(payload.phone.as_ref());
        self.complement = field(payload.complement.as_ref());

        self.city = field(payload.city.as_ref());
        let neighborhood = field(payload.neighborhood.as_ref());
        self.neighborhood.populate(lookup, &self.city, &neighborhood);

        self.is_primary = payload.is_primary.as_deref() == Some(PRIMARY_MARKER);
        EDIT_HEADING.clone_into(&mut self.heading);

        ScrollRequest {
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Start,
        }
    }
}

// =============================================================================
// Assistant
// =============================================================================

/// Entry point for pages that carry the address form.
///
/// Built only when the page has a form to assist; pages without one never
/// construct it.
#[derive(Debug, Clone, Default)]
pub struct AddressAssistant {
    lookup: NeighborhoodLookup,
}

impl AddressAssistant {
    #[must_use]
    pub const fn new(lookup: NeighborhoodLookup) -> Self {
        Self { lookup }
    }

    #[must_use]
    pub const fn lookup(&self) -> &NeighborhoodLookup {
        &self.lookup
    }

    /// A form in create mode with the neighborhood dropdown disabled.
    #[must_use]
    pub fn blank_form(&self) -> AddressForm {
        AddressForm::default()
    }

    /// Dropdown for a city change.
    #[must_use]
    pub fn neighborhood_select(&self, city: &str, selected: &str) -> NeighborhoodSelect {
        NeighborhoodSelect::for_city(&self.lookup, city, selected)
    }

    /// A fresh form filled from `payload`.
    #[must_use]
    pub fn edit_form(&self, payload: &EditPayload) -> (AddressForm, ScrollRequest) {
        let mut form = self.blank_form();
        let scroll = form.apply_edit(&self.lookup, payload);
        (form, scroll)
    }
}
