//! Dataset validation.
//!
//! Loading already rejects malformed JSON, duplicate or zero product ids and
//! out-of-range ratings. On top of that every saved address must point at a
//! configured city and one of its neighborhoods, otherwise its edit form
//! opens with a disabled neighborhood dropdown.

use nexo_core::{NeighborhoodLookup, SavedAddress};
use nexo_storefront::config::DataSources;
use nexo_storefront::data::{DataError, StorefrontData};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("{} saved address(es) do not match the neighborhood lookup", .0.len())]
    Inconsistent(Vec<AddressIssue>),
}

/// A saved address the lookup cannot place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressIssue {
    UnknownCity { id: String, city: String },
    UnknownNeighborhood {
        id: String,
        city: String,
        neighborhood: String,
    },
}

impl std::fmt::Display for AddressIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCity { id, city } => write!(f, "address {id}: unknown city '{city}'"),
            Self::UnknownNeighborhood {
                id,
                city,
                neighborhood,
            } => write!(
                f,
                "address {id}: '{neighborhood}' is not a neighborhood of {city}"
            ),
        }
    }
}

/// Check every saved address against the lookup.
#[must_use]
pub fn check_addresses(lookup: &NeighborhoodLookup, saved: &[SavedAddress]) -> Vec<AddressIssue> {
    saved
        .iter()
        .filter_map(|address| match lookup.neighborhoods(&address.city) {
            None => Some(AddressIssue::UnknownCity {
                id: address.id.clone(),
                city: address.city.clone(),
            }),
            Some(neighborhoods) if !neighborhoods.contains(&address.neighborhood) => {
                Some(AddressIssue::UnknownNeighborhood {
                    id: address.id.clone(),
                    city: address.city.clone(),
                    neighborhood: address.neighborhood.clone(),
                })
            }
            Some(_) => None,
        })
        .collect()
}

/// Load every dataset and cross-check the saved addresses.
///
/// # Errors
///
/// Returns `ValidateError` if a dataset fails to load or any saved address
/// does not match the lookup.
pub fn run(sources: &DataSources) -> Result<(), ValidateError> {
    let data = StorefrontData::load(sources)?;

    let issues = check_addresses(&data.neighborhoods, &data.saved_addresses);
    for issue in &issues {
        tracing::warn!("{issue}");
    }
    if !issues.is_empty() {
        return Err(ValidateError::Inconsistent(issues));
    }

    tracing::info!(
        "Data OK: {} products, {} categories, {} cities, {} saved addresses",
        data.catalog.len(),
        data.catalog.categories().len(),
        data.neighborhoods.len(),
        data.saved_addresses.len()
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn lookup() -> NeighborhoodLookup {
        NeighborhoodLookup::from_json(r#"{"Cali": ["San Fernando", "Granada"]}"#).unwrap()
    }

    fn address(id: &str, city: &str, neighborhood: &str) -> SavedAddress {
        SavedAddress {
            id: id.to_string(),
            contact_name: "Ana".to_string(),
            phone: "3000000000".to_string(),
            complement: String::new(),
            city: city.to_string(),
            neighborhood: neighborhood.to_string(),
            is_primary: false,
        }
    }

    #[test]
    fn test_matching_addresses_pass() {
        let saved = vec![address("1", "Cali", "Granada")];
        assert!(check_addresses(&lookup(), &saved).is_empty());
    }

    #[test]
    fn test_unknown_city_and_neighborhood_reported() {
        let saved = vec![
            address("1", "Pasto", "Centro"),
            address("2", "Cali", "Chapinero"),
        ];
        let issues = check_addresses(&lookup(), &saved);
        assert_eq!(issues.len(), 2);
        assert!(matches!(&issues[0], AddressIssue::UnknownCity { city, .. } if city == "Pasto"));
        assert_eq!(
            issues[1].to_string(),
            "address 2: 'Chapinero' is not a neighborhood of Cali"
        );
    }

    #[test]
    fn test_builtin_data_validates() {
        run(&DataSources::default()).unwrap();
    }
}
