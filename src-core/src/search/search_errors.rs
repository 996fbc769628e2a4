use std::fmt;

use log::warn;
use serde::Serialize;
use serde_json::Value;

use super::providers::travel_provider::ProviderFailure;

/// Closed taxonomy of user-facing search and pricing failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchErrorKind {
    InvalidLocationFormat,
    UnknownLocation,
    NoInventoryForRoute,
    NoInventoryForDates,
    ProviderTimeout,
    ProviderUnavailable,
    PriceDrifted,
}

impl SearchErrorKind {
    /// Prewritten copy shown to the end user. Raw provider bodies never are.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchErrorKind::InvalidLocationFormat => {
                "Location codes must be 3-letter codes, for example ACC."
            }
            SearchErrorKind::UnknownLocation => {
                "We don't recognise one of the locations you entered. Please pick a city from the list."
            }
            SearchErrorKind::NoInventoryForRoute => {
                "No flights were found for this route. Try nearby airports or different dates."
            }
            SearchErrorKind::NoInventoryForDates => {
                "Nothing is available for the selected dates. Try shifting your travel dates."
            }
            SearchErrorKind::ProviderTimeout => {
                "Our travel partner took too long to respond. Please try again."
            }
            SearchErrorKind::ProviderUnavailable => {
                "Our travel partner is temporarily unavailable. Please try again shortly."
            }
            SearchErrorKind::PriceDrifted => {
                "The price of this offer changed since it was displayed. Please review the new total."
            }
        }
    }
}

/// Failure surfaced by SearchGateway and PriceConfirmation.
/// Carries the machine kind, the user message and the raw provider payload
/// for operator logs.
#[derive(Debug, Clone)]
pub struct SearchError {
    pub kind: SearchErrorKind,
    /// Raw provider error body, retained for logs only
    pub provider_detail: Option<Value>,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.user_message())
    }
}

impl std::error::Error for SearchError {}

impl SearchError {
    pub fn new(kind: SearchErrorKind) -> Self {
        SearchError {
            kind,
            provider_detail: None,
        }
    }

    pub fn with_detail(kind: SearchErrorKind, detail: Value) -> Self {
        SearchError {
            kind,
            provider_detail: Some(detail),
        }
    }

    pub fn user_message(&self) -> &'static str {
        self.kind.user_message()
    }
}

/// Known provider error codes and their one, fixed destination in the
/// taxonomy. Comments carry the provider's own title for the code.
const PROVIDER_CODE_MAP: &[(i64, SearchErrorKind)] = &[
    (141, SearchErrorKind::ProviderUnavailable), // SYSTEM ERROR HAS OCCURRED
    (425, SearchErrorKind::NoInventoryForDates), // INVALID DATE
    (1797, SearchErrorKind::UnknownLocation),    // INVALID CITY/AIRPORT CODE
    (4926, SearchErrorKind::NoInventoryForRoute), // NO FARE APPLICABLE FOR REQUESTED ITINERARY
    (6003, SearchErrorKind::NoInventoryForRoute), // ITEM/DATA NOT FOUND
    (10604, SearchErrorKind::NoInventoryForDates), // NO AVAILABILITY FOR REQUESTED DATES
    (38189, SearchErrorKind::ProviderUnavailable), // INTERNAL PROCESSING ERROR
];

fn kind_for_provider_code(code: i64) -> Option<SearchErrorKind> {
    PROVIDER_CODE_MAP
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, kind)| *kind)
}

/// Single mapping point from transport-level provider failures to the closed
/// taxonomy. Unmapped or missing codes fall back to `ProviderUnavailable`
/// with its generic retry-later message.
pub fn map_provider_failure(failure: ProviderFailure) -> SearchError {
    match failure {
        ProviderFailure::Api { code, title, raw } => {
            let kind = code
                .and_then(kind_for_provider_code)
                .unwrap_or(SearchErrorKind::ProviderUnavailable);
            warn!(
                "provider error code={:?} title={:?} mapped to {:?}",
                code, title, kind
            );
            SearchError::with_detail(kind, raw)
        }
        ProviderFailure::Http(err) => {
            warn!("provider transport error: {}", err);
            SearchError::new(SearchErrorKind::ProviderUnavailable)
        }
        ProviderFailure::Decode(message) => {
            warn!("provider response decode error: {}", message);
            SearchError::new(SearchErrorKind::ProviderUnavailable)
        }
    }
}
