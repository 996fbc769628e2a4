use std::sync::Arc;
use std::time::Duration;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use tokio::time::timeout;

use crate::locations::LocationCatalog;

use super::providers::travel_provider::TravelProviderClient;
use super::search_constants::{MAX_HOTEL_CANDIDATES, PROVIDER_CALL_TIMEOUT};
use super::search_errors::{map_provider_failure, SearchError, SearchErrorKind};
use super::search_model::{FlightOffer, HotelSearchOutcome, SearchRequest};

lazy_static! {
    static ref IATA_CODE: Regex = Regex::new(r"^[A-Z]{3}$").unwrap();
}

/// Gateway to the external inventory provider. Location codes are resolved
/// against the static catalog before any network traffic, and every provider
/// failure is mapped into the closed taxonomy at this boundary.
pub struct SearchService {
    provider: Arc<dyn TravelProviderClient>,
    catalog: LocationCatalog,
    call_timeout: Duration,
}

impl SearchService {
    pub fn new(provider: Arc<dyn TravelProviderClient>, catalog: LocationCatalog) -> Self {
        SearchService {
            provider,
            catalog,
            call_timeout: PROVIDER_CALL_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Uppercase, check the 3-letter shape, then check catalog membership.
    /// Both checks run before any provider call: fail fast, and never send
    /// the provider a code it is known not to support.
    fn resolve_code(&self, raw: &str) -> Result<String, SearchError> {
        let code = raw.trim().to_uppercase();
        if !IATA_CODE.is_match(&code) {
            return Err(SearchError::new(SearchErrorKind::InvalidLocationFormat));
        }
        if self.catalog.by_code(&code).is_none() {
            return Err(SearchError::new(SearchErrorKind::UnknownLocation));
        }
        Ok(code)
    }

    /// One provider round trip, no automatic retry: quota and rate limits
    /// make blind retries unsafe, so retrying is the caller's policy.
    pub async fn search_flights(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<FlightOffer>, SearchError> {
        let origin = self.resolve_code(&request.origin)?;
        let destination = self.resolve_code(&request.destination)?;

        let normalized = SearchRequest {
            origin,
            destination,
            ..request.clone()
        };
        debug!(
            "searching {} flights {} -> {} departing {}",
            self.provider.name(),
            normalized.origin,
            normalized.destination,
            normalized.departure_date
        );

        match timeout(
            self.call_timeout,
            self.provider.search_flight_offers(&normalized),
        )
        .await
        {
            Ok(Ok(offers)) => Ok(offers),
            Ok(Err(failure)) => Err(map_provider_failure(failure)),
            Err(_elapsed) => Err(SearchError::new(SearchErrorKind::ProviderTimeout)),
        }
    }

    /// Two-phase hotel search: list candidate properties for the city, then
    /// price the candidate set. A city with no listed properties returns an
    /// empty outcome with the informational flag, not an error.
    pub async fn search_hotels(
        &self,
        request: &SearchRequest,
    ) -> Result<HotelSearchOutcome, SearchError> {
        let city = self.resolve_code(&request.destination)?;

        let candidates = match timeout(self.call_timeout, self.provider.list_hotels_by_city(&city))
            .await
        {
            Ok(Ok(candidates)) => candidates,
            Ok(Err(failure)) => return Err(map_provider_failure(failure)),
            Err(_elapsed) => return Err(SearchError::new(SearchErrorKind::ProviderTimeout)),
        };

        if candidates.is_empty() {
            debug!("no listed properties for {}", city);
            return Ok(HotelSearchOutcome {
                offers: Vec::new(),
                no_properties: true,
            });
        }

        let hotel_ids: Vec<String> = candidates
            .iter()
            .take(MAX_HOTEL_CANDIDATES)
            .map(|candidate| candidate.hotel_id.clone())
            .collect();

        let normalized = SearchRequest {
            destination: city,
            ..request.clone()
        };

        match timeout(
            self.call_timeout,
            self.provider.search_hotel_offers(&hotel_ids, &normalized),
        )
        .await
        {
            Ok(Ok(offers)) => Ok(HotelSearchOutcome {
                offers,
                no_properties: false,
            }),
            Ok(Err(failure)) => Err(map_provider_failure(failure)),
            Err(_elapsed) => Err(SearchError::new(SearchErrorKind::ProviderTimeout)),
        }
    }
}
