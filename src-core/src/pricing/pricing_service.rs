use std::sync::Arc;
use std::time::Duration;

use log::warn;
use tokio::time::timeout;

use crate::search::search_constants::PROVIDER_CALL_TIMEOUT;
use crate::search::search_errors::{map_provider_failure, SearchError, SearchErrorKind};
use crate::search::search_model::FlightOffer;
use crate::search::TravelProviderClient;

use super::pricing_model::ConfirmedOffer;

/// Second-phase pricing check, run exactly once on the offer the user
/// selected, immediately before payment initiation.
pub struct PriceConfirmationService {
    provider: Arc<dyn TravelProviderClient>,
    call_timeout: Duration,
}

impl PriceConfirmationService {
    pub fn new(provider: Arc<dyn TravelProviderClient>) -> Self {
        PriceConfirmationService {
            provider,
            call_timeout: PROVIDER_CALL_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Re-price `offer` against the provider and compare against the total
    /// that was displayed when the offer was selected.
    pub async fn reconfirm(&self, offer: &FlightOffer) -> Result<ConfirmedOffer, SearchError> {
        let repriced = match timeout(self.call_timeout, self.provider.confirm_offer_price(offer))
            .await
        {
            Ok(Ok(repriced)) => repriced,
            Ok(Err(failure)) => return Err(map_provider_failure(failure)),
            Err(_elapsed) => return Err(SearchError::new(SearchErrorKind::ProviderTimeout)),
        };

        let price_changed = repriced.total_price != offer.total_price;
        if price_changed {
            warn!(
                "price drift on offer {}: displayed {} {}, confirmed {} {}",
                offer.offer_id,
                offer.total_price,
                offer.currency,
                repriced.total_price,
                repriced.currency
            );
        }

        Ok(ConfirmedOffer {
            offer_id: offer.offer_id.clone(),
            original_total: offer.total_price,
            confirmed_total: repriced.total_price,
            currency: repriced.currency,
            price_changed,
            payload: repriced.payload,
        })
    }
}
