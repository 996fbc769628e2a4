use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;

use super::super::search_model::{FlightOffer, HotelCandidate, HotelOffer, SearchRequest};

/// Raw reprice result, before the gateway compares it against the
/// originally displayed total
#[derive(Debug, Clone)]
pub struct RepricedOffer {
    pub total_price: Decimal,
    pub currency: String,
    pub payload: Value,
}

/// Transport-level failure from the travel inventory provider.
/// Mapping into the user-facing taxonomy happens at the gateway boundary,
/// never inside a client.
#[derive(Debug, Error)]
pub enum ProviderFailure {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider rejected the request: code {code:?} {title}")]
    Api {
        code: Option<i64>,
        title: String,
        raw: Value,
    },

    #[error("provider response could not be decoded: {0}")]
    Decode(String),
}

/// Seam to the third-party flight/hotel inventory provider. One method call
/// performs exactly one provider round trip; retries are a caller policy.
#[async_trait]
pub trait TravelProviderClient: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search_flight_offers(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<FlightOffer>, ProviderFailure>;

    async fn list_hotels_by_city(
        &self,
        city_code: &str,
    ) -> Result<Vec<HotelCandidate>, ProviderFailure>;

    async fn search_hotel_offers(
        &self,
        hotel_ids: &[String],
        request: &SearchRequest,
    ) -> Result<Vec<HotelOffer>, ProviderFailure>;

    async fn confirm_offer_price(
        &self,
        offer: &FlightOffer,
    ) -> Result<RepricedOffer, ProviderFailure>;
}
