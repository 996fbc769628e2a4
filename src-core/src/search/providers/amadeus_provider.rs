use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::ConfigError;

use super::super::search_model::{FlightOffer, HotelCandidate, HotelOffer, SearchRequest};
use super::travel_provider::{ProviderFailure, RepricedOffer, TravelProviderClient};

const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// A cached token is considered expired this many seconds early, so a
/// request never goes out with a token about to lapse mid-flight
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

/// Long-lived client credentials for the inventory provider
#[derive(Debug, Clone)]
pub struct AmadeusConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
}

impl AmadeusConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        AmadeusConfig {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id = std::env::var("AMADEUS_CLIENT_ID")
            .map_err(|_| ConfigError::MissingKey("AMADEUS_CLIENT_ID".to_string()))?;
        let client_secret = std::env::var("AMADEUS_CLIENT_SECRET")
            .map_err(|_| ConfigError::MissingKey("AMADEUS_CLIENT_SECRET".to_string()))?;
        let base_url =
            std::env::var("AMADEUS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(AmadeusConfig {
            client_id,
            client_secret,
            base_url,
        })
    }
}

#[derive(Debug, Clone)]
struct BearerToken {
    value: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Client for the provider's self-service REST API. The short-lived bearer
/// token obtained from the long-lived credentials is cached in-process and
/// refreshed on expiry.
pub struct AmadeusClient {
    client: Client,
    config: AmadeusConfig,
    token: RwLock<Option<BearerToken>>,
}

impl AmadeusClient {
    pub fn new(config: AmadeusConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        AmadeusClient {
            client,
            config,
            token: RwLock::new(None),
        }
    }

    async fn bearer_token(&self) -> Result<String, ProviderFailure> {
        if let Ok(guard) = self.token.read() {
            if let Some(token) = guard.as_ref() {
                let margin = chrono::Duration::seconds(TOKEN_EXPIRY_MARGIN_SECS);
                if token.expires_at - margin > Utc::now() {
                    return Ok(token.value.clone());
                }
            }
        }

        debug!("exchanging client credentials for a fresh provider token");
        let url = format!("{}/v1/security/oauth2/token", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let raw = response.json::<Value>().await.unwrap_or(Value::Null);
            return Err(api_failure(raw));
        }

        let token_response: TokenResponse = response.json().await?;
        let token = BearerToken {
            value: token_response.access_token,
            expires_at: Utc::now() + chrono::Duration::seconds(token_response.expires_in),
        };

        let value = token.value.clone();
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
        Ok(value)
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Value, ProviderFailure> {
        let token = self.bearer_token().await?;
        let url = format!("{}{}", self.config.base_url, path);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let raw = response.json::<Value>().await.unwrap_or(Value::Null);
            return Err(api_failure(raw));
        }

        Ok(response.json::<Value>().await?)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ProviderFailure> {
        let token = self.bearer_token().await?;
        let url = format!("{}{}", self.config.base_url, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let raw = response.json::<Value>().await.unwrap_or(Value::Null);
            return Err(api_failure(raw));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Extract the first structured error from a provider error body
fn api_failure(raw: Value) -> ProviderFailure {
    let first = raw.get("errors").and_then(|errors| errors.get(0));
    let code = first.and_then(|e| e.get("code")).and_then(Value::as_i64);
    let title = first
        .and_then(|e| e.get("title"))
        .and_then(Value::as_str)
        .unwrap_or("unknown provider error")
        .to_string();

    ProviderFailure::Api { code, title, raw }
}

fn parse_price(price: &Value, field: &str) -> Result<Decimal, ProviderFailure> {
    let total = price
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ProviderFailure::Decode(format!("missing price field '{}'", field)))?;

    total
        .parse::<Decimal>()
        .map_err(|e| ProviderFailure::Decode(format!("unparseable price '{}': {}", total, e)))
}

fn parse_currency(price: &Value) -> Result<String, ProviderFailure> {
    price
        .get("currency")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProviderFailure::Decode("missing price currency".to_string()))
}

fn parse_flight_offers(body: &Value) -> Result<Vec<FlightOffer>, ProviderFailure> {
    let data = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderFailure::Decode("missing offer data array".to_string()))?;

    data.iter()
        .map(|item| {
            let offer_id = item
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| ProviderFailure::Decode("offer has no id".to_string()))?
                .to_string();
            let price = item
                .get("price")
                .ok_or_else(|| ProviderFailure::Decode("offer has no price".to_string()))?;

            Ok(FlightOffer {
                offer_id,
                total_price: parse_price(price, "total")?,
                currency: parse_currency(price)?,
                payload: item.clone(),
            })
        })
        .collect()
}

fn parse_hotel_offers(body: &Value) -> Result<Vec<HotelOffer>, ProviderFailure> {
    let data = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderFailure::Decode("missing hotel data array".to_string()))?;

    let mut offers = Vec::new();
    for item in data {
        let hotel = item.get("hotel");
        let hotel_id = hotel
            .and_then(|h| h.get("hotelId"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let hotel_name = hotel
            .and_then(|h| h.get("name"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        // Each property may carry several rate plans; surface each priced one
        let Some(property_offers) = item.get("offers").and_then(Value::as_array) else {
            continue;
        };
        for offer in property_offers {
            let offer_id = offer
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let Some(price) = offer.get("price") else {
                continue;
            };

            offers.push(HotelOffer {
                hotel_id: hotel_id.clone(),
                hotel_name: hotel_name.clone(),
                offer_id,
                total_price: parse_price(price, "total")?,
                currency: parse_currency(price)?,
                payload: offer.clone(),
            });
        }
    }

    Ok(offers)
}

#[async_trait]
impl TravelProviderClient for AmadeusClient {
    fn name(&self) -> &'static str {
        "AMADEUS"
    }

    async fn search_flight_offers(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<FlightOffer>, ProviderFailure> {
        let mut query = vec![
            ("originLocationCode".to_string(), request.origin.clone()),
            (
                "destinationLocationCode".to_string(),
                request.destination.clone(),
            ),
            (
                "departureDate".to_string(),
                request.departure_date.format("%Y-%m-%d").to_string(),
            ),
            ("adults".to_string(), request.party.adults.to_string()),
            ("max".to_string(), request.max_results.to_string()),
        ];
        if let Some(return_date) = request.return_date {
            query.push((
                "returnDate".to_string(),
                return_date.format("%Y-%m-%d").to_string(),
            ));
        }
        if request.party.children > 0 {
            query.push(("children".to_string(), request.party.children.to_string()));
        }
        if request.party.infants > 0 {
            query.push(("infants".to_string(), request.party.infants.to_string()));
        }
        if let Some(cabin) = request.cabin {
            query.push((
                "travelClass".to_string(),
                cabin.as_provider_value().to_string(),
            ));
        }

        let body = self.get_json("/v2/shopping/flight-offers", &query).await?;
        parse_flight_offers(&body)
    }

    async fn list_hotels_by_city(
        &self,
        city_code: &str,
    ) -> Result<Vec<HotelCandidate>, ProviderFailure> {
        let query = vec![("cityCode".to_string(), city_code.to_string())];
        let body = self
            .get_json("/v1/reference-data/locations/hotels/by-city", &query)
            .await?;

        let data = body
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderFailure::Decode("missing hotel list array".to_string()))?;

        Ok(data
            .iter()
            .filter_map(|item| {
                let hotel_id = item.get("hotelId").and_then(Value::as_str)?;
                let name = item.get("name").and_then(Value::as_str).unwrap_or("");
                Some(HotelCandidate {
                    hotel_id: hotel_id.to_string(),
                    name: name.to_string(),
                })
            })
            .collect())
    }

    async fn search_hotel_offers(
        &self,
        hotel_ids: &[String],
        request: &SearchRequest,
    ) -> Result<Vec<HotelOffer>, ProviderFailure> {
        let mut query = vec![
            ("hotelIds".to_string(), hotel_ids.join(",")),
            ("adults".to_string(), request.party.adults.to_string()),
            (
                "checkInDate".to_string(),
                request.departure_date.format("%Y-%m-%d").to_string(),
            ),
        ];
        if let Some(return_date) = request.return_date {
            query.push((
                "checkOutDate".to_string(),
                return_date.format("%Y-%m-%d").to_string(),
            ));
        }

        let body = self.get_json("/v3/shopping/hotel-offers", &query).await?;
        parse_hotel_offers(&body)
    }

    async fn confirm_offer_price(
        &self,
        offer: &FlightOffer,
    ) -> Result<RepricedOffer, ProviderFailure> {
        let body = json!({
            "data": {
                "type": "flight-offers-pricing",
                "flightOffers": [offer.payload],
            }
        });

        let response = self
            .post_json("/v1/shopping/flight-offers/pricing", &body)
            .await?;

        let repriced = response
            .get("data")
            .and_then(|d| d.get("flightOffers"))
            .and_then(|offers| offers.get(0))
            .ok_or_else(|| ProviderFailure::Decode("missing repriced offer".to_string()))?;
        let price = repriced
            .get("price")
            .ok_or_else(|| ProviderFailure::Decode("repriced offer has no price".to_string()))?;

        // Pricing responses carry the final amount under grandTotal
        let total_price = parse_price(price, "grandTotal").or_else(|_| parse_price(price, "total"))?;

        Ok(RepricedOffer {
            total_price,
            currency: parse_currency(price)?,
            payload: repriced.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_flight_offers_normalizes_price() {
        let body = json!({
            "data": [
                {
                    "id": "1",
                    "price": { "total": "1840.50", "currency": "USD" },
                    "itineraries": []
                },
                {
                    "id": "2",
                    "price": { "total": "990.00", "currency": "USD" }
                }
            ]
        });

        let offers = parse_flight_offers(&body).unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].total_price, dec!(1840.50));
        assert_eq!(offers[0].currency, "USD");
        // The provider payload is kept verbatim for reconfirmation
        assert_eq!(offers[0].payload["id"], "1");
    }

    #[test]
    fn test_parse_flight_offers_rejects_missing_price() {
        let body = json!({ "data": [{ "id": "1" }] });
        assert!(matches!(
            parse_flight_offers(&body),
            Err(ProviderFailure::Decode(_))
        ));
    }

    #[test]
    fn test_parse_hotel_offers_flattens_rate_plans() {
        let body = json!({
            "data": [{
                "hotel": { "hotelId": "HLLON101", "name": "Harbour Hotel" },
                "offers": [
                    { "id": "A", "price": { "total": "310.00", "currency": "GBP" } },
                    { "id": "B", "price": { "total": "275.00", "currency": "GBP" } }
                ]
            }]
        });

        let offers = parse_hotel_offers(&body).unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[1].hotel_id, "HLLON101");
        assert_eq!(offers[1].total_price, dec!(275.00));
    }

    #[test]
    fn test_api_failure_extracts_first_structured_error() {
        let raw = json!({
            "errors": [
                { "code": 4926, "title": "NO FARE APPLICABLE", "status": 400 }
            ]
        });

        match api_failure(raw) {
            ProviderFailure::Api { code, title, .. } => {
                assert_eq!(code, Some(4926));
                assert_eq!(title, "NO FARE APPLICABLE");
            }
            other => panic!("unexpected failure: {:?}", other),
        }
    }

    #[test]
    fn test_api_failure_tolerates_unstructured_body() {
        match api_failure(Value::Null) {
            ProviderFailure::Api { code, title, .. } => {
                assert_eq!(code, None);
                assert_eq!(title, "unknown provider error");
            }
            other => panic!("unexpected failure: {:?}", other),
        }
    }
}
