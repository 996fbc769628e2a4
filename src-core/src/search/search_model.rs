use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fees::ParticipantCategory;
use crate::intake::Participant;

use super::search_constants::DEFAULT_RESULT_CAP;

/// Cabin classes the provider understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub fn as_provider_value(&self) -> &'static str {
        match self {
            CabinClass::Economy => "ECONOMY",
            CabinClass::PremiumEconomy => "PREMIUM_ECONOMY",
            CabinClass::Business => "BUSINESS",
            CabinClass::First => "FIRST",
        }
    }
}

/// Party sizes in the provider's three buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl PartyCounts {
    /// Collapse intake categories into the provider's buckets. An unset
    /// category cannot survive intake validation; if one shows up anyway it
    /// counts as an adult so the party is never under-seated.
    pub fn from_composition(composition: &[Participant]) -> Self {
        let mut counts = PartyCounts::default();
        for participant in composition {
            match participant.category {
                ParticipantCategory::Adult
                | ParticipantCategory::Teen
                | ParticipantCategory::Unset => counts.adults += 1,
                ParticipantCategory::Child | ParticipantCategory::Toddler => counts.children += 1,
                ParticipantCategory::Infant => counts.infants += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.adults + self.children + self.infants
    }
}

/// Normalized query for flight and hotel searches.
/// `destination` doubles as the city code for hotel lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub party: PartyCounts,
    pub cabin: Option<CabinClass>,
    pub max_results: u32,
}

impl SearchRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: NaiveDate,
    ) -> Self {
        SearchRequest {
            origin: origin.into(),
            destination: destination.into(),
            departure_date,
            return_date: None,
            party: PartyCounts {
                adults: 1,
                ..Default::default()
            },
            cabin: None,
            max_results: DEFAULT_RESULT_CAP,
        }
    }
}

/// One flight offer: opaque provider payload plus the normalized price
/// pulled out for display and reconfirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub offer_id: String,
    pub total_price: Decimal,
    pub currency: String,
    /// Untouched provider payload; echoed back verbatim at reconfirmation
    pub payload: Value,
}

/// One priced hotel offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOffer {
    pub hotel_id: String,
    pub hotel_name: String,
    pub offer_id: String,
    pub total_price: Decimal,
    pub currency: String,
    pub payload: Value,
}

/// Candidate property from the listing phase of a hotel search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelCandidate {
    pub hotel_id: String,
    pub name: String,
}

/// Hotel search result. A city with no listed properties is not an error:
/// the outcome is empty with `no_properties` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchOutcome {
    pub offers: Vec<HotelOffer>,
    pub no_properties: bool,
}
