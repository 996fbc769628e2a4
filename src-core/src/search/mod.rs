pub(crate) mod providers;
pub(crate) mod search_constants;
pub(crate) mod search_errors;
pub(crate) mod search_model;
pub(crate) mod search_service;

// Re-export the public interface
pub use search_constants::*;
pub use search_errors::{map_provider_failure, SearchError, SearchErrorKind};
pub use search_model::{
    CabinClass, FlightOffer, HotelCandidate, HotelOffer, HotelSearchOutcome, PartyCounts,
    SearchRequest,
};
pub use search_service::SearchService;

// Re-export provider types
pub use providers::amadeus_provider::{AmadeusClient, AmadeusConfig};
pub use providers::travel_provider::{ProviderFailure, RepricedOffer, TravelProviderClient};
