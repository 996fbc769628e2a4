pub(crate) mod amadeus_provider;
pub(crate) mod travel_provider;
