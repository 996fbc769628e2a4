pub(crate) mod pricing_model;
pub(crate) mod pricing_service;

// Re-export the public interface
pub use pricing_model::ConfirmedOffer;
pub use pricing_service::PriceConfirmationService;
