pub(crate) mod locations_model;
pub(crate) mod locations_service;

// Re-export the public interface
pub use locations_model::LocationCode;
pub use locations_service::LocationCatalog;
