pub(crate) mod fees_constants;
pub(crate) mod fees_model;
pub(crate) mod fees_service;

// Re-export the public interface
pub use fees_constants::*;
pub use fees_model::{FeeRuleSet, ParticipantCategory};
pub use fees_service::compute_fee;
