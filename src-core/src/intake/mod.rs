pub(crate) mod intake_model;
pub(crate) mod intake_service;
pub(crate) mod intake_steps;

// Re-export the public interface
pub use intake_model::{
    FieldValue, Participant, StepTransition, SubmissionPayload, ValidationIssue,
};
pub use intake_service::IntakeSession;
pub use intake_steps::{default_steps, fields, StepDef, MAX_SELECTED_SERVICES};
