use thiserror::Error;

use crate::bookings::BookingError;
use crate::search::SearchError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the booking engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Search operation failed: {0}")]
    Search(#[from] SearchError),

    #[error("Booking operation failed: {0}")]
    Booking(#[from] BookingError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("App Configuration failed: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing configuration key: {0}")]
    MissingKey(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

// Add From implementation for rust_decimal::Error
impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

// Add From implementation for serde_json::Error
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
