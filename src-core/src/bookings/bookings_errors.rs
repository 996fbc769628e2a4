use rust_decimal::Decimal;
use thiserror::Error;

use crate::search::SearchErrorKind;

/// Error from the external payment gateway, as reported by its client
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct PaymentGatewayError(pub String);

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Record store operation failed: {0}")]
    Store(String),

    #[error("Booking '{0}' was not found")]
    NotFound(String),

    #[error("Booking '{0}' is not awaiting payment")]
    NotPending(String),

    #[error(
        "Payment could not be initialized for booking '{booking_id}': {reason}. \
         The booking is saved; payment can be retried later."
    )]
    PaymentInit { booking_id: String, reason: String },

    #[error(
        "The offer price changed from {original_total} to {confirmed_total}; \
         explicit acceptance is required before payment"
    )]
    PriceDriftUnaccepted {
        original_total: Decimal,
        confirmed_total: Decimal,
    },

    #[error(
        "Participant count cannot change after payment: fee was charged for \
         {paid_count} travelers, amendment has {amended_count}"
    )]
    CompositionLocked {
        paid_count: usize,
        amended_count: usize,
    },
}

impl BookingError {
    /// Taxonomy kind for failures that surface through the search error
    /// vocabulary; storage and payment failures have no mapping.
    pub fn search_kind(&self) -> Option<SearchErrorKind> {
        match self {
            BookingError::PriceDriftUnaccepted { .. } => Some(SearchErrorKind::PriceDrifted),
            _ => None,
        }
    }
}
