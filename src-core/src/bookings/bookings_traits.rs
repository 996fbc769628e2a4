use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::intake::SubmissionPayload;

use super::bookings_errors::{BookingError, PaymentGatewayError};
use super::bookings_model::{Booking, NewBooking, PaymentStatus};

/// External record store for bookings. This core owns no schema beyond
/// "the amount is frozen at submission time".
#[async_trait]
pub trait BookingRepositoryTrait: Send + Sync {
    async fn create_booking(&self, new_booking: NewBooking) -> Result<Booking, BookingError>;

    async fn find_booking(&self, booking_id: &str) -> Result<Option<Booking>, BookingError>;

    async fn find_by_submission_id(
        &self,
        submission_id: Uuid,
    ) -> Result<Option<Booking>, BookingError>;

    async fn update_payment_status(
        &self,
        booking_id: &str,
        status: PaymentStatus,
    ) -> Result<(), BookingError>;

    async fn replace_intake(
        &self,
        booking_id: &str,
        intake: SubmissionPayload,
    ) -> Result<(), BookingError>;
}

/// External payment gateway: amount and booking id in, redirect URL out
#[async_trait]
pub trait PaymentGatewayTrait: Send + Sync {
    async fn initialize_payment(
        &self,
        booking_id: &str,
        amount: Decimal,
        currency: &str,
    ) -> Result<String, PaymentGatewayError>;
}
