use std::sync::Arc;

use log::{debug, warn};

use crate::intake::SubmissionPayload;
use crate::pricing::ConfirmedOffer;

use super::bookings_errors::BookingError;
use super::bookings_model::{Booking, HandoffOutcome, NewBooking, PaymentStatus};
use super::bookings_traits::{BookingRepositoryTrait, PaymentGatewayTrait};

/// Orchestrates submission: create the booking record, initialize payment,
/// hand back the gateway redirect. A booking that exists but could not start
/// payment stays in `Pending` so the user can always resume; there is no
/// state in which a booking exists with no path to payment.
pub struct BookingService {
    repository: Arc<dyn BookingRepositoryTrait>,
    payment_gateway: Arc<dyn PaymentGatewayTrait>,
}

impl BookingService {
    pub fn new(
        repository: Arc<dyn BookingRepositoryTrait>,
        payment_gateway: Arc<dyn PaymentGatewayTrait>,
    ) -> Self {
        BookingService {
            repository,
            payment_gateway,
        }
    }

    /// Full handoff for a submitted intake session.
    ///
    /// For reservation flows `confirmation` is the reconfirmed offer; when it
    /// reports drift the handoff refuses to touch the gateway until the
    /// caller passes `drift_accepted` from an explicit user action.
    pub async fn handoff(
        &self,
        payload: SubmissionPayload,
        confirmation: Option<&ConfirmedOffer>,
        drift_accepted: bool,
    ) -> Result<HandoffOutcome, BookingError> {
        if let Some(confirmation) = confirmation {
            if confirmation.price_changed && !drift_accepted {
                return Err(BookingError::PriceDriftUnaccepted {
                    original_total: confirmation.original_total,
                    confirmed_total: confirmation.confirmed_total,
                });
            }
        }

        // One record per submission id: a double-submit reuses the booking
        // created by the first attempt instead of creating a second.
        let booking = match self
            .repository
            .find_by_submission_id(payload.submission_id)
            .await?
        {
            Some(existing) => {
                debug!(
                    "reusing booking {} for submission {}",
                    existing.id, existing.submission_id
                );
                if existing.payment_status != PaymentStatus::Pending {
                    return Err(BookingError::NotPending(existing.id));
                }
                existing
            }
            None => {
                self.repository
                    .create_booking(NewBooking {
                        submission_id: payload.submission_id,
                        total_amount: payload.quoted_fee,
                        currency: payload.currency.clone(),
                        intake: payload,
                    })
                    .await?
            }
        };

        self.init_payment(booking).await
    }

    /// Resume payment for a booking left in `Pending` by an earlier failure
    pub async fn retry_payment(&self, booking_id: &str) -> Result<HandoffOutcome, BookingError> {
        let booking = self
            .repository
            .find_booking(booking_id)
            .await?
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))?;

        if booking.payment_status != PaymentStatus::Pending {
            return Err(BookingError::NotPending(booking_id.to_string()));
        }
        self.init_payment(booking).await
    }

    /// Amend a stored intake. After payment the participant count is locked:
    /// the fee was charged for a fixed party size, so a paid booking only
    /// accepts amendments that keep the count unchanged.
    pub async fn amend_intake(
        &self,
        booking_id: &str,
        amended: SubmissionPayload,
    ) -> Result<(), BookingError> {
        let booking = self
            .repository
            .find_booking(booking_id)
            .await?
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))?;

        if booking.payment_status == PaymentStatus::Paid
            && amended.composition.len() != booking.intake.composition.len()
        {
            return Err(BookingError::CompositionLocked {
                paid_count: booking.intake.composition.len(),
                amended_count: amended.composition.len(),
            });
        }

        self.repository.replace_intake(booking_id, amended).await
    }

    async fn init_payment(&self, booking: Booking) -> Result<HandoffOutcome, BookingError> {
        match self
            .payment_gateway
            .initialize_payment(&booking.id, booking.total_amount, &booking.currency)
            .await
        {
            Ok(redirect_url) => Ok(HandoffOutcome {
                booking_id: booking.id,
                redirect_url,
            }),
            Err(err) => {
                // The record stays Pending on purpose; it is never deleted here
                warn!("payment init failed for booking {}: {}", booking.id, err);
                Err(BookingError::PaymentInit {
                    booking_id: booking.id,
                    reason: err.to_string(),
                })
            }
        }
    }
}
