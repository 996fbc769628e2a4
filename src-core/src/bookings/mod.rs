pub(crate) mod bookings_errors;
pub(crate) mod bookings_model;
pub(crate) mod bookings_service;
pub(crate) mod bookings_traits;

// Re-export the public interface
pub use bookings_errors::{BookingError, PaymentGatewayError};
pub use bookings_model::{Booking, HandoffOutcome, NewBooking, PaymentStatus};
pub use bookings_service::BookingService;
pub use bookings_traits::{BookingRepositoryTrait, PaymentGatewayTrait};
