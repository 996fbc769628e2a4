#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use uuid::Uuid;

use tripdesk_core::bookings::{
    Booking, BookingError, BookingRepositoryTrait, NewBooking, PaymentGatewayError,
    PaymentGatewayTrait, PaymentStatus,
};
use tripdesk_core::fees::ParticipantCategory;
use tripdesk_core::intake::{Participant, SubmissionPayload};
use tripdesk_core::search::{
    FlightOffer, HotelCandidate, HotelOffer, ProviderFailure, RepricedOffer, SearchRequest,
    TravelProviderClient,
};

/// Canned provider with per-endpoint call counters, so tests can assert that
/// a rejected request never reached the network layer.
#[derive(Default)]
pub struct StubProvider {
    pub flight_calls: AtomicUsize,
    pub hotel_list_calls: AtomicUsize,
    pub hotel_offer_calls: AtomicUsize,
    pub pricing_calls: AtomicUsize,

    pub flight_offers: Vec<FlightOffer>,
    pub hotel_candidates: Vec<HotelCandidate>,
    pub hotel_offers: Vec<HotelOffer>,
    /// When set, flight searches fail with this structured provider code
    pub fail_code: Option<i64>,
    /// When set, the reprice endpoint returns this total
    pub repriced_total: Option<Decimal>,
    /// Simulated provider latency
    pub delay: Option<Duration>,
}

impl StubProvider {
    async fn simulate_latency(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn structured_failure(&self, code: i64) -> ProviderFailure {
        ProviderFailure::Api {
            code: Some(code),
            title: "stubbed provider error".to_string(),
            raw: json!({ "errors": [{ "code": code, "title": "stubbed provider error" }] }),
        }
    }
}

#[async_trait]
impl TravelProviderClient for StubProvider {
    fn name(&self) -> &'static str {
        "STUB"
    }

    async fn search_flight_offers(
        &self,
        _request: &SearchRequest,
    ) -> Result<Vec<FlightOffer>, ProviderFailure> {
        self.flight_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        match self.fail_code {
            Some(code) => Err(self.structured_failure(code)),
            None => Ok(self.flight_offers.clone()),
        }
    }

    async fn list_hotels_by_city(
        &self,
        _city_code: &str,
    ) -> Result<Vec<HotelCandidate>, ProviderFailure> {
        self.hotel_list_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        Ok(self.hotel_candidates.clone())
    }

    async fn search_hotel_offers(
        &self,
        _hotel_ids: &[String],
        _request: &SearchRequest,
    ) -> Result<Vec<HotelOffer>, ProviderFailure> {
        self.hotel_offer_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        Ok(self.hotel_offers.clone())
    }

    async fn confirm_offer_price(
        &self,
        offer: &FlightOffer,
    ) -> Result<RepricedOffer, ProviderFailure> {
        self.pricing_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        Ok(RepricedOffer {
            total_price: self.repriced_total.unwrap_or(offer.total_price),
            currency: offer.currency.clone(),
            payload: offer.payload.clone(),
        })
    }
}

/// In-memory stand-in for the external record store
#[derive(Default)]
pub struct MemoryBookingRepository {
    pub bookings: Mutex<Vec<Booking>>,
    pub create_calls: AtomicUsize,
}

#[async_trait]
impl BookingRepositoryTrait for MemoryBookingRepository {
    async fn create_booking(&self, new_booking: NewBooking) -> Result<Booking, BookingError> {
        let sequence = self.create_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let booking = Booking {
            id: format!("BK-{:04}", sequence),
            submission_id: new_booking.submission_id,
            intake: new_booking.intake,
            payment_status: PaymentStatus::Pending,
            total_amount: new_booking.total_amount,
            currency: new_booking.currency,
            created_at: Utc::now(),
        };
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(booking)
    }

    async fn find_booking(&self, booking_id: &str) -> Result<Option<Booking>, BookingError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == booking_id)
            .cloned())
    }

    async fn find_by_submission_id(
        &self,
        submission_id: Uuid,
    ) -> Result<Option<Booking>, BookingError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.submission_id == submission_id)
            .cloned())
    }

    async fn update_payment_status(
        &self,
        booking_id: &str,
        status: PaymentStatus,
    ) -> Result<(), BookingError> {
        let mut bookings = self.bookings.lock().unwrap();
        match bookings.iter_mut().find(|b| b.id == booking_id) {
            Some(booking) => {
                booking.payment_status = status;
                Ok(())
            }
            None => Err(BookingError::NotFound(booking_id.to_string())),
        }
    }

    async fn replace_intake(
        &self,
        booking_id: &str,
        intake: SubmissionPayload,
    ) -> Result<(), BookingError> {
        let mut bookings = self.bookings.lock().unwrap();
        match bookings.iter_mut().find(|b| b.id == booking_id) {
            Some(booking) => {
                booking.intake = intake;
                Ok(())
            }
            None => Err(BookingError::NotFound(booking_id.to_string())),
        }
    }
}

/// Payment gateway stub; flip `fail` to simulate an outage
#[derive(Default)]
pub struct StubPaymentGateway {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
}

#[async_trait]
impl PaymentGatewayTrait for StubPaymentGateway {
    async fn initialize_payment(
        &self,
        booking_id: &str,
        _amount: Decimal,
        _currency: &str,
    ) -> Result<String, PaymentGatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(PaymentGatewayError("gateway offline".to_string()));
        }
        Ok(format!("https://pay.example.com/checkout/{}", booking_id))
    }
}

pub fn sample_flight_offer(total: Decimal) -> FlightOffer {
    FlightOffer {
        offer_id: "OFFER-1".to_string(),
        total_price: total,
        currency: "USD".to_string(),
        payload: json!({ "id": "OFFER-1", "price": { "total": total.to_string() } }),
    }
}

fn adult(name: &str) -> Participant {
    let mut participant = Participant::new(name);
    participant.age_years = 35;
    participant.category = ParticipantCategory::Adult;
    participant
}

/// Submission payload for a party of two adults, quoted at the default rates
pub fn sample_payload() -> SubmissionPayload {
    SubmissionPayload {
        submission_id: Uuid::new_v4(),
        fields: HashMap::new(),
        composition: vec![adult("Ama Mensah"), adult("Kofi Mensah")],
        quoted_fee: dec!(1000),
        currency: "GHS".to_string(),
    }
}
