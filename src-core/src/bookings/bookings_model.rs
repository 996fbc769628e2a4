use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intake::SubmissionPayload;

/// Payment lifecycle of a booking record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Cancelled,
}

/// Input for creating a booking record in the external store
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub submission_id: Uuid,
    pub intake: SubmissionPayload,
    /// Frozen at submission time; never recomputed afterwards
    pub total_amount: Decimal,
    pub currency: String,
}

/// Persisted record as returned by the external store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub submission_id: Uuid,
    pub intake: SubmissionPayload,
    pub payment_status: PaymentStatus,
    pub total_amount: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful handoff: where to send the user to pay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffOutcome {
    pub booking_id: String,
    pub redirect_url: String,
}
