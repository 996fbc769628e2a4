use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

/// Outcome of re-pricing an offer immediately before payment.
///
/// A drifted price is data, not an error: both totals travel together so the
/// caller can put the new number in front of the user instead of silently
/// charging the old one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedOffer {
    pub offer_id: String,
    pub original_total: Decimal,
    pub confirmed_total: Decimal,
    pub currency: String,
    pub price_changed: bool,
    /// Repriced provider payload, the one to carry into booking
    pub payload: Value,
}
