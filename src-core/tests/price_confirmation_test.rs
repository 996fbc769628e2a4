use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;

use tripdesk_core::pricing::PriceConfirmationService;
use tripdesk_core::search::SearchErrorKind;

mod common;
use common::{sample_flight_offer, StubProvider};

#[tokio::test]
async fn test_stable_price_reconfirms_without_drift() {
    let provider = Arc::new(StubProvider::default());
    let pricing = PriceConfirmationService::new(provider.clone());

    let offer = sample_flight_offer(dec!(990.00));
    let confirmed = pricing.reconfirm(&offer).await.unwrap();

    assert!(!confirmed.price_changed);
    assert_eq!(confirmed.original_total, dec!(990.00));
    assert_eq!(confirmed.confirmed_total, dec!(990.00));
    assert_eq!(provider.pricing_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_higher_reprice_surfaces_drift_with_both_totals() {
    let provider = Arc::new(StubProvider {
        repriced_total: Some(dec!(1100.00)),
        ..Default::default()
    });
    let pricing = PriceConfirmationService::new(provider);

    let offer = sample_flight_offer(dec!(990.00));
    let confirmed = pricing.reconfirm(&offer).await.unwrap();

    assert!(confirmed.price_changed);
    assert_eq!(confirmed.original_total, dec!(990.00));
    assert_eq!(confirmed.confirmed_total, dec!(1100.00));
    assert!(confirmed.confirmed_total > confirmed.original_total);
}

#[tokio::test]
async fn test_hung_reprice_times_out() {
    let provider = Arc::new(StubProvider {
        delay: Some(Duration::from_millis(100)),
        ..Default::default()
    });
    let pricing =
        PriceConfirmationService::new(provider).with_timeout(Duration::from_millis(10));

    let offer = sample_flight_offer(dec!(990.00));
    let error = pricing.reconfirm(&offer).await.unwrap_err();

    assert_eq!(error.kind, SearchErrorKind::ProviderTimeout);
}
