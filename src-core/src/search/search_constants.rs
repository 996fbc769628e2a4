use std::time::Duration;

/// Hard ceiling on one provider round trip; the provider can hang
pub const PROVIDER_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on offers returned to the caller
pub const DEFAULT_RESULT_CAP: u32 = 20;

/// Most hotel candidates carried from the listing phase into the offer phase
pub const MAX_HOTEL_CANDIDATES: usize = 20;
