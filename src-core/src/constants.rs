/// Currency all intake quotes are expressed in
pub const QUOTE_CURRENCY: &str = "GHS";

/// Smallest party an intake session may carry
pub const MIN_PARTY_SIZE: usize = 1;

/// Decimal precision for displayed amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
