use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Flat per-head rate shared by every non-infant tier
pub const STANDARD_RATE: Decimal = dec!(500);

/// Reduced rate for infants
pub const INFANT_RATE: Decimal = dec!(250);
