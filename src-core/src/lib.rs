pub mod constants;
pub mod errors;

pub mod bookings;
pub mod fees;
pub mod intake;
pub mod locations;
pub mod pricing;
pub mod search;

pub use errors::{Error, Result};
pub use intake::*;
