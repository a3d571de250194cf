//! Domain Layer - Card validation logic
//!
//! This layer contains:
//! - Value objects (CardNumber, CardType, ExpiryDate)
//! - Domain services (normalization, Luhn, grouping, expiry checks)
//! - The clock abstraction used for "now"

pub mod clock;
pub mod services;
pub mod value_object;

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock, YearMonth};
pub use services::{
    CardCheck, classify_and_validate, format_card_number, format_expiry, validate_expiry,
    validate_expiry_at,
};
pub use value_object::{card_number::CardNumber, card_type::CardType, expiry_date::ExpiryDate};
