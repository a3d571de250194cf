//! Card (Payment Card Validation) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Card number / expiry value objects, Luhn and issuer rules
//! - `application/` - Use cases and configuration
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Validation Model
//! - Every domain check is total: bad input is a negative verdict, not an error
//! - Issuer classification and checksum validity are independent
//! - Expiry compares month granularity against the local calendar
//! - Card numbers are never logged; only type, length and verdict

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CardConfig;
pub use domain::{
    CardCheck, CardNumber, CardType, Clock, ExpiryDate, FixedClock, SystemClock, YearMonth,
    classify_and_validate, format_card_number, format_expiry, validate_expiry, validate_expiry_at,
};
pub use error::{CardError, CardResult};
pub use presentation::router::card_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
