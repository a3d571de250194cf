//! Application Layer - Use Cases
//!
//! Wraps the pure domain functions with input limits, the injected clock
//! and the output shapes the presentation layer returns.

pub mod check_card;
pub mod check_expiry;
pub mod check_payment_form;
pub mod config;
pub mod format_card;
