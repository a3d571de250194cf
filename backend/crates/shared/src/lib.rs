//! Shared Kernel - Domain-crossing minimal core
//!
//! Error vocabulary shared by every crate in the workspace:
//! - [`error::kind::ErrorKind`] - HTTP-mapped error classification
//! - [`error::app_error::AppError`] / [`error::app_error::AppResult`]
//! - `From` conversions for std / serde_json errors and the axum response
//!
//! **Design Principle**: Only include things that have the same meaning in
//! every crate. Card-specific rules live in the `card` crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
