//! Presentation Layer
//!
//! HTTP handlers and DTOs for the card API.

pub mod dto;
pub mod handlers;
pub mod router;
