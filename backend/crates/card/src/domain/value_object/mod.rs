//! Value Object Module

pub mod card_number;
pub mod card_type;
pub mod expiry_date;
