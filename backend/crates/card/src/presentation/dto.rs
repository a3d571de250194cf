//! API DTOs (Data Transfer Objects)

use crate::application::check_card::CheckCardOutput;
use crate::application::check_expiry::CheckExpiryOutput;
use crate::application::check_payment_form::{FieldError, PaymentFormOutput};
use crate::application::format_card::FormatCardOutput;
use crate::domain::value_object::card_type::CardType;
use serde::{Deserialize, Serialize};

// ============================================================================
// Check card number
// ============================================================================

/// Request for POST /api/card/check
#[derive(Debug, Clone, Deserialize)]
pub struct CheckCardRequest {
    pub number: String,
}

/// Response for POST /api/card/check
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckCardResponse {
    pub is_valid: bool,
    pub card_type: CardType,
    pub formatted: String,
    pub masked: String,
    pub last_four: String,
}

impl From<CheckCardOutput> for CheckCardResponse {
    fn from(output: CheckCardOutput) -> Self {
        Self {
            is_valid: output.is_valid,
            card_type: output.card_type,
            formatted: output.formatted,
            masked: output.masked,
            last_four: output.last_four,
        }
    }
}

// ============================================================================
// Format
// ============================================================================

/// Request for POST /api/card/format
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatRequest {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub expiry: Option<String>,
}

/// Response for POST /api/card/format
#[derive(Debug, Clone, Serialize)]
pub struct FormatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

impl From<FormatCardOutput> for FormatResponse {
    fn from(output: FormatCardOutput) -> Self {
        Self {
            number: output.number,
            expiry: output.expiry,
        }
    }
}

// ============================================================================
// Expiry
// ============================================================================

/// Request for POST /api/card/expiry
#[derive(Debug, Clone, Deserialize)]
pub struct CheckExpiryRequest {
    pub expiry: String,
}

/// Response for POST /api/card/expiry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckExpiryResponse {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

impl From<CheckExpiryOutput> for CheckExpiryResponse {
    fn from(output: CheckExpiryOutput) -> Self {
        Self {
            is_valid: output.is_valid,
            month: output.month,
            year: output.year,
        }
    }
}

// ============================================================================
// Payment form
// ============================================================================

/// Request for POST /api/card/form
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFormRequest {
    pub card_number: String,
    pub expiry: String,
    #[serde(default)]
    pub cardholder_name: String,
}

/// Response for POST /api/card/form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFormResponse {
    pub is_valid: bool,
    pub card_type: CardType,
    pub errors: Vec<FieldError>,
}

impl From<PaymentFormOutput> for PaymentFormResponse {
    fn from(output: PaymentFormOutput) -> Self {
        Self {
            is_valid: output.is_valid(),
            card_type: output.card_type,
            errors: output.errors,
        }
    }
}
