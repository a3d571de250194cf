//! Check Payment Form Use Case
//!
//! Validates the card section of the hosted checkout form in one pass and
//! produces the per-field messages the form shows next to each input.

use crate::application::config::CardConfig;
use crate::domain::clock::Clock;
use crate::domain::services::validate_expiry_at;
use crate::domain::value_object::card_number::CardNumber;
use crate::domain::value_object::card_type::CardType;
use crate::error::CardResult;
use serde::Serialize;
use std::sync::Arc;

pub const INVALID_CARD_NUMBER: &str = "Invalid card number";
pub const INVALID_EXPIRY: &str = "Invalid expiry date";
pub const CARDHOLDER_REQUIRED: &str = "Cardholder name is required";

/// Form inputs as typed by the cardholder
#[derive(Debug, Clone, Default)]
pub struct PaymentFormInput {
    pub card_number: String,
    pub expiry: String,
    pub cardholder_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    CardNumber,
    Expiry,
    CardholderName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentFormOutput {
    pub card_type: CardType,
    /// In form order: card number, expiry, cardholder name
    pub errors: Vec<FieldError>,
}

impl PaymentFormOutput {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct CheckPaymentFormUseCase<C>
where
    C: Clock,
{
    clock: Arc<C>,
    config: Arc<CardConfig>,
}

impl<C> CheckPaymentFormUseCase<C>
where
    C: Clock,
{
    pub fn new(clock: Arc<C>, config: Arc<CardConfig>) -> Self {
        Self { clock, config }
    }

    pub fn execute(&self, input: &PaymentFormInput) -> CardResult<PaymentFormOutput> {
        self.config
            .ensure_within_limit("cardNumber", &input.card_number)?;
        self.config.ensure_within_limit("expiry", &input.expiry)?;
        self.config
            .ensure_within_limit("cardholderName", &input.cardholder_name)?;

        let number = CardNumber::parse(&input.card_number);
        let now = self.clock.current_year_month();
        let mut errors = Vec::new();

        if !number.is_valid() {
            errors.push(FieldError {
                field: FormField::CardNumber,
                message: INVALID_CARD_NUMBER,
            });
        }

        if !validate_expiry_at(&input.expiry, now) {
            errors.push(FieldError {
                field: FormField::Expiry,
                message: INVALID_EXPIRY,
            });
        }

        if input.cardholder_name.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::CardholderName,
                message: CARDHOLDER_REQUIRED,
            });
        }

        let output = PaymentFormOutput {
            card_type: number.card_type(),
            errors,
        };

        tracing::debug!(
            card_type = %output.card_type,
            error_count = output.errors.len(),
            "Payment form checked"
        );

        Ok(output)
    }
}
