//! Format Card Use Case
//!
//! Display formatting for the card number and expiry fields as the
//! cardholder types.

use crate::application::config::CardConfig;
use crate::domain::services::{format_card_number, format_expiry};
use crate::error::CardResult;
use std::sync::Arc;

/// Format input; absent fields are passed through as absent
#[derive(Debug, Clone, Default)]
pub struct FormatCardInput {
    pub number: Option<String>,
    pub expiry: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCardOutput {
    pub number: Option<String>,
    pub expiry: Option<String>,
}

pub struct FormatCardUseCase {
    config: Arc<CardConfig>,
}

impl FormatCardUseCase {
    pub fn new(config: Arc<CardConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: FormatCardInput) -> CardResult<FormatCardOutput> {
        if let Some(number) = &input.number {
            self.config.ensure_within_limit("number", number)?;
        }
        if let Some(expiry) = &input.expiry {
            self.config.ensure_within_limit("expiry", expiry)?;
        }

        Ok(FormatCardOutput {
            number: input.number.as_deref().map(format_card_number),
            expiry: input.expiry.as_deref().map(format_expiry),
        })
    }
}
