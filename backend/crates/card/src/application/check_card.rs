//! Check Card Use Case

use crate::application::config::CardConfig;
use crate::domain::value_object::card_number::CardNumber;
use crate::domain::value_object::card_type::CardType;
use crate::error::CardResult;
use std::sync::Arc;

/// Check card output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCardOutput {
    pub is_valid: bool,
    pub card_type: CardType,
    pub formatted: String,
    pub masked: String,
    pub last_four: String,
}

/// Classify and validate a raw card number
pub struct CheckCardUseCase {
    config: Arc<CardConfig>,
}

impl CheckCardUseCase {
    pub fn new(config: Arc<CardConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, raw: &str) -> CardResult<CheckCardOutput> {
        self.config.ensure_within_limit("number", raw)?;

        let number = CardNumber::parse(raw);
        let check = number.check();

        tracing::debug!(
            card_type = %check.card_type,
            digits = number.len(),
            is_valid = check.is_valid,
            "Card number checked"
        );

        Ok(CheckCardOutput {
            is_valid: check.is_valid,
            card_type: check.card_type,
            formatted: number.formatted(),
            masked: number.masked(self.config.mask_char),
            last_four: number.last_four().to_string(),
        })
    }
}
