//! Application Configuration
//!
//! Configuration for the card application layer.

use crate::error::{CardError, CardResult};

/// Card application configuration
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Longest raw field accepted, in characters
    pub max_input_length: usize,
    /// Character used for hidden digits in masked numbers
    pub mask_char: char,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            max_input_length: 64,
            mask_char: '•',
        }
    }
}

impl CardConfig {
    /// Looser limits for local development
    pub fn development() -> Self {
        Self {
            max_input_length: 256,
            ..Self::default()
        }
    }

    /// Reject a field longer than `max_input_length`
    pub fn ensure_within_limit(&self, field: &'static str, value: &str) -> CardResult<()> {
        if value.chars().count() > self.max_input_length {
            return Err(CardError::InputTooLong {
                field,
                max: self.max_input_length,
            });
        }
        Ok(())
    }
}
