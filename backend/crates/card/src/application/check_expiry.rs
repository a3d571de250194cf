//! Check Expiry Use Case

use crate::application::config::CardConfig;
use crate::domain::clock::Clock;
use crate::domain::value_object::expiry_date::ExpiryDate;
use crate::error::CardResult;
use std::sync::Arc;

/// Check expiry output
///
/// `month` / `year` are present whenever the text parsed, even if the date
/// has already passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckExpiryOutput {
    pub is_valid: bool,
    pub month: Option<u32>,
    pub year: Option<u32>,
}

pub struct CheckExpiryUseCase<C>
where
    C: Clock,
{
    clock: Arc<C>,
    config: Arc<CardConfig>,
}

impl<C> CheckExpiryUseCase<C>
where
    C: Clock,
{
    pub fn new(clock: Arc<C>, config: Arc<CardConfig>) -> Self {
        Self { clock, config }
    }

    pub fn execute(&self, raw: &str) -> CardResult<CheckExpiryOutput> {
        self.config.ensure_within_limit("expiry", raw)?;

        let now = self.clock.current_year_month();
        let parsed = ExpiryDate::parse(raw);
        let is_valid = parsed.is_some_and(|exp| exp.is_valid_at(now));

        tracing::debug!(parsed = parsed.is_some(), is_valid, "Expiry checked");

        Ok(CheckExpiryOutput {
            is_valid,
            month: parsed.map(|exp| exp.month()),
            year: parsed.map(|exp| exp.year()),
        })
    }
}
