//! Clock
//!
//! Source of "now" for expiry checks. Expiry is compared at month
//! granularity against the local calendar.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

/// Two-digit year and calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct YearMonth {
    /// Calendar year mod 100
    pub year: u32,
    /// 1-12
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: u32, month: u32) -> Self {
        Self { year, month }
    }

    /// Reduce a calendar date to its two-digit year and month
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year().rem_euclid(100) as u32,
            month: date.month(),
        }
    }
}

/// Supplies the current month
pub trait Clock: Send + Sync {
    fn current_year_month(&self) -> YearMonth;
}

/// Reads the host's local calendar
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year_month(&self) -> YearMonth {
        YearMonth::from_date(&Local::now())
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn current_year_month(&self) -> YearMonth {
        YearMonth::from_date(&self.0)
    }
}
