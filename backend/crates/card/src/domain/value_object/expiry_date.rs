//! Expiry Date Value Object
//!
//! Month and year parsed from the "MM/YY" text a cardholder types.
//! Parsing never fails loudly: anything that is not two integer segments
//! with a month in 1..=12 simply has no `ExpiryDate`.

use crate::domain::clock::YearMonth;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpiryDate {
    month: u32,
    year: u32,
}

impl ExpiryDate {
    /// Parse "MM/YY"
    ///
    /// The year is taken as written; "12/2030" has year 2030, which compares
    /// greater than any two-digit current year. Years too large for `u32`
    /// saturate to `u32::MAX`.
    pub fn parse(input: &str) -> Option<Self> {
        // Only the first "/" splits; "12/30/1" leaves "30/1" as the year,
        // which is not a number.
        let (month, year) = input.split_once('/')?;
        let month: u32 = month.trim().parse().ok()?;
        let year = parse_year(year.trim())?;

        if !(1..=12).contains(&month) {
            return None;
        }

        Some(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Still usable during `now`'s month
    pub fn is_valid_at(&self, now: YearMonth) -> bool {
        self.year > now.year || (self.year == now.year && self.month >= now.month)
    }
}

/// All-digit year, saturating instead of overflowing
fn parse_year(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(segment.parse().unwrap_or(u32::MAX))
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let exp = ExpiryDate::parse("09/27").unwrap();
        assert_eq!(exp.month(), 9);
        assert_eq!(exp.year(), 27);

        let exp = ExpiryDate::parse(" 1 / 30 ").unwrap();
        assert_eq!((exp.month(), exp.year()), (1, 30));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(ExpiryDate::parse("").is_none());
        assert!(ExpiryDate::parse("1230").is_none());
        assert!(ExpiryDate::parse("12/").is_none());
        assert!(ExpiryDate::parse("/30").is_none());
        assert!(ExpiryDate::parse("notanumber/xx").is_none());
        assert!(ExpiryDate::parse("13/25").is_none());
        assert!(ExpiryDate::parse("00/25").is_none());
        assert!(ExpiryDate::parse("-1/25").is_none());
        assert!(ExpiryDate::parse("12/30/1").is_none());
    }

    #[test]
    fn test_is_valid_at() {
        let now = YearMonth::new(26, 10);
        assert!(ExpiryDate::parse("10/26").unwrap().is_valid_at(now));
        assert!(ExpiryDate::parse("11/26").unwrap().is_valid_at(now));
        assert!(ExpiryDate::parse("01/27").unwrap().is_valid_at(now));
        assert!(!ExpiryDate::parse("09/26").unwrap().is_valid_at(now));
        assert!(!ExpiryDate::parse("12/25").unwrap().is_valid_at(now));
    }

    #[test]
    fn test_four_digit_year_compares_as_written() {
        let now = YearMonth::new(26, 10);
        assert!(ExpiryDate::parse("01/2020").unwrap().is_valid_at(now));
    }

    #[test]
    fn test_oversized_year_saturates() {
        let now = YearMonth::new(26, 10);
        let exp = ExpiryDate::parse("12/99999999999").unwrap();
        assert_eq!(exp.year(), u32::MAX);
        assert!(exp.is_valid_at(now));

        assert!(ExpiryDate::parse("12/+30").is_none());
        assert!(ExpiryDate::parse("12/3 0").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(ExpiryDate::parse("3/7").unwrap().to_string(), "03/07");
    }
}
