//! Domain Services
//!
//! Pure card validation and formatting logic. Every function here is total:
//! malformed input gives a negative result, never an error.

use crate::domain::clock::{Clock, SystemClock, YearMonth};
use crate::domain::value_object::card_type::CardType;
use crate::domain::value_object::expiry_date::ExpiryDate;
use serde::Serialize;

/// Shortest digit string accepted as a card number
pub const MIN_CARD_LENGTH: usize = 13;

/// Digits per display group
pub const GROUP_SIZE: usize = 4;

/// Digits kept by the expiry input mask ("MMYY")
const EXPIRY_DIGITS: usize = 4;

/// Verdict for one card number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCheck {
    pub is_valid: bool,
    pub card_type: CardType,
}

/// Keep only ASCII digits
pub fn normalize_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Luhn mod-10 check over a normalized digit string
pub fn luhn_checksum_valid(digits: &str) -> bool {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Join digits into groups of `GROUP_SIZE` separated by `separator`
pub fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / GROUP_SIZE);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Classify the issuer and run the checksum + length floor
///
/// `is_valid` is independent of the classification: a checksum-valid number
/// of an unrecognised issuer is still valid.
pub fn classify_and_validate(input: &str) -> CardCheck {
    let digits = normalize_digits(input);

    CardCheck {
        is_valid: digits.len() >= MIN_CARD_LENGTH && luhn_checksum_valid(&digits),
        card_type: CardType::classify(&digits),
    }
}

/// "4242424242424242" -> "4242 4242 4242 4242"
pub fn format_card_number(input: &str) -> String {
    group_digits(&normalize_digits(input), ' ')
}

/// Expiry check against the host's local calendar
pub fn validate_expiry(input: &str) -> bool {
    validate_expiry_at(input, SystemClock.current_year_month())
}

pub fn validate_expiry_at(input: &str, now: YearMonth) -> bool {
    ExpiryDate::parse(input).is_some_and(|exp| exp.is_valid_at(now))
}

/// Input mask for the expiry field: "1225" -> "12/25", "123" -> "12/3"
pub fn format_expiry(input: &str) -> String {
    let digits: String = normalize_digits(input).chars().take(EXPIRY_DIGITS).collect();

    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}
