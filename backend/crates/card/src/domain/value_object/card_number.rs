//! Card Number Value Object
//!
//! Holds the normalized digits of a user-entered card number. Construction
//! never fails; separators and any other non-digit characters are dropped.

use crate::domain::services::{
    CardCheck, GROUP_SIZE, MIN_CARD_LENGTH, group_digits, luhn_checksum_valid, normalize_digits,
};
use crate::domain::value_object::card_type::CardType;
use std::fmt;

/// Digits left visible by [`CardNumber::masked`]
const VISIBLE_TAIL: usize = 4;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn parse(input: &str) -> Self {
        Self(normalize_digits(input))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn card_type(&self) -> CardType {
        CardType::classify(&self.0)
    }

    /// Checksum passes and the length floor is met
    pub fn is_valid(&self) -> bool {
        self.len() >= MIN_CARD_LENGTH && luhn_checksum_valid(&self.0)
    }

    pub fn check(&self) -> CardCheck {
        CardCheck {
            is_valid: self.is_valid(),
            card_type: self.card_type(),
        }
    }

    /// Space-separated groups of four
    pub fn formatted(&self) -> String {
        group_digits(&self.0, ' ')
    }

    pub fn last_four(&self) -> &str {
        &self.0[self.len().saturating_sub(VISIBLE_TAIL)..]
    }

    /// Display form with all but the last four digits replaced by `mask`
    pub fn masked(&self, mask: char) -> String {
        let hidden = self.len().saturating_sub(VISIBLE_TAIL);
        let mut out = String::with_capacity(self.len() * mask.len_utf8() + self.len() / GROUP_SIZE);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 && i % GROUP_SIZE == 0 {
                out.push(' ');
            }
            out.push(if i < hidden { mask } else { c });
        }
        out
    }
}

// Debug prints only the last four digits.
impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardNumber(..{})", self.last_four())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_separators() {
        let number = CardNumber::parse("4242 4242-4242 4242");
        assert_eq!(number.digits(), "4242424242424242");
        assert_eq!(number.len(), 16);
        assert!(!number.is_empty());
        assert!(CardNumber::parse("--").is_empty());
    }

    #[test]
    fn test_check() {
        let number = CardNumber::parse("5555 5555 5555 4444");
        assert!(number.is_valid());
        assert_eq!(number.card_type(), CardType::Mastercard);
        assert_eq!(
            number.check(),
            CardCheck {
                is_valid: true,
                card_type: CardType::Mastercard
            }
        );
    }

    #[test]
    fn test_formatted() {
        assert_eq!(
            CardNumber::parse("378282246310005").formatted(),
            "3782 8224 6310 005"
        );
    }

    #[test]
    fn test_last_four() {
        assert_eq!(CardNumber::parse("4242424242424242").last_four(), "4242");
        assert_eq!(CardNumber::parse("12").last_four(), "12");
        assert_eq!(CardNumber::parse("").last_four(), "");
    }

    #[test]
    fn test_masked() {
        assert_eq!(
            CardNumber::parse("4242424242421234").masked('•'),
            "•••• •••• •••• 1234"
        );
        assert_eq!(CardNumber::parse("378282246310005").masked('*'), "**** **** ***0 005");
        assert_eq!(CardNumber::parse("123").masked('*'), "123");
    }

    #[test]
    fn test_debug_hides_digits() {
        let number = CardNumber::parse("4242424242421234");
        assert_eq!(format!("{:?}", number), "CardNumber(..1234)");
    }
}
