//! Card Type Value Object
//!
//! Issuer classification derived from the leading digits and the length of
//! a normalized card number.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Card network that issued a card number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    #[display("visa")]
    Visa,
    #[display("mastercard")]
    Mastercard,
    #[display("amex")]
    Amex,
    #[display("discover")]
    Discover,
    #[default]
    #[display("unknown")]
    Unknown,
}

/// Prefix + length rule identifying one issuer
struct IssuerPattern {
    card_type: CardType,
    prefixes: &'static [&'static str],
    lengths: &'static [usize],
}

/// Checked in order; the first match wins.
///
/// Mastercard only covers the 51-55 range. The 2221-2720 range is not
/// recognised.
const ISSUER_PATTERNS: &[IssuerPattern] = &[
    IssuerPattern {
        card_type: CardType::Visa,
        prefixes: &["4"],
        lengths: &[13, 16, 19],
    },
    IssuerPattern {
        card_type: CardType::Mastercard,
        prefixes: &["51", "52", "53", "54", "55"],
        lengths: &[16],
    },
    IssuerPattern {
        card_type: CardType::Amex,
        prefixes: &["34", "37"],
        lengths: &[15],
    },
    IssuerPattern {
        card_type: CardType::Discover,
        prefixes: &["6011", "65"],
        lengths: &[16],
    },
];

impl IssuerPattern {
    fn matches(&self, digits: &str) -> bool {
        self.lengths.contains(&digits.len()) && self.prefixes.iter().any(|p| digits.starts_with(p))
    }
}

impl CardType {
    /// Classify a digit string.
    ///
    /// Anything containing a non-digit is `Unknown`; callers normalize first.
    pub fn classify(digits: &str) -> Self {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return CardType::Unknown;
        }

        ISSUER_PATTERNS
            .iter()
            .find(|pattern| pattern.matches(digits))
            .map(|pattern| pattern.card_type)
            .unwrap_or(CardType::Unknown)
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use CardType::*;
        match self {
            Visa => "visa",
            Mastercard => "mastercard",
            Amex => "amex",
            Discover => "discover",
            Unknown => "unknown",
        }
    }

    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, CardType::Unknown)
    }
}
