//! Input fields and the digit normalizer.
//!
//! Raw text from the host (keystrokes, pastes, scanner output) is reduced to
//! a bounded digit-only string before anything else looks at it. The
//! normalizer is pure and never rejects: malformed characters are silently
//! filtered because it feeds a live-typing UI.

use std::fmt;

/// Identifies which validator/formatter pipeline applies to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CardField {
    /// The primary account number.
    Number,
    /// The expiration date, entered as MMYY.
    Expiry,
    /// The security code (CVV/CVC/CID).
    Cvv,
}

impl CardField {
    /// Maximum number of digits the field may hold after normalization.
    #[inline]
    pub const fn max_digits(&self) -> usize {
        match self {
            Self::Number => crate::network::MAX_CARD_DIGITS,
            Self::Expiry => 4,
            Self::Cvv => 4,
        }
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Expiry => write!(f, "expiry"),
            Self::Cvv => write!(f, "cvv"),
        }
    }
}

/// Reduces raw text to a digit-only string bounded by the field's maximum.
///
/// Spaces, dashes, slashes from a pasted "12/30", and anything else that is
/// not an ASCII digit are dropped; excess digits beyond the field maximum
/// are truncated.
///
/// # Example
///
/// ```
/// use card_input_core::{normalize, CardField};
///
/// assert_eq!(normalize("4111 1111-1111.1111", CardField::Number), "4111111111111111");
/// assert_eq!(normalize("12/30", CardField::Expiry), "1230");
/// assert_eq!(normalize("12345", CardField::Cvv), "1234");
/// ```
pub fn normalize(text: &str, field: CardField) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit())
        .take(field.max_digits())
        .collect()
}

/// Converts a normalized digit string to digit values (0-9).
///
/// Callers pass normalizer output only; a non-digit here means a bug in the
/// normalizer, which is a programming error rather than a runtime one.
pub(crate) fn digit_values(digits: &str) -> Vec<u8> {
    debug_assert!(
        digits.bytes().all(|b| b.is_ascii_digit()),
        "raw input must be normalized"
    );
    digits.bytes().map(|b| b - b'0').collect()
}
