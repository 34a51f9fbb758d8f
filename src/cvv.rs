//! Security code (CVV/CVC/CID) validation.
//!
//! The required length depends on the detected network: Amex prints a
//! 4-digit code, everything else uses 3. While the network is still
//! `Unknown`, 3 or 4 digits are provisionally accepted so the user is not
//! penalized for filling fields out of order.

use crate::error::{ErrorKind, ValidationResult};
use crate::network::CardNetwork;

/// Validates normalized CVV digits against the detected network.
///
/// Too few digits are `Incomplete`, never an error; too many digits for
/// the network are `InvalidCvvLength`.
///
/// # Example
///
/// ```
/// use card_input_core::{cvv, CardNetwork, ErrorKind};
///
/// assert!(cvv::validate("123", CardNetwork::Visa).is_valid);
/// assert!(cvv::validate("1234", CardNetwork::Amex).is_valid);
///
/// // Three digits under Amex means the user is still typing
/// let r = cvv::validate("123", CardNetwork::Amex);
/// assert_eq!(r.reason, Some(ErrorKind::Incomplete));
///
/// // Four digits under Visa can never become valid
/// let r = cvv::validate("1234", CardNetwork::Visa);
/// assert_eq!(r.reason, Some(ErrorKind::InvalidCvvLength));
/// ```
pub fn validate(digits: &str, network: CardNetwork) -> ValidationResult {
    let len = digits.len();

    if network == CardNetwork::Unknown {
        // Provisional: accept either common length until the network is known
        return match len {
            0..=2 => ValidationResult::incomplete(),
            3 | 4 => ValidationResult::valid(),
            _ => ValidationResult::invalid(ErrorKind::InvalidCvvLength),
        };
    }

    let expected = network.cvv_length();
    if len < expected {
        ValidationResult::incomplete()
    } else if len == expected {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(ErrorKind::InvalidCvvLength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_digit_networks() {
        for network in [
            CardNetwork::Visa,
            CardNetwork::MasterCard,
            CardNetwork::Discover,
            CardNetwork::Jcb,
            CardNetwork::UnionPay,
            CardNetwork::Mada,
        ] {
            assert!(validate("123", network).is_valid, "{network}");
            assert!(validate("12", network).is_incomplete(), "{network}");
            assert_eq!(
                validate("1234", network).reason,
                Some(ErrorKind::InvalidCvvLength),
                "{network}"
            );
        }
    }

    #[test]
    fn test_amex_requires_four() {
        assert!(validate("1234", CardNetwork::Amex).is_valid);
        assert!(validate("123", CardNetwork::Amex).is_incomplete());
        assert!(validate("", CardNetwork::Amex).is_incomplete());
    }

    #[test]
    fn test_unknown_network_provisional() {
        assert!(validate("123", CardNetwork::Unknown).is_valid);
        assert!(validate("1234", CardNetwork::Unknown).is_valid);
        assert!(validate("12", CardNetwork::Unknown).is_incomplete());
        assert_eq!(
            validate("12345", CardNetwork::Unknown).reason,
            Some(ErrorKind::InvalidCvvLength)
        );
    }

    #[test]
    fn test_empty_is_incomplete() {
        assert!(validate("", CardNetwork::Visa).is_incomplete());
    }
}
