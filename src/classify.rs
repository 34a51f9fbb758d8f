//! Network classification from BIN/IIN prefixes.
//!
//! Classification is an ordered rule table of `(prefix range, network)`
//! tuples, evaluated longest-prefix-match first; the first matching rule
//! wins. A rule only fires once at least `prefix_len` digits are present,
//! so an ambiguous short prefix (a lone "5") stays [`CardNetwork::Unknown`]
//! until enough digits arrive. The function is pure and idempotent: the
//! same prefix always yields the same network.
//!
//! All rules have at most 6-digit prefixes, so the classification of any
//! prefix of 6 or more digits is final.

use crate::network::CardNetwork;

/// One row of the classification table: inclusive numeric range over the
/// first `prefix_len` digits.
#[derive(Debug, Clone, Copy)]
struct PrefixRule {
    low: u32,
    high: u32,
    prefix_len: u8,
    network: CardNetwork,
}

const fn rule(low: u32, high: u32, prefix_len: u8, network: CardNetwork) -> PrefixRule {
    PrefixRule { low, high, prefix_len, network }
}

const fn bin(value: u32, network: CardNetwork) -> PrefixRule {
    rule(value, value, 6, network)
}

/// Ordered longest-prefix-first. Within a length, order is not significant
/// because the ranges are disjoint.
///
/// The 6-digit mada rows are the Saudi Payments published BIN list; they
/// sit inside the Visa/MasterCard numeric space and must be consulted
/// before the shorter generic rows.
const RULES: &[PrefixRule] = &[
    // mada (Saudi Payments BIN list)
    bin(400861, CardNetwork::Mada),
    bin(401757, CardNetwork::Mada),
    bin(406136, CardNetwork::Mada),
    bin(406996, CardNetwork::Mada),
    bin(407520, CardNetwork::Mada),
    bin(409201, CardNetwork::Mada),
    bin(410621, CardNetwork::Mada),
    bin(410685, CardNetwork::Mada),
    bin(417633, CardNetwork::Mada),
    bin(420132, CardNetwork::Mada),
    rule(428671, 428673, 6, CardNetwork::Mada),
    bin(431361, CardNetwork::Mada),
    bin(432328, CardNetwork::Mada),
    bin(434107, CardNetwork::Mada),
    bin(440533, CardNetwork::Mada),
    bin(440647, CardNetwork::Mada),
    bin(440795, CardNetwork::Mada),
    bin(445564, CardNetwork::Mada),
    bin(446393, CardNetwork::Mada),
    bin(446404, CardNetwork::Mada),
    bin(446672, CardNetwork::Mada),
    bin(455036, CardNetwork::Mada),
    bin(455708, CardNetwork::Mada),
    bin(457865, CardNetwork::Mada),
    bin(458456, CardNetwork::Mada),
    bin(462220, CardNetwork::Mada),
    rule(468540, 468543, 6, CardNetwork::Mada),
    bin(484783, CardNetwork::Mada),
    rule(486094, 486096, 6, CardNetwork::Mada),
    rule(489317, 489319, 6, CardNetwork::Mada),
    bin(493428, CardNetwork::Mada),
    bin(504300, CardNetwork::Mada),
    bin(515079, CardNetwork::Mada),
    bin(521076, CardNetwork::Mada),
    bin(524130, CardNetwork::Mada),
    bin(529415, CardNetwork::Mada),
    bin(530060, CardNetwork::Mada),
    bin(535825, CardNetwork::Mada),
    bin(539931, CardNetwork::Mada),
    bin(543085, CardNetwork::Mada),
    bin(543357, CardNetwork::Mada),
    bin(549760, CardNetwork::Mada),
    bin(554180, CardNetwork::Mada),
    bin(557606, CardNetwork::Mada),
    bin(558848, CardNetwork::Mada),
    rule(588845, 588850, 6, CardNetwork::Mada),
    bin(604906, CardNetwork::Mada),
    bin(636120, CardNetwork::Mada),
    rule(968201, 968211, 6, CardNetwork::Mada),
    // 4-digit prefixes
    rule(2221, 2720, 4, CardNetwork::MasterCard),
    rule(3528, 3589, 4, CardNetwork::Jcb),
    rule(6011, 6011, 4, CardNetwork::Discover),
    // 3-digit prefixes
    rule(644, 649, 3, CardNetwork::Discover),
    // 2-digit prefixes
    rule(34, 34, 2, CardNetwork::Amex),
    rule(37, 37, 2, CardNetwork::Amex),
    rule(51, 55, 2, CardNetwork::MasterCard),
    rule(62, 62, 2, CardNetwork::UnionPay),
    rule(65, 65, 2, CardNetwork::Discover),
    // 1-digit prefixes
    rule(4, 4, 1, CardNetwork::Visa),
];

/// Numeric value of the first `len` digits.
#[inline]
fn prefix_value(digits: &[u8], len: usize) -> u32 {
    digits[..len].iter().fold(0u32, |acc, &d| acc * 10 + d as u32)
}

/// Classifies a digit prefix into a card network.
///
/// Re-evaluate on every digit added or removed; the result for a given
/// prefix never depends on call history.
///
/// # Example
///
/// ```
/// use card_input_core::{classify, CardNetwork};
///
/// assert_eq!(classify::classify(&[4]), CardNetwork::Visa);
/// // A lone "5" is ambiguous until a second digit arrives
/// assert_eq!(classify::classify(&[5]), CardNetwork::Unknown);
/// assert_eq!(classify::classify(&[5, 3]), CardNetwork::MasterCard);
/// ```
#[inline]
pub fn classify(digits: &[u8]) -> CardNetwork {
    for r in RULES {
        let len = r.prefix_len as usize;
        if digits.len() < len {
            continue;
        }
        let value = prefix_value(digits, len);
        if value >= r.low && value <= r.high {
            return r.network;
        }
    }
    CardNetwork::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_visa() {
        assert_eq!(classify(&digits("4")), CardNetwork::Visa);
        assert_eq!(classify(&digits("4242424242424242")), CardNetwork::Visa);
        assert_eq!(classify(&digits("4222222222222")), CardNetwork::Visa);
    }

    #[test]
    fn test_mastercard() {
        assert_eq!(classify(&digits("51")), CardNetwork::MasterCard);
        assert_eq!(classify(&digits("5500000000000004")), CardNetwork::MasterCard);
        // 2-series
        assert_eq!(classify(&digits("2221")), CardNetwork::MasterCard);
        assert_eq!(classify(&digits("2720")), CardNetwork::MasterCard);
        assert_eq!(classify(&digits("2223000048400011")), CardNetwork::MasterCard);
    }

    #[test]
    fn test_amex() {
        assert_eq!(classify(&digits("34")), CardNetwork::Amex);
        assert_eq!(classify(&digits("37")), CardNetwork::Amex);
        assert_eq!(classify(&digits("378282246310005")), CardNetwork::Amex);
    }

    #[test]
    fn test_discover() {
        assert_eq!(classify(&digits("6011")), CardNetwork::Discover);
        assert_eq!(classify(&digits("65")), CardNetwork::Discover);
        assert_eq!(classify(&digits("644")), CardNetwork::Discover);
        assert_eq!(classify(&digits("6011111111111117")), CardNetwork::Discover);
    }

    #[test]
    fn test_jcb() {
        assert_eq!(classify(&digits("3528")), CardNetwork::Jcb);
        assert_eq!(classify(&digits("3589")), CardNetwork::Jcb);
        assert_eq!(classify(&digits("3530111333300000")), CardNetwork::Jcb);
    }

    #[test]
    fn test_unionpay() {
        assert_eq!(classify(&digits("62")), CardNetwork::UnionPay);
        assert_eq!(classify(&digits("6200000000000005")), CardNetwork::UnionPay);
    }

    #[test]
    fn test_mada_overrides_visa_and_mastercard() {
        // Inside the Visa space until the sixth digit decides
        assert_eq!(classify(&digits("44064")), CardNetwork::Visa);
        assert_eq!(classify(&digits("440647")), CardNetwork::Mada);
        assert_eq!(classify(&digits("4406470000000000")), CardNetwork::Mada);
        // Inside the MasterCard space
        assert_eq!(classify(&digits("53993")), CardNetwork::MasterCard);
        assert_eq!(classify(&digits("539931")), CardNetwork::Mada);
        // Range rows
        assert_eq!(classify(&digits("588845")), CardNetwork::Mada);
        assert_eq!(classify(&digits("588850")), CardNetwork::Mada);
        assert_eq!(classify(&digits("468542")), CardNetwork::Mada);
    }

    #[test]
    fn test_ambiguous_short_prefixes() {
        // "5" could become MasterCard or mada; "6" Discover, UnionPay or mada
        assert_eq!(classify(&digits("5")), CardNetwork::Unknown);
        assert_eq!(classify(&digits("6")), CardNetwork::Unknown);
        assert_eq!(classify(&digits("3")), CardNetwork::Unknown);
        assert_eq!(classify(&digits("2")), CardNetwork::Unknown);
        assert_eq!(classify(&digits("22")), CardNetwork::Unknown);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify(&[]), CardNetwork::Unknown);
        assert_eq!(classify(&digits("1")), CardNetwork::Unknown);
        assert_eq!(classify(&digits("9999999999999999")), CardNetwork::Unknown);
        // Schemes outside the closed enum (Diners 36, Maestro 50)
        assert_eq!(classify(&digits("36000000000000")), CardNetwork::Unknown);
        assert_eq!(classify(&digits("5000000000000000")), CardNetwork::Unknown);
    }

    #[test]
    fn test_idempotent() {
        let d = digits("440647");
        assert_eq!(classify(&d), classify(&d));
    }

    #[test]
    fn test_final_after_six_digits() {
        // No rule looks past six digits, so extending any 6-digit prefix
        // never changes the answer.
        for base in ["424242", "550000", "378282", "601111", "440647", "968205"] {
            let d = digits(base);
            let decided = classify(&d);
            let mut extended = d.clone();
            for extra in 0..10u8 {
                extended.push(extra);
                assert_eq!(classify(&extended), decided, "prefix {base} + {extra}");
                extended.pop();
            }
        }
    }

    #[test]
    fn test_rules_are_longest_prefix_first() {
        let mut last = u8::MAX;
        for r in RULES {
            assert!(r.prefix_len <= last, "rules must be ordered longest first");
            last = r.prefix_len;
        }
    }
}
