//! Display formatting for card numbers.
//!
//! Formatting is pure and total: any prefix length produces a valid
//! (possibly partial) grouped string, so the host can rewrite its text
//! field on every keystroke. Grouping follows the detected network -
//! Amex-class numbers use 4-6-5, everything else groups by four.

use crate::network::CardNetwork;

/// Character used in place of hidden digits in masked output.
pub const MASK_CHAR: char = '\u{2022}'; // '•'

/// Returns the digit grouping for a network at a given digit count.
fn group_sizes(network: CardNetwork, len: usize) -> Vec<usize> {
    match network {
        CardNetwork::Amex => vec![4, 6, 5],
        _ => {
            let full_groups = len / 4;
            let remainder = len % 4;
            let mut groups = vec![4; full_groups];
            if remainder > 0 {
                groups.push(remainder);
            }
            groups
        }
    }
}

/// Applies `network` grouping to an arbitrary character sequence.
fn group_chars(chars: &[char], network: CardNetwork) -> String {
    if chars.is_empty() {
        return String::new();
    }

    let groups = group_sizes(network, chars.len());
    let mut result = String::with_capacity(chars.len() + groups.len());
    let mut pos = 0;

    for (i, &size) in groups.iter().enumerate() {
        if pos >= chars.len() {
            break;
        }
        if i > 0 {
            result.push(' ');
        }
        let end = (pos + size).min(chars.len());
        result.extend(&chars[pos..end]);
        pos = end;
    }

    // Digits past the last defined group (over-long input) land in one
    // trailing group rather than being dropped.
    if pos < chars.len() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.extend(&chars[pos..]);
    }

    result
}

/// Formats a (possibly partial) digit string with network grouping.
///
/// # Example
///
/// ```
/// use card_input_core::{format, CardNetwork};
///
/// assert_eq!(format::format_partial("42424", CardNetwork::Visa), "4242 4");
/// assert_eq!(
///     format::format_partial("4242424242424242", CardNetwork::Visa),
///     "4242 4242 4242 4242"
/// );
/// assert_eq!(
///     format::format_partial("378282246310005", CardNetwork::Amex),
///     "3782 822463 10005"
/// );
/// ```
pub fn format_partial(digits: &str, network: CardNetwork) -> String {
    let chars: Vec<char> = digits.chars().filter(|c| c.is_ascii_digit()).collect();
    group_chars(&chars, network)
}

/// Formats a digit string with all but the last four digits masked,
/// preserving network grouping.
///
/// Four or fewer digits are shown as-is: everything present is already
/// part of the visible suffix.
///
/// # Example
///
/// ```
/// use card_input_core::{format, CardNetwork};
///
/// assert_eq!(
///     format::format_masked("4242424242424242", CardNetwork::Visa),
///     "\u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} 4242"
/// );
/// ```
pub fn format_masked(digits: &str, network: CardNetwork) -> String {
    let chars: Vec<char> = digits
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    let visible = chars.len().min(4);
    let masked: Vec<char> = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| if i < chars.len() - visible { MASK_CHAR } else { c })
        .collect();

    group_chars(&masked, network)
}

/// Strips all non-digit characters from a formatted string.
///
/// Inverse of [`format_partial`]: stripping a formatted string reproduces
/// the original digit sequence.
///
/// # Example
///
/// ```
/// use card_input_core::format;
///
/// assert_eq!(format::strip_formatting("4242 4242 4242 4242"), "4242424242424242");
/// assert_eq!(format::strip_formatting("4242-4242"), "42424242");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
