//! Luhn (mod-10) checksum.
//!
//! The Luhn algorithm catches accidental transcription errors in card
//! numbers. The implementation is table-driven: doubling plus the
//! subtract-9 correction is folded into a single lookup so the inner loop
//! has no branch.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a digit sequence against the Luhn checksum.
///
/// # Example
///
/// ```
/// use card_input_core::luhn;
///
/// assert!(luhn::validate(&[4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2]));
/// assert!(!luhn::validate(&[4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 3]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }
    compute_checksum(digits) % 10 == 0
}

/// Computes the raw Luhn sum (not reduced modulo 10).
///
/// Starting from the rightmost digit, every second digit is doubled with
/// the subtract-9 correction, and everything is summed.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    let len = digits.len();
    let mut sum: u32 = 0;

    let mut i = 0;
    while i < len {
        let digit = digits[len - 1 - i];
        if i % 2 == 1 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
        i += 1;
    }

    sum
}

/// Computes the check digit that makes `digits` pass Luhn when appended.
///
/// Used by the test suite and benches to synthesize valid numbers for any
/// prefix without a card corpus.
///
/// # Example
///
/// ```
/// use card_input_core::luhn;
///
/// let partial = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4];
/// let check = luhn::generate_check_digit(&partial);
/// let mut full = partial.to_vec();
/// full.push(check);
/// assert!(luhn::validate(&full));
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Every position shifts left by one once the check digit is appended,
    // so the doubling parity is inverted relative to compute_checksum.
    let len = digits.len();
    let mut sum: u32 = 0;

    let mut i = 0;
    while i < len {
        let digit = digits[len - 1 - i];
        if i % 2 == 0 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
        i += 1;
    }

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cards() {
        // Standard processor test numbers
        assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        assert!(validate(&[4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2]));
        assert!(validate(&[5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4]));
        assert!(validate(&[3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5]));
        assert!(validate(&[6, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 7]));
    }

    #[test]
    fn test_invalid_cards() {
        assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
        assert!(!validate(&[5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        assert!(!validate(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_empty_input() {
        assert!(!validate(&[]));
    }

    #[test]
    fn test_single_digit() {
        assert!(validate(&[0]));
        assert!(!validate(&[1]));
        assert!(!validate(&[5]));
    }

    #[test]
    fn test_generate_check_digit() {
        let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert_eq!(generate_check_digit(&partial), 1);

        let partial = [5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 4);

        let partial = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 5);
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }
}
