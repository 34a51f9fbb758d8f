//! Expiry date parsing and validation.
//!
//! Expiry input reaches this module as normalized MMYY digits. Validation
//! is against an explicit current month/year so hosts and tests can pin
//! the clock; [`current_year_month`] derives a default from the system
//! clock.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A parsed expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExpiryDate {
    /// Month (1-12)
    month: u8,
    /// Four-digit year (e.g., 2030)
    year: u16,
}

impl ExpiryDate {
    /// Creates a new expiry date; `None` if the month is not 1-12.
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { month, year })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if this date is strictly before the given month.
    ///
    /// A card expires at the end of its expiry month, so the current
    /// month itself is still valid.
    pub fn is_expired_at(&self, current_year: u16, current_month: u8) -> bool {
        if self.year != current_year {
            return self.year < current_year;
        }
        self.month < current_month
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year % 100)
    }
}

/// Parses normalized MMYY digits into an [`ExpiryDate`].
///
/// Returns `None` for anything other than exactly four digits with a
/// month in 1-12. Two-digit years are anchored in the 2000s.
///
/// # Example
///
/// ```
/// use card_input_core::expiry::parse_expiry;
///
/// let exp = parse_expiry("1230").unwrap();
/// assert_eq!(exp.month(), 12);
/// assert_eq!(exp.year(), 2030);
///
/// assert!(parse_expiry("1330").is_none());
/// assert!(parse_expiry("123").is_none());
/// ```
pub fn parse_expiry(digits: &str) -> Option<ExpiryDate> {
    let bytes = digits.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let year = 2000 + (bytes[2] - b'0') as u16 * 10 + (bytes[3] - b'0') as u16;

    ExpiryDate::new(month, year)
}

/// Gets the current year and month from the system clock.
///
/// The calculation from the Unix timestamp is approximate (leap years are
/// ignored), which is accurate enough for month-granularity expiry checks.
pub fn current_year_month() -> (u16, u8) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let days = secs / 86400;
    let years = days / 365;
    let year = 1970 + years as u16;

    let day_of_year = days % 365;
    let month = (day_of_year / 30).min(11) as u8 + 1;

    (year, month)
}
