//! Validation outcome taxonomy.
//!
//! Every failure the engine can report is a data value attached to a
//! [`ValidationResult`], never a propagated error: the host UI must stay
//! responsive while the user is mid-entry, so field mutations are
//! infallible by construction.

use std::fmt;

/// Why a field is not (yet) valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// The field does not hold enough digits to judge yet.
    ///
    /// Deliberately distinct from the invalid reasons so the UI never
    /// flashes an error while the user is still typing.
    Incomplete,

    /// The number reached a terminal length but the Luhn checksum failed.
    InvalidChecksum,

    /// The number is complete but no supported network matches its prefix.
    UnknownNetwork,

    /// The expiry digits do not form a real MM/YY date.
    InvalidExpiryFormat,

    /// The expiry date is strictly before the current month.
    ExpiredCard,

    /// The security code length does not match the detected network.
    InvalidCvvLength,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "entry is incomplete"),
            Self::InvalidChecksum => {
                write!(
                    f,
                    "invalid checksum (Luhn check failed) - please verify the card number"
                )
            }
            Self::UnknownNetwork => {
                write!(f, "unknown card network - check the card number prefix")
            }
            Self::InvalidExpiryFormat => {
                write!(f, "invalid expiry format (expected MM/YY)")
            }
            Self::ExpiredCard => write!(f, "card is expired"),
            Self::InvalidCvvLength => {
                write!(f, "security code length does not match the card network")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Immutable per-field validity snapshot.
///
/// `is_valid` is true only for a fully entered, passing field. Anything
/// else carries a `reason`; `Incomplete` is the neutral mid-entry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationResult {
    /// Whether the field passed all checks.
    pub is_valid: bool,
    /// Set whenever `is_valid` is false.
    pub reason: Option<ErrorKind>,
}

impl ValidationResult {
    /// A passing result.
    #[inline]
    pub const fn valid() -> Self {
        Self { is_valid: true, reason: None }
    }

    /// A failing result carrying `reason`.
    #[inline]
    pub const fn invalid(reason: ErrorKind) -> Self {
        Self { is_valid: false, reason: Some(reason) }
    }

    /// Shorthand for the mid-entry state.
    #[inline]
    pub const fn incomplete() -> Self {
        Self::invalid(ErrorKind::Incomplete)
    }

    /// True while the field is still being entered.
    #[inline]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self.reason, Some(ErrorKind::Incomplete))
    }
}
