//! Card network identification.
//!
//! A `CardNetwork` is always derived from the number prefix by the
//! classifier; it is never set by the host directly. The enum is closed:
//! schemes the engine does not support classify as `Unknown`.

use std::fmt;

/// Supported card networks.
///
/// `Unknown` is an explicit variant rather than an `Option` so that snapshots
/// and theming collaborators always have a tag to switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CardNetwork {
    /// Visa - prefix 4, lengths 13, 16, 19
    Visa,
    /// MasterCard - prefix 51-55 and 2221-2720, length 16
    MasterCard,
    /// American Express - prefix 34, 37, length 15
    Amex,
    /// Discover - prefix 6011, 644-649, 65, lengths 16-19
    Discover,
    /// JCB - prefix 3528-3589, lengths 16-19
    Jcb,
    /// UnionPay - prefix 62, lengths 16-19
    UnionPay,
    /// mada - Saudi scheme, specific 6-digit BINs in the 4/5/6 ranges, length 16
    Mada,
    /// No known network matches the prefix entered so far.
    Unknown,
}

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a complete card number.
pub const MIN_CARD_DIGITS: usize = 12;

impl CardNetwork {
    /// Returns the valid total lengths for this network.
    ///
    /// `Unknown` accepts the full 12-19 span so an unrecognized but
    /// checksum-valid number can still be reported as such.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16, 19],
            Self::MasterCard => &[16],
            Self::Amex => &[15],
            Self::Discover => &[16, 17, 18, 19],
            Self::Jcb => &[16, 17, 18, 19],
            Self::UnionPay => &[16, 17, 18, 19],
            Self::Mada => &[16],
            Self::Unknown => &[12, 13, 14, 15, 16, 17, 18, 19],
        }
    }

    /// Returns true if `length` is a valid total length for this network.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Shortest valid total length for this network.
    #[inline]
    pub const fn min_length(&self) -> usize {
        self.valid_lengths()[0] as usize
    }

    /// Longest valid total length for this network.
    #[inline]
    pub const fn max_length(&self) -> usize {
        let valid = self.valid_lengths();
        valid[valid.len() - 1] as usize
    }

    /// Required security-code length for this network.
    ///
    /// Amex prints a 4-digit CID; everything else uses 3 digits. `Unknown`
    /// has no single answer and is handled provisionally by the CVV
    /// validator.
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// Returns a human-readable name for the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::UnionPay => "UnionPay",
            Self::Mada => "mada",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
