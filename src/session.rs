//! The card input state machine.
//!
//! A [`CardSession`] owns the raw digit strings for one payment form and is
//! their sole mutator. Every mutation - keystroke, delete, paste, or scan -
//! runs the full pipeline inline (normalize, classify, format, validate all
//! three fields) and publishes a fresh [`CardSnapshot`]. Observers never see
//! a partially updated snapshot, mutations never fail, and two sessions fed
//! the same mutation sequence reach identical snapshots.
//!
//! The session assumes one mutation in flight at a time; concurrent input
//! events must be serialized by the host.

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use crate::classify;
use crate::cvv;
use crate::error::{ErrorKind, ValidationResult};
use crate::expiry;
use crate::field::{self, CardField};
use crate::format;
use crate::luhn;
use crate::network::{CardNetwork, MAX_CARD_DIGITS, MIN_CARD_DIGITS};

/// Coarse progress of the whole form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EntryState {
    /// No field holds any digits.
    Empty,
    /// At least one field is still being entered.
    PartiallyEntered,
    /// Every field is fully entered but at least one check fails.
    CompleteInvalid,
    /// Every field is valid; the form is submittable.
    CompleteValid,
}

/// Aggregate view of the session after a mutation.
///
/// Purely derived data: rebuilt from scratch on every mutation and never
/// mutated externally. Masking and grouping are re-derived from the
/// currently detected network each time, even mid-typing.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardSnapshot {
    /// Network detected from the number prefix.
    pub network: CardNetwork,
    /// The number with network grouping applied, all digits visible.
    pub formatted_number: String,
    /// The number with all but the last four digits masked.
    pub masked_number: String,
    /// Last four digits of the number; empty until four digits exist.
    pub last_four: String,
    /// Validity of the number field.
    pub number: ValidationResult,
    /// Validity of the expiry field.
    pub expiry: ValidationResult,
    /// Validity of the security-code field.
    pub cvv: ValidationResult,
    /// True iff all three fields are valid and the network is known.
    pub is_submittable: bool,
    /// Coarse progress of the whole form.
    pub state: EntryState,
}

impl CardSnapshot {
    fn empty() -> Self {
        Self {
            network: CardNetwork::Unknown,
            formatted_number: String::new(),
            masked_number: String::new(),
            last_four: String::new(),
            number: ValidationResult::incomplete(),
            expiry: ValidationResult::incomplete(),
            cvv: ValidationResult::incomplete(),
            is_submittable: false,
            state: EntryState::Empty,
        }
    }

    /// Result for a single field.
    #[inline]
    pub fn field_result(&self, field: CardField) -> ValidationResult {
        match field {
            CardField::Number => self.number,
            CardField::Expiry => self.expiry,
            CardField::Cvv => self.cvv,
        }
    }

    /// The first failing field's reason, in form order, if any.
    ///
    /// This is what a host surfaces next to a disabled submit action.
    pub fn first_error(&self) -> Option<(CardField, ErrorKind)> {
        [CardField::Number, CardField::Expiry, CardField::Cvv]
            .into_iter()
            .find_map(|f| self.field_result(f).reason.map(|r| (f, r)))
    }
}

impl fmt::Debug for CardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The formatted number would leak full digits into logs
        f.debug_struct("CardSnapshot")
            .field("network", &self.network)
            .field("number", &self.masked_number)
            .field("number_result", &self.number)
            .field("expiry_result", &self.expiry)
            .field("cvv_result", &self.cvv)
            .field("is_submittable", &self.is_submittable)
            .field("state", &self.state)
            .finish()
    }
}

/// One input session for one payment form.
///
/// Created when the form opens and dropped on submit or cancel; the number
/// and security-code buffers are zeroized on drop.
///
/// # Example
///
/// ```
/// use card_input_core::{CardField, CardNetwork, CardSession};
///
/// let mut session = CardSession::new();
/// session.on_field_changed(CardField::Number, "4242 4242 4242 4242");
/// session.on_field_changed(CardField::Expiry, "12/39");
/// let snapshot = session.on_field_changed(CardField::Cvv, "123");
///
/// assert_eq!(snapshot.network, CardNetwork::Visa);
/// assert!(snapshot.is_submittable);
/// assert_eq!(snapshot.masked_number, "\u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} 4242");
/// ```
pub struct CardSession {
    number: Zeroizing<String>,
    expiry_raw: String,
    cvv_raw: Zeroizing<String>,
    current_year: u16,
    current_month: u8,
    snapshot: CardSnapshot,
}

impl CardSession {
    /// Creates a session using the system clock for expiry checks.
    pub fn new() -> Self {
        let (year, month) = expiry::current_year_month();
        Self::with_current_date(year, month)
    }

    /// Creates a session with a pinned current date.
    ///
    /// Hosts that already know "now" (and tests) pass it explicitly so
    /// expiry validation is deterministic.
    pub fn with_current_date(current_year: u16, current_month: u8) -> Self {
        Self {
            number: Zeroizing::new(String::new()),
            expiry_raw: String::new(),
            cvv_raw: Zeroizing::new(String::new()),
            current_year,
            current_month,
            snapshot: CardSnapshot::empty(),
        }
    }

    /// Replaces a field's content with the normalized form of `text` and
    /// rebuilds the snapshot.
    ///
    /// Call on every keystroke or paste with the field's full new text.
    /// Never fails: malformed characters are filtered, not rejected, and
    /// invalid states land in the snapshot's [`ValidationResult`]s.
    pub fn on_field_changed(&mut self, field: CardField, text: &str) -> &CardSnapshot {
        let digits = field::normalize(text, field);
        match field {
            CardField::Number => replace_wiped(&mut self.number, &digits),
            CardField::Expiry => self.expiry_raw = digits,
            CardField::Cvv => replace_wiped(&mut self.cvv_raw, &digits),
        }
        self.rebuild();
        &self.snapshot
    }

    /// Ingests a scanner result as a full replacement of the number field.
    ///
    /// Routed through the exact same normalization/validation path as typed
    /// input; there is no separate pipeline for scanned numbers.
    pub fn ingest_scan_result(&mut self, raw_digits: &str) -> &CardSnapshot {
        self.on_field_changed(CardField::Number, raw_digits)
    }

    /// Wipes all raw input and returns to [`EntryState::Empty`].
    pub fn clear(&mut self) -> &CardSnapshot {
        self.number.zeroize();
        self.expiry_raw.clear();
        self.cvv_raw.zeroize();
        self.rebuild();
        &self.snapshot
    }

    /// The snapshot produced by the most recent mutation.
    #[inline]
    pub fn snapshot(&self) -> &CardSnapshot {
        &self.snapshot
    }

    /// Shorthand for `snapshot().state`.
    #[inline]
    pub fn state(&self) -> EntryState {
        self.snapshot.state
    }

    fn rebuild(&mut self) {
        let number_digits = field::digit_values(&self.number);
        let network = classify::classify(&number_digits);

        let number = validate_number(&number_digits, network);
        let expiry = validate_expiry_field(&self.expiry_raw, self.current_year, self.current_month);
        let cvv = cvv::validate(&self.cvv_raw, network);

        let is_submittable =
            number.is_valid && expiry.is_valid && cvv.is_valid && network != CardNetwork::Unknown;

        let state = if self.number.is_empty() && self.expiry_raw.is_empty() && self.cvv_raw.is_empty()
        {
            EntryState::Empty
        } else if number.is_incomplete() || expiry.is_incomplete() || cvv.is_incomplete() {
            EntryState::PartiallyEntered
        } else if is_submittable {
            EntryState::CompleteValid
        } else {
            EntryState::CompleteInvalid
        };

        self.snapshot = CardSnapshot {
            network,
            formatted_number: format::format_partial(&self.number, network),
            masked_number: format::format_masked(&self.number, network),
            last_four: last_four(&self.number),
            number,
            expiry,
            cvv,
            is_submittable,
            state,
        };
    }
}

impl Default for CardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CardSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Raw buffers stay out of logs
        f.debug_struct("CardSession")
            .field("snapshot", &self.snapshot)
            .finish()
    }
}

/// Overwrites a sensitive buffer, wiping the previous contents first.
fn replace_wiped(slot: &mut Zeroizing<String>, digits: &str) {
    slot.zeroize();
    slot.push_str(digits);
}

fn last_four(digits: &str) -> String {
    if digits.len() >= 4 {
        digits[digits.len() - 4..].to_string()
    } else {
        String::new()
    }
}

/// Classifies the number field's digits.
///
/// A number shorter than the network minimum is `Incomplete`; a checksum
/// failure only surfaces once no longer number is possible for the
/// network, so a Visa that fails Luhn at 16 digits stays `Incomplete`
/// until 19.
fn validate_number(digits: &[u8], network: CardNetwork) -> ValidationResult {
    let len = digits.len();
    if len == 0 {
        return ValidationResult::incomplete();
    }

    if network == CardNetwork::Unknown {
        // A plausible-length number that even passes Luhn is genuinely
        // unrecognized; otherwise keep waiting until nothing longer can
        // rescue the prefix.
        if (len >= MIN_CARD_DIGITS && luhn::validate(digits)) || len >= MAX_CARD_DIGITS {
            return ValidationResult::invalid(ErrorKind::UnknownNetwork);
        }
        return ValidationResult::incomplete();
    }

    if len < network.min_length() {
        return ValidationResult::incomplete();
    }
    if network.is_valid_length(len) && luhn::validate(digits) {
        return ValidationResult::valid();
    }
    if len >= network.max_length() {
        return ValidationResult::invalid(ErrorKind::InvalidChecksum);
    }
    ValidationResult::incomplete()
}

fn validate_expiry_field(digits: &str, current_year: u16, current_month: u8) -> ValidationResult {
    if digits.len() < 4 {
        return ValidationResult::incomplete();
    }
    match expiry::parse_expiry(digits) {
        None => ValidationResult::invalid(ErrorKind::InvalidExpiryFormat),
        Some(date) if date.is_expired_at(current_year, current_month) => {
            ValidationResult::invalid(ErrorKind::ExpiredCard)
        }
        Some(_) => ValidationResult::valid(),
    }
}
