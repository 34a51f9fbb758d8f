//! # card_input_core
//!
//! Card input validation and formatting engine for payment forms.
//!
//! The engine takes raw keystroke-level input for a card number, expiry
//! date, and security code and derives, on every mutation:
//!
//! - a live per-field validity classification (never "invalid" mid-entry)
//! - the detected card network
//! - a grouped display string and a masked representation
//! - a final submit-ready verdict
//!
//! There is no rendering, persistence, or network I/O here: the engine
//! exposes state transitions and derived values, and the host form reads
//! the resulting [`CardSnapshot`] to drive its UI.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_input_core::{CardField, CardNetwork, CardSession, EntryState};
//!
//! let mut session = CardSession::new();
//!
//! // Every keystroke/paste reports the field's full new text
//! let snapshot = session.on_field_changed(CardField::Number, "4242 4242 4242 4242");
//! assert_eq!(snapshot.network, CardNetwork::Visa);
//! assert!(snapshot.number.is_valid);
//!
//! session.on_field_changed(CardField::Expiry, "12/39");
//! let snapshot = session.on_field_changed(CardField::Cvv, "123");
//!
//! assert!(snapshot.is_submittable);
//! assert_eq!(snapshot.state, EntryState::CompleteValid);
//! println!("{}", snapshot.masked_number); // "•••• •••• •••• 4242"
//! ```
//!
//! ## Mid-entry semantics
//!
//! ```rust
//! use card_input_core::{CardField, CardSession, ErrorKind};
//!
//! let mut session = CardSession::new();
//!
//! // A short number is Incomplete, not an error - the UI must not flash
//! // red while the user is still typing.
//! let snapshot = session.on_field_changed(CardField::Number, "4242 42");
//! assert_eq!(snapshot.number.reason, Some(ErrorKind::Incomplete));
//! ```
//!
//! ## Scanning
//!
//! ```rust
//! use card_input_core::{CardNetwork, CardSession};
//!
//! let mut session = CardSession::new();
//! // A scanner result replaces the number field and runs the same pipeline
//! let snapshot = session.ingest_scan_result("6011111111111117");
//! assert_eq!(snapshot.network, CardNetwork::Discover);
//! assert!(snapshot.number.is_valid);
//! ```
//!
//! ## Supported networks
//!
//! | Network | Prefix | Length | CVV |
//! |---------|--------|--------|-----|
//! | Visa | 4 | 13, 16, 19 | 3 |
//! | MasterCard | 51-55, 2221-2720 | 16 | 3 |
//! | American Express | 34, 37 | 15 | 4 |
//! | Discover | 6011, 644-649, 65 | 16-19 | 3 |
//! | JCB | 3528-3589 | 16-19 | 3 |
//! | UnionPay | 62 | 16-19 | 3 |
//! | mada | published 6-digit BIN list | 16 | 3 |
//!
//! Anything else classifies as [`CardNetwork::Unknown`] and blocks submit.
//!
//! ## Security
//!
//! - Number and CVV buffers are zeroized when the session is dropped
//! - `Debug` output shows masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classify;
pub mod cvv;
pub mod error;
pub mod expiry;
pub mod field;
pub mod format;
pub mod luhn;
pub mod network;
pub mod session;

// Re-export main types at crate root
pub use error::{ErrorKind, ValidationResult};
pub use field::{normalize, CardField};
pub use network::{CardNetwork, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use session::{CardSession, CardSnapshot, EntryState};
