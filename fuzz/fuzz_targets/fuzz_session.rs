#![no_main]

use card_input_core::{CardField, CardNetwork, CardSession};
use libfuzzer_sys::fuzz_target;

// Interprets fuzz input as a sequence of field edits and checks the
// submit invariant after every one. Must never panic.
fuzz_target!(|data: &[u8]| {
    let mut session = CardSession::with_current_date(2024, 6);
    for chunk in data.chunks(8) {
        let field = match chunk[0] % 3 {
            0 => CardField::Number,
            1 => CardField::Expiry,
            _ => CardField::Cvv,
        };
        let text = String::from_utf8_lossy(&chunk[1..]);
        let snap = session.on_field_changed(field, &text);
        if snap.is_submittable {
            assert!(snap.number.is_valid && snap.expiry.is_valid && snap.cvv.is_valid);
            assert_ne!(snap.network, CardNetwork::Unknown);
        }
    }
});
