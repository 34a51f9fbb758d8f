#![no_main]

use card_input_core::{field, format, CardField, CardNetwork};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let digits = field::normalize(data, CardField::Number);
    for network in [
        CardNetwork::Visa,
        CardNetwork::Amex,
        CardNetwork::Mada,
        CardNetwork::Unknown,
    ] {
        let formatted = format::format_partial(&digits, network);
        assert_eq!(format::strip_formatting(&formatted), digits);
        let _ = format::format_masked(&digits, network);
    }
});
