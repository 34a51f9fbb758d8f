#![no_main]

use card_input_core::expiry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Some(exp) = expiry::parse_expiry(data) {
        // Anything that parses has a well-formed month and displays as MM/YY
        assert!((1..=12).contains(&exp.month()));
        assert_eq!(exp.to_string().len(), 5);
        let _ = exp.is_expired_at(2024, 6);
    }
});
