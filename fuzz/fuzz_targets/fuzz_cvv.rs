#![no_main]

use card_input_core::{cvv, CardNetwork};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for network in [
        CardNetwork::Visa,
        CardNetwork::Amex,
        CardNetwork::Unknown,
    ] {
        let result = cvv::validate(data, network);
        // Valid and carrying an error reason are mutually exclusive
        assert!(!(result.is_valid && result.reason.is_some()));
    }
});
