#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing and evaluating arbitrary input should never panic
        if let Ok(request) = minicalc::parse_request(input) {
            let _ = minicalc::evaluate(&request);
        }
    }
});
