#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz `@context` extraction on arbitrary bytes.
fuzz_target!(|data: &[u8]| {
    let _ = vex_tools::parsers::parse_context(data);
    let _ = vex_tools::parsers::parse_openvex_context(data);
});
