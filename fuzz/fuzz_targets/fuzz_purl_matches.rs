#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz package URL matching.
///
/// The input is split at the first NUL byte into query and candidate.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (query, candidate) = s.split_once('\0').unwrap_or((s, s));
        let _ = vex_tools::purl_matches(query, candidate);
        let _ = vex_tools::purl_matches(candidate, query);
    }
});
