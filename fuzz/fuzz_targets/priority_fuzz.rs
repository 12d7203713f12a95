#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for priority configuration and ranking
//!
//! Splits the input into raw id lists for each category, applies them to a
//! session and checks every enabled suite against the session ranks.

use libfuzzer_sys::fuzz_target;
use tlsalgo::{PriorityCategory, SessionPriority, SuiteOrdering, SuitePolicyEngine, suite_components};

fuzz_target!(|data: &[u8]| {
    let mut priority = SessionPriority::new();
    for (&category, ids) in PriorityCategory::all().iter().zip(data.split(|&b| b == 0xfe)) {
        // Rejected lists leave the session unchanged, which is also valid input.
        let _ = priority.set_priority(category, ids);
    }

    let Ok(sorted) = SuitePolicyEngine::enabled_suites(&priority, SuiteOrdering::Preference) else {
        return;
    };
    let Ok(unsorted) = SuitePolicyEngine::enabled_suites(&priority, SuiteOrdering::Catalog) else {
        return;
    };
    assert_eq!(sorted.len(), unsorted.len());

    for pair in sorted.windows(2) {
        assert!(
            SuitePolicyEngine::score(&priority, pair[0]) <= SuitePolicyEngine::score(&priority, pair[1])
        );
    }
    for &suite in &unsorted {
        let Some(parts) = suite_components(suite) else {
            panic!("enabled suite {suite} is not in the catalog");
        };
        assert!(priority.kx_rank(parts.kx).is_some());
        assert!(priority.cipher_rank(parts.cipher).is_some());
        assert!(priority.mac_rank(parts.mac).is_some());
        assert!(sorted.contains(&suite));
    }
});
