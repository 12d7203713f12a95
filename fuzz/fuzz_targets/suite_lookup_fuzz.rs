#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for cipher-suite lookups
//!
//! Feeds arbitrary byte pairs through every suite lookup and every byte
//! through the compression wire mapping, checking that the answers agree.

use libfuzzer_sys::fuzz_target;
use tlsalgo::catalog::{compression_from_wire, compression_wire_number};
use tlsalgo::{CipherSuite, suite_components, suite_from_name, suite_is_known, suite_name};

fuzz_target!(|data: &[u8]| {
    for &number in data {
        if let Some(method) = compression_from_wire(number) {
            assert_eq!(compression_wire_number(method), Some(number));
        }
    }

    for pair in data.chunks_exact(2) {
        let Some(id) = CipherSuite::from_slice(pair) else {
            continue;
        };

        let components = suite_components(id);
        assert_eq!(components.is_some(), suite_is_known(id));
        assert_eq!(components, suite_components(id));

        if let Some(name) = suite_name(id) {
            assert_eq!(suite_from_name(name), Some(id));
        }
        if !CipherSuite::POPULATED_FAMILIES.contains(&id.family()) {
            assert!(components.is_none());
        }
    }

    if let Ok(text) = std::str::from_utf8(data) {
        if let Some(id) = suite_from_name(text) {
            assert!(suite_is_known(id));
        }
    }
});
