//! End-to-end negotiation scenarios over the real catalog.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::collections::BTreeSet;

use algo_catalog::{suite_components, suite_from_name};
use algo_priority::{PriorityConfig, SessionPriority, SuiteOrdering, SuitePolicyEngine};
use algo_types::{
    Algorithm, CipherAlgorithm, CipherSuite, CompressionMethod, KxAlgorithm, MacAlgorithm,
    PriorityCategory, ProtocolVersion,
};

fn full_session() -> SessionPriority {
    PriorityConfig::new()
        .with_ciphers(["AES_256_CBC", "AES_128_CBC", "3DES_CBC", "TWOFISH_128_CBC", "ARCFOUR", "NULL"])
        .with_macs(["SHA", "MD5", "NULL"])
        .with_key_exchanges(["DHE_RSA", "DHE_DSS", "RSA", "SRP", "ANON_DH"])
        .build()
        .unwrap()
}

#[test]
fn test_disabling_aes256_removes_rsa_aes256() {
    let mut priority = full_session();
    let rsa_aes256 = CipherSuite::new(0x00, 0x35);
    let before = SuitePolicyEngine::supported_suites(&priority).unwrap();
    assert!(before.contains(&rsa_aes256));

    priority
        .set_ciphers(&[
            CipherAlgorithm::Aes128Cbc,
            CipherAlgorithm::TripleDesCbc,
            CipherAlgorithm::TwofishCbc,
            CipherAlgorithm::Arcfour,
            CipherAlgorithm::Null,
        ])
        .unwrap();

    for ordering in [SuiteOrdering::Preference, SuiteOrdering::Catalog] {
        let suites = SuitePolicyEngine::enabled_suites(&priority, ordering).unwrap();
        assert!(!suites.contains(&rsa_aes256), "{ordering:?} still offers RSA_AES_256_CBC_SHA");
        for suite in suites {
            assert_ne!(suite_components(suite).unwrap().cipher, CipherAlgorithm::Aes256Cbc);
        }
    }
}

#[test]
fn test_full_session_enables_whole_catalog() {
    let priority = full_session();
    let suites = SuitePolicyEngine::supported_suites(&priority).unwrap();
    assert_eq!(suites.len(), algo_catalog::count_all_suites());
    // DHE_RSA ranks first among key exchanges and AES_256 first among ciphers.
    assert_eq!(suites[0], suite_from_name("DHE_RSA_AES_256_CBC_SHA").unwrap());
}

#[test]
fn test_both_orderings_yield_same_set() {
    let priority = PriorityConfig::default().build().unwrap();
    let sorted: BTreeSet<_> = SuitePolicyEngine::enabled_suites(&priority, SuiteOrdering::Preference)
        .unwrap()
        .into_iter()
        .collect();
    let unsorted: BTreeSet<_> = SuitePolicyEngine::enabled_suites(&priority, SuiteOrdering::Catalog)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(sorted, unsorted);
    assert!(!sorted.is_empty());
}

#[test]
fn test_sorted_output_is_monotone_and_idempotent() {
    let priority = full_session();
    let suites = SuitePolicyEngine::supported_suites(&priority).unwrap();
    for pair in suites.windows(2) {
        let a = SuitePolicyEngine::score(&priority, pair[0]).unwrap();
        let b = SuitePolicyEngine::score(&priority, pair[1]).unwrap();
        assert!(a <= b, "{} sorted after {}", pair[0], pair[1]);
    }

    let mut resorted = suites.clone();
    SuitePolicyEngine::sort(&priority, &mut resorted);
    assert_eq!(resorted, suites);
}

#[test]
fn test_kx_dominates_cipher() {
    let mut priority = SessionPriority::new();
    priority.set_key_exchanges(&[KxAlgorithm::Rsa, KxAlgorithm::DheRsa]).unwrap();
    priority.set_ciphers(&[CipherAlgorithm::Aes256Cbc, CipherAlgorithm::TripleDesCbc]).unwrap();
    priority.set_macs(&[MacAlgorithm::Sha]).unwrap();

    let suites = SuitePolicyEngine::supported_suites(&priority).unwrap();
    let names: Vec<_> = suites.iter().map(|&s| algo_catalog::suite_name(s).unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "RSA_AES_256_CBC_SHA",
            "RSA_3DES_EDE_CBC_SHA",
            "DHE_RSA_AES_256_CBC_SHA",
            "DHE_RSA_3DES_EDE_CBC_SHA",
        ]
    );
}

#[test]
fn test_server_selection_from_client_offer() {
    let priority = PriorityConfig::default().build().unwrap();
    let offered = [
        suite_from_name("RSA_ARCFOUR_MD5").unwrap(),
        suite_from_name("RSA_AES_128_CBC_SHA").unwrap(),
        suite_from_name("DHE_DSS_3DES_EDE_CBC_SHA").unwrap(),
        CipherSuite::new(0xC0, 0x2F),
    ];
    // DHE_DSS outranks RSA in the default key exchange order.
    assert_eq!(
        SuitePolicyEngine::select_suite(&priority, &offered),
        suite_from_name("DHE_DSS_3DES_EDE_CBC_SHA")
    );
    assert_eq!(SuitePolicyEngine::select_compression(&priority, &[0]), Some(CompressionMethod::Null));
}

#[test]
fn test_raw_id_configuration_matches_typed() {
    let mut raw = SessionPriority::new();
    raw.set_priority(PriorityCategory::Cipher, &[CipherAlgorithm::Aes128Cbc.id()]).unwrap();
    raw.set_priority(PriorityCategory::KeyExchange, &[KxAlgorithm::Rsa.id()]).unwrap();
    raw.set_priority(PriorityCategory::Mac, &[MacAlgorithm::Sha.id()]).unwrap();
    raw.set_priority(PriorityCategory::Version, &[ProtocolVersion::Tls1.id()]).unwrap();

    let mut typed = SessionPriority::new();
    typed.set_ciphers(&[CipherAlgorithm::Aes128Cbc]).unwrap();
    typed.set_key_exchanges(&[KxAlgorithm::Rsa]).unwrap();
    typed.set_macs(&[MacAlgorithm::Sha]).unwrap();
    typed.set_versions(&[ProtocolVersion::Tls1]).unwrap();

    assert_eq!(raw, typed);
    assert_eq!(
        SuitePolicyEngine::supported_suites(&raw).unwrap(),
        vec![CipherSuite::new(0x00, 0x2F)]
    );
}

#[test]
fn test_report_serializes_to_json() {
    let priority = PriorityConfig::default().build().unwrap();
    let rows = SuitePolicyEngine::report(&priority).unwrap();
    let json = serde_json::to_value(&rows).unwrap();
    let first = &json[0];
    assert_eq!(first["name"], "DHE_RSA_AES_256_CBC_SHA");
    assert_eq!(first["score"]["kx_rank"], 0);
    assert_eq!(first["legacy_score"], 110);
}
