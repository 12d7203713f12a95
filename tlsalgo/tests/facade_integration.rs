//! Integration tests for the `tlsalgo` facade.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use tlsalgo::{
    AlgoError, CipherSuite, CredentialType, ErrorCode, KxAlgorithm, PriorityConfig,
    ProtocolVersion, SuitePolicyEngine, credential_type_kx, default_suites, suite_components,
    suite_name, version_from_wire,
};

#[test]
fn test_default_suites_match_engine() {
    let priority = PriorityConfig::default().build().unwrap();
    assert_eq!(default_suites().unwrap(), SuitePolicyEngine::supported_suites(&priority).unwrap());
}

#[test]
fn test_default_suites_exclude_anonymous_and_srp() {
    for suite in default_suites().unwrap() {
        let kx = suite_components(suite).unwrap().kx;
        assert!(!matches!(kx, KxAlgorithm::AnonDh | KxAlgorithm::Srp), "{suite} uses {kx:?}");
    }
}

#[test]
fn test_wire_values_resolve_through_facade() {
    assert_eq!(suite_name(CipherSuite::from_bytes([0x00, 0x2F])), Some("RSA_AES_128_CBC_SHA"));
    assert_eq!(version_from_wire(3, 1), Some(ProtocolVersion::Tls1));
    assert_eq!(version_from_wire(3, 3), None);
    assert_eq!(credential_type_kx(CredentialType::Certificate), Some(KxAlgorithm::Rsa));
}

#[test]
fn test_config_file_flow() {
    let json = r#"{
        "ciphers": ["aes_128_cbc", "3des_cbc"],
        "macs": ["SHA"],
        "key_exchanges": ["RSA"],
        "compression": ["NULL"],
        "versions": ["SSL 3.0"]
    }"#;
    let priority = PriorityConfig::from_json(json).unwrap().build().unwrap();
    let suites = SuitePolicyEngine::supported_suites(&priority).unwrap();
    assert_eq!(suites, vec![CipherSuite::new(0x00, 0x2F), CipherSuite::new(0x00, 0x0A)]);
    assert_eq!(priority.highest_version(), ProtocolVersion::Ssl3);
    assert_eq!(priority.supported_compression_methods(), vec![0]);
}

#[test]
fn test_error_codes_are_stable() {
    let err = PriorityConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, AlgoError::ConfigurationError(_)));
    assert_eq!(err.code(), ErrorCode::InvalidConfig);
    assert_eq!(err.code() as u32, 7005);
}

#[test]
fn test_report_is_json_serializable() {
    let priority = PriorityConfig::default().build().unwrap();
    let rows = SuitePolicyEngine::report(&priority).unwrap();
    let json = serde_json::to_string(&rows).unwrap();
    assert!(json.contains("DHE_RSA_AES_256_CBC_SHA"));
}
