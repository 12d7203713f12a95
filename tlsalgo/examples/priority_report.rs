//! Cipher-Suite Priority Example
//!
//! Walks the catalog, builds session priorities from configuration, ranks
//! the enabled suites and negotiates against a sample client offer.
//!
//! Run with: `cargo run --package tlsalgo --example priority_report`
//! Set `RUST_LOG=trace` to see every enabled suite as it is ranked.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::print_stdout)]
#![allow(clippy::panic)]

use tlsalgo::{
    CatalogLookup, CipherAlgorithm, CipherSuite, KxAlgorithm, MacAlgorithm, PriorityCategory,
    PriorityConfig, ProtocolVersion, SessionPriority, SuiteOrdering, SuitePolicyEngine,
    TracingConfig, catalog, init_tracing, kx_credential_type, suite_from_name, suite_name,
};

fn main() {
    init_tracing(&TracingConfig::default());

    println!("=== tlsalgo: Cipher-Suite Priority Report ===\n");

    // ====================================================================
    // Section 1: Catalog summary
    // ====================================================================
    println!("--- Catalog ---\n");

    println!("  ciphers:        {}", CipherAlgorithm::catalog_count());
    println!("  macs:           {}", MacAlgorithm::catalog_count());
    println!("  key exchanges:  {}", KxAlgorithm::catalog_count());
    println!("  compression:    {}", catalog::compression_count());
    println!("  versions:       {}", ProtocolVersion::catalog_count());
    println!("  cipher suites:  {}\n", tlsalgo::count_all_suites());

    for entry in catalog::tables::KEY_EXCHANGES {
        println!(
            "  {:10} auth={:8} credential={:?}",
            entry.id.display_name().unwrap_or("?"),
            entry.auth.name,
            kx_credential_type(entry.id),
        );
    }
    println!();

    // ====================================================================
    // Section 2: Default configuration, best suite first
    // ====================================================================
    println!("--- Default priority ---\n");

    let config = PriorityConfig::default();
    println!("{}\n", config.to_json().expect("default config serializes"));

    let priority = config.build().expect("default config is valid");
    for row in SuitePolicyEngine::report(&priority).expect("enumeration") {
        println!(
            "  {}  {:32} kx={:?} cipher={:?} mac={:?} legacy={}",
            row.suite,
            row.name,
            row.score.kx_rank,
            row.score.cipher_rank,
            row.score.mac_rank,
            row.legacy_score,
        );
    }
    println!(
        "\n  versions: lowest={:?} highest={:?}\n",
        priority.lowest_version(),
        priority.highest_version()
    );

    // ====================================================================
    // Section 3: Disabling a cipher removes its suites
    // ====================================================================
    println!("--- Disable AES_256_CBC ---\n");

    let restricted = PriorityConfig::default()
        .with_ciphers(["AES_128_CBC", "3DES_CBC"])
        .build()
        .expect("restricted config is valid");
    let rsa_aes256 = CipherSuite::new(0x00, 0x35);
    let suites = SuitePolicyEngine::supported_suites(&restricted).expect("enumeration");
    assert!(!suites.contains(&rsa_aes256));
    for suite in &suites {
        println!("  {}  {}", suite, suite_name(*suite).unwrap_or("?"));
    }
    println!("\n  {} is no longer offered\n", suite_name(rsa_aes256).unwrap_or("?"));

    // ====================================================================
    // Section 4: Catalog order versus preference order
    // ====================================================================
    println!("--- Catalog order vs preference order ---\n");

    let catalog_order =
        SuitePolicyEngine::enabled_suites(&restricted, SuiteOrdering::Catalog).expect("enumeration");
    println!("  catalog:    {:?}", names(&catalog_order));
    println!("  preference: {:?}\n", names(&suites));

    // ====================================================================
    // Section 5: Server-side selection
    // ====================================================================
    println!("--- Negotiate against a client offer ---\n");

    let offered: Vec<CipherSuite> =
        ["RSA_ARCFOUR_MD5", "RSA_3DES_EDE_CBC_SHA", "DHE_DSS_AES_128_CBC_SHA"]
            .iter()
            .filter_map(|name| suite_from_name(name))
            .collect();
    let selected = SuitePolicyEngine::select_suite(&priority, &offered);
    println!("  offered:  {:?}", names(&offered));
    println!("  selected: {:?}", selected.and_then(suite_name));
    println!(
        "  compression: {:?}\n",
        SuitePolicyEngine::select_compression(&priority, &[0])
    );

    // ====================================================================
    // Section 6: Rejected configurations
    // ====================================================================
    println!("--- Rejected configurations ---\n");

    let mut session = SessionPriority::new();
    let attempts = [
        (PriorityCategory::Mac, vec![MacAlgorithm::Sha as u8, MacAlgorithm::Sha as u8]),
        (PriorityCategory::Cipher, vec![0x7f]),
        (PriorityCategory::Version, vec![ProtocolVersion::Unknown as u8]),
    ];
    for (category, ids) in attempts {
        match session.set_priority(category, &ids) {
            Ok(()) => panic!("{category} list {ids:?} should be rejected"),
            Err(e) => println!("  {:18} {:?} -> [{}] {}", category.to_string(), ids, e.code(), e),
        }
    }

    println!("\n=== Done ===");
}

fn names(suites: &[CipherSuite]) -> Vec<&'static str> {
    suites.iter().filter_map(|&suite| suite_name(suite)).collect()
}
