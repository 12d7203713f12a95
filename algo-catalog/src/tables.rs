//! The static algorithm tables.
//!
//! Table order is scan order only. The one exception is [`CIPHER_SUITES`],
//! whose declaration order is the order unsorted enumeration reports.
//!
//! All block ciphers here run in CBC mode and the rest are stream ciphers.
//! Do not add ciphers in other modes: the record layer only knows
//! MAC-then-encrypt over CBC or a stream.

use algo_types::{
    AuthMethod, CipherAlgorithm, CipherEntry, CipherMode, CipherSuite, CipherSuiteEntry,
    CompressionEntry, CompressionMethod, CredentialMapping, CredentialType, DigestEntry,
    KxAlgorithm, KxEntry, MacAlgorithm, ProtocolVersion, VersionEntry,
};

/// Prefix stripped from cipher names for display.
pub const CIPHER_PREFIX: &str = "TLS_CIPHER_";
/// Prefix stripped from MAC names for display.
pub const MAC_PREFIX: &str = "TLS_MAC_";
/// Prefix stripped from compression names for display.
pub const COMPRESSION_PREFIX: &str = "TLS_COMP_";
/// Prefix stripped from key-exchange names for display.
pub const KX_PREFIX: &str = "TLS_KX_";
/// Prefix stripped from cipher-suite names for display.
pub const SUITE_PREFIX: &str = "TLS_";

/// Number of distinct ids in each algorithm id space.
pub const ID_SPACE: usize = 256;

// =============================================================================
// PROTOCOL VERSIONS
// =============================================================================

/// Known protocol versions, including the `Unknown` sentinel.
pub static VERSIONS: &[VersionEntry] = &[
    VersionEntry { name: "SSL 3.0", id: ProtocolVersion::Ssl3, major: 3, minor: 0, supported: true },
    VersionEntry { name: "TLS 1.0", id: ProtocolVersion::Tls1, major: 3, minor: 1, supported: true },
    VersionEntry {
        name: "UNKNOWN",
        id: ProtocolVersion::Unknown,
        major: 0,
        minor: 0,
        supported: true,
    },
];

// =============================================================================
// BULK CIPHERS
// =============================================================================

/// Known bulk ciphers.
pub static CIPHERS: &[CipherEntry] = &[
    CipherEntry {
        name: "TLS_CIPHER_3DES_CBC",
        id: CipherAlgorithm::TripleDesCbc,
        block_size: 8,
        key_size: 24,
        mode: CipherMode::Block,
        iv_size: 8,
    },
    CipherEntry {
        name: "TLS_CIPHER_AES_128_CBC",
        id: CipherAlgorithm::Aes128Cbc,
        block_size: 16,
        key_size: 16,
        mode: CipherMode::Block,
        iv_size: 16,
    },
    CipherEntry {
        name: "TLS_CIPHER_AES_256_CBC",
        id: CipherAlgorithm::Aes256Cbc,
        block_size: 16,
        key_size: 32,
        mode: CipherMode::Block,
        iv_size: 16,
    },
    CipherEntry {
        name: "TLS_CIPHER_TWOFISH_128_CBC",
        id: CipherAlgorithm::TwofishCbc,
        block_size: 16,
        key_size: 16,
        mode: CipherMode::Block,
        iv_size: 16,
    },
    CipherEntry {
        name: "TLS_CIPHER_ARCFOUR",
        id: CipherAlgorithm::Arcfour,
        block_size: 1,
        key_size: 16,
        mode: CipherMode::Stream,
        iv_size: 0,
    },
    CipherEntry {
        name: "TLS_CIPHER_NULL",
        id: CipherAlgorithm::Null,
        block_size: 1,
        key_size: 0,
        mode: CipherMode::Stream,
        iv_size: 0,
    },
];

// =============================================================================
// MAC ALGORITHMS
// =============================================================================

/// Known MAC algorithms.
pub static MACS: &[DigestEntry] = &[
    DigestEntry { name: "TLS_MAC_SHA", id: MacAlgorithm::Sha, digest_size: 20 },
    DigestEntry { name: "TLS_MAC_MD5", id: MacAlgorithm::Md5, digest_size: 16 },
    DigestEntry { name: "TLS_MAC_NULL", id: MacAlgorithm::Null, digest_size: 0 },
];

// =============================================================================
// COMPRESSION METHODS
// =============================================================================

/// Known compression methods.
pub static COMPRESSION_METHODS: &[CompressionEntry] = &[
    CompressionEntry { name: "TLS_COMP_NULL", id: CompressionMethod::Null, wire_number: 0 },
    #[cfg(feature = "zlib")]
    CompressionEntry { name: "TLS_COMP_ZLIB", id: CompressionMethod::Zlib, wire_number: 224 },
];

// =============================================================================
// KEY EXCHANGE
// =============================================================================

/// Authentication routines for anonymous Diffie-Hellman.
pub static ANON_AUTH: AuthMethod = AuthMethod { name: "anon" };
/// Authentication routines for RSA key transport.
pub static RSA_AUTH: AuthMethod = AuthMethod { name: "rsa" };
/// Authentication routines for DSS-signed ephemeral Diffie-Hellman.
pub static DHE_DSS_AUTH: AuthMethod = AuthMethod { name: "dhe_dss" };
/// Authentication routines for RSA-signed ephemeral Diffie-Hellman.
pub static DHE_RSA_AUTH: AuthMethod = AuthMethod { name: "dhe_rsa" };
/// Authentication routines for SRP.
pub static SRP_AUTH: AuthMethod = AuthMethod { name: "srp" };

/// Known key-exchange algorithms.
pub static KEY_EXCHANGES: &[KxEntry] = &[
    KxEntry { name: "TLS_KX_ANON_DH", id: KxAlgorithm::AnonDh, auth: &ANON_AUTH },
    KxEntry { name: "TLS_KX_RSA", id: KxAlgorithm::Rsa, auth: &RSA_AUTH },
    KxEntry { name: "TLS_KX_DHE_DSS", id: KxAlgorithm::DheDss, auth: &DHE_DSS_AUTH },
    KxEntry { name: "TLS_KX_DHE_RSA", id: KxAlgorithm::DheRsa, auth: &DHE_RSA_AUTH },
    KxEntry { name: "TLS_KX_SRP", id: KxAlgorithm::Srp, auth: &SRP_AUTH },
];

/// Credential family each key exchange draws on.
pub static CREDENTIAL_MAPPINGS: &[CredentialMapping] = &[
    CredentialMapping { kx: KxAlgorithm::AnonDh, credential: CredentialType::Anon },
    CredentialMapping { kx: KxAlgorithm::Rsa, credential: CredentialType::Certificate },
    CredentialMapping { kx: KxAlgorithm::DheDss, credential: CredentialType::Certificate },
    CredentialMapping { kx: KxAlgorithm::DheRsa, credential: CredentialType::Certificate },
    CredentialMapping { kx: KxAlgorithm::Srp, credential: CredentialType::Srp },
];

// =============================================================================
// CIPHER SUITES
// =============================================================================

const fn suite(
    name: &'static str,
    id: [u8; 2],
    cipher: CipherAlgorithm,
    kx: KxAlgorithm,
    mac: MacAlgorithm,
) -> CipherSuiteEntry {
    CipherSuiteEntry { name, id: CipherSuite::from_bytes(id), cipher, kx, mac }
}

/// Known cipher suites, in declaration order.
///
/// Twofish suites and the AES/Twofish SRP suites live in the 0xF6
/// private-use family.
pub static CIPHER_SUITES: &[CipherSuiteEntry] = &[
    // Anonymous DH
    suite(
        "TLS_ANON_DH_ARCFOUR_MD5",
        [0x00, 0x18],
        CipherAlgorithm::Arcfour,
        KxAlgorithm::AnonDh,
        MacAlgorithm::Md5,
    ),
    suite(
        "TLS_ANON_DH_3DES_EDE_CBC_SHA",
        [0x00, 0x1B],
        CipherAlgorithm::TripleDesCbc,
        KxAlgorithm::AnonDh,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_ANON_DH_AES_128_CBC_SHA",
        [0x00, 0x34],
        CipherAlgorithm::Aes128Cbc,
        KxAlgorithm::AnonDh,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_ANON_DH_AES_256_CBC_SHA",
        [0x00, 0x3A],
        CipherAlgorithm::Aes256Cbc,
        KxAlgorithm::AnonDh,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_ANON_DH_TWOFISH_128_CBC_SHA",
        [0xF6, 0x50],
        CipherAlgorithm::TwofishCbc,
        KxAlgorithm::AnonDh,
        MacAlgorithm::Sha,
    ),
    // SRP
    suite(
        "TLS_SRP_ARCFOUR_SHA",
        [0x00, 0x5C],
        CipherAlgorithm::Arcfour,
        KxAlgorithm::Srp,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_SRP_ARCFOUR_MD5",
        [0x00, 0x5F],
        CipherAlgorithm::Arcfour,
        KxAlgorithm::Srp,
        MacAlgorithm::Md5,
    ),
    suite(
        "TLS_SRP_3DES_EDE_CBC_SHA",
        [0x00, 0x5B],
        CipherAlgorithm::TripleDesCbc,
        KxAlgorithm::Srp,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_SRP_AES_128_CBC_SHA",
        [0xF6, 0x62],
        CipherAlgorithm::Aes128Cbc,
        KxAlgorithm::Srp,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_SRP_AES_256_CBC_SHA",
        [0xF6, 0x63],
        CipherAlgorithm::Aes256Cbc,
        KxAlgorithm::Srp,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_SRP_TWOFISH_128_CBC_SHA",
        [0xF6, 0x64],
        CipherAlgorithm::TwofishCbc,
        KxAlgorithm::Srp,
        MacAlgorithm::Sha,
    ),
    // DHE with DSS certificates
    suite(
        "TLS_DHE_DSS_TWOFISH_128_CBC_SHA",
        [0xF6, 0x54],
        CipherAlgorithm::TwofishCbc,
        KxAlgorithm::DheDss,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_DHE_DSS_3DES_EDE_CBC_SHA",
        [0x00, 0x13],
        CipherAlgorithm::TripleDesCbc,
        KxAlgorithm::DheDss,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_DHE_DSS_AES_128_CBC_SHA",
        [0x00, 0x32],
        CipherAlgorithm::Aes128Cbc,
        KxAlgorithm::DheDss,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_DHE_DSS_AES_256_CBC_SHA",
        [0x00, 0x38],
        CipherAlgorithm::Aes256Cbc,
        KxAlgorithm::DheDss,
        MacAlgorithm::Sha,
    ),
    // DHE with RSA certificates
    suite(
        "TLS_DHE_RSA_TWOFISH_128_CBC_SHA",
        [0xF6, 0x55],
        CipherAlgorithm::TwofishCbc,
        KxAlgorithm::DheRsa,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_DHE_RSA_3DES_EDE_CBC_SHA",
        [0x00, 0x16],
        CipherAlgorithm::TripleDesCbc,
        KxAlgorithm::DheRsa,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_DHE_RSA_AES_128_CBC_SHA",
        [0x00, 0x33],
        CipherAlgorithm::Aes128Cbc,
        KxAlgorithm::DheRsa,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_DHE_RSA_AES_256_CBC_SHA",
        [0x00, 0x39],
        CipherAlgorithm::Aes256Cbc,
        KxAlgorithm::DheRsa,
        MacAlgorithm::Sha,
    ),
    // RSA
    suite(
        "TLS_RSA_NULL_MD5",
        [0x00, 0x01],
        CipherAlgorithm::Null,
        KxAlgorithm::Rsa,
        MacAlgorithm::Md5,
    ),
    suite(
        "TLS_RSA_ARCFOUR_SHA",
        [0x00, 0x05],
        CipherAlgorithm::Arcfour,
        KxAlgorithm::Rsa,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_RSA_ARCFOUR_MD5",
        [0x00, 0x04],
        CipherAlgorithm::Arcfour,
        KxAlgorithm::Rsa,
        MacAlgorithm::Md5,
    ),
    suite(
        "TLS_RSA_3DES_EDE_CBC_SHA",
        [0x00, 0x0A],
        CipherAlgorithm::TripleDesCbc,
        KxAlgorithm::Rsa,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_RSA_AES_128_CBC_SHA",
        [0x00, 0x2F],
        CipherAlgorithm::Aes128Cbc,
        KxAlgorithm::Rsa,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_RSA_AES_256_CBC_SHA",
        [0x00, 0x35],
        CipherAlgorithm::Aes256Cbc,
        KxAlgorithm::Rsa,
        MacAlgorithm::Sha,
    ),
    suite(
        "TLS_RSA_TWOFISH_128_CBC_SHA",
        [0xF6, 0x51],
        CipherAlgorithm::TwofishCbc,
        KxAlgorithm::Rsa,
        MacAlgorithm::Sha,
    ),
];
