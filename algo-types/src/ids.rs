//! Algorithm identifiers.
//!
//! Every algorithm is identified by a one-byte id. The numeric values are
//! internal to this library (they are not TLS wire values) but they are
//! stable, and for [`ProtocolVersion`] their ordering is meaningful: a higher
//! id is a newer protocol.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::traits::Algorithm;

/// Bulk encryption algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CipherAlgorithm {
    /// No encryption.
    Null = 1,
    /// RC4 stream cipher (ARCFOUR), 128-bit key.
    Arcfour = 2,
    /// Triple DES (EDE) in CBC mode.
    TripleDesCbc = 3,
    /// AES (Rijndael) with a 128-bit key in CBC mode.
    Aes128Cbc = 4,
    /// Twofish with a 128-bit key in CBC mode.
    TwofishCbc = 5,
    /// AES (Rijndael) with a 256-bit key in CBC mode.
    Aes256Cbc = 6,
}

/// MAC (digest) algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum MacAlgorithm {
    /// No MAC.
    Null = 1,
    /// HMAC-MD5.
    Md5 = 2,
    /// HMAC-SHA1.
    Sha = 3,
}

/// Key-exchange algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum KxAlgorithm {
    /// Anonymous Diffie-Hellman.
    AnonDh = 1,
    /// RSA key transport authenticated by an X.509 certificate.
    Rsa = 2,
    /// Ephemeral Diffie-Hellman signed with a DSS certificate.
    DheDss = 3,
    /// Ephemeral Diffie-Hellman signed with an RSA certificate.
    DheRsa = 4,
    /// Secure Remote Password.
    Srp = 5,
}

/// Record-layer compression methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CompressionMethod {
    /// No compression.
    Null = 1,
    /// DEFLATE via zlib.
    Zlib = 2,
}

/// Protocol versions.
///
/// `Unknown` is a sentinel returned by version queries that have nothing to
/// report; it is never a negotiable version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ProtocolVersion {
    /// SSL 3.0 (wire 3.0).
    Ssl3 = 1,
    /// TLS 1.0 (wire 3.1).
    Tls1 = 2,
    /// No known version.
    Unknown = 0xff,
}

/// Credential families that a key exchange draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CredentialType {
    /// No credentials (anonymous key exchange).
    Anon = 1,
    /// SRP username/verifier.
    Srp = 2,
    /// X.509 certificate and private key.
    Certificate = 3,
}

/// The independent priority categories of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityCategory {
    /// Bulk ciphers.
    Cipher,
    /// MAC algorithms.
    Mac,
    /// Key-exchange algorithms.
    KeyExchange,
    /// Compression methods.
    Compression,
    /// Protocol versions.
    Version,
}

impl PriorityCategory {
    /// Returns all categories in the order a session lists them.
    #[must_use]
    pub fn all() -> &'static [PriorityCategory] {
        &[Self::Cipher, Self::Mac, Self::KeyExchange, Self::Compression, Self::Version]
    }
}

impl fmt::Display for PriorityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cipher => "cipher",
            Self::Mac => "mac",
            Self::KeyExchange => "key exchange",
            Self::Compression => "compression",
            Self::Version => "protocol version",
        };
        f.write_str(label)
    }
}

impl Algorithm for CipherAlgorithm {
    const CATEGORY: PriorityCategory = PriorityCategory::Cipher;

    fn id(self) -> u8 {
        self as u8
    }

    fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Null),
            2 => Some(Self::Arcfour),
            3 => Some(Self::TripleDesCbc),
            4 => Some(Self::Aes128Cbc),
            5 => Some(Self::TwofishCbc),
            6 => Some(Self::Aes256Cbc),
            _ => None,
        }
    }
}

impl Algorithm for MacAlgorithm {
    const CATEGORY: PriorityCategory = PriorityCategory::Mac;

    fn id(self) -> u8 {
        self as u8
    }

    fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Null),
            2 => Some(Self::Md5),
            3 => Some(Self::Sha),
            _ => None,
        }
    }
}

impl Algorithm for KxAlgorithm {
    const CATEGORY: PriorityCategory = PriorityCategory::KeyExchange;

    fn id(self) -> u8 {
        self as u8
    }

    fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::AnonDh),
            2 => Some(Self::Rsa),
            3 => Some(Self::DheDss),
            4 => Some(Self::DheRsa),
            5 => Some(Self::Srp),
            _ => None,
        }
    }
}

impl Algorithm for CompressionMethod {
    const CATEGORY: PriorityCategory = PriorityCategory::Compression;

    fn id(self) -> u8 {
        self as u8
    }

    fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Null),
            2 => Some(Self::Zlib),
            _ => None,
        }
    }
}

impl Algorithm for ProtocolVersion {
    const CATEGORY: PriorityCategory = PriorityCategory::Version;

    fn id(self) -> u8 {
        self as u8
    }

    fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Ssl3),
            2 => Some(Self::Tls1),
            0xff => Some(Self::Unknown),
            _ => None,
        }
    }
}
