//! Key exchange ↔ credential type mapping.

use algo_types::{CredentialType, KxAlgorithm};

use crate::tables::CREDENTIAL_MAPPINGS;

/// Returns the credential family a key exchange needs.
#[must_use]
pub fn kx_credential_type(kx: KxAlgorithm) -> Option<CredentialType> {
    CREDENTIAL_MAPPINGS.iter().find(|mapping| mapping.kx == kx).map(|mapping| mapping.credential)
}

/// Returns the first key exchange declared for a credential family.
///
/// Several key exchanges share [`CredentialType::Certificate`]; the table's
/// first entry (RSA) wins.
#[must_use]
pub fn credential_type_kx(credential: CredentialType) -> Option<KxAlgorithm> {
    CREDENTIAL_MAPPINGS
        .iter()
        .find(|mapping| mapping.credential == credential)
        .map(|mapping| mapping.kx)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_kx_to_credential() {
        assert_eq!(kx_credential_type(KxAlgorithm::AnonDh), Some(CredentialType::Anon));
        assert_eq!(kx_credential_type(KxAlgorithm::DheDss), Some(CredentialType::Certificate));
        assert_eq!(kx_credential_type(KxAlgorithm::Srp), Some(CredentialType::Srp));
    }

    #[test]
    fn test_credential_to_first_kx() {
        assert_eq!(credential_type_kx(CredentialType::Certificate), Some(KxAlgorithm::Rsa));
        assert_eq!(credential_type_kx(CredentialType::Anon), Some(KxAlgorithm::AnonDh));
        assert_eq!(credential_type_kx(CredentialType::Srp), Some(KxAlgorithm::Srp));
    }
}
