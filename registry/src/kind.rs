//! Algorithm and extension classifications referenced by the tables.
//!
//! These are the typed values handed to the surrounding toolkit; the
//! implementations behind them live elsewhere. Absence of a value is
//! expressed with `Option`, not with a dedicated "none" variant.

/// Message digest family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MdKind {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Ripemd160,
}

/// Public key algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PkKind {
    Rsa,
    /// Unrestricted EC key (RFC 5480 id-ecPublicKey)
    EcKey,
    /// EC key restricted to ECDH
    EcKeyDh,
    Ecdsa,
    RsassaPss,
}

/// Symmetric cipher used by password-based encryption schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    DesCbc,
    /// Two-key triple DES
    DesEdeCbc,
    /// Three-key triple DES
    DesEde3Cbc,
}

/// Named elliptic curve group (RFC 5480, RFC 5639).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcGroup {
    Secp192r1,
    Secp224r1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
    Secp192k1,
    Secp224k1,
    Secp256k1,
    BrainpoolP256r1,
    BrainpoolP384r1,
    BrainpoolP512r1,
}

/// X.509 v3 extension classification.
///
/// Discriminants are distinct bit positions so a caller can record which
/// extensions a certificate carried in a single `u32` mask.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
    KeyUsage = 1 << 2,
    CertificatePolicies = 1 << 3,
    SubjectAltName = 1 << 5,
    BasicConstraints = 1 << 8,
    ExtendedKeyUsage = 1 << 11,
    NsCertType = 1 << 16,
}

impl ExtensionKind {
    /// Bit for presence masks.
    pub const fn bit(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::ExtensionKind;

    #[test]
    fn test_extension_kind_bits_are_distinct() {
        let kinds = [
            ExtensionKind::KeyUsage,
            ExtensionKind::CertificatePolicies,
            ExtensionKind::SubjectAltName,
            ExtensionKind::BasicConstraints,
            ExtensionKind::ExtendedKeyUsage,
            ExtensionKind::NsCertType,
        ];
        let mut mask = 0u32;
        for kind in kinds {
            assert_eq!(0, mask & kind.bit());
            mask |= kind.bit();
        }
    }
}
