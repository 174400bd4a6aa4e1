//! Signature, public key, elliptic curve group, cipher, digest, HMAC and
//! PKCS#12 PBE algorithm tables.

use crate::descriptor::{find_by_oid, find_oid, Descriptor, OidEntry};
use crate::kind::{CipherKind, EcGroup, MdKind, PkKind};
use crate::oids;

/// SignatureAlgorithmIdentifier record.
///
/// RSASSA-PSS carries `md: None`: its digest is chosen by the algorithm
/// parameters, not by the OID.
struct SigAlg {
    descriptor: Descriptor,
    md: Option<MdKind>,
    pk: PkKind,
}

impl OidEntry for SigAlg {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

static SIG_ALGS: &[SigAlg] = &[
    SigAlg {
        descriptor: Descriptor::new(oids::PKCS1_MD5, "md5WithRSAEncryption", "RSA with MD5"),
        md: Some(MdKind::Md5),
        pk: PkKind::Rsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::PKCS1_SHA1, "sha-1WithRSAEncryption", "RSA with SHA1"),
        md: Some(MdKind::Sha1),
        pk: PkKind::Rsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::PKCS1_SHA224, "sha224WithRSAEncryption", "RSA with SHA-224"),
        md: Some(MdKind::Sha224),
        pk: PkKind::Rsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::PKCS1_SHA256, "sha256WithRSAEncryption", "RSA with SHA-256"),
        md: Some(MdKind::Sha256),
        pk: PkKind::Rsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::PKCS1_SHA384, "sha384WithRSAEncryption", "RSA with SHA-384"),
        md: Some(MdKind::Sha384),
        pk: PkKind::Rsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::PKCS1_SHA512, "sha512WithRSAEncryption", "RSA with SHA-512"),
        md: Some(MdKind::Sha512),
        pk: PkKind::Rsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::RSA_SHA_OBS, "sha-1WithRSAEncryption", "RSA with SHA1"),
        md: Some(MdKind::Sha1),
        pk: PkKind::Rsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::ECDSA_SHA1, "ecdsa-with-SHA1", "ECDSA with SHA1"),
        md: Some(MdKind::Sha1),
        pk: PkKind::Ecdsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::ECDSA_SHA224, "ecdsa-with-SHA224", "ECDSA with SHA224"),
        md: Some(MdKind::Sha224),
        pk: PkKind::Ecdsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::ECDSA_SHA256, "ecdsa-with-SHA256", "ECDSA with SHA256"),
        md: Some(MdKind::Sha256),
        pk: PkKind::Ecdsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::ECDSA_SHA384, "ecdsa-with-SHA384", "ECDSA with SHA384"),
        md: Some(MdKind::Sha384),
        pk: PkKind::Ecdsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::ECDSA_SHA512, "ecdsa-with-SHA512", "ECDSA with SHA512"),
        md: Some(MdKind::Sha512),
        pk: PkKind::Ecdsa,
    },
    SigAlg {
        descriptor: Descriptor::new(oids::RSASSA_PSS, "RSASSA-PSS", "RSASSA-PSS"),
        md: None,
        pk: PkKind::RsassaPss,
    },
];

/// Returns the (digest, public key) pair for a signature algorithm OID.
pub fn sig_alg(oid: &[u8]) -> Option<(Option<MdKind>, PkKind)> {
    find_by_oid(SIG_ALGS, oid).map(|alg| (alg.md, alg.pk))
}

/// Returns the description of a signature algorithm OID.
pub fn sig_alg_description(oid: &[u8]) -> Option<&'static str> {
    find_by_oid(SIG_ALGS, oid).map(|alg| alg.descriptor.description())
}

/// Returns the OID of the signature algorithm built from `pk` and `md`.
pub fn oid_by_sig_alg(pk: PkKind, md: Option<MdKind>) -> Option<&'static [u8]> {
    find_oid(SIG_ALGS, |alg| alg.pk == pk && alg.md == md)
}

/// PublicKeyInfo record (PKCS#1, RFC 5480).
struct PkAlg {
    descriptor: Descriptor,
    pk: PkKind,
}

impl OidEntry for PkAlg {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

static PK_ALGS: &[PkAlg] = &[
    PkAlg {
        descriptor: Descriptor::new(oids::PKCS1_RSA, "rsaEncryption", "RSA"),
        pk: PkKind::Rsa,
    },
    PkAlg {
        descriptor: Descriptor::new(oids::EC_ALG_UNRESTRICTED, "id-ecPublicKey", "Generic EC key"),
        pk: PkKind::EcKey,
    },
    PkAlg {
        descriptor: Descriptor::new(oids::EC_ALG_ECDH, "id-ecDH", "EC key for ECDH"),
        pk: PkKind::EcKeyDh,
    },
];

/// Returns the public key family for a SubjectPublicKeyInfo algorithm OID.
pub fn pk_alg(oid: &[u8]) -> Option<PkKind> {
    find_by_oid(PK_ALGS, oid).map(|alg| alg.pk)
}

/// Returns the OID for a public key family.
pub fn oid_by_pk_alg(pk: PkKind) -> Option<&'static [u8]> {
    find_oid(PK_ALGS, |alg| alg.pk == pk)
}

/// namedCurve record (RFC 5480).
struct NamedCurve {
    descriptor: Descriptor,
    group: EcGroup,
}

impl OidEntry for NamedCurve {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

static NAMED_CURVES: &[NamedCurve] = &[
    NamedCurve {
        descriptor: Descriptor::new(oids::EC_GRP_SECP192R1, "secp192r1", "secp192r1"),
        group: EcGroup::Secp192r1,
    },
    NamedCurve {
        descriptor: Descriptor::new(oids::EC_GRP_SECP224R1, "secp224r1", "secp224r1"),
        group: EcGroup::Secp224r1,
    },
    NamedCurve {
        descriptor: Descriptor::new(oids::EC_GRP_SECP256R1, "secp256r1", "secp256r1"),
        group: EcGroup::Secp256r1,
    },
    NamedCurve {
        descriptor: Descriptor::new(oids::EC_GRP_SECP384R1, "secp384r1", "secp384r1"),
        group: EcGroup::Secp384r1,
    },
    NamedCurve {
        descriptor: Descriptor::new(oids::EC_GRP_SECP521R1, "secp521r1", "secp521r1"),
        group: EcGroup::Secp521r1,
    },
    NamedCurve {
        descriptor: Descriptor::new(oids::EC_GRP_SECP192K1, "secp192k1", "secp192k1"),
        group: EcGroup::Secp192k1,
    },
    NamedCurve {
        descriptor: Descriptor::new(oids::EC_GRP_SECP224K1, "secp224k1", "secp224k1"),
        group: EcGroup::Secp224k1,
    },
    NamedCurve {
        descriptor: Descriptor::new(oids::EC_GRP_SECP256K1, "secp256k1", "secp256k1"),
        group: EcGroup::Secp256k1,
    },
    NamedCurve {
        descriptor: Descriptor::new(oids::EC_GRP_BP256R1, "brainpoolP256r1", "brainpool256r1"),
        group: EcGroup::BrainpoolP256r1,
    },
    NamedCurve {
        descriptor: Descriptor::new(oids::EC_GRP_BP384R1, "brainpoolP384r1", "brainpool384r1"),
        group: EcGroup::BrainpoolP384r1,
    },
    NamedCurve {
        descriptor: Descriptor::new(oids::EC_GRP_BP512R1, "brainpoolP512r1", "brainpool512r1"),
        group: EcGroup::BrainpoolP512r1,
    },
];

/// Returns the named curve group for an EC namedCurve OID.
pub fn ec_group(oid: &[u8]) -> Option<EcGroup> {
    find_by_oid(NAMED_CURVES, oid).map(|curve| curve.group)
}

/// Returns the OID for a named curve group.
pub fn oid_by_ec_group(group: EcGroup) -> Option<&'static [u8]> {
    find_oid(NAMED_CURVES, |curve| curve.group == group)
}

/// PKCS#5 PBES2 encryption scheme record.
struct CipherAlg {
    descriptor: Descriptor,
    cipher: CipherKind,
}

impl OidEntry for CipherAlg {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

static CIPHER_ALGS: &[CipherAlg] = &[
    CipherAlg {
        descriptor: Descriptor::new(oids::DES_CBC, "desCBC", "DES-CBC"),
        cipher: CipherKind::DesCbc,
    },
    CipherAlg {
        descriptor: Descriptor::new(oids::DES_EDE3_CBC, "des-ede3-cbc", "DES-EDE3-CBC"),
        cipher: CipherKind::DesEde3Cbc,
    },
];

/// Returns the cipher for a PBES2 encryption scheme OID.
pub fn cipher_alg(oid: &[u8]) -> Option<CipherKind> {
    find_by_oid(CIPHER_ALGS, oid).map(|alg| alg.cipher)
}

/// digestAlgorithm record.
struct MdAlg {
    descriptor: Descriptor,
    md: MdKind,
}

impl OidEntry for MdAlg {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

static MD_ALGS: &[MdAlg] = &[
    MdAlg {
        descriptor: Descriptor::new(oids::DIGEST_ALG_MD5, "id-md5", "MD5"),
        md: MdKind::Md5,
    },
    MdAlg {
        descriptor: Descriptor::new(oids::DIGEST_ALG_SHA1, "id-sha1", "SHA-1"),
        md: MdKind::Sha1,
    },
    MdAlg {
        descriptor: Descriptor::new(oids::DIGEST_ALG_SHA224, "id-sha224", "SHA-224"),
        md: MdKind::Sha224,
    },
    MdAlg {
        descriptor: Descriptor::new(oids::DIGEST_ALG_SHA256, "id-sha256", "SHA-256"),
        md: MdKind::Sha256,
    },
    MdAlg {
        descriptor: Descriptor::new(oids::DIGEST_ALG_SHA384, "id-sha384", "SHA-384"),
        md: MdKind::Sha384,
    },
    MdAlg {
        descriptor: Descriptor::new(oids::DIGEST_ALG_SHA512, "id-sha512", "SHA-512"),
        md: MdKind::Sha512,
    },
    MdAlg {
        descriptor: Descriptor::new(oids::DIGEST_ALG_RIPEMD160, "id-ripemd160", "RIPEMD-160"),
        md: MdKind::Ripemd160,
    },
];

/// Returns the digest family for a digestAlgorithm OID.
pub fn md_alg(oid: &[u8]) -> Option<MdKind> {
    find_by_oid(MD_ALGS, oid).map(|alg| alg.md)
}

/// Returns the OID for a digest family.
pub fn oid_by_md_alg(md: MdKind) -> Option<&'static [u8]> {
    find_oid(MD_ALGS, |alg| alg.md == md)
}

/// HMAC digestAlgorithm record.
struct MdHmac {
    descriptor: Descriptor,
    md: MdKind,
}

impl OidEntry for MdHmac {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

static MD_HMACS: &[MdHmac] = &[
    MdHmac {
        descriptor: Descriptor::new(oids::HMAC_SHA1, "hmacSHA1", "HMAC-SHA-1"),
        md: MdKind::Sha1,
    },
    MdHmac {
        descriptor: Descriptor::new(oids::HMAC_SHA224, "hmacSHA224", "HMAC-SHA-224"),
        md: MdKind::Sha224,
    },
    MdHmac {
        descriptor: Descriptor::new(oids::HMAC_SHA256, "hmacSHA256", "HMAC-SHA-256"),
        md: MdKind::Sha256,
    },
    MdHmac {
        descriptor: Descriptor::new(oids::HMAC_SHA384, "hmacSHA384", "HMAC-SHA-384"),
        md: MdKind::Sha384,
    },
    MdHmac {
        descriptor: Descriptor::new(oids::HMAC_SHA512, "hmacSHA512", "HMAC-SHA-512"),
        md: MdKind::Sha512,
    },
];

/// Returns the underlying digest family for an HMAC digestAlgorithm OID.
pub fn md_hmac(oid: &[u8]) -> Option<MdKind> {
    find_by_oid(MD_HMACS, oid).map(|alg| alg.md)
}

/// PKCS#12 PBE record pairing a digest with a cipher.
struct Pkcs12PbeAlg {
    descriptor: Descriptor,
    md: MdKind,
    cipher: CipherKind,
}

impl OidEntry for Pkcs12PbeAlg {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

static PKCS12_PBE_ALGS: &[Pkcs12PbeAlg] = &[
    Pkcs12PbeAlg {
        descriptor: Descriptor::new(
            oids::PKCS12_PBE_SHA1_DES3_EDE_CBC,
            "pbeWithSHAAnd3-KeyTripleDES-CBC",
            "PBE with SHA1 and 3-Key 3DES",
        ),
        md: MdKind::Sha1,
        cipher: CipherKind::DesEde3Cbc,
    },
    Pkcs12PbeAlg {
        descriptor: Descriptor::new(
            oids::PKCS12_PBE_SHA1_DES2_EDE_CBC,
            "pbeWithSHAAnd2-KeyTripleDES-CBC",
            "PBE with SHA1 and 2-Key 3DES",
        ),
        md: MdKind::Sha1,
        cipher: CipherKind::DesEdeCbc,
    },
];

/// Returns the (digest, cipher) pair for a PKCS#12 PBE OID.
pub fn pkcs12_pbe_alg(oid: &[u8]) -> Option<(MdKind, CipherKind)> {
    find_by_oid(PKCS12_PBE_ALGS, oid).map(|alg| (alg.md, alg.cipher))
}
