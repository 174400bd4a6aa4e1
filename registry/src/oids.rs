//! DER content octets of the registered OIDs.
//!
//! Constants are grouped the way the tables consume them. Each doc comment
//! gives the dotted-decimal form.

// X.520 attribute types (2.5.4.*) and friends

/// id-at-commonName (2.5.4.3)
pub const AT_CN: &[u8] = &[0x55, 0x04, 0x03];
/// id-at-surName (2.5.4.4)
pub const AT_SUR_NAME: &[u8] = &[0x55, 0x04, 0x04];
/// id-at-serialNumber (2.5.4.5)
pub const AT_SERIAL_NUMBER: &[u8] = &[0x55, 0x04, 0x05];
/// id-at-countryName (2.5.4.6)
pub const AT_COUNTRY: &[u8] = &[0x55, 0x04, 0x06];
/// id-at-locality (2.5.4.7)
pub const AT_LOCALITY: &[u8] = &[0x55, 0x04, 0x07];
/// id-at-state (2.5.4.8)
pub const AT_STATE: &[u8] = &[0x55, 0x04, 0x08];
/// id-at-organizationName (2.5.4.10)
pub const AT_ORGANIZATION: &[u8] = &[0x55, 0x04, 0x0A];
/// id-at-organizationalUnitName (2.5.4.11)
pub const AT_ORG_UNIT: &[u8] = &[0x55, 0x04, 0x0B];
/// id-at-title (2.5.4.12)
pub const AT_TITLE: &[u8] = &[0x55, 0x04, 0x0C];
/// id-at-postalAddress (2.5.4.16)
pub const AT_POSTAL_ADDRESS: &[u8] = &[0x55, 0x04, 0x10];
/// id-at-postalCode (2.5.4.17)
pub const AT_POSTAL_CODE: &[u8] = &[0x55, 0x04, 0x11];
/// id-at-givenName (2.5.4.42)
pub const AT_GIVEN_NAME: &[u8] = &[0x55, 0x04, 0x2A];
/// id-at-initials (2.5.4.43)
pub const AT_INITIALS: &[u8] = &[0x55, 0x04, 0x2B];
/// id-at-generationQualifier (2.5.4.44)
pub const AT_GENERATION_QUALIFIER: &[u8] = &[0x55, 0x04, 0x2C];
/// id-at-uniqueIdentifier (2.5.4.45)
pub const AT_UNIQUE_IDENTIFIER: &[u8] = &[0x55, 0x04, 0x2D];
/// id-at-dnQualifier (2.5.4.46)
pub const AT_DN_QUALIFIER: &[u8] = &[0x55, 0x04, 0x2E];
/// id-at-pseudonym (2.5.4.65)
pub const AT_PSEUDONYM: &[u8] = &[0x55, 0x04, 0x41];
/// id-uid (0.9.2342.19200300.100.1.1)
pub const UID: &[u8] = &[0x09, 0x92, 0x26, 0x89, 0x93, 0xF2, 0x2C, 0x64, 0x01, 0x01];
/// id-domainComponent (0.9.2342.19200300.100.1.25)
pub const DOMAIN_COMPONENT: &[u8] = &[0x09, 0x92, 0x26, 0x89, 0x93, 0xF2, 0x2C, 0x64, 0x01, 0x19];
/// emailAddress (1.2.840.113549.1.9.1)
pub const PKCS9_EMAIL: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x09, 0x01];

// X.509 v3 extensions (2.5.29.*)

/// id-ce-keyUsage (2.5.29.15)
pub const KEY_USAGE: &[u8] = &[0x55, 0x1D, 0x0F];
/// id-ce-subjectAltName (2.5.29.17)
pub const SUBJECT_ALT_NAME: &[u8] = &[0x55, 0x1D, 0x11];
/// id-ce-basicConstraints (2.5.29.19)
pub const BASIC_CONSTRAINTS: &[u8] = &[0x55, 0x1D, 0x13];
/// id-ce-certificatePolicies (2.5.29.32)
pub const CERTIFICATE_POLICIES: &[u8] = &[0x55, 0x1D, 0x20];
/// anyPolicy (2.5.29.32.0)
pub const ANY_POLICY: &[u8] = &[0x55, 0x1D, 0x20, 0x00];
/// id-ce-extKeyUsage (2.5.29.37)
pub const EXTENDED_KEY_USAGE: &[u8] = &[0x55, 0x1D, 0x25];
/// id-netscape-certtype (2.16.840.1.113730.1.1)
pub const NS_CERT_TYPE: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x86, 0xF8, 0x42, 0x01, 0x01];

// Extended key usage purposes (1.3.6.1.5.5.7.3.*)

/// id-kp-serverAuth (1.3.6.1.5.5.7.3.1)
pub const SERVER_AUTH: &[u8] = &[0x2B, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x01];
/// id-kp-clientAuth (1.3.6.1.5.5.7.3.2)
pub const CLIENT_AUTH: &[u8] = &[0x2B, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x02];
/// id-kp-codeSigning (1.3.6.1.5.5.7.3.3)
pub const CODE_SIGNING: &[u8] = &[0x2B, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x03];
/// id-kp-emailProtection (1.3.6.1.5.5.7.3.4)
pub const EMAIL_PROTECTION: &[u8] = &[0x2B, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x04];
/// id-kp-timeStamping (1.3.6.1.5.5.7.3.8)
pub const TIME_STAMPING: &[u8] = &[0x2B, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x08];
/// id-kp-OCSPSigning (1.3.6.1.5.5.7.3.9)
pub const OCSP_SIGNING: &[u8] = &[0x2B, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x09];
/// id-kp-wisun-fan-device (1.3.6.1.4.1.45605.1)
pub const WISUN_FAN: &[u8] = &[0x2B, 0x06, 0x01, 0x04, 0x01, 0x82, 0xE4, 0x25, 0x01];

// Signature algorithms

/// md5WithRSAEncryption (1.2.840.113549.1.1.4)
pub const PKCS1_MD5: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x04];
/// sha1WithRSAEncryption (1.2.840.113549.1.1.5)
pub const PKCS1_SHA1: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x05];
/// sha224WithRSAEncryption (1.2.840.113549.1.1.14)
pub const PKCS1_SHA224: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0E];
/// sha256WithRSAEncryption (1.2.840.113549.1.1.11)
pub const PKCS1_SHA256: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0B];
/// sha384WithRSAEncryption (1.2.840.113549.1.1.12)
pub const PKCS1_SHA384: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0C];
/// sha512WithRSAEncryption (1.2.840.113549.1.1.13)
pub const PKCS1_SHA512: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0D];
/// id-RSASSA-PSS (1.2.840.113549.1.1.10)
pub const RSASSA_PSS: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0A];
/// Obsolete OIW sha-1WithRSAEncryption (1.3.14.3.2.29)
pub const RSA_SHA_OBS: &[u8] = &[0x2B, 0x0E, 0x03, 0x02, 0x1D];
/// ecdsa-with-SHA1 (1.2.840.10045.4.1)
pub const ECDSA_SHA1: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x04, 0x01];
/// ecdsa-with-SHA224 (1.2.840.10045.4.3.1)
pub const ECDSA_SHA224: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x04, 0x03, 0x01];
/// ecdsa-with-SHA256 (1.2.840.10045.4.3.2)
pub const ECDSA_SHA256: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x04, 0x03, 0x02];
/// ecdsa-with-SHA384 (1.2.840.10045.4.3.3)
pub const ECDSA_SHA384: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x04, 0x03, 0x03];
/// ecdsa-with-SHA512 (1.2.840.10045.4.3.4)
pub const ECDSA_SHA512: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x04, 0x03, 0x04];

// Public key algorithms

/// rsaEncryption (1.2.840.113549.1.1.1)
pub const PKCS1_RSA: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x01];
/// id-ecPublicKey (1.2.840.10045.2.1)
pub const EC_ALG_UNRESTRICTED: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01];
/// id-ecDH (1.3.132.1.12)
pub const EC_ALG_ECDH: &[u8] = &[0x2B, 0x81, 0x04, 0x01, 0x0C];

// Named elliptic curve groups

/// secp192r1 (1.2.840.10045.3.1.1)
pub const EC_GRP_SECP192R1: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x01];
/// secp224r1 (1.3.132.0.33)
pub const EC_GRP_SECP224R1: &[u8] = &[0x2B, 0x81, 0x04, 0x00, 0x21];
/// secp256r1 (1.2.840.10045.3.1.7)
pub const EC_GRP_SECP256R1: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07];
/// secp384r1 (1.3.132.0.34)
pub const EC_GRP_SECP384R1: &[u8] = &[0x2B, 0x81, 0x04, 0x00, 0x22];
/// secp521r1 (1.3.132.0.35)
pub const EC_GRP_SECP521R1: &[u8] = &[0x2B, 0x81, 0x04, 0x00, 0x23];
/// secp192k1 (1.3.132.0.31)
pub const EC_GRP_SECP192K1: &[u8] = &[0x2B, 0x81, 0x04, 0x00, 0x1F];
/// secp224k1 (1.3.132.0.32)
pub const EC_GRP_SECP224K1: &[u8] = &[0x2B, 0x81, 0x04, 0x00, 0x20];
/// secp256k1 (1.3.132.0.10)
pub const EC_GRP_SECP256K1: &[u8] = &[0x2B, 0x81, 0x04, 0x00, 0x0A];
/// brainpoolP256r1 (1.3.36.3.3.2.8.1.1.7)
pub const EC_GRP_BP256R1: &[u8] = &[0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01, 0x07];
/// brainpoolP384r1 (1.3.36.3.3.2.8.1.1.11)
pub const EC_GRP_BP384R1: &[u8] = &[0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01, 0x0B];
/// brainpoolP512r1 (1.3.36.3.3.2.8.1.1.13)
pub const EC_GRP_BP512R1: &[u8] = &[0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01, 0x0D];

// PBES2 ciphers

/// desCBC (1.3.14.3.2.7)
pub const DES_CBC: &[u8] = &[0x2B, 0x0E, 0x03, 0x02, 0x07];
/// des-ede3-cbc (1.2.840.113549.3.7)
pub const DES_EDE3_CBC: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x03, 0x07];

// Digest algorithms

/// id-md5 (1.2.840.113549.2.5)
pub const DIGEST_ALG_MD5: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x02, 0x05];
/// id-sha1 (1.3.14.3.2.26)
pub const DIGEST_ALG_SHA1: &[u8] = &[0x2B, 0x0E, 0x03, 0x02, 0x1A];
/// id-sha224 (2.16.840.1.101.3.4.2.4)
pub const DIGEST_ALG_SHA224: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x04];
/// id-sha256 (2.16.840.1.101.3.4.2.1)
pub const DIGEST_ALG_SHA256: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01];
/// id-sha384 (2.16.840.1.101.3.4.2.2)
pub const DIGEST_ALG_SHA384: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02];
/// id-sha512 (2.16.840.1.101.3.4.2.3)
pub const DIGEST_ALG_SHA512: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03];
/// id-ripemd160 (1.3.36.3.2.1)
pub const DIGEST_ALG_RIPEMD160: &[u8] = &[0x2B, 0x24, 0x03, 0x02, 0x01];

// HMAC digest algorithms (1.2.840.113549.2.*)

/// hmacSHA1 (1.2.840.113549.2.7)
pub const HMAC_SHA1: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x02, 0x07];
/// hmacSHA224 (1.2.840.113549.2.8)
pub const HMAC_SHA224: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x02, 0x08];
/// hmacSHA256 (1.2.840.113549.2.9)
pub const HMAC_SHA256: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x02, 0x09];
/// hmacSHA384 (1.2.840.113549.2.10)
pub const HMAC_SHA384: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x02, 0x0A];
/// hmacSHA512 (1.2.840.113549.2.11)
pub const HMAC_SHA512: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x02, 0x0B];

// PKCS#12 password-based encryption schemes (1.2.840.113549.1.12.1.*)

/// pbeWithSHAAnd3-KeyTripleDES-CBC (1.2.840.113549.1.12.1.3)
pub const PKCS12_PBE_SHA1_DES3_EDE_CBC: &[u8] =
    &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x0C, 0x01, 0x03];
/// pbeWithSHAAnd2-KeyTripleDES-CBC (1.2.840.113549.1.12.1.4)
pub const PKCS12_PBE_SHA1_DES2_EDE_CBC: &[u8] =
    &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x0C, 0x01, 0x04];
