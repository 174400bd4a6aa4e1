//! Cross-checks the table constants against the codec: every registered
//! OID must decode to its documented dotted form, and encoding that form
//! must reproduce the table bytes.

use std::str::FromStr;

use oid::{numeric_string, Oid};
use registry::oids;
use rstest::rstest;

#[rstest]
#[case::common_name(oids::AT_CN, "2.5.4.3")]
#[case::country(oids::AT_COUNTRY, "2.5.4.6")]
#[case::pseudonym(oids::AT_PSEUDONYM, "2.5.4.65")]
#[case::uid(oids::UID, "0.9.2342.19200300.100.1.1")]
#[case::domain_component(oids::DOMAIN_COMPONENT, "0.9.2342.19200300.100.1.25")]
#[case::email(oids::PKCS9_EMAIL, "1.2.840.113549.1.9.1")]
#[case::key_usage(oids::KEY_USAGE, "2.5.29.15")]
#[case::basic_constraints(oids::BASIC_CONSTRAINTS, "2.5.29.19")]
#[case::any_policy(oids::ANY_POLICY, "2.5.29.32.0")]
#[case::ns_cert_type(oids::NS_CERT_TYPE, "2.16.840.1.113730.1.1")]
#[case::server_auth(oids::SERVER_AUTH, "1.3.6.1.5.5.7.3.1")]
#[case::wisun_fan(oids::WISUN_FAN, "1.3.6.1.4.1.45605.1")]
#[case::rsa_sha256(oids::PKCS1_SHA256, "1.2.840.113549.1.1.11")]
#[case::rsassa_pss(oids::RSASSA_PSS, "1.2.840.113549.1.1.10")]
#[case::rsa_sha1_obsolete(oids::RSA_SHA_OBS, "1.3.14.3.2.29")]
#[case::ecdsa_sha256(oids::ECDSA_SHA256, "1.2.840.10045.4.3.2")]
#[case::rsa(oids::PKCS1_RSA, "1.2.840.113549.1.1.1")]
#[case::ec_public_key(oids::EC_ALG_UNRESTRICTED, "1.2.840.10045.2.1")]
#[case::ec_dh(oids::EC_ALG_ECDH, "1.3.132.1.12")]
#[case::secp256r1(oids::EC_GRP_SECP256R1, "1.2.840.10045.3.1.7")]
#[case::secp384r1(oids::EC_GRP_SECP384R1, "1.3.132.0.34")]
#[case::brainpool512(oids::EC_GRP_BP512R1, "1.3.36.3.3.2.8.1.1.13")]
#[case::des_cbc(oids::DES_CBC, "1.3.14.3.2.7")]
#[case::des_ede3_cbc(oids::DES_EDE3_CBC, "1.2.840.113549.3.7")]
#[case::sha256(oids::DIGEST_ALG_SHA256, "2.16.840.1.101.3.4.2.1")]
#[case::ripemd160(oids::DIGEST_ALG_RIPEMD160, "1.3.36.3.2.1")]
#[case::hmac_sha256(oids::HMAC_SHA256, "1.2.840.113549.2.9")]
#[case::pbe_des3(oids::PKCS12_PBE_SHA1_DES3_EDE_CBC, "1.2.840.113549.1.12.1.3")]
#[case::pbe_des2(oids::PKCS12_PBE_SHA1_DES2_EDE_CBC, "1.2.840.113549.1.12.1.4")]
fn test_table_oid_matches_dotted_form(#[case] bytes: &[u8], #[case] dotted: &str) {
    assert_eq!(dotted, numeric_string(bytes).unwrap());

    let encoded = Oid::from_str(dotted).unwrap();
    assert_eq!(bytes, encoded.as_bytes());
}

#[test]
fn test_registry_lookup_after_codec_roundtrip() {
    // A dotted string from configuration resolves to the same record as
    // the table bytes.
    let oid = Oid::from_str("1.2.840.113549.1.1.11").unwrap();
    assert_eq!(
        Some("RSA with SHA-256"),
        registry::sig_alg_description(oid.as_bytes())
    );
}
