//! X.520 attribute type, X.509 extension, extended key usage and
//! certificate policy tables.

use crate::descriptor::{find_by_oid, Descriptor, OidEntry};
use crate::kind::ExtensionKind;
use crate::oids;

/// X.520 AttributeType record with its abbreviated name.
struct X520Attr {
    descriptor: Descriptor,
    short_name: &'static str,
}

impl OidEntry for X520Attr {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

static X520_ATTR_TYPES: &[X520Attr] = &[
    X520Attr {
        descriptor: Descriptor::new(oids::AT_CN, "id-at-commonName", "Common Name"),
        short_name: "CN",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_COUNTRY, "id-at-countryName", "Country"),
        short_name: "C",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_LOCALITY, "id-at-locality", "Locality"),
        short_name: "L",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_STATE, "id-at-state", "State"),
        short_name: "ST",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_ORGANIZATION, "id-at-organizationName", "Organization"),
        short_name: "O",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_ORG_UNIT, "id-at-organizationalUnitName", "Org Unit"),
        short_name: "OU",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::PKCS9_EMAIL, "emailAddress", "E-mail address"),
        short_name: "emailAddress",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_SERIAL_NUMBER, "id-at-serialNumber", "Serial number"),
        short_name: "serialNumber",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_POSTAL_ADDRESS, "id-at-postalAddress", "Postal address"),
        short_name: "postalAddress",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_POSTAL_CODE, "id-at-postalCode", "Postal code"),
        short_name: "postalCode",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_SUR_NAME, "id-at-surName", "Surname"),
        short_name: "SN",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_GIVEN_NAME, "id-at-givenName", "Given name"),
        short_name: "GN",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_INITIALS, "id-at-initials", "Initials"),
        short_name: "initials",
    },
    X520Attr {
        descriptor: Descriptor::new(
            oids::AT_GENERATION_QUALIFIER,
            "id-at-generationQualifier",
            "Generation qualifier",
        ),
        short_name: "generationQualifier",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_TITLE, "id-at-title", "Title"),
        short_name: "title",
    },
    X520Attr {
        descriptor: Descriptor::new(
            oids::AT_DN_QUALIFIER,
            "id-at-dnQualifier",
            "Distinguished Name qualifier",
        ),
        short_name: "dnQualifier",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::AT_PSEUDONYM, "id-at-pseudonym", "Pseudonym"),
        short_name: "pseudonym",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::UID, "id-uid", "User Id"),
        short_name: "uid",
    },
    X520Attr {
        descriptor: Descriptor::new(oids::DOMAIN_COMPONENT, "id-domainComponent", "Domain component"),
        short_name: "DC",
    },
    X520Attr {
        descriptor: Descriptor::new(
            oids::AT_UNIQUE_IDENTIFIER,
            "id-at-uniqueIdentifier",
            "Unique Identifier",
        ),
        short_name: "uniqueIdentifier",
    },
];

/// Returns the abbreviated attribute name ("CN", "O", ...) for an
/// AttributeType OID.
pub fn attr_short_name(oid: &[u8]) -> Option<&'static str> {
    find_by_oid(X520_ATTR_TYPES, oid).map(|attr| attr.short_name)
}

/// X.509 v3 extension record with its classification.
struct X509Ext {
    descriptor: Descriptor,
    kind: ExtensionKind,
}

impl OidEntry for X509Ext {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

static X509_EXTENSIONS: &[X509Ext] = &[
    X509Ext {
        descriptor: Descriptor::new(
            oids::BASIC_CONSTRAINTS,
            "id-ce-basicConstraints",
            "Basic Constraints",
        ),
        kind: ExtensionKind::BasicConstraints,
    },
    X509Ext {
        descriptor: Descriptor::new(oids::KEY_USAGE, "id-ce-keyUsage", "Key Usage"),
        kind: ExtensionKind::KeyUsage,
    },
    X509Ext {
        descriptor: Descriptor::new(
            oids::EXTENDED_KEY_USAGE,
            "id-ce-extKeyUsage",
            "Extended Key Usage",
        ),
        kind: ExtensionKind::ExtendedKeyUsage,
    },
    X509Ext {
        descriptor: Descriptor::new(
            oids::SUBJECT_ALT_NAME,
            "id-ce-subjectAltName",
            "Subject Alt Name",
        ),
        kind: ExtensionKind::SubjectAltName,
    },
    X509Ext {
        descriptor: Descriptor::new(
            oids::NS_CERT_TYPE,
            "id-netscape-certtype",
            "Netscape Certificate Type",
        ),
        kind: ExtensionKind::NsCertType,
    },
    X509Ext {
        descriptor: Descriptor::new(
            oids::CERTIFICATE_POLICIES,
            "id-ce-certificatePolicies",
            "Certificate Policies",
        ),
        kind: ExtensionKind::CertificatePolicies,
    },
];

/// Returns the classification for an X.509 v3 extension OID.
pub fn ext_kind(oid: &[u8]) -> Option<ExtensionKind> {
    find_by_oid(X509_EXTENSIONS, oid).map(|ext| ext.kind)
}

static EXT_KEY_USAGE: &[Descriptor] = &[
    Descriptor::new(
        oids::SERVER_AUTH,
        "id-kp-serverAuth",
        "TLS Web Server Authentication",
    ),
    Descriptor::new(
        oids::CLIENT_AUTH,
        "id-kp-clientAuth",
        "TLS Web Client Authentication",
    ),
    Descriptor::new(oids::CODE_SIGNING, "id-kp-codeSigning", "Code Signing"),
    Descriptor::new(oids::EMAIL_PROTECTION, "id-kp-emailProtection", "E-mail Protection"),
    Descriptor::new(oids::TIME_STAMPING, "id-kp-timeStamping", "Time Stamping"),
    Descriptor::new(oids::OCSP_SIGNING, "id-kp-OCSPSigning", "OCSP Signing"),
    Descriptor::new(
        oids::WISUN_FAN,
        "id-kp-wisun-fan-device",
        "Wi-SUN Alliance Field Area Network (FAN)",
    ),
];

/// Returns the description of an extended key usage purpose OID.
pub fn ext_key_usage_description(oid: &[u8]) -> Option<&'static str> {
    find_by_oid(EXT_KEY_USAGE, oid).map(|desc| desc.description())
}

static CERTIFICATE_POLICIES: &[Descriptor] =
    &[Descriptor::new(oids::ANY_POLICY, "anyPolicy", "Any Policy")];

/// Returns the description of a certificate policy OID.
pub fn certificate_policy_description(oid: &[u8]) -> Option<&'static str> {
    find_by_oid(CERTIFICATE_POLICIES, oid).map(|desc| desc.description())
}
