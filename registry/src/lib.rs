//! Read-only object identifier descriptor tables for PKIX structures.
//!
//! Each table maps the DER content octets of an OID to its conventional
//! name, a description, and the typed attributes a certificate or key
//! parser needs (attribute short names, extension classifications,
//! algorithm families). Lookups are linear scans over small static tables;
//! a miss is the ordinary answer for an unrecognized OID and is reported as
//! `None`, never as an error.
//!
//! Queries take and return plain byte slices so the tables can be used on
//! OIDs straight out of parsed DER without copying.

pub mod descriptor;
pub mod kind;
pub mod oids;

mod alg;
mod x509;

pub use alg::{
    cipher_alg, ec_group, md_alg, md_hmac, oid_by_ec_group, oid_by_md_alg, oid_by_pk_alg,
    oid_by_sig_alg, pk_alg, pkcs12_pbe_alg, sig_alg, sig_alg_description,
};
pub use descriptor::{find_by_oid, Descriptor, OidEntry};
pub use kind::{CipherKind, EcGroup, ExtensionKind, MdKind, PkKind};
pub use x509::{attr_short_name, certificate_policy_description, ext_key_usage_description, ext_kind};
