//! Generic descriptor record and table scan.
//!
//! Every table in this crate is a static slice of records that start with a
//! [`Descriptor`]. Record types differ only in the extra attributes they
//! carry, so a single scan routine generic over [`OidEntry`] serves all of
//! them.

/// Metadata common to every table record: the DER content octets of the
/// OID, its conventional name, and a human-readable description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    oid: &'static [u8],
    name: &'static str,
    description: &'static str,
}

impl Descriptor {
    pub const fn new(
        oid: &'static [u8],
        name: &'static str,
        description: &'static str,
    ) -> Self {
        Descriptor {
            oid,
            name,
            description,
        }
    }

    /// DER content octets of the OID.
    pub fn oid(&self) -> &'static [u8] {
        self.oid
    }

    /// Conventional name, e.g. `id-at-commonName`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable description, e.g. `Common Name`.
    pub fn description(&self) -> &'static str {
        self.description
    }
}

/// A table record keyed by its descriptor's OID.
pub trait OidEntry {
    fn descriptor(&self) -> &Descriptor;
}

// Tables without extra attributes use the descriptor as the whole record.
impl OidEntry for Descriptor {
    fn descriptor(&self) -> &Descriptor {
        self
    }
}

/// Returns the first record whose OID matches `oid` byte for byte.
///
/// An empty query never matches. Lookup misses are an ordinary outcome;
/// callers decide how to treat unrecognized OIDs.
pub fn find_by_oid<'a, T: OidEntry>(table: &'a [T], oid: &[u8]) -> Option<&'a T> {
    if oid.is_empty() {
        return None;
    }
    table.iter().find(|entry| entry.descriptor().oid == oid)
}

/// Returns the OID of the first record matching `pred`.
pub(crate) fn find_oid<T: OidEntry>(
    table: &[T],
    pred: impl FnMut(&&T) -> bool,
) -> Option<&'static [u8]> {
    table.iter().find(pred).map(|entry| entry.descriptor().oid)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{find_by_oid, Descriptor};

    static TABLE: &[Descriptor] = &[
        Descriptor::new(&[0x55, 0x04, 0x03], "id-at-commonName", "Common Name"),
        Descriptor::new(&[0x55, 0x04, 0x06], "id-at-countryName", "Country"),
    ];

    static EMPTY: &[Descriptor] = &[];

    #[rstest]
    #[case::first(&[0x55, 0x04, 0x03], Some("id-at-commonName"))]
    #[case::second(&[0x55, 0x04, 0x06], Some("id-at-countryName"))]
    #[case::unknown(&[0x55, 0x04, 0x07], None)]
    #[case::prefix_is_not_a_match(&[0x55, 0x04], None)]
    #[case::longer_is_not_a_match(&[0x55, 0x04, 0x03, 0x00], None)]
    #[case::empty_query(&[], None)]
    fn test_find_by_oid(#[case] query: &[u8], #[case] expected: Option<&str>) {
        let found = find_by_oid(TABLE, query).map(|d| d.name());
        assert_eq!(expected, found);
    }

    #[test]
    fn test_find_by_oid_empty_table() {
        assert!(find_by_oid(EMPTY, &[0x55, 0x04, 0x03]).is_none());
        assert!(find_by_oid(EMPTY, &[]).is_none());
    }
}
