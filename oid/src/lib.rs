//! Object identifier codec.
//!
//! Converts between the DER content octets of an OBJECT IDENTIFIER (a
//! sequence of base-128 subidentifiers with continuation bits) and the
//! dotted-decimal text form such as `1.2.840.113549.1.1.11`.
//!
//! The first two components share one subidentifier encoded as
//! `40 * first + second`, so a single-subidentifier OID still names two
//! components. Non-canonical (overlong) encodings are rejected rather than
//! normalized.
//!
//! Subidentifier values are accumulated in a `u64`. X.690 places no upper
//! bound on arc values; the 64-bit limit is a limit of this implementation,
//! and larger arcs are rejected with [`error::Error::ArcTooLarge`].

use std::fmt::{self, Display, Write};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod error;

use error::Error;

/// Largest accumulator value that can take another 7-bit group without
/// overflowing.
const ARC_SHIFT_LIMIT: u64 = u64::MAX >> 7;

/// An object identifier held as its DER content octets.
///
/// The encoding is validated on construction, so a held `Oid` always
/// renders as a dotted-decimal string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oid {
    inner: Vec<u8>,
}

impl Oid {
    /// Returns the DER content octets.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Consumes self and returns the DER content octets.
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }

    /// Writes the dotted-decimal form into `out` and returns the number of
    /// bytes written.
    ///
    /// Fails with [`error::Error::BufferTooSmall`] if `out` cannot hold the
    /// whole string; anything already written to `out` must be discarded in
    /// that case.
    pub fn write_numeric(&self, out: &mut [u8]) -> Result<usize, Error> {
        write_numeric(&self.inner, out)
    }
}

impl AsRef<[u8]> for Oid {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl TryFrom<&[u8]> for Oid {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        format_numeric(value, &mut Discard)?;
        Ok(Oid {
            inner: value.to_vec(),
        })
    }
}

impl TryFrom<Vec<u8>> for Oid {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        format_numeric(&value, &mut Discard)?;
        Ok(Oid { inner: value })
    }
}

impl FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encode_numeric(s).map(|inner| Oid { inner })
    }
}

impl Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_numeric(&self.inner, f).map_err(|_| fmt::Error)
    }
}

impl PartialEq<&str> for Oid {
    fn eq(&self, other: &&str) -> bool {
        numeric_string(&self.inner)
            .map(|s| s == *other)
            .unwrap_or(false)
    }
}

impl PartialEq<Oid> for &str {
    fn eq(&self, other: &Oid) -> bool {
        other == self
    }
}

impl Serialize for Oid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = numeric_string(&self.inner).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Oid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Returns the dotted-decimal form of the DER content octets `oid`.
pub fn numeric_string(oid: &[u8]) -> Result<String, Error> {
    let mut s = String::new();
    format_numeric(oid, &mut s)?;
    Ok(s)
}

/// Writes the dotted-decimal form of the DER content octets `oid` into
/// `out` and returns the number of bytes written.
pub fn write_numeric(oid: &[u8], out: &mut [u8]) -> Result<usize, Error> {
    let mut w = SliceWriter { out, written: 0 };
    format_numeric(oid, &mut w)?;
    Ok(w.written)
}

fn format_numeric<W: Write>(oid: &[u8], w: &mut W) -> Result<(), Error> {
    if oid.is_empty() {
        return Err(Error::Empty);
    }
    // A leading 0x80 byte would encode the first subidentifier with a
    // leading zero group.
    if oid[0] == 0x80 {
        return Err(Error::Overlong);
    }

    // First subidentifier carries the first two components.
    let mut i = 0;
    let mut value = 0u64;
    while i < oid.len() && oid[i] & 0x80 != 0 {
        if value > ARC_SHIFT_LIMIT {
            return Err(Error::ArcTooLarge);
        }
        value = (value << 7) | u64::from(oid[i] & 0x7f);
        i += 1;
    }
    if i >= oid.len() {
        return Err(Error::Truncated);
    }
    if value > ARC_SHIFT_LIMIT {
        return Err(Error::ArcTooLarge);
    }
    value = (value << 7) | u64::from(oid[i] & 0x7f);
    i += 1;

    // Root arcs 0 and 1 have at most 40 children each; any excess belongs
    // to the second component under root arc 2.
    let component1 = (value / 40).min(2);
    let component2 = value - 40 * component1;
    write!(w, "{}.{}", component1, component2).map_err(|_| Error::BufferTooSmall)?;

    value = 0;
    let mut pending = false;
    for &byte in &oid[i..] {
        if value > ARC_SHIFT_LIMIT {
            return Err(Error::ArcTooLarge);
        }
        if value == 0 && byte == 0x80 {
            return Err(Error::Overlong);
        }
        value = (value << 7) | u64::from(byte & 0x7f);
        if byte & 0x80 == 0 {
            write!(w, ".{}", value).map_err(|_| Error::BufferTooSmall)?;
            value = 0;
            pending = false;
        } else {
            pending = true;
        }
    }
    if pending {
        return Err(Error::Truncated);
    }
    Ok(())
}

/// Encodes a dotted-decimal string into DER content octets.
///
/// Two passes: the first validates every component and computes the exact
/// encoded length, the second allocates once and writes the subidentifiers.
fn encode_numeric(s: &str) -> Result<Vec<u8>, Error> {
    let mut parts = s.split('.');

    let component1 = parse_component(parts.next().unwrap_or(""))?;
    if component1 > 2 {
        return Err(Error::RootArcOutOfRange);
    }
    let component2 = match parts.next() {
        Some(part) => parse_component(part)?,
        None => return Err(Error::TooFewComponents),
    };
    if component1 < 2 && component2 > 39 {
        return Err(Error::SecondArcOutOfRange);
    }
    // component1 is at most 2, but component2 may take the sum past u64.
    let first = (component1 * 40)
        .checked_add(component2)
        .ok_or(Error::ArcTooLarge)?;

    let mut encoded_len = subid_num_bytes(first);
    for part in parts.clone() {
        let value = parse_component(part)?;
        encoded_len = encoded_len
            .checked_add(subid_num_bytes(value))
            .ok_or(Error::LengthOverflow)?;
    }

    let mut buf = Vec::new();
    buf.try_reserve_exact(encoded_len).map_err(Error::Alloc)?;
    buf.resize(encoded_len, 0);

    let mut pos = 0;
    encode_subid(&mut buf, &mut pos, first)?;
    for part in parts {
        // Already validated in the first pass.
        let value = parse_component(part)?;
        encode_subid(&mut buf, &mut pos, value)?;
    }

    Ok(buf)
}

/// Parses one dotted-decimal component. Empty fields, signs, non-digit
/// characters and leading zeros are all rejected.
fn parse_component(part: &str) -> Result<u64, Error> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidComponent(part.to_string()));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(Error::InvalidComponent(part.to_string()));
    }
    part.parse::<u64>().map_err(|_| Error::ArcTooLarge)
}

/// Number of base-128 bytes needed for a subidentifier value.
fn subid_num_bytes(value: u64) -> usize {
    let mut num_bytes = 1;
    let mut value = value >> 7;
    while value != 0 {
        num_bytes += 1;
        value >>= 7;
    }
    num_bytes
}

/// Writes one subidentifier big-endian with continuation bits at `pos`,
/// advancing the cursor. The bounds check is unreachable when the buffer
/// was sized by the first pass.
fn encode_subid(out: &mut [u8], pos: &mut usize, value: u64) -> Result<(), Error> {
    let num_bytes = subid_num_bytes(value);
    let Some(dst) = out.get_mut(*pos..).filter(|dst| dst.len() >= num_bytes) else {
        return Err(Error::BufferTooSmall);
    };

    let mut value = value;
    dst[num_bytes - 1] = (value & 0x7f) as u8;
    value >>= 7;
    for i in 2..=num_bytes {
        dst[num_bytes - i] = 0x80 | (value & 0x7f) as u8;
        value >>= 7;
    }
    *pos += num_bytes;
    Ok(())
}

/// Writer used to validate an encoding without keeping the text.
struct Discard;

impl Write for Discard {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Ok(())
    }
}

struct SliceWriter<'a> {
    out: &'a mut [u8],
    written: usize,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.written.checked_add(s.len()).ok_or(fmt::Error)?;
        if end > self.out.len() {
            return Err(fmt::Error);
        }
        self.out[self.written..end].copy_from_slice(s.as_bytes());
        self.written = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::str::FromStr;

    use crate::error::Error;
    use crate::{numeric_string, write_numeric, Oid};

    #[rstest(input, expected,
        // Single subidentifier still names two components
        case(vec![0x2A], "1.2"),
        // ISO identified-organization private enterprise arc
        case(vec![0x2B, 0x06, 0x01, 0x04, 0x01], "1.3.6.1.4.1"),
        // ITU-T data arc with multi-byte subidentifiers
        case(vec![0x09, 0x92, 0x26, 0x89, 0x93, 0xF2, 0x2C, 0x64, 0x01, 0x01], "0.9.2342.19200300.100.1.1"),
        // sha256WithRSAEncryption
        case(vec![0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0B], "1.2.840.113549.1.1.11"),
        // Root arc 2 with a second component above 39
        case(vec![0x78], "2.40"),
        case(vec![0x88, 0x37], "2.999"),
        // Second component at the arc 0/1 limit
        case(vec![0x27], "0.39"),
    )]
    fn test_numeric_string(input: Vec<u8>, expected: &str) {
        let actual = numeric_string(&input).unwrap();
        assert_eq!(expected, actual);
    }

    #[rstest(input,
        case(vec![]),
        case(vec![0x80]),
        case(vec![0x80, 0x01]),
        case(vec![0x2A, 0x80, 0x01]),
        case(vec![0x2A, 0x86]),
        case(vec![0x86, 0x48]),
        case(vec![0x2A, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F]),
    )]
    fn test_numeric_string_rejects_invalid(input: Vec<u8>) {
        assert!(numeric_string(&input).is_err());
    }

    #[test]
    fn test_numeric_string_error_kinds() {
        assert!(matches!(numeric_string(&[]), Err(Error::Empty)));
        assert!(matches!(
            numeric_string(&[0x80, 0x01]),
            Err(Error::Overlong)
        ));
        assert!(matches!(
            numeric_string(&[0x2A, 0x80, 0x01]),
            Err(Error::Overlong)
        ));
        assert!(matches!(
            numeric_string(&[0x2A, 0x86]),
            Err(Error::Truncated)
        ));
        assert!(matches!(
            numeric_string(&[0x2A, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F]),
            Err(Error::ArcTooLarge)
        ));
    }

    #[test]
    fn test_numeric_string_accepts_max_arc() {
        // u64::MAX is the largest arc this decoder supports
        let input = [
            0x2A, 0x81, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
        ];
        let actual = numeric_string(&input).unwrap();
        assert_eq!("1.2.18446744073709551615", actual);
    }

    #[rstest(size, expect_ok,
        case(21, true),
        case(32, true),
        case(20, false),
        case(4, false),
        case(0, false),
    )]
    fn test_write_numeric_buffer_sizes(size: usize, expect_ok: bool) {
        let input = [0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0B];
        let mut out = vec![0u8; size];
        let result = write_numeric(&input, &mut out);
        if expect_ok {
            let written = result.unwrap();
            assert_eq!(21, written);
            assert_eq!(b"1.2.840.113549.1.1.11", &out[..written]);
        } else {
            assert!(matches!(result, Err(Error::BufferTooSmall)));
        }
    }

    #[rstest(input, expected,
        case("1.2", vec![0x2A]),
        case("1.3.6.1.4.1", vec![0x2B, 0x06, 0x01, 0x04, 0x01]),
        case("0.9.2342.19200300.100.1.1", vec![0x09, 0x92, 0x26, 0x89, 0x93, 0xF2, 0x2C, 0x64, 0x01, 0x01]),
        case("1.2.840.113549.1.1.11", vec![0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0B]),
        case("2.40", vec![0x78]),
        case("2.999", vec![0x88, 0x37]),
        case("0.39", vec![0x27]),
        case("1.2.0", vec![0x2A, 0x00]),
        case("1.2.18446744073709551615", vec![0x2A, 0x81, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F]),
    )]
    fn test_oid_from_string(input: &str, expected: Vec<u8>) {
        let oid = Oid::from_str(input).unwrap();
        assert_eq!(expected, oid.as_bytes());
    }

    #[test]
    fn test_oid_from_string_error_kinds() {
        assert!(matches!(Oid::from_str("3.1"), Err(Error::RootArcOutOfRange)));
        assert!(matches!(
            Oid::from_str("1.40"),
            Err(Error::SecondArcOutOfRange)
        ));
        assert!(matches!(
            Oid::from_str("0.40"),
            Err(Error::SecondArcOutOfRange)
        ));
        assert!(matches!(Oid::from_str("1"), Err(Error::TooFewComponents)));
        assert!(matches!(
            Oid::from_str("1.2.18446744073709551616"),
            Err(Error::ArcTooLarge)
        ));
    }

    #[rstest(input,
        case(""),
        case("."),
        case("1."),
        case(".1"),
        case("1..2"),
        case("1.2."),
        case("1.2x"),
        case("1.-2"),
        case("+1.2"),
        case("01.2"),
        case("1.02"),
        case("1.2.007"),
        case("1 .2"),
    )]
    fn test_oid_from_string_rejects_malformed(input: &str) {
        assert!(matches!(
            Oid::from_str(input),
            Err(Error::InvalidComponent(_))
        ));
    }

    #[rstest(input,
        case("0.9.2342.19200300.100.1.25"),
        case("1.2.840.10045.4.3.2"),
        case("1.2.840.113549.1.1.11"),
        case("1.3.132.0.34"),
        case("2.5.4.3"),
        case("2.16.840.1.101.3.4.2.1"),
        case("2.999.1"),
    )]
    fn test_roundtrip_through_bytes(input: &str) {
        let oid = Oid::from_str(input).unwrap();
        assert_eq!(input, numeric_string(oid.as_bytes()).unwrap());
    }

    #[rstest(input,
        case(vec![0x55, 0x04, 0x03]),
        case(vec![0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x04, 0x03, 0x02]),
        case(vec![0x2B, 0x81, 0x04, 0x00, 0x22]),
        case(vec![0x2A]),
    )]
    fn test_roundtrip_through_string(input: Vec<u8>) {
        let s = numeric_string(&input).unwrap();
        let oid = Oid::from_str(&s).unwrap();
        assert_eq!(input, oid.as_bytes());
    }

    #[test]
    fn test_oid_try_from_bytes() {
        let oid = Oid::try_from([0x55, 0x04, 0x03].as_slice()).unwrap();
        assert_eq!("2.5.4.3", oid.to_string());
        assert!(oid == "2.5.4.3");
        assert!("2.5.4.3" == oid);
        assert!(oid != "2.5.4.4");

        assert!(Oid::try_from([0x80, 0x01].as_slice()).is_err());
        assert!(Oid::try_from(Vec::new()).is_err());
        assert!(Oid::try_from(vec![0x2A, 0x86]).is_err());
    }

    #[rstest(input, expected_json,
        case("1.2.840.113549.1.1.11", r#""1.2.840.113549.1.1.11""#),
        case("2.5.4.3", r#""2.5.4.3""#),
    )]
    fn test_oid_serialize(input: &str, expected_json: &str) {
        let oid = Oid::from_str(input).unwrap();
        let json = serde_json::to_string(&oid).unwrap();
        assert_eq!(expected_json, json);
    }

    #[rstest(json_input, expected,
        case(r#""1.2.840.113549.1.1.11""#, "1.2.840.113549.1.1.11"),
        case(r#""2.5.4.3""#, "2.5.4.3"),
    )]
    fn test_oid_deserialize(json_input: &str, expected: &str) {
        let oid: Oid = serde_json::from_str(json_input).unwrap();
        assert_eq!(expected, oid.to_string());
    }

    #[test]
    fn test_oid_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Oid>(r#""3.1""#).is_err());
        assert!(serde_json::from_str::<Oid>(r#""not an oid""#).is_err());
    }
}
