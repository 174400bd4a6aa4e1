//! Error types for OID encoding and decoding.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur converting between the binary and the
/// dotted-decimal forms of an object identifier.
#[derive(Debug, Error)]
pub enum Error {
    // Binary form errors
    #[error("OID: empty input")]
    Empty,
    #[error("OID: overlong subidentifier encoding")]
    Overlong,
    #[error("OID: truncated input: continuation bit set at end of data")]
    Truncated,
    #[error("OID: subidentifier value does not fit in 64 bits")]
    ArcTooLarge,

    // Dotted-decimal form errors
    #[error("OID: expected at least two components")]
    TooFewComponents,
    #[error("OID: invalid component '{0}'")]
    InvalidComponent(String),
    #[error("OID: first component must be 0, 1 or 2")]
    RootArcOutOfRange,
    #[error("OID: second component must be 39 or less under root arcs 0 and 1")]
    SecondArcOutOfRange,
    #[error("OID: encoded length overflows usize")]
    LengthOverflow,

    // Output errors
    #[error("OID: output buffer too small")]
    BufferTooSmall,
    #[error("OID: allocation failed: {0}")]
    Alloc(#[source] TryReserveError),
}
