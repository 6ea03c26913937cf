//! The shared error type for the signature core's fallible surfaces.
//!
//! Defined here (the lowest-level crate that needs it) and depended on by
//! `glyph-core` and `glyph-codec`, matching the workspace's convention of the
//! lowest-level crate owning the error type its neighbors share.

use thiserror::Error;

/// Errors surfaced across sampling, key/signature validation, and the
/// external byte formats.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GlyphError {
    /// External byte input does not match the expected fixed size.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Size the format requires.
        expected: usize,
        /// Size actually supplied.
        actual: usize,
    },

    /// A decoded field takes a value outside its allowed set.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// A decoded signing or public key fails a post-decode structural
    /// invariant (e.g. the all-zero or all-one degeneracy).
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A decoded signature fails a post-decode structural invariant.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// The verifier's recomputed challenge does not match the transmitted
    /// one.
    #[error("verification failed")]
    VerificationFailed,

    /// The signer exhausted its deadline without a worker completing.
    #[error("signing timed out")]
    Timeout,

    /// The OS entropy source failed to produce randomness.
    #[error("entropy source unavailable")]
    EntropyUnavailable,

    /// A modulus observed at parameter-table initialization is not one of
    /// the two recognized parameter sets.
    #[error("unsupported parameter: q={0}")]
    UnsupportedParameter(u32),
}
