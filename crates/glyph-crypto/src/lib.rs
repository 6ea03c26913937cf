//! Deterministic stream cipher, sampling routines, challenge derivation, and
//! the shared error type for the glyph signature core.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod challenge;
pub mod error;
pub mod public_param;
pub mod rng;
pub mod sampling;

pub use error::GlyphError;
pub use public_param::derive_public_a;
pub use rng::BitStream;
pub use sampling::{ephemeral_sample, is_degenerate_ternary, ternary_sample};
