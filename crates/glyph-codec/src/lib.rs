//! Bit-packed external byte formats for the glyph signature core's public
//! key, signing key, and signature types.

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

mod bits;
pub mod pk;
pub mod sig;
pub mod sk;
