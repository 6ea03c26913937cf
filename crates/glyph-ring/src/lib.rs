//! Ring arithmetic engine for a GLP/Glyph-family lattice signature: modular
//! arithmetic mod a fixed prime `q`, twiddle-factor tables for a twisted NTT,
//! the forward/inverse negacyclic NTT itself, pointwise evaluation-domain ops,
//! and a sparse-polynomial multiplier.
//!
//! Every ring element is a length-`n` vector of `u16` coefficients in the
//! canonical range `[0, q)`. `n` is always a power of two; `q` is one of the
//! two fixed primes in [`ParamSet`].

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

pub mod field;
pub mod ntt;
pub mod params;
pub mod pointwise;
pub mod sparse;
pub mod twiddle;

pub use field::{abs, add, inv, mul, neg, sign, sub};
pub use params::{ParamSet, Params};
pub use sparse::{sparse_mul, SparseTerm};
pub use twiddle::TwiddleTables;

/// A ring element: `n` coefficients mod `q`, canonical representative in
/// `[0, q)`. Stored by value, never boxed, matching the workspace's preference
/// for plain `Vec`-backed value types over per-call heap arenas.
pub type RingVec = Vec<u16>;
