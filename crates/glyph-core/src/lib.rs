//! Data model, compression, and the sign engine for a GLP/Glyph-family
//! lattice signature scheme.

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

pub mod compression;
pub mod engine;
pub mod state;
pub mod types;

pub use compression::{compress, k_floor};
pub use engine::SignEngine;
pub use state::SignState;
pub use types::{PublicKey, Signature, SigningKey, SparsePolynomial};

pub use glyph_crypto::GlyphError;
pub use glyph_ring::ParamSet;
