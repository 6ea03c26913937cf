//! Hash-based derivation of the sparse challenge polynomial `c` from a
//! rounded ring vector and the message being signed or verified.

use std::collections::HashSet;

use glyph_ring::sparse::SparseTerm;
use glyph_ring::Params;
use sha2::{Digest, Sha256};

use crate::rng::BitStream;

/// Encode a ring vector as little-endian 16-bit words, the canonical input
/// byte layout hashed alongside the message.
fn encode_ring_le(v: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(v.len() * 2);
    for &c in v {
        out.extend_from_slice(&c.to_le_bytes());
    }
    out
}

/// Derive the weight-`omega` sparse challenge polynomial for `(u_rounded,
/// message)`. Deterministic: the same inputs always yield the same
/// `SparseTerm` sequence, sorted by position.
#[must_use]
pub fn derive(u_rounded: &[u16], message: &[u8], params: &Params) -> Vec<SparseTerm> {
    let mut hash_input = encode_ring_le(u_rounded);
    hash_input.extend_from_slice(message);
    let digest: [u8; 32] = Sha256::digest(&hash_input).into();

    let mut stream = BitStream::keyed(digest);
    let mut seen = HashSet::with_capacity(params.omega);
    let mut terms = Vec::with_capacity(params.omega);

    while terms.len() < params.omega {
        let sign = stream.next_bit();
        let pos = stream.next_bits(params.n_bits) as u16;
        if usize::from(pos) >= params.n {
            continue;
        }
        if !seen.insert(pos) {
            continue;
        }
        terms.push(SparseTerm { pos, sign });
    }

    terms.sort_by_key(|t| t.pos);
    terms
}
