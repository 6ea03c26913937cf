//! Signature byte format, high-to-low: the challenge's `omega` entries
//! (each 1-bit sign then `n_BITS`-bit position, ordered highest position
//! first so the lowest-position entry ends up in the lowest bits of that
//! section), then `n` 2-bit `z2` codes, then `n` `(b_BITS+1)`-bit `z1`
//! fields using a two's-complement-style signed encoding. Within the `z2`
//! and `z1` sections, coefficients are written in descending index order
//! (index `n-1` first), matching the public-key section's convention.

use glyph_core::{GlyphError, ParamSet, Signature, SparsePolynomial};
use glyph_ring::sparse::SparseTerm;
use glyph_ring::Params;

use crate::bits::{BitReader, BitWriter};

fn encode_z2_code(c: u16, params: &Params) -> u32 {
    let k = params.k();
    if c == 0 {
        0
    } else if c == k {
        1
    } else {
        debug_assert_eq!(c, params.q - k, "Signature invariant guarantees z2 in {{0,k,q-k}}");
        2
    }
}

fn decode_z2_code(code: u32, params: &Params) -> Result<u16, GlyphError> {
    let k = params.k();
    match code {
        0 => Ok(0),
        1 => Ok(k),
        2 => Ok(params.q - k),
        _ => Err(GlyphError::InvalidEncoding(format!(
            "z2 code {code} not in {{0,1,2}}"
        ))),
    }
}

/// `d` if `2d <= q` (non-negative, represented directly); otherwise the
/// two's-complement form `2^(b_BITS+1) - (q - d)` (negative).
fn encode_z1_value(c: u16, params: &Params) -> u32 {
    let q = u32::from(params.q);
    let d = u32::from(c);
    if 2 * d <= q {
        d
    } else {
        let width_pow = 1u32 << (params.b_bits + 1);
        width_pow - (q - d)
    }
}

/// Inverse of [`encode_z1_value`]: the top bit of the `(b_BITS+1)`-bit field
/// (i.e. `v >= 2^b_BITS`) marks a negative value.
fn decode_z1_value(v: u32, params: &Params) -> u16 {
    let half = 1u32 << params.b_bits;
    if v < half {
        v as u16
    } else {
        let width_pow = half * 2;
        (u32::from(params.q) - (width_pow - v)) as u16
    }
}

/// Encode a signature into its fixed-size byte form.
#[must_use]
pub fn encode(sig: &Signature) -> Vec<u8> {
    let params = sig.param_set().params();
    let mut writer = BitWriter::new();

    let mut terms: Vec<SparseTerm> = sig.c().terms().to_vec();
    terms.sort_by(|a, b| b.pos.cmp(&a.pos));
    for term in &terms {
        writer.write_bits(u32::from(term.sign), 1);
        writer.write_bits(u32::from(term.pos), params.n_bits);
    }

    let z2 = sig.z2();
    for i in (0..params.n).rev() {
        writer.write_bits(encode_z2_code(z2[i], &params), 2);
    }

    let z1 = sig.z1();
    for i in (0..params.n).rev() {
        writer.write_bits(encode_z1_value(z1[i], &params), params.b_bits + 1);
    }

    writer.finish()
}

/// Decode a signature from its fixed-size byte form.
///
/// # Errors
/// Returns [`GlyphError::InvalidLength`] on the wrong byte count, and
/// propagates [`GlyphError::InvalidEncoding`] / [`GlyphError::InvalidSignature`]
/// from the challenge or signature structural checks.
pub fn decode(bytes: &[u8], set: ParamSet) -> Result<Signature, GlyphError> {
    let params = set.params();
    let expected =
        ((params.b_bits as usize + 1 + 2) * params.n + (params.n_bits as usize + 1) * params.omega)
            / 8;
    if bytes.len() != expected {
        return Err(GlyphError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }

    let mut reader = BitReader::new(bytes);

    let mut terms = Vec::with_capacity(params.omega);
    for _ in 0..params.omega {
        let sign = reader.read_bits(1) != 0;
        let pos = reader.read_bits(params.n_bits) as u16;
        terms.push(SparseTerm { pos, sign });
    }
    let c = SparsePolynomial::new(terms, set)?;

    let mut z2 = vec![0u16; params.n];
    for i in (0..params.n).rev() {
        z2[i] = decode_z2_code(reader.read_bits(2), &params)?;
    }

    let mut z1 = vec![0u16; params.n];
    for i in (0..params.n).rev() {
        z1[i] = decode_z1_value(reader.read_bits(params.b_bits + 1), &params);
    }

    Signature::new(z1, z2, c, set)
}
