//! Signing-key byte format: `s2` then `s1`, each coefficient packed as a
//! 2-bit code (`0->0, 1->1, q-1->2`), four coefficients per byte.
//!
//! `s2` is packed first so that, once both passes complete, `s1` occupies
//! the low end of the buffer, and within each vector's section coefficients
//! are written in descending index order (index `n-1` first) — the order
//! the reference implementation this scheme is drawn from uses, pinned here
//! rather than left to guesswork.

use glyph_core::{GlyphError, ParamSet, SigningKey};

use crate::bits::{BitReader, BitWriter};

fn ternary_code(c: u16, q: u16) -> u32 {
    if c == 0 {
        0
    } else if c == 1 {
        1
    } else {
        debug_assert_eq!(c, q - 1, "SigningKey invariant guarantees c in {{0,1,q-1}}");
        2
    }
}

fn decode_ternary_code(code: u32, q: u16) -> Result<u16, GlyphError> {
    match code {
        0 => Ok(0),
        1 => Ok(1),
        2 => Ok(q - 1),
        _ => Err(GlyphError::InvalidEncoding(format!(
            "secret coefficient code {code} not in {{0,1,2}}"
        ))),
    }
}

/// Encode a signing key into its fixed-size byte form.
#[must_use]
pub fn encode(sk: &SigningKey) -> Vec<u8> {
    let q = sk.param_set().params().q;
    let n = sk.param_set().params().n;
    let mut writer = BitWriter::new();
    let s2 = sk.s2();
    for i in (0..n).rev() {
        writer.write_bits(ternary_code(s2[i], q), 2);
    }
    let s1 = sk.s1();
    for i in (0..n).rev() {
        writer.write_bits(ternary_code(s1[i], q), 2);
    }
    writer.finish()
}

/// Decode a signing key from its fixed-size byte form.
///
/// # Errors
/// Returns [`GlyphError::InvalidLength`] if `bytes` is not exactly 512
/// bytes, [`GlyphError::InvalidEncoding`] if a 2-bit code is `0b11`, or
/// [`GlyphError::InvalidKey`] if the decoded secret is degenerate.
pub fn decode(bytes: &[u8], set: ParamSet) -> Result<SigningKey, GlyphError> {
    let params = set.params();
    let expected = 2 * 2 * params.n / 8;
    if bytes.len() != expected {
        return Err(GlyphError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }

    let mut reader = BitReader::new(bytes);
    let mut s2 = vec![0u16; params.n];
    for i in (0..params.n).rev() {
        s2[i] = decode_ternary_code(reader.read_bits(2), params.q)?;
    }
    let mut s1 = vec![0u16; params.n];
    for i in (0..params.n).rev() {
        s1[i] = decode_ternary_code(reader.read_bits(2), params.q)?;
    }

    SigningKey::new(s1, s2, set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_secret(n: usize, q: u16) -> Vec<u16> {
        let mut v: Vec<u16> = (0..n as u16)
            .map(|i| match i % 3 {
                0 => 0,
                1 => 1,
                _ => q - 1,
            })
            .collect();
        v[0] = 1;
        v[1] = 0;
        v
    }

    #[test]
    fn round_trips_a_valid_key() {
        let params = ParamSet::Glyph1024Q12289.params();
        let sk = SigningKey::new(
            sample_secret(params.n, params.q),
            sample_secret(params.n, params.q),
            ParamSet::Glyph1024Q12289,
        )
        .expect("valid key");

        let bytes = encode(&sk);
        assert_eq!(bytes.len(), 512);
        let decoded = decode(&bytes, ParamSet::Glyph1024Q12289).expect("decode");
        assert_eq!(decoded, sk);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = decode(&[0u8; 5], ParamSet::Glyph1024Q12289).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidLength {
                expected: 512,
                actual: 5
            }
        );
    }

    #[test]
    fn rejects_reserved_two_bit_code() {
        // 0b11 repeated fills every byte with the reserved code.
        let bytes = vec![0xFFu8; 512];
        let err = decode(&bytes, ParamSet::Glyph1024Q12289).unwrap_err();
        assert!(matches!(err, GlyphError::InvalidEncoding(_)));
    }
}
