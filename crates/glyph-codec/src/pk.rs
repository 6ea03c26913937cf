//! Public-key byte format: `t[n-1], t[n-2], …, t[0]` packed as `q_BITS`-wide
//! fields, most-significant coefficient first.

use glyph_core::{GlyphError, ParamSet, PublicKey};

use crate::bits::{BitReader, BitWriter};

/// Encode a public key into its fixed-size byte form.
#[must_use]
pub fn encode(pk: &PublicKey) -> Vec<u8> {
    let params = pk.param_set().params();
    let mut writer = BitWriter::new();
    for i in (0..params.n).rev() {
        writer.write_bits(u32::from(pk.t()[i]), params.q_bits);
    }
    writer.finish()
}

/// Decode a public key from its fixed-size byte form.
///
/// # Errors
/// Returns [`GlyphError::InvalidLength`] if `bytes` is not exactly
/// `q_BITS * n / 8` bytes, [`GlyphError::InvalidEncoding`] if a coefficient
/// decodes outside `[0, q)`, or [`GlyphError::InvalidKey`] if the decoded
/// key fails a structural invariant.
pub fn decode(bytes: &[u8], set: ParamSet) -> Result<PublicKey, GlyphError> {
    let params = set.params();
    let expected = (params.q_bits as usize * params.n) / 8;
    if bytes.len() != expected {
        return Err(GlyphError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }

    let mut reader = BitReader::new(bytes);
    let mut t = vec![0u16; params.n];
    for i in (0..params.n).rev() {
        let v = reader.read_bits(params.q_bits);
        if v >= u32::from(params.q) {
            return Err(GlyphError::InvalidEncoding(format!(
                "t[{i}] = {v} is not less than q"
            )));
        }
        t[i] = v as u16;
    }

    PublicKey::new(t, set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_valid_key() {
        let params = ParamSet::Glyph1024Q12289.params();
        let mut t: Vec<u16> = (0..params.n as u16).map(|i| (i * 37 + 5) % params.q).collect();
        t[0] = 2; // avoid the all-zero/all-one degeneracies by construction
        let pk = PublicKey::new(t, ParamSet::Glyph1024Q12289).expect("valid key");

        let bytes = encode(&pk);
        assert_eq!(bytes.len(), 1792);
        let decoded = decode(&bytes, ParamSet::Glyph1024Q12289).expect("decode");
        assert_eq!(decoded, pk);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = decode(&[0u8; 10], ParamSet::Glyph1024Q12289).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidLength {
                expected: 1792,
                actual: 10
            }
        );
    }
}
