//! Derivation of the fixed public ring element `a` shared by every key pair
//! in a parameter set.
//!
//! `a` is a "nothing-up-my-sleeve" constant: rather than embedding a blob in
//! the crate, it is expanded from a domain-separated digest through the same
//! deterministic stream used for challenge derivation. The result is a pure
//! function of the parameter set, so every process derives the identical
//! constant without shipping or trusting an external file.

use sha2::{Digest, Sha256};

use glyph_ring::Params;

use crate::rng::BitStream;

/// Derive the public constant vector `a` for one parameter set.
#[must_use]
pub fn derive_public_a(params: &Params) -> Vec<u16> {
    let label = format!("glyph-signature/public-a/n={}/q={}", params.n, params.q);
    let digest: [u8; 32] = Sha256::digest(label.as_bytes()).into();

    let mut stream = BitStream::keyed(digest);
    let width = params.q_bits;
    (0..params.n)
        .map(|_| loop {
            let v = stream.next_bits(width) as u16;
            if v < params.q {
                break v;
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_ring::ParamSet;

    #[test]
    fn derivation_is_stable_across_calls() {
        let p = ParamSet::Glyph1024Q12289.params();
        assert_eq!(derive_public_a(&p), derive_public_a(&p));
    }

    #[test]
    fn derivation_stays_in_canonical_range() {
        let p = ParamSet::Glyph1024Q12289.params();
        let a = derive_public_a(&p);
        assert_eq!(a.len(), p.n);
        assert!(a.iter().all(|&c| c < p.q));
    }

    #[test]
    fn parameter_sets_derive_distinct_constants() {
        let a1 = derive_public_a(&ParamSet::Glyph1024Q12289.params());
        let a2 = derive_public_a(&ParamSet::Glyph1024Q59393Wide.params());
        assert_ne!(a1, a2);
    }
}
