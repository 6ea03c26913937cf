//! K-floor rounding and the signer-side compression rule.

use glyph_ring::{abs, sign, Params};

/// Apply k-floor rounding to every coefficient: `floor(c / (2k+1))`.
#[must_use]
pub fn k_floor(v: &[u16], params: &Params) -> Vec<u16> {
    let bucket = params.bucket_width();
    v.iter().map(|&c| (u32::from(c) / bucket) as u16).collect()
}

/// Compress one coefficient pair `(u, v)`, returning the transmitted `z2`
/// value (`0`, `k`, or `q-k`), or `None` if `|v| > k` (the caller treats
/// this as a rejection and retries the whole attempt).
#[must_use]
pub fn compress(u: u16, v: u16, params: &Params) -> Option<u16> {
    let k = params.k();
    let q = params.q;
    if abs(v, q) > k {
        return None;
    }

    let bucket = params.bucket_width();
    let a = u32::from(u) / bucket;
    let shifted = (u32::from(u) + u32::from(v)) % u32::from(q);
    let b = shifted / bucket;
    if a == b {
        return Some(0);
    }

    let value = if u < k {
        q - k
    } else if u >= q - k && sign(v, q) > 0 {
        k
    } else if b < a {
        q - k
    } else {
        k
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_ring::ParamSet;

    #[test]
    fn k_floor_matches_plain_division() {
        let p = ParamSet::Glyph1024Q12289.params();
        let bucket = u32::from(2 * p.k() + 1);
        let v = vec![0u16, 1, bucket as u16 - 1, bucket as u16, p.q - 1];
        let rounded = k_floor(&v, &p);
        for (input, output) in v.iter().zip(rounded.iter()) {
            assert_eq!(u32::from(*output), u32::from(*input) / bucket);
        }
    }

    #[test]
    fn compress_rejects_out_of_range_v() {
        let p = ParamSet::Glyph1024Q12289.params();
        let k = p.k();
        assert!(compress(100, k + 1, &p).is_none());
    }

    #[test]
    fn compress_returns_zero_when_bucket_unchanged() {
        let p = ParamSet::Glyph1024Q12289.params();
        // u and u+v land in the same bucket when v = 0.
        assert_eq!(compress(500, 0, &p), Some(0));
    }

    #[test]
    fn compress_output_is_always_in_allowed_set() {
        let p = ParamSet::Glyph1024Q12289.params();
        let k = p.k();
        for u in [0u16, 1, k, k + 1, p.q - k - 1, p.q - k, p.q - 1] {
            for v in [0i32, 1, -1, i32::from(k), -i32::from(k)] {
                let v_canon = if v >= 0 {
                    v as u16
                } else {
                    p.q - (-v) as u16
                };
                if let Some(out) = compress(u, v_canon, &p) {
                    assert!(out == 0 || out == k || out == p.q - k);
                }
            }
        }
    }
}
