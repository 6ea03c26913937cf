//! Twiddle-factor tables for the twisted negacyclic NTT.
//!
//! Built once per [`crate::Params`] and treated as read-only afterwards —
//! callers are expected to cache a [`TwiddleTables`] behind a `OnceLock` (see
//! `glyph-core`'s engine, which owns the process-wide instance).

use crate::field::{inv, mul};
use crate::params::Params;

/// Precomputed powers of the `2n`-th root of unity (and friends) needed by
/// [`crate::ntt::forward`] / [`crate::ntt::inverse`].
#[derive(Clone, Debug)]
pub struct TwiddleTables {
    /// `w[i] = g^(2i) mod q`, for `i` in `[0, n)`.
    pub w: Vec<u16>,
    /// Multiplicative inverse of `w[i]`.
    pub wrev: Vec<u16>,
    /// Square-root twists, `wsqrt[i] = g^(2i+1) mod q`, for `i` in `[0, n/2)`.
    pub wsqrt: Vec<u16>,
    /// Multiplicative inverse of `wsqrt[i]`.
    pub wsqrt_rev: Vec<u16>,
    /// Multiplicative inverse of `n mod q`.
    pub n_inv: u16,
}

impl TwiddleTables {
    /// Build the tables for one parameter set. `w[0]=1`, `w[i+1] = w[i]*g^2`;
    /// `wsqrt[0]=g`, `wsqrt[i+1] = wsqrt[i]*g^2`.
    #[must_use]
    pub fn build(params: &Params) -> Self {
        let q = params.q;
        let n = params.n;
        let g = params.generator;
        let g_sq = mul(g, g, q);

        let mut w = Vec::with_capacity(n);
        let mut wrev = Vec::with_capacity(n);
        let mut v = 1u16;
        for _ in 0..n {
            w.push(v);
            wrev.push(inv(v, q));
            v = mul(v, g_sq, q);
        }

        let mut wsqrt = Vec::with_capacity(n / 2);
        let mut wsqrt_rev = Vec::with_capacity(n / 2);
        let mut v = g;
        for _ in 0..(n / 2) {
            wsqrt.push(v);
            wsqrt_rev.push(inv(v, q));
            v = mul(v, g_sq, q);
        }

        let n_inv = inv((n % usize::from(q)) as u16, q);

        Self {
            w,
            wrev,
            wsqrt,
            wsqrt_rev,
            n_inv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamSet;

    #[test]
    fn inverses_hold_for_every_index() {
        for set in [ParamSet::Glyph1024Q12289, ParamSet::Glyph1024Q59393Wide] {
            let p = set.params();
            let tw = TwiddleTables::build(&p);
            for i in 0..p.n {
                assert_eq!(mul(tw.w[i], tw.wrev[i], p.q), 1, "w[{i}] for {set:?}");
            }
            for i in 0..(p.n / 2) {
                assert_eq!(
                    mul(tw.wsqrt[i], tw.wsqrt_rev[i], p.q),
                    1,
                    "wsqrt[{i}] for {set:?}"
                );
            }
        }
    }
}
