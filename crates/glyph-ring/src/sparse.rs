//! Multiplication of a dense ring element by a sparse `{-1,0,1}` polynomial
//! (the challenge polynomial `c`), without going through the NTT.
//!
//! The challenge has only `omega` nonzero terms, each `+1` or `-1` at a
//! distinct position, so a schoolbook shift-and-accumulate is both simpler
//! and faster than transforming it.

use crate::field;
use crate::params::Params;

/// One nonzero term of a sparse polynomial: coefficient `+1` at `pos` if
/// `sign` is `true`, `-1` otherwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SparseTerm {
    /// Exponent of `x` this term sits at, in `[0, n)`.
    pub pos: u16,
    /// `true` for `+1`, `false` for `-1`.
    pub sign: bool,
}

/// Multiply dense ring element `a` by the sparse polynomial described by
/// `terms`, reducing mod `x^n + 1`.
///
/// Uses a length-`2n` auxiliary accumulator: term `(pos, sign)` contributes
/// `sign * a[i]` to `aux[i + pos]` for every `i`, and the top half is folded
/// back down with a negation (`x^n = -1` in this ring).
///
/// # Panics
/// Panics if `a.len() != params.n` or any term's `pos` is out of range.
#[must_use]
pub fn sparse_mul(a: &[u16], terms: &[SparseTerm], params: &Params) -> Vec<u16> {
    let n = params.n;
    let q = params.q;
    assert_eq!(a.len(), n, "sparse_mul input length must equal n");

    let mut aux = vec![0u16; 2 * n];
    for term in terms {
        let pos = usize::from(term.pos);
        assert!(pos < n, "sparse term position out of range");
        for (i, &ai) in a.iter().enumerate() {
            let slot = i + pos;
            aux[slot] = if term.sign {
                field::add(aux[slot], ai, q)
            } else {
                field::sub(aux[slot], ai, q)
            };
        }
    }

    (0..n)
        .map(|i| field::sub(aux[i], aux[i + n], q))
        .collect()
}
