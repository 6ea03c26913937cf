//! Forward and inverse negacyclic NTT over `R_q = Z_q[x]/(x^n+1)`.
//!
//! The forward transform is Gentleman–Sande (decimation-in-frequency) with a
//! twisted pre-multiplication that turns the ordinary length-`n` DFT into the
//! length-`n` negacyclic DWT; the inverse is Cooley–Tukey (decimation-in-time)
//! with the matching twisted post-multiplication. Neither direction performs
//! bit-reversal — the two orderings cancel each other, which is exactly why
//! forward must stay decimation-in-frequency and inverse decimation-in-time.

use crate::field::{add, mul, sub};
use crate::params::Params;
use crate::twiddle::TwiddleTables;

/// `(a - b) mod n`, the index arithmetic used to walk the twiddle-table
/// index during the butterfly passes (distinct from `Z_q` subtraction).
#[inline]
fn sub_mod_n(a: usize, b: usize, n: usize) -> usize {
    (a + n - (b % n)) % n
}

/// Forward NTT in place: coefficients (time domain) to the pointwise
/// evaluation domain. `x.len()` must equal `params.n`, a power of two.
///
/// # Panics
/// Panics if `x.len() != params.n`.
pub fn forward(x: &mut [u16], params: &Params, tw: &TwiddleTables) {
    let n = params.n;
    let q = params.q;
    assert_eq!(x.len(), n, "NTT input length must equal n");

    for i in 0..n / 2 {
        x[2 * i] = mul(x[2 * i], tw.w[i], q);
        x[2 * i + 1] = mul(x[2 * i + 1], tw.wsqrt[i], q);
    }

    let mut m = n / 2;
    let mut step = 1usize;
    while m >= 1 {
        let m2 = m * 2;
        let mut index = 0usize;
        for j in 0..m {
            let mut i = j;
            while i < n {
                let t0 = add(x[i], x[i + m], q);
                let t1 = sub(x[i], x[i + m], q);
                x[i] = t0;
                x[i + m] = mul(t1, tw.w[index], q);
                i += m2;
            }
            index = sub_mod_n(index, step, n);
        }
        step <<= 1;
        m >>= 1;
    }
}

/// Inverse NTT in place: pointwise evaluation domain back to coefficients.
///
/// # Panics
/// Panics if `x.len() != params.n`.
pub fn inverse(x: &mut [u16], params: &Params, tw: &TwiddleTables) {
    let n = params.n;
    let q = params.q;
    assert_eq!(x.len(), n, "NTT input length must equal n");

    let mut step = n / 2;
    let mut m = 1usize;
    while m < n {
        let m2 = m * 2;
        let mut index = 0usize;
        for j in 0..m {
            let mut i = j;
            while i < n {
                let t0 = x[i];
                let t1 = mul(x[i + m], tw.wrev[index], q);
                x[i] = add(t0, t1, q);
                x[i + m] = sub(t0, t1, q);
                i += m2;
            }
            index = sub_mod_n(index, step, n);
        }
        step >>= 1;
        m <<= 1;
    }

    for i in 0..n / 2 {
        x[2 * i] = mul(x[2 * i], tw.wrev[i], q);
        x[2 * i + 1] = mul(x[2 * i + 1], tw.wsqrt_rev[i], q);
    }
    for c in x.iter_mut() {
        *c = mul(*c, tw.n_inv, q);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::mul as fmul;
    use crate::params::ParamSet;
    use proptest::prelude::*;

    fn random_ring(n: usize, q: u16, seed: u64) -> Vec<u16> {
        // A small deterministic LCG is enough for unit tests; property
        // tests below use proptest's own generator for broader coverage.
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        (0..n)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                ((state >> 33) % u64::from(q)) as u16
            })
            .collect()
    }

    /// Schoolbook negacyclic convolution, used as an independent oracle for
    /// the homomorphism property.
    fn negacyclic_convolve(a: &[u16], b: &[u16], q: u16) -> Vec<u16> {
        let n = a.len();
        let mut aux = vec![0u32; 2 * n];
        for (i, &ai) in a.iter().enumerate() {
            for (j, &bj) in b.iter().enumerate() {
                aux[i + j] = (aux[i + j] + u32::from(ai) * u32::from(bj)) % u32::from(q);
            }
        }
        (0..n)
            .map(|i| sub(aux[i] as u16, aux[i + n] as u16, q))
            .collect()
    }

    #[test]
    fn round_trip_small_vectors() {
        let p = ParamSet::Glyph1024Q12289.params();
        let tw = TwiddleTables::build(&p);
        for seed in 0..8u64 {
            let original = random_ring(p.n, p.q, seed);
            let mut x = original.clone();
            forward(&mut x, &p, &tw);
            inverse(&mut x, &p, &tw);
            assert_eq!(x, original, "round trip failed for seed {seed}");
        }
    }

    #[test]
    fn forward_then_inverse_on_zero_and_one() {
        let p = ParamSet::Glyph1024Q12289.params();
        let tw = TwiddleTables::build(&p);

        let mut zero = vec![0u16; p.n];
        let original = zero.clone();
        forward(&mut zero, &p, &tw);
        inverse(&mut zero, &p, &tw);
        assert_eq!(zero, original);

        let mut one = vec![0u16; p.n];
        one[0] = 1;
        let original = one.clone();
        forward(&mut one, &p, &tw);
        inverse(&mut one, &p, &tw);
        assert_eq!(one, original);
    }

    #[test]
    fn pointwise_product_is_negacyclic_convolution() {
        let p = ParamSet::Glyph1024Q12289.params();
        let tw = TwiddleTables::build(&p);

        let a = random_ring(p.n, p.q, 1);
        let b = random_ring(p.n, p.q, 2);

        let mut a_hat = a.clone();
        let mut b_hat = b.clone();
        forward(&mut a_hat, &p, &tw);
        forward(&mut b_hat, &p, &tw);
        let mut product_hat: Vec<u16> = a_hat
            .iter()
            .zip(b_hat.iter())
            .map(|(&x, &y)| fmul(x, y, p.q))
            .collect();
        inverse(&mut product_hat, &p, &tw);

        let expected = negacyclic_convolve(&a, &b, p.q);
        assert_eq!(product_hat, expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]
        #[test]
        fn round_trip_holds_for_arbitrary_vectors(seed in any::<u64>()) {
            let p = ParamSet::Glyph1024Q12289.params();
            let tw = TwiddleTables::build(&p);
            let original = random_ring(p.n, p.q, seed);
            let mut x = original.clone();
            forward(&mut x, &p, &tw);
            inverse(&mut x, &p, &tw);
            prop_assert_eq!(x, original);
        }
    }
}
