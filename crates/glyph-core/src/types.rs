//! The signature scheme's data model: signing key, public key, the sparse
//! challenge polynomial, and the signature itself, each validated against
//! its structural invariants on construction.

use glyph_crypto::GlyphError;
use glyph_ring::sparse::SparseTerm;
use glyph_ring::{abs, ParamSet};

/// The secret key: two ternary ring elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningKey {
    pub(crate) s1: Vec<u16>,
    pub(crate) s2: Vec<u16>,
    pub(crate) param_set: ParamSet,
}

impl SigningKey {
    /// Build a signing key from its two secret vectors, validating that
    /// every coefficient is in `{0, 1, q-1}` and that neither vector is the
    /// degenerate all-zero or all-one secret.
    ///
    /// # Errors
    /// Returns [`GlyphError::InvalidKey`] if either vector has the wrong
    /// length, a coefficient outside `{0, 1, q-1}`, or is degenerate.
    pub fn new(s1: Vec<u16>, s2: Vec<u16>, param_set: ParamSet) -> Result<Self, GlyphError> {
        let params = param_set.params();
        for (name, s) in [("s1", &s1), ("s2", &s2)] {
            if s.len() != params.n {
                return Err(GlyphError::InvalidKey(format!(
                    "{name} has length {}, expected {}",
                    s.len(),
                    params.n
                )));
            }
            if !s
                .iter()
                .all(|&c| c == 0 || c == 1 || c == params.q - 1)
            {
                return Err(GlyphError::InvalidKey(format!(
                    "{name} has a coefficient outside {{0,1,q-1}}"
                )));
            }
            if glyph_crypto::is_degenerate_ternary(s) {
                return Err(GlyphError::InvalidKey(format!(
                    "{name} is the degenerate all-zero or all-one secret"
                )));
            }
        }
        Ok(Self {
            s1,
            s2,
            param_set,
        })
    }

    /// The first secret ring element.
    #[must_use]
    pub fn s1(&self) -> &[u16] {
        &self.s1
    }

    /// The second secret ring element.
    #[must_use]
    pub fn s2(&self) -> &[u16] {
        &self.s2
    }

    /// The parameter set this key was built under.
    #[must_use]
    pub const fn param_set(&self) -> ParamSet {
        self.param_set
    }
}

/// The public key: one ring element in time-domain canonical form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) t: Vec<u16>,
    pub(crate) param_set: ParamSet,
}

impl PublicKey {
    /// Build a public key from its ring element, validating length, the
    /// canonical-range invariant, and the all-zero/all-one degeneracy.
    ///
    /// # Errors
    /// Returns [`GlyphError::InvalidKey`] on any violation.
    pub fn new(t: Vec<u16>, param_set: ParamSet) -> Result<Self, GlyphError> {
        let params = param_set.params();
        if t.len() != params.n {
            return Err(GlyphError::InvalidKey(format!(
                "t has length {}, expected {}",
                t.len(),
                params.n
            )));
        }
        if t.iter().any(|&c| c >= params.q) {
            return Err(GlyphError::InvalidKey(
                "t has a coefficient out of canonical range".into(),
            ));
        }
        if t.iter().all(|&c| c == 0) {
            return Err(GlyphError::InvalidKey("t is the all-zero key".into()));
        }
        if t.iter().all(|&c| c == 1) {
            return Err(GlyphError::InvalidKey("t is the all-one key".into()));
        }
        Ok(Self { t, param_set })
    }

    /// The public ring element.
    #[must_use]
    pub fn t(&self) -> &[u16] {
        &self.t
    }

    /// The parameter set this key was built under.
    #[must_use]
    pub const fn param_set(&self) -> ParamSet {
        self.param_set
    }
}

/// The sparse challenge polynomial: `omega` distinct `(position, sign)`
/// entries, canonically sorted by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparsePolynomial {
    terms: Vec<SparseTerm>,
}

impl SparsePolynomial {
    /// Build from an unordered term list, validating weight, range, and
    /// position uniqueness, then sorting into canonical order.
    ///
    /// # Errors
    /// Returns [`GlyphError::InvalidEncoding`] if the weight is wrong, a
    /// position is out of range, or two entries share a position.
    pub fn new(mut terms: Vec<SparseTerm>, param_set: ParamSet) -> Result<Self, GlyphError> {
        let params = param_set.params();
        if terms.len() != params.omega {
            return Err(GlyphError::InvalidEncoding(format!(
                "challenge has weight {}, expected {}",
                terms.len(),
                params.omega
            )));
        }
        let mut positions: Vec<u16> = terms.iter().map(|t| t.pos).collect();
        positions.sort_unstable();
        if positions
            .iter()
            .any(|&p| usize::from(p) >= params.n)
        {
            return Err(GlyphError::InvalidEncoding(
                "challenge position out of range".into(),
            ));
        }
        if positions.windows(2).any(|w| w[0] == w[1]) {
            return Err(GlyphError::InvalidEncoding(
                "challenge has a duplicate position".into(),
            ));
        }
        terms.sort_by_key(|t| t.pos);
        Ok(Self { terms })
    }

    /// The canonically ordered term list.
    #[must_use]
    pub fn terms(&self) -> &[SparseTerm] {
        &self.terms
    }
}

/// A signature: two ring elements plus the sparse challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub(crate) z1: Vec<u16>,
    pub(crate) z2: Vec<u16>,
    pub(crate) c: SparsePolynomial,
    pub(crate) param_set: ParamSet,
}

impl Signature {
    /// Build a signature, validating `z1`/`z2` bounds and the degenerate
    /// all-zero / all-`±k` cases.
    ///
    /// # Errors
    /// Returns [`GlyphError::InvalidSignature`] on any violation.
    pub fn new(
        z1: Vec<u16>,
        z2: Vec<u16>,
        c: SparsePolynomial,
        param_set: ParamSet,
    ) -> Result<Self, GlyphError> {
        let params = param_set.params();
        let k = params.k();
        if z1.len() != params.n || z2.len() != params.n {
            return Err(GlyphError::InvalidSignature(format!(
                "z1/z2 must both have length {}",
                params.n
            )));
        }
        if z1.iter().any(|&c| abs(c, params.q) > k) {
            return Err(GlyphError::InvalidSignature(
                "z1 coefficient exceeds B-omega".into(),
            ));
        }
        if z2
            .iter()
            .any(|&c| c != 0 && c != k && c != params.q - k)
        {
            return Err(GlyphError::InvalidSignature(
                "z2 coefficient outside {0, k, q-k}".into(),
            ));
        }
        if z1.iter().all(|&c| c == 0) {
            return Err(GlyphError::InvalidSignature(
                "z1 is the all-zero vector".into(),
            ));
        }
        if z1.iter().all(|&c| c == params.q - 1) {
            return Err(GlyphError::InvalidSignature(
                "z1 is the all-(q-1) vector".into(),
            ));
        }
        if z2.iter().all(|&c| c == 0) {
            return Err(GlyphError::InvalidSignature(
                "z2 is the all-zero vector".into(),
            ));
        }
        if z2.iter().all(|&c| c == k) {
            return Err(GlyphError::InvalidSignature(
                "z2 is the all-(B-omega) vector".into(),
            ));
        }
        if z2.iter().all(|&c| c == params.q - k) {
            return Err(GlyphError::InvalidSignature(
                "z2 is the all-(-(B-omega)) vector".into(),
            ));
        }
        Ok(Self {
            z1,
            z2,
            c,
            param_set,
        })
    }

    /// The first response vector.
    #[must_use]
    pub fn z1(&self) -> &[u16] {
        &self.z1
    }

    /// The second response vector.
    #[must_use]
    pub fn z2(&self) -> &[u16] {
        &self.z2
    }

    /// The challenge polynomial.
    #[must_use]
    pub fn c(&self) -> &SparsePolynomial {
        &self.c
    }

    /// The parameter set this signature was built under.
    #[must_use]
    pub const fn param_set(&self) -> ParamSet {
        self.param_set
    }
}
