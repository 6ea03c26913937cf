//! Fixed parameter sets for the signature scheme, selectable at runtime.
//!
//! [`ParamSet::Glyph1024Q12289`] is the scheme's operating parameter set (see
//! the external interface spec); [`ParamSet::Glyph1024Q59393Wide`] is the
//! documented-but-disabled alternative, wired for dispatch and exercised only
//! by tests.

/// Selects which fixed parameter set a [`Params`] value was built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamSet {
    /// n=1024, q=12289, B=4095. The scheme's operating parameter set.
    Glyph1024Q12289,
    /// n=1024, q=59393, B=16383. Documented but disabled by default.
    Glyph1024Q59393Wide,
}

/// Runtime constants for one parameter set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Ring dimension (always a power of two).
    pub n: usize,
    /// Prime modulus.
    pub q: u16,
    /// Ephemeral coefficient bound B.
    pub b: u16,
    /// Hamming weight of the challenge polynomial.
    pub omega: usize,
    /// Bit width of a ring-position index, `log2(n)`.
    pub n_bits: u32,
    /// Bit width used to encode a z1 coefficient.
    pub b_bits: u32,
    /// Bit width used to encode a public-key coefficient.
    pub q_bits: u32,
    /// Generator `g` with `g^2` a primitive n-th root of unity mod `q`.
    pub generator: u16,
}

impl ParamSet {
    /// Resolve to the concrete runtime constants.
    #[must_use]
    pub const fn params(self) -> Params {
        match self {
            Self::Glyph1024Q12289 => Params {
                n: 1024,
                q: 12289,
                b: 4095,
                omega: 16,
                n_bits: 10,
                b_bits: 12,
                q_bits: 14,
                generator: 7,
            },
            Self::Glyph1024Q59393Wide => Params {
                n: 1024,
                q: 59393,
                b: 16383,
                omega: 16,
                n_bits: 10,
                b_bits: 14,
                q_bits: 16,
                generator: 3,
            },
        }
    }

    /// Dispatch on a modulus value observed from decoded bytes or a config
    /// file; returns `None` for any `q` outside the two fixed sets.
    #[must_use]
    pub fn from_modulus(q: u16) -> Option<Self> {
        match q {
            12289 => Some(Self::Glyph1024Q12289),
            59393 => Some(Self::Glyph1024Q59393Wide),
            _ => None,
        }
    }
}

impl Default for ParamSet {
    fn default() -> Self {
        Self::Glyph1024Q12289
    }
}

impl Params {
    /// `k = B - omega`, the bound used throughout rejection sampling and
    /// compression.
    #[inline]
    #[must_use]
    pub const fn k(&self) -> u16 {
        self.b - self.omega as u16
    }

    /// Bucket width `2k+1` used by k-floor rounding and compression.
    #[inline]
    #[must_use]
    pub const fn bucket_width(&self) -> u32 {
        2 * self.k() as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_round_trips() {
        assert_eq!(
            ParamSet::from_modulus(12289),
            Some(ParamSet::Glyph1024Q12289)
        );
        assert_eq!(
            ParamSet::from_modulus(59393),
            Some(ParamSet::Glyph1024Q59393Wide)
        );
        assert_eq!(ParamSet::from_modulus(97), None);
    }

    #[test]
    fn sizes_match_spec() {
        let p = ParamSet::Glyph1024Q12289.params();
        assert_eq!(p.q_bits as usize * p.n / 8, 1792);
        assert_eq!(2 * 2 * p.n / 8, 512);
        assert_eq!(
            ((p.b_bits as usize + 1 + 2) * p.n + 11 * p.omega) / 8,
            1942
        );
    }
}
