//! Coefficient-wise operations on ring elements (used both in the NTT
//! evaluation domain and directly on plain coefficient vectors).

use crate::field;

/// `a + b`, coefficient-wise. Panics if the slices differ in length.
#[must_use]
pub fn add(a: &[u16], b: &[u16], q: u16) -> Vec<u16> {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| field::add(x, y, q)).collect()
}

/// `a - b`, coefficient-wise. Panics if the slices differ in length.
#[must_use]
pub fn sub(a: &[u16], b: &[u16], q: u16) -> Vec<u16> {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| field::sub(x, y, q)).collect()
}

/// `a * b`, coefficient-wise (valid as ring multiplication only when `a`
/// and `b` are already in the NTT evaluation domain). Panics if the slices
/// differ in length.
#[must_use]
pub fn mul(a: &[u16], b: &[u16], q: u16) -> Vec<u16> {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| field::mul(x, y, q)).collect()
}

/// `a * b + c`, coefficient-wise, in a single pass. Panics if the slices
/// differ in length.
#[must_use]
pub fn mul_add(a: &[u16], b: &[u16], c: &[u16], q: u16) -> Vec<u16> {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), c.len());
    a.iter()
        .zip(b)
        .zip(c)
        .map(|((&x, &y), &z)| field::add(field::mul(x, y, q), z, q))
        .collect()
}
