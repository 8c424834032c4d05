//! Modular arithmetic over the signal space `0..size`.
//!
//! Rotor rotation counters are unbounded, so every helper reduces its
//! operands first and never overflows for any `usize` input.

/// Reduces `value` into `0..size`.
///
/// # Parameters
/// - `value`: Any unsigned value, e.g. an unbounded rotation counter.
/// - `size`: Alphabet size (non-zero).
#[inline]
pub(crate) fn wrap(value: usize, size: usize) -> usize {
    value % size
}

/// Computes `(a + b) mod size`.
#[inline]
pub(crate) fn add(a: usize, b: usize, size: usize) -> usize {
    (wrap(a, size) + wrap(b, size)) % size
}

/// Computes `(a - b) mod size`, always landing in `0..size`.
#[inline]
pub(crate) fn sub(a: usize, b: usize, size: usize) -> usize {
    (wrap(a, size) + size - wrap(b, size)) % size
}
