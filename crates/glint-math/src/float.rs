//! Floating-point tolerance helpers.

/// Relative tolerance used by the `equals` predicates.
pub const EPSILON: f32 = 1e-6;

/// Approximate equality scaled by the magnitude of the operands.
///
/// Values below 1.0 are compared absolutely, larger ones relatively:
/// `|a - b| <= EPSILON * max(1, |a|, |b|)`.
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON * 1.0f32.max(a.abs()).max(b.abs())
}

/// Relative determinant below which a matrix is treated as singular.
const SINGULAR_TOLERANCE: f32 = 16.0 * f32::EPSILON;

/// Whether `det` is zero for a square matrix stored as `dim`-length columns.
///
/// `|det|` is compared against the Hadamard bound (the product of the column
/// lengths), so a uniform scale of any size keeps the ratio at 1 while
/// rank-deficient matrices land far below [`SINGULAR_TOLERANCE`] even with
/// rounding noise. Non-finite input counts as singular.
pub(crate) fn is_singular(det: f32, elements: &[f32], dim: usize) -> bool {
    let bound: f64 = elements
        .chunks_exact(dim)
        .map(|col| col.iter().map(|&e| f64::from(e) * f64::from(e)).sum::<f64>().sqrt())
        .product();
    !(f64::from(det).abs() > f64::from(SINGULAR_TOLERANCE) * bound) || !(1.0 / det).is_finite()
}

/// Test helper: element-wise comparison with an absolute tolerance.
#[cfg(test)]
pub(crate) fn assert_close(actual: &[f32], expected: &[f32], tolerance: f32) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "element {i}: {a} != {e} (tolerance {tolerance})\n  actual:   {actual:?}\n  expected: {expected:?}"
        );
    }
}
