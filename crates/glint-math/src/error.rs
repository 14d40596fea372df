use std::fmt;

/// Errors returned by the strict (fallible) entry points of this crate.
///
/// Regular math operations never fail; see the per-type docs for how
/// degenerate input is handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// A flat buffer had the wrong number of elements for the target type.
    SliceLength { expected: usize, actual: usize },
    /// The matrix has no inverse.
    Singular { determinant: f32 },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::SliceLength { expected, actual } => {
                write!(f, "expected {expected} elements, got {actual}")
            }
            MathError::Singular { determinant } => {
                write!(f, "matrix is singular (determinant = {determinant})")
            }
        }
    }
}

impl std::error::Error for MathError {}

/// Checks a flat buffer length before it is copied into a fixed-size type.
pub(crate) fn check_len(slice: &[f32], expected: usize) -> Result<(), MathError> {
    if slice.len() == expected {
        Ok(())
    } else {
        Err(MathError::SliceLength { expected, actual: slice.len() })
    }
}
