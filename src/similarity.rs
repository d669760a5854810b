//! Cosine similarity between vectors

use crate::error::{Result, SearchError};
use crate::vector::Vector;

/// Magnitudes below this are treated as zero to absorb floating-point
/// underflow; comparing against a (near-)zero vector yields 0, not NaN.
pub const MAGNITUDE_EPSILON: f64 = 1e-8;

/// Compute the cosine similarity between two vectors, in [-1, 1].
///
/// Returns 0.0 when either vector has (near-)zero magnitude. Errors with
/// `DimensionMismatch` when the vectors have different lengths.
pub fn cosine_similarity(a: &Vector, b: &Vector) -> Result<f64> {
    if !a.has_same_dimension(b) {
        return Err(SearchError::DimensionMismatch {
            expected: a.dimension(),
            actual: b.dimension(),
        });
    }

    // Single pass: dot product and both squared magnitudes together.
    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;
    for (x, y) in a.as_slice().iter().zip(b.as_slice().iter()) {
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    let norm_a = mag_a.sqrt();
    let norm_b = mag_b.sqrt();
    if norm_a < MAGNITUDE_EPSILON || norm_b < MAGNITUDE_EPSILON {
        return Ok(0.0);
    }

    // Clamp to [-1, 1] to handle floating point errors
    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
}
