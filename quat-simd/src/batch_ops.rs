//! Batch operations for animation and pose-processing hot paths.
//!
//! This module provides slice-level operations built on the batch types,
//! with an explicit remainder policy: inputs are processed in 8-wide chunks,
//! then a 4-wide chunk, then a scalar tail.

use nalgebra::Quaternion;

use crate::{Quatx4, Quatx8};

// =============================================================================
// Batch Dot Product Operations
// =============================================================================

/// Compute 4 pairwise quaternion dot products in one lane-parallel pass.
///
/// Lane `i` of the result is `a[i] · b[i]`. This is the core batched
/// operation: both inputs are transposed into SoA form and reduced with
/// 4 lane-wise multiplies and 3 lane-wise adds.
///
/// # Example
///
/// ```
/// use quat_simd::batch_dot_4;
/// use nalgebra::Quaternion;
///
/// // One distinct component per lane (w, i, j, k argument order)
/// let poses = [
///     Quaternion::new(0.0, 1.0, 0.0, 0.0),
///     Quaternion::new(0.0, 0.0, 1.0, 0.0),
///     Quaternion::new(0.0, 0.0, 0.0, 1.0),
///     Quaternion::new(1.0, 0.0, 0.0, 0.0),
/// ];
/// let references = [Quaternion::new(1.0, 1.0, 1.0, 1.0); 4];
///
/// let dots = batch_dot_4(&poses, &references);
/// assert_eq!(dots, [1.0, 1.0, 1.0, 1.0]);
/// ```
#[must_use]
#[inline]
pub fn batch_dot_4(a: &[Quaternion<f32>; 4], b: &[Quaternion<f32>; 4]) -> [f32; 4] {
    Quatx4::from_quaternions(*a).dot_pairwise(&Quatx4::from_quaternions(*b))
}

/// Compute pairwise dot products over two equal-length slices.
///
/// Returns one dot product per input pair, in input order. Full 8-wide
/// chunks go through [`Quatx8`], a remaining 4-wide chunk through
/// [`Quatx4`], and the final tail through scalar dots.
///
/// # Panics
///
/// Panics in debug builds if the slices have different lengths.
#[must_use]
pub fn batch_dot_slice(a: &[Quaternion<f32>], b: &[Quaternion<f32>]) -> Vec<f32> {
    debug_assert_eq!(a.len(), b.len(), "Pairwise dot needs equal-length slices");
    let n = a.len().min(b.len());
    let mut result = Vec::with_capacity(n);

    // Process in chunks of 8
    let chunks = n / 8;
    for chunk_idx in 0..chunks {
        let base = chunk_idx * 8;
        let lhs = Quatx8::from_slice(&a[base..]);
        let rhs = Quatx8::from_slice(&b[base..]);
        result.extend_from_slice(&lhs.dot_pairwise(&rhs));
    }

    // Process a remaining chunk of 4
    let remainder_start_8 = chunks * 8;
    let remaining = n - remainder_start_8;
    if remaining >= 4 {
        let lhs = Quatx4::from_slice(&a[remainder_start_8..]);
        let rhs = Quatx4::from_slice(&b[remainder_start_8..]);
        result.extend_from_slice(&lhs.dot_pairwise(&rhs));
    }

    // Handle final remainder
    let final_start = remainder_start_8 + (remaining / 4) * 4;
    for (qa, qb) in a[final_start..n].iter().zip(&b[final_start..n]) {
        result.push(qa.dot(qb));
    }

    result
}

/// Find the candidate rotation most aligned with a reference.
///
/// Alignment is scored by `|q · reference|`: a quaternion and its negation
/// represent the same rotation, so the antipodal representation of the
/// reference counts as perfectly aligned. Returns `(index, |dot|)`.
///
/// # Example
///
/// ```
/// use quat_simd::find_closest;
/// use nalgebra::Quaternion;
///
/// let candidates = vec![
///     Quaternion::new(0.0, 1.0, 0.0, 0.0),
///     Quaternion::new(-1.0, 0.0, 0.0, 0.0), // -identity: same rotation as identity
///     Quaternion::new(0.0, 0.0, 1.0, 0.0),
/// ];
/// let reference = Quaternion::new(1.0, 0.0, 0.0, 0.0); // identity
///
/// let (idx, score) = find_closest(&candidates, &reference);
/// assert_eq!(idx, 1);
/// assert_eq!(score, 1.0);
/// ```
#[must_use]
pub fn find_closest(candidates: &[Quaternion<f32>], reference: &Quaternion<f32>) -> (usize, f32) {
    if candidates.is_empty() {
        return (0, f32::NEG_INFINITY);
    }

    let n = candidates.len();
    let mut global_max_idx = 0;
    let mut global_max_val = f32::NEG_INFINITY;

    // Process in chunks of 8
    let chunks = n / 8;
    for chunk_idx in 0..chunks {
        let base = chunk_idx * 8;
        let batch = Quatx8::from_slice(&candidates[base..]);
        let (local_idx, local_max) = batch.argmax_abs_dot(reference);
        if local_max > global_max_val {
            global_max_val = local_max;
            global_max_idx = base + local_idx;
        }
    }

    // Process a remaining chunk of 4
    let remainder_start_8 = chunks * 8;
    let remaining = n - remainder_start_8;
    if remaining >= 4 {
        let batch = Quatx4::from_slice(&candidates[remainder_start_8..]);
        let (local_idx, local_max) = batch.argmax_abs_dot(reference);
        if local_max > global_max_val {
            global_max_val = local_max;
            global_max_idx = remainder_start_8 + local_idx;
        }
    }

    // Handle final remainder
    let final_start = remainder_start_8 + (remaining / 4) * 4;
    for (i, q) in candidates[final_start..].iter().enumerate() {
        let score = q.dot(reference).abs();
        if score > global_max_val {
            global_max_val = score;
            global_max_idx = final_start + i;
        }
    }

    (global_max_idx, global_max_val)
}

// =============================================================================
// Blend Accumulation Operations
// =============================================================================

/// Compute 4 AXPY operations: `y[i] = a * x[i] + y[i]`
///
/// This is the accumulation step of weighted pose blending: each
/// contribution is scaled by its blend weight and added onto the
/// accumulator batch in place.
#[inline]
pub fn batch_axpy_4(a: f32, x: &Quatx4, y: &mut Quatx4) {
    for i in 0..4 {
        y.xs[i] = a.mul_add(x.xs[i], y.xs[i]);
    }
    for i in 0..4 {
        y.ys[i] = a.mul_add(x.ys[i], y.ys[i]);
    }
    for i in 0..4 {
        y.zs[i] = a.mul_add(x.zs[i], y.zs[i]);
    }
    for i in 0..4 {
        y.ws[i] = a.mul_add(x.ws[i], y.ws[i]);
    }
}
