//! SIMD-friendly batched quaternion arithmetic.
//!
//! This crate provides lane-parallel arithmetic over groups of `f32`
//! quaternions for hot paths in animation and pose processing. Four (or
//! eight) quaternions are transposed into a structure-of-arrays batch whose
//! per-component storage is contiguous and vector-width aligned, so one
//! linear sequence of vector instructions replaces four scalar passes.
//!
//! # Architecture
//!
//! The crate is organized around batched quaternion types:
//! - [`Quatx4`] - Process 4 `Quaternion<f32>` values simultaneously (SSE/NEON)
//! - [`Quatx8`] - Process 8 `Quaternion<f32>` values simultaneously (AVX/AVX2)
//!
//! Packing (`from_quaternions`) is the AoS → SoA transpose; it is paid once
//! per batch and every kernel operation afterwards reads aligned component
//! sequences. Kernel operations are pure: inputs are never mutated, lane
//! order is preserved from inputs to results, and there is no internal state.
//!
//! # Hot Paths Optimized
//!
//! These operations are the primary targets for batching:
//!
//! 1. **Pose similarity scoring** - Dot products of candidate rotations
//!    against a reference, four or eight at a time
//! 2. **Blend-target selection** - Argmax of absolute dot over a candidate
//!    set, sign-insensitive because `q` and `-q` are the same rotation
//! 3. **Weighted pose accumulation** - AXPY-style scale-and-add across a
//!    batch of blend contributions
//!
//! # Example
//!
//! ```
//! use quat_simd::batch_dot_4;
//! use nalgebra::Quaternion;
//!
//! // Quaternion::new takes (w, i, j, k): one distinct component per lane
//! let poses = [
//!     Quaternion::new(0.0, 1.0, 0.0, 0.0),
//!     Quaternion::new(0.0, 0.0, 1.0, 0.0),
//!     Quaternion::new(0.0, 0.0, 0.0, 1.0),
//!     Quaternion::new(1.0, 0.0, 0.0, 0.0),
//! ];
//! let references = [Quaternion::new(1.0, 1.0, 1.0, 1.0); 4];
//!
//! let dots = batch_dot_4(&poses, &references);
//! assert_eq!(dots, [1.0, 1.0, 1.0, 1.0]);
//! ```
//!
//! # Numeric Behavior
//!
//! Batched dot products accumulate one component sequence at a time, which
//! can round differently in the last ulp than a scalar left-to-right
//! reduction. Compare against scalar results with a relative tolerance
//! (1e-5 is ample for unit-magnitude rotation data).
//!
//! # Performance Notes
//!
//! - Kernels are branch-free per lane; work on partial batches is handled
//!   by zero-padding constructors and scalar tails, never by per-lane
//!   conditionals
//! - The arithmetic is written as per-component indexed loops that compile
//!   to vector instructions on any target with 128-bit (or wider) SIMD, and
//!   degrade to a scalar loop where SIMD is unavailable

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic, missing_docs)]
// Indexed per-lane loops keep the kernels in the shape the auto-vectorizer recognizes
#![allow(clippy::needless_range_loop)]
// Per-field multiply-then-add sequences are the vectorization pattern, not a flop bug
#![allow(clippy::suboptimal_flops)]
// Some functions use non-const methods internally
#![allow(clippy::missing_const_for_fn)]

mod batch_ops;
mod quatx4;
mod quatx8;

pub use batch_ops::*;
pub use quatx4::*;
pub use quatx8::*;
