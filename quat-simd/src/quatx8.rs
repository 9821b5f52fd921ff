//! SIMD-optimized 8-wide quaternion batch type.
//!
//! [`Quatx8`] stores 8 `Quaternion<f32>` values in a structure-of-arrays (`SoA`)
//! layout optimized for SIMD operations on 256-bit registers (`AVX`/`AVX2`).

use nalgebra::Quaternion;

/// A batch of 8 `Quaternion<f32>` values stored in `SoA` (Structure of Arrays) layout.
///
/// The contract is identical to [`Quatx4`](crate::Quatx4) at twice the lane
/// count: like components are grouped into contiguous, 32-byte aligned
/// sequences so one 256-bit vector load covers a component of all eight
/// lanes. Slice-level helpers use this type for their wide inner loop and
/// fall back to [`Quatx4`](crate::Quatx4) and scalar code for the tail.
///
/// # Memory Layout
///
/// ```text
/// xs: [x0 .. x7]  <- 8 i components (256 bits / 32 bytes)
/// ys: [y0 .. y7]  <- 8 j components (256 bits / 32 bytes)
/// zs: [z0 .. z7]  <- 8 k components (256 bits / 32 bytes)
/// ws: [w0 .. w7]  <- 8 w components (256 bits / 32 bytes)
/// ```
///
/// # Example
///
/// ```
/// use quat_simd::Quatx8;
/// use nalgebra::Quaternion;
///
/// let batch = Quatx8::splat(Quaternion::new(1.0, 2.0, 3.0, 4.0));
///
/// // All 8 lanes are the same
/// let norms_sq = batch.norm_squared();
/// for norm_sq in norms_sq {
///     assert_eq!(norm_sq, 30.0);  // 1² + 2² + 3² + 4²
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C, align(32))]
pub struct Quatx8 {
    /// I (x) components of all 8 quaternions.
    pub xs: [f32; 8],
    /// J (y) components of all 8 quaternions.
    pub ys: [f32; 8],
    /// K (z) components of all 8 quaternions.
    pub zs: [f32; 8],
    /// Scalar (w) components of all 8 quaternions.
    pub ws: [f32; 8],
}

impl Default for Quatx8 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Quatx8 {
    /// Create a batch of 8 zero quaternions.
    #[must_use]
    #[inline]
    pub const fn zeros() -> Self {
        Self {
            xs: [0.0; 8],
            ys: [0.0; 8],
            zs: [0.0; 8],
            ws: [0.0; 8],
        }
    }

    /// Create a batch of 8 identity quaternions (w = 1, vector part zero).
    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        Self {
            xs: [0.0; 8],
            ys: [0.0; 8],
            zs: [0.0; 8],
            ws: [1.0; 8],
        }
    }

    /// Create from 8 individual quaternions.
    #[must_use]
    #[inline]
    pub fn from_quaternions(quaternions: [Quaternion<f32>; 8]) -> Self {
        let mut result = Self::zeros();
        for (i, q) in quaternions.iter().enumerate() {
            result.xs[i] = q.i;
            result.ys[i] = q.j;
            result.zs[i] = q.k;
            result.ws[i] = q.w;
        }
        result
    }

    /// Create from a slice of quaternions.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the slice has fewer than 8 elements.
    #[must_use]
    #[inline]
    pub fn from_slice(quaternions: &[Quaternion<f32>]) -> Self {
        debug_assert!(quaternions.len() >= 8, "Need at least 8 quaternions");
        let mut result = Self::zeros();
        for i in 0..8 {
            result.xs[i] = quaternions[i].i;
            result.ys[i] = quaternions[i].j;
            result.zs[i] = quaternions[i].k;
            result.ws[i] = quaternions[i].w;
        }
        result
    }

    /// Create from a slice, padding with zero quaternions if fewer than 8.
    #[must_use]
    #[inline]
    pub fn from_slice_padded(quaternions: &[Quaternion<f32>]) -> Self {
        let mut result = Self::zeros();
        for (i, q) in quaternions.iter().take(8).enumerate() {
            result.xs[i] = q.i;
            result.ys[i] = q.j;
            result.zs[i] = q.k;
            result.ws[i] = q.w;
        }
        result
    }

    /// Create by broadcasting a single quaternion to all 8 lanes.
    #[must_use]
    #[inline]
    pub fn splat(q: Quaternion<f32>) -> Self {
        Self {
            xs: [q.i; 8],
            ys: [q.j; 8],
            zs: [q.k; 8],
            ws: [q.w; 8],
        }
    }

    /// Extract the quaternion at a given lane.
    #[must_use]
    #[inline]
    pub fn get(&self, lane: usize) -> Quaternion<f32> {
        debug_assert!(lane < 8);
        Quaternion::new(self.ws[lane], self.xs[lane], self.ys[lane], self.zs[lane])
    }

    /// Compute pairwise dot products between this batch and another.
    ///
    /// Lane `i` of the result is `self[i] · other[i]`. Same accumulation
    /// order and tolerance note as [`Quatx4::dot_pairwise`](crate::Quatx4::dot_pairwise).
    #[must_use]
    #[inline]
    pub fn dot_pairwise(&self, other: &Self) -> [f32; 8] {
        let mut result = [0.0; 8];

        for i in 0..8 {
            result[i] = self.xs[i] * other.xs[i];
        }
        for i in 0..8 {
            result[i] += self.ys[i] * other.ys[i];
        }
        for i in 0..8 {
            result[i] += self.zs[i] * other.zs[i];
        }
        for i in 0..8 {
            result[i] += self.ws[i] * other.ws[i];
        }

        result
    }

    /// Compute the dot product of each lane with a single reference quaternion.
    #[must_use]
    #[inline]
    pub fn dot(&self, reference: &Quaternion<f32>) -> [f32; 8] {
        let mut result = [0.0; 8];

        for i in 0..8 {
            result[i] = self.xs[i] * reference.i;
        }
        for i in 0..8 {
            result[i] += self.ys[i] * reference.j;
        }
        for i in 0..8 {
            result[i] += self.zs[i] * reference.k;
        }
        for i in 0..8 {
            result[i] += self.ws[i] * reference.w;
        }

        result
    }

    /// Compute the squared norm of each quaternion.
    #[must_use]
    #[inline]
    pub fn norm_squared(&self) -> [f32; 8] {
        self.dot_pairwise(self)
    }

    /// Add two batches lane-wise.
    #[must_use]
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..8 {
            out.xs[i] = self.xs[i] + other.xs[i];
        }
        for i in 0..8 {
            out.ys[i] = self.ys[i] + other.ys[i];
        }
        for i in 0..8 {
            out.zs[i] = self.zs[i] + other.zs[i];
        }
        for i in 0..8 {
            out.ws[i] = self.ws[i] + other.ws[i];
        }
        out
    }

    /// Multiply every component of every lane by a scalar.
    #[must_use]
    #[inline]
    pub fn scale(&self, scalar: f32) -> Self {
        let mut out = Self::zeros();
        for i in 0..8 {
            out.xs[i] = self.xs[i] * scalar;
        }
        for i in 0..8 {
            out.ys[i] = self.ys[i] * scalar;
        }
        for i in 0..8 {
            out.zs[i] = self.zs[i] * scalar;
        }
        for i in 0..8 {
            out.ws[i] = self.ws[i] * scalar;
        }
        out
    }

    /// Conjugate all lanes: the vector parts flip sign, the scalar parts
    /// are unchanged.
    #[must_use]
    #[inline]
    pub fn conjugate(&self) -> Self {
        let mut out = Self::zeros();
        for i in 0..8 {
            out.xs[i] = -self.xs[i];
        }
        for i in 0..8 {
            out.ys[i] = -self.ys[i];
        }
        for i in 0..8 {
            out.zs[i] = -self.zs[i];
        }
        for i in 0..8 {
            out.ws[i] = self.ws[i];
        }
        out
    }

    /// Find the lane whose rotation is most aligned with a reference.
    ///
    /// Alignment is scored by the absolute dot product, since `q` and `-q`
    /// represent the same rotation. Returns `(lane, |dot|)`.
    #[must_use]
    #[inline]
    pub fn argmax_abs_dot(&self, reference: &Quaternion<f32>) -> (usize, f32) {
        let dots = self.dot(reference);
        let mut max_idx = 0;
        let mut max_val = dots[0].abs();
        for i in 1..8 {
            let a = dots[i].abs();
            if a > max_val {
                max_val = a;
                max_idx = i;
            }
        }
        (max_idx, max_val)
    }
}
