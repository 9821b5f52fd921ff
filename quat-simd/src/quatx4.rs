//! SIMD-optimized 4-wide quaternion batch type.
//!
//! [`Quatx4`] stores 4 `Quaternion<f32>` values in a structure-of-arrays (`SoA`)
//! layout optimized for SIMD operations on 128-bit registers (`SSE`/`NEON`).

use nalgebra::Quaternion;

/// A batch of 4 `Quaternion<f32>` values stored in `SoA` (Structure of Arrays) layout.
///
/// Packing transposes the four quaternions so that like components sit next
/// to each other, allowing 4 lane operations to execute simultaneously. The
/// `xs`/`ys`/`zs` sequences hold the vector (i, j, k) parts; `ws` holds the
/// scalar parts.
///
/// # Memory Layout
///
/// ```text
/// xs: [x0, x1, x2, x3]  <- 4 i components (128 bits / 16 bytes)
/// ys: [y0, y1, y2, y3]  <- 4 j components (128 bits / 16 bytes)
/// zs: [z0, z1, z2, z3]  <- 4 k components (128 bits / 16 bytes)
/// ws: [w0, w1, w2, w3]  <- 4 w components (128 bits / 16 bytes)
/// ```
///
/// Each field sequence is contiguous and 16-byte aligned (`repr(C, align(16))`),
/// so a single 128-bit vector load covers one component of all four lanes.
/// The alignment is established by construction; safe code cannot produce a
/// misaligned batch.
///
/// Lane order is caller-defined and preserved identically across all four
/// field sequences: lane `i` of every operation's result corresponds to the
/// quaternion packed into lane `i` of the input(s).
///
/// # Example
///
/// ```
/// use quat_simd::Quatx4;
/// use nalgebra::Quaternion;
///
/// // Quaternion::new takes (w, i, j, k)
/// let batch = Quatx4::from_quaternions([
///     Quaternion::new(1.0, 2.0, 3.0, 4.0),
///     Quaternion::new(1.0, 0.0, 0.0, 0.0),
///     Quaternion::new(0.0, 1.0, 0.0, 0.0),
///     Quaternion::new(0.5, 0.5, 0.5, 0.5),
/// ]);
///
/// // Compute all 4 squared norms at once
/// let norms_sq = batch.norm_squared();
/// assert_eq!(norms_sq[0], 30.0);  // 1² + 2² + 3² + 4²
/// assert_eq!(norms_sq[1], 1.0);
/// assert_eq!(norms_sq[3], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C, align(16))]
pub struct Quatx4 {
    /// I (x) components of all 4 quaternions.
    pub xs: [f32; 4],
    /// J (y) components of all 4 quaternions.
    pub ys: [f32; 4],
    /// K (z) components of all 4 quaternions.
    pub zs: [f32; 4],
    /// Scalar (w) components of all 4 quaternions.
    pub ws: [f32; 4],
}

impl Default for Quatx4 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Quatx4 {
    /// Create a batch of 4 zero quaternions.
    #[must_use]
    #[inline]
    pub const fn zeros() -> Self {
        Self {
            xs: [0.0; 4],
            ys: [0.0; 4],
            zs: [0.0; 4],
            ws: [0.0; 4],
        }
    }

    /// Create a batch of 4 identity quaternions (w = 1, vector part zero).
    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        Self {
            xs: [0.0; 4],
            ys: [0.0; 4],
            zs: [0.0; 4],
            ws: [1.0; 4],
        }
    }

    /// Create from 4 individual quaternions.
    ///
    /// This is the AoS → SoA transpose: lane `i` of each field sequence is
    /// the corresponding component of `quaternions[i]`. The one-time
    /// rearrangement cost buys aligned vector access for every kernel
    /// operation that follows.
    #[must_use]
    #[inline]
    pub fn from_quaternions(quaternions: [Quaternion<f32>; 4]) -> Self {
        Self {
            xs: [
                quaternions[0].i,
                quaternions[1].i,
                quaternions[2].i,
                quaternions[3].i,
            ],
            ys: [
                quaternions[0].j,
                quaternions[1].j,
                quaternions[2].j,
                quaternions[3].j,
            ],
            zs: [
                quaternions[0].k,
                quaternions[1].k,
                quaternions[2].k,
                quaternions[3].k,
            ],
            ws: [
                quaternions[0].w,
                quaternions[1].w,
                quaternions[2].w,
                quaternions[3].w,
            ],
        }
    }

    /// Create from a slice of quaternions.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the slice has fewer than 4 elements.
    #[must_use]
    #[inline]
    pub fn from_slice(quaternions: &[Quaternion<f32>]) -> Self {
        debug_assert!(quaternions.len() >= 4, "Need at least 4 quaternions");
        Self::from_quaternions([
            quaternions[0],
            quaternions[1],
            quaternions[2],
            quaternions[3],
        ])
    }

    /// Create from a slice, padding with zero quaternions if fewer than 4.
    ///
    /// Zero lanes contribute zero to every dot reduction, so padded lanes
    /// are inert in the results.
    #[must_use]
    #[inline]
    pub fn from_slice_padded(quaternions: &[Quaternion<f32>]) -> Self {
        let mut result = Self::zeros();
        for (i, q) in quaternions.iter().take(4).enumerate() {
            result.xs[i] = q.i;
            result.ys[i] = q.j;
            result.zs[i] = q.k;
            result.ws[i] = q.w;
        }
        result
    }

    /// Create by broadcasting a single quaternion to all 4 lanes.
    #[must_use]
    #[inline]
    pub fn splat(q: Quaternion<f32>) -> Self {
        Self {
            xs: [q.i; 4],
            ys: [q.j; 4],
            zs: [q.k; 4],
            ws: [q.w; 4],
        }
    }

    /// Extract the quaternion at a given lane.
    #[must_use]
    #[inline]
    pub fn get(&self, lane: usize) -> Quaternion<f32> {
        debug_assert!(lane < 4);
        Quaternion::new(self.ws[lane], self.xs[lane], self.ys[lane], self.zs[lane])
    }

    /// Convert back to an array of 4 quaternions (the inverse transpose).
    #[must_use]
    #[inline]
    pub fn to_quaternions(&self) -> [Quaternion<f32>; 4] {
        [self.get(0), self.get(1), self.get(2), self.get(3)]
    }

    /// Compute pairwise dot products between this batch and another.
    ///
    /// Lane `i` of the result is `self[i] · other[i]`, i.e. the 4-component
    /// inner product of the two quaternions packed into lane `i`. The four
    /// lanes are computed with 4 lane-wise multiplies and 3 lane-wise adds
    /// in place of 16 scalar multiplies and 12 scalar adds.
    ///
    /// Accumulation runs one component sequence at a time (x terms, then y,
    /// z, w). Rounding can therefore differ in the last ulp from a reduction
    /// in any other association order; callers comparing against scalar
    /// results should use a relative tolerance.
    #[must_use]
    #[inline]
    pub fn dot_pairwise(&self, other: &Self) -> [f32; 4] {
        let mut result = [0.0; 4];

        for i in 0..4 {
            result[i] = self.xs[i] * other.xs[i];
        }
        for i in 0..4 {
            result[i] += self.ys[i] * other.ys[i];
        }
        for i in 0..4 {
            result[i] += self.zs[i] * other.zs[i];
        }
        for i in 0..4 {
            result[i] += self.ws[i] * other.ws[i];
        }

        result
    }

    /// Compute the dot product of each lane with a single reference quaternion.
    ///
    /// Returns 4 dot products simultaneously. This is the pose-similarity
    /// primitive: the reference is broadcast across lanes, so one call scores
    /// four candidate rotations.
    #[must_use]
    #[inline]
    pub fn dot(&self, reference: &Quaternion<f32>) -> [f32; 4] {
        let mut result = [0.0; 4];

        for i in 0..4 {
            result[i] = self.xs[i] * reference.i;
        }
        for i in 0..4 {
            result[i] += self.ys[i] * reference.j;
        }
        for i in 0..4 {
            result[i] += self.zs[i] * reference.k;
        }
        for i in 0..4 {
            result[i] += self.ws[i] * reference.w;
        }

        result
    }

    /// Compute the squared norm of each quaternion.
    #[must_use]
    #[inline]
    pub fn norm_squared(&self) -> [f32; 4] {
        self.dot_pairwise(self)
    }

    /// Add two batches lane-wise.
    #[must_use]
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..4 {
            out.xs[i] = self.xs[i] + other.xs[i];
        }
        for i in 0..4 {
            out.ys[i] = self.ys[i] + other.ys[i];
        }
        for i in 0..4 {
            out.zs[i] = self.zs[i] + other.zs[i];
        }
        for i in 0..4 {
            out.ws[i] = self.ws[i] + other.ws[i];
        }
        out
    }

    /// Subtract two batches lane-wise.
    #[must_use]
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..4 {
            out.xs[i] = self.xs[i] - other.xs[i];
        }
        for i in 0..4 {
            out.ys[i] = self.ys[i] - other.ys[i];
        }
        for i in 0..4 {
            out.zs[i] = self.zs[i] - other.zs[i];
        }
        for i in 0..4 {
            out.ws[i] = self.ws[i] - other.ws[i];
        }
        out
    }

    /// Multiply every component of every lane by a scalar.
    #[must_use]
    #[inline]
    pub fn scale(&self, scalar: f32) -> Self {
        let mut out = Self::zeros();
        for i in 0..4 {
            out.xs[i] = self.xs[i] * scalar;
        }
        for i in 0..4 {
            out.ys[i] = self.ys[i] * scalar;
        }
        for i in 0..4 {
            out.zs[i] = self.zs[i] * scalar;
        }
        for i in 0..4 {
            out.ws[i] = self.ws[i] * scalar;
        }
        out
    }

    /// Multiply each lane by its corresponding scalar.
    #[must_use]
    #[inline]
    pub fn scale_each(&self, scalars: [f32; 4]) -> Self {
        let mut out = Self::zeros();
        for i in 0..4 {
            out.xs[i] = self.xs[i] * scalars[i];
        }
        for i in 0..4 {
            out.ys[i] = self.ys[i] * scalars[i];
        }
        for i in 0..4 {
            out.zs[i] = self.zs[i] * scalars[i];
        }
        for i in 0..4 {
            out.ws[i] = self.ws[i] * scalars[i];
        }
        out
    }

    /// Negate all lanes.
    #[must_use]
    #[inline]
    pub fn neg(&self) -> Self {
        let mut out = Self::zeros();
        for i in 0..4 {
            out.xs[i] = -self.xs[i];
        }
        for i in 0..4 {
            out.ys[i] = -self.ys[i];
        }
        for i in 0..4 {
            out.zs[i] = -self.zs[i];
        }
        for i in 0..4 {
            out.ws[i] = -self.ws[i];
        }
        out
    }

    /// Conjugate all lanes: the vector parts flip sign, the scalar parts
    /// are unchanged.
    #[must_use]
    #[inline]
    pub fn conjugate(&self) -> Self {
        let mut out = Self::zeros();
        for i in 0..4 {
            out.xs[i] = -self.xs[i];
        }
        for i in 0..4 {
            out.ys[i] = -self.ys[i];
        }
        for i in 0..4 {
            out.zs[i] = -self.zs[i];
        }
        for i in 0..4 {
            out.ws[i] = self.ws[i];
        }
        out
    }

    /// Fused multiply-add: `self * a + b`, lane-wise.
    #[must_use]
    #[inline]
    pub fn mul_add(&self, a: f32, b: &Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..4 {
            out.xs[i] = self.xs[i].mul_add(a, b.xs[i]);
        }
        for i in 0..4 {
            out.ys[i] = self.ys[i].mul_add(a, b.ys[i]);
        }
        for i in 0..4 {
            out.zs[i] = self.zs[i].mul_add(a, b.zs[i]);
        }
        for i in 0..4 {
            out.ws[i] = self.ws[i].mul_add(a, b.ws[i]);
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
        for i in 1..4 {
            let a = dots[i].abs();
            if a > max_val {
                max_val = a;
                max_idx = i;
            }
        }
        (max_idx, max_val)
    }
}

impl std::ops::Add for Quatx4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::add(&self, &rhs)
    }
}

impl std::ops::Sub for Quatx4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::sub(&self, &rhs)
    }
}

impl std::ops::Neg for Quatx4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::neg(&self)
    }
}

impl std::ops::Mul<f32> for Quatx4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}
