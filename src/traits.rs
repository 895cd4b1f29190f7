use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as array elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + PartialOrd + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + PartialOrd + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point array elements.
///
/// Required by operations that need `sqrt`, `sin`, `abs`, division,
/// or a float remainder (unary math, statistics, norms, `range`/`linspace`).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Element count as a float.
///
/// Exact up to 2^53 for `f64` (2^24 for `f32`); larger counts round.
#[inline]
pub(crate) fn count_as<T: FloatScalar>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::infinity)
}
