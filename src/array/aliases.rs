//! Pre-defined type aliases for common `NumArray` element types.

use super::NumArray;

/// Numeric array with `f32` elements.
pub type NumArrayf32 = NumArray<f32>;
/// Numeric array with `f64` elements.
pub type NumArrayf64 = NumArray<f64>;
