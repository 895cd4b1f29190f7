use crate::traits::{count_as, FloatScalar};

use super::{try_buffer, ArrayError, NumArray};

// ── Sequences ───────────────────────────────────────────────────────

impl<T: FloatScalar> NumArray<T> {
    /// Arithmetic sequence `start, start + step, start + 2*step, …` stopping
    /// before `stop`.
    ///
    /// The element count is `ceil((stop - start) / step)`; a count that is
    /// zero, negative or NaN yields an empty array. Returns
    /// `InvalidArgument` if `step` is zero or NaN, or if `start` or `stop`
    /// is not finite.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::range(2.0_f64, 10.0, 2.0).unwrap();
    /// assert_eq!(a.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    ///
    /// let down = NumArray::range(3.0_f64, 0.0, -1.0).unwrap();
    /// assert_eq!(down.as_slice(), &[3.0, 2.0, 1.0]);
    ///
    /// assert!(NumArray::range(5.0_f64, 1.0, 1.0).unwrap().is_empty());
    /// ```
    pub fn range(start: T, stop: T, step: T) -> Result<Self, ArrayError> {
        if step.is_zero() || step.is_nan() {
            return Err(ArrayError::invalid("range", "step must be nonzero"));
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(ArrayError::invalid("range", "bounds must be finite"));
        }

        let span = ((stop - start) / step).ceil();
        let count = if span > T::zero() {
            span.to_usize().unwrap_or(usize::MAX)
        } else {
            0
        };

        let mut data = try_buffer(count)?;
        let mut k = T::zero();
        for _ in 0..count {
            data.push(start + step * k);
            k = k + T::one();
        }
        Ok(Self { data })
    }

    /// `n` evenly spaced values from `start` to `stop`, both inclusive.
    ///
    /// A single point is `start`. Returns `InvalidArgument` if `n == 0`.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::linspace(0.0_f64, 1.0, 5).unwrap();
    /// assert_eq!(a.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn linspace(start: T, stop: T, n: usize) -> Result<Self, ArrayError> {
        if n == 0 {
            return Err(ArrayError::invalid("linspace", "point count must be positive"));
        }

        let mut data = try_buffer(n)?;
        if n == 1 {
            data.push(start);
        } else {
            let denom = count_as::<T>(n - 1);
            let width = stop - start;
            let mut k = T::zero();
            for _ in 0..n {
                data.push(start + width * k / denom);
                k = k + T::one();
            }
        }
        Ok(Self { data })
    }
}
