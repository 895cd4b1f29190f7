use crate::traits::{count_as, FloatScalar, Scalar};

use super::{ArrayError, NumArray};

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar> NumArray<T> {
    /// Sum of all elements. Zero for an empty array.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[2.0, 4.0, 6.0, 8.0, 10.0]);
    /// assert_eq!(a.sum(), 30.0);
    /// ```
    pub fn sum(&self) -> T {
        let mut s = T::zero();
        for &x in &self.data {
            s = s + x;
        }
        s
    }

    /// Product of all elements. One for an empty array.
    pub fn product(&self) -> T {
        let mut p = T::one();
        for &x in &self.data {
            p = p * x;
        }
        p
    }

    /// Largest element. First occurrence wins on ties.
    ///
    /// Returns `EmptyArray` for an empty array.
    pub fn max(&self) -> Result<T, ArrayError> {
        self.check_non_empty("max")?;
        Ok(self.data[self.scan(|x, best| x > best)])
    }

    /// Smallest element. First occurrence wins on ties.
    ///
    /// Returns `EmptyArray` for an empty array.
    pub fn min(&self) -> Result<T, ArrayError> {
        self.check_non_empty("min")?;
        Ok(self.data[self.scan(|x, best| x < best)])
    }

    /// Index of the largest element.
    ///
    /// Scans from the second element with a strict `>`, so ties keep the
    /// first index and NaN never replaces the current best.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[1.0, 5.0, 3.0, 5.0]);
    /// assert_eq!(a.argmax().unwrap(), 1);
    /// assert!(NumArray::<f64>::zeros(0).argmax().is_err());
    /// ```
    pub fn argmax(&self) -> Result<usize, ArrayError> {
        self.check_non_empty("argmax")?;
        Ok(self.scan(|x, best| x > best))
    }

    /// Index of the smallest element. Ties keep the first index.
    ///
    /// Returns `EmptyArray` for an empty array.
    pub fn argmin(&self) -> Result<usize, ArrayError> {
        self.check_non_empty("argmin")?;
        Ok(self.scan(|x, best| x < best))
    }

    /// Linear scan keeping the index that `better` prefers. Caller ensures
    /// the array is non-empty.
    fn scan(&self, better: impl Fn(T, T) -> bool) -> usize {
        let mut best_index = 0;
        let mut best = self.data[0];
        for (i, &x) in self.data.iter().enumerate().skip(1) {
            if better(x, best) {
                best_index = i;
                best = x;
            }
        }
        best_index
    }
}

// ── Statistics ──────────────────────────────────────────────────────

impl<T: FloatScalar> NumArray<T> {
    /// Arithmetic mean.
    ///
    /// Returns `EmptyArray` for an empty array.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[2.0, 4.0, 6.0, 8.0, 10.0]);
    /// assert_eq!(a.mean().unwrap(), 6.0);
    /// ```
    pub fn mean(&self) -> Result<T, ArrayError> {
        self.check_non_empty("mean")?;
        Ok(self.sum() / count_as::<T>(self.len()))
    }

    /// Population variance: mean squared deviation from the mean
    /// (divisor `len`, not `len - 1`).
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[2.0, 4.0, 6.0, 8.0, 10.0]);
    /// assert_eq!(a.variance().unwrap(), 8.0);
    /// ```
    pub fn variance(&self) -> Result<T, ArrayError> {
        self.check_non_empty("variance")?;
        let mu = self.mean()?;
        let mut s2 = T::zero();
        for &x in &self.data {
            let d = x - mu;
            s2 = s2 + d * d;
        }
        Ok(s2 / count_as::<T>(self.len()))
    }

    /// Population standard deviation, `sqrt(variance)`.
    pub fn std(&self) -> Result<T, ArrayError> {
        self.check_non_empty("std")?;
        self.variance().map(|v| v.sqrt())
    }
}
