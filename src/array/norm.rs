use crate::traits::{FloatScalar, Scalar};

use super::{ArrayError, NumArray};

// ── Vector products and norms ───────────────────────────────────────

impl<T: Scalar> NumArray<T> {
    /// Dot product.
    ///
    /// Returns `SizeMismatch` if the lengths differ.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = NumArray::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> Result<T, ArrayError> {
        self.check_same_len(rhs, "dot")?;
        let mut sum = T::zero();
        for (&a, &b) in self.data.iter().zip(rhs.data.iter()) {
            sum = sum + a * b;
        }
        Ok(sum)
    }

    /// Squared L2 norm (sum of squares).
    ///
    /// ```
    /// use numarray::NumArray;
    /// let v = NumArray::from_slice(&[3.0, 4.0]);
    /// assert_eq!(v.norm_squared(), 25.0);
    /// ```
    pub fn norm_squared(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum
    }
}

impl<T: FloatScalar> NumArray<T> {
    /// L2 (Euclidean) norm. Zero for an empty array.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let v = NumArray::from_slice(&[3.0_f64, 4.0]);
    /// assert!((v.l2_norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn l2_norm(&self) -> T {
        self.norm_squared().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = NumArray::from_slice(&[2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(a.dot(&NumArray::ones(5)).unwrap(), 30.0);
    }

    #[test]
    fn dot_empty() {
        let e = NumArray::<f64>::zeros(0);
        assert_eq!(e.dot(&e).unwrap(), 0.0);
    }

    #[test]
    fn dot_mismatch() {
        let a = NumArray::from_slice(&[1.0, 2.0]);
        let b = NumArray::from_slice(&[1.0]);
        assert_eq!(
            a.dot(&b).unwrap_err(),
            ArrayError::SizeMismatch {
                op: "dot",
                left: 2,
                right: 1
            }
        );
    }

    #[test]
    fn l2_norm() {
        let a = NumArray::from_slice(&[2.0_f64, 4.0, 6.0, 8.0, 10.0]);
        assert!((a.l2_norm() - 220.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn l2_norm_empty() {
        assert_eq!(NumArray::<f64>::zeros(0).l2_norm(), 0.0);
    }

    #[test]
    fn norm_squared_integer() {
        let a = NumArray::from_slice(&[1, 2, 3]);
        assert_eq!(a.norm_squared(), 14);
    }
}
