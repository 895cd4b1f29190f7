use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::traits::{FloatScalar, Scalar};

use super::{ArrayError, NumArray};

/// Quotient with the saturating convention: an exact-zero divisor gives zero.
#[inline]
fn safe_div<T: Scalar>(a: T, b: T) -> T {
    if b == T::zero() {
        T::zero()
    } else {
        a / b
    }
}

impl<T: Copy> NumArray<T> {
    /// Combine two equal-length arrays index by index.
    ///
    /// Returns `SizeMismatch` (tagged with `op`) before allocating if the
    /// lengths differ.
    pub(crate) fn zip_map<U>(
        &self,
        rhs: &Self,
        op: &'static str,
        f: impl Fn(T, T) -> U,
    ) -> Result<NumArray<U>, ArrayError> {
        self.check_same_len(rhs, op)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(NumArray { data })
    }
}

// ── Array-array ─────────────────────────────────────────────────────

impl<T: Scalar> NumArray<T> {
    /// Element-wise sum.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[1.0, 3.0, 5.0, 7.0]);
    /// let c = a.add(&NumArray::ones(4)).unwrap();
    /// assert_eq!(c.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    /// ```
    pub fn add(&self, rhs: &Self) -> Result<Self, ArrayError> {
        self.zip_map(rhs, "add", |a, b| a + b)
    }

    /// Element-wise difference `self - rhs`.
    pub fn subtract(&self, rhs: &Self) -> Result<Self, ArrayError> {
        self.zip_map(rhs, "subtract", |a, b| a - b)
    }

    /// Element-wise product.
    pub fn multiply(&self, rhs: &Self) -> Result<Self, ArrayError> {
        self.zip_map(rhs, "multiply", |a, b| a * b)
    }

    /// Element-wise quotient `self / rhs`.
    ///
    /// Positions where the divisor is exactly zero hold zero, not
    /// infinity or NaN.
    ///
    /// # Panics
    ///
    /// For signed integer elements, `MIN / -1` overflows and panics.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[6.0, 1.0, -2.0]);
    /// let b = NumArray::from_slice(&[3.0, 0.0, 4.0]);
    /// assert_eq!(a.divide(&b).unwrap().as_slice(), &[2.0, 0.0, -0.5]);
    /// ```
    pub fn divide(&self, rhs: &Self) -> Result<Self, ArrayError> {
        self.zip_map(rhs, "divide", safe_div)
    }

    /// Add `value` to every element.
    pub fn add_scalar(&self, value: T) -> Self {
        self.map(|x| x + value)
    }

    /// Subtract `value` from every element.
    pub fn subtract_scalar(&self, value: T) -> Self {
        self.map(|x| x - value)
    }

    /// Multiply every element by `value`.
    pub fn multiply_scalar(&self, value: T) -> Self {
        self.map(|x| x * value)
    }

    /// Divide every element by `value`. Dividing by zero gives all zeros.
    ///
    /// Signed integer arrays panic on `MIN / -1`, as integer `/` does.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[2.0, 4.0]);
    /// assert_eq!(a.divide_scalar(2.0).as_slice(), &[1.0, 2.0]);
    /// assert_eq!(a.divide_scalar(0.0).as_slice(), &[0.0, 0.0]);
    /// ```
    pub fn divide_scalar(&self, value: T) -> Self {
        self.map(|x| safe_div(x, value))
    }
}

impl<T: FloatScalar> NumArray<T> {
    /// Element-wise floating remainder `self % rhs`.
    ///
    /// The result takes the sign of the dividend. A zero divisor gives NaN.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[7.0, -7.0, 5.5]);
    /// let b = NumArray::from_slice(&[3.0, 3.0, 2.0]);
    /// assert_eq!(a.modulo(&b).unwrap().as_slice(), &[1.0, -1.0, 1.5]);
    /// ```
    pub fn modulo(&self, rhs: &Self) -> Result<Self, ArrayError> {
        self.zip_map(rhs, "modulo", |a, b| a % b)
    }

    /// Floating remainder of every element by `value`.
    pub fn modulo_scalar(&self, value: T) -> Self {
        self.map(|x| x % value)
    }
}

// ── Operator overloads ──────────────────────────────────────────────
//
// Implemented on references only, so `a.add(&b)` keeps resolving to the
// checked method when `core::ops::Add` is in scope. Array-array operators
// panic on a length mismatch.

macro_rules! impl_array_binop {
    ($trait:ident, $method:ident, $checked:ident, $bound:ident) => {
        impl<T: $bound> $trait<&NumArray<T>> for &NumArray<T> {
            type Output = NumArray<T>;

            fn $method(self, rhs: &NumArray<T>) -> NumArray<T> {
                match NumArray::$checked(self, rhs) {
                    Ok(out) => out,
                    Err(e) => panic!("{}", e),
                }
            }
        }
    };
}

impl_array_binop!(Add, add, add, Scalar);
impl_array_binop!(Sub, sub, subtract, Scalar);
impl_array_binop!(Mul, mul, multiply, Scalar);
impl_array_binop!(Div, div, divide, Scalar);
impl_array_binop!(Rem, rem, modulo, FloatScalar);

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $scalar:ident, $bound:ident) => {
        impl<T: $bound> $trait<T> for &NumArray<T> {
            type Output = NumArray<T>;

            fn $method(self, rhs: T) -> NumArray<T> {
                self.$scalar(rhs)
            }
        }
    };
}

impl_scalar_binop!(Add, add, add_scalar, Scalar);
impl_scalar_binop!(Sub, sub, subtract_scalar, Scalar);
impl_scalar_binop!(Mul, mul, multiply_scalar, Scalar);
impl_scalar_binop!(Div, div, divide_scalar, Scalar);
impl_scalar_binop!(Rem, rem, modulo_scalar, FloatScalar);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar + Neg<Output = T>> Neg for &NumArray<T> {
    type Output = NumArray<T>;

    fn neg(self) -> NumArray<T> {
        self.map(|x| -x)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for NumArray<T> {
    type Output = NumArray<T>;

    fn neg(self) -> NumArray<T> {
        -&self
    }
}
