use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::NumArray;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> NumArray<T> {
    /// Apply a function to every element, producing a new array.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[1.0_f64, 4.0, 9.0]);
    /// let r = a.map(|x: f64| x.sqrt());
    /// assert_eq!(r.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> NumArray<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        NumArray { data }
    }
}

// ── Element-wise math functions ─────────────────────────────────────
//
// Out-of-domain inputs are not checked: `sqrt(-1)`, `ln(0)`, `asin(2)`
// give whatever the float primitive gives (NaN or infinity).

macro_rules! unary_fns {
    ($($(#[$doc:meta])* $name:ident => $f:ident;)*) => {
        impl<T: FloatScalar> NumArray<T> {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> Self {
                    self.map(T::$f)
                }
            )*
        }
    };
}

unary_fns! {
    /// Element-wise absolute value.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[1.0_f64, -2.0, -0.5]);
    /// assert_eq!(a.abs().as_slice(), &[1.0, 2.0, 0.5]);
    /// ```
    abs => abs;
    /// Element-wise sine (radians).
    sin => sin;
    /// Element-wise cosine (radians).
    cos => cos;
    /// Element-wise tangent (radians).
    tan => tan;
    /// Element-wise arcsine. NaN outside `[-1, 1]`.
    asin => asin;
    /// Element-wise arccosine. NaN outside `[-1, 1]`.
    acos => acos;
    /// Element-wise arctangent.
    atan => atan;
    /// Element-wise `e^x`.
    exp => exp;
    /// Element-wise natural logarithm.
    ln => ln;
    /// Element-wise base-10 logarithm.
    log10 => log10;
    /// Element-wise square root. NaN for negative elements.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let r = NumArray::from_slice(&[4.0_f64, -1.0]).sqrt();
    /// assert_eq!(r[0], 2.0);
    /// assert!(r[1].is_nan());
    /// ```
    sqrt => sqrt;
    /// Element-wise floor.
    floor => floor;
    /// Element-wise ceiling.
    ceil => ceil;
    /// Element-wise rounding to the nearest integer, halves away from zero.
    round => round;
}

impl<T: FloatScalar> NumArray<T> {
    /// Raise every element to the power `exponent`.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[2.0_f64, 3.0]);
    /// assert_eq!(a.pow(3.0).as_slice(), &[8.0, 27.0]);
    /// ```
    pub fn pow(&self, exponent: T) -> Self {
        self.map(|x| x.powf(exponent))
    }
}
