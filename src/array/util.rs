use alloc::string::String;
use core::fmt::{self, Write as _};

use crate::traits::Scalar;

use super::NumArray;

// ── In-place mutation ───────────────────────────────────────────────

impl<T: Copy> NumArray<T> {
    /// Overwrite every element with `value`.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let mut a = NumArray::from_slice(&[1.0, 2.0]);
    /// a.fill(9.0);
    /// assert_eq!(a.as_slice(), &[9.0, 9.0]);
    /// ```
    pub fn fill(&mut self, value: T) {
        for x in self.data.iter_mut() {
            *x = value;
        }
    }

    /// Reverse the element order in place.
    pub fn reverse(&mut self) {
        self.data.reverse();
    }
}

// ── Comparison and predicates ───────────────────────────────────────

impl<T: Scalar> NumArray<T> {
    /// Exact element-wise equality. Arrays of different lengths are unequal;
    /// no tolerance is applied, and NaN is never equal to anything.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[1.0, 2.0]);
    /// assert!(a.equal(&a.copy()));
    /// assert!(!a.equal(&NumArray::from_slice(&[1.0])));
    /// ```
    pub fn equal(&self, other: &Self) -> bool {
        self.data == other.data
    }

    /// Whether any element is nonzero.
    pub fn any(&self) -> bool {
        self.data.iter().any(|&x| x != T::zero())
    }

    /// Whether every element is nonzero. True for an empty array.
    pub fn all(&self) -> bool {
        self.data.iter().all(|&x| x != T::zero())
    }

    /// Clamp every element into `[lo, hi]`, producing a new array.
    ///
    /// Elements below `lo` become `lo`, then elements above `hi` become `hi`.
    /// NaN passes through unchanged.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[1.0, 3.0, 5.0, 7.0]);
    /// assert_eq!(a.clip(2.5, 6.0).as_slice(), &[2.5, 3.0, 5.0, 6.0]);
    /// ```
    pub fn clip(&self, lo: T, hi: T) -> Self {
        self.map(|x| {
            if x < lo {
                lo
            } else if x > hi {
                hi
            } else {
                x
            }
        })
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Bracketed, comma-separated elements: `[1, 2.5]`.
///
/// A formatter precision applies to every element, so `{:.2}` prints
/// `[2.00, 3.00]`.
impl<T: fmt::Display> fmt::Display for NumArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, x)?,
                None => write!(f, "{}", x)?,
            }
        }
        f.write_char(']')
    }
}

impl<T: fmt::Display> NumArray<T> {
    /// Format with `digits` fractional digits per element.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[2.0, 3.0]);
    /// assert_eq!(a.to_string_with_precision(2), "[2.00, 3.00]");
    /// ```
    pub fn to_string_with_precision(&self, digits: usize) -> String {
        let mut s = String::new();
        let _ = write!(s, "{:.*}", digits, self);
        s
    }

    /// Print to stdout with `digits` fractional digits, followed by a newline.
    #[cfg(feature = "std")]
    pub fn print(&self, digits: usize) {
        std::println!("{:.*}", digits, self);
    }
}
