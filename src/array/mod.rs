pub mod aliases;
mod math;
mod norm;
mod ops;
mod range;
mod reduce;
mod sort;
mod util;

pub use aliases::*;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Errors from array construction and array operations.
///
/// Validation happens before any allocation, so a failed operation never
/// exposes a partially computed array.
///
/// ```
/// use numarray::{ArrayError, NumArray};
///
/// let a = NumArray::from_slice(&[1.0_f64, 2.0, 3.0]);
/// let b = NumArray::from_slice(&[1.0_f64, 2.0]);
/// assert_eq!(
///     a.add(&b).unwrap_err(),
///     ArrayError::SizeMismatch { op: "add", left: 3, right: 2 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// The element buffer could not be reserved.
    AllocationFailure {
        /// Number of elements requested.
        requested: usize,
    },
    /// Two operands have different lengths where equal lengths are required.
    SizeMismatch {
        /// Operation that rejected the operands.
        op: &'static str,
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// A reduction whose result is undefined was applied to an empty array.
    EmptyArray {
        /// Operation that rejected the input.
        op: &'static str,
    },
    /// An argument is outside the range the operation accepts.
    InvalidArgument {
        /// Operation that rejected the argument.
        op: &'static str,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl core::fmt::Display for ArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArrayError::AllocationFailure { requested } => {
                write!(f, "failed to allocate an array of {} elements", requested)
            }
            ArrayError::SizeMismatch { op, left, right } => {
                write!(f, "{}: array sizes not equal ({}, {})", op, left, right)
            }
            ArrayError::EmptyArray { op } => write!(f, "{}: array is empty", op),
            ArrayError::InvalidArgument { op, reason } => {
                write!(f, "{}: invalid argument: {}", op, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArrayError {}

impl ArrayError {
    pub(crate) fn empty(op: &'static str) -> Self {
        log::debug!("{}: rejected empty array", op);
        ArrayError::EmptyArray { op }
    }

    pub(crate) fn invalid(op: &'static str, reason: &'static str) -> Self {
        log::debug!("{}: rejected argument ({})", op, reason);
        ArrayError::InvalidArgument { op, reason }
    }
}

/// Fixed-length, heap-allocated one-dimensional numeric array.
///
/// Owns its buffer exclusively: cloning is always a deep copy. Operations
/// borrow their operands and return a new array, except `fill`, `reverse`
/// and `sort`, which mutate in place.
///
/// # Examples
///
/// ```
/// use numarray::NumArray;
///
/// let a = NumArray::from_slice(&[1.0_f64, 3.0, 5.0, 7.0]);
/// let b = a.add(&NumArray::ones(4)).unwrap();
/// assert_eq!(b.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
/// assert_eq!(b.sum(), 20.0);
/// assert_eq!(b.argmax().unwrap(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumArray<T> {
    pub(crate) data: Vec<T>,
}

/// Reserve exactly `n` elements, reporting failure instead of aborting.
pub(crate) fn try_buffer<T>(n: usize) -> Result<Vec<T>, ArrayError> {
    let mut data = Vec::new();
    if data.try_reserve_exact(n).is_err() {
        log::debug!("allocation of {} elements failed", n);
        return Err(ArrayError::AllocationFailure { requested: n });
    }
    Ok(data)
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> NumArray<T> {
    /// Create an array of `count` elements, copied from `values` or zeroed.
    ///
    /// Only the first `count` source elements are used. Returns
    /// `InvalidArgument` if `values` holds fewer than `count` elements and
    /// `AllocationFailure` if the buffer cannot be reserved.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::create(Some(&[1.0_f64, 3.0, 5.0, 7.0, 9.0]), 4).unwrap();
    /// assert_eq!(a.as_slice(), &[1.0, 3.0, 5.0, 7.0]);
    /// let z = NumArray::<f64>::create(None, 3).unwrap();
    /// assert_eq!(z.as_slice(), &[0.0, 0.0, 0.0]);
    /// ```
    pub fn create(values: Option<&[T]>, count: usize) -> Result<Self, ArrayError> {
        match values {
            Some(src) if src.len() < count => {
                log::debug!("create: source holds {} of {} elements", src.len(), count);
                Err(ArrayError::InvalidArgument {
                    op: "create",
                    reason: "source shorter than requested count",
                })
            }
            Some(src) => {
                let mut data = try_buffer(count)?;
                data.extend_from_slice(&src[..count]);
                Ok(Self { data })
            }
            None => Self::try_full(count, T::zero()),
        }
    }

    /// Create an array of `count` zeros.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let z = NumArray::<f64>::zeros(4);
    /// assert_eq!(z.len(), 4);
    /// assert_eq!(z[3], 0.0);
    /// ```
    pub fn zeros(count: usize) -> Self {
        Self::full(count, T::zero())
    }

    /// Create an array of `count` ones.
    pub fn ones(count: usize) -> Self {
        Self::full(count, T::one())
    }

    /// Create an array of `count` copies of `value`.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::full(3, 7.5_f64);
    /// assert_eq!(a.as_slice(), &[7.5, 7.5, 7.5]);
    /// ```
    pub fn full(count: usize, value: T) -> Self {
        Self {
            data: vec![value; count],
        }
    }

    /// Fallible [`zeros`](Self::zeros).
    pub fn try_zeros(count: usize) -> Result<Self, ArrayError> {
        Self::try_full(count, T::zero())
    }

    /// Fallible [`ones`](Self::ones).
    pub fn try_ones(count: usize) -> Result<Self, ArrayError> {
        Self::try_full(count, T::one())
    }

    /// Fallible [`full`](Self::full): returns `AllocationFailure` instead of
    /// aborting when the buffer cannot be reserved.
    ///
    /// ```
    /// use numarray::{ArrayError, NumArray};
    /// let r = NumArray::try_full(usize::MAX, 1.0_f64);
    /// assert_eq!(r.unwrap_err(), ArrayError::AllocationFailure { requested: usize::MAX });
    /// ```
    pub fn try_full(count: usize, value: T) -> Result<Self, ArrayError> {
        let mut data = try_buffer(count)?;
        data.resize(count, value);
        Ok(Self { data })
    }

    /// Create an array by copying a slice.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[1.0, 2.0, 3.0]);
    /// assert_eq!(a[0], 1.0);
    /// assert_eq!(a.len(), 3);
    /// ```
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    /// Deep copy with its own buffer. Same as `clone`.
    pub fn copy(&self) -> Self {
        Self::from_slice(&self.data)
    }
}

impl<T> NumArray<T> {
    /// Take ownership of a `Vec` as the array buffer.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(a[2], 3.0);
    /// ```
    pub fn from_vec(mut data: Vec<T>) -> Self {
        data.shrink_to_fit();
        Self { data }
    }

    /// Create an array by calling `f(i)` for each index.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_fn(4, |i| (i * i) as f64);
    /// assert_eq!(a.as_slice(), &[0.0, 1.0, 4.0, 9.0]);
    /// ```
    pub fn from_fn(count: usize, f: impl Fn(usize) -> T) -> Self {
        let mut data = Vec::with_capacity(count);
        for i in 0..count {
            data.push(f(i));
        }
        Self { data }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the array, returning its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Reject operands of unequal length before anything is allocated.
    pub(crate) fn check_same_len<U>(
        &self,
        rhs: &NumArray<U>,
        op: &'static str,
    ) -> Result<(), ArrayError> {
        if self.len() != rhs.len() {
            log::debug!(
                "{}: rejected operands of length {} and {}",
                op,
                self.len(),
                rhs.len()
            );
            return Err(ArrayError::SizeMismatch {
                op,
                left: self.len(),
                right: rhs.len(),
            });
        }
        Ok(())
    }

    /// Reject an empty array for reductions with no identity.
    pub(crate) fn check_non_empty(&self, op: &'static str) -> Result<(), ArrayError> {
        if self.is_empty() {
            return Err(ArrayError::empty(op));
        }
        Ok(())
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for NumArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for NumArray<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T> From<Vec<T>> for NumArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Scalar> From<&[T]> for NumArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for NumArray<T> {
    /// ```
    /// use numarray::NumArray;
    /// let a: NumArray<f64> = [1.0, 2.0].into();
    /// assert_eq!(a.len(), 2);
    /// ```
    fn from(values: [T; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl<T> From<NumArray<T>> for Vec<T> {
    fn from(a: NumArray<T>) -> Self {
        a.data
    }
}

impl<T> AsRef<[T]> for NumArray<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> FromIterator<T> for NumArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for NumArray<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NumArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
