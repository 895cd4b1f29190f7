use crate::traits::Scalar;

use super::NumArray;

/// Ascending selection sort using only `<`.
///
/// Quadratic. Placement of NaN follows from the strict comparison alone.
fn selection_sort<T: PartialOrd + Copy>(data: &mut [T]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..n {
            if data[j] < data[min_index] {
                min_index = j;
            }
        }
        data.swap(i, min_index);
    }
}

impl<T: Scalar> NumArray<T> {
    /// Sort the elements in place, ascending.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let mut a = NumArray::from_slice(&[3.0, 1.0, 2.0]);
    /// a.sort();
    /// assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn sort(&mut self) {
        selection_sort(&mut self.data);
    }

    /// Ascending distinct values as a new array.
    ///
    /// Duplicates are detected with exact equality after sorting. The
    /// result's capacity equals its length.
    ///
    /// ```
    /// use numarray::NumArray;
    /// let a = NumArray::from_slice(&[2.0, 2.0, 3.0, 4.0, 3.0, 5.0, 6.0]);
    /// assert_eq!(a.unique().as_slice(), &[2.0, 3.0, 4.0, 5.0, 6.0]);
    /// ```
    pub fn unique(&self) -> Self {
        let mut data = self.data.clone();
        selection_sort(&mut data);
        data.dedup();
        data.shrink_to_fit();
        Self { data }
    }
}
