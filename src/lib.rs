//! # numarray
//!
//! One-dimensional numeric arrays in pure Rust, no-std compatible (requires
//! `alloc`). Similar in scope to NumPy's 1-D API: construction, element-wise
//! arithmetic, math functions, statistics, sorting and vector norms.
//!
//! ## Quick start
//!
//! ```
//! use numarray::NumArray;
//!
//! let a = NumArray::from_slice(&[2.0_f64, 4.0, 6.0, 8.0, 10.0]);
//! let b = a.add(&NumArray::ones(5)).unwrap();
//! assert_eq!(b.as_slice(), &[3.0, 5.0, 7.0, 9.0, 11.0]);
//!
//! assert_eq!(a.mean().unwrap(), 6.0);
//! assert_eq!(a.variance().unwrap(), 8.0);
//! assert_eq!(a.dot(&NumArray::ones(5)).unwrap(), 30.0);
//! assert_eq!(format!("{:.1}", a.clip(3.0, 8.0)), "[3.0, 4.0, 6.0, 8.0, 8.0]");
//! ```
//!
//! ## Modules
//!
//! - [`array`]: [`NumArray<T>`], an owned, fixed-length `Vec<T>` buffer.
//!   Constructors (`create`, `zeros`, `ones`, `full`, `range`, `linspace`,
//!   `copy`), element-wise array-array and array-scalar arithmetic with
//!   operator overloads, unary math via a generic `map`, reductions
//!   (`sum`, `mean`, `argmax`, `variance`, …), in-place `fill` / `reverse` /
//!   `sort`, `unique`, `clip`, `dot` and `l2_norm`.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all array elements (`Copy + PartialOrd + Debug + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by math
//!     functions, statistics and norms
//!
//! ## Conventions
//!
//! - Operations borrow their operands and return a new array; only `fill`,
//!   `reverse` and `sort` mutate in place.
//! - Division by an exact zero yields `0`, in both array and scalar forms.
//! - Math-function domain errors are not reported: `sqrt(-1.0)` is NaN.
//! - Operand length mismatches, empty-array reductions, invalid arguments
//!   and allocation failures are reported as [`ArrayError`]. Rejections are
//!   logged at debug level through the `log` facade.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm, `std::error::Error`, `print` |
//! | (none)  |         | `no_std` + `alloc`, pure-Rust `libm` float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod array;
pub mod traits;

pub use array::{ArrayError, NumArray, NumArrayf32, NumArrayf64};
pub use traits::{FloatScalar, Scalar};
