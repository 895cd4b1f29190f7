use approx::{abs_diff_eq, assert_abs_diff_eq, assert_relative_eq};
use numarray::{ArrayError, NumArray, NumArrayf64};
use proptest::prelude::*;

fn arr(v: &[f64]) -> NumArrayf64 {
    NumArray::from_slice(v)
}

/// Finite values of bounded magnitude, no NaN.
fn values(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 0..max_len)
}

/// Small integer-valued floats, so duplicates are common.
fn repeated_values(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-20i32..20).prop_map(f64::from), 0..max_len)
}

// ── Ownership ────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn copy_is_independent(v in values(64)) {
        let a = arr(&v);
        let mut c = a.copy();
        prop_assert_eq!(c.len(), a.len());
        prop_assert!(c.equal(&a));
        if !c.is_empty() {
            c[0] = 1.0e9;
            prop_assert_eq!(a[0], v[0]);
        }
        prop_assert_eq!(a.as_slice(), v.as_slice());
    }
}

#[test]
fn in_place_ops_do_not_reallocate() {
    let mut a = arr(&[3.0, 1.0, 2.0]);
    let ptr = a.as_slice().as_ptr();
    a.sort();
    a.reverse();
    a.fill(0.5);
    assert_eq!(a.as_slice().as_ptr(), ptr);
    assert_eq!(a.as_slice(), &[0.5, 0.5, 0.5]);
}

// ── Round trips ──────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn add_then_subtract_round_trips(
        (x, y) in (0usize..64).prop_flat_map(|n| (
            prop::collection::vec(-1.0e6f64..1.0e6, n),
            prop::collection::vec(-1.0e6f64..1.0e6, n),
        ))
    ) {
        let a = arr(&x);
        let b = arr(&y);
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert_eq!(back.len(), a.len());
        for (p, q) in back.iter().zip(a.iter()) {
            prop_assert!(abs_diff_eq!(*p, *q, epsilon = 1e-6));
        }
    }

    #[test]
    fn reverse_twice_is_identity(v in values(64)) {
        let a = arr(&v);
        let mut r = a.copy();
        r.reverse();
        r.reverse();
        prop_assert_eq!(r, a);
    }
}

// ── Sort / unique ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn sort_is_idempotent_and_non_decreasing(v in values(64)) {
        let a = arr(&v);
        let mut s = a.copy();
        s.sort();
        prop_assert!(s.as_slice().windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(s.len(), a.len());

        let mut expected = v.clone();
        expected.sort_by(|p, q| p.partial_cmp(q).unwrap());
        prop_assert_eq!(s.as_slice(), expected.as_slice());

        let mut again = s.copy();
        again.sort();
        prop_assert_eq!(again, s);
    }

    #[test]
    fn unique_is_strictly_increasing_and_complete(v in repeated_values(64)) {
        let a = arr(&v);
        let u = a.unique();
        prop_assert!(u.as_slice().windows(2).all(|w| w[0] < w[1]));
        for x in a.iter() {
            prop_assert!(u.iter().any(|y| y == x));
        }
        for y in u.iter() {
            prop_assert!(a.iter().any(|x| x == y));
        }
        prop_assert_eq!(a.as_slice(), v.as_slice());
    }
}

// ── Division convention ──────────────────────────────────────────────

#[test]
fn zero_divisors_give_zero() {
    let a = arr(&[1.0, -2.0, 3.0, 0.0]);
    let b = arr(&[0.0, 4.0, 0.0, 0.0]);
    assert_eq!(a.divide(&b).unwrap().as_slice(), &[0.0, -0.5, 0.0, 0.0]);
    assert_eq!(a.divide_scalar(0.0).as_slice(), &[0.0; 4]);
    assert!(a.divide_scalar(-0.0).iter().all(|x| *x == 0.0));
}

// ── Errors ───────────────────────────────────────────────────────────

#[test]
fn dot_size_mismatch() {
    let a = arr(&[1.0, 2.0, 3.0]);
    let b = arr(&[1.0, 2.0]);
    assert_eq!(
        a.dot(&b),
        Err(ArrayError::SizeMismatch {
            op: "dot",
            left: 3,
            right: 2
        })
    );
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    let e = NumArrayf64::linspace(0.0, 1.0, 0).unwrap_err();
    takes_error(&e);
    assert_eq!(
        e.to_string(),
        "linspace: invalid argument: point count must be positive"
    );
}

#[test]
fn empty_reductions_fail() {
    let e = arr(&[]);
    assert!(matches!(e.mean(), Err(ArrayError::EmptyArray { .. })));
    assert!(matches!(e.max(), Err(ArrayError::EmptyArray { .. })));
    assert!(matches!(e.argmin(), Err(ArrayError::EmptyArray { .. })));
    assert!(matches!(e.std(), Err(ArrayError::EmptyArray { .. })));
    assert_eq!(e.sum(), 0.0);
    assert_eq!(e.product(), 1.0);
    assert_eq!(e.l2_norm(), 0.0);
}

// ── Scenarios ────────────────────────────────────────────────────────

#[test]
fn scenario_create_and_add() {
    let a = NumArray::create(Some(&[1.0, 3.0, 5.0, 7.0]), 4).unwrap();
    let r = a.add(&NumArray::ones(4)).unwrap();
    assert_eq!(r.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn scenario_range() {
    let r = NumArrayf64::range(2.0, 10.0, 2.0).unwrap();
    assert_eq!(r.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    let r = NumArrayf64::range(1.0, 7.0, 1.0).unwrap();
    assert_eq!(r.to_string_with_precision(0), "[1, 2, 3, 4, 5, 6]");
}

#[test]
fn scenario_linspace() {
    let l = NumArrayf64::linspace(0.0, 1.0, 5).unwrap();
    assert_eq!(l.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    let l = NumArrayf64::linspace(0.0, 1.0, 6).unwrap();
    assert_eq!(
        l.to_string_with_precision(3),
        "[0.000, 0.200, 0.400, 0.600, 0.800, 1.000]"
    );
}

#[test]
fn scenario_unique() {
    let a = NumArray::create(Some(&[1.0, 2.0, 2.0, 3.0, 3.0, 4.0]), 6).unwrap();
    assert_eq!(a.unique().as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn scenario_clip() {
    let a = NumArray::create(Some(&[1.0, 3.0, 5.0, 7.0]), 4).unwrap();
    assert_eq!(a.clip(2.5, 6.0).as_slice(), &[2.5, 3.0, 5.0, 6.0]);
}

#[test]
fn scenario_variance_std() {
    let a = NumArray::create(Some(&[2.0, 4.0, 6.0, 8.0, 10.0]), 5).unwrap();
    assert_eq!(a.variance().unwrap(), 8.0);
    assert_relative_eq!(a.std().unwrap(), 2.8284271247461903, max_relative = 1e-12);
}

#[test]
fn scenario_statistics_walkthrough() {
    let a = arr(&[2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(format!("{:.2}", a), "[2.00, 4.00, 6.00, 8.00, 10.00]");
    assert_eq!(a.sum(), 30.0);
    assert_eq!(a.mean().unwrap(), 6.0);
    assert_eq!((a.max().unwrap(), a.argmax().unwrap()), (10.0, 4));
    assert_eq!((a.min().unwrap(), a.argmin().unwrap()), (2.0, 0));
    assert_eq!(a.product(), 3840.0);
    assert_eq!(a.pow(3.0).to_string_with_precision(1), "[8.0, 64.0, 216.0, 512.0, 1000.0]");
    assert_eq!(a.add_scalar(100.0).to_string_with_precision(0), "[102, 104, 106, 108, 110]");
    assert_relative_eq!(a.l2_norm(), 14.832396974191326, max_relative = 1e-12);
    assert!(a.any());
    assert!(a.add(&NumArray::ones(5)).unwrap().all());

    let sines = a.sin();
    for (s, x) in sines.iter().zip(a.iter()) {
        assert_abs_diff_eq!(*s, x.sin(), epsilon = 1e-15);
    }
}

#[test]
fn f32_arrays() {
    let a = NumArray::from_slice(&[1.0_f32, 2.0, 3.0]);
    assert_relative_eq!(a.mean().unwrap(), 2.0_f32);
    assert_relative_eq!(a.l2_norm(), 14.0_f32.sqrt());
}
