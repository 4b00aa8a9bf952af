//! Elementary scalar operators.
//!
//! These are the forward functions a computation graph composes into
//! differentiable expressions. Each one is pure: same inputs, same
//! output, no shared state.
//!
//! Arithmetic only asks for the matching `std::ops` trait, so the
//! operators work for any numeric type with that operation.
//! Transcendental and domain-checked functions need
//! [`num_traits::Float`].
//!
//! # Example
//!
//! ```
//! use operators::{add, multiply, sigmoid, log};
//!
//! assert_eq!(add(2.0, 3.0), 5.0);
//! assert_eq!(multiply(2.0, 3.0), 6.0);
//! assert_eq!(sigmoid(0.0), 0.5);
//! assert_eq!(log(1.0).unwrap(), 0.0);
//! assert!(log(-1.0).is_err());
//! ```
//!
//! # Partial functions
//!
//! | Operator | Domain  |
//! |----------|---------|
//! | [`log`]  | `x > 0` |
//! | [`inv`]  | `x ≠ 0` |
//!
//! Outside its domain an operator returns
//! [`Error::Domain`](crate::Error::Domain) instead of an infinity or
//! NaN.

use num_traits::{Float, Zero};
use std::ops::{Add, Mul, Neg};

use crate::error::{Error, Result};

/// Tolerance used by [`is_close`].
pub const IS_CLOSE_TOLERANCE: f64 = 1e-2;

/// Product `x · y`.
pub fn multiply<T: Mul<Output = T>>(x: T, y: T) -> T {
    x * y
}

/// Returns its argument unchanged.
///
/// Works for any type, not just scalars:
///
/// ```
/// use operators::identity;
///
/// assert_eq!(identity("tape"), "tape");
/// assert_eq!(identity(vec![1, 2]), vec![1, 2]);
/// ```
pub fn identity<T>(x: T) -> T {
    x
}

/// Sum `x + y`.
pub fn add<T: Add<Output = T>>(x: T, y: T) -> T {
    x + y
}

/// Additive inverse `-x`.
pub fn negate<T: Neg<Output = T>>(x: T) -> T {
    -x
}

/// `x < y`.
pub fn less_than<T: PartialOrd>(x: T, y: T) -> bool {
    x < y
}

/// `x == y`.
pub fn equals<T: PartialEq>(x: T, y: T) -> bool {
    x == y
}

/// The greater of `x` and `y`.
///
/// Returns `y` only when `y > x`; ties (and a NaN `y`) return `x`.
pub fn maximum<T: PartialOrd>(x: T, y: T) -> T {
    if y > x {
        y
    } else {
        x
    }
}

/// `|x - y| < 1e-2`.
///
/// The tolerance is fixed at [`IS_CLOSE_TOLERANCE`], computed in `T`
/// as `1 / 100`. That division is correctly rounded, so for `f32` and
/// `f64` it is exactly the `1e-2` literal.
///
/// ```
/// use operators::is_close;
///
/// assert!(is_close(1.0, 1.005));
/// assert!(!is_close(1.0, 1.01));
/// ```
pub fn is_close<T: Float + From<u8>>(x: T, y: T) -> bool {
    let tolerance = T::one() / <T as From<u8>>::from(100);
    (x - y).abs() < tolerance
}

/// Logistic function `1 / (1 + e^-x)`.
///
/// Evaluated as `e^x / (1 + e^x)` for negative `x`, so `e^-x` is never
/// formed for large negative inputs and the result stays finite.
///
/// ```
/// use operators::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert_eq!(sigmoid(-1000.0_f64), 0.0);
/// assert_eq!(sigmoid(1000.0_f64), 1.0);
/// ```
pub fn sigmoid<T: Float>(x: T) -> T {
    if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (T::one() + e)
    }
}

/// Rectified linear unit, `max(x, 0)`.
pub fn relu<T: PartialOrd + Zero>(x: T) -> T {
    maximum(x, T::zero())
}

/// Natural logarithm.
///
/// # Errors
///
/// [`Error::Domain`] unless `x > 0` (NaN included).
pub fn log<T: Float>(x: T) -> Result<T> {
    if x > T::zero() {
        Ok(x.ln())
    } else {
        Err(Error::domain("log", "x > 0", x))
    }
}

/// `e^x`.
pub fn exp<T: Float>(x: T) -> T {
    x.exp()
}

/// Reciprocal `1 / x`.
///
/// # Errors
///
/// [`Error::Domain`] if `x` is zero of either sign.
///
/// ```
/// use operators::inv;
///
/// assert_eq!(inv(4.0).unwrap(), 0.25);
/// assert!(inv(0.0).is_err());
/// ```
pub fn inv<T: Float>(x: T) -> Result<T> {
    if x.is_zero() {
        return Err(Error::domain("inv", "x != 0", x));
    }
    Ok(x.recip())
}
