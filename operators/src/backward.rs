//! Backward functions: one reverse-mode chain-rule step per operator.
//!
//! Each `*_back(x, y)` returns `f'(x) · y`, the local derivative of the
//! forward operator at its input `x` contracted with the upstream
//! sensitivity `y`. A graph engine calls these while walking its
//! recorded nodes in reverse:
//!
//! ```text
//! forward:   x ──f──▶ out
//! backward:  x ◀──f_back(x, d_out)── d_out
//! ```
//!
//! | Forward          | Backward                     |
//! |------------------|------------------------------|
//! | [`log`](crate::log)  | [`log_back`]: `y / x`    |
//! | [`inv`](crate::inv)  | [`inv_back`]: `-y / x²`  |
//! | [`relu`](crate::relu) | [`relu_back`]: `y` if `x > 0`, else `0` |
//!
//! # Example
//!
//! ```
//! use operators::{inv, inv_back, log, log_back};
//!
//! // d/dx ln(x) at x = 2, upstream 1
//! assert_eq!(log_back(2.0, 1.0).unwrap(), 0.5);
//!
//! // d/dx (1/x) at x = 2, upstream 3
//! assert_eq!(inv_back(2.0, 3.0).unwrap(), -0.75);
//! ```

use num_traits::Float;

use crate::error::{Error, Result};

/// Backward step for [`log`](crate::log): `y / x`.
///
/// # Errors
///
/// [`Error::Domain`] if `x` is zero.
pub fn log_back<T: Float>(x: T, y: T) -> Result<T> {
    if x.is_zero() {
        return Err(Error::domain("log_back", "x != 0", x));
    }
    Ok(y / x)
}

/// Backward step for [`inv`](crate::inv): `-y / x²`.
///
/// # Errors
///
/// [`Error::Domain`] if `x²` is zero, which includes non-zero `x` small
/// enough for the square to underflow.
pub fn inv_back<T: Float>(x: T, y: T) -> Result<T> {
    let squared = x * x;
    if squared.is_zero() {
        return Err(Error::domain("inv_back", "x * x != 0", x));
    }
    Ok(-y / squared)
}

/// Backward step for [`relu`](crate::relu).
///
/// Passes `y` through when `x > 0`. At `x = 0` the gradient is `0`.
///
/// ```
/// use operators::relu_back;
///
/// assert_eq!(relu_back(2.0, 5.0), 5.0);
/// assert_eq!(relu_back(0.0, 5.0), 0.0);
/// assert_eq!(relu_back(-1.0, 5.0), 0.0);
/// ```
pub fn relu_back<T: Float>(x: T, y: T) -> T {
    if x > T::zero() {
        y
    } else {
        T::zero()
    }
}
