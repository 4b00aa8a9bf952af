#![deny(missing_docs)]
//! # operators — scalar operators and their derivatives
//!
//! The numeric vocabulary underneath a reverse-mode autodiff engine:
//!
//! - [`scalar`]: elementary forward operators (arithmetic, comparison,
//!   transcendental)
//! - [`backward`]: the matching backward functions, each one chain-rule
//!   step `f'(x) · y`
//! - [`higher_order`]: [`transform`], [`pairwise_combine`] and
//!   [`left_fold`] for applying operators across sequences
//! - [`list`]: [`negate_all`], [`add_pairwise`], [`sum`] and [`product`],
//!   composed from the two layers above
//! - [`stream_ext`] *(feature = "async")*: the same sequence functions
//!   over `futures::Stream`
//!
//! Every function is pure. Partial operators ([`log`], [`inv`],
//! [`log_back`], [`inv_back`]) return [`Error::Domain`] outside their
//! domain; nothing in this crate catches it.
//!
//! ## Quick start
//!
//! ```rust
//! use operators::{add_pairwise, log, log_back, product, relu, relu_back, sum, transform};
//!
//! // Forward
//! let xs = vec![-1.0, 0.0, 2.0];
//! let hidden = transform(xs.iter().copied(), relu);
//! assert_eq!(hidden, vec![0.0, 0.0, 2.0]);
//!
//! // Backward with an upstream gradient of 1 everywhere
//! let grads = transform(xs, |x| relu_back(x, 1.0));
//! assert_eq!(grads, vec![0.0, 0.0, 1.0]);
//!
//! // Partial operators report misuse
//! assert!(log(0.0).is_err());
//! assert_eq!(log_back(4.0, 2.0).unwrap(), 0.5);
//!
//! // Derived list operations
//! assert_eq!(add_pairwise([1.0, 2.0], [3.0, 4.0, 5.0]), vec![4.0, 6.0]);
//! assert_eq!(sum(Vec::<f64>::new()), 0.0);
//! assert_eq!(product(Vec::<f64>::new()), 1.0);
//! ```
//!
//! ## Features
//!
//! - **`async`** *(enabled by default)*: enables [`stream_ext`].
//!   Requires `futures` and `async-trait`.
//!
//! To use only the synchronous API:
//! ```toml
//! operators = { version = "…", default-features = false }
//! ```

pub mod backward;
pub mod error;
pub mod higher_order;
pub mod list;
pub mod scalar;

#[cfg(feature = "async")]
pub mod stream_ext;

pub use backward::{inv_back, log_back, relu_back};
pub use error::{Error, Result};
pub use higher_order::{left_fold, left_fold_from_zero, pairwise_combine, transform, PairwiseCombine};
pub use list::{add_pairwise, negate_all, product, sum};
pub use scalar::{
    add, equals, exp, identity, inv, is_close, less_than, log, maximum, multiply, negate, relu,
    sigmoid, IS_CLOSE_TOLERANCE,
};
