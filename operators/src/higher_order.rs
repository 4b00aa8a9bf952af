//! Higher-order sequence functions.
//!
//! - [`transform`]: apply a unary function to every element
//! - [`pairwise_combine`]: lazily apply a binary function to aligned
//!   pairs of two sequences, stopping at the shorter one
//! - [`left_fold`]: accumulate a sequence from the left, starting at a
//!   seed
//!
//! None of these require the operators from this crate; any closure or
//! function item with the right arity works. In practice they are
//! called with the elementary operators to vectorize them:
//!
//! ```
//! use operators::{add, multiply, pairwise_combine, left_fold, transform, relu};
//!
//! let activations = transform(vec![-1.0, 0.5, 2.0], relu);
//! assert_eq!(activations, vec![0.0, 0.5, 2.0]);
//!
//! let scaled: Vec<f64> = pairwise_combine(activations, [2.0, 2.0, 2.0], multiply).collect();
//! assert_eq!(left_fold(scaled, add, 0.0), 5.0);
//! ```

use num_traits::Zero;
use std::iter::FusedIterator;

/// Apply `f` to every element of `a`, in order.
///
/// The result has the same length and order as the input. Element and
/// result types are independent:
///
/// ```
/// use operators::transform;
///
/// let lengths = transform(["a", "bcd", ""], str::len);
/// assert_eq!(lengths, vec![1, 3, 0]);
/// ```
pub fn transform<I, F, U>(a: I, f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    a.into_iter().map(f).collect()
}

/// Combine `a` and `b` positionally with `f`.
///
/// Returns a lazy iterator. Each step pulls one element from `a`, then
/// one from `b`; the first exhaustion of either ends the sequence for
/// good, so the output has `min(len(a), len(b))` elements. Either side
/// may be unbounded:
///
/// ```
/// use operators::{add, pairwise_combine};
///
/// let out: Vec<f64> = pairwise_combine([1.0, 2.0, 3.0], [4.0, 5.0], add).collect();
/// assert_eq!(out, vec![5.0, 7.0]);
///
/// let ramp = (0..).map(f64::from);
/// let out: Vec<f64> = pairwise_combine([10.0, 20.0], ramp, add).collect();
/// assert_eq!(out, vec![10.0, 21.0]);
/// ```
///
/// The iterator is restartable only in the sense that its inputs are:
/// cloning it clones both underlying iterators.
pub fn pairwise_combine<A, B, F, V>(a: A, b: B, f: F) -> PairwiseCombine<A::IntoIter, B::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> V,
{
    PairwiseCombine {
        a: a.into_iter(),
        b: b.into_iter(),
        f,
        done: false,
    }
}

/// Iterator returned by [`pairwise_combine`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PairwiseCombine<A, B, F> {
    a: A,
    b: B,
    f: F,
    done: bool,
}

impl<A, B, F, V> Iterator for PairwiseCombine<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> V,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        if self.done {
            return None;
        }
        let pair = match self.a.next() {
            Some(x) => self.b.next().map(|y| (x, y)),
            None => None,
        };
        match pair {
            Some((x, y)) => Some((self.f)(x, y)),
            None => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (a_lo, a_hi) = self.a.size_hint();
        let (b_lo, b_hi) = self.b.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (Some(x), None) | (None, Some(x)) => Some(x),
            (None, None) => None,
        };
        (a_lo.min(b_lo), hi)
    }
}

impl<A, B, F, V> FusedIterator for PairwiseCombine<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> V,
{
}

/// Fold `a` from the left, starting at `seed`.
///
/// Evaluates `f(...f(f(seed, a[0]), a[1])..., a[n-1])` strictly in that
/// order; `f` is not assumed to be associative. An empty sequence
/// returns `seed` untouched.
///
/// ```
/// use operators::{add, left_fold};
///
/// assert_eq!(left_fold([1.0, 2.0, 3.0], add, 0.0), 6.0);
/// assert_eq!(left_fold(Vec::<f64>::new(), add, 42.0), 42.0);
/// ```
pub fn left_fold<I, F, B>(a: I, mut f: F, seed: B) -> B
where
    I: IntoIterator,
    F: FnMut(B, I::Item) -> B,
{
    let mut acc = seed;
    for x in a {
        acc = f(acc, x);
    }
    acc
}

/// [`left_fold`] seeded with zero.
pub fn left_fold_from_zero<I, F, B>(a: I, f: F) -> B
where
    I: IntoIterator,
    F: FnMut(B, I::Item) -> B,
    B: Zero,
{
    left_fold(a, f, B::zero())
}
