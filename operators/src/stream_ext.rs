//! Stream versions of the sequence functions (feature = `"async"`).
//!
//! - [`pairwise_combine_stream`]: lockstep combination of two
//!   `futures::Stream`s, truncated to the shorter one
//! - [`FoldStreamExt`]: `.left_fold()`, `.sum()` and `.product()` on any
//!   `Stream`
//!
//! These follow the same contracts as their iterator counterparts in
//! [`higher_order`](crate::higher_order) and [`list`](crate::list):
//! strict left-to-right folding, seed returned for an empty stream,
//! truncation at the shorter input.

use async_trait::async_trait;
use num_traits::{One, Zero};
use std::ops::{Add, Mul};

use futures::Stream;
use futures::StreamExt;

use crate::scalar::{add, multiply};

/// Combine two streams positionally with `f`, stopping at the shorter.
///
/// Either stream may be unbounded. The result is itself a lazy stream;
/// nothing is polled until it is.
///
/// # Example
///
/// ```rust
/// use futures::{executor::block_on, stream, StreamExt};
/// use operators::{add, stream_ext::pairwise_combine_stream};
///
/// let a = stream::iter(vec![1.0, 2.0, 3.0]);
/// let b = stream::iter(vec![4.0, 5.0]);
/// let out: Vec<f64> = block_on(pairwise_combine_stream(a, b, add).collect());
/// assert_eq!(out, vec![5.0, 7.0]);
/// ```
pub fn pairwise_combine_stream<A, B, F, V>(a: A, b: B, mut f: F) -> impl Stream<Item = V>
where
    A: Stream,
    B: Stream,
    F: FnMut(A::Item, B::Item) -> V,
{
    a.zip(b).map(move |(x, y)| f(x, y))
}

/// Extension trait for folding `Stream`s of scalars.
///
/// Automatically implemented for all `Stream` types.
///
/// # Example
///
/// ```rust,ignore
/// use futures::stream;
/// use operators::stream_ext::FoldStreamExt;
///
/// let total = stream::iter(vec![1.0, 2.0, 3.0]).sum().await;
/// assert_eq!(total, 6.0);
/// ```
#[async_trait]
pub trait FoldStreamExt: Stream + Sized + Unpin + Send {
    /// Fold the stream from the left, starting at `seed`.
    ///
    /// Returns `seed` if the stream yields no items.
    async fn left_fold<F, B>(self, mut f: F, seed: B) -> B
    where
        Self::Item: Send,
        F: FnMut(B, Self::Item) -> B + Send,
        B: Send,
    {
        let mut s = self;
        let mut acc = seed;
        while let Some(x) = s.next().await {
            acc = f(acc, x);
        }
        acc
    }

    /// Sum of all items; zero for an empty stream.
    async fn sum(self) -> Self::Item
    where
        Self::Item: Add<Output = Self::Item> + Zero + Send,
    {
        self.left_fold(add::<Self::Item>, <Self::Item as Zero>::zero()).await
    }

    /// Product of all items; one for an empty stream.
    async fn product(self) -> Self::Item
    where
        Self::Item: Mul<Output = Self::Item> + One + Send,
    {
        self.left_fold(multiply::<Self::Item>, <Self::Item as One>::one()).await
    }
}

#[async_trait]
impl<T> FoldStreamExt for T
where
    T: Stream + Sized + Unpin + Send,
    T::Item: Send,
{
    // Uses the trait's default methods.
}

#[cfg(all(test, feature = "async"))]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn left_fold_accumulates_in_order() {
        let s = stream::iter(vec![1.0, 2.0, 3.0]);
        let folded = s.left_fold(|acc, x| acc - x, 10.0).await;
        assert_eq!(folded, 4.0);
    }

    #[tokio::test]
    async fn left_fold_empty_stream_returns_seed() {
        let s = stream::iter(Vec::<f64>::new());
        assert_eq!(s.left_fold(add, 2.5).await, 2.5);
    }

    #[tokio::test]
    async fn sum_and_product() {
        assert_eq!(stream::iter(vec![1.0, 2.0, 3.0]).sum().await, 6.0);
        assert_eq!(stream::iter(vec![1.0, 2.0, 3.0]).product().await, 6.0);
    }

    #[tokio::test]
    async fn sum_and_product_of_empty_stream() {
        assert_eq!(stream::iter(Vec::<f64>::new()).sum().await, 0.0);
        assert_eq!(stream::iter(Vec::<f64>::new()).product().await, 1.0);
    }

    #[tokio::test]
    async fn pairwise_combine_stream_truncates() {
        let a = stream::iter(vec![1.0, 2.0]);
        let b = stream::iter(vec![3.0, 4.0, 5.0]);
        let out: Vec<f64> = pairwise_combine_stream(a, b, add).collect().await;
        assert_eq!(out, vec![4.0, 6.0]);
    }

    #[tokio::test]
    async fn pairwise_combine_stream_with_unbounded_side() {
        let ones = stream::repeat(1.0);
        let b = stream::iter(vec![2.0, 3.0, 4.0]);
        let out: Vec<f64> = pairwise_combine_stream(ones, b, multiply).collect().await;
        assert_eq!(out, vec![2.0, 3.0, 4.0]);
    }
}
