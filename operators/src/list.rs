//! List operations built from the higher-order functions.

use num_traits::{One, Zero};
use std::ops::{Add, Mul, Neg};

use crate::higher_order::{left_fold, pairwise_combine, transform};
use crate::scalar::{add, multiply, negate};

/// Negate every element.
pub fn negate_all<I, T>(a: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Neg<Output = T>,
{
    transform(a, negate::<T>)
}

/// Elementwise sum of `a` and `b`, truncated to the shorter input.
///
/// ```
/// use operators::add_pairwise;
///
/// assert_eq!(add_pairwise([1.0, 2.0], [3.0, 4.0, 5.0]), vec![4.0, 6.0]);
/// ```
pub fn add_pairwise<A, B, T>(a: A, b: B) -> Vec<T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: Add<Output = T>,
{
    pairwise_combine(a, b, add::<T>).collect()
}

/// Sum of all elements; `0` for an empty sequence.
pub fn sum<I, T>(a: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Add<Output = T> + Zero,
{
    left_fold(a, add::<T>, T::zero())
}

/// Product of all elements; `1` for an empty sequence.
pub fn product<I, T>(a: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Mul<Output = T> + One,
{
    left_fold(a, multiply::<T>, T::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate_all_flips_signs() {
        assert_eq!(negate_all(vec![1.0, -2.0, 0.5]), vec![-1.0, 2.0, -0.5]);
        assert!(negate_all(Vec::<f64>::new()).is_empty());
    }

    #[test]
    fn add_pairwise_truncates() {
        assert_eq!(add_pairwise([1.0, 2.0], [3.0, 4.0, 5.0]), vec![4.0, 6.0]);
        assert_eq!(add_pairwise([1.0, 2.0, 3.0], [3.0]), vec![4.0]);
        assert!(add_pairwise(Vec::<f64>::new(), [1.0]).is_empty());
    }

    #[test]
    fn add_pairwise_accepts_iterators() {
        let a = (1..=3).map(f64::from);
        let b = vec![0.5; 3];
        assert_eq!(add_pairwise(a, b), vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn sum_works() {
        assert_eq!(sum([1.0, 2.0, 3.0, 4.0]), 10.0);
        assert_eq!(sum(vec![-1.5, 1.5]), 0.0);
    }

    #[test]
    fn sum_of_empty_is_zero() {
        assert_eq!(sum(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn product_works() {
        assert_eq!(product([1.0, 2.0, 3.0, 4.0]), 24.0);
        assert_eq!(product([2.0, 0.0, 5.0]), 0.0);
    }

    #[test]
    fn product_of_empty_is_one() {
        assert_eq!(product(Vec::<f64>::new()), 1.0);
    }

    #[test]
    fn sum_and_product_work_for_f32() {
        assert_eq!(sum([0.5_f32, 0.25]), 0.75);
        assert_eq!(product([0.5_f32, 4.0]), 2.0);
    }
}
