//! Dataset generators.
//!
//! Every generator except [`spiral`] samples points uniformly from the
//! unit square and labels them by a fixed rule. [`spiral`] is
//! deterministic and ignores the generator.

use rand::Rng;

use crate::Graph;

/// `n` points sampled uniformly from `[0, 1)²`.
pub fn make_points<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<(f64, f64)> {
    (0..n).map(|_| (rng.random(), rng.random())).collect()
}

fn labelled<R, F>(n: usize, rng: &mut R, rule: F) -> Graph
where
    R: Rng + ?Sized,
    F: Fn(f64, f64) -> bool,
{
    let points = make_points(n, rng);
    let labels = points.iter().map(|&(x1, x2)| u8::from(rule(x1, x2))).collect();
    Graph { points, labels }
}

/// Vertical split: label 1 iff `x1 < 0.5`.
pub fn simple<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    labelled(n, rng, |x1, _| x1 < 0.5)
}

/// Diagonal split: label 1 iff `x1 + x2 < 0.5`.
pub fn diag<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    labelled(n, rng, |x1, x2| x1 + x2 < 0.5)
}

/// Two outer bands: label 1 iff `x1 < 0.2` or `x1 > 0.8`.
pub fn split<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    labelled(n, rng, |x1, _| x1 < 0.2 || x1 > 0.8)
}

/// Quadrant XOR: label 1 on the off-diagonal quadrants.
pub fn xor<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    labelled(n, rng, |x1, x2| {
        (x1 < 0.5 && x2 > 0.5) || (x1 > 0.5 && x2 < 0.5)
    })
}

/// Circle: label 1 outside radius² = 0.1 around `(0.5, 0.5)`.
pub fn circle<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    labelled(n, rng, |x1, x2| {
        let (dx, dy) = (x1 - 0.5, x2 - 0.5);
        dx * dx + dy * dy > 0.1
    })
}

/// Two interleaved spirals of `n / 2` points each.
///
/// Class 0 comes first, then class 1. An odd `n` drops one point;
/// `n < 2` gives an empty graph.
pub fn spiral<R: Rng + ?Sized>(n: usize, _rng: &mut R) -> Graph {
    let half = n / 2;
    let x = |t: f64| t * t.cos() / 20.0;
    let y = |t: f64| t * t.sin() / 20.0;
    let param = |i: usize| 10.0 * (i as f64 / half as f64);

    let first = (5..5 + half).map(|i| {
        let t = param(i);
        (x(t) + 0.5, y(t) + 0.5)
    });
    let second = (5..5 + half).map(|i| {
        let t = -param(i);
        (y(t) + 0.5, x(t) + 0.5)
    });
    let points = first.chain(second).collect();

    let mut labels = vec![0; half];
    labels.extend(std::iter::repeat(1).take(half));
    Graph { points, labels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn check_labels(graph: &Graph, rule: impl Fn(f64, f64) -> bool) {
        for (&(x1, x2), &label) in graph.iter() {
            assert_eq!(label, u8::from(rule(x1, x2)), "point ({x1}, {x2})");
        }
    }

    #[test]
    fn make_points_are_in_unit_square() {
        let pts = make_points(200, &mut rng());
        assert_eq!(pts.len(), 200);
        for (x1, x2) in pts {
            assert!((0.0..1.0).contains(&x1));
            assert!((0.0..1.0).contains(&x2));
        }
    }

    #[test]
    fn same_seed_same_points() {
        assert_eq!(make_points(10, &mut rng()), make_points(10, &mut rng()));
    }

    #[test]
    fn simple_labels_left_half() {
        let g = simple(100, &mut rng());
        assert_eq!(g.len(), 100);
        check_labels(&g, |x1, _| x1 < 0.5);
    }

    #[test]
    fn diag_labels_lower_corner() {
        check_labels(&diag(100, &mut rng()), |x1, x2| x1 + x2 < 0.5);
    }

    #[test]
    fn split_labels_outer_bands() {
        check_labels(&split(100, &mut rng()), |x1, _| !(0.2..=0.8).contains(&x1));
    }

    #[test]
    fn xor_labels_off_diagonal_quadrants() {
        check_labels(&xor(100, &mut rng()), |x1, x2| {
            (x1 < 0.5) != (x2 < 0.5) && x1 != 0.5 && x2 != 0.5
        });
    }

    #[test]
    fn circle_labels_outside_radius() {
        let g = circle(100, &mut rng());
        check_labels(&g, |x1, x2| (x1 - 0.5).powi(2) + (x2 - 0.5).powi(2) > 0.1);
    }

    #[test]
    fn spiral_has_two_equal_classes() {
        let g = spiral(10, &mut rng());
        assert_eq!(g.len(), 10);
        assert_eq!(g.labels, vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn spiral_starts_at_parameter_ten() {
        // half = 5, first point uses i = 5, so t = 10.
        let g = spiral(10, &mut rng());
        let t: f64 = 10.0;
        let (px, py) = g.points[0];
        assert!((px - (t * t.cos() / 20.0 + 0.5)).abs() < 1e-12);
        assert!((py - (t * t.sin() / 20.0 + 0.5)).abs() < 1e-12);

        // The second class mirrors with t = -10 and swapped axes.
        let (qx, qy) = g.points[5];
        assert!((qx - (-t * (-t).sin() / 20.0 + 0.5)).abs() < 1e-12);
        assert!((qy - (-t * (-t).cos() / 20.0 + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn spiral_odd_and_tiny_sizes() {
        assert_eq!(spiral(7, &mut rng()).len(), 6);
        assert!(spiral(1, &mut rng()).is_empty());
        assert!(spiral(0, &mut rng()).is_empty());
    }

    #[test]
    fn spiral_ignores_rng() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        assert_eq!(spiral(8, &mut a), spiral(8, &mut b));
    }
}
