#![deny(missing_docs)]
//! # datasets — toy 2-D binary classification data
//!
//! Small synthetic datasets for exercising a model built on the
//! `operators` crate. Each dataset is a [`Graph`]: points in (roughly)
//! the unit square and a 0/1 label per point.
//!
//! | Kind       | Label 1 when                           |
//! |------------|----------------------------------------|
//! | `Simple`   | `x1 < 0.5`                             |
//! | `Diag`     | `x1 + x2 < 0.5`                        |
//! | `Split`    | `x1 < 0.2` or `x1 > 0.8`               |
//! | `Xor`      | point is in an off-diagonal quadrant   |
//! | `Circle`   | outside radius² 0.1 around the center  |
//! | `Spiral`   | second of two interleaved spirals      |
//!
//! ## Quick start
//!
//! ```rust
//! use datasets::DatasetKind;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let kind: DatasetKind = "Xor".parse().unwrap();
//! let graph = kind.generate(50, &mut rng);
//!
//! assert_eq!(graph.len(), 50);
//! assert!(graph.labels.iter().all(|&y| y <= 1));
//! ```

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

pub mod generators;

pub use generators::{circle, diag, make_points, simple, spiral, split, xor};

/// A generated dataset: points and their binary labels.
///
/// `points[i]` has label `labels[i]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    /// Sample coordinates `(x1, x2)`.
    pub points: Vec<(f64, f64)>,
    /// Class of each point, `0` or `1`.
    pub labels: Vec<u8>,
}

impl Graph {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(point, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&(f64, f64), &u8)> {
        self.points.iter().zip(self.labels.iter())
    }
}

/// Errors from this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// No dataset is registered under this name.
    #[error("unknown dataset '{0}' (expected one of Simple, Diag, Split, Xor, Circle, Spiral)")]
    Unknown(String),
}

/// The registered datasets, addressable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// See [`simple`].
    Simple,
    /// See [`diag`].
    Diag,
    /// See [`split`].
    Split,
    /// See [`xor`].
    Xor,
    /// See [`circle`].
    Circle,
    /// See [`spiral`].
    Spiral,
}

impl DatasetKind {
    /// Every kind, in registry order.
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Simple,
        DatasetKind::Diag,
        DatasetKind::Split,
        DatasetKind::Xor,
        DatasetKind::Circle,
        DatasetKind::Spiral,
    ];

    /// Registry name, e.g. `"Circle"`.
    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Simple => "Simple",
            DatasetKind::Diag => "Diag",
            DatasetKind::Split => "Split",
            DatasetKind::Xor => "Xor",
            DatasetKind::Circle => "Circle",
            DatasetKind::Spiral => "Spiral",
        }
    }

    /// Generate a dataset of this kind with `n` samples.
    pub fn generate<R: Rng + ?Sized>(self, n: usize, rng: &mut R) -> Graph {
        let graph = match self {
            DatasetKind::Simple => simple(n, rng),
            DatasetKind::Diag => diag(n, rng),
            DatasetKind::Split => split(n, rng),
            DatasetKind::Xor => xor(n, rng),
            DatasetKind::Circle => circle(n, rng),
            DatasetKind::Spiral => spiral(n, rng),
        };
        log::debug!("generated {} dataset: requested {}, got {} points", self, n, graph.len());
        graph
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DatasetError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn names_round_trip() {
        for kind in DatasetKind::ALL {
            assert_eq!(kind.to_string().parse::<DatasetKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "Moons".parse::<DatasetKind>().unwrap_err();
        assert_eq!(err, DatasetError::Unknown("Moons".to_string()));
        assert!(err.to_string().starts_with("unknown dataset 'Moons'"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("xor".parse::<DatasetKind>().is_err());
    }

    #[test]
    fn every_kind_generates_binary_labels() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut rng = StdRng::seed_from_u64(3);
        for kind in DatasetKind::ALL {
            let g = kind.generate(40, &mut rng);
            assert_eq!(g.len(), 40, "{kind}");
            assert_eq!(g.points.len(), g.labels.len());
            assert!(g.labels.iter().all(|&y| y == 0 || y == 1));
        }
    }

    #[test]
    fn random_kinds_produce_both_classes() {
        let mut rng = StdRng::seed_from_u64(11);
        for kind in [DatasetKind::Simple, DatasetKind::Split, DatasetKind::Xor, DatasetKind::Circle] {
            let g = kind.generate(500, &mut rng);
            assert!(g.labels.contains(&0), "{kind}");
            assert!(g.labels.contains(&1), "{kind}");
        }
    }

    #[test]
    fn empty_graph() {
        let g = Graph::default();
        assert!(g.is_empty());
        assert_eq!(g.iter().count(), 0);
    }
}
