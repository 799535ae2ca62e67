//! Combine two groups into one.
//!
//! A [Product] presents a scalar-authoritative group (the left dimension) and a
//! point-authoritative group (the right dimension) as a single [Group]. It owns no
//! elements and defines no pair arithmetic: scalars come from the left dimension, points
//! from the right (random picks included), and a (scalar, point) pair becomes one
//! logical value through the order in which [crate::codec] writes and reads them.
//!
//! Which dimension contributes what is fixed by the type bounds, so a product of two
//! point-only groups (or two scalar-only groups) does not compile:
//!
//! ```compile_fail
//! use commonware_algebra::{bls12381::ScalarField, Product};
//!
//! let product = Product::new(ScalarField::new(), ScalarField::new());
//! ```
//!
//! # Example
//!
//! ```rust
//! use commonware_algebra::{bls12381::{G2Group, ScalarField}, Group, Product};
//!
//! let field = ScalarField::new();
//! let g2 = G2Group::new();
//! let product = Product::new(field.clone(), g2.clone());
//! assert_eq!(product.new_scalar(), field.new_scalar());
//! assert_eq!(product.point_len(), g2.point_len());
//! ```

use crate::{
    group::{Group, PointGroup, ScalarGroup},
    random::RandomStream,
    Error,
};
use tracing::debug;

/// The product of a scalar dimension `L` and a point dimension `R`.
#[derive(Clone, Debug)]
pub struct Product<L: ScalarGroup, R: PointGroup> {
    left: L,
    right: R,
}

impl<L: ScalarGroup, R: PointGroup> Product<L, R> {
    /// Combines `left` (source of scalars) and `right` (source of points).
    pub fn new(left: L, right: R) -> Self {
        debug!(left = %left.name(), right = %right.name(), "combined groups");
        Self { left, right }
    }

    /// Returns the scalar dimension.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns the point dimension.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Returns both dimensions.
    pub fn into_inner(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L: ScalarGroup, R: PointGroup> Group for Product<L, R> {
    type Scalar = L::Scalar;
    type Point = R::Point;

    fn name(&self) -> String {
        format!("{} x {}", self.left.name(), self.right.name())
    }

    fn scalar_len(&self) -> Result<usize, Error> {
        Ok(self.left.scalar_size())
    }

    fn point_len(&self) -> usize {
        self.right.point_len()
    }

    fn new_scalar(&self) -> Self::Scalar {
        self.left.new_scalar()
    }

    fn new_point(&self) -> Self::Point {
        self.right.new_point()
    }

    /// Relays the left dimension's stream. [Group::pick_point] still draws from the right.
    fn random_stream(&self) -> RandomStream {
        self.left.random_stream()
    }

    fn pick_scalar(&self) -> Self::Scalar {
        self.left.pick_scalar()
    }

    fn pick_point(&self) -> Self::Point {
        self.right.pick_point()
    }
}

impl<L: ScalarGroup, R: PointGroup> ScalarGroup for Product<L, R> {
    fn scalar_size(&self) -> usize {
        self.left.scalar_size()
    }
}

impl<L: ScalarGroup, R: PointGroup> PointGroup for Product<L, R> {}
