//! Elements and the group interface that manufactures them.
//!
//! A [Group] is a descriptor, not an algebraic element: it knows how to produce fresh
//! scalars and points, how many bytes their canonical encodings occupy, and which
//! randomness to draw from when an element must be picked at random. Protocol code
//! written against [Group] works unchanged over a single curve group or a [crate::Product]
//! of a scalar field and a curve group.

use crate::{random::RandomStream, Error};
use rand::{CryptoRng, RngCore};
use std::fmt::Debug;
use zeroize::Zeroize;

/// An element of an additive group with a fixed-width canonical encoding.
pub trait Element: Clone + Eq + PartialEq + Debug + Send + Sync {
    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns the multiplicative identity (for scalars) or the generator (for points).
    fn one() -> Self;

    /// Adds to self in-place.
    fn add(&mut self, rhs: &Self);

    /// Samples a uniformly random element.
    fn rand<R: RngCore + CryptoRng>(rng: &mut R) -> Self;

    /// Canonically serializes the element.
    fn serialize(&self) -> Vec<u8>;

    /// Deserializes a canonically encoded element.
    ///
    /// Returns `None` if the length is wrong or the bytes do not encode a valid element.
    fn deserialize(bytes: &[u8]) -> Option<Self>;
}

/// An element of a prime-order field.
///
/// Scalars frequently hold secret key material, so implementations must be [Zeroize]
/// and should clear themselves on drop.
pub trait Scalar: Element + Zeroize {
    /// Returns the scalar corresponding to the provided integer.
    fn from_u64(i: u64) -> Self;

    /// Subtracts the provided scalar from self in-place.
    fn sub(&mut self, rhs: &Self);

    /// Multiplies self in-place.
    fn mul(&mut self, rhs: &Self);

    /// Negates self in-place.
    fn neg(&mut self);

    /// Computes the inverse of the scalar, if it exists.
    fn inverse(&self) -> Option<Self>;
}

/// An element of an elliptic-curve group.
pub trait Point: Element {
    /// The scalars that act on this group.
    type Scalar: Scalar;

    /// Multiplies self in-place.
    fn mul(&mut self, rhs: &Self::Scalar);

    /// Returns whether self is the identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Maps the provided data to a group element.
    fn map(&mut self, message: &[u8]);
}

/// A factory and descriptor for the scalars and points of some algebraic structure.
pub trait Group: Send + Sync {
    /// The type returned by [Group::new_scalar].
    type Scalar: Scalar;

    /// The type returned by [Group::new_point].
    type Point: Element;

    /// Human-readable name of the group.
    fn name(&self) -> String;

    /// Length of an encoded scalar.
    ///
    /// Returns [Error::Unsupported] if the group has no independently sized scalar.
    fn scalar_len(&self) -> Result<usize, Error>;

    /// Length of an encoded point.
    fn point_len(&self) -> usize;

    /// Returns a fresh, zero-valued scalar.
    fn new_scalar(&self) -> Self::Scalar;

    /// Returns a fresh point set to the identity.
    fn new_point(&self) -> Self::Point;

    /// Returns a handle to the randomness configured for this group.
    fn random_stream(&self) -> RandomStream;

    /// Samples a random scalar from [Group::random_stream].
    fn pick_scalar(&self) -> Self::Scalar {
        Self::Scalar::rand(&mut self.random_stream())
    }

    /// Samples a random point from [Group::random_stream].
    fn pick_point(&self) -> Self::Point {
        Self::Point::rand(&mut self.random_stream())
    }
}

/// A [Group] that is authoritative for scalars.
///
/// Only these groups may serve as the left dimension of a [crate::Product].
pub trait ScalarGroup: Group {
    /// Length of an encoded scalar (infallible for scalar-authoritative groups).
    fn scalar_size(&self) -> usize;
}

/// A [Group] that is authoritative for points.
///
/// Only these groups may serve as the right dimension of a [crate::Product].
pub trait PointGroup: Group {}
