//! Compose scalar fields and pairing-friendly curve groups behind one group interface.
//!
//! Threshold protocols (distributed key generation, VRF output construction) manipulate
//! secret scalars together with the curve points that commit to them. This crate lets
//! such protocols be written once against [Group]:
//!
//! - [bls12381] binds the BLS12-381 scalar field and G2 group to [Group].
//! - [Product] combines a scalar-authoritative group with a point-authoritative group.
//! - [codec] reads and writes ordered sequences of scalars and points.
//! - [random] and [xof] supply the randomness groups draw from, either secure or
//!   reproducible from a seed.
//!
//! # Status
//!
//! `commonware-algebra` is **ALPHA** software and is not yet recommended for production use. Developers should
//! expect breaking changes and occasional instability.
//!
//! # Example
//!
//! ```rust
//! use commonware_algebra::{
//!     bls12381::{G2Group, ScalarField, G2},
//!     codec, Element, Group, Point, Product, RandomSource,
//! };
//!
//! // Reproducible groups for a test vector
//! let source = RandomSource::from_seed(b"dealer");
//! let group = Product::new(ScalarField::with_source(source), G2Group::new());
//!
//! // A secret share and its public commitment
//! let share = group.pick_scalar();
//! let mut commitment = G2::one();
//! commitment.mul(&share);
//!
//! // Send both as one unit
//! let mut buf = Vec::new();
//! codec::write_pair(&mut buf, &share, &commitment).unwrap();
//! let (received, committed) = codec::read_pair(&mut buf.as_slice(), &group).unwrap();
//! assert_eq!(received, share);
//! assert_eq!(committed, commitment);
//! ```

pub mod bls12381;
pub mod codec;
mod error;
pub use error::Error;
pub mod group;
pub use group::{Element, Group, Point, PointGroup, Scalar, ScalarGroup};
pub mod product;
pub use product::Product;
pub mod random;
pub use random::{RandomSource, RandomStream};
pub mod xof;
pub use xof::{xof, Xof};
