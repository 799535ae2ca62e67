//! Bindings for the BLS12-381 pairing-friendly curve.
//!
//! Scalars are 32-byte big-endian field elements and G2 points use the 96-byte compressed
//! BLS12-381 form. Neither is compatible with alt_bn128 (BN254) encodings, such as those
//! expected by Ethereum precompiles.
//!
//! # Acknowledgements
//!
//! _The following crates were used as a reference when implementing this module. If code is very similar
//! to the reference, it is accompanied by a comment and link._
//!
//! * <https://github.com/filecoin-project/blstrs> + <https://github.com/MystenLabs/fastcrypto>: Implementing operations over
//!   the BLS12-381 scalar field with <https://github.com/supranational/blst>.
//!
//! # Warning
//!
//! Ensure that points are checked to belong to G2 to prevent small subgroup attacks. This
//! is already taken care of for you if you use [crate::Element::deserialize] (or the
//! [crate::codec] built on it).
//!
//! # Example
//!
//! ```rust
//! use commonware_algebra::{bls12381::{G2Group, ScalarField}, Group, Product};
//!
//! let product = Product::new(ScalarField::new(), G2Group::new());
//! assert_eq!(product.scalar_len().unwrap(), 32);
//! assert_eq!(product.point_len(), 96);
//! ```

mod g2;
mod groups;
mod scalar;

pub use g2::{G2, DST_G2, G2_ELEMENT_BYTE_LENGTH};
pub use groups::{G2Group, ScalarField};
pub use scalar::{Scalar, SCALAR_LENGTH};
