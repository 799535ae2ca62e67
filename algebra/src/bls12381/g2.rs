use super::scalar::{Scalar, SCALAR_LENGTH};
use crate::group::{Element, Point};
use blst::{
    blst_hash_to_g2, blst_p2, blst_p2_add_or_double, blst_p2_affine, blst_p2_compress,
    blst_p2_from_affine, blst_p2_in_g2, blst_p2_is_equal, blst_p2_is_inf, blst_p2_mult,
    blst_p2_uncompress, blst_scalar, BLS12_381_G2, BLST_ERROR,
};
use rand::{CryptoRng, RngCore};
use std::ptr;
use zeroize::Zeroize;

/// Length of a compressed [G2] element.
pub const G2_ELEMENT_BYTE_LENGTH: usize = 96;

/// Domain separation tag for hashing a message to G2.
pub const DST_G2: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// An element of the BLS12-381 G2 group (defined over the quadratic extension field).
///
/// Equality is group equality: two projective representations of the same point are equal.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct G2(blst_p2);

impl PartialEq for G2 {
    fn eq(&self, other: &Self) -> bool {
        unsafe { blst_p2_is_equal(&self.0, &other.0) }
    }
}

impl Eq for G2 {}

/// Returns the size in bits of a given blst_scalar (represented in little-endian).
fn bits(scalar: &blst_scalar) -> usize {
    let mut bits: usize = SCALAR_LENGTH * 8;
    for i in scalar.b.iter().rev() {
        let leading = i.leading_zeros();
        bits -= leading as usize;
        if leading < 8 {
            break;
        }
    }
    bits
}

impl Element for G2 {
    fn zero() -> Self {
        Self(blst_p2::default())
    }

    fn one() -> Self {
        let mut ret = blst_p2::default();
        unsafe {
            blst_p2_from_affine(&mut ret, &BLS12_381_G2);
        }
        Self(ret)
    }

    fn add(&mut self, rhs: &Self) {
        unsafe {
            blst_p2_add_or_double(&mut self.0, &self.0, &rhs.0);
        }
    }

    fn rand<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut ret = Self::one();
        ret.mul(&Scalar::rand(rng));
        ret
    }

    fn serialize(&self) -> Vec<u8> {
        let mut bytes = [0u8; G2_ELEMENT_BYTE_LENGTH];
        unsafe {
            blst_p2_compress(bytes.as_mut_ptr(), &self.0);
        }
        bytes.to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != G2_ELEMENT_BYTE_LENGTH {
            return None;
        }
        let mut ret = blst_p2::default();
        unsafe {
            // Rejects points not on the curve and any non-canonical encoding of the identity
            let mut affine = blst_p2_affine::default();
            if blst_p2_uncompress(&mut affine, bytes.as_ptr()) != BLST_ERROR::BLST_SUCCESS {
                return None;
            }
            blst_p2_from_affine(&mut ret, &affine);

            // The identity is what a group hands out as a fresh point, so it must round-trip
            if blst_p2_is_inf(&ret) {
                return Some(Self::zero());
            }

            // Verify that the deserialized element is in G2
            if !blst_p2_in_g2(&ret) {
                return None;
            }
        }
        Some(Self(ret))
    }
}

impl Point for G2 {
    type Scalar = Scalar;

    fn mul(&mut self, rhs: &Scalar) {
        let mut scalar = rhs.as_blst_scalar();
        unsafe {
            blst_p2_mult(&mut self.0, &self.0, scalar.b.as_ptr(), bits(&scalar));
        }
        scalar.b.zeroize();
    }

    fn is_zero(&self) -> bool {
        unsafe { blst_p2_is_inf(&self.0) }
    }

    fn map(&mut self, data: &[u8]) {
        unsafe {
            blst_hash_to_g2(
                &mut self.0,
                data.as_ptr(),
                data.len(),
                DST_G2.as_ptr(),
                DST_G2.len(),
                ptr::null(),
                0,
            );
        }
    }
}
