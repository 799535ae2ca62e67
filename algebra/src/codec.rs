//! Serialize sequences of scalars and points.
//!
//! The wire format is the concatenation of each value's canonical encoding, in order,
//! with no framing. Widths come from the [Group] the values belong to, so the reader must
//! know the [Kind] of every position in advance (this is what a protocol message layout
//! provides).
//!
//! # Example
//!
//! ```rust
//! use commonware_algebra::{
//!     bls12381::{G2Group, ScalarField},
//!     codec::{self, Kind, Value},
//!     Group, Product,
//! };
//!
//! let group = Product::new(ScalarField::new(), G2Group::new());
//! let values = vec![
//!     Value::Scalar(group.pick_scalar()),
//!     Value::Point(group.pick_point()),
//! ];
//! let bytes = codec::encode(&values);
//! let decoded = codec::decode(bytes.as_slice(), &group, &[Kind::Scalar, Kind::Point]).unwrap();
//! assert_eq!(decoded, values);
//! ```

use crate::{
    group::{Element, Group},
    Error,
};
use bytes::{Buf, BufMut};
use std::fmt::{Display, Formatter};
use tracing::debug;
use zeroize::Zeroizing;

/// The algebraic kind of a position in a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Scalar,
    Point,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar => f.write_str("scalar"),
            Self::Point => f.write_str("point"),
        }
    }
}

/// A scalar or a point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value<S, P> {
    Scalar(S),
    Point(P),
}

impl<S: Element, P: Element> Value<S, P> {
    /// Returns the kind of the value.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Scalar(_) => Kind::Scalar,
            Self::Point(_) => Kind::Point,
        }
    }

    /// Returns the scalar, if this is one.
    pub fn into_scalar(self) -> Option<S> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Point(_) => None,
        }
    }

    /// Returns the point, if this is one.
    pub fn into_point(self) -> Option<P> {
        match self {
            Self::Scalar(_) => None,
            Self::Point(p) => Some(p),
        }
    }

    /// Canonically serializes the value.
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Self::Scalar(s) => s.serialize(),
            Self::Point(p) => p.serialize(),
        }
    }
}

/// Returns the number of bytes a sequence with the given layout occupies.
pub fn encode_size<G: Group>(group: &G, kinds: &[Kind]) -> Result<usize, Error> {
    let mut size = 0;
    for kind in kinds {
        size += width(group, *kind)?;
    }
    Ok(size)
}

fn width<G: Group>(group: &G, kind: Kind) -> Result<usize, Error> {
    match kind {
        Kind::Scalar => group.scalar_len(),
        Kind::Point => Ok(group.point_len()),
    }
}

/// Writes `values` to `buf` in order.
///
/// Nothing is written unless `buf` can hold every value.
pub fn write<S: Element, P: Element>(
    buf: &mut impl BufMut,
    values: &[Value<S, P>],
) -> Result<(), Error> {
    let encoded: Vec<Zeroizing<Vec<u8>>> = values
        .iter()
        .map(|value| Zeroizing::new(value.serialize()))
        .collect();
    let needed: usize = encoded.iter().map(|bytes| bytes.len()).sum();
    let remaining = buf.remaining_mut();
    if remaining < needed {
        return Err(Error::InsufficientCapacity { needed, remaining });
    }
    for bytes in &encoded {
        buf.put_slice(bytes);
    }
    Ok(())
}

/// Encodes `values` into a new buffer.
pub fn encode<S: Element, P: Element>(values: &[Value<S, P>]) -> Vec<u8> {
    let mut out = Vec::new();
    for value in values {
        out.extend_from_slice(&Zeroizing::new(value.serialize()));
    }
    out
}

/// Reads one element of `kind` occupying `needed` bytes, reporting failures at `index`.
fn read_element<E: Element>(
    buf: &mut impl Buf,
    index: usize,
    kind: Kind,
    needed: usize,
) -> Result<E, Error> {
    let remaining = buf.remaining();
    if remaining < needed {
        debug!(index, %kind, needed, remaining, "sequence truncated");
        return Err(Error::EndOfBuffer {
            index,
            needed,
            remaining,
        });
    }
    let mut bytes = Zeroizing::new(vec![0u8; needed]);
    buf.copy_to_slice(&mut bytes);
    E::deserialize(&bytes).ok_or_else(|| {
        debug!(index, %kind, "invalid encoding");
        Error::InvalidEncoding { index, kind }
    })
}

/// Reads one value per entry of `kinds` from `buf`.
///
/// On failure, the error's `index` is the number of values that were decoded before it.
pub fn read<G: Group>(
    buf: &mut impl Buf,
    group: &G,
    kinds: &[Kind],
) -> Result<Vec<Value<G::Scalar, G::Point>>, Error> {
    let mut values: Vec<Value<G::Scalar, G::Point>> = Vec::with_capacity(kinds.len());
    for (index, kind) in kinds.iter().copied().enumerate() {
        let needed = width(group, kind)?;
        let value = match kind {
            Kind::Scalar => Value::Scalar(read_element(buf, index, kind, needed)?),
            Kind::Point => Value::Point(read_element(buf, index, kind, needed)?),
        };
        values.push(value);
    }
    Ok(values)
}

/// Reads one value per entry of `kinds` from `buf`, requiring that `buf` is fully consumed.
pub fn decode<G: Group>(
    mut buf: impl Buf,
    group: &G,
    kinds: &[Kind],
) -> Result<Vec<Value<G::Scalar, G::Point>>, Error> {
    let values = read(&mut buf, group, kinds)?;
    let remaining = buf.remaining();
    if remaining > 0 {
        return Err(Error::ExtraData(remaining));
    }
    Ok(values)
}

/// Writes a (scalar, point) pair as one unit.
pub fn write_pair<S: Element, P: Element>(
    buf: &mut impl BufMut,
    scalar: &S,
    point: &P,
) -> Result<(), Error> {
    write(
        buf,
        &[Value::Scalar(scalar.clone()), Value::Point(point.clone())],
    )
}

/// Reads a (scalar, point) pair written by [write_pair].
pub fn read_pair<G: Group>(buf: &mut impl Buf, group: &G) -> Result<(G::Scalar, G::Point), Error> {
    let scalar = read_element(buf, 0, Kind::Scalar, group.scalar_len()?)?;
    let point = read_element(buf, 1, Kind::Point, group.point_len())?;
    Ok((scalar, point))
}
