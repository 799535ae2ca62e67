use super::{g2::G2, scalar::Scalar};
use crate::{
    group::{Element, Group, PointGroup, ScalarGroup},
    random::{RandomSource, RandomStream},
    Error,
};

/// The BLS12-381 scalar field viewed as an additive group.
///
/// Both scalars and points of this group are field elements, so [Group::pick_point]
/// returns a secret-typed [Scalar]. It is the natural left dimension of a
/// [crate::Product] and never a point dimension (it is not a [PointGroup]).
#[derive(Clone, Debug, Default)]
pub struct ScalarField {
    source: RandomSource,
}

impl ScalarField {
    /// Creates a scalar field drawing randomness from the operating system.
    pub fn new() -> Self {
        Self::with_source(RandomSource::default_secure())
    }

    /// Creates a scalar field drawing all randomness from `source`.
    pub fn with_source(source: RandomSource) -> Self {
        Self { source }
    }
}

impl Group for ScalarField {
    type Scalar = Scalar;
    type Point = Scalar;

    fn name(&self) -> String {
        "BLS12-381.Fr".into()
    }

    fn scalar_len(&self) -> Result<usize, Error> {
        Ok(self.scalar_size())
    }

    fn point_len(&self) -> usize {
        self.new_point().serialize().len()
    }

    fn new_scalar(&self) -> Scalar {
        Scalar::zero()
    }

    fn new_point(&self) -> Scalar {
        Scalar::zero()
    }

    fn random_stream(&self) -> RandomStream {
        self.source.stream()
    }
}

impl ScalarGroup for ScalarField {
    fn scalar_size(&self) -> usize {
        self.new_scalar().serialize().len()
    }
}

/// The G2 group of BLS12-381.
///
/// Exponents of this group only make sense alongside the group they are paired with, so
/// [Group::scalar_len] is unsupported. [Group::new_scalar] still returns a zero [Scalar]
/// so the binding can be used wherever a scalar value of the right type is required.
#[derive(Clone, Debug, Default)]
pub struct G2Group {
    source: RandomSource,
}

impl G2Group {
    /// Creates a G2 binding drawing randomness from the operating system.
    pub fn new() -> Self {
        Self::with_source(RandomSource::default_secure())
    }

    /// Creates a G2 binding drawing all randomness from `source`.
    pub fn with_source(source: RandomSource) -> Self {
        Self { source }
    }
}

impl Group for G2Group {
    type Scalar = Scalar;
    type Point = G2;

    fn name(&self) -> String {
        "BLS12-381.G2".into()
    }

    fn scalar_len(&self) -> Result<usize, Error> {
        Err(Error::Unsupported("scalar_len"))
    }

    fn point_len(&self) -> usize {
        // Measured rather than declared so it cannot drift from the encoding
        self.new_point().serialize().len()
    }

    fn new_scalar(&self) -> Scalar {
        Scalar::zero()
    }

    fn new_point(&self) -> G2 {
        G2::zero()
    }

    fn random_stream(&self) -> RandomStream {
        self.source.stream()
    }
}

impl PointGroup for G2Group {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bls12381::{G2_ELEMENT_BYTE_LENGTH, SCALAR_LENGTH},
        group::Point,
    };

    #[test]
    fn test_g2_point_len_matches_encoding() {
        let group = G2Group::new();
        assert_eq!(group.point_len(), group.new_point().serialize().len());
        assert_eq!(group.point_len(), G2_ELEMENT_BYTE_LENGTH);
        assert_eq!(group.point_len(), G2::one().serialize().len());
    }

    #[test]
    fn test_g2_scalar_len_unsupported() {
        let group = G2Group::new();
        assert_eq!(group.scalar_len(), Err(Error::Unsupported("scalar_len")));
    }

    #[test]
    fn test_g2_fresh_values() {
        let group = G2Group::new();
        assert!(group.new_point().is_zero());
        assert_eq!(group.new_scalar(), Scalar::zero());
        assert_eq!(group.name(), "BLS12-381.G2");
    }

    #[test]
    fn test_scalar_field_lengths() {
        let field = ScalarField::new();
        assert_eq!(field.scalar_len(), Ok(SCALAR_LENGTH));
        assert_eq!(field.scalar_size(), SCALAR_LENGTH);
        assert_eq!(field.point_len(), SCALAR_LENGTH);
        assert_eq!(field.new_scalar(), Scalar::zero());
        assert_eq!(field.name(), "BLS12-381.Fr");
    }

    #[test]
    fn test_seeded_groups_pick_reproducibly() {
        let a = G2Group::with_source(RandomSource::from_seed(b"g2"));
        let b = G2Group::with_source(RandomSource::from_seed(b"g2"));
        let first = a.pick_point();
        assert_eq!(first, b.pick_point());

        // Each pick advances the configured stream
        let second = a.pick_point();
        assert_ne!(first, second);
        assert_eq!(second, b.pick_point());
    }

    #[test]
    fn test_seeded_field_picks_reproducibly() {
        let a = ScalarField::with_source(RandomSource::from_seed(b"fr"));
        let b = ScalarField::with_source(RandomSource::from_seed(b"fr"));
        assert_eq!(a.pick_scalar(), b.pick_scalar());
        assert_ne!(a.pick_scalar(), a.pick_scalar());
    }

    #[test]
    fn test_secure_picks_differ() {
        let group = G2Group::new();
        assert_ne!(group.pick_point(), group.pick_point());
        assert!(!group.pick_point().is_zero());
    }
}
