use crate::{ArityError, Field, Vector, Zero};

/// A [`Vector`] with four named components, `x`, `y`, `z` and `w`.
pub trait Vector4D: Vector {
    fn x(&self) -> Self::Scalar;
    fn y(&self) -> Self::Scalar;
    fn z(&self) -> Self::Scalar;
    fn w(&self) -> Self::Scalar;
    fn x_mut(&mut self) -> &mut Self::Scalar;
    fn y_mut(&mut self) -> &mut Self::Scalar;
    fn z_mut(&mut self) -> &mut Self::Scalar;
    fn w_mut(&mut self) -> &mut Self::Scalar;

    fn from_xyzw(x: Self::Scalar, y: Self::Scalar, z: Self::Scalar, w: Self::Scalar) -> Self;

    #[inline]
    fn zero() -> Self {
        let zero = <Self::Scalar as Zero>::ZERO;
        Self::from_xyzw(zero, zero, zero, zero)
    }

    #[inline]
    fn add_components(self, rhs: Self) -> Self {
        Self::from_xyzw(
            self.x() + rhs.x(),
            self.y() + rhs.y(),
            self.z() + rhs.z(),
            self.w() + rhs.w(),
        )
    }

    #[inline]
    fn neg_components(self) -> Self {
        Self::from_xyzw(
            self.x().additive_inverse(),
            self.y().additive_inverse(),
            self.z().additive_inverse(),
            self.w().additive_inverse(),
        )
    }

    #[inline]
    fn scale_components(self, a: Self::Scalar) -> Self {
        Self::from_xyzw(a * self.x(), a * self.y(), a * self.z(), a * self.w())
    }

    /// Creates a vector from the first four elements of `elements`.
    ///
    /// # Panics
    ///
    /// Panics if `elements` holds fewer than four scalars.
    #[track_caller]
    fn from_literal(elements: &[Self::Scalar]) -> Self {
        assert!(elements.len() >= 4, "Vector4D needs at least 4 numbers.");
        Self::from_xyzw(elements[0], elements[1], elements[2], elements[3])
    }

    fn try_from_literal(elements: &[Self::Scalar]) -> Result<Self, ArityError> {
        ArityError::check(4, elements.len())?;
        Ok(Self::from_xyzw(
            elements[0],
            elements[1],
            elements[2],
            elements[3],
        ))
    }

    #[inline]
    fn from_vector<V>(v: V) -> Self
    where
        V: Vector4D<Scalar = Self::Scalar>,
    {
        Self::from_xyzw(v.x(), v.y(), v.z(), v.w())
    }

    #[inline]
    fn add_mixed<V>(self, rhs: V) -> Self
    where
        V: Vector4D<Scalar = Self::Scalar>,
    {
        self.plus(Self::from_vector(rhs))
    }

    #[inline]
    fn into_array(self) -> [Self::Scalar; 4] {
        [self.x(), self.y(), self.z(), self.w()]
    }
}
