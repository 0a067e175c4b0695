use crate::{ArityError, Field, Vector, Zero};

/// A [`Vector`] with three named components, `x`, `y` and `z`.
///
/// This is the 3-dimensional counterpart of [`Vector2D`][crate::Vector2D]; see its documentation
/// for how implementors are expected to use it.
pub trait Vector3D: Vector {
    fn x(&self) -> Self::Scalar;
    fn y(&self) -> Self::Scalar;
    fn z(&self) -> Self::Scalar;
    fn x_mut(&mut self) -> &mut Self::Scalar;
    fn y_mut(&mut self) -> &mut Self::Scalar;
    fn z_mut(&mut self) -> &mut Self::Scalar;

    /// Creates a vector from its three components.
    fn from_xyz(x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) -> Self;

    #[inline]
    fn zero() -> Self {
        let zero = <Self::Scalar as Zero>::ZERO;
        Self::from_xyz(zero, zero, zero)
    }

    #[inline]
    fn add_components(self, rhs: Self) -> Self {
        Self::from_xyz(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }

    #[inline]
    fn neg_components(self) -> Self {
        Self::from_xyz(
            self.x().additive_inverse(),
            self.y().additive_inverse(),
            self.z().additive_inverse(),
        )
    }

    #[inline]
    fn scale_components(self, a: Self::Scalar) -> Self {
        Self::from_xyz(a * self.x(), a * self.y(), a * self.z())
    }

    /// Creates a vector from the first three elements of `elements`.
    ///
    /// # Panics
    ///
    /// Panics if `elements` holds fewer than three scalars.
    #[track_caller]
    fn from_literal(elements: &[Self::Scalar]) -> Self {
        assert!(elements.len() >= 3, "Vector3D needs at least 3 numbers.");
        Self::from_xyz(elements[0], elements[1], elements[2])
    }

    fn try_from_literal(elements: &[Self::Scalar]) -> Result<Self, ArityError> {
        ArityError::check(3, elements.len())?;
        Ok(Self::from_xyz(elements[0], elements[1], elements[2]))
    }

    #[inline]
    fn from_vector<V>(v: V) -> Self
    where
        V: Vector3D<Scalar = Self::Scalar>,
    {
        Self::from_xyz(v.x(), v.y(), v.z())
    }

    /// Adds a 3D vector of another type, converting it to `Self` first.
    #[inline]
    fn add_mixed<V>(self, rhs: V) -> Self
    where
        V: Vector3D<Scalar = Self::Scalar>,
    {
        self.plus(Self::from_vector(rhs))
    }

    #[inline]
    fn into_array(self) -> [Self::Scalar; 3] {
        [self.x(), self.y(), self.z()]
    }
}
