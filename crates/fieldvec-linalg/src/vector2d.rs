use crate::{ArityError, Field, Vector, Zero};

/// A [`Vector`] with two named components, `x` and `y`.
///
/// Implementors bind their own storage to the accessors and provide [`Vector2D::from_xy`]. Any
/// number of unrelated types can implement this trait with the same scalar, e.g. a point and a
/// displacement, and still interoperate via [`Vector2D::add_mixed`] and the conversion
/// constructor [`Vector2D::from_vector`].
///
/// The component-wise arithmetic is provided here; [`impl_vector2d!`] uses it to implement
/// [`Vector`].
///
/// [`impl_vector2d!`]: crate::impl_vector2d
pub trait Vector2D: Vector {
    fn x(&self) -> Self::Scalar;
    fn y(&self) -> Self::Scalar;
    fn x_mut(&mut self) -> &mut Self::Scalar;
    fn y_mut(&mut self) -> &mut Self::Scalar;

    /// Creates a vector from its two components.
    fn from_xy(x: Self::Scalar, y: Self::Scalar) -> Self;

    /// The identity element: a vector with every component set to zero.
    #[inline]
    fn zero() -> Self {
        let zero = <Self::Scalar as Zero>::ZERO;
        Self::from_xy(zero, zero)
    }

    #[inline]
    fn add_components(self, rhs: Self) -> Self {
        Self::from_xy(self.x() + rhs.x(), self.y() + rhs.y())
    }

    #[inline]
    fn neg_components(self) -> Self {
        Self::from_xy(self.x().additive_inverse(), self.y().additive_inverse())
    }

    #[inline]
    fn scale_components(self, a: Self::Scalar) -> Self {
        Self::from_xy(a * self.x(), a * self.y())
    }

    /// Creates a vector from the first two elements of `elements`.
    ///
    /// Any further elements are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `elements` holds fewer than two scalars. Use [`Vector2D::try_from_literal`] when
    /// the length is not under the caller's control.
    #[track_caller]
    fn from_literal(elements: &[Self::Scalar]) -> Self {
        assert!(elements.len() >= 2, "Vector2D needs at least 2 numbers.");
        Self::from_xy(elements[0], elements[1])
    }

    /// Fallible version of [`Vector2D::from_literal`].
    fn try_from_literal(elements: &[Self::Scalar]) -> Result<Self, ArityError> {
        ArityError::check(2, elements.len())?;
        Ok(Self::from_xy(elements[0], elements[1]))
    }

    /// Copies the components of another 2D vector into a new `Self`.
    #[inline]
    fn from_vector<V>(v: V) -> Self
    where
        V: Vector2D<Scalar = Self::Scalar>,
    {
        Self::from_xy(v.x(), v.y())
    }

    /// Adds a vector of a (possibly) different type, returning a value of the type of `self`.
    ///
    /// `rhs` is converted with [`Vector2D::from_vector`] first, then added with [`Vector::plus`].
    #[inline]
    fn add_mixed<V>(self, rhs: V) -> Self
    where
        V: Vector2D<Scalar = Self::Scalar>,
    {
        self.plus(Self::from_vector(rhs))
    }

    #[inline]
    fn into_array(self) -> [Self::Scalar; 2] {
        [self.x(), self.y()]
    }
}
