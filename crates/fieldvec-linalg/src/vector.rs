use std::{error::Error, fmt};

use crate::Field;

/// An element of a vector space over [`Vector::Scalar`].
///
/// Implementors only supply the three primitive operations: addition, negation and scaling. The
/// rest of the arithmetic surface is derived from them here, once, so it cannot drift from the
/// primitives:
///
/// - `u - v` is `u + (-v)` ([`Vector::minus`])
/// - `v * a` is `a * v` ([`Vector::scaled_right`])
/// - the in-place forms assign the result of the non-mutating form
///
/// Concrete types normally don't implement this trait by hand. The [`impl_vector2d!`],
/// [`impl_vector3d!`] and [`impl_vector4d!`] macros implement it component-wise and also wire up
/// the `std::ops` operators.
///
/// [`impl_vector2d!`]: crate::impl_vector2d
/// [`impl_vector3d!`]: crate::impl_vector3d
/// [`impl_vector4d!`]: crate::impl_vector4d
pub trait Vector: Copy {
    /// The field the vector's components live in.
    type Scalar: Field;

    /// Vector addition, `self + rhs`.
    fn plus(self, rhs: Self) -> Self;

    /// Additive inverse, `-self`.
    fn negated(self) -> Self;

    /// Scalar multiplication, `a * self`.
    fn scaled(self, a: Self::Scalar) -> Self;

    /// Vector subtraction, `self + (-rhs)`.
    #[inline]
    fn minus(self, rhs: Self) -> Self {
        self.plus(rhs.negated())
    }

    /// Scalar multiplication with the operands commuted, `self * a`.
    ///
    /// Always identical to [`Vector::scaled`].
    #[inline]
    fn scaled_right(self, a: Self::Scalar) -> Self {
        self.scaled(a)
    }

    #[inline]
    fn plus_assign(&mut self, rhs: Self) {
        *self = self.plus(rhs);
    }

    #[inline]
    fn minus_assign(&mut self, rhs: Self) {
        *self = self.minus(rhs);
    }

    #[inline]
    fn scale_assign(&mut self, a: Self::Scalar) {
        *self = self.scaled_right(a);
    }
}

/// Error returned by the fallible literal constructors when too few scalars are supplied.
///
/// The panicking `from_literal` constructors treat a short sequence as a bug in the caller. This
/// error exists for sequences that come from outside the program (files, user input), where a
/// short sequence is just bad data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityError {
    expected: usize,
    found: usize,
}

impl ArityError {
    pub(crate) fn check(expected: usize, found: usize) -> Result<(), Self> {
        if found < expected {
            Err(Self { expected, found })
        } else {
            Ok(())
        }
    }

    /// The minimum number of scalars the target type needs.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// The number of scalars that were actually supplied.
    pub fn found(&self) -> usize {
        self.found
    }
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected at least {} numbers, got {}",
            self.expected, self.found
        )
    }
}

impl Error for ArityError {}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 1-dimensional vector written by hand, without any of the macros.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Line(f64);

    impl Vector for Line {
        type Scalar = f64;

        fn plus(self, rhs: Self) -> Self {
            Line(self.0 + rhs.0)
        }

        fn negated(self) -> Self {
            Line(-self.0)
        }

        fn scaled(self, a: f64) -> Self {
            Line(a * self.0)
        }
    }

    #[test]
    fn derived_ops() {
        let u = Line(5.0);
        let v = Line(1.5);
        assert_eq!(u.minus(v), Line(3.5));
        assert_eq!(u.minus(v), u.plus(v.negated()));
        assert_eq!(u.scaled_right(2.0), u.scaled(2.0));
    }

    #[test]
    fn in_place_matches_pure() {
        let v = Line(-2.0);

        let mut u = Line(4.0);
        u.plus_assign(v);
        assert_eq!(u, Line(4.0).plus(v));

        let mut u = Line(4.0);
        u.minus_assign(v);
        assert_eq!(u, Line(4.0).minus(v));

        let mut u = Line(4.0);
        u.scale_assign(0.5);
        assert_eq!(u, Line(4.0).scaled(0.5));
    }

    #[test]
    fn arity_error() {
        assert_eq!(ArityError::check(3, 3), Ok(()));
        assert_eq!(ArityError::check(3, 7), Ok(()));

        let err = ArityError::check(4, 2).unwrap_err();
        assert_eq!(err.expected(), 4);
        assert_eq!(err.found(), 2);
        assert_eq!(err.to_string(), "expected at least 4 numbers, got 2");
    }
}
