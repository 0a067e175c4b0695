use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

macro_rules! zero_impls {
    ($($types:ty => $zero:expr),+ $(,)?) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
        )+
    };
}
zero_impls!(
    f32 => 0.0,
    f64 => 0.0,
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
);

/// Element type of a vector: anything with a zero and the four arithmetic operations.
///
/// No rounding, saturation or overflow policy is layered on top of the operators. Whatever the
/// concrete type does (NaN propagation for floats, panicking on division by zero for integers) is
/// what vectors built on top of it will do.
///
/// This trait is implemented automatically for every type that satisfies its bounds.
pub trait Field:
    Zero
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
    /// Returns the additive inverse of `self`, computed as `ZERO - self`.
    ///
    /// Note that for floating-point types this maps `0.0` to `0.0`, not to `-0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldvec_linalg::*;
    /// assert_eq!(2.5f32.additive_inverse(), -2.5);
    /// assert_eq!(7i32.additive_inverse(), -7);
    /// ```
    #[inline]
    fn additive_inverse(self) -> Self {
        Self::ZERO - self
    }
}
impl<T> Field for T where
    T: Zero
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_identity() {
        assert_eq!(3.25f64 + f64::ZERO, 3.25);
        assert_eq!(-9i64 + i64::ZERO, -9);
    }

    #[test]
    fn inverse() {
        assert_eq!(1.5f32.additive_inverse(), -1.5);
        assert_eq!((-4i16).additive_inverse(), 4);
        assert_eq!(0.0f64.additive_inverse(), 0.0);
        assert!(0.0f64.additive_inverse().is_sign_positive());
    }

    #[test]
    fn inherits_float_semantics() {
        assert!(f32::NAN.additive_inverse().is_nan());
        assert_eq!(f64::INFINITY.additive_inverse(), f64::NEG_INFINITY);
        assert_eq!(1.0f32 / f32::ZERO, f32::INFINITY);
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero() {
        let zero = std::hint::black_box(i32::ZERO);
        let _ = 1 / zero;
    }
}
