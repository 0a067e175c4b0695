//! Macros that turn a plain struct into a vector.
//!
//! Each macro takes the struct, the names of the fields backing each component (in `x`, `y`, `z`,
//! `w` order), and the scalar type. It implements [`Vector`][crate::Vector] component-wise, the
//! matching `VectorND` trait, and the operator surface:
//!
//! | Expression         | Meaning                                                   |
//! |--------------------|-----------------------------------------------------------|
//! | `u + v`            | `v` may be any vector of the same arity and scalar; the result has the type of `u` |
//! | `u - v`, `-u`      | same type only                                            |
//! | `u * a`, `a * u`   | scaling by a scalar                                       |
//! | `+=`, `-=`, `*=`   | in-place forms of the above                               |
//!
//! Additionally `From<[Scalar; N]>` and the reverse conversion into an array are implemented.
//! Float-backed types can opt into the comparisons of the [`approx`] crate with
//! [`impl_approx_eq!`][crate::impl_approx_eq].

/// Implements [`Vector`][crate::Vector], [`Vector2D`][crate::Vector2D] and the vector operators
/// for a struct with two scalar fields.
///
/// # Examples
///
/// ```
/// # use fieldvec_linalg::*;
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Offset {
///     dx: f32,
///     dy: f32,
/// }
/// impl_vector2d!(Offset { dx, dy }: f32);
///
/// let o = Offset { dx: 1.0, dy: -2.0 };
/// assert_eq!(o + o, Offset { dx: 2.0, dy: -4.0 });
/// assert_eq!(o.y(), -2.0);
/// ```
#[macro_export]
macro_rules! impl_vector2d {
    ($ty:ident { $x:ident, $y:ident }: $scalar:ty) => {
        impl $crate::Vector for $ty {
            type Scalar = $scalar;

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                <Self as $crate::Vector2D>::add_components(self, rhs)
            }

            #[inline]
            fn negated(self) -> Self {
                <Self as $crate::Vector2D>::neg_components(self)
            }

            #[inline]
            fn scaled(self, a: $scalar) -> Self {
                <Self as $crate::Vector2D>::scale_components(self, a)
            }
        }

        impl $crate::Vector2D for $ty {
            #[inline]
            fn x(&self) -> $scalar {
                self.$x
            }

            #[inline]
            fn y(&self) -> $scalar {
                self.$y
            }

            #[inline]
            fn x_mut(&mut self) -> &mut $scalar {
                &mut self.$x
            }

            #[inline]
            fn y_mut(&mut self) -> &mut $scalar {
                &mut self.$y
            }

            #[inline]
            fn from_xy(x: $scalar, y: $scalar) -> Self {
                Self { $x: x, $y: y }
            }
        }

        $crate::__impl_vector_ops!($ty: $scalar, Vector2D, 2);
    };
}

/// Implements [`Vector`][crate::Vector], [`Vector3D`][crate::Vector3D] and the vector operators
/// for a struct with three scalar fields.
#[macro_export]
macro_rules! impl_vector3d {
    ($ty:ident { $x:ident, $y:ident, $z:ident }: $scalar:ty) => {
        impl $crate::Vector for $ty {
            type Scalar = $scalar;

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                <Self as $crate::Vector3D>::add_components(self, rhs)
            }

            #[inline]
            fn negated(self) -> Self {
                <Self as $crate::Vector3D>::neg_components(self)
            }

            #[inline]
            fn scaled(self, a: $scalar) -> Self {
                <Self as $crate::Vector3D>::scale_components(self, a)
            }
        }

        impl $crate::Vector3D for $ty {
            #[inline]
            fn x(&self) -> $scalar {
                self.$x
            }

            #[inline]
            fn y(&self) -> $scalar {
                self.$y
            }

            #[inline]
            fn z(&self) -> $scalar {
                self.$z
            }

            #[inline]
            fn x_mut(&mut self) -> &mut $scalar {
                &mut self.$x
            }

            #[inline]
            fn y_mut(&mut self) -> &mut $scalar {
                &mut self.$y
            }

            #[inline]
            fn z_mut(&mut self) -> &mut $scalar {
                &mut self.$z
            }

            #[inline]
            fn from_xyz(x: $scalar, y: $scalar, z: $scalar) -> Self {
                Self {
                    $x: x,
                    $y: y,
                    $z: z,
                }
            }
        }

        $crate::__impl_vector_ops!($ty: $scalar, Vector3D, 3);
    };
}

/// Implements [`Vector`][crate::Vector], [`Vector4D`][crate::Vector4D] and the vector operators
/// for a struct with four scalar fields.
#[macro_export]
macro_rules! impl_vector4d {
    ($ty:ident { $x:ident, $y:ident, $z:ident, $w:ident }: $scalar:ty) => {
        impl $crate::Vector for $ty {
            type Scalar = $scalar;

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                <Self as $crate::Vector4D>::add_components(self, rhs)
            }

            #[inline]
            fn negated(self) -> Self {
                <Self as $crate::Vector4D>::neg_components(self)
            }

            #[inline]
            fn scaled(self, a: $scalar) -> Self {
                <Self as $crate::Vector4D>::scale_components(self, a)
            }
        }

        impl $crate::Vector4D for $ty {
            #[inline]
            fn x(&self) -> $scalar {
                self.$x
            }

            #[inline]
            fn y(&self) -> $scalar {
                self.$y
            }

            #[inline]
            fn z(&self) -> $scalar {
                self.$z
            }

            #[inline]
            fn w(&self) -> $scalar {
                self.$w
            }

            #[inline]
            fn x_mut(&mut self) -> &mut $scalar {
                &mut self.$x
            }

            #[inline]
            fn y_mut(&mut self) -> &mut $scalar {
                &mut self.$y
            }

            #[inline]
            fn z_mut(&mut self) -> &mut $scalar {
                &mut self.$z
            }

            #[inline]
            fn w_mut(&mut self) -> &mut $scalar {
                &mut self.$w
            }

            #[inline]
            fn from_xyzw(x: $scalar, y: $scalar, z: $scalar, w: $scalar) -> Self {
                Self {
                    $x: x,
                    $y: y,
                    $z: z,
                    $w: w,
                }
            }
        }

        $crate::__impl_vector_ops!($ty: $scalar, Vector4D, 4);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_vector_ops {
    ($ty:ident: $scalar:ty, $nd:ident, $n:literal) => {
        // A single generic impl covers both same-type and mixed-type addition: for `V = Self` the
        // conversion is a plain copy.
        impl<V> ::core::ops::Add<V> for $ty
        where
            V: $crate::$nd<Scalar = $scalar>,
        {
            type Output = $ty;

            #[inline]
            fn add(self, rhs: V) -> $ty {
                <$ty as $crate::$nd>::add_mixed(self, rhs)
            }
        }

        impl ::core::ops::Neg for $ty {
            type Output = $ty;

            #[inline]
            fn neg(self) -> $ty {
                $crate::Vector::negated(self)
            }
        }

        impl ::core::ops::Sub for $ty {
            type Output = $ty;

            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $crate::Vector::minus(self, rhs)
            }
        }

        impl ::core::ops::Mul<$scalar> for $ty {
            type Output = $ty;

            #[inline]
            fn mul(self, a: $scalar) -> $ty {
                $crate::Vector::scaled_right(self, a)
            }
        }

        impl ::core::ops::Mul<$ty> for $scalar {
            type Output = $ty;

            #[inline]
            fn mul(self, v: $ty) -> $ty {
                $crate::Vector::scaled(v, self)
            }
        }

        impl ::core::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $ty) {
                $crate::Vector::plus_assign(self, rhs);
            }
        }

        impl ::core::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: $ty) {
                $crate::Vector::minus_assign(self, rhs);
            }
        }

        impl ::core::ops::MulAssign<$scalar> for $ty {
            #[inline]
            fn mul_assign(&mut self, a: $scalar) {
                $crate::Vector::scale_assign(self, a);
            }
        }

        impl ::core::convert::From<[$scalar; $n]> for $ty {
            #[inline]
            fn from(elements: [$scalar; $n]) -> Self {
                <$ty as $crate::$nd>::from_literal(&elements)
            }
        }

        impl ::core::convert::From<$ty> for [$scalar; $n] {
            #[inline]
            fn from(v: $ty) -> Self {
                <$ty as $crate::$nd>::into_array(v)
            }
        }
    };
}

/// Implements [`approx::AbsDiffEq`] and [`approx::RelativeEq`] for vector types.
///
/// Takes the `VectorND` trait the types implement followed by the types themselves. Two vectors
/// compare equal if every pair of components does; tolerances and defaults are those of the scalar
/// type.
///
/// # Examples
///
/// ```
/// # use fieldvec_linalg::*;
/// use fieldvec_linalg::approx::assert_relative_eq;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Pos {
///     x: f64,
///     y: f64,
/// }
/// impl_vector2d!(Pos { x, y }: f64);
/// impl_approx_eq!(Vector2D: Pos);
///
/// let p = Pos { x: 0.1, y: 0.2 } + Pos { x: 0.2, y: 0.1 };
/// assert_relative_eq!(p, Pos { x: 0.3, y: 0.3 });
/// ```
#[macro_export]
macro_rules! impl_approx_eq {
    ($nd:ident: $($ty:ident),+ $(,)?) => {
        $(
            impl $crate::approx::AbsDiffEq for $ty {
                type Epsilon =
                    <<$ty as $crate::Vector>::Scalar as $crate::approx::AbsDiffEq>::Epsilon;

                fn default_epsilon() -> Self::Epsilon {
                    <<$ty as $crate::Vector>::Scalar as $crate::approx::AbsDiffEq>::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    let l = <$ty as $crate::$nd>::into_array(*self);
                    let r = <$ty as $crate::$nd>::into_array(*other);
                    l.iter()
                        .zip(&r)
                        .all(|(a, b)| $crate::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
                }
            }

            impl $crate::approx::RelativeEq for $ty {
                fn default_max_relative() -> Self::Epsilon {
                    <<$ty as $crate::Vector>::Scalar as $crate::approx::RelativeEq>::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: Self::Epsilon,
                    max_relative: Self::Epsilon,
                ) -> bool {
                    let l = <$ty as $crate::$nd>::into_array(*self);
                    let r = <$ty as $crate::$nd>::into_array(*other);
                    l.iter().zip(&r).all(|(a, b)| {
                        $crate::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative)
                    })
                }
            }
        )+
    };
}
