//! Scalar fields and the vector traits built on top of them.
//!
//! # Overview
//!
//! The crate is organized in two layers:
//!
//! - [`Field`] is the contract a component type has to satisfy: a [`Zero`] and the four
//!   arithmetic operators. Negation is derived as `ZERO - a`.
//! - [`Vector`] is a value that can be added, negated and scaled. Everything else (subtraction,
//!   commuted scaling, in-place forms) is derived from those three. [`Vector2D`], [`Vector3D`] and
//!   [`Vector4D`] refine it with named components and a component-wise constructor, and derive the
//!   arithmetic component-wise.
//!
//! Concrete types *conform* to these traits rather than wrap a common vector type. Several
//! unrelated types can be 2D vectors over the same scalar (a point, a displacement, a size) and
//! still be combined: `u + v` converts `v` into the type of `u` and adds, so the result always has
//! the type of the left operand.
//!
//! The [`impl_vector2d!`], [`impl_vector3d!`] and [`impl_vector4d!`] macros bind a struct's fields
//! to the components and implement the operators.
//!
//! # Non-Goals
//!
//! - No dot or cross products, no normalization, no matrices. This is deliberately only the
//!   component-wise add/subtract/scale surface.
//! - No validation of scalar arithmetic. NaNs and infinities propagate as the scalar type dictates.
//!
//! # Errors
//!
//! The only failure condition is constructing a vector from a scalar sequence that is too short.
//! `from_literal` treats this as a bug and panics; `try_from_literal` returns an [`ArityError`].

mod field;
mod macros;
mod vector;
mod vector2d;
mod vector3d;
mod vector4d;

pub use approx;
pub use field::*;
pub use vector::*;
pub use vector2d::*;
pub use vector3d::*;
pub use vector4d::*;
