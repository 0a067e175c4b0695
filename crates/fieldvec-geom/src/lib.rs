//! Concrete geometry types that conform to the `fieldvec-linalg` vector traits.
//!
//! # Overview
//!
//! - [`Point`], [`Displacement`] and [`Size`] are 2D vectors over [`f64`].
//! - [`Vec3`] and [`Vec4`] are 3D and 4D vectors over [`f32`].
//! - [`Rect`] combines a [`Point`] origin with a [`Size`] and is *not* a vector itself.
//!
//! Every vector type here is a plain `#[repr(C)]` struct with public fields. They implement
//! [`bytemuck::Pod`], so slices of them can be reinterpreted as slices of their scalar type.
//!
//! All arithmetic comes from the traits in `fieldvec-linalg`, which are re-exported here.

mod planar;
mod rect;
mod spatial;

pub use fieldvec_linalg::{Vector, Vector2D, Vector3D, Vector4D};
pub use planar::*;
pub use rect::Rect;
pub use spatial::*;
