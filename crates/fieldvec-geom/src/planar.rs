//! 2D adapters over [`f64`].
//!
//! [`Point`], [`Displacement`] and [`Size`] are unrelated types that happen to share a shape.
//! Each is a [`Vector2D`][crate::Vector2D] in its own right, so any two of them can be added; the result takes the
//! type of the left operand.
//!
//! ```
//! # use fieldvec_geom::*;
//! let p = Point::new(1.0, 1.0);
//! let d = Displacement::new(0.5, -2.0);
//! assert_eq!(p + d, Point::new(1.5, -1.0));
//! assert_eq!(d + p, Displacement::new(1.5, -1.0));
//! ```

use fieldvec_linalg::{impl_approx_eq, impl_vector2d};

/// A location in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An offset between two locations in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Displacement {
    pub dx: f64,
    pub dy: f64,
}

/// A width and a height.
///
/// Negative dimensions are allowed, as is the case with every other vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl_vector2d!(Point { x, y }: f64);
impl_vector2d!(Displacement { dx, dy }: f64);
impl_vector2d!(Size { width, height }: f64);
impl_approx_eq!(Vector2D: Point, Displacement, Size);

unsafe impl bytemuck::Zeroable for Point {}
unsafe impl bytemuck::Pod for Point {}
unsafe impl bytemuck::Zeroable for Displacement {}
unsafe impl bytemuck::Pod for Displacement {}
unsafe impl bytemuck::Zeroable for Size {}
unsafe impl bytemuck::Pod for Size {}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Displacement {
    /// The empty displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
