//! Axis-aligned rectangles.

use fieldvec_linalg::Vector2D;

use crate::{Point, Size};

/// An axis-aligned rectangle described by an origin point and a size.
///
/// The origin is the corner with the smallest coordinates as long as the size is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

unsafe impl bytemuck::Zeroable for Rect {}
unsafe impl bytemuck::Pod for Rect {}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Creates a rectangle from `[x, y, width, height]`.
    ///
    /// Elements past the fourth are ignored.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 4 elements are passed.
    #[track_caller]
    pub fn from_literal(elements: &[f64]) -> Self {
        assert!(elements.len() >= 4, "Rect needs: x, y, width, height.");
        Self::new(elements[0], elements[1], elements[2], elements[3])
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.origin.x.min(self.origin.x + self.size.width)
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.origin.y.min(self.origin.y + self.size.height)
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.origin.x.max(self.origin.x + self.size.width)
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.origin.y.max(self.origin.y + self.size.height)
    }

    #[inline]
    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    #[inline]
    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    /// Returns the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::from_literal(&[self.mid_x(), self.mid_y()])
    }

    /// Moves the rectangle so that its center ends up at `center`. The size is unchanged.
    pub fn set_center(&mut self, center: Point) {
        let offset = center - self.center();
        self.origin += offset;
    }

    /// Returns a copy of `self` moved so that it is centered on `center`.
    #[must_use]
    pub fn with_center(mut self, center: Point) -> Self {
        self.set_center(center);
        self
    }
}

impl From<[f64; 4]> for Rect {
    #[inline]
    fn from(elements: [f64; 4]) -> Self {
        Self::from_literal(&elements)
    }
}

#[cfg(test)]
mod tests {
    use fieldvec_linalg::approx::assert_relative_eq;

    use super::*;

    #[test]
    fn literal() {
        let r = Rect::from([10.0, 10.0, 40.0, 30.0]);
        assert_eq!(r.origin, Point::new(10.0, 10.0));
        assert_eq!(r.size, Size::new(40.0, 30.0));
        assert_eq!(
            Rect::from_literal(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            Rect::new(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    #[should_panic(expected = "Rect needs: x, y, width, height.")]
    fn short_literal() {
        let _ = Rect::from_literal(&[0.0, 0.0, 1.0]);
    }

    #[test]
    fn extents() {
        let r = Rect::new(10.0, 10.0, 40.0, 30.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.max_x(), 50.0);
        assert_eq!(r.min_y(), 10.0);
        assert_eq!(r.max_y(), 40.0);
        assert_eq!(r.center(), Point::new(30.0, 25.0));

        let flipped = Rect::new(10.0, 10.0, -4.0, -2.0);
        assert_eq!(flipped.min_x(), 6.0);
        assert_eq!(flipped.max_y(), 10.0);
        assert_eq!(flipped.center(), Point::new(8.0, 9.0));
    }

    #[test]
    fn recenter() {
        let mut r = Rect::new(10.0, 10.0, 40.0, 30.0);
        r.set_center(Point::new(10.0, 20.0));
        assert_eq!(r.center(), Point::new(10.0, 20.0));
        assert_eq!(r.origin, Point::new(-10.0, 5.0));
        assert_eq!(r.size, Size::new(40.0, 30.0));

        let moved = Rect::new(0.1, 0.2, 0.3, 0.7).with_center(Point::new(1.0, 1.0));
        assert_relative_eq!(moved.center(), Point::new(1.0, 1.0));
    }
}
