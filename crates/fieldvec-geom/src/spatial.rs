//! 3D and 4D adapters over [`f32`].

use fieldvec_linalg::{impl_approx_eq, impl_vector3d, impl_vector4d};

/// A vector or position in 3D space.
///
/// X points to the right, Y points up, and Z points out of the screen towards the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4-component vector.
///
/// Used both for homogeneous coordinates and for axis-angle rotations, where `x`, `y`, `z` hold
/// the rotation axis and `w` the angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_vector3d!(Vec3 { x, y, z }: f32);
impl_vector4d!(Vec4 { x, y, z, w }: f32);
impl_approx_eq!(Vector3D: Vec3);
impl_approx_eq!(Vector4D: Vec4);

unsafe impl bytemuck::Zeroable for Vec3 {}
unsafe impl bytemuck::Pod for Vec3 {}
unsafe impl bytemuck::Zeroable for Vec4 {}
unsafe impl bytemuck::Pod for Vec4 {}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Appends a `w` component.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Removes the `w` component.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use fieldvec_linalg::approx::assert_abs_diff_eq;
    use fieldvec_linalg::{Vector3D, Vector4D};

    use super::*;

    #[test]
    fn worked_example() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let q = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(p + q, Vec3::new(1.0, 3.0, 3.0));
        assert_eq!(2.0 * p, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-p, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(p - q, Vec3::new(1.0, 1.0, 3.0));
    }

    #[test]
    fn identity() {
        let v = Vec4::new(0.5, -1.0, 8.0, 1.0);
        assert_eq!(v + Vec4::zero(), v);
        assert_eq!(v - v, Vec4::zero());
        assert_eq!(Vec3::zero(), Vec3::ZERO);
    }

    #[test]
    fn in_place() {
        let mut v = Vec3::X;
        v += Vec3::Y;
        v -= Vec3::Z;
        v *= 3.0;
        assert_eq!(v, Vec3::new(3.0, 3.0, -3.0));
    }

    #[test]
    fn literal_uses_leading_elements() {
        assert_eq!(
            Vec3::from_literal(&[7.0, 8.0, 9.0, 10.0]),
            Vec3::new(7.0, 8.0, 9.0)
        );
        assert_eq!(
            Vec4::from([1.0, 2.0, 3.0, 4.0]),
            Vec4::new(1.0, 2.0, 3.0, 4.0)
        );
        assert_eq!(
            Vec4::try_from_literal(&[1.0, 2.0, 3.0])
                .unwrap_err()
                .expected(),
            4
        );
    }

    #[test]
    #[should_panic(expected = "Vector3D needs at least 3 numbers.")]
    fn short_literal_3d() {
        let _ = Vec3::from_literal(&[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "Vector4D needs at least 4 numbers.")]
    fn short_literal_4d() {
        let _ = Vec4::from_literal(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn extend_truncate() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.extend(4.0).truncate(), v);
        assert_eq!(v.extend(0.0).w(), 0.0);
    }

    #[test]
    fn float_semantics_propagate() {
        let v = Vec3::new(f32::NAN, f32::INFINITY, 1.0);
        let sum = v + Vec3::new(0.0, f32::NEG_INFINITY, 1.0);
        assert!(sum.x.is_nan());
        assert!(sum.y.is_nan());
        assert_eq!(sum.z, 2.0);
    }

    #[test]
    fn approx() {
        let v = Vec3::new(0.1, 0.2, 0.3) * 3.0;
        assert_abs_diff_eq!(v, Vec3::new(0.3, 0.6, 0.9), epsilon = 1e-6);
    }
}
