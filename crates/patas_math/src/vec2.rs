//! 2D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use crate::scalar;

/// 2D Vector with x, y components
///
/// Used for positions, scales and the two-component rotation field of a
/// transform.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new Vec2
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a Vec2 with both components set to `v`
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Length (magnitude), computed with [`scalar::sqrt`]
    #[inline]
    pub fn magnitude(self) -> f32 {
        scalar::sqrt(self.dot(self))
    }

    /// Unit vector in the same direction, or zero if the magnitude is zero
    #[inline]
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / mag, self.y / mag)
    }

    /// Components as an array
    #[inline]
    pub fn as_array(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Mutable view of both components, for editors that drag them in place
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 2] {
        bytemuck::cast_mut(self)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

// Operator overloads

impl std::ops::Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl std::ops::MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Division by zero yields the zero vector
impl std::ops::Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        if scalar == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl std::ops::DivAssign<f32> for Vec2 {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(Vec2::default(), Vec2::ZERO);
    }

    #[test]
    fn test_magnitude() {
        assert!((Vec2::new(3.0, 4.0).magnitude() - 5.0).abs() < 0.0001);
        assert_eq!(Vec2::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vec2::new(0.0, -7.0).normalize();
        assert!(n.x.abs() < 0.0001);
        assert!((n.y + 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_normalized_has_unit_length() {
        let samples = [
            Vec2::new(1.0, 1.0),
            Vec2::new(-3.5, 0.25),
            Vec2::new(720.0, -350.0),
            Vec2::new(0.001, 0.002),
        ];
        for v in samples {
            let len = v.normalize().magnitude();
            assert!((len - 1.0).abs() < 0.001, "{:?} normalized to length {}", v, len);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(5.0, 7.0);
        assert_eq!(a + b, Vec2::new(6.0, 9.0));
        assert_eq!(b - a, Vec2::new(4.0, 5.0));
        assert_eq!(a * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(b / 5.0, Vec2::new(1.0, 1.4));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(Vec2::new(3.0, 4.0) / 0.0, Vec2::ZERO);

        let mut v = Vec2::new(3.0, 4.0);
        v /= 0.0;
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_assign_ops() {
        let mut v = Vec2::new(1.0, 1.0);
        v += Vec2::new(1.0, 2.0);
        assert_eq!(v, Vec2::new(2.0, 3.0));
        v -= Vec2::new(0.5, 0.5);
        assert_eq!(v, Vec2::new(1.5, 2.5));
        v *= 2.0;
        assert_eq!(v, Vec2::new(3.0, 5.0));
        v /= 2.0;
        assert_eq!(v, Vec2::new(1.5, 2.5));
    }

    #[test]
    fn test_as_array_mut_writes_through() {
        let mut v = Vec2::new(1.0, 2.0);
        v.as_array_mut()[1] = 9.0;
        assert_eq!(v, Vec2::new(1.0, 9.0));
    }
}
