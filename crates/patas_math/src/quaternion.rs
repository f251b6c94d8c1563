//! Quaternion for representing 3D rotations
//!
//! A quaternion q = w + xi + yj + zk. Unit quaternions rotate vectors through
//! the sandwich product q * v * q⁻¹.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use crate::{scalar, Vec3};

/// Quaternion with scalar part `w` and vector part (x, y, z)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    /// Scalar component
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Quaternion {
    /// All components zero
    pub const ZERO: Self = Self { w: 0.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Identity rotation
    pub const IDENTITY: Self = Self { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Create a new quaternion
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Create a rotation of `angle` radians around `axis`
    ///
    /// q = cos(θ/2) + sin(θ/2) * axis. The axis is used as given, so pass a
    /// unit vector to get a unit quaternion.
    pub fn from_axis_angle(angle: f32, axis: Vec3) -> Self {
        let half = angle / 2.0;
        let sin_h = scalar::sin(half);
        Self {
            w: scalar::cos(half),
            x: axis.x * sin_h,
            y: axis.y * sin_h,
            z: axis.z * sin_h,
        }
    }

    /// Compute the squared magnitude
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Compute the magnitude
    #[inline]
    pub fn magnitude(&self) -> f32 {
        scalar::sqrt(self.magnitude_squared())
    }

    /// Normalize to unit magnitude, or zero if the magnitude is zero
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.w / mag, self.x / mag, self.y / mag, self.z / mag)
    }

    /// Conjugate: negates the vector part
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Multiplicative inverse: conjugate / |q|²
    ///
    /// Returns the zero quaternion when |q|² is zero.
    pub fn inverse(&self) -> Self {
        let mag_squared = self.magnitude_squared();
        if mag_squared == 0.0 {
            return Self::ZERO;
        }
        self.conjugate() * (1.0 / mag_squared)
    }

    /// Rotate a vector with the sandwich product q * v * q⁻¹
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let qv = Self::new(0.0, v.x, v.y, v.z);
        let result = *self * qv * self.inverse();
        Vec3::new(result.x, result.y, result.z)
    }

    /// Components as an array in (w, x, y, z) order
    #[inline]
    pub fn as_array(&self) -> [f32; 4] {
        [self.w, self.x, self.y, self.z]
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.w + other.w,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.w - other.w,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

impl std::ops::Mul<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.w * scalar,
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

/// Hamilton product
impl std::ops::Mul for Quaternion {
    type Output = Self;
    fn mul(self, o: Self) -> Self {
        Self::new(
            self.w * o.w - self.x * o.x - self.y * o.y - self.z * o.z,
            self.w * o.x + self.x * o.w + self.y * o.z - self.z * o.y,
            self.w * o.y - self.x * o.z + self.y * o.w + self.z * o.x,
            self.w * o.z + self.x * o.y - self.y * o.x + self.z * o.w,
        )
    }
}
