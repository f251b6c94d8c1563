//! 2D Transform (position, rotation, scale)

use patas_math::Vec2;
use serde::{Serialize, Deserialize};
use crate::{Behavior, Surface};

/// Position, rotation and scale of an actor
///
/// `rotation` is a two-component field edited as a pair; only `rotation.x`
/// is used as the angle (degrees) when the transform drives a shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: Vec2,
    pub scale: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: Vec2::ZERO,
            scale: Vec2::ONE,
        }
    }
}

impl Transform {
    /// Create a transform from all three fields
    pub fn new(position: Vec2, rotation: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Set position, rotation and scale at once
    pub fn set_transform(&mut self, position: Vec2, rotation: Vec2, scale: Vec2) {
        self.position = position;
        self.rotation = rotation;
        self.scale = scale;
    }

    /// Move toward `target` at `speed` units per second
    ///
    /// Nothing happens once the target is within `range`.
    pub fn seek(&mut self, target: Vec2, speed: f32, dt: f32, range: f32) {
        let direction = target - self.position;
        if direction.magnitude() > range {
            self.position += direction.normalize() * speed * dt;
        }
    }
}

impl Behavior for Transform {
    fn update(&mut self, _dt: f32) {}

    fn render(&self, _surface: &mut dyn Surface) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default() {
        let t = Transform::default();
        assert_eq!(t.position, Vec2::ZERO);
        assert_eq!(t.rotation, Vec2::ZERO);
        assert_eq!(t.scale, Vec2::ONE);
    }

    #[test]
    fn test_set_transform() {
        let mut t = Transform::default();
        t.set_transform(Vec2::new(200.0, 200.0), Vec2::new(45.0, 0.0), Vec2::new(2.0, 3.0));
        assert_eq!(t.position, Vec2::new(200.0, 200.0));
        assert_eq!(t.rotation.x, 45.0);
        assert_eq!(t.scale, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_seek_single_step() {
        let mut t = Transform::default();
        t.seek(Vec2::new(100.0, 0.0), 200.0, 0.1, 10.0);
        assert!(approx_eq(t.position.x, 20.0), "got {:?}", t.position);
        assert!(approx_eq(t.position.y, 0.0));
    }

    #[test]
    fn test_seek_diagonal_keeps_direction() {
        let mut t = Transform::default();
        t.seek(Vec2::new(30.0, 40.0), 10.0, 1.0, 1.0);
        assert!(approx_eq(t.position.x, 6.0));
        assert!(approx_eq(t.position.y, 8.0));
    }

    #[test]
    fn test_seek_within_range_does_not_move() {
        let mut t = Transform::from_position(Vec2::new(95.0, 0.0));
        t.seek(Vec2::new(100.0, 0.0), 200.0, 0.1, 10.0);
        assert_eq!(t.position, Vec2::new(95.0, 0.0));

        // Exactly at the range boundary also stays put
        let mut t = Transform::from_position(Vec2::new(90.0, 0.0));
        t.seek(Vec2::new(100.0, 0.0), 200.0, 0.1, 10.0);
        assert_eq!(t.position, Vec2::new(90.0, 0.0));
    }
}
