//! Drawable primitives
//!
//! A [`Primitive`] is the geometric shape an actor hands to the window for
//! drawing: circle-like polygons and rectangles, each with a position, a
//! rotation in degrees, a scale, a fill colour and an optional texture.
//!
//! Local geometry follows the usual 2D window convention: the local origin
//! is the top-left corner of the shape's bounding box, and a circle of
//! radius r is centred at (r, r).

use std::sync::Arc;
use patas_math::{scalar, Vec2};
use serde::{Serialize, Deserialize};
use crate::texture::TextureData;

/// Number of outline points used for a circle unless told otherwise
pub const DEFAULT_CIRCLE_POINTS: usize = 30;

/// An RGBA colour with 8 bits per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Create a colour from all four channels
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

/// Shape of a primitive in local space
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    /// Regular polygon approximating a circle; 3 points make a triangle
    Circle { radius: f32, point_count: usize },
    /// Axis-aligned rectangle with its top-left corner at the local origin
    Rectangle { size: Vec2 },
}

/// A drawable primitive
#[derive(Clone, Debug)]
pub struct Primitive {
    geometry: Geometry,
    position: Vec2,
    /// Rotation in degrees
    rotation: f32,
    scale: Vec2,
    fill_color: Color,
    texture: Option<Arc<TextureData>>,
}

impl Primitive {
    fn with_geometry(geometry: Geometry) -> Self {
        Self {
            geometry,
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            fill_color: Color::WHITE,
            texture: None,
        }
    }

    /// A circle with [`DEFAULT_CIRCLE_POINTS`] outline points
    pub fn circle(radius: f32) -> Self {
        Self::polygon(radius, DEFAULT_CIRCLE_POINTS)
    }

    /// A regular polygon inscribed in a circle of `radius`
    pub fn polygon(radius: f32, point_count: usize) -> Self {
        Self::with_geometry(Geometry::Circle { radius, point_count })
    }

    /// A rectangle of the given size
    pub fn rectangle(size: Vec2) -> Self {
        Self::with_geometry(Geometry::Rectangle { size })
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Set the rotation in degrees
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn texture(&self) -> Option<&Arc<TextureData>> {
        self.texture.as_ref()
    }

    /// Attach a texture, or detach it with `None`
    pub fn set_texture(&mut self, texture: Option<Arc<TextureData>>) {
        self.texture = texture;
    }

    /// Number of outline points
    pub fn point_count(&self) -> usize {
        match self.geometry {
            Geometry::Circle { point_count, .. } => point_count,
            Geometry::Rectangle { .. } => 4,
        }
    }

    /// Outline points in local space
    pub fn local_points(&self) -> Vec<Vec2> {
        match self.geometry {
            Geometry::Circle { radius, point_count } => (0..point_count)
                .map(|i| {
                    // First point sits at the top of the circle
                    let angle = (i as f32) * 2.0 * scalar::PI / (point_count as f32) - scalar::PI / 2.0;
                    Vec2::new(
                        radius + radius * scalar::cos(angle),
                        radius + radius * scalar::sin(angle),
                    )
                })
                .collect(),
            Geometry::Rectangle { size } => vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(size.x, 0.0),
                Vec2::new(size.x, size.y),
                Vec2::new(0.0, size.y),
            ],
        }
    }

    /// Outline points in world space
    ///
    /// Applies scale, then rotation, then translation.
    pub fn points(&self) -> Vec<Vec2> {
        let radians = scalar::to_radians(self.rotation);
        let (sin_r, cos_r) = (scalar::sin(radians), scalar::cos(radians));
        self.local_points()
            .into_iter()
            .map(|p| {
                let scaled = Vec2::new(p.x * self.scale.x, p.y * self.scale.y);
                let rotated = Vec2::new(
                    scaled.x * cos_r - scaled.y * sin_r,
                    scaled.x * sin_r + scaled.y * cos_r,
                );
                rotated + self.position
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_defaults() {
        let p = Primitive::circle(10.0);
        assert_eq!(p.position(), Vec2::ZERO);
        assert_eq!(p.scale(), Vec2::ONE);
        assert_eq!(p.rotation(), 0.0);
        assert_eq!(p.fill_color(), Color::WHITE);
        assert!(p.texture().is_none());
        assert_eq!(p.point_count(), DEFAULT_CIRCLE_POINTS);
    }

    #[test]
    fn test_triangle_points() {
        let p = Primitive::polygon(50.0, 3);
        let pts = p.local_points();
        assert_eq!(pts.len(), 3);
        // Apex at the top-centre of the bounding box
        assert!(vec_approx_eq(pts[0], Vec2::new(50.0, 0.0)), "got {:?}", pts[0]);
    }

    #[test]
    fn test_rectangle_world_points() {
        let mut p = Primitive::rectangle(Vec2::new(100.0, 50.0));
        p.set_position(Vec2::new(10.0, 20.0));
        p.set_scale(Vec2::new(2.0, 1.0));
        let pts = p.points();
        assert!(vec_approx_eq(pts[0], Vec2::new(10.0, 20.0)));
        assert!(vec_approx_eq(pts[2], Vec2::new(210.0, 70.0)));
    }

    #[test]
    fn test_rotation_in_degrees() {
        let mut p = Primitive::rectangle(Vec2::new(10.0, 5.0));
        p.set_rotation(90.0);
        let pts = p.points();
        // (10, 0) rotated a quarter turn lands on (0, 10)
        assert!(vec_approx_eq(pts[1], Vec2::new(0.0, 10.0)), "got {:?}", pts[1]);
    }

    #[test]
    fn test_points_with_overflowing_rotation_returns() {
        let mut p = Primitive::rectangle(Vec2::new(10.0, 5.0));
        p.set_rotation(3.0e38);
        let pts = p.points();
        assert_eq!(pts.len(), 4);
        assert!(pts.iter().all(|v| v.x.is_nan() && v.y.is_nan()));
    }
}
