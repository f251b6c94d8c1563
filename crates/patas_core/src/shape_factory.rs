//! ShapeFactory component
//!
//! Owns at most one drawable [`Primitive`]. Replacing the shape drops the
//! previous one first, and every setter is a no-op while no shape exists.

use std::sync::Arc;
use patas_math::Vec2;
use serde::{Serialize, Deserialize};
use crate::{Behavior, Color, Primitive, Surface, TextureData};

/// Circle radius used by [`ShapeFactory::create_shape`]
pub const CIRCLE_RADIUS: f32 = 10.0;
/// Rectangle size used by [`ShapeFactory::create_shape`]
pub const RECTANGLE_SIZE: Vec2 = Vec2::new(100.0, 50.0);
/// Triangles are three-point circles of this radius
pub const TRIANGLE_RADIUS: f32 = 50.0;

/// Shapes a [`ShapeFactory`] can build
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Empty,
    Circle,
    Rectangle,
    Triangle,
}

/// Builder and owner of an actor's drawable
#[derive(Clone, Debug, Default)]
pub struct ShapeFactory {
    shape: Option<Primitive>,
    kind: ShapeKind,
}

impl ShapeFactory {
    /// A factory with no shape
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the owned shape with a new one of `kind`
    ///
    /// `ShapeKind::Empty` just drops the current shape and returns `None`.
    pub fn create_shape(&mut self, kind: ShapeKind) -> Option<&mut Primitive> {
        self.shape = None;
        self.kind = kind;
        self.shape = match kind {
            ShapeKind::Empty => None,
            ShapeKind::Circle => Some(Primitive::circle(CIRCLE_RADIUS)),
            ShapeKind::Rectangle => Some(Primitive::rectangle(RECTANGLE_SIZE)),
            ShapeKind::Triangle => Some(Primitive::polygon(TRIANGLE_RADIUS, 3)),
        };
        self.shape.as_mut()
    }

    /// The kind of the owned shape
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn shape(&self) -> Option<&Primitive> {
        self.shape.as_ref()
    }

    pub fn shape_mut(&mut self) -> Option<&mut Primitive> {
        self.shape.as_mut()
    }

    pub fn set_position(&mut self, position: Vec2) {
        if let Some(shape) = self.shape.as_mut() {
            shape.set_position(position);
        }
    }

    /// Set the rotation in degrees
    pub fn set_rotation(&mut self, degrees: f32) {
        if let Some(shape) = self.shape.as_mut() {
            shape.set_rotation(degrees);
        }
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        if let Some(shape) = self.shape.as_mut() {
            shape.set_scale(scale);
        }
    }

    pub fn set_fill_color(&mut self, color: Color) {
        if let Some(shape) = self.shape.as_mut() {
            shape.set_fill_color(color);
        }
    }

    pub fn set_texture(&mut self, texture: Option<Arc<TextureData>>) {
        if let Some(shape) = self.shape.as_mut() {
            shape.set_texture(texture);
        }
    }
}

impl Behavior for ShapeFactory {
    fn update(&mut self, _dt: f32) {}

    fn render(&self, _surface: &mut dyn Surface) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Geometry;

    #[test]
    fn test_new_is_empty() {
        let factory = ShapeFactory::new();
        assert!(factory.shape().is_none());
        assert_eq!(factory.kind(), ShapeKind::Empty);
    }

    #[test]
    fn test_create_circle() {
        let mut factory = ShapeFactory::new();
        let shape = factory.create_shape(ShapeKind::Circle).map(|s| s.geometry());
        assert_eq!(
            shape,
            Some(Geometry::Circle { radius: 10.0, point_count: 30 })
        );
    }

    #[test]
    fn test_replace_circle_with_rectangle() {
        let mut factory = ShapeFactory::new();
        factory.create_shape(ShapeKind::Circle);
        factory.create_shape(ShapeKind::Rectangle);
        assert_eq!(factory.kind(), ShapeKind::Rectangle);
        assert_eq!(
            factory.shape().map(|s| s.geometry()),
            Some(Geometry::Rectangle { size: Vec2::new(100.0, 50.0) })
        );
    }

    #[test]
    fn test_triangle_is_three_point_circle() {
        let mut factory = ShapeFactory::new();
        factory.create_shape(ShapeKind::Triangle);
        let shape = factory.shape().map(|s| (s.geometry(), s.point_count()));
        assert_eq!(
            shape,
            Some((Geometry::Circle { radius: 50.0, point_count: 3 }, 3))
        );
    }

    #[test]
    fn test_replacement_drops_previous_texture() {
        let texture = Arc::new(TextureData::builtin_default());
        let mut factory = ShapeFactory::new();
        factory.create_shape(ShapeKind::Circle);
        factory.set_texture(Some(Arc::clone(&texture)));
        assert_eq!(Arc::strong_count(&texture), 2);

        factory.create_shape(ShapeKind::Rectangle);
        assert_eq!(Arc::strong_count(&texture), 1);
        assert!(factory.shape().and_then(|s| s.texture()).is_none());
    }

    #[test]
    fn test_setters_without_shape_are_noops() {
        let mut factory = ShapeFactory::new();
        factory.set_position(Vec2::new(1.0, 2.0));
        factory.set_rotation(45.0);
        factory.set_scale(Vec2::new(3.0, 3.0));
        factory.set_fill_color(Color::RED);
        factory.set_texture(None);
        assert!(factory.shape().is_none());
    }

    #[test]
    fn test_setters_reach_shape() {
        let mut factory = ShapeFactory::new();
        factory.create_shape(ShapeKind::Rectangle);
        factory.set_position(Vec2::new(5.0, 6.0));
        factory.set_rotation(90.0);
        factory.set_scale(Vec2::new(11.0, 12.0));
        factory.set_fill_color(Color::BLUE);

        let shape = factory.shape();
        assert_eq!(shape.map(|s| s.position()), Some(Vec2::new(5.0, 6.0)));
        assert_eq!(shape.map(|s| s.rotation()), Some(90.0));
        assert_eq!(shape.map(|s| s.scale()), Some(Vec2::new(11.0, 12.0)));
        assert_eq!(shape.map(|s| s.fill_color()), Some(Color::BLUE));
    }

    #[test]
    fn test_create_empty_clears() {
        let mut factory = ShapeFactory::new();
        factory.create_shape(ShapeKind::Circle);
        assert!(factory.create_shape(ShapeKind::Empty).is_none());
        assert!(factory.shape().is_none());
    }
}
