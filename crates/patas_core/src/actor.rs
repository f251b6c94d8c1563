//! Actor: a named container of components
//!
//! Components are kept in insertion order and looked up by type with
//! [`Actor::get_component`], which returns the first match. Adding a second
//! component of the same type is allowed; lookups never see it.

use crate::{Behavior, Component, ComponentType, ShapeFactory, Surface, Transform};

/// A scene object made of components
#[derive(Clone, Debug)]
pub struct Actor {
    name: String,
    components: Vec<Component>,
    active: bool,
}

impl Actor {
    /// Create an actor with a default [`ShapeFactory`] and [`Transform`]
    pub fn new(name: impl Into<String>) -> Self {
        let mut actor = Self::empty(name);
        actor.add_component(ShapeFactory::new());
        actor.add_component(Transform::default());
        actor
    }

    /// Create an actor with no components
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
            active: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Inactive actors are skipped by the scene's update and render
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Append a component
    ///
    /// Duplicates are kept but hidden from [`Actor::get_component`].
    pub fn add_component<T: ComponentType>(&mut self, component: T) {
        log::trace!("Actor '{}': adding {:?} component", self.name, T::KIND);
        self.components.push(component.into_component());
    }

    /// The first component of type `T`
    pub fn get_component<T: ComponentType>(&self) -> Option<&T> {
        self.components.iter().find_map(T::from_component)
    }

    /// The first component of type `T`, mutably
    pub fn get_component_mut<T: ComponentType>(&mut self) -> Option<&mut T> {
        self.components.iter_mut().find_map(T::from_component_mut)
    }

    pub fn has_component<T: ComponentType>(&self) -> bool {
        self.components.iter().any(|c| c.kind() == T::KIND)
    }

    /// All components in insertion order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Called by the scene before the actor is dropped
    ///
    /// Nothing to release yet; components are dropped with the actor.
    pub fn destroy(&mut self) {}
}

impl Behavior for Actor {
    /// Update every component, then copy the transform onto the shape
    ///
    /// Only `rotation.x` is used as the shape's angle.
    fn update(&mut self, dt: f32) {
        for component in &mut self.components {
            component.update(dt);
        }

        let Some(transform) = self.get_component::<Transform>().copied() else {
            return;
        };
        if let Some(shape) = self.get_component_mut::<ShapeFactory>() {
            shape.set_position(transform.position);
            shape.set_rotation(transform.rotation.x);
            shape.set_scale(transform.scale);
        }
    }

    /// Draw the primitive of every shape component
    fn render(&self, surface: &mut dyn Surface) {
        for component in &self.components {
            component.render(surface);
            if let Component::Shape(factory) = component {
                if let Some(shape) = factory.shape() {
                    surface.draw(shape);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderTarget, ShapeKind, Texture, TextureData};
    use patas_math::Vec2;
    use std::sync::Arc;

    #[test]
    fn test_new_has_default_components() {
        let actor = Actor::new("N");
        assert_eq!(actor.name(), "N");
        assert!(actor.is_active());
        assert!(actor.get_component::<Transform>().is_some());
        assert!(actor.get_component::<ShapeFactory>().is_some());
        assert_eq!(actor.components().len(), 2);
    }

    #[test]
    fn test_missing_component_is_none() {
        let actor = Actor::new("N");
        assert!(actor.get_component::<Texture>().is_none());
        assert!(!actor.has_component::<Texture>());

        let empty = Actor::empty("E");
        assert!(empty.get_component::<Transform>().is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let mut actor = Actor::new("N");
        actor.add_component(Transform::from_position(Vec2::new(9.0, 9.0)));
        assert_eq!(actor.components().len(), 3);
        assert_eq!(
            actor.get_component::<Transform>().map(|t| t.position),
            Some(Vec2::ZERO)
        );
    }

    #[test]
    fn test_add_texture_component() {
        let mut actor = Actor::empty("T");
        let data = Arc::new(TextureData::builtin_default());
        actor.add_component(Texture::from_data("Default", "png", data));
        assert_eq!(actor.get_component::<Texture>().map(|t| t.name()), Some("Default"));
        assert!(actor.has_component::<Texture>());
    }

    #[test]
    fn test_update_syncs_transform_to_shape() {
        let mut actor = Actor::new("Player");
        if let Some(factory) = actor.get_component_mut::<ShapeFactory>() {
            factory.create_shape(ShapeKind::Circle);
        }
        if let Some(t) = actor.get_component_mut::<Transform>() {
            t.set_transform(Vec2::new(200.0, 200.0), Vec2::new(30.0, 99.0), Vec2::new(2.0, 3.0));
        }

        actor.update(0.016);

        let shape = actor.get_component::<ShapeFactory>().and_then(|f| f.shape());
        assert_eq!(shape.map(|s| s.position()), Some(Vec2::new(200.0, 200.0)));
        assert_eq!(shape.map(|s| s.rotation()), Some(30.0));
        assert_eq!(shape.map(|s| s.scale()), Some(Vec2::new(2.0, 3.0)));
    }

    #[test]
    fn test_update_without_shape_does_nothing() {
        let mut actor = Actor::new("Empty");
        actor.update(0.016);
        assert!(actor.get_component::<ShapeFactory>().and_then(|f| f.shape()).is_none());
    }

    #[test]
    fn test_render_draws_each_shape_factory() {
        let mut actor = Actor::new("Twin");
        if let Some(factory) = actor.get_component_mut::<ShapeFactory>() {
            factory.create_shape(ShapeKind::Circle);
        }
        let mut second = ShapeFactory::new();
        second.create_shape(ShapeKind::Rectangle);
        actor.add_component(second);

        let mut target = RenderTarget::new(800, 600);
        actor.render(&mut target);
        assert_eq!(target.draw_count(), 2);
    }

    #[test]
    fn test_render_skips_empty_factory() {
        let actor = Actor::new("Nothing");
        let mut target = RenderTarget::new(800, 600);
        actor.render(&mut target);
        assert_eq!(target.draw_count(), 0);
    }
}
