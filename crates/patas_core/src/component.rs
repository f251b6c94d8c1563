//! Component model
//!
//! Every component implements [`Behavior`] (per-frame update and render).
//! Actors store components as the closed [`Component`] enum; typed lookup
//! goes through [`ComponentType`], which downcasts a `Component` to one
//! concrete variant.

use serde::{Serialize, Deserialize};
use crate::{ShapeFactory, Surface, Texture, Transform};

/// Kinds of component the engine knows about
///
/// Only `Transform`, `Shape` and `Texture` have an implementation; the other
/// kinds are reserved identifiers.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    None = 0,
    Transform = 1,
    Sprite = 2,
    Renderer = 3,
    Physics = 4,
    AudioSource = 5,
    Shape = 6,
    Texture = 7,
}

/// Per-frame contract shared by components and actors
pub trait Behavior {
    /// Advance by `dt` seconds
    fn update(&mut self, dt: f32);

    /// Draw onto `surface`
    fn render(&self, surface: &mut dyn Surface);
}

/// A component attached to an actor
#[derive(Clone, Debug)]
pub enum Component {
    Transform(Transform),
    Shape(ShapeFactory),
    Texture(Texture),
}

impl Component {
    /// The kind tag of this component
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Transform(_) => ComponentKind::Transform,
            Component::Shape(_) => ComponentKind::Shape,
            Component::Texture(_) => ComponentKind::Texture,
        }
    }
}

impl Behavior for Component {
    fn update(&mut self, dt: f32) {
        match self {
            Component::Transform(c) => c.update(dt),
            Component::Shape(c) => c.update(dt),
            Component::Texture(c) => c.update(dt),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Component::Transform(c) => c.render(surface),
            Component::Shape(c) => c.render(surface),
            Component::Texture(c) => c.render(surface),
        }
    }
}

/// A concrete component type that can be stored in and recovered from a [`Component`]
pub trait ComponentType: Behavior + Sized + 'static {
    const KIND: ComponentKind;

    /// Wrap into the component enum
    fn into_component(self) -> Component;

    /// Downcast, returning `None` if `component` is another variant
    fn from_component(component: &Component) -> Option<&Self>;

    /// Mutable downcast
    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

impl ComponentType for Transform {
    const KIND: ComponentKind = ComponentKind::Transform;

    fn into_component(self) -> Component {
        Component::Transform(self)
    }

    fn from_component(component: &Component) -> Option<&Self> {
        match component {
            Component::Transform(t) => Some(t),
            _ => None,
        }
    }

    fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
        match component {
            Component::Transform(t) => Some(t),
            _ => None,
        }
    }
}

impl ComponentType for ShapeFactory {
    const KIND: ComponentKind = ComponentKind::Shape;

    fn into_component(self) -> Component {
        Component::Shape(self)
    }

    fn from_component(component: &Component) -> Option<&Self> {
        match component {
            Component::Shape(s) => Some(s),
            _ => None,
        }
    }

    fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
        match component {
            Component::Shape(s) => Some(s),
            _ => None,
        }
    }
}

impl ComponentType for Texture {
    const KIND: ComponentKind = ComponentKind::Texture;

    fn into_component(self) -> Component {
        Component::Texture(self)
    }

    fn from_component(component: &Component) -> Option<&Self> {
        match component {
            Component::Texture(t) => Some(t),
            _ => None,
        }
    }

    fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
        match component {
            Component::Texture(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_values() {
        assert_eq!(ComponentKind::None as u8, 0);
        assert_eq!(ComponentKind::Transform as u8, 1);
        assert_eq!(ComponentKind::Shape as u8, 6);
        assert_eq!(ComponentKind::Texture as u8, 7);
    }

    #[test]
    fn test_component_kind_matches_type() {
        let c = Transform::default().into_component();
        assert_eq!(c.kind(), Transform::KIND);

        let c = ShapeFactory::new().into_component();
        assert_eq!(c.kind(), ShapeFactory::KIND);
    }

    #[test]
    fn test_downcast() {
        let c = Transform::default().into_component();
        assert!(Transform::from_component(&c).is_some());
        assert!(ShapeFactory::from_component(&c).is_none());
        assert!(Texture::from_component(&c).is_none());
    }
}
