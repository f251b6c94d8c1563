//! Core types for the Patas engine
//!
//! This crate provides the actor/component model and everything it touches:
//!
//! - [`Transform`], [`ShapeFactory`], [`Texture`] - the component types
//! - [`Component`] / [`ComponentType`] - closed component enum and typed downcast
//! - [`Behavior`] - the update/render contract shared by components and actors
//! - [`Actor`] - a named component container
//! - [`Scene`] - ordered actors keyed by [`ActorKey`], with an optional [`Patrol`]
//! - [`Primitive`] - the drawable a shape factory owns
//! - [`Surface`] / [`RenderTarget`] - what a window must be able to draw onto
//! - [`ResourceManager`] - texture cache with a default-texture fallback
//! - [`Notifications`] - ordered message sink persisted to a log file

mod asset_error;
mod component;
mod transform;
mod primitive;
mod shape_factory;
mod texture;
mod resources;
mod actor;
mod movement;
mod scene;
mod surface;
mod notifications;

pub use asset_error::AssetError;
pub use component::{Behavior, Component, ComponentKind, ComponentType};
pub use transform::Transform;
pub use primitive::{Color, Geometry, Primitive, DEFAULT_CIRCLE_POINTS};
pub use shape_factory::{ShapeFactory, ShapeKind, CIRCLE_RADIUS, RECTANGLE_SIZE, TRIANGLE_RADIUS};
pub use texture::{Texture, TextureData};
pub use resources::ResourceManager;
pub use actor::Actor;
pub use movement::{Patrol, DEFAULT_ARRIVAL_RANGE, DEFAULT_SEEKER, DEFAULT_SPEED, DEFAULT_WAYPOINTS};
pub use scene::{ActorKey, Scene};
pub use surface::{RenderTarget, Surface};
pub use notifications::{Notification, Notifications, Severity};

// Re-export the math types used throughout the public API
pub use patas_math::{Vec2, Vec3, Vec4, Quaternion};
