//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for building scenes of shaped actors, plus the
//! startup scene (track, player and triangle) the app opens with.

use patas_core::{
    Actor, Notifications, Patrol, ResourceManager, Scene, Severity, ShapeFactory, ShapeKind,
    Texture, Transform, Vec2,
};
use crate::config::AppConfig;

/// Errors that make a scene unusable
#[derive(Debug, Clone, PartialEq)]
pub enum SceneBuildError {
    /// The patrol has no waypoints
    EmptyPatrol,
    /// The patrol's seeker is not in the scene
    MissingActor(String),
}

impl std::fmt::Display for SceneBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneBuildError::EmptyPatrol => write!(f, "Patrol has no waypoints"),
            SceneBuildError::MissingActor(name) => write!(f, "Actor '{}' not found in scene", name),
        }
    }
}

impl std::error::Error for SceneBuildError {}

/// Builder for scenes of shaped actors
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new()
///     .add_shape("Triangle", ShapeKind::Triangle, Transform::from_position(Vec2::new(200.0, 200.0)))
///     .with_patrol(Patrol::default())
///     .build()?;
/// ```
pub struct SceneBuilder {
    scene: Scene,
    patrol: Option<Patrol>,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            patrol: None,
        }
    }

    /// Add an actor with a shape of `kind` placed by `transform`
    pub fn add_shape(mut self, name: &str, kind: ShapeKind, transform: Transform) -> Self {
        self.scene.add_actor(shaped_actor(name, kind, transform));
        self
    }

    /// Add a shaped actor carrying the texture `texture_id`
    ///
    /// The texture is loaded with the resource manager's extension.
    ///
    /// A texture that fails to load is reported as a warning and replaced by
    /// the default texture.
    pub fn add_textured_shape(
        mut self,
        name: &str,
        kind: ShapeKind,
        transform: Transform,
        texture_id: &str,
        resources: &mut ResourceManager,
        notifications: &mut Notifications,
    ) -> Self {
        let mut actor = shaped_actor(name, kind, transform);
        let extension = resources.extension().to_string();

        let (data, fallback) = match resources.load_texture(texture_id, &extension) {
            Ok(data) => (data, false),
            Err(e) => {
                notifications.add_message(
                    Severity::Warning,
                    format!("Failed to load texture '{}': {}", texture_id, e),
                );
                (resources.texture_or_default(texture_id), true)
            }
        };

        if let Some(factory) = actor.get_component_mut::<ShapeFactory>() {
            factory.set_texture(Some(data.clone()));
        }
        let texture = if fallback {
            Texture::fallback(texture_id, &extension, data)
        } else {
            Texture::from_data(texture_id, &extension, data)
        };
        actor.add_component(texture);

        self.scene.add_actor(actor);
        self
    }

    /// Add a prebuilt actor
    pub fn add_actor(mut self, actor: Actor) -> Self {
        self.scene.add_actor(actor);
        self
    }

    /// Drive the actor named by the patrol's seeker around its waypoints
    pub fn with_patrol(mut self, patrol: Patrol) -> Self {
        self.patrol = Some(patrol);
        self
    }

    /// Finish the scene
    ///
    /// Fails if the patrol has no waypoints or its seeker is missing.
    pub fn build(self) -> Result<Scene, SceneBuildError> {
        let mut scene = self.scene;
        if let Some(patrol) = self.patrol {
            if patrol.waypoints().is_empty() {
                return Err(SceneBuildError::EmptyPatrol);
            }
            if scene.find_by_name(patrol.seeker()).is_none() {
                return Err(SceneBuildError::MissingActor(patrol.seeker().to_string()));
            }
            scene.set_patrol(patrol);
        }
        Ok(scene)
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn shaped_actor(name: &str, kind: ShapeKind, transform: Transform) -> Actor {
    let mut actor = Actor::new(name);
    if let Some(factory) = actor.get_component_mut::<ShapeFactory>() {
        factory.create_shape(kind);
    }
    if let Some(t) = actor.get_component_mut::<Transform>() {
        *t = transform;
    }
    actor
}

/// The scene the app starts with
///
/// Track (textured rectangle), Player (textured circle) and a triangle, with
/// the configured patrol.
pub fn startup_scene(
    config: &AppConfig,
    resources: &mut ResourceManager,
    notifications: &mut Notifications,
) -> Result<Scene, SceneBuildError> {
    let movement = &config.movement;

    SceneBuilder::new()
        .add_textured_shape(
            "Track",
            ShapeKind::Rectangle,
            Transform::new(Vec2::ZERO, Vec2::ZERO, Vec2::new(11.0, 12.0)),
            "Circuit",
            resources,
            notifications,
        )
        .add_textured_shape(
            "Player",
            ShapeKind::Circle,
            Transform::default(),
            "Characters/tile000",
            resources,
            notifications,
        )
        .add_shape(
            "Triangle",
            ShapeKind::Triangle,
            Transform::from_position(Vec2::new(200.0, 200.0)),
        )
        .with_patrol(
            Patrol::new(movement.seeker.clone(), movement.waypoints.clone())
                .with_speed(movement.speed)
                .with_arrival_range(movement.arrival_range),
        )
        .build()
}
