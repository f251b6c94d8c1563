//! Hierarchy panel
//!
//! Lists the scene's actors in order and creates new shaped actors.

use patas_core::{
    Actor, ActorKey, Notifications, Scene, Severity, ShapeFactory, ShapeKind, Transform, Vec2,
};

/// One row of the hierarchy
#[derive(Clone, Debug, PartialEq)]
pub struct HierarchyEntry {
    pub key: ActorKey,
    /// `"{index} - {name}"`
    pub label: String,
    pub selected: bool,
}

/// Rows for every actor in scene order
pub fn entries(scene: &Scene, selected: Option<ActorKey>) -> Vec<HierarchyEntry> {
    scene
        .iter()
        .enumerate()
        .map(|(i, (key, actor))| HierarchyEntry {
            key,
            label: format!("{} - {}", i, actor.name()),
            selected: selected == Some(key),
        })
        .collect()
}

/// The "Create ..." buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapePreset {
    Circle,
    Rectangle,
    Triangle,
}

impl ShapePreset {
    pub const ALL: [ShapePreset; 3] = [ShapePreset::Circle, ShapePreset::Rectangle, ShapePreset::Triangle];

    /// Name given to the new actor
    pub fn name(self) -> &'static str {
        match self {
            ShapePreset::Circle => "Circle",
            ShapePreset::Rectangle => "Rectangle",
            ShapePreset::Triangle => "Triangle",
        }
    }

    /// Button caption
    pub fn button_label(self) -> String {
        format!("Create {}", self.name())
    }

    pub fn shape_kind(self) -> ShapeKind {
        match self {
            ShapePreset::Circle => ShapeKind::Circle,
            ShapePreset::Rectangle => ShapeKind::Rectangle,
            ShapePreset::Triangle => ShapeKind::Triangle,
        }
    }

    /// Spawn position
    pub fn position(self) -> Vec2 {
        match self {
            ShapePreset::Circle => Vec2::new(100.0, 100.0),
            ShapePreset::Rectangle => Vec2::new(200.0, 150.0),
            ShapePreset::Triangle => Vec2::new(150.0, 200.0),
        }
    }
}

/// Add an actor for `preset` to the end of the scene
pub fn create_actor(scene: &mut Scene, notifications: &mut Notifications, preset: ShapePreset) -> ActorKey {
    let name = preset.name();
    let mut actor = Actor::new(name);
    if let Some(factory) = actor.get_component_mut::<ShapeFactory>() {
        factory.create_shape(preset.shape_kind());
    }
    if let Some(transform) = actor.get_component_mut::<Transform>() {
        transform.set_transform(preset.position(), Vec2::ZERO, Vec2::ONE);
    }

    let key = scene.add_actor(actor);
    notifications.add_message(Severity::Normal, format!("Actor '{}' created successfully.", name));
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_labels_and_selection() {
        let mut scene = Scene::new();
        scene.add_actor(Actor::new("Track"));
        let player = scene.add_actor(Actor::new("Player"));

        let rows = entries(&scene, Some(player));
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["0 - Track", "1 - Player"]);
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
    }

    #[test]
    fn test_create_each_preset() {
        let mut scene = Scene::new();
        let mut notifications = Notifications::new();

        for preset in ShapePreset::ALL {
            let key = create_actor(&mut scene, &mut notifications, preset);
            let actor = scene.get(key).map(|a| (a.name().to_string(), a.get_component::<Transform>().copied()));
            let (name, transform) = actor.unwrap_or_default();
            assert_eq!(name, preset.name());
            assert_eq!(
                transform,
                Some(Transform::new(preset.position(), Vec2::ZERO, Vec2::ONE))
            );
            let kind = scene
                .get(key)
                .and_then(|a| a.get_component::<ShapeFactory>())
                .map(|f| f.kind());
            assert_eq!(kind, Some(preset.shape_kind()));
        }

        assert_eq!(scene.actor_count(), 3);
        let messages: Vec<&str> = notifications
            .notifications()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Actor 'Circle' created successfully.",
                "Actor 'Rectangle' created successfully.",
                "Actor 'Triangle' created successfully.",
            ]
        );
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(ShapePreset::Rectangle.button_label(), "Create Rectangle");
    }
}
