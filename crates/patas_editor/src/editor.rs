//! Editor state and commands
//!
//! The editor holds the hierarchy selection. Input (GUI widgets or key
//! shortcuts) is turned into [`EditorCommand`]s and applied against the
//! scene; [`Editor::frame`] describes what the three panels show.

use patas_core::{ActorKey, Notifications, Scene};
use crate::console;
use crate::hierarchy::{self, HierarchyEntry, ShapePreset};
use crate::inspector::{self, InspectorView, Vec2Edit, Vec2Field};

/// A change requested through the editor
#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    /// Select an actor from the hierarchy
    Select(ActorKey),
    /// Select the actor after the current one, wrapping around
    SelectNext,
    /// Clear the selection
    Deselect,
    /// One of the "Create ..." buttons
    CreateActor(ShapePreset),
    /// Rename the selected actor
    Rename(String),
    /// Edit a transform field of the selected actor
    EditField { field: Vec2Field, edit: Vec2Edit },
}

/// Contents of the editor panels for one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorFrame {
    pub hierarchy: Vec<HierarchyEntry>,
    pub create_buttons: Vec<String>,
    /// Only present while an actor is selected
    pub inspector: Option<InspectorView>,
    pub console: Vec<String>,
}

/// Editor overlay state
#[derive(Debug, Default)]
pub struct Editor {
    selected: Option<ActorKey>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected actor, if it still exists in `scene`
    pub fn selected(&self, scene: &Scene) -> Option<ActorKey> {
        self.selected.filter(|key| scene.get(*key).is_some())
    }

    /// Apply one command
    ///
    /// Returns true if the command changed the scene or the selection.
    pub fn apply(&mut self, command: EditorCommand, scene: &mut Scene, notifications: &mut Notifications) -> bool {
        log::trace!("Editor command: {:?}", command);
        match command {
            EditorCommand::Select(key) => {
                if scene.get(key).is_none() {
                    return false;
                }
                let changed = self.selected != Some(key);
                self.selected = Some(key);
                changed
            }
            EditorCommand::SelectNext => {
                let next = match self.selected(scene).and_then(|key| scene.index_of(key)) {
                    Some(index) => scene.key_at((index + 1) % scene.actor_count()),
                    None => scene.key_at(0),
                };
                let changed = next.is_some() && next != self.selected;
                if next.is_some() {
                    self.selected = next;
                }
                changed
            }
            EditorCommand::Deselect => self.selected.take().is_some(),
            EditorCommand::CreateActor(preset) => {
                hierarchy::create_actor(scene, notifications, preset);
                true
            }
            EditorCommand::Rename(name) => match self.selected_actor_mut(scene) {
                Some(actor) => inspector::rename(actor, &name),
                None => false,
            },
            EditorCommand::EditField { field, edit } => {
                let selected = self.selected;
                match selected.and_then(|key| scene.get_mut(key)) {
                    Some(actor) => inspector::edit_field(actor, notifications, field, edit),
                    None => false,
                }
            }
        }
    }

    /// Describe the hierarchy, inspector and console for this frame
    pub fn frame(&self, scene: &Scene, notifications: &Notifications) -> EditorFrame {
        let selected = self.selected(scene);
        EditorFrame {
            hierarchy: hierarchy::entries(scene, selected),
            create_buttons: ShapePreset::ALL.iter().map(|p| p.button_label()).collect(),
            inspector: selected
                .and_then(|key| scene.get(key))
                .map(InspectorView::of),
            console: console::lines(notifications),
        }
    }

    fn selected_actor_mut<'a>(&self, scene: &'a mut Scene) -> Option<&'a mut patas_core::Actor> {
        self.selected.and_then(move |key| scene.get_mut(key))
    }
}
