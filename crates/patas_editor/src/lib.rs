//! Editor model for the Patas engine
//!
//! The GUI overlay is described as data so any window backend can show it:
//!
//! - [`hierarchy`] - actor list and the create-actor buttons
//! - [`inspector`] - rename and vec2 controls for the selected actor
//! - [`console`] - notification lines
//! - [`Editor`] - selection state, [`EditorCommand`]s and the per-frame [`EditorFrame`]

pub mod console;
pub mod hierarchy;
pub mod inspector;
mod editor;

pub use editor::{Editor, EditorCommand, EditorFrame};
pub use hierarchy::{HierarchyEntry, ShapePreset};
pub use inspector::{Axis, InspectorView, Vec2Edit, Vec2Field};
