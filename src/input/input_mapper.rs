//! Input mapping from raw key presses to editor actions
//!
//! - Tab: select the next actor
//! - 1 / 2 / 3: create a circle / rectangle / triangle
//! - Arrow keys: drag the selected actor's position
//! - Backspace: reset the selected actor's position
//! - Escape: close the window

use patas_editor::{Axis, EditorCommand, ShapePreset, Vec2Edit, Vec2Field};
use winit::keyboard::KeyCode;

/// Drag units per arrow key press (one unit of position at the editor's drag speed)
pub const NUDGE_AMOUNT: f32 = 10.0;

/// Actions triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Close the window (Escape)
    Exit,
    /// Select the next actor in the hierarchy (Tab)
    SelectNext,
    /// Create an actor (1, 2, 3)
    Create(ShapePreset),
    /// Drag the selected actor's position (arrow keys)
    Nudge { axis: Axis, amount: f32 },
    /// Reset the selected actor's position (Backspace)
    ResetPosition,
}

impl InputAction {
    /// The editor command for this action; `None` for window actions
    pub fn editor_command(self) -> Option<EditorCommand> {
        match self {
            InputAction::Exit => None,
            InputAction::SelectNext => Some(EditorCommand::SelectNext),
            InputAction::Create(preset) => Some(EditorCommand::CreateActor(preset)),
            InputAction::Nudge { axis, amount } => Some(EditorCommand::EditField {
                field: Vec2Field::Position,
                edit: Vec2Edit::Drag { axis, amount },
            }),
            InputAction::ResetPosition => Some(EditorCommand::EditField {
                field: Vec2Field::Position,
                edit: Vec2Edit::Reset,
            }),
        }
    }
}

/// Maps raw key input to actions
pub struct InputMapper;

impl InputMapper {
    /// Map a key press to an action
    ///
    /// Releases and repeats are dropped by the window before they get here.
    pub fn map_key(key: KeyCode) -> Option<InputAction> {
        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::Tab => Some(InputAction::SelectNext),
            KeyCode::Digit1 => Some(InputAction::Create(ShapePreset::Circle)),
            KeyCode::Digit2 => Some(InputAction::Create(ShapePreset::Rectangle)),
            KeyCode::Digit3 => Some(InputAction::Create(ShapePreset::Triangle)),
            KeyCode::ArrowLeft => Some(InputAction::Nudge { axis: Axis::X, amount: -NUDGE_AMOUNT }),
            KeyCode::ArrowRight => Some(InputAction::Nudge { axis: Axis::X, amount: NUDGE_AMOUNT }),
            // Screen y grows downward
            KeyCode::ArrowUp => Some(InputAction::Nudge { axis: Axis::Y, amount: -NUDGE_AMOUNT }),
            KeyCode::ArrowDown => Some(InputAction::Nudge { axis: Axis::Y, amount: NUDGE_AMOUNT }),
            KeyCode::Backspace => Some(InputAction::ResetPosition),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_key(KeyCode::Escape);
        assert_eq!(action, Some(InputAction::Exit));
        assert_eq!(action.and_then(InputAction::editor_command), None);
    }

    #[test]
    fn test_create_keys() {
        let presets: Vec<Option<InputAction>> = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3]
            .into_iter()
            .map(InputMapper::map_key)
            .collect();
        assert_eq!(
            presets,
            vec![
                Some(InputAction::Create(ShapePreset::Circle)),
                Some(InputAction::Create(ShapePreset::Rectangle)),
                Some(InputAction::Create(ShapePreset::Triangle)),
            ]
        );
    }

    #[test]
    fn test_arrows_drag_position() {
        let cmd = InputMapper::map_key(KeyCode::ArrowUp).and_then(InputAction::editor_command);
        assert_eq!(
            cmd,
            Some(EditorCommand::EditField {
                field: Vec2Field::Position,
                edit: Vec2Edit::Drag { axis: Axis::Y, amount: -NUDGE_AMOUNT },
            })
        );
    }

    #[test]
    fn test_unmapped_keys() {
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::Space] {
            assert_eq!(InputMapper::map_key(key), None, "Key {:?} should not be mapped", key);
        }
    }
}
