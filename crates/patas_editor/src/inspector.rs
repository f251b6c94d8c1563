//! Inspector panel
//!
//! Edits the selected actor: its name and the three vec2 fields of its
//! transform. Each control records `"<Label> modified."` when it changes a
//! value.

use patas_core::{Actor, Notifications, Severity, Transform, Vec2};

/// Size of the name input buffer, terminator included
pub const NAME_CAPACITY: usize = 128;

/// Value change per unit of drag
pub const DRAG_SPEED: f32 = 0.1;

/// Value the Reset button writes to both axes
pub const RESET_VALUE: f32 = 0.0;

/// Cut `name` to fit the name buffer, on a char boundary
pub fn clamp_name(name: &str) -> &str {
    let max = NAME_CAPACITY - 1;
    if name.len() <= max {
        return name;
    }
    let mut end = max;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

/// The transform fields the inspector shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vec2Field {
    Position,
    Rotation,
    Scale,
}

impl Vec2Field {
    pub const ALL: [Vec2Field; 3] = [Vec2Field::Position, Vec2Field::Rotation, Vec2Field::Scale];

    pub fn label(self) -> &'static str {
        match self {
            Vec2Field::Position => "Position",
            Vec2Field::Rotation => "Rotation",
            Vec2Field::Scale => "Scale",
        }
    }

    pub fn get(self, transform: &Transform) -> Vec2 {
        match self {
            Vec2Field::Position => transform.position,
            Vec2Field::Rotation => transform.rotation,
            Vec2Field::Scale => transform.scale,
        }
    }

    pub fn get_mut(self, transform: &mut Transform) -> &mut Vec2 {
        match self {
            Vec2Field::Position => &mut transform.position,
            Vec2Field::Rotation => &mut transform.rotation,
            Vec2Field::Scale => &mut transform.scale,
        }
    }
}

/// One axis of a vec2 control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// An interaction with a vec2 control
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Vec2Edit {
    /// Drag one axis by `amount` drag units
    Drag { axis: Axis, amount: f32 },
    /// Type a value into one axis
    Set { axis: Axis, value: f32 },
    /// The Reset button
    Reset,
}

/// Apply `edit` to `values`, returning true if anything changed
pub fn apply_vec2_edit(values: &mut Vec2, edit: Vec2Edit) -> bool {
    let before = *values;
    let data = values.as_array_mut();
    match edit {
        Vec2Edit::Drag { axis, amount } => data[axis.index()] += amount * DRAG_SPEED,
        Vec2Edit::Set { axis, value } => data[axis.index()] = value,
        Vec2Edit::Reset => {
            data[0] = RESET_VALUE;
            data[1] = RESET_VALUE;
        }
    }
    *values != before
}

/// What the inspector shows for one actor
#[derive(Clone, Debug, PartialEq)]
pub struct InspectorView {
    pub name: String,
    /// Label and current value of each transform field; empty without a transform
    pub fields: Vec<(&'static str, Vec2)>,
}

impl InspectorView {
    pub fn of(actor: &Actor) -> Self {
        let fields = actor
            .get_component::<Transform>()
            .map(|t| Vec2Field::ALL.iter().map(|f| (f.label(), f.get(t))).collect::<Vec<_>>())
            .unwrap_or_default();
        Self {
            name: actor.name().to_string(),
            fields,
        }
    }
}

/// Rename `actor`; returns true if the name changed
pub fn rename(actor: &mut Actor, name: &str) -> bool {
    let name = clamp_name(name);
    if actor.name() == name {
        return false;
    }
    log::debug!("Renaming actor '{}' to '{}'", actor.name(), name);
    actor.set_name(name);
    true
}

/// Edit one transform field of `actor`
///
/// Does nothing for actors without a transform. Returns true if the value
/// changed.
pub fn edit_field(
    actor: &mut Actor,
    notifications: &mut Notifications,
    field: Vec2Field,
    edit: Vec2Edit,
) -> bool {
    let Some(transform) = actor.get_component_mut::<Transform>() else {
        return false;
    };
    let changed = apply_vec2_edit(field.get_mut(transform), edit);
    if changed {
        notifications.add_message(Severity::Normal, format!("{} modified.", field.label()));
    }
    changed
}
