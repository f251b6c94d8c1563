//! Drives the editor the way the GUI would: creates actors, selects one,
//! renames it and edits its transform, then prints the three panels.
//!
//! Run with: cargo run --example 02_editor_session

use patas_core::{Actor, Notifications, Scene, ShapeFactory, ShapeKind};
use patas_editor::{Axis, Editor, EditorCommand, ShapePreset, Vec2Edit, Vec2Field};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut scene = Scene::new();
    let mut track = Actor::new("Track");
    if let Some(factory) = track.get_component_mut::<ShapeFactory>() {
        factory.create_shape(ShapeKind::Rectangle);
    }
    scene.add_actor(track);

    let mut notifications = Notifications::new();
    let mut editor = Editor::new();

    let commands = vec![
        EditorCommand::CreateActor(ShapePreset::Circle),
        EditorCommand::CreateActor(ShapePreset::Triangle),
        EditorCommand::SelectNext,
        EditorCommand::SelectNext,
        EditorCommand::Rename("Ball".to_string()),
        EditorCommand::EditField {
            field: Vec2Field::Position,
            edit: Vec2Edit::Drag { axis: Axis::X, amount: 250.0 },
        },
        EditorCommand::EditField {
            field: Vec2Field::Rotation,
            edit: Vec2Edit::Set { axis: Axis::X, value: 45.0 },
        },
        EditorCommand::EditField {
            field: Vec2Field::Scale,
            edit: Vec2Edit::Reset,
        },
    ];

    for command in commands {
        editor.apply(command, &mut scene, &mut notifications);
    }

    let frame = editor.frame(&scene, &notifications);

    println!("== Hierarchy ==");
    for entry in &frame.hierarchy {
        let marker = if entry.selected { ">" } else { " " };
        println!("{} {}", marker, entry.label);
    }
    for button in &frame.create_buttons {
        println!("  [{}]", button);
    }

    if let Some(inspector) = &frame.inspector {
        println!("== Inspector ==");
        println!("Name: {}", inspector.name);
        for (label, value) in &inspector.fields {
            println!("{:<9} X {:>8.2}  Y {:>8.2}", label, value.x, value.y);
        }
    }

    println!("== Console ==");
    for line in &frame.console {
        println!("{}", line);
    }
}
