//! Runs the startup scene headless for five seconds of simulated time and
//! prints the player's position once per simulated second.
//!
//! Run with: cargo run --example 01_headless_patrol

use patas::config::AppConfig;
use patas::scene::startup_scene;
use patas_core::{
    Actor, Behavior, Notifications, Patrol, RenderTarget, ResourceManager, Scene, Transform, Vec2,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    let mut resources = ResourceManager::new(
        config.assets.root.clone(),
        &config.assets.extension,
        &config.assets.default_texture,
    );
    let mut notifications = Notifications::new();

    let mut scene = match startup_scene(&config, &mut resources, &mut notifications) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Failed to build scene: {}", e);
            return;
        }
    };

    let dt = 1.0 / 60.0;
    let mut target = RenderTarget::new(config.window.width, config.window.height);
    for frame in 1..=300 {
        scene.update(dt);
        target.clear();
        scene.render(&mut target);

        if frame % 60 == 0 {
            report(&scene, frame);
        }
    }

    println!("{} primitives drawn in the last frame", target.draw_count());
    for n in notifications.notifications() {
        println!("[{}] {}", n.severity.label(), n.message);
    }

    // A single actor can also be driven by hand
    let mut walker = Actor::new("Walker");
    let mut patrol = Patrol::new("Walker", vec![Vec2::new(100.0, 0.0)]);
    for _ in 0..3 {
        if let Some(t) = walker.get_component_mut::<Transform>() {
            patrol.step(t, 0.1);
        }
        walker.update(0.1);
    }
    let x = walker.get_component::<Transform>().map(|t| t.position.x).unwrap_or_default();
    println!("Walker after 3 steps: x = {:.1}", x);
}

fn report(scene: &Scene, frame: u32) {
    let Some(position) = scene
        .find_by_name("Player")
        .and_then(|key| scene.get(key))
        .and_then(|actor| actor.get_component::<Transform>())
        .map(|t| t.position)
    else {
        return;
    };
    let waypoint = scene.patrol().map(|p| p.current_index()).unwrap_or_default();
    println!(
        "t = {:.0}s  player at ({:.1}, {:.1})  heading to waypoint {}",
        frame as f32 / 60.0,
        position.x,
        position.y,
        waypoint
    );
}
