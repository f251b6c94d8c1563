//! Application systems
//!
//! The window collaborators and the frame clock the app loop runs on.

mod simulation;
mod window;

pub use simulation::FrameClock;
pub use window::{HeadlessWindow, RenderWindow, WindowError, WinitWindow, DEFAULT_HEADLESS_FRAMES};
