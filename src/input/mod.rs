//! Input handling module
//!
//! Maps key presses to editor and window actions.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction, NUDGE_AMOUNT};
