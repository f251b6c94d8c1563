//! Patas Engine
//!
//! A small 2D actor/component engine with an editor overlay. The core model
//! lives in `patas_core`, the editor in `patas_editor`; this crate adds
//! configuration, the window systems and the [`App`] loop.

pub mod app;
pub mod config;
pub mod input;
pub mod scene;
pub mod systems;

pub use app::{App, AppError};
pub use config::AppConfig;
