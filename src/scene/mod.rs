//! Scene construction utilities
//!
//! This module provides a declarative API for building scenes and the
//! startup scene.

mod scene_builder;

pub use scene_builder::{startup_scene, SceneBuilder, SceneBuildError};
