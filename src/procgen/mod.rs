//! Procedural world generation for the arena
//!
//! This module provides the arena layout, the L-system plant generator,
//! the door/path reveal and the decorative showcase scenes.

pub mod noise;
pub mod arena;
pub mod lsystem;
pub mod path;
pub mod scene_presets;

// Re-export main entry points for convenience
pub use arena::generate_arena;
pub use lsystem::{generate_plant, PlantParams};
pub use path::{reveal_path, RevealSummary};
pub use scene_presets::ScenePreset;
