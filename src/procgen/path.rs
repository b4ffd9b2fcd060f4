//! Door opening and the path strip laid beyond it

use super::lsystem::{generate_plant, PlantParams};
use super::noise::hash01;
use crate::config::{ArenaConfig, GameConfig, PathConfig};
use crate::data::{
    Material, ObstacleInstance, FOLIAGE_COLOR, PATH_COLOR, STONE_COLOR,
};
use tracing::debug;

/// Classification of one cell in a path row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCell {
    /// Walkable floor inside the half-width.
    Floor,
    /// Raised stone exactly one cell beyond the floor.
    Border,
    /// Everything further out; may carry noise foliage.
    Verge,
}

/// Outcome of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealSummary {
    pub door_blocks_removed: usize,
    pub path_blocks_added: usize,
    pub plant_segments_added: usize,
}

/// First row of the strip, one row beyond the front wall.
pub fn path_start_z(arena: &ArenaConfig) -> i32 {
    -(arena.half_extent + 1)
}

/// Last (farthest) row of the strip.
pub fn path_end_z(arena: &ArenaConfig, path: &PathConfig) -> i32 {
    path_start_z(arena) - (path.length as i32 - 1)
}

/// Open the door and append the path strip with its foliage
///
/// Only the door blocks are mutated in place; everything else is appended.
pub fn reveal_path(obstacles: &mut Vec<ObstacleInstance>, config: &GameConfig) -> RevealSummary {
    let door_blocks_removed = open_door(obstacles, &config.arena, &config.path);

    let strip = build_path_strip(config);
    let path_blocks_added = strip.len();
    obstacles.extend(strip);

    let bushes = build_bush_lines(config);
    let plant_segments_added = bushes.len();
    obstacles.extend(bushes);

    let summary = RevealSummary {
        door_blocks_removed,
        path_blocks_added,
        plant_segments_added,
    };
    debug!("Path revealed: {:?}", summary);
    summary
}

/// Zero the height of every active front-wall block inside the door span
///
/// Returns the number of blocks removed; a second call removes nothing.
pub fn open_door(
    obstacles: &mut [ObstacleInstance],
    arena: &ArenaConfig,
    path: &PathConfig,
) -> usize {
    let door_z = -(arena.half_extent as f32);
    let mut removed = 0;

    for block in obstacles.iter_mut() {
        let on_front_wall =
            block.material == Material::Wall && (block.position.z - door_z).abs() < 0.5;
        let in_door_span = block.position.x.abs() <= path.door_half_span;

        if on_front_wall && in_door_span && block.is_active() {
            block.remove();
            removed += 1;
        }
    }

    removed
}

/// Classify a cell by its X distance from the strip center.
pub fn classify_cell(gx: i32, half_width: f32) -> PathCell {
    let dx = gx.abs();
    if dx as f32 <= half_width {
        PathCell::Floor
    } else if dx == half_width.floor() as i32 + 1 {
        PathCell::Border
    } else {
        PathCell::Verge
    }
}

/// Floor, border and noise foliage for every row of the strip
///
/// Rows run from the door outward (-Z); each row spans the arena's X range.
pub fn build_path_strip(config: &GameConfig) -> Vec<ObstacleInstance> {
    let path = &config.path;
    let half = config.arena.half_extent;
    let half_width = path.half_width();
    let start = path_start_z(&config.arena);
    let end = path_end_z(&config.arena, path);

    let mut blocks = Vec::new();
    for gz in (end..=start).rev() {
        for gx in -half..=half {
            let (x, z) = (gx as f32, gz as f32);
            match classify_cell(gx, half_width) {
                PathCell::Floor => {
                    blocks.push(ObstacleInstance::block(
                        x,
                        z,
                        path.floor_height,
                        PATH_COLOR,
                        Material::Path,
                    ));
                }
                PathCell::Border => {
                    blocks.push(ObstacleInstance::block(
                        x,
                        z,
                        path.floor_height + path.border_raise,
                        STONE_COLOR,
                        Material::Default,
                    ));
                }
                PathCell::Verge => {
                    let r = hash01(gx, gz);
                    if r < path.foliage_probability {
                        let height = path.foliage_base_height + path.foliage_height_range * r;
                        blocks.push(ObstacleInstance::block(
                            x,
                            z,
                            height,
                            FOLIAGE_COLOR,
                            Material::Default,
                        ));
                    }
                }
            }
        }
    }

    blocks
}

/// Grammar bushes on both sides of the strip every `bush_spacing` rows.
pub fn build_bush_lines(config: &GameConfig) -> Vec<ObstacleInstance> {
    let path = &config.path;
    let offset_x = path.half_width() + path.bush_offset;
    let start = path_start_z(&config.arena);
    let end = path_end_z(&config.arena, path);

    let step = path.bush_spacing.max(1) as i32;

    let mut segments = Vec::new();
    for side in [-1.0_f32, 1.0] {
        let mut gz = start;
        while gz >= end {
            let params = PlantParams::from_config(&config.plant, side * offset_x, gz as f32);
            segments.extend(generate_plant(&params));
            gz -= step;
        }
    }

    segments
}
