//! Scene presets: the playable arena and the plant showcase scenes

use super::lsystem::{generate_plant, PlantParams};
use crate::config::PlantConfig;
use crate::data::{Material, ObstacleInstance, PLATFORM_COLOR};
use serde::{Deserialize, Serialize};

/// Showcase platforms span `[-PLATFORM_HALF, PLATFORM_HALF]` on both axes.
const PLATFORM_HALF: i32 = 5;
const PLATFORM_HEIGHT: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenePreset {
    /// The playable arena.
    Arena,
    /// Three default bushes in a row.
    Grove,
    /// One taller plant: an extra iteration and longer segments.
    TallTree,
    /// The tall plant with a wider horizontal step.
    WideTree,
}

impl ScenePreset {
    pub const ALL: [ScenePreset; 4] = [
        ScenePreset::Arena,
        ScenePreset::Grove,
        ScenePreset::TallTree,
        ScenePreset::WideTree,
    ];

    /// Look up a preset by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<ScenePreset> {
        match name.to_lowercase().as_str() {
            "arena" => Some(ScenePreset::Arena),
            "grove" => Some(ScenePreset::Grove),
            "tall_tree" | "tall-tree" | "talltree" => Some(ScenePreset::TallTree),
            "wide_tree" | "wide-tree" | "widetree" => Some(ScenePreset::WideTree),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenePreset::Arena => "arena",
            ScenePreset::Grove => "grove",
            ScenePreset::TallTree => "tall_tree",
            ScenePreset::WideTree => "wide_tree",
        }
    }

    pub fn is_showcase(&self) -> bool {
        !matches!(self, ScenePreset::Arena)
    }

    /// Plants placed by this preset. The arena places none of its own.
    pub fn plants(&self, plant: &PlantConfig) -> Vec<PlantParams> {
        match self {
            ScenePreset::Arena => Vec::new(),
            ScenePreset::Grove => [-4.0, 0.0, 4.0]
                .into_iter()
                .map(|x| PlantParams::from_config(plant, x, 0.0))
                .collect(),
            ScenePreset::TallTree => vec![PlantParams {
                iterations: 3,
                segment_height: 0.45,
                horizontal_step: 0.6,
                ..PlantParams::from_config(plant, 0.0, 0.0)
            }],
            ScenePreset::WideTree => vec![PlantParams {
                iterations: 3,
                segment_height: 0.45,
                horizontal_step: 1.0,
                ..PlantParams::from_config(plant, 0.0, 0.0)
            }],
        }
    }
}

/// Build the obstacle set of a showcase scene: a flat platform plus its plants.
///
/// Returns an empty set for [`ScenePreset::Arena`], which is built by the
/// arena generator instead.
pub fn build_showcase(preset: ScenePreset, plant: &PlantConfig) -> Vec<ObstacleInstance> {
    if !preset.is_showcase() {
        return Vec::new();
    }

    let mut obstacles = build_platform();
    for params in preset.plants(plant) {
        obstacles.extend(generate_plant(&params));
    }
    obstacles
}

/// Flat tiles under a showcase scene, centered on the origin.
fn build_platform() -> Vec<ObstacleInstance> {
    let mut tiles = Vec::new();
    for x in -PLATFORM_HALF..=PLATFORM_HALF {
        for z in -PLATFORM_HALF..=PLATFORM_HALF {
            let mut tile = ObstacleInstance::block(
                x as f32,
                z as f32,
                PLATFORM_HEIGHT,
                PLATFORM_COLOR,
                Material::Default,
            );
            // Tiles are centered on the ground plane rather than resting on it.
            tile.position.y = 0.0;
            tiles.push(tile);
        }
    }
    tiles
}
