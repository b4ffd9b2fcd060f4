//! Static arena layout: a closed wall ring plus noise-driven interior columns

use super::noise::{hash01, height_field};
use crate::config::ArenaConfig;
use crate::data::{ObstacleInstance, Material, DIRT_COLOR, GRASS_COLOR, WALL_COLOR};
use tracing::debug;

/// Generate the complete obstacle set for a fresh arena
///
/// The wall ring comes first, then the interior. The result is fully
/// determined by `config`.
pub fn generate_arena(config: &ArenaConfig) -> Vec<ObstacleInstance> {
    let mut obstacles = build_wall_ring(config);
    let wall_count = obstacles.len();

    obstacles.extend(build_interior(config));

    debug!(
        "Generated arena: {} wall blocks, {} interior columns (half extent {})",
        wall_count,
        obstacles.len() - wall_count,
        config.half_extent
    );

    obstacles
}

/// Closed ring of wall blocks at `x = ±H` and `z = ±H`
///
/// Front/back rows and left/right columns each cover every integer
/// coordinate in `[-H, H]`, so the four corners appear twice.
pub fn build_wall_ring(config: &ArenaConfig) -> Vec<ObstacleInstance> {
    let half = config.half_extent.max(0);
    let h = half as f32;
    let mut walls = Vec::with_capacity(4 * (2 * half as usize + 1));

    for x in -half..=half {
        let x = x as f32;
        walls.push(ObstacleInstance::block(x, -h, config.wall_height, WALL_COLOR, Material::Wall));
        walls.push(ObstacleInstance::block(x, h, config.wall_height, WALL_COLOR, Material::Wall));
    }

    for z in -half..=half {
        let z = z as f32;
        walls.push(ObstacleInstance::block(-h, z, config.wall_height, WALL_COLOR, Material::Wall));
        walls.push(ObstacleInstance::block(h, z, config.wall_height, WALL_COLOR, Material::Wall));
    }

    walls
}

/// Noise-field interior columns
///
/// Every interior cell is tested in turn against the spawn-safe center
/// zone, the pre-door corridor and the hash threshold before a column is
/// placed.
pub fn build_interior(config: &ArenaConfig) -> Vec<ObstacleInstance> {
    let inner = config.half_extent - 1;
    let mut columns = Vec::new();

    for gz in -inner..=inner {
        for gx in -inner..=inner {
            if is_center_clear(config, gx, gz) || is_corridor_cell(config, gx, gz) {
                continue;
            }

            if hash01(gx, gz) > config.spawn_probability {
                continue;
            }

            let height = column_height(config, gx, gz);
            let color = column_color(config, height);
            columns.push(ObstacleInstance::block(
                gx as f32,
                gz as f32,
                height,
                color,
                Material::Default,
            ));
        }
    }

    columns
}

/// Inside the spawn-safe radius around the origin
pub fn is_center_clear(config: &ArenaConfig, gx: i32, gz: i32) -> bool {
    let dist = ((gx * gx + gz * gz) as f32).sqrt();
    dist < config.center_clear_radius
}

/// Inside the band kept open in front of the future door
///
/// The band spans `|gx| <= corridor_half_width` from the innermost front row
/// up to `gz = -2`.
pub fn is_corridor_cell(config: &ArenaConfig, gx: i32, gz: i32) -> bool {
    let inner = config.half_extent - 1;
    gx.abs() <= config.corridor_half_width && gz <= -2 && gz >= -inner
}

/// Column height from the trig height field
pub fn column_height(config: &ArenaConfig, gx: i32, gz: i32) -> f32 {
    let n = height_field(gx, gz, config.noise_frequency);
    config.min_obstacle_height + config.obstacle_height_range * n
}

/// Grass-to-dirt blend keyed on the column's normalized height
pub fn column_color(config: &ArenaConfig, height: f32) -> glam::Vec3 {
    let t = if config.obstacle_height_range > 0.0 {
        ((height - config.min_obstacle_height) / config.obstacle_height_range).clamp(0.0, 1.0)
    } else {
        0.0
    };
    GRASS_COLOR.lerp(DIRT_COLOR, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_at(walls: &[ObstacleInstance], x: i32, z: i32) -> bool {
        walls.iter().any(|w| {
            w.is_active()
                && w.material == Material::Wall
                && w.position.x == x as f32
                && w.position.z == z as f32
        })
    }

    #[test]
    fn test_wall_ring_has_no_gaps() {
        let config = ArenaConfig::default();
        let walls = build_wall_ring(&config);
        let half = config.half_extent;

        for i in -half..=half {
            assert!(wall_at(&walls, i, -half), "front wall gap at x={}", i);
            assert!(wall_at(&walls, i, half), "back wall gap at x={}", i);
            assert!(wall_at(&walls, -half, i), "left wall gap at z={}", i);
            assert!(wall_at(&walls, half, i), "right wall gap at z={}", i);
        }
        assert_eq!(walls.len(), 4 * (2 * half as usize + 1));
    }

    #[test]
    fn test_wall_height_and_tag() {
        let config = ArenaConfig::default();
        for wall in build_wall_ring(&config) {
            assert_eq!(wall.height(), config.wall_height);
            assert_eq!(wall.position.y, config.wall_height * 0.5);
            assert_eq!(wall.color, WALL_COLOR);
        }
    }

    #[test]
    fn test_interior_respects_exclusions() {
        let config = ArenaConfig::default();
        for column in build_interior(&config) {
            let gx = column.position.x as i32;
            let gz = column.position.z as i32;
            assert!(!is_center_clear(&config, gx, gz), "column in clear zone at ({}, {})", gx, gz);
            assert!(!is_corridor_cell(&config, gx, gz), "column in corridor at ({}, {})", gx, gz);
            assert!(gx.abs() < config.half_extent && gz.abs() < config.half_extent);
            assert!(hash01(gx, gz) <= config.spawn_probability);
            assert_eq!(column.material, Material::Default);
        }
    }

    #[test]
    fn test_interior_height_range() {
        let config = ArenaConfig::default();
        let max = config.min_obstacle_height + config.obstacle_height_range;
        for column in build_interior(&config) {
            assert!(column.height() >= config.min_obstacle_height - 1e-5);
            assert!(column.height() <= max + 1e-5);
        }
    }

    #[test]
    fn test_negative_extent_builds_single_cell_ring() {
        let config = ArenaConfig {
            half_extent: -3,
            ..ArenaConfig::default()
        };
        let walls = build_wall_ring(&config);
        assert_eq!(walls.len(), 4);
        assert!(build_interior(&config).is_empty());
    }

    #[test]
    fn test_deterministic_arena() {
        let config = ArenaConfig::default();
        assert_eq!(generate_arena(&config), generate_arena(&config));
    }

    #[test]
    fn test_zero_probability_leaves_only_walls() {
        let config = ArenaConfig {
            spawn_probability: -1.0,
            ..ArenaConfig::default()
        };
        let arena = generate_arena(&config);
        assert!(arena.iter().all(|o| o.material == Material::Wall));
    }

    #[test]
    fn test_column_color_endpoints() {
        let config = ArenaConfig::default();
        assert_eq!(column_color(&config, config.min_obstacle_height), GRASS_COLOR);
        let top = config.min_obstacle_height + config.obstacle_height_range;
        assert!((column_color(&config, top) - DIRT_COLOR).length() < 1e-5);
    }

    #[test]
    fn test_corridor_band() {
        let config = ArenaConfig::default();
        assert!(is_corridor_cell(&config, 0, -2));
        assert!(is_corridor_cell(&config, -1, -9));
        assert!(!is_corridor_cell(&config, 2, -5));
        assert!(!is_corridor_cell(&config, 0, -1));
        assert!(!is_corridor_cell(&config, 0, -10));
    }
}
