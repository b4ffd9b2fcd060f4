//! Blocked/open classification of integer grid cells.

use crate::config::GridConfig;
use crate::data::ObstacleInstance;
use glam::Vec3;

/// Read-only collision view over the current obstacle list.
///
/// A cell is blocked when the snake's footprint centered on it overlaps an
/// active obstacle taller than the solid threshold. Every query scans the
/// whole list. Cells outside the generated area are simply open.
#[derive(Debug, Clone, Copy)]
pub struct GridField<'a> {
    obstacles: &'a [ObstacleInstance],
    solid_height: f32,
    agent_radius: f32,
}

impl<'a> GridField<'a> {
    pub fn new(obstacles: &'a [ObstacleInstance], config: &GridConfig) -> Self {
        Self {
            obstacles,
            solid_height: config.solid_height_threshold,
            agent_radius: config.agent_radius,
        }
    }

    pub fn is_blocked(&self, gx: i32, gz: i32) -> bool {
        let (x, z) = (gx as f32, gz as f32);

        self.obstacles.iter().any(|block| {
            if !block.is_active() || block.height() <= self.solid_height {
                return false;
            }
            let hx = 0.5 * block.extent.x;
            let hz = 0.5 * block.extent.z;
            let dx = (x - block.position.x).abs();
            let dz = (z - block.position.z).abs();
            dx < hx + self.agent_radius && dz < hz + self.agent_radius
        })
    }

    /// Round a world position to its grid cell and test it.
    pub fn is_blocked_at(&self, position: Vec3) -> bool {
        let (gx, gz) = grid_cell(position);
        self.is_blocked(gx, gz)
    }
}

/// Nearest grid cell of a world position (X/Z, halves away from zero).
pub fn grid_cell(position: Vec3) -> (i32, i32) {
    (position.x.round() as i32, position.z.round() as i32)
}
