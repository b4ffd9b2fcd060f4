use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Identifiers ---
pub type SessionId = Uuid;

// --- Palette ---
pub const WALL_COLOR: Vec3 = Vec3::new(0.9, 0.9, 0.95);
pub const GRASS_COLOR: Vec3 = Vec3::new(0.55, 0.85, 0.55);
pub const DIRT_COLOR: Vec3 = Vec3::new(0.45, 0.35, 0.22);
pub const PATH_COLOR: Vec3 = Vec3::new(0.80, 0.72, 0.50);
pub const STONE_COLOR: Vec3 = Vec3::new(0.70, 0.70, 0.78);
pub const FOLIAGE_COLOR: Vec3 = Vec3::new(0.45, 0.70, 0.40);
pub const TRUNK_COLOR: Vec3 = Vec3::new(0.50, 0.35, 0.20);
pub const LEAF_COLOR: Vec3 = Vec3::new(0.35, 0.65, 0.30);
pub const PLATFORM_COLOR: Vec3 = Vec3::new(0.25, 0.80, 0.45);

/// Grid cells are one world unit wide on X and Z.
pub const CELL_SIZE: f32 = 1.0;

// --- Obstacles ---

/// Material tag the renderer uses to pick a surface treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    #[default]
    Default,
    Wall,
    Path,
}

/// An axis-aligned block placed in the world.
///
/// `position` is the block center, so a block of height `h` resting on the
/// ground has `position.y == h / 2`. A block whose height is zero or less has
/// been logically removed and must be ignored by every consumer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleInstance {
    pub position: Vec3,
    pub extent: Vec3,
    pub color: Vec3,
    pub material: Material,
}

impl ObstacleInstance {
    /// Grid-aligned block standing on the ground at `(x, z)`.
    pub fn block(x: f32, z: f32, height: f32, color: Vec3, material: Material) -> Self {
        Self {
            position: Vec3::new(x, height * 0.5, z),
            extent: Vec3::new(CELL_SIZE, height, CELL_SIZE),
            color,
            material,
        }
    }

    /// Vertical segment whose bottom sits at `base`.
    pub fn segment(base: Vec3, height: f32, color: Vec3) -> Self {
        Self {
            position: Vec3::new(base.x, base.y + 0.5 * height, base.z),
            extent: Vec3::new(CELL_SIZE, height, CELL_SIZE),
            color,
            material: Material::Default,
        }
    }

    pub fn height(&self) -> f32 {
        self.extent.y
    }

    pub fn is_active(&self) -> bool {
        self.extent.y > 0.0
    }

    /// Logically remove the block. Position, color and material are kept.
    pub fn remove(&mut self) {
        self.extent.y = 0.0;
    }
}

// --- Agent ---

/// Lifecycle of the snake head.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Lifecycle {
    #[default]
    Alive,
    /// Collided; `elapsed` seconds since the collision.
    Dying { elapsed: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub lifecycle: Lifecycle,
}

impl AgentState {
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            lifecycle: Lifecycle::Alive,
        }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Alive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Food {
    pub position: Vec3,
    pub active: bool,
}

// --- Door ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

// --- Input ---

/// Movement request from the input layer: a unit vector on the XZ plane, or zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    pub direction: Vec3,
}

impl PlayerInput {
    pub const NONE: PlayerInput = PlayerInput { direction: Vec3::ZERO };

    /// Toward the front wall and the door (-Z).
    pub fn forward() -> Self {
        Self { direction: Vec3::NEG_Z }
    }

    pub fn back() -> Self {
        Self { direction: Vec3::Z }
    }

    pub fn left() -> Self {
        Self { direction: Vec3::NEG_X }
    }

    pub fn right() -> Self {
        Self { direction: Vec3::X }
    }

    /// Arbitrary direction, flattened onto XZ and normalized. Zero stays zero.
    pub fn toward(direction: Vec3) -> Self {
        let flat = Vec3::new(direction.x, 0.0, direction.z);
        Self {
            direction: flat.normalize_or_zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_is_centered_vertically() {
        let block = ObstacleInstance::block(3.0, -2.0, 2.0, WALL_COLOR, Material::Wall);
        assert_eq!(block.position, Vec3::new(3.0, 1.0, -2.0));
        assert_eq!(block.extent, Vec3::new(1.0, 2.0, 1.0));
        assert!(block.is_active());
    }

    #[test]
    fn test_removed_block_is_inactive() {
        let mut block = ObstacleInstance::block(0.0, 0.0, 1.5, GRASS_COLOR, Material::Default);
        block.remove();
        assert!(!block.is_active());
        assert_eq!(block.height(), 0.0);
        assert_eq!(block.position.x, 0.0);
    }

    #[test]
    fn test_segment_starts_at_base() {
        let seg = ObstacleInstance::segment(Vec3::new(1.0, 0.4, 2.0), 0.5, TRUNK_COLOR);
        assert!((seg.position.y - 0.65).abs() < 1e-6);
        assert_eq!(seg.material, Material::Default);
    }

    #[test]
    fn test_default_agent_is_alive_at_rest() {
        let state = AgentState::default();
        assert_eq!(state.lifecycle, Lifecycle::Alive);
        assert!(state.is_alive());
        assert_eq!(state.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_input_toward_is_flat_unit() {
        let input = PlayerInput::toward(Vec3::new(3.0, 7.0, 4.0));
        assert!((input.direction.length() - 1.0).abs() < 1e-6);
        assert_eq!(input.direction.y, 0.0);
        assert_eq!(PlayerInput::toward(Vec3::Y).direction, Vec3::ZERO);
    }
}
