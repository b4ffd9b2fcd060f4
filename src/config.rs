use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Highest L-system iteration count accepted; the expanded string doubles its
/// trunk run every iteration.
pub const MAX_PLANT_ITERATIONS: u32 = 6;

const MIN_POSITIVE: f32 = 1e-3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub sim: SimSettings,
    pub arena: ArenaConfig,
    pub grid: GridConfig,
    pub path: PathConfig,
    pub agent: AgentConfig,
    pub plant: PlantConfig,
    pub camera: CameraConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub tick_rate_hz: u16,
    /// Seed for the food placement stream.
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub half_extent: i32,
    pub wall_height: f32,
    pub center_clear_radius: f32,
    pub spawn_probability: f32,
    pub noise_frequency: f32,
    pub min_obstacle_height: f32,
    pub obstacle_height_range: f32,
    pub corridor_half_width: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Obstacles at or below this height are walkable.
    pub solid_height_threshold: f32,
    /// Half-size of the snake head on X/Z.
    pub agent_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Walkable strip width in tiles.
    pub width: u32,
    /// Number of rows laid beyond the door.
    pub length: u32,
    pub door_half_span: f32,
    pub door_open_delay_secs: f32,
    pub floor_height: f32,
    pub border_raise: f32,
    pub foliage_probability: f32,
    pub foliage_base_height: f32,
    pub foliage_height_range: f32,
    /// Rows between grammar bushes along each side.
    pub bush_spacing: u32,
    /// Distance of the bush line beyond the walkable half-width.
    pub bush_offset: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub mass: f32,
    pub friction: f32,
    pub force_magnitude: f32,
    pub max_speed: f32,
    pub ground_height: f32,
    pub trail_sample_spacing: f32,
    /// Trail samples between consecutive body segments.
    pub segment_spacing: usize,
    pub food_pickup_radius: f32,
    pub food_edge_margin: f32,
    pub death_duration_secs: f32,
    pub squash_duration_secs: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    pub iterations: u32,
    pub segment_height: f32,
    pub horizontal_step: f32,
    pub base_height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub follow: bool,
    /// Initial camera position; the follow offset is measured from the start pose.
    pub position: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60,
            seed: 0,
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            half_extent: 10,
            wall_height: 2.0,
            center_clear_radius: 4.0,
            spawn_probability: 0.45,
            noise_frequency: 0.35,
            min_obstacle_height: 0.4,
            obstacle_height_range: 1.2,
            corridor_half_width: 1,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            solid_height_threshold: 0.6,
            agent_radius: 0.4,
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            width: 3,
            length: 40,
            door_half_span: 1.5,
            door_open_delay_secs: 10.0,
            floor_height: 0.1,
            border_raise: 0.6,
            foliage_probability: 0.25,
            foliage_base_height: 1.4,
            foliage_height_range: 0.8,
            bush_spacing: 5,
            bush_offset: 3.0,
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            friction: 4.0,
            force_magnitude: 20.0,
            max_speed: 6.0,
            ground_height: 0.5,
            trail_sample_spacing: 0.1,
            segment_spacing: 6,
            food_pickup_radius: 0.7,
            food_edge_margin: 0.3,
            death_duration_secs: 0.6,
            squash_duration_secs: 0.5,
        }
    }
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            iterations: 2,
            segment_height: 0.35,
            horizontal_step: 0.6,
            base_height: 0.4,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow: true,
            position: [15.0, 20.0, 15.0],
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl CameraConfig {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

impl PathConfig {
    pub fn half_width(&self) -> f32 {
        self.width as f32 * 0.5
    }
}

impl AgentConfig {
    pub fn start_pose(&self) -> Vec3 {
        Vec3::new(0.0, self.ground_height, 0.0)
    }
}

impl GameConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&contents)?;
        Ok(config.validated())
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path.as_ref()).unwrap_or_else(|e| {
            warn!("Failed to load config {}: {}, using defaults", path.as_ref().display(), e);
            Self::default()
        })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Clamp degenerate values into a usable range. Probabilities and
    /// thresholds are passed through untouched.
    pub fn validated(mut self) -> Self {
        fn floor_f32(name: &str, value: &mut f32, min: f32) {
            if !(*value >= min) {
                warn!("{} = {} is below {}, clamping", name, value, min);
                *value = min;
            }
        }

        if self.sim.tick_rate_hz == 0 {
            warn!("sim.tick_rate_hz = 0, clamping to 1");
            self.sim.tick_rate_hz = 1;
        }
        if self.arena.half_extent < 2 {
            warn!("arena.half_extent = {} is below 2, clamping", self.arena.half_extent);
            self.arena.half_extent = 2;
        }
        if self.arena.corridor_half_width < 0 {
            self.arena.corridor_half_width = 0;
        }
        if self.path.width == 0 {
            warn!("path.width = 0, clamping to 1");
            self.path.width = 1;
        }
        if self.path.length == 0 {
            warn!("path.length = 0, clamping to 1");
            self.path.length = 1;
        }
        if self.path.bush_spacing == 0 {
            warn!("path.bush_spacing = 0, clamping to 1");
            self.path.bush_spacing = 1;
        }
        if self.plant.iterations > MAX_PLANT_ITERATIONS {
            warn!(
                "plant.iterations = {} exceeds {}, clamping",
                self.plant.iterations, MAX_PLANT_ITERATIONS
            );
            self.plant.iterations = MAX_PLANT_ITERATIONS;
        }
        if self.agent.segment_spacing == 0 {
            warn!("agent.segment_spacing = 0, clamping to 1");
            self.agent.segment_spacing = 1;
        }
        floor_f32("agent.mass", &mut self.agent.mass, MIN_POSITIVE);
        floor_f32("agent.max_speed", &mut self.agent.max_speed, 0.0);
        floor_f32("agent.friction", &mut self.agent.friction, 0.0);
        floor_f32("agent.trail_sample_spacing", &mut self.agent.trail_sample_spacing, MIN_POSITIVE);
        floor_f32("agent.squash_duration_secs", &mut self.agent.squash_duration_secs, MIN_POSITIVE);
        floor_f32("plant.segment_height", &mut self.plant.segment_height, MIN_POSITIVE);
        self
    }
}
