//! Snake simulation: head physics, trail-following body, food and the
//! Alive/Dying lifecycle.
//!
//! ## Per-tick update while alive
//! 1. Integrate velocity from the input force and friction, clamp speed
//! 2. Propose a new head position pinned to the ground height
//! 3. Test the rounded cell against the grid field; a hit starts dying and
//!    ends the tick with position and velocity unchanged
//! 4. Commit the move and feed the travelled distance to the trail
//! 5. Re-seat body segments on the trail
//! 6. Eat food within the pickup radius: grow by one and respawn the food
//!
//! While dying only the death timer advances; once it passes the configured
//! duration the snake is reset to the start pose with a fresh food item.

use crate::config::{AgentConfig, GameConfig};
use crate::data::{AgentState, Food, Lifecycle, PlayerInput};
use crate::grid::GridField;
use crate::procgen::path::{path_end_z, path_start_z};
use crate::rng::RandomSource;
use crate::trail::TrailBuffer;
use crate::physics;
use glam::Vec3;
use tracing::{debug, info};

/// Region food may respawn in: the walkable strip beyond the door, minus the
/// door threshold and the far end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodBounds {
    pub half_width: f32,
    /// Row nearest the door.
    pub z_near: f32,
    /// Row nearest the far end of the strip.
    pub z_far: f32,
    pub height: f32,
}

impl FoodBounds {
    pub fn from_config(config: &GameConfig) -> Self {
        let half_width = (config.path.half_width() - config.agent.food_edge_margin).max(0.5);
        let z_near = (path_start_z(&config.arena) - 1) as f32;
        let z_far = ((path_end_z(&config.arena, &config.path) + 1) as f32).min(z_near);

        Self {
            half_width,
            z_near,
            z_far,
            height: config.agent.ground_height,
        }
    }

    /// Two independent uniform draws, one per axis.
    pub fn sample(&self, rng: &mut dyn RandomSource) -> Vec3 {
        let rx = rng.next_unit();
        let rz = rng.next_unit();
        let x = (rx * 2.0 - 1.0) * self.half_width;
        let z = self.z_near + (self.z_far - self.z_near) * rz;
        Vec3::new(x, self.height, z)
    }

    pub fn contains(&self, position: Vec3) -> bool {
        position.x.abs() <= self.half_width + 1e-4
            && position.z <= self.z_near + 1e-4
            && position.z >= self.z_far - 1e-4
    }
}

/// One-shot events from a single snake tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnakeEvents {
    pub ate_food: bool,
    pub died: bool,
    pub respawned: bool,
}

#[derive(Debug, Clone)]
pub struct Snake {
    config: AgentConfig,
    food_bounds: FoodBounds,
    state: AgentState,
    trail: TrailBuffer,
    body: Vec<Vec3>,
    food: Food,
}

impl Snake {
    /// Snake at the start pose with one food item already placed.
    pub fn new(config: AgentConfig, food_bounds: FoodBounds, rng: &mut dyn RandomSource) -> Self {
        let mut snake = Self {
            state: AgentState::at_rest(config.start_pose()),
            config,
            food_bounds,
            trail: TrailBuffer::new(),
            body: Vec::new(),
            food: Food::default(),
        };
        snake.reset(rng);
        snake
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn body(&self) -> &[Vec3] {
        &self.body
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn food_bounds(&self) -> &FoodBounds {
        &self.food_bounds
    }

    pub fn start_pose(&self) -> Vec3 {
        self.config.start_pose()
    }

    /// Squash fraction for the renderer: 0 while alive, rising to 1 over the
    /// squash duration once dying.
    pub fn death_progress(&self) -> f32 {
        match self.state.lifecycle {
            Lifecycle::Alive => 0.0,
            Lifecycle::Dying { elapsed } => {
                (elapsed / self.config.squash_duration_secs).clamp(0.0, 1.0)
            }
        }
    }

    /// Advance the snake by one tick
    pub fn tick(
        &mut self,
        input: PlayerInput,
        grid: &GridField<'_>,
        rng: &mut dyn RandomSource,
        dt: f32,
    ) -> SnakeEvents {
        match self.state.lifecycle {
            Lifecycle::Alive => self.tick_alive(input, grid, rng, dt),
            Lifecycle::Dying { elapsed } => self.tick_dying(elapsed + dt, rng),
        }
    }

    fn tick_alive(
        &mut self,
        input: PlayerInput,
        grid: &GridField<'_>,
        rng: &mut dyn RandomSource,
        dt: f32,
    ) -> SnakeEvents {
        let mut events = SnakeEvents::default();

        // 1. Integrate velocity
        let velocity =
            physics::integrate_velocity(self.state.velocity, input.direction, &self.config, dt);

        // 2. Propose the next position on the ground plane
        let proposed =
            physics::propose_position(self.state.position, velocity, self.config.ground_height, dt);

        // 3. Collision against the grid field
        if grid.is_blocked_at(proposed) {
            self.state.lifecycle = Lifecycle::Dying { elapsed: 0.0 };
            info!(
                "Snake hit an obstacle at ({:.2}, {:.2}) with {} segments",
                proposed.x,
                proposed.z,
                self.body.len()
            );
            events.died = true;
            return events;
        }

        // 4. Commit and sample the trail
        let moved = (proposed - self.state.position).length();
        self.state.position = proposed;
        self.state.velocity = velocity;
        self.trail.record(
            moved,
            proposed,
            self.config.trail_sample_spacing,
            self.body.len(),
        );

        // 5. Body follows the trail
        self.trail
            .place_segments(&mut self.body, proposed, self.config.segment_spacing);

        // 6. Food pickup
        if self.food.active
            && (proposed - self.food.position).length() < self.config.food_pickup_radius
        {
            self.grow();
            self.food.active = false;
            self.spawn_food(rng);
            events.ate_food = true;
        }

        events
    }

    fn tick_dying(&mut self, elapsed: f32, rng: &mut dyn RandomSource) -> SnakeEvents {
        if elapsed > self.config.death_duration_secs {
            self.reset(rng);
            return SnakeEvents {
                respawned: true,
                ..SnakeEvents::default()
            };
        }

        self.state.lifecycle = Lifecycle::Dying { elapsed };
        SnakeEvents::default()
    }

    /// Append one segment at the tail, or at the head if there is no body yet.
    fn grow(&mut self) {
        let tail = self.body.last().copied().unwrap_or(self.state.position);
        self.body.push(tail);
        info!("Snake ate food, length now {}", self.body.len());
    }

    /// Back to the start pose: alive, at rest, no body, empty trail, fresh food.
    pub fn reset(&mut self, rng: &mut dyn RandomSource) {
        self.state = AgentState::at_rest(self.config.start_pose());
        self.body.clear();
        self.trail.clear();
        self.spawn_food(rng);
        debug!("Snake reset to start pose");
    }

    /// Place the single food item at a new position inside the food bounds.
    pub fn spawn_food(&mut self, rng: &mut dyn RandomSource) {
        self.food = Food {
            position: self.food_bounds.sample(rng),
            active: true,
        };
        debug!(
            "Food spawned at ({:.2}, {:.2})",
            self.food.position.x, self.food.position.z
        );
    }

    /// Drop gameplay state for a showcase scene: alive at the start pose,
    /// no body, no food.
    pub fn clear_for_showcase(&mut self) {
        self.state = AgentState::at_rest(self.config.start_pose());
        self.body.clear();
        self.trail.clear();
        self.food.active = false;
    }
}
