//! Computer-controlled input for headless runs.
//!
//! The autopilot produces the same single unit direction a human input layer
//! would, so the world cannot tell the two apart.
//!
//! ## Layers
//! 1. Planning: pick a waypoint. Food beyond the front wall is reached
//!    through the door corridor; while the door is still closed the snake
//!    parks inside the corridor and waits.
//! 2. Low-level control: axis-aligned push toward the waypoint, X first,
//!    cutting the input once friction alone would carry the head the rest of
//!    the way.

use crate::data::PlayerInput;
use crate::world::WorldController;
use glam::Vec3;

/// Rows inside the front wall where the snake waits for the door.
const DOOR_WAIT_DEPTH: f32 = 3.0;

/// Rows past the front wall the snake aims for when walking through the door.
const DOOR_EXIT_DEPTH: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Per-axis distance treated as "arrived".
    pub tolerance: f32,
    /// X misalignment above which Z movement is held back.
    pub lane_tolerance: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            tolerance: 0.15,
            lane_tolerance: 0.3,
        }
    }
}

impl Autopilot {
    pub fn new(tolerance: f32, lane_tolerance: f32) -> Self {
        Self {
            tolerance,
            lane_tolerance: lane_tolerance.max(tolerance),
        }
    }

    /// Input for the next tick.
    pub fn steer(&self, world: &WorldController) -> PlayerInput {
        let snake = world.snake();
        if world.scene().is_showcase() || !snake.state().is_alive() || !snake.food().active {
            return PlayerInput::NONE;
        }

        let position = snake.position();
        let velocity = snake.state().velocity;
        let target = self.waypoint(world);

        let agent = &world.config().agent;
        let coast_time = agent.mass / agent.friction.max(f32::EPSILON);

        let dx = target.x - position.x;
        let x_push = self.axis_push(dx, velocity.x, coast_time);
        if x_push != 0.0 {
            return PlayerInput::toward(Vec3::new(x_push, 0.0, 0.0));
        }
        if dx.abs() > self.lane_tolerance {
            // still drifting onto the lane
            return PlayerInput::NONE;
        }

        let z_push = self.axis_push(target.z - position.z, velocity.z, coast_time);
        PlayerInput::toward(Vec3::new(0.0, 0.0, z_push))
    }

    /// Where the head should go next.
    pub fn waypoint(&self, world: &WorldController) -> Vec3 {
        let snake = world.snake();
        let position = snake.position();
        let food = snake.food().position;
        let ground = world.config().agent.ground_height;
        let door_z = -(world.config().arena.half_extent as f32);

        let food_outside = food.z < door_z;
        let still_inside = position.z > door_z - 0.5;

        if food_outside && still_inside {
            if world.door().is_open() {
                return Vec3::new(0.0, ground, door_z - DOOR_EXIT_DEPTH);
            }
            return Vec3::new(0.0, ground, door_z + DOOR_WAIT_DEPTH);
        }

        food
    }

    /// -1, 0 or 1 along one axis
    ///
    /// Zero once within tolerance, or when moving toward the target fast
    /// enough that friction alone stops the head near it.
    fn axis_push(&self, delta: f32, velocity: f32, coast_time: f32) -> f32 {
        if delta.abs() <= self.tolerance {
            return 0.0;
        }
        let closing = velocity.signum() == delta.signum() && velocity != 0.0;
        if closing && delta.abs() <= velocity.abs() * coast_time {
            return 0.0;
        }
        delta.signum()
    }
}
