//! Rigid-body integration for the snake head
//!
//! One body, no rotation, forces on the XZ plane only:
//! - Input force along the selected direction
//! - Linear friction opposing the velocity
//! - Speed clamp that preserves direction
//! - Height pinned to the ground plane

use crate::config::AgentConfig;
use glam::Vec3;

/// Net force from the input direction and friction.
pub fn net_force(direction: Vec3, velocity: Vec3, config: &AgentConfig) -> Vec3 {
    let input = direction * config.force_magnitude;
    let friction = -velocity * config.friction;
    input + friction
}

/// Scale `velocity` down to `max_speed` if it is faster. Direction is kept.
pub fn clamp_speed(velocity: Vec3, max_speed: f32) -> Vec3 {
    let speed = velocity.length();
    if speed > max_speed && speed > 0.0 {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}

/// Integrate one step of velocity: `v + (F / m) * dt`, then clamp.
pub fn integrate_velocity(velocity: Vec3, direction: Vec3, config: &AgentConfig, dt: f32) -> Vec3 {
    let accel = net_force(direction, velocity, config) / config.mass;
    clamp_speed(velocity + accel * dt, config.max_speed)
}

/// Next position from the integrated velocity, pinned to the ground height.
pub fn propose_position(position: Vec3, velocity: Vec3, ground_height: f32, dt: f32) -> Vec3 {
    let mut proposed = position + velocity * dt;
    proposed.y = ground_height;
    proposed
}
