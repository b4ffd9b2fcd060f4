//! Renderer-facing view of the world after a tick.

use crate::camera::FollowCamera;
use crate::data::{Food, ObstacleInstance, SessionId};
use crate::procgen::ScenePreset;
use crate::world::WorldController;
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub position: Vec3,
    pub velocity: Vec3,
    pub alive: bool,
    /// 0 while alive, rising to 1 over the squash animation.
    pub death_progress: f32,
}

/// Everything a renderer needs for one frame. Removed obstacles are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub session_id: SessionId,
    pub tick: u64,
    pub scene: ScenePreset,
    pub obstacles: Vec<ObstacleInstance>,
    pub agent: AgentView,
    pub body: Vec<Vec3>,
    pub food: Food,
    pub door_open: bool,
    pub camera: FollowCamera,
}

impl From<&WorldController> for WorldSnapshot {
    fn from(world: &WorldController) -> Self {
        let snake = world.snake();
        let state = snake.state();

        Self {
            session_id: world.session_id(),
            tick: world.tick_count(),
            scene: world.scene(),
            obstacles: world
                .obstacles()
                .iter()
                .filter(|o| o.is_active())
                .copied()
                .collect(),
            agent: AgentView {
                position: state.position,
                velocity: state.velocity,
                alive: state.is_alive(),
                death_progress: snake.death_progress(),
            },
            body: snake.body().to_vec(),
            food: *snake.food(),
            door_open: world.door().is_open(),
            camera: *world.camera(),
        }
    }
}
