use crate::config::CameraConfig;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera that trails the snake at a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FollowCamera {
    pub position: Vec3,
    pub look: Vec3,
    pub up: Vec3,
    /// Camera position relative to the snake head.
    pub offset: Vec3,
    pub follow: bool,
}

impl FollowCamera {
    /// Camera at its configured position; the offset is measured from `target`.
    pub fn new(config: &CameraConfig, target: Vec3) -> Self {
        let position = config.position();
        let offset = position - target;
        Self {
            position,
            look: (target - position).normalize_or_zero(),
            up: Vec3::Y,
            offset,
            follow: config.follow,
        }
    }

    /// Re-center on `target` when following; otherwise stay put.
    pub fn update(&mut self, target: Vec3) {
        if !self.follow {
            return;
        }
        self.position = target + self.offset;
        self.look = (-self.offset).normalize_or_zero();
        self.up = Vec3::Y;
    }

    /// Park the camera at a fixed viewpoint and stop following.
    pub fn park(&mut self, position: Vec3, target: Vec3) {
        self.follow = false;
        self.position = position;
        self.look = (target - position).normalize_or_zero();
        self.up = Vec3::Y;
    }
}
