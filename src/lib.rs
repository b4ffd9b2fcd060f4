pub mod autopilot;
pub mod camera;
pub mod config;
pub mod data;
pub mod grid;
pub mod physics;
pub mod procgen;
pub mod rng;
pub mod snake;
pub mod snapshot;
pub mod trail;
pub mod world;
