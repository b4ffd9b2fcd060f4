//! L-system plant generator
//!
//! A bush grammar over `{F, X, +, -, [, ]}` is expanded by whole-string
//! rewriting and then read by a turtle that stacks unit-width segments:
//! - `F` emits a trunk segment and climbs by one segment height
//! - `X` emits a leaf segment in place
//! - `+` / `-` shift the turtle along X
//! - `[` / `]` save and restore the turtle; an unmatched `]` is ignored

use crate::config::PlantConfig;
use crate::data::{ObstacleInstance, LEAF_COLOR, TRUNK_COLOR};
use glam::Vec3;

pub const BUSH_AXIOM: &str = "X";

/// Rewrite rules of the bush grammar. Symbols without a rule pass through.
pub fn bush_rule(symbol: char) -> Option<&'static str> {
    match symbol {
        'X' => Some("F[+X]F[-X]FX"),
        'F' => Some("FF"),
        _ => None,
    }
}

/// Rewrite the entire string `iterations` times.
pub fn expand(axiom: &str, iterations: u32) -> String {
    let mut current = axiom.to_string();
    for _ in 0..iterations {
        let mut next = String::with_capacity(current.len() * 3);
        for symbol in current.chars() {
            match bush_rule(symbol) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(symbol),
            }
        }
        current = next;
    }
    current
}

/// Parameters for one plant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantParams {
    pub base_x: f32,
    pub base_z: f32,
    /// Height of the turtle's starting point.
    pub base_height: f32,
    pub iterations: u32,
    pub segment_height: f32,
    pub horizontal_step: f32,
}

impl PlantParams {
    /// Plant at `(base_x, base_z)` with the configured shape.
    pub fn from_config(config: &PlantConfig, base_x: f32, base_z: f32) -> Self {
        Self {
            base_x,
            base_z,
            base_height: config.base_height,
            iterations: config.iterations,
            segment_height: config.segment_height,
            horizontal_step: config.horizontal_step,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Turtle {
    pos: Vec3,
}

/// Expand the bush grammar and interpret it into geometry.
pub fn generate_plant(params: &PlantParams) -> Vec<ObstacleInstance> {
    let commands = expand(BUSH_AXIOM, params.iterations);
    interpret(&commands, params)
}

/// Walk a command string with the turtle, emitting one segment per `F` or `X`.
pub fn interpret(commands: &str, params: &PlantParams) -> Vec<ObstacleInstance> {
    let seg_h = params.segment_height;
    let mut turtle = Turtle {
        pos: Vec3::new(params.base_x, params.base_height, params.base_z),
    };
    let mut stack: Vec<Turtle> = Vec::new();
    let mut segments = Vec::new();

    for symbol in commands.chars() {
        match symbol {
            'F' => {
                segments.push(ObstacleInstance::segment(turtle.pos, seg_h, TRUNK_COLOR));
                turtle.pos.y += seg_h;
            }
            'X' => {
                segments.push(ObstacleInstance::segment(turtle.pos, seg_h, LEAF_COLOR));
            }
            '+' => turtle.pos.x += params.horizontal_step,
            '-' => turtle.pos.x -= params.horizontal_step,
            '[' => stack.push(turtle),
            ']' => {
                if let Some(saved) = stack.pop() {
                    turtle = saved;
                }
            }
            _ => {}
        }
    }

    segments
}
