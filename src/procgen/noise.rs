//! Coordinate-keyed pseudo-randomness and smooth height noise for the arena
//!
//! Both functions are pure: the same grid cell always yields the same value,
//! which keeps world layouts reproducible across runs without carrying any
//! generator state.

/// Sine hash of an integer grid cell, in `[0, 1]`.
pub fn hash01(gx: i32, gz: i32) -> f32 {
    let v = (gx as f32 * 12.9898 + gz as f32 * 78.233).sin() * 43758.5453;
    v - v.floor()
}

/// Smooth trig height field at a grid cell, remapped to `[0, 1]`.
///
/// # Arguments
/// * `gx`, `gz` - Grid cell
/// * `frequency` - Scale applied to the cell coordinates before sampling
pub fn height_field(gx: i32, gz: i32, frequency: f32) -> f32 {
    let nx = gx as f32 * frequency;
    let nz = gz as f32 * frequency;
    let n = 0.5 * nx.sin() + 0.5 * nz.cos();
    0.5 * (n + 1.0)
}
