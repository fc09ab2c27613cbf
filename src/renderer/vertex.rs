//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (normalized device coordinates) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const PADDLE: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const LIFE: [f32; 4] = [0.9, 0.3, 0.3, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// Brick colors by row tier, top row first
    pub const BRICK_TIERS: [[f32; 4]; 5] = [
        [1.0, 0.3, 0.3, 1.0],
        [1.0, 0.6, 0.2, 1.0],
        [0.95, 0.85, 0.3, 1.0],
        [0.4, 0.8, 0.4, 1.0],
        [0.4, 0.7, 1.0, 1.0],
    ];
}
