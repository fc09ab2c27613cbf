//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::Rect;

/// Playfield pixel to normalized device coordinates (y up)
pub fn to_ndc(x: i32, y: i32) -> [f32; 2] {
    [
        x as f32 / FIELD_WIDTH as f32 * 2.0 - 1.0,
        1.0 - y as f32 / FIELD_HEIGHT as f32 * 2.0,
    ]
}

/// Two triangles covering a playfield rectangle
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let [x0, y0] = to_ndc(rect.left(), rect.top());
    let [x1, y1] = to_ndc(rect.right(), rect.bottom());

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Color for a brick tier, wrapping if the grid ever grows more rows
pub fn tier_color(tier: u8) -> [f32; 4] {
    let tiers = &super::vertex::colors::BRICK_TIERS;
    tiers[tier as usize % tiers.len()]
}
