//! CPU-side frame building
//!
//! Turns a `RenderSnapshot` into a flat list of colored triangles ready to
//! upload to a vertex buffer (`bytemuck::cast_slice`). Window, surface and
//! image loading stay with the host.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::consts::{BALL_SIZE, FIELD_HEIGHT};
use crate::host::Renderer;
use crate::sim::{EndImage, Rect, RenderSnapshot};

/// One frame's geometry plus the overlay the host should draw on top
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameBatch {
    pub vertices: Vec<Vertex>,
    pub clear_color: [f32; 4],
    /// End image to overlay, by logical name
    pub end_image: Option<EndImage>,
}

impl FrameBatch {
    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }
}

/// Build the triangles for one frame. Hit bricks produce nothing.
pub fn build_frame(snapshot: &RenderSnapshot) -> FrameBatch {
    let mut vertices = Vec::with_capacity((snapshot.bricks.len() + 2 + snapshot.lives as usize) * 6);

    for brick in snapshot.active_bricks() {
        vertices.extend(shapes::quad(&brick.rect, shapes::tier_color(brick.tier.0)));
    }
    vertices.extend(shapes::quad(&snapshot.paddle, colors::PADDLE));
    vertices.extend(shapes::quad(&snapshot.ball, colors::BALL));

    // Lives as small squares in the bottom-left corner
    for i in 0..snapshot.lives as i32 {
        let pip = Rect::new(10 + i * (BALL_SIZE + 5), FIELD_HEIGHT - BALL_SIZE - 10, BALL_SIZE, BALL_SIZE);
        vertices.extend(shapes::quad(&pip, colors::LIFE));
    }

    FrameBatch {
        vertices,
        clear_color: colors::BACKGROUND,
        end_image: snapshot.end_image(),
    }
}

/// Renderer that keeps the latest batch for the host to upload
#[derive(Debug, Default)]
pub struct BatchRenderer {
    pub batch: FrameBatch,
    pub frames: u64,
}

impl Renderer for BatchRenderer {
    fn present(&mut self, snapshot: &RenderSnapshot) {
        self.batch = build_frame(snapshot);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Outcome};

    #[test]
    fn test_full_grid_frame() {
        let batch = build_frame(&GameState::new().snapshot());
        // 40 bricks + paddle + ball + 3 lives
        assert_eq!(batch.quad_count(), 45);
        assert_eq!(batch.as_bytes().len(), batch.vertices.len() * std::mem::size_of::<Vertex>());
        assert_eq!(batch.end_image, None);
    }

    #[test]
    fn test_hit_bricks_not_drawn() {
        let mut state = GameState::new();
        state.bricks.clear_all();
        state.over = true;
        state.outcome = Some(Outcome::Won);
        let batch = build_frame(&state.snapshot());
        assert_eq!(batch.quad_count(), 5);
        assert_eq!(batch.end_image, Some(EndImage::Win));
    }

    #[test]
    fn test_batch_renderer_tracks_frames() {
        let mut renderer = BatchRenderer::default();
        renderer.present(&GameState::new().snapshot());
        renderer.present(&GameState::new().snapshot());
        assert_eq!(renderer.frames, 2);
        assert_eq!(renderer.batch.quad_count(), 45);
    }
}
