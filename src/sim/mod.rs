//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, integer pixels
//! - Stable iteration order (brick creation order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bricks;
pub mod paddle;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use ball::{BallUpdate, Contact, PaddleIntent, update_ball};
pub use bricks::{BrickScan, resolve_bricks};
pub use paddle::update_paddle;
pub use rect::Rect;
pub use snapshot::{BrickView, EndImage, RenderSnapshot};
pub use state::{
    Ball, Brick, BrickField, BrickTier, GameEvent, GamePhase, GameState, Outcome, Paddle,
};
pub use tick::{TickInput, tick};
