//! Brick Breaker - a single-screen paddle and ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, bricks, game state)
//! - `input`: Key events to per-tick intents
//! - `host`: Fixed-timestep driver and the renderer seam
//! - `renderer`: CPU-side quad batches built from render snapshots
//! - `autopilot`: Demo mode that plays the game
//! - `settings`: Host configuration

pub mod autopilot;
pub mod error;
pub mod host;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SimError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (~60 Hz)
    pub const FRAME_DELAY_MS: u64 = 16;
    /// Maximum ticks to run per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const FIELD_WIDTH: i32 = 1280;
    pub const FIELD_HEIGHT: i32 = 720;

    /// Paddle defaults - horizontal only, fixed row near the bottom
    pub const PADDLE_WIDTH: i32 = 125;
    pub const PADDLE_HEIGHT: i32 = 25;
    pub const PADDLE_Y: i32 = 620;
    /// Pixels per tick
    pub const PADDLE_STEP: i32 = 8;

    /// Ball defaults (square)
    pub const BALL_SIZE: i32 = 15;
    /// Pixels per tick on each axis
    pub const BALL_STEP: i32 = 4;

    /// Brick grid
    pub const BRICK_WIDTH: i32 = 125;
    pub const BRICK_HEIGHT: i32 = 30;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 8;
    pub const BRICK_COUNT: usize = BRICK_ROWS * BRICK_COLUMNS;
    pub const BRICK_GAP: i32 = 10;
    pub const BRICK_ROW_PITCH: i32 = 40;
    pub const BRICK_TOP: i32 = 50;
    pub const BRICK_LEFT: i32 =
        (FIELD_WIDTH - (BRICK_COLUMNS as i32 * BRICK_WIDTH + (BRICK_COLUMNS as i32 - 1) * BRICK_GAP)) / 2;

    pub const STARTING_LIVES: u8 = 3;
}
