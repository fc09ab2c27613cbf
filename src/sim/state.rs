//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one owned `GameState`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::error::SimError;

/// Current phase of gameplay, derived from the `started`/`over` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first key release (or paused)
    Idle,
    /// Active gameplay
    Playing,
    /// Round ended, end image shown
    Over,
}

/// Terminal result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Something observable that happened during a tick (for sound/flash hooks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    PaddleHit,
    /// Ball flipped direction against a side wall
    WallBounce,
    TopBounce,
    BallLost { lives_left: u8 },
    BrickDestroyed { index: usize, tier: BrickTier },
    Won,
    Lost,
}

/// The player's paddle (horizontal movement only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (FIELD_WIDTH - PADDLE_WIDTH) / 2,
            y: PADDLE_Y,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Move back to the starting column
    pub fn recenter(&mut self) {
        self.x = Paddle::default().x;
    }
}

/// The ball. Direction is four independent flags rather than a velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub moving_left: bool,
    pub moving_right: bool,
    pub moving_up: bool,
    pub moving_down: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Ball::center(),
            moving_left: false,
            moving_right: true,
            moving_up: true,
            moving_down: false,
        }
    }
}

impl Ball {
    /// Top-left corner that puts the ball in the middle of the field
    pub const fn center() -> IVec2 {
        IVec2::new(FIELD_WIDTH / 2 - BALL_SIZE / 2, FIELD_HEIGHT / 2)
    }

    pub fn at(x: i32, y: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            ..Self::default()
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BALL_SIZE, BALL_SIZE)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + BALL_SIZE
    }

    /// Set the horizontal flags to exactly one direction
    pub fn set_horizontal(&mut self, left: bool) {
        self.moving_left = left;
        self.moving_right = !left;
    }

    /// Set the vertical flags to exactly one direction
    pub fn set_vertical(&mut self, up: bool) {
        self.moving_up = up;
        self.moving_down = !up;
    }

    /// Signed per-tick displacement implied by the flags
    pub fn velocity(&self) -> IVec2 {
        let dx = (self.moving_right as i32 - self.moving_left as i32) * BALL_STEP;
        let dy = (self.moving_down as i32 - self.moving_up as i32) * BALL_STEP;
        IVec2::new(dx, dy)
    }

    /// Back to the middle of the field, heading up
    pub fn recenter(&mut self) {
        self.pos = Ball::center();
        self.set_vertical(true);
    }
}

/// Row-based color tier (render only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrickTier(pub u8);

/// A brick. Never removed; `hit` marks it destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub tier: BrickTier,
    pub hit: bool,
}

impl Brick {
    pub fn new(x: i32, y: i32, tier: BrickTier) -> Self {
        Self {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            tier,
            hit: false,
        }
    }
}

/// The fixed 5 x 8 brick grid in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Brick>", into = "Vec<Brick>")]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl Default for BrickField {
    fn default() -> Self {
        Self::standard()
    }
}

impl BrickField {
    /// Standard layout: 5 rows of 8, centered, tier = row index
    pub fn standard() -> Self {
        let mut bricks = Vec::with_capacity(BRICK_COUNT);
        for row in 0..BRICK_ROWS {
            let y = BRICK_TOP + row as i32 * BRICK_ROW_PITCH;
            for col in 0..BRICK_COLUMNS {
                let x = BRICK_LEFT + col as i32 * (BRICK_WIDTH + BRICK_GAP);
                bricks.push(Brick::new(x, y, BrickTier(row as u8)));
            }
        }
        Self { bricks }
    }

    /// Build from an explicit brick list (row-major). Must be exactly 5 x 8,
    /// each row on one line ordered left to right, rows ordered top to
    /// bottom and tier = row index.
    pub fn from_bricks(bricks: Vec<Brick>) -> Result<Self, SimError> {
        if bricks.len() != BRICK_COUNT {
            return Err(SimError::MalformedGrid {
                expected: BRICK_COUNT,
                found: bricks.len(),
            });
        }
        let mut prev_y = None;
        for (row, line) in bricks.chunks(BRICK_COLUMNS).enumerate() {
            let y = line[0].rect.pos.y;
            let same_line = line.iter().all(|b| b.rect.pos.y == y);
            let ordered = line.windows(2).all(|w| w[0].rect.pos.x < w[1].rect.pos.x);
            let tiered = line.iter().all(|b| usize::from(b.tier.0) == row);
            let below = prev_y.is_none_or(|p| y > p);
            if !(same_line && ordered && tiered && below) {
                return Err(SimError::MalformedRow { row });
            }
            prev_y = Some(y);
        }
        if let Some(b) = bricks.iter().find(|b| !b.rect.within(FIELD_WIDTH, FIELD_HEIGHT)) {
            return Err(SimError::OutOfBounds {
                entity: "brick",
                x: b.rect.pos.x,
                y: b.rect.pos.y,
            });
        }
        Ok(Self { bricks })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Brick> {
        self.bricks.iter()
    }

    pub fn as_slice(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn as_mut_slice(&mut self) -> &mut [Brick] {
        &mut self.bricks
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Bricks not yet hit
    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.hit).count()
    }

    /// Mark every brick destroyed (test and debug helper)
    pub fn clear_all(&mut self) {
        for brick in &mut self.bricks {
            brick.hit = true;
        }
    }
}

impl TryFrom<Vec<Brick>> for BrickField {
    type Error = SimError;

    fn try_from(bricks: Vec<Brick>) -> Result<Self, SimError> {
        Self::from_bricks(bricks)
    }
}

impl From<BrickField> for Vec<Brick> {
    fn from(field: BrickField) -> Self {
        field.bricks
    }
}

/// Complete game state (deterministic, serializable). Not deserializable:
/// build one through `new`, `with_lives` or `from_parts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Set by the first non-pause key release, cleared by pause
    pub started: bool,
    /// Round has ended
    pub over: bool,
    /// Player lives
    pub lives: u8,
    /// Result of the round once `over` is first set
    pub outcome: Option<Outcome>,
    /// Simulated playing ticks
    pub ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh round: full grid, three lives, everything centered, Idle
    pub fn new() -> Self {
        Self {
            started: false,
            over: false,
            lives: STARTING_LIVES,
            outcome: None,
            ticks: 0,
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks: BrickField::standard(),
        }
    }

    /// Fresh round with a custom life count
    pub fn with_lives(lives: u8) -> Result<Self, SimError> {
        if lives == 0 {
            return Err(SimError::InvalidLives);
        }
        Ok(Self {
            lives,
            ..Self::new()
        })
    }

    /// Assemble a state from explicit parts, validating positions.
    ///
    /// The paddle must sit at least one ball height below the top so a
    /// paddle return can never leave the ball above the field.
    pub fn from_parts(
        paddle: Paddle,
        ball: Ball,
        bricks: BrickField,
        lives: u8,
    ) -> Result<Self, SimError> {
        if lives == 0 {
            return Err(SimError::InvalidLives);
        }
        if paddle.y < BALL_SIZE || !paddle.rect().within(FIELD_WIDTH, FIELD_HEIGHT) {
            return Err(SimError::OutOfBounds {
                entity: "paddle",
                x: paddle.x,
                y: paddle.y,
            });
        }
        if !ball.rect().within(FIELD_WIDTH, FIELD_HEIGHT) {
            return Err(SimError::OutOfBounds {
                entity: "ball",
                x: ball.pos.x,
                y: ball.pos.y,
            });
        }
        Ok(Self {
            paddle,
            ball,
            bricks,
            lives,
            ..Self::new()
        })
    }

    /// Start a brand new round, discarding all progress
    pub fn reset(&mut self) {
        log::info!("Resetting round");
        *self = Self::new();
    }

    pub fn phase(&self) -> GamePhase {
        if self.over {
            GamePhase::Over
        } else if self.started {
            GamePhase::Playing
        } else {
            GamePhase::Idle
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.started && !self.over
    }
}
