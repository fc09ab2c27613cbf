//! Read-only frame view handed to the presentation layer

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{BrickTier, GameState, Outcome};

/// End-of-round image, referenced by logical name only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndImage {
    Win,
    Lose,
}

impl EndImage {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndImage::Win => "win",
            EndImage::Lose => "lose",
        }
    }
}

impl From<Outcome> for EndImage {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => EndImage::Win,
            Outcome::Lost => EndImage::Lose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickView {
    pub rect: Rect,
    pub tier: BrickTier,
    pub hit: bool,
}

/// Everything a renderer needs to paint one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub paddle: Rect,
    pub ball: Rect,
    pub bricks: Vec<BrickView>,
    pub lives: u8,
    pub started: bool,
    pub over: bool,
    pub outcome: Option<Outcome>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            paddle: state.paddle.rect(),
            ball: state.ball.rect(),
            bricks: state
                .bricks
                .iter()
                .map(|b| BrickView {
                    rect: b.rect,
                    tier: b.tier,
                    hit: b.hit,
                })
                .collect(),
            lives: state.lives,
            started: state.started,
            over: state.over,
            outcome: state.outcome,
        }
    }

    /// Bricks still standing, in creation order
    pub fn active_bricks(&self) -> impl Iterator<Item = &BrickView> {
        self.bricks.iter().filter(|b| !b.hit)
    }

    /// Image to show while the round is over
    pub fn end_image(&self) -> Option<EndImage> {
        if self.over {
            self.outcome.map(EndImage::from)
        } else {
            None
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl GameState {
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }
}
