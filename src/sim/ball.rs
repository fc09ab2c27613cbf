//! Ball controller: stepping, wall bounces, paddle returns and misses
//!
//! Each axis is stepped independently by its direction flags. Both branches
//! of an axis are evaluated every tick, so the ball can flip and step in the
//! same tick at the left/top walls but only flips at the right/bottom walls.

use super::state::{Ball, Paddle};
use crate::consts::{BALL_SIZE, BALL_STEP, FIELD_HEIGHT, FIELD_WIDTH, PADDLE_HEIGHT};

/// Which way the player is steering the paddle this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub left: bool,
    pub right: bool,
}

/// The single contact resolved after stepping (at most one per tick)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    PaddleHit,
    /// Ball fell past the bottom edge and was recentered
    Miss { lives_left: u8 },
    TopBounce,
}

/// What the ball controller did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallUpdate {
    /// Horizontal direction flipped against a side wall
    pub wall_bounce: bool,
    pub contact: Contact,
}

/// Advance the ball one tick and resolve walls, paddle and misses.
///
/// `lives` is decremented (never below zero) when the ball is missed.
pub fn update_ball(ball: &mut Ball, paddle: &Paddle, intent: PaddleIntent, lives: &mut u8) -> BallUpdate {
    let was_left = ball.moving_left;
    let was_up = ball.moving_up;

    // Horizontal
    if ball.moving_left && ball.pos.x > 0 {
        ball.pos.x -= BALL_STEP;
    } else {
        ball.set_horizontal(false);
    }
    if ball.moving_right && ball.pos.x + BALL_SIZE < FIELD_WIDTH {
        ball.pos.x += BALL_STEP;
    } else {
        ball.set_horizontal(true);
    }

    // Vertical
    if ball.moving_up && ball.pos.y > 0 {
        ball.pos.y -= BALL_STEP;
    } else {
        ball.set_vertical(false);
    }
    if ball.moving_down && ball.pos.y + BALL_SIZE < FIELD_HEIGHT {
        ball.pos.y += BALL_STEP;
    } else {
        ball.set_vertical(true);
    }

    ball.pos.x = ball.pos.x.clamp(0, FIELD_WIDTH - BALL_SIZE);

    let wall_bounce = was_left != ball.moving_left;
    let contact = match resolve_contact(ball, paddle, intent, lives) {
        // Landed exactly on y = 0 and turned around during the vertical step
        Contact::None if was_up && ball.moving_down => Contact::TopBounce,
        contact => contact,
    };
    BallUpdate { wall_bounce, contact }
}

/// Paddle return takes priority over a miss, which takes priority over the
/// top wall.
fn resolve_contact(ball: &mut Ball, paddle: &Paddle, intent: PaddleIntent, lives: &mut u8) -> Contact {
    if hits_paddle(ball, paddle) {
        ball.set_vertical(true);
        if intent.left {
            ball.set_horizontal(true);
        }
        if intent.right {
            ball.set_horizontal(false);
        }
        return Contact::PaddleHit;
    }

    if ball.bottom() >= FIELD_HEIGHT {
        ball.recenter();
        *lives = lives.saturating_sub(1);
        return Contact::Miss { lives_left: *lives };
    }

    if ball.pos.y < 0 {
        ball.pos.y = 0;
        ball.set_vertical(false);
        return Contact::TopBounce;
    }

    Contact::None
}

/// Ball's bottom edge inside the paddle's vertical band and the horizontal
/// extents overlapping
pub fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let bottom = ball.bottom();
    bottom >= paddle.y
        && bottom <= paddle.y + PADDLE_HEIGHT
        && ball.rect().overlaps_x(&paddle.rect())
}
