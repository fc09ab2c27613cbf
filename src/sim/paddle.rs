//! Paddle controller: held-direction intents to a bounded x position

use super::state::Paddle;
use crate::consts::{FIELD_WIDTH, PADDLE_STEP, PADDLE_WIDTH};

/// Move the paddle one tick. Both intents may apply in the same tick.
pub fn update_paddle(paddle: &mut Paddle, move_left: bool, move_right: bool) {
    if move_left && paddle.x > 0 {
        paddle.x -= PADDLE_STEP;
    }
    if move_right && paddle.x + PADDLE_WIDTH < FIELD_WIDTH {
        paddle.x += PADDLE_STEP;
    }

    if paddle.x + PADDLE_WIDTH >= FIELD_WIDTH {
        paddle.x = FIELD_WIDTH - PADDLE_WIDTH;
    }
    if paddle.x < 0 {
        paddle.x = 0;
    }
}
