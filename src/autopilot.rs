//! Demo mode: produces inputs that keep the paddle under the ball

use crate::consts::{PADDLE_STEP, PADDLE_WIDTH, PADDLE_Y};
use crate::sim::{GamePhase, GameState, TickInput};

/// Don't chase the ball closer than one paddle step (doubled units)
const DEAD_ZONE: i32 = PADDLE_STEP * 2;

/// Ticks between changes of the aiming offset
const AIM_PERIOD: u64 = 240;

/// Distance above the paddle inside which a descending ball is tracked dead-on
const NEAR_ZONE: i32 = 150;

/// Inputs the autopilot would press this tick
pub fn autopilot_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    match state.phase() {
        GamePhase::Idle => input.start = true,
        GamePhase::Over => {}
        GamePhase::Playing => {
            // Aim off-center while the ball is far away, dead-on once it is
            // coming down at the paddle
            let incoming = state.ball.moving_down && state.ball.bottom() > PADDLE_Y - NEAR_ZONE;
            let offset = if incoming {
                0
            } else {
                let slot = ((state.ticks / AIM_PERIOD) % 5) as i32 - 2;
                slot * PADDLE_WIDTH / 3
            };

            let ball_cx = state.ball.rect().center2().x;
            let paddle_cx = state.paddle.rect().center2().x + offset;
            let diff = ball_cx - paddle_cx;
            if diff < -DEAD_ZONE {
                input.move_left = true;
            } else if diff > DEAD_ZONE {
                input.move_right = true;
            }
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Ball, Outcome, tick};

    #[test]
    fn test_starts_idle_game() {
        let state = GameState::new();
        assert!(autopilot_input(&state).start);
    }

    #[test]
    fn test_chases_ball() {
        let mut state = GameState::new();
        state.started = true;
        state.ball = Ball::at(50, 400);
        let input = autopilot_input(&state);
        assert!(input.move_left && !input.move_right);

        state.ball = Ball::at(1200, 400);
        let input = autopilot_input(&state);
        assert!(input.move_right && !input.move_left);
    }

    #[test]
    fn test_idle_when_over() {
        let mut state = GameState::new();
        state.started = true;
        state.over = true;
        state.outcome = Some(Outcome::Won);
        assert_eq!(autopilot_input(&state), TickInput::default());
    }

    #[test]
    fn test_never_misses() {
        let mut state = GameState::new();
        for _ in 0..20_000 {
            let input = autopilot_input(&state);
            tick(&mut state, &input);
            if state.over {
                break;
            }
        }
        assert_eq!(state.lives, 3);
    }
}
