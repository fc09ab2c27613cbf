use brick_breaker::consts::*;
use brick_breaker::sim::*;

fn playing(state: &mut GameState) {
    state.started = true;
}

#[test]
fn test_paddle_return_flips_ball_up() {
    // Paddle raised so its band contains the ball's bottom edge after one step
    let paddle = Paddle { x: 577, y: 695 };
    let mut ball = Ball::at(630, 700);
    ball.set_vertical(false);
    let mut state = GameState::from_parts(paddle, ball, BrickField::standard(), 3).unwrap();
    playing(&mut state);

    let events = state.advance(&TickInput::default());
    assert!(events.contains(&GameEvent::PaddleHit));
    assert!(state.ball.moving_up);
    assert!(!state.ball.moving_down);
    assert_eq!(state.lives, 3);
}

#[test]
fn test_left_wall_bounce() {
    let mut ball = Ball::at(0, 300);
    ball.set_horizontal(true);
    let mut state = GameState::from_parts(Paddle::default(), ball, BrickField::standard(), 3).unwrap();
    playing(&mut state);

    let events = state.advance(&TickInput::default());
    assert!(events.contains(&GameEvent::WallBounce));
    assert!(state.ball.moving_right);
    assert!(!state.ball.moving_left);
    assert!(state.ball.pos.x >= 0);
}

#[test]
fn test_all_bricks_hit_wins_within_one_tick() {
    for (x, y) in [(0, 0), (633, 360), (1265, 705), (200, 120)] {
        let mut bricks = BrickField::standard();
        bricks.clear_all();
        let mut state = GameState::from_parts(Paddle::default(), Ball::at(x, y), bricks, 3).unwrap();
        playing(&mut state);

        let events = state.advance(&TickInput::default());
        assert!(events.contains(&GameEvent::Won), "ball at ({x}, {y})");
        assert_eq!(state.outcome, Some(Outcome::Won));
        assert_eq!(state.phase(), GamePhase::Over);
    }
}

#[test]
fn test_last_life_lost_resets_positions() {
    let paddle = Paddle { x: 900, y: PADDLE_Y };
    let mut ball = Ball::at(100, FIELD_HEIGHT - BALL_SIZE);
    ball.set_vertical(false);
    let mut state = GameState::from_parts(paddle, ball, BrickField::standard(), 1).unwrap();
    playing(&mut state);

    state.advance(&TickInput::default());
    assert_eq!(state.lives, 0);
    assert_eq!(state.outcome, Some(Outcome::Lost));
    assert!(state.over);
    assert_eq!(state.ball.pos, Ball::center());
    assert_eq!(state.paddle, Paddle::default());

    let snap = state.snapshot();
    assert_eq!(snap.end_image(), Some(EndImage::Lose));
}

#[test]
fn test_round_trip_through_pause_and_reset() {
    let mut state = GameState::new();
    let start = TickInput {
        start: true,
        ..Default::default()
    };
    let pause = TickInput {
        pause: true,
        ..Default::default()
    };

    state.advance(&start);
    state.bricks.clear_all();
    state.advance(&TickInput::default());
    assert_eq!(state.outcome, Some(Outcome::Won));

    // Pausing out of a finished round only hides the end screen
    state.advance(&pause);
    assert_eq!(state.phase(), GamePhase::Idle);
    assert_eq!(state.bricks.remaining(), 0);

    state.reset();
    assert_eq!(state.bricks.remaining(), BRICK_COUNT);
    assert_eq!(state.lives, STARTING_LIVES);
    assert_eq!(state.outcome, None);
}

#[test]
fn test_real_brick_gets_destroyed_from_start() {
    // Straight up from the serve position eventually reaches the bottom row
    let mut state = GameState::new();
    let mut destroyed = None;
    for _ in 0..200 {
        let input = TickInput {
            start: !state.started,
            ..Default::default()
        };
        for event in state.advance(&input) {
            if let GameEvent::BrickDestroyed { index, tier } = event {
                destroyed = Some((index, tier));
            }
        }
        if destroyed.is_some() {
            break;
        }
    }
    let (index, tier) = destroyed.expect("ball should reach the grid");
    assert!(state.bricks.as_slice()[index].hit);
    assert_eq!(tier, BrickTier(4));
    assert!(state.ball.moving_down);
}
