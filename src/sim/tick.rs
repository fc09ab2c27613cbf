//! Fixed timestep simulation tick
//!
//! Order per tick: pause/start transitions, paddle, ball, brick field.

use super::ball::{Contact, PaddleIntent, update_ball};
use super::bricks::resolve_bricks;
use super::paddle::update_paddle;
use super::state::{GameEvent, GameState, Outcome};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left key held
    pub move_left: bool,
    /// Right key held
    pub move_right: bool,
    /// Pause key went down since the last tick
    pub pause: bool,
    /// A non-pause key was released since the last tick
    pub start: bool,
}

impl TickInput {
    fn paddle_intent(&self) -> PaddleIntent {
        PaddleIntent {
            left: self.move_left,
            right: self.move_right,
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Pausing also clears a finished round's `over` flag, but nothing else
    if input.pause && state.started {
        state.started = false;
        state.over = false;
        log::info!("Paused");
        events.push(GameEvent::Paused);
        return events;
    }

    if input.start && !state.started {
        state.started = true;
        log::info!("Playing ({} lives)", state.lives);
        events.push(GameEvent::Started);
    }

    if !state.is_playing() {
        return events;
    }

    state.ticks += 1;
    log::trace!("tick {}", state.ticks);

    update_paddle(&mut state.paddle, input.move_left, input.move_right);

    let update = update_ball(
        &mut state.ball,
        &state.paddle,
        input.paddle_intent(),
        &mut state.lives,
    );
    if update.wall_bounce {
        events.push(GameEvent::WallBounce);
    }
    match update.contact {
        Contact::None => {}
        Contact::PaddleHit => events.push(GameEvent::PaddleHit),
        Contact::TopBounce => events.push(GameEvent::TopBounce),
        Contact::Miss { lives_left } => {
            state.paddle.recenter();
            log::debug!("Ball lost, {} lives left", lives_left);
            events.push(GameEvent::BallLost { lives_left });
            if lives_left == 0 {
                state.over = true;
                state.outcome = Some(Outcome::Lost);
                log::info!("Game over: lost after {} ticks", state.ticks);
                events.push(GameEvent::Lost);
                return events;
            }
        }
    }

    let scan = resolve_bricks(state.bricks.as_mut_slice(), &mut state.ball);
    if let Some(index) = scan.destroyed {
        let tier = state.bricks.as_slice()[index].tier;
        events.push(GameEvent::BrickDestroyed { index, tier });
    }
    if scan.cleared() {
        state.over = true;
        state.outcome = Some(Outcome::Won);
        log::info!("Game over: won after {} ticks", state.ticks);
        events.push(GameEvent::Won);
    }

    events
}

impl GameState {
    /// Run one tick with the given input
    pub fn advance(&mut self, input: &TickInput) -> Vec<GameEvent> {
        tick(self, input)
    }
}
