//! Host-side game loop plumbing
//!
//! The simulation never draws. A host feeds key events into `Game`, calls
//! `frame` with the wall time since the last call, and a `Renderer`
//! receives the resulting snapshot.

use std::time::Duration;

use crate::autopilot::autopilot_input;
use crate::input::InputState;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, RenderSnapshot};

/// Presentation collaborator: paints one frame from a snapshot
pub trait Renderer {
    fn present(&mut self, snapshot: &RenderSnapshot);
}

/// Converts wall time into a whole number of fixed ticks
#[derive(Debug, Clone)]
pub struct FixedStepper {
    step: Duration,
    max_substeps: u32,
    accumulator: Duration,
}

impl FixedStepper {
    pub fn new(step: Duration, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps: max_substeps.max(1),
            accumulator: Duration::ZERO,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Duration::from_millis(settings.frame_delay_ms),
            settings.max_substeps,
        )
    }

    /// Add elapsed time and return how many ticks are due.
    ///
    /// At most `max_substeps` ticks are returned; any further backlog is
    /// dropped rather than carried into the next frame.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }

        if self.accumulator >= self.step {
            log::warn!(
                "Dropping {:?} of simulation backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    pub fn step(&self) -> Duration {
        self.step
    }
}

/// Game instance holding all state
pub struct Game<R: Renderer> {
    state: GameState,
    input: InputState,
    stepper: FixedStepper,
    renderer: R,
    autopilot: bool,
    /// The player paused; the autopilot waits for a real start
    player_paused: bool,
}

impl<R: Renderer> Game<R> {
    pub fn new(settings: &Settings, renderer: R) -> Self {
        Self {
            state: GameState::new(),
            input: InputState::new(settings.keys.clone()),
            stepper: FixedStepper::from_settings(settings),
            renderer,
            autopilot: settings.autopilot,
            player_paused: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
        log::info!("Autopilot: {}", enabled);
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Window lost focus
    pub fn blur(&mut self) {
        self.input.release_all();
    }

    /// Throw away the current round and start over
    pub fn new_game(&mut self) {
        self.state.reset();
        self.player_paused = false;
    }

    /// Run the ticks due for `elapsed` wall time, then present one frame
    pub fn frame(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let ticks = self.stepper.accumulate(elapsed);
        let mut events = Vec::new();

        for _ in 0..ticks {
            let player = self.input.take_tick_input();
            let input = if self.autopilot {
                let mut auto = autopilot_input(&self.state);
                auto.pause = player.pause;
                if self.player_paused {
                    auto.start = player.start;
                }
                auto
            } else {
                player
            };
            let tick_events = self.state.advance(&input);
            for event in &tick_events {
                match event {
                    GameEvent::Paused => self.player_paused = true,
                    GameEvent::Started => self.player_paused = false,
                    _ => {}
                }
            }
            events.extend(tick_events);
        }

        self.renderer.present(&self.state.snapshot());
        events
    }
}
