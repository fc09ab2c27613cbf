//! Brick Breaker entry point
//!
//! Native builds run a headless demo: the autopilot plays one round on a
//! simulated clock and the result is printed. A windowed host drives the
//! same `Game` with real key events and wall-clock time.

use std::process::ExitCode;
use std::time::Duration;

use brick_breaker::Settings;
use brick_breaker::host::Game;
use brick_breaker::renderer::BatchRenderer;
use brick_breaker::sim::{EndImage, GameEvent};

const SETTINGS_PATH: &str = "brick_breaker.json";

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");

    let path = std::env::args().nth(1).unwrap_or_else(|| SETTINGS_PATH.to_string());
    let settings = match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if !settings.autopilot {
        log::warn!("Native mode has no window or keyboard; enabling autopilot");
    }

    let mut game = Game::new(&settings, BatchRenderer::default());
    game.set_autopilot(true);

    let frame = Duration::from_millis(settings.frame_delay_ms);
    let mut bricks_destroyed = 0;
    for _ in 0..settings.demo_ticks {
        for event in game.frame(frame) {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks_destroyed += 1,
                GameEvent::BallLost { lives_left } => log::info!("Ball lost ({lives_left} left)"),
                _ => {}
            }
        }
        if game.state().over {
            break;
        }
    }

    let state = game.state();
    let batch = &game.renderer().batch;
    println!(
        "ticks: {}  bricks destroyed: {}  lives: {}  quads on screen: {}",
        state.ticks,
        bricks_destroyed,
        state.lives,
        batch.quad_count()
    );
    match batch.end_image {
        Some(EndImage::Win) => println!("result: won (showing {:?})", settings.win_image),
        Some(EndImage::Lose) => println!("result: lost (showing {:?})", settings.lose_image),
        None => println!("result: still playing after {} ticks", settings.demo_ticks),
    }
    ExitCode::SUCCESS
}
