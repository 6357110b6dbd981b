//! Torus Snake demo driver
//!
//! Runs a headless scripted session: seeds an engine, steers it with a
//! fixed turn pattern, logs the run, and prints the final state snapshot
//! as JSON. Real embedders wire keyboard and timer adapters to the same
//! three calls used here.
//!
//! Usage: `torus-snake [seed] [config.json]`

use std::path::Path;

use torus_snake::sim::{Direction, GamePhase, GameState, tick};
use torus_snake::Config;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let config = match args.next() {
        Some(path) => Config::load(Path::new(&path)),
        None => Config::default(),
    };

    log::info!(
        "Torus Snake starting: seed {seed}, grid {0}x{0}, tick period {1} ms",
        config.grid_size,
        config.tick_period_ms
    );

    let mut state = GameState::with_config(seed, &config);

    // Clockwise laps with a turn every few ticks; enough to chase down
    // food on a small board without an actual player.
    let script = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    let mut last_score = 0;
    for i in 0..600u64 {
        if i % 4 == 0 {
            state.set_direction(script[(i / 4) as usize % script.len()]);
        }
        tick(&mut state);

        if state.score != last_score {
            last_score = state.score;
            log::info!(
                "Ate food at tick {}: score {}, length {}",
                state.time_ticks,
                state.score,
                state.snake.len()
            );
        }

        match state.phase {
            GamePhase::GameOver => {
                log::info!(
                    "Game over after {} ticks, final score {}",
                    state.time_ticks,
                    state.score
                );
                break;
            }
            GamePhase::BoardFull => {
                log::info!("Board full after {} ticks: perfect game", state.time_ticks);
                break;
            }
            GamePhase::Running | GamePhase::Paused => {}
        }
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Snapshot serialization failed: {e}"),
    }
}
