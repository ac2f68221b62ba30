//! Retro Snake entry point
//!
//! Rendering and input belong to a front end; natively this runs a headless
//! session with an autopilot at the configured tick rate, then stores the
//! high score.
//!
//! Usage: `retro-snake [seed] [max_ticks]`

use std::path::Path;

use retro_snake::sim::{Direction, GameEvent, GameState, TickInput, tick};
use retro_snake::{HighScore, Settings, Tuning};

const SETTINGS_FILE: &str = "snake_settings.json";
const DEFAULT_MAX_TICKS: u64 = 20_000;

fn main() {
    env_logger::init();
    log::info!("Retro Snake (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5EED);
    let max_ticks = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_TICKS);

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let hs_path = Path::new(retro_snake::highscores::HIGHSCORE_FILE);
    let mut high = HighScore::load(hs_path);

    let mut state = GameState::new(Tuning::default(), seed, high.best);
    let dt = settings.tick_interval_ms();
    log::info!(
        "Tick rate {} ({} fps), snake color {}",
        settings.tick_rate.as_str(),
        settings.tick_rate.fps(),
        settings.snake_color.as_str()
    );

    let mut eaten = 0u32;
    for _ in 0..max_ticks {
        let input = TickInput {
            direction: autopilot(&state).map(Direction::to_vec),
            ..Default::default()
        };
        let out = tick(&mut state, &input, dt);
        eaten += out
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::FoodEaten { .. }))
            .count() as u32;
        if out.game_over {
            break;
        }
    }

    println!(
        "Score {} after {} ticks ({} food eaten, length {})",
        state.score,
        state.time_ticks,
        eaten,
        state.snake.len()
    );
    if state.new_high_score {
        println!("New high score!");
    }

    high.submit(state.high_score);
    if let Err(e) = high.save(hs_path) {
        log::warn!("Could not save high score: {}", e);
    }
}

/// Head for the nearest food, turning away from walls
fn autopilot(state: &GameState) -> Option<Direction> {
    let head = state.snake.head();
    let current = state.snake.direction();
    let target = state
        .foods
        .iter()
        .map(|f| f.pos)
        .min_by(|a, b| head.distance(*a).total_cmp(&head.distance(*b)))?;

    let delta = target - head;
    let preferred = if delta.x.abs() > delta.y.abs() {
        [axis_x(delta.x), axis_y(delta.y)]
    } else {
        [axis_y(delta.y), axis_x(delta.x)]
    };

    // Look a few steps ahead so the turn happens before the wall
    let safe = state.tuning.safe_area().inset(state.snake.speed() * 4.0);
    let candidates = preferred.into_iter().chain([
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ]);
    candidates
        .filter(|d| d.to_vec() != -current)
        .find(|d| safe.contains(head + d.to_vec() * state.snake.speed()))
}

fn axis_x(dx: f32) -> Direction {
    if dx > 0.0 { Direction::Right } else { Direction::Left }
}

fn axis_y(dy: f32) -> Direction {
    if dy > 0.0 { Direction::Up } else { Direction::Down }
}
