//! One simulation step
//!
//! The scheduler calls [`tick`] once per frame with the elapsed interval and
//! the latest input. Speed, growth and collision distances are per-tick
//! quantities, so a faster tick rate makes the snake faster in wall-clock
//! terms; the interval only drives the power-up clock.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::food::{Food, FoodKind};
use super::geometry::{Position, distance};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pending steering command, validated by the snake
    pub direction: Option<Vec2>,
    /// Start over (only honored after game over)
    pub new_game: bool,
}

/// Observable result of a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub score: u64,
    pub high_score: u64,
    pub phase: GamePhase,
    pub power_up_active: bool,
    /// Remaining share of the boost, 0.0 - 1.0
    pub power_up_remaining: f32,
    pub new_high_score: bool,
    /// The run ended during this tick
    pub game_over: bool,
    pub events: Vec<GameEvent>,
}

impl TickOutcome {
    fn from_state(state: &GameState, events: Vec<GameEvent>) -> Self {
        let game_over = events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }));
        Self {
            score: state.score,
            high_score: state.high_score,
            phase: state.phase,
            power_up_active: state.is_power_up_active(),
            power_up_remaining: state.power_up_remaining(),
            new_high_score: state.new_high_score,
            game_over,
            events,
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: u64) -> TickOutcome {
    let mut events = Vec::new();
    state.time_ms = state.time_ms.saturating_add(dt_ms);

    if input.new_game && state.phase == GamePhase::GameOver {
        state.start_new_game();
        events.push(GameEvent::NewGame);
        return TickOutcome::from_state(state, events);
    }

    if state.phase == GamePhase::Playing {
        state.time_ticks += 1;
        step(state, input, &mut events);
    }

    state.clamp_high_score();

    TickOutcome::from_state(state, events)
}

fn step(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    // Expire the boost before anything else reads the speed
    if state.power_up.expire_if_due(state.time_ms) {
        state.snake.clear_power_up();
        events.push(GameEvent::PowerUpExpired);
        log::debug!("Power-up expired at {} ms", state.time_ms);
    }

    if let Some(dir) = input.direction {
        state.snake.set_direction(dir);
    }

    consume_food(state, events);

    state.snake.advance();

    if state
        .snake
        .check_collision(&state.tuning.safe_area(), state.tuning.collision_threshold)
    {
        state.phase = GamePhase::GameOver;
        state.new_high_score = state.beats_session_high();
        events.push(GameEvent::GameOver {
            score: state.score,
            new_high_score: state.new_high_score,
        });
        log::info!(
            "Game over: score {} (new high score: {})",
            state.score,
            state.new_high_score
        );
    }
}

/// Eat every food the head touches and spawn replacements
fn consume_food(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let head = state.snake.head();
    let reach = state.tuning.head_radius;

    let (eaten, kept): (Vec<Food>, Vec<Food>) = std::mem::take(&mut state.foods)
        .into_iter()
        .partition(|f| distance(head, f.pos) < reach);
    if eaten.is_empty() {
        state.foods = kept;
        return;
    }

    // Placement checks against every food alive at the start of the tick
    // plus anything spawned so far this tick.
    let mut existing: Vec<Position> = kept.iter().chain(&eaten).map(|f| f.pos).collect();
    state.foods = kept;

    for food in eaten {
        let effect = food.kind.effect(&state.tuning);
        state.score += effect.score;
        state.snake.grow(effect.growth);
        events.push(GameEvent::FoodEaten {
            kind: food.kind,
            score: effect.score,
        });
        log::debug!(
            "Ate {} food #{} (+{}), score {}",
            food.kind.as_str(),
            food.id,
            effect.score,
            state.score
        );

        if effect.activates_power_up {
            let now = state.time_ms;
            state
                .power_up
                .activate(now, state.tuning.powerup_duration_ms);
            state
                .snake
                .apply_power_up(state.tuning.powerup_speed_multiplier);
            events.push(GameEvent::PowerUpActivated);
        }

        if effect.spawns_replacement {
            spawn_tracked(state, FoodKind::Normal, &mut existing);
            if state.roll(effect.power_up_chance) {
                spawn_tracked(state, FoodKind::PowerUp, &mut existing);
            }
        }
    }
}

fn spawn_tracked(state: &mut GameState, kind: FoodKind, existing: &mut Vec<Position>) {
    state.spawn_food(kind, existing);
    if let Some(food) = state.foods.last() {
        existing.push(food.pos);
    }
}
