//! Game state and core simulation types
//!
//! Everything the engine owns lives in [`GameState`]. Collaborators read it
//! after each tick and never mutate it directly.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::{Food, FoodKind, find_spawn_position};
use super::geometry::Position;
use super::powerup::PowerUpTimer;
use super::snake::Snake;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; waits for a new-game command
    GameOver,
}

/// Things that happened during a tick, for audio and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten { kind: FoodKind, score: u64 },
    PowerUpActivated,
    PowerUpExpired,
    GameOver { score: u64, new_high_score: bool },
    NewGame,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Best score seen, carried across sessions
    pub high_score: u64,
    /// High score when the current session started
    session_start_high: u64,
    /// Set once per session when the final score beats the previous best
    pub new_high_score: bool,
    /// Logical clock (ms), advanced by each tick's elapsed interval
    pub time_ms: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub snake: Snake,
    /// Live food items, in spawn order
    pub foods: Vec<Food>,
    pub power_up: PowerUpTimer,
    next_id: u32,
}

impl GameState {
    /// Create a state with a session already running
    ///
    /// `high_score` is whatever the persistence layer loaded (0 if none).
    pub fn new(tuning: Tuning, seed: u64, high_score: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            snake: Snake::new(&tuning),
            tuning,
            phase: GamePhase::Playing,
            score: 0,
            high_score,
            session_start_high: high_score,
            new_high_score: false,
            time_ms: 0,
            time_ticks: 0,
            foods: Vec::new(),
            power_up: PowerUpTimer::default(),
            next_id: 1,
        };
        state.start_new_game();
        state
    }

    /// Reinitialize every session-owned field
    ///
    /// The high score, clock and RNG stream carry over.
    pub fn start_new_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.new_high_score = false;
        self.session_start_high = self.high_score;
        self.snake.reset();
        self.power_up.clear();
        self.foods.clear();
        self.spawn_food(FoodKind::Normal, &[]);
        log::info!(
            "New game started (high score {}, seed {})",
            self.high_score,
            self.seed
        );
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Snake body positions, head first
    pub fn snake_positions(&self) -> Vec<Position> {
        self.snake.segments().copied().collect()
    }

    pub fn food_positions(&self) -> Vec<Position> {
        self.foods.iter().map(|f| f.pos).collect()
    }

    /// Place a new food item clear of the snake and of `existing` food
    pub fn spawn_food(&mut self, kind: FoodKind, existing: &[Position]) -> u32 {
        let snake = self.snake_positions();
        let placement = find_spawn_position(&mut self.rng, &snake, existing, &self.tuning);
        let id = self.next_entity_id();
        let pos = placement.position();
        log::debug!(
            "Spawned {} food #{} at ({:.1}, {:.1})",
            kind.as_str(),
            id,
            pos.x,
            pos.y
        );
        self.foods
            .push(Food::new(id, kind, pos, self.tuning.food_radius));
        id
    }

    /// Roll against a probability using the session RNG
    pub(crate) fn roll(&mut self, chance: f32) -> bool {
        use rand::Rng;
        self.rng.random::<f32>() < chance
    }

    pub fn is_power_up_active(&self) -> bool {
        self.power_up.active
    }

    /// Remaining share of the active boost (0.0 when inactive)
    pub fn power_up_remaining(&self) -> f32 {
        self.power_up.remaining_fraction(self.time_ms)
    }

    /// Did the final score beat the best from before this session?
    pub(crate) fn beats_session_high(&self) -> bool {
        self.score > self.session_start_high
    }

    /// Raise the high score to the current score if it is higher
    ///
    /// Idempotent; the tick runs it once per call regardless of phase.
    pub fn clamp_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}
