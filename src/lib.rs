//! Retro Snake - a growing snake in a bounded arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake, food, power-up, tick protocol)
//! - `tuning`: Data-driven game balance and arena geometry
//! - `settings`: Player preferences (tick rate, snake color)
//! - `highscores`: Best-score persistence

pub mod highscores;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use settings::{Settings, SnakeColor, TickRate};
pub use tuning::{Arena, Tuning};

/// Game configuration constants
///
/// Lengths are in arena units per tick; they are the defaults behind
/// [`crate::Tuning::default`].
pub mod consts {
    /// Distance the head travels each tick
    pub const SNAKE_SPEED: f32 = 5.0;
    pub const SNAKE_HEAD_RADIUS: f32 = 18.0;
    pub const SNAKE_BODY_RADIUS: f32 = SNAKE_HEAD_RADIUS - 4.0;
    /// Self-collision distance, one tick of travel at base speed
    pub const SNAKE_COLLISION_THRESHOLD: f32 = SNAKE_SPEED;
    pub const SNAKE_INITIAL_LENGTH: usize = 3;

    /// Food defaults
    pub const FOOD_RADIUS: f32 = 12.0;
    /// Clearance between fresh food and any snake segment (on top of the radius)
    pub const FOOD_SPAWN_BUFFER: f32 = 75.0;
    /// Keep spawned food away from the arena edges
    pub const FOOD_SPAWN_MARGIN: f32 = 30.0;
    /// Rejection sampling bound before falling back to a best-effort spot
    pub const MAX_SPAWN_ATTEMPTS: u32 = 1000;

    /// Scoring and growth
    pub const GROWTH_PER_FOOD: u32 = 5;
    pub const NORMAL_FOOD_SCORE: u64 = 5;
    pub const POWERUP_FOOD_SCORE: u64 = 25;

    /// Power-up defaults
    pub const POWERUP_SPAWN_CHANCE: f32 = 0.2;
    pub const POWERUP_DURATION_MS: u64 = 5000;
    pub const POWERUP_SPEED_MULTIPLIER: f32 = 1.5;

    /// Default arena (screen size and reserved HUD strip)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    pub const UI_HEIGHT: f32 = 60.0;
}
