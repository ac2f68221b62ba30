//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives in [`Tuning`], which is
//! handed to the engine once at construction. Nothing here changes while a
//! session is running.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::geometry::Rect;

/// Screen geometry the arena is carved from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Strip reserved for the HUD, excluded from play
    pub ui_height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            ui_height: UI_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32, ui_height: f32) -> Self {
        Self {
            width,
            height,
            ui_height,
        }
    }

    /// Height left for play once the HUD strip is removed
    #[inline]
    pub fn play_height(&self) -> f32 {
        (self.height - self.ui_height).max(0.0)
    }

    /// Playable rectangle in arena-local space (origin bottom-left)
    pub fn playable(&self) -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(self.width.max(0.0), self.play_height()))
    }

    pub fn center(&self) -> Vec2 {
        self.playable().center()
    }
}

/// Gameplay constants injected into the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub arena: Arena,

    // === Snake ===
    pub snake_speed: f32,
    pub head_radius: f32,
    pub body_radius: f32,
    pub collision_threshold: f32,
    pub initial_length: usize,

    // === Food ===
    pub food_radius: f32,
    pub spawn_buffer: f32,
    pub spawn_margin: f32,
    pub max_spawn_attempts: u32,
    pub growth_per_food: u32,
    pub normal_score: u64,
    pub powerup_score: u64,

    // === Power-up ===
    /// Probability that eating normal food also spawns a power-up
    pub powerup_spawn_chance: f32,
    pub powerup_duration_ms: u64,
    pub powerup_speed_multiplier: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena: Arena::default(),

            snake_speed: SNAKE_SPEED,
            head_radius: SNAKE_HEAD_RADIUS,
            body_radius: SNAKE_BODY_RADIUS,
            collision_threshold: SNAKE_COLLISION_THRESHOLD,
            initial_length: SNAKE_INITIAL_LENGTH,

            food_radius: FOOD_RADIUS,
            spawn_buffer: FOOD_SPAWN_BUFFER,
            spawn_margin: FOOD_SPAWN_MARGIN,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
            growth_per_food: GROWTH_PER_FOOD,
            normal_score: NORMAL_FOOD_SCORE,
            powerup_score: POWERUP_FOOD_SCORE,

            powerup_spawn_chance: POWERUP_SPAWN_CHANCE,
            powerup_duration_ms: POWERUP_DURATION_MS,
            powerup_speed_multiplier: POWERUP_SPEED_MULTIPLIER,
        }
    }
}

impl Tuning {
    /// Default balance in a custom arena
    pub fn with_arena(arena: Arena) -> Self {
        Self {
            arena,
            ..Self::default()
        }
    }

    /// Minimum clearance between a fresh food item and any snake segment
    #[inline]
    pub fn snake_clearance(&self) -> f32 {
        self.food_radius + self.spawn_buffer
    }

    /// Minimum spacing between two live food items
    #[inline]
    pub fn food_spacing(&self) -> f32 {
        self.food_radius * 3.0
    }

    /// Area food may spawn in (playable rect shrunk by the spawn margin)
    pub fn spawn_area(&self) -> Rect {
        self.arena.playable().inset(self.spawn_margin)
    }

    /// Area the head must stay strictly inside
    pub fn safe_area(&self) -> Rect {
        self.arena.playable().inset(self.head_radius)
    }
}
