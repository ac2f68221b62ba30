//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Logical clock only (elapsed interval passed in by the scheduler)
//! - Seeded RNG only
//! - Stable iteration order (food in spawn order)
//! - No rendering or platform dependencies

pub mod food;
pub mod geometry;
pub mod powerup;
pub mod snake;
pub mod state;
pub mod tick;

pub use food::{ConsumeEffect, Food, FoodKind, Placement, find_spawn_position};
pub use geometry::{Position, Rect, distance};
pub use powerup::PowerUpTimer;
pub use snake::{Direction, Snake};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, TickOutcome, tick};
