//! Food items and spawn placement
//!
//! Fresh food is placed by rejection sampling: candidates are drawn uniformly
//! from the spawn area until one clears every snake segment and every live
//! food item. The draw count is bounded by `Tuning::max_spawn_attempts`; when
//! the arena is too crowded the least-violating candidate is used instead.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Position, nearest_distance};
use crate::tuning::Tuning;

/// Food variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodKind {
    /// Grows the snake and keeps the food supply going
    Normal,
    /// Timed speed boost
    PowerUp,
}

/// What eating one food item does to the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsumeEffect {
    pub score: u64,
    pub growth: u32,
    pub activates_power_up: bool,
    /// Spawn one replacement normal food
    pub spawns_replacement: bool,
    /// Chance of an extra power-up food alongside the replacement
    pub power_up_chance: f32,
}

impl FoodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodKind::Normal => "Normal",
            FoodKind::PowerUp => "PowerUp",
        }
    }

    /// Consumption effect for this kind under the given tuning
    pub fn effect(&self, tuning: &Tuning) -> ConsumeEffect {
        match self {
            FoodKind::Normal => ConsumeEffect {
                score: tuning.normal_score,
                growth: tuning.growth_per_food,
                activates_power_up: false,
                spawns_replacement: true,
                power_up_chance: tuning.powerup_spawn_chance,
            },
            FoodKind::PowerUp => ConsumeEffect {
                score: tuning.powerup_score,
                growth: 0,
                activates_power_up: true,
                spawns_replacement: false,
                power_up_chance: 0.0,
            },
        }
    }
}

/// A live food item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: u32,
    pub kind: FoodKind,
    pub pos: Position,
    pub radius: f32,
}

impl Food {
    pub fn new(id: u32, kind: FoodKind, pos: Position, radius: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            radius,
        }
    }
}

/// Outcome of a spawn search
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Every clearance constraint holds
    Clear(Position),
    /// Attempts exhausted; the candidate with the smallest shortfall
    BestEffort(Position),
}

impl Placement {
    pub fn position(&self) -> Position {
        match *self {
            Placement::Clear(p) | Placement::BestEffort(p) => p,
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Placement::Clear(_))
    }
}

/// How far `p` falls short of the clearance rules (0.0 = satisfied)
fn shortfall(p: Position, snake: &[Position], foods: &[Position], tuning: &Tuning) -> f32 {
    let snake_short = tuning.snake_clearance() - nearest_distance(p, snake);
    let food_short = tuning.food_spacing() - nearest_distance(p, foods);
    snake_short.max(food_short).max(0.0)
}

/// Pick a position for a new food item
///
/// `snake` is every snake segment, `foods` every food position the new item
/// must keep its distance from.
pub fn find_spawn_position<R: Rng>(
    rng: &mut R,
    snake: &[Position],
    foods: &[Position],
    tuning: &Tuning,
) -> Placement {
    let area = tuning.spawn_area();
    let attempts = tuning.max_spawn_attempts.max(1);

    let mut best: Option<(Position, f32)> = None;
    for _ in 0..attempts {
        let candidate = area.sample(rng);
        let short = shortfall(candidate, snake, foods, tuning);
        if short <= 0.0 {
            return Placement::Clear(candidate);
        }
        if best.is_none_or(|(_, s)| short < s) {
            best = Some((candidate, short));
        }
    }

    // attempts >= 1, so a candidate was always recorded
    let (pos, short) = best.unwrap_or((area.center(), f32::INFINITY));
    log::warn!(
        "Food spawn fell back after {} attempts (shortfall {:.1}) at ({:.1}, {:.1})",
        attempts,
        short,
        pos.x,
        pos.y
    );
    Placement::BestEffort(pos)
}
