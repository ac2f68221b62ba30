//! The player's snake
//!
//! The body is a trailing history of head positions: each tick a new head is
//! pushed at the front and, unless growth is owed, the tail is dropped.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Position, Rect, distance};
use crate::tuning::Tuning;

/// Cardinal headings, as input collaborators produce them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in arena space (y up)
    pub fn to_vec(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Classify a swipe by its dominant axis
    ///
    /// Returns `None` for swipes no longer than `sensitivity`. Ties go to
    /// the vertical axis.
    pub fn from_swipe(delta: Vec2, sensitivity: f32) -> Option<Self> {
        if delta.length() <= sensitivity {
            return None;
        }
        let dir = if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if delta.y > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        Some(dir)
    }
}

/// The snake entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    /// Body positions, head first
    segments: VecDeque<Position>,
    direction: Vec2,
    base_speed: f32,
    speed: f32,
    /// Segments still owed from eaten food
    pub growth_pending: u32,
    initial_length: usize,
    spawn: Position,
}

impl Snake {
    /// Create a snake laid out at the arena center, heading right
    pub fn new(tuning: &Tuning) -> Self {
        let mut snake = Self {
            segments: VecDeque::new(),
            direction: Direction::Right.to_vec(),
            base_speed: tuning.snake_speed,
            speed: tuning.snake_speed,
            growth_pending: 0,
            initial_length: tuning.initial_length.max(1),
            spawn: tuning.arena.center(),
        };
        snake.reset();
        snake
    }

    /// Reinitialize for a new game
    ///
    /// Segments trail the head leftward, one base-speed step apart.
    pub fn reset(&mut self) {
        self.segments = (0..self.initial_length)
            .map(|i| self.spawn - Vec2::new(i as f32 * self.base_speed, 0.0))
            .collect();
        self.direction = Direction::Right.to_vec();
        self.speed = self.base_speed;
        self.growth_pending = 0;
    }

    #[inline]
    pub fn head(&self) -> Position {
        // Never empty: reset() lays out at least one segment and advance()
        // pushes before it pops.
        self.segments[0]
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Position> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// Move one tick: push a new head, drop the tail unless growth is owed
    pub fn advance(&mut self) {
        let new_head = self.head() + self.direction * self.speed;
        self.segments.push_front(new_head);
        if self.growth_pending > 0 {
            self.growth_pending -= 1;
        } else {
            self.segments.pop_back();
        }
    }

    /// Steer the snake; returns whether the command was accepted
    ///
    /// Zero vectors are ignored, and so is a straight reversal while there is
    /// a body behind the head to crash into.
    pub fn set_direction(&mut self, dir: Vec2) -> bool {
        if dir == Vec2::ZERO {
            return false;
        }
        if self.segments.len() > 1 && dir == -self.direction {
            return false;
        }
        self.direction = dir;
        true
    }

    pub fn grow(&mut self, segments: u32) {
        self.growth_pending = self.growth_pending.saturating_add(segments);
    }

    pub fn apply_power_up(&mut self, multiplier: f32) {
        self.speed = self.base_speed * multiplier;
    }

    pub fn clear_power_up(&mut self) {
        self.speed = self.base_speed;
    }

    /// Wall or self collision
    ///
    /// The head must stay within `safe_area`; touching its edge is still
    /// safe. Segment 1 is skipped for the self test since it always trails
    /// the head by one step.
    pub fn check_collision(&self, safe_area: &Rect, threshold: f32) -> bool {
        let head = self.head();
        if !safe_area.contains(head) {
            return true;
        }
        self.segments
            .iter()
            .skip(2)
            .any(|s| distance(head, *s) < threshold)
    }

    /// Overwrite the body (used to stage collision scenarios in tests)
    #[cfg(test)]
    pub(crate) fn set_segments(&mut self, segments: Vec<Position>) {
        assert!(!segments.is_empty());
        self.segments = segments.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn snake() -> Snake {
        Snake::new(&Tuning::default())
    }

    #[test]
    fn test_reset_layout() {
        let s = snake();
        let segs: Vec<_> = s.segments().copied().collect();
        assert_eq!(
            segs,
            vec![
                Vec2::new(400.0, 270.0),
                Vec2::new(395.0, 270.0),
                Vec2::new(390.0, 270.0)
            ]
        );
        assert_eq!(s.direction(), Vec2::new(1.0, 0.0));
        assert_eq!(s.speed(), s.base_speed());
        assert_eq!(s.growth_pending, 0);
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut s = snake();
        s.advance();
        assert_eq!(s.len(), 3);
        assert_eq!(s.head(), Vec2::new(405.0, 270.0));
    }

    #[test]
    fn test_advance_with_growth_lengthens_by_one() {
        let mut s = snake();
        s.grow(2);
        s.advance();
        assert_eq!(s.len(), 4);
        assert_eq!(s.growth_pending, 1);
        s.advance();
        s.advance();
        assert_eq!(s.len(), 5);
        assert_eq!(s.growth_pending, 0);
    }

    #[test]
    fn test_reverse_rejected() {
        let mut s = snake();
        assert!(!s.set_direction(Vec2::new(-1.0, 0.0)));
        assert_eq!(s.direction(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_zero_rejected() {
        let mut s = snake();
        assert!(!s.set_direction(Vec2::ZERO));
        assert_eq!(s.direction(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_reverse_allowed_for_single_segment() {
        let mut s = snake();
        s.set_segments(vec![Vec2::new(100.0, 100.0)]);
        assert!(s.set_direction(Vec2::new(-1.0, 0.0)));
        assert_eq!(s.direction(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_power_up_scales_and_restores_speed() {
        let mut s = snake();
        s.apply_power_up(1.5);
        assert_eq!(s.speed(), 7.5);
        s.apply_power_up(1.5);
        assert_eq!(s.speed(), 7.5);
        s.clear_power_up();
        assert_eq!(s.speed(), 5.0);
    }

    #[test]
    fn test_wall_boundary_is_safe() {
        let tuning = Tuning::default();
        let safe = tuning.safe_area();
        let mut s = snake();

        // Head just inside the inset boundary
        s.set_segments(vec![Vec2::new(safe.max.x - 0.5, 200.0)]);
        assert!(!s.check_collision(&safe, tuning.collision_threshold));

        // Exactly on the boundary
        s.set_segments(vec![Vec2::new(safe.max.x, 200.0)]);
        assert!(!s.check_collision(&safe, tuning.collision_threshold));
        s.set_segments(vec![Vec2::new(safe.min.x, safe.min.y)]);
        assert!(!s.check_collision(&safe, tuning.collision_threshold));

        // One unit outside
        s.set_segments(vec![Vec2::new(safe.max.x + 1.0, 200.0)]);
        assert!(s.check_collision(&safe, tuning.collision_threshold));

        s.set_segments(vec![Vec2::new(200.0, safe.min.y - 1.0)]);
        assert!(s.check_collision(&safe, tuning.collision_threshold));
    }

    #[test]
    fn test_self_collision_from_index_two() {
        let tuning = Tuning::default();
        let safe = tuning.safe_area();
        let mut s = snake();
        let head = Vec2::new(200.0, 200.0);

        s.set_segments(vec![head, Vec2::new(195.0, 200.0), Vec2::new(202.0, 200.0)]);
        assert!(s.check_collision(&safe, tuning.collision_threshold));

        // At exactly the threshold there is no hit
        s.set_segments(vec![head, Vec2::new(195.0, 200.0), Vec2::new(205.0, 200.0)]);
        assert!(!s.check_collision(&safe, tuning.collision_threshold));
    }

    #[test]
    fn test_segment_one_never_collides() {
        let tuning = Tuning::default();
        let safe = tuning.safe_area();
        let mut s = snake();
        let head = Vec2::new(200.0, 200.0);

        s.set_segments(vec![head, head, Vec2::new(300.0, 200.0)]);
        assert!(!s.check_collision(&safe, tuning.collision_threshold));
    }

    #[test]
    fn test_swipe_classification() {
        assert_eq!(Direction::from_swipe(Vec2::new(10.0, 2.0), 40.0), None);
        assert_eq!(
            Direction::from_swipe(Vec2::new(60.0, 10.0), 40.0),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::from_swipe(Vec2::new(-60.0, 10.0), 40.0),
            Some(Direction::Left)
        );
        assert_eq!(
            Direction::from_swipe(Vec2::new(5.0, -50.0), 40.0),
            Some(Direction::Down)
        );
        assert_eq!(
            Direction::from_swipe(Vec2::new(30.0, 30.0), 40.0),
            Some(Direction::Up)
        );
    }

    fn cardinal() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn prop_set_direction(start in cardinal(), next in cardinal()) {
            let mut s = snake();
            s.set_direction(start.to_vec());
            let before = s.direction();
            let accepted = s.set_direction(next.to_vec());
            if next.to_vec() == -before {
                prop_assert!(!accepted);
                prop_assert_eq!(s.direction(), before);
            } else {
                prop_assert!(accepted);
                prop_assert_eq!(s.direction(), next.to_vec());
            }
        }

        #[test]
        fn prop_advance_length(growth in 0u32..4, steps in 1usize..20) {
            let mut s = snake();
            s.grow(growth);
            for _ in 0..steps {
                let len = s.len();
                let owed = s.growth_pending;
                s.advance();
                if owed > 0 {
                    prop_assert_eq!(s.len(), len + 1);
                    prop_assert_eq!(s.growth_pending, owed - 1);
                } else {
                    prop_assert_eq!(s.len(), len);
                }
            }
        }
    }
}
