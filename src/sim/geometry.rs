//! Distance and containment primitives
//!
//! Positions are plain `Vec2` in arena-local space: origin at the bottom-left
//! of the playable area, y pointing up.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A 2-D position in arena-local space
pub type Position = Vec2;

/// Euclidean distance between two positions
#[inline]
pub fn distance(a: Position, b: Position) -> f32 {
    a.distance(b)
}

/// Smallest distance from `p` to any of `others` (`f32::INFINITY` if empty)
pub fn nearest_distance<'a, I>(p: Position, others: I) -> f32
where
    I: IntoIterator<Item = &'a Position>,
{
    others
        .into_iter()
        .map(|o| distance(p, *o))
        .fold(f32::INFINITY, f32::min)
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Shrink by `margin` on every side
    ///
    /// A margin larger than half an extent collapses that axis to its
    /// midpoint instead of producing an inverted rectangle.
    pub fn inset(&self, margin: f32) -> Self {
        let c = self.center();
        let min = Vec2::new(
            (self.min.x + margin).min(c.x),
            (self.min.y + margin).min(c.y),
        );
        let max = Vec2::new(
            (self.max.x - margin).max(c.x),
            (self.max.y - margin).max(c.y),
        );
        Self { min, max }
    }

    /// Closed containment: a point on the boundary is inside
    pub fn contains(&self, p: Position) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// Uniform random point inside the rectangle (boundary included)
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Position {
        Vec2::new(
            sample_axis(rng, self.min.x, self.max.x),
            sample_axis(rng, self.min.y, self.max.y),
        )
    }
}

fn sample_axis<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..=hi)
    } else {
        // Degenerate axis
        (lo + hi) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_nearest_distance_empty_is_infinite() {
        let empty: Vec<Position> = Vec::new();
        assert!(nearest_distance(Vec2::ZERO, &empty).is_infinite());

        let pts = [Vec2::new(10.0, 0.0), Vec2::new(2.0, 0.0)];
        assert_eq!(nearest_distance(Vec2::ZERO, &pts), 2.0);
    }

    #[test]
    fn test_contains_boundary() {
        let r = Rect::new(Vec2::ZERO, Vec2::new(100.0, 50.0));
        assert!(r.contains(Vec2::new(50.0, 25.0)));
        assert!(r.contains(Vec2::new(0.0, 25.0)));
        assert!(r.contains(Vec2::new(100.0, 50.0)));
        assert!(!r.contains(Vec2::new(100.5, 25.0)));
        assert!(!r.contains(Vec2::new(50.0, -1.0)));
    }

    #[test]
    fn test_inset_collapses_instead_of_inverting() {
        let r = Rect::new(Vec2::ZERO, Vec2::new(40.0, 200.0));
        let inset = r.inset(30.0);
        assert_eq!(inset.min.x, 20.0);
        assert_eq!(inset.max.x, 20.0);
        assert_eq!(inset.min.y, 30.0);
        assert_eq!(inset.max.y, 170.0);
    }

    #[test]
    fn test_sample_stays_inside() {
        let mut rng = Pcg32::seed_from_u64(7);
        let r = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        for _ in 0..500 {
            let p = r.sample(&mut rng);
            assert!(p.x >= 10.0 && p.x <= 30.0);
            assert!(p.y >= 20.0 && p.y <= 40.0);
        }
    }

    #[test]
    fn test_sample_degenerate_rect() {
        let mut rng = Pcg32::seed_from_u64(7);
        let r = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
        assert_eq!(r.sample(&mut rng), Vec2::new(5.0, 5.0));
    }
}
