//! Falling-star background field.
//!
//! A fixed pool of stars drifts downward; a star that leaves the bottom
//! edge respawns just above the top at a fresh horizontal position. All
//! coordinates live in a continuous canvas space so the renderer can map
//! them onto whatever cell grid it has.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const STAR_COUNT: usize = 50;

const RADIUS_RANGE: std::ops::Range<f32> = 0.5..2.0;
const SPEED_RANGE: std::ops::Range<f32> = 0.1..0.7;
const OPACITY_RANGE: std::ops::Range<f32> = 0.3..0.8;

#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub fall_speed: f32,
    pub opacity: f32,
}

#[derive(Debug)]
pub struct Starfield {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl Starfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    /// Deterministic field for tests.
    pub fn seeded(width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: f32, height: f32, mut rng: StdRng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.random_range(0.0..width.max(1.0)),
                y: rng.random_range(0.0..height.max(1.0)),
                radius: rng.random_range(RADIUS_RANGE),
                fall_speed: rng.random_range(SPEED_RANGE),
                opacity: rng.random_range(OPACITY_RANGE),
            })
            .collect();
        Self {
            stars,
            width,
            height,
            rng,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// One animation frame: every star falls by its own speed; stars past
    /// the bottom edge wrap to just above the top at a new random column.
    pub fn tick(&mut self) {
        for star in &mut self.stars {
            star.y += star.fall_speed;
            if star.y > self.height {
                star.y = -star.radius;
                star.x = self.rng.random_range(0.0..self.width.max(1.0));
            }
        }
    }

    /// Adopt a new canvas size. Existing stars keep their positions; the
    /// new bounds only take effect through future wrapping.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size_and_attribute_ranges() {
        let field = Starfield::seeded(100.0, 50.0, 7);
        assert_eq!(field.stars().len(), STAR_COUNT);
        for star in field.stars() {
            assert!(RADIUS_RANGE.contains(&star.radius));
            assert!(SPEED_RANGE.contains(&star.fall_speed));
            assert!(OPACITY_RANGE.contains(&star.opacity));
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..50.0).contains(&star.y));
        }
    }

    #[test]
    fn test_stars_fall_by_their_speed() {
        let mut field = Starfield::seeded(100.0, 50.0, 7);
        let before: Vec<Star> = field.stars().to_vec();
        field.tick();
        for (star, prev) in field.stars().iter().zip(&before) {
            let fell = (star.y - (prev.y + prev.fall_speed)).abs() < 0.001;
            let wrapped = (star.y - (-prev.radius)).abs() < 0.001;
            assert!(fell || wrapped);
        }
    }

    #[test]
    fn test_star_wraps_above_top() {
        let mut field = Starfield::seeded(100.0, 5.0, 7);
        // Enough frames for every star to cross the bottom at least once
        for _ in 0..200 {
            field.tick();
            for star in field.stars() {
                assert!(star.y <= 5.0 + 0.7);
                assert!((0.0..100.0).contains(&star.x));
            }
        }
    }

    #[test]
    fn test_resize_keeps_positions() {
        let mut field = Starfield::seeded(100.0, 50.0, 7);
        let before: Vec<(f32, f32)> = field.stars().iter().map(|s| (s.x, s.y)).collect();
        field.resize(200.0, 80.0);
        let after: Vec<(f32, f32)> = field.stars().iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(before, after);
        assert_eq!(field.size(), (200.0, 80.0));
    }
}
