//! Decorative particle layouts.
//!
//! Purely cosmetic. Layouts come from a seeded generator so that a given
//! seed always yields the same particles, which keeps visual snapshots
//! stable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// One floating particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
    /// Drift per second along each axis.
    pub drift_x: f64,
    pub drift_y: f64,
    /// Animation start offset in seconds.
    pub delay: f64,
}

const MIN_RADIUS: f64 = 0.5;
const MAX_RADIUS: f64 = 3.0;
const MAX_DRIFT: f64 = 12.0;
const MAX_DELAY: f64 = 5.0;

/// Lay out `count` particles inside a `width` × `height` box.
///
/// Non-positive or non-finite dimensions collapse the layout onto the
/// origin along that axis.
pub fn particles(seed: u64, count: usize, width: f64, height: f64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let width = extent(width);
    let height = extent(height);

    (0..count)
        .map(|_| Particle {
            x: rng.gen_range(0.0..=width),
            y: rng.gen_range(0.0..=height),
            radius: rng.gen_range(MIN_RADIUS..=MAX_RADIUS),
            opacity: rng.gen_range(0.2..=0.8),
            drift_x: rng.gen_range(-MAX_DRIFT..=MAX_DRIFT),
            drift_y: rng.gen_range(-MAX_DRIFT..=MAX_DRIFT),
            delay: rng.gen_range(0.0..=MAX_DELAY),
        })
        .collect()
}

fn extent(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(particles(42, 30, 800.0, 600.0), particles(42, 30, 800.0, 600.0));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(particles(1, 10, 800.0, 600.0), particles(2, 10, 800.0, 600.0));
    }

    #[test]
    fn particles_stay_in_bounds() {
        for p in particles(7, 200, 320.0, 240.0) {
            assert!((0.0..=320.0).contains(&p.x));
            assert!((0.0..=240.0).contains(&p.y));
            assert!((MIN_RADIUS..=MAX_RADIUS).contains(&p.radius));
        }
    }

    #[test]
    fn degenerate_box() {
        let ps = particles(3, 5, -10.0, 0.0);
        assert!(ps.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }

    #[test]
    fn unbounded_box_collapses() {
        let ps = particles(1, 3, f64::INFINITY, 100.0);
        assert_eq!(ps.len(), 3);
        assert!(ps.iter().all(|p| p.x == 0.0 && (0.0..=100.0).contains(&p.y)));

        let ps = particles(1, 3, f64::NAN, f64::NEG_INFINITY);
        assert!(ps.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }
}
