//! Random source for bounce angles
//!
//! The simulation never touches a global RNG. Whoever builds a match hands it
//! a [`RandomSource`], normally a seeded [`SeededSource`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform samples in `[0, 1)`
pub trait RandomSource: std::fmt::Debug {
    fn next_unit(&mut self) -> f32;
}

/// PCG-backed source, reproducible from its seed
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: Pcg32,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Always yields the same value (clamped into `[0, 1)`)
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f32);

impl RandomSource for FixedSource {
    fn next_unit(&mut self) -> f32 {
        self.0.clamp(0.0, 1.0 - f32::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededSource::new(7);
        let mut b = SeededSource::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_unit_range() {
        let mut src = SeededSource::new(12345);
        for _ in 0..1000 {
            let v = src.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_fixed_source() {
        assert_eq!(FixedSource(0.25).next_unit(), 0.25);
        assert!(FixedSource(3.0).next_unit() < 1.0);
    }
}
