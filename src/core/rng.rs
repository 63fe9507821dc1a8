//! RNG module - deterministic random piece selection
//!
//! A seeded LCG keeps games reproducible: the same seed produces the same
//! piece sequence. Pieces are drawn uniformly from the five kinds.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Produces randomly-selected pieces for spawning
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
}

impl PieceFactory {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind, uniformly at random
    pub fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn rng_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
    }

    #[test]
    fn factory_same_seed_same_sequence() {
        let mut f1 = PieceFactory::new(42);
        let mut f2 = PieceFactory::new(42);

        for _ in 0..50 {
            assert_eq!(f1.next_kind(), f2.next_kind());
        }
    }

    #[test]
    fn factory_eventually_produces_every_kind() {
        let mut factory = PieceFactory::new(3);
        let mut seen = [false; 5];

        for _ in 0..500 {
            let kind = factory.next_kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }

        assert!(seen.iter().all(|&s| s), "expected all kinds within 500 draws");
    }
}
