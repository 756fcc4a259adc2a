use rand::{rngs::StdRng, Rng, SeedableRng};

/// Highest level a tower may reach. Levels are zero-based, so a set keeps
/// `MAX_LEVEL + 1` entry links and the bottom chain containing every node
/// is level 0.
pub const MAX_LEVEL: usize = 32;

/// Probability that a tower reaching level `k` also reaches level `k + 1`.
const P: f64 = 0.25;

/// Draws tower heights for new nodes: geometric with ratio `P`, capped at
/// [`MAX_LEVEL`].
///
/// Each set owns one generator. The state is never global and never shared,
/// so two sets fed the same seed and the same insertion sequence end up with
/// identical towers, which is what makes layouts reproducible in tests.
pub struct LevelGenerator {
    rng: StdRng,
}

impl LevelGenerator {
    /// A generator seeded from OS entropy.
    pub fn new() -> Self {
        LevelGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// A generator with a fixed seed, for reproducible layouts.
    pub fn with_seed(seed: u64) -> Self {
        LevelGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws the level for the next tower, in `0..=MAX_LEVEL`.
    pub fn random(&mut self) -> usize {
        let mut level = 0;
        while level < MAX_LEVEL && self.rng.gen_bool(P) {
            level += 1;
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_exceeds_ceiling() {
        let mut gen = LevelGenerator::new();
        for _ in 0..10_000 {
            assert!(gen.random() <= MAX_LEVEL);
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = LevelGenerator::with_seed(0xdead_beef);
        let mut b = LevelGenerator::with_seed(0xdead_beef);
        let draws_a: Vec<usize> = (0..1000).map(|_| a.random()).collect();
        let draws_b: Vec<usize> = (0..1000).map(|_| b.random()).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn draws_are_mostly_short() {
        // P(level == 0) is 0.75, so a long run without a zero draw or
        // without any promotion at all means the generator is broken.
        let mut gen = LevelGenerator::with_seed(42);
        let draws: Vec<usize> = (0..1000).map(|_| gen.random()).collect();
        let zeros = draws.iter().filter(|&&l| l == 0).count();
        assert!(zeros > 500);
        assert!(draws.iter().any(|&l| l > 0));
    }
}
