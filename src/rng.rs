use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source for trial simulation.
///
/// Seedable so tests can pin the shuffle order; production runs pass `None`
/// and get a fresh seed per invocation.
#[derive(Clone)]
pub struct SimRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SimRng {
    /// Create a new SimRng. If `seed` is None, a random seed is drawn.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        SimRng {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random integer in [0, max).
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        for i in (1..cards.len()).rev() {
            let j = self.random_range(i + 1);
            cards.swap(i, j);
        }
    }
}
