use rand::{distributions::uniform, thread_rng, Rng as _, SeedableRng as _};

pub type Seed = u64;

// Wrapper around a rand random number generator
// allowing use of the Rng methods without having to import any traits
pub struct Rng {
    pub initial_seed: Seed,
    gen: rand_pcg::Pcg32,
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng {
    pub fn new() -> Self {
        let seed = thread_rng().gen();
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self {
            initial_seed: seed,
            gen: rand_pcg::Pcg32::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, otherwise seeded from the thread rng
    pub fn with_seed(seed: Option<Seed>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::new(),
        }
    }

    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: uniform::SampleUniform,
        R: uniform::SampleRange<T>,
    {
        self.gen.gen_range(range)
    }

    /// Rolls a single die, returning a face in 1..=faces
    pub fn roll(&mut self, faces: u32) -> u32 {
        debug_assert!(faces >= 1);
        self.gen_range(1..=faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_rolls() {
        let mut a = Rng::from_seed(42);
        let mut b = Rng::from_seed(42);
        let a: Vec<u32> = (0..32).map(|_| a.roll(20)).collect();
        let b: Vec<u32> = (0..32).map(|_| b.roll(20)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn rolls_stay_on_the_die() {
        let mut rng = Rng::from_seed(7);
        for _ in 0..1000 {
            let roll = rng.roll(6);
            assert!((1..=6).contains(&roll), "rolled {roll}");
        }
    }

    #[test]
    fn one_faced_die_always_rolls_one() {
        let mut rng = Rng::from_seed(0);
        assert!((0..100).all(|_| rng.roll(1) == 1));
    }

    #[test]
    fn initial_seed_is_kept() {
        assert_eq!(Rng::with_seed(Some(99)).initial_seed, 99);
    }
}
