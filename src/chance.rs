use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::weapon::Weapon;

/// Where the computer opponent gets its weapon from.
pub trait WeaponSource {
    fn draw_weapon(&mut self) -> Weapon;
}

/// Chooses one flavor line out of a pool.
pub trait MessagePicker {
    fn pick_message(&mut self, pool: &[&'static str]) -> &'static str;
}

/// Uniform draws from a pseudo-random generator.
pub struct RandomChance<R = SmallRng> {
    rng: R,
}

impl RandomChance {
    /// Seeded from the operating system; different every run.
    pub fn from_os() -> Self {
        RandomChance::with_rng(SmallRng::from_os_rng())
    }

    /// Reproducible opponent for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomChance::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomChance<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomChance { rng }
    }
}

impl<R: Rng> WeaponSource for RandomChance<R> {
    fn draw_weapon(&mut self) -> Weapon {
        Weapon::ALL[self.rng.random_range(0..Weapon::ALL.len())]
    }
}

impl<R: Rng> MessagePicker for RandomChance<R> {
    fn pick_message(&mut self, pool: &[&'static str]) -> &'static str {
        pool.choose(&mut self.rng).copied().unwrap_or_default()
    }
}
