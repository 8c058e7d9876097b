//! Injectable randomness for the zone selector.

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    fn next_f64(&self) -> f64;
}

/// [`RandomSource`] over a small, fast PRNG.
///
/// Two sources built with the same seed produce the same sequence.
pub struct SeededRandom {
    rng: Mutex<SmallRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Seeded from the system clock, for non-reproducible selections.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed);
        Self::new(seed)
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random::<f64>()
    }
}

/// Fisher-Yates shuffle driven by `random`.
pub fn shuffle<T>(items: &mut [T], random: &dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = ((random.next_f64() * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}

/// Up to `count` items drawn without replacement.
pub fn sample<T: Clone>(items: &[T], count: usize, random: &dyn RandomSource) -> Vec<T> {
    let mut pool = items.to_vec();
    shuffle(&mut pool, random);
    pool.truncate(count);
    pool
}
