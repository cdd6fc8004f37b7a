//! Sources of uniform randomness for tier rolls and catalog picks.
//!
//! The reward math never touches an RNG directly. It asks a [`RollSource`],
//! which lets tests script exact rolls and lets local runs use a fixed seed.
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies uniform draws.
pub trait RollSource: Send + Sync {
    /// A uniform value in `[0, 1)`.
    fn roll(&self) -> f64;

    /// A uniform integer in `[min, max]` inclusive. Returns `min` if `min >= max`.
    fn count(&self, min: u32, max: u32) -> u32;

    /// A uniform index into a slice of `len` elements. `len` must be non-zero.
    fn index(&self, len: usize) -> usize {
        let last = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.count(0, last) as usize
    }
}

/// Thread-local RNG; the default for production use.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRolls;

impl RollSource for ThreadRolls {
    fn roll(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }

    fn count(&self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Seeded RNG for reproducible runs.
///
/// The generator sits behind a mutex so one source can serve concurrent
/// tasks; sequences are reproducible only when calls are serialized.
#[derive(Debug)]
pub struct SeededRolls {
    rng: Mutex<StdRng>,
}

impl SeededRolls {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic while holding the lock cannot leave StdRng in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl RollSource for SeededRolls {
    fn roll(&self) -> f64 {
        self.with_rng(|rng| rng.gen_range(0.0..1.0))
    }

    fn count(&self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.with_rng(|rng| rng.gen_range(min..=max))
    }
}
