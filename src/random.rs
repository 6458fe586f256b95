//! Sources of the random squeeze count.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws an integer uniformly from the inclusive range `[min, max]`.
///
/// Callers guarantee `min <= max`.
pub trait RandomRange {
    fn next(&mut self, min: u32, max: u32) -> u32;
}

/// Non-deterministic source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomRange for ThreadRandom {
    fn next(&mut self, min: u32, max: u32) -> u32 {
        rand::rng().random_range(min..=max)
    }
}

/// Reproducible source: the same seed yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomRange for SeededRandom {
    fn next(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed list of values in order, cycling when exhausted.
///
/// Values are clamped into the requested range, so a script written for the
/// default range stays valid under a narrower one.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            cursor: 0,
        }
    }
}

impl RandomRange for ScriptedRandom {
    fn next(&mut self, min: u32, max: u32) -> u32 {
        let Some(&value) = self.values.get(self.cursor % self.values.len().max(1)) else {
            return min;
        };
        self.cursor += 1;
        value.clamp(min, max)
    }
}

impl<R: RandomRange + ?Sized> RandomRange for Box<R> {
    fn next(&mut self, min: u32, max: u32) -> u32 {
        (**self).next(min, max)
    }
}
