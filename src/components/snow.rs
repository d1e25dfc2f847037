use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::constants::{HEIGHT, WIDTH};

/// A snowflake position on the scene grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub column: usize,
    pub row: usize,
}

impl Coordinate {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Seconds since the epoch, the per-run seed when none is configured.
pub fn time_seed() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
}

#[derive(Debug)]
pub struct SnowGenerator<R: Rng> {
    rng: R,
    width: usize,
    height: usize,
}

impl SnowGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SnowGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self::with_bounds(rng, WIDTH, HEIGHT)
    }

    pub fn with_bounds(rng: R, width: usize, height: usize) -> Self {
        Self { rng, width, height }
    }

    /// Draws `count` flakes, each uniformly placed. Duplicates are allowed.
    pub fn generate(&mut self, count: usize) -> Vec<Coordinate> {
        if self.width == 0 || self.height == 0 {
            return Vec::new();
        }

        let mut snow = Vec::with_capacity(count);
        for _ in 0..count {
            let column = self.rng.gen_range(0..self.width);
            let row = self.rng.gen_range(0..self.height);
            snow.push(Coordinate { column, row });
        }
        snow
    }
}
