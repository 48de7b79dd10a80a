//! Pseudo-random initial generations.
//!
//! The randomness source is always an explicit value handed in by the
//! caller; nothing here touches a process-wide RNG.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::grid::{Grid, checked_len};
use crate::error::Result;

/// Where the initial grid's entropy comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Seed {
    /// Seconds since the Unix epoch at the time of resolution.
    #[default]
    Clock,
    Fixed(u64),
}

impl Seed {
    /// The concrete seed value. `Clock` reads the system time on every call,
    /// so resolve once and keep the result when a run must be reproducible.
    pub fn resolve(self) -> u64 {
        match self {
            Seed::Fixed(value) => value,
            Seed::Clock => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    pub fn rng(self) -> StdRng {
        StdRng::seed_from_u64(self.resolve())
    }
}

/// Single bits pulled 64 at a time from an RNG, least significant first.
struct BitStream<'a, R: RngCore + ?Sized> {
    rng: &'a mut R,
    word: u64,
    remaining: u32,
}

impl<'a, R: RngCore + ?Sized> BitStream<'a, R> {
    fn new(rng: &'a mut R) -> Self {
        Self {
            rng,
            word: 0,
            remaining: 0,
        }
    }

    #[inline]
    fn next_bit(&mut self) -> bool {
        if self.remaining == 0 {
            self.word = self.rng.next_u64();
            self.remaining = u64::BITS;
        }
        let bit = self.word & 1 == 1;
        self.word >>= 1;
        self.remaining -= 1;
        bit
    }
}

/// A `width x height` grid with each cell set from one random bit.
pub fn initialize<R: RngCore + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Grid> {
    let len = checked_len(width, height)?;
    let mut bits = BitStream::new(rng);
    let cells = (0..len).map(|_| bits.next_bit()).collect();
    let grid = Grid::from_cells(width, height, cells)?;
    log::debug!(
        "initialized {width}x{height} grid with {} live cells",
        grid.population()
    );
    Ok(grid)
}
