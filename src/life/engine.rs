//! Step engine: one dense pass per generation into a fresh grid.

use std::iter::FusedIterator;

use super::grid::{Grid, checked_len};
use super::rules::RuleTable;
use crate::error::{LifeError, Result};

/// The next generation of `grid`.
///
/// Every neighbor count is read from `grid`, which is only borrowed, and every
/// result is written to a newly allocated grid of the same dimensions.
pub fn step(grid: &Grid) -> Grid {
    advance(grid, &RuleTable::new())
}

fn advance(grid: &Grid, rules: &RuleTable) -> Grid {
    let (width, height) = grid.dimensions();
    let mut next = Vec::with_capacity(grid.len());
    for row in 0..height {
        for col in 0..width {
            let alive = grid.is_alive(row, col);
            next.push(rules.next_state(alive, grid.neighbor_count(row, col)));
        }
    }
    grid.with_cells(next)
}

/// A stepper bound to the dimensions established when a run begins.
#[derive(Clone, Debug)]
pub struct StepEngine {
    width: usize,
    height: usize,
    rules: RuleTable,
}

impl StepEngine {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            rules: RuleTable::new(),
        })
    }

    /// An engine sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            rules: RuleTable::new(),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Advance `grid` by one generation.
    pub fn step(&self, grid: &Grid) -> Result<Grid> {
        if grid.dimensions() != self.dimensions() {
            return Err(LifeError::DimensionMismatch {
                expected: self.dimensions(),
                found: grid.dimensions(),
            });
        }
        Ok(advance(grid, &self.rules))
    }
}

/// An initial grid and a number of generations to advance it.
///
/// Iterating a `Run` always starts over from the initial grid.
#[derive(Clone, Debug)]
pub struct Run {
    engine: StepEngine,
    initial: Grid,
    generations: usize,
}

/// Set up `n` generations starting from `initial`.
///
/// The sequence holds `n + 1` grids, so `n` is capped at `usize::MAX - 1`
/// to keep its length representable.
pub fn run(initial: Grid, n: usize) -> Run {
    let n = n.min(usize::MAX - 1);
    log::debug!(
        "run: {}x{} grid, {n} generations",
        initial.width(),
        initial.height()
    );
    Run {
        engine: StepEngine::for_grid(&initial),
        initial,
        generations: n,
    }
}

impl Run {
    pub fn initial(&self) -> &Grid {
        &self.initial
    }

    /// Number of steps; the sequence has one more element than this.
    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn iter(&self) -> Generations<'_> {
        Generations {
            engine: &self.engine,
            current: Some(self.initial.clone()),
            yielded: None,
            remaining: self.generations,
        }
    }

    /// The terminal grid, generation `n`.
    pub fn last(&self) -> Grid {
        let mut grid = self.initial.clone();
        for _ in 0..self.generations {
            grid = advance(&grid, &self.engine.rules);
        }
        grid
    }
}

impl<'a> IntoIterator for &'a Run {
    type Item = Grid;
    type IntoIter = Generations<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazily computed generations of a [`Run`].
///
/// Generation `k + 1` is computed only when it is requested, after generation
/// `k` has been handed out in full.
#[derive(Clone, Debug)]
pub struct Generations<'a> {
    engine: &'a StepEngine,
    /// The last grid handed out (the initial grid before the first call);
    /// `None` once exhausted.
    current: Option<Grid>,
    /// Index of the most recently yielded generation.
    yielded: Option<usize>,
    /// Steps still to apply.
    remaining: usize,
}

impl Generations<'_> {
    /// Index of the generation most recently returned by `next`.
    pub fn generation(&self) -> Option<usize> {
        self.yielded
    }
}

impl Iterator for Generations<'_> {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        let current = self.current.as_ref()?;
        let grid = match self.yielded {
            None => current.clone(),
            Some(_) if self.remaining == 0 => {
                self.current = None;
                return None;
            }
            Some(_) => {
                self.remaining -= 1;
                advance(current, &self.engine.rules)
            }
        };
        let index = self.yielded.map_or(0, |g| g + 1);
        log::trace!("generation {index}: population {}", grid.population());
        self.yielded = Some(index);
        // `Item` is owned, so the next step needs its own copy of this grid.
        self.current = Some(grid.clone());
        Some(grid)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // `run` caps `remaining` below `usize::MAX`, so this cannot overflow.
        let left = match (&self.current, self.yielded) {
            (None, _) => 0,
            (Some(_), None) => self.remaining + 1,
            (Some(_), Some(_)) => self.remaining,
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for Generations<'_> {}

impl FusedIterator for Generations<'_> {}
