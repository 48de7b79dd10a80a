//! Dense, edge-bounded grid storage.
//!
//! Cells live in a single row-major `Vec<bool>` (index = row * width + col).
//! Positions outside `[0, height) x [0, width)` do not exist: they are never
//! wrapped and read as dead when counting neighbors.

use crate::error::{LifeError, Result};

/// The 8 cardinal and intercardinal directions around a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    North = 0, // (r-1, c)
    South = 1, // (r+1, c)
    West  = 2, // (r, c-1)
    East  = 3, // (r, c+1)
    NW    = 4, // (r-1, c-1)
    NE    = 5, // (r-1, c+1)
    SW    = 6, // (r+1, c-1)
    SE    = 7, // (r+1, c+1)
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North, Direction::South,
        Direction::West,  Direction::East,
        Direction::NW,    Direction::NE,
        Direction::SW,    Direction::SE,
    ];

    /// The `(row, col)` offset for this direction.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West  => (0, -1),
            Direction::East  => (0, 1),
            Direction::NW    => (-1, -1),
            Direction::NE    => (-1, 1),
            Direction::SW    => (1, -1),
            Direction::SE    => (1, 1),
        }
    }
}

/// One generation of the automaton.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

/// Checks both dimensions and returns the cell count.
pub(crate) fn checked_len(width: usize, height: usize) -> Result<usize> {
    if width == 0 {
        return Err(LifeError::InvalidDimension { what: "width", value: width });
    }
    if height == 0 {
        return Err(LifeError::InvalidDimension { what: "height", value: height });
    }
    width
        .checked_mul(height)
        .ok_or(LifeError::InvalidDimension { what: "width * height", value: usize::MAX })
}

impl Grid {
    /// An all-dead grid.
    pub fn dead(width: usize, height: usize) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Wrap a row-major cell buffer.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
        let len = checked_len(width, height)?;
        if cells.len() != len {
            return Err(LifeError::CellCountMismatch {
                expected: len,
                found: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// A dead grid with the given `(row, col)` positions set alive.
    pub fn with_live_cells(width: usize, height: usize, live: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::dead(width, height)?;
        for &(row, col) in live {
            grid.set(row, col, true)?;
        }
        Ok(grid)
    }

    /// A grid of the same shape holding `cells`.
    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of cells; always `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, bool> {
        self.cells.chunks_exact(self.width)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// The cell at `(row, col)`, or `None` off-grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Whether `(row, col)` is alive. Off-grid positions are dead.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let Some(i) = self.index(row, col) else {
            return Err(LifeError::CellOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        };
        self.cells[i] = alive;
        Ok(())
    }

    /// Live neighbors of `(row, col)` among the up-to-8 adjacent positions
    /// inside the grid. Edge cells have 5 candidates and corners 3.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let mut count = 0u8;
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if self.is_alive(r, c) {
                count += 1;
            }
        }
        count
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live positions as `(row, col)` in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i / width, i % width))
    }
}
