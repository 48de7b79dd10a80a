//! Error types shared by the grid, engine and raster encoder.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    /// A grid dimension or pixel-block size was zero, or a derived size
    /// does not fit the target integer type.
    #[error("invalid {what}: {value} (expected an integer greater than 0)")]
    InvalidDimension { what: &'static str, value: usize },

    /// A grid does not have the dimensions the caller established for it.
    #[error("dimension mismatch: expected {}x{}, found {}x{}", expected.0, expected.1, found.0, found.1)]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// A flat cell buffer does not hold exactly `width * height` cells.
    #[error("expected {expected} cells, found {found}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("cell ({row},{col}) lies outside the {width}x{height} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("could not write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;
