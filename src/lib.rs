//! Edge-bounded Conway's Game of Life (B3/S23) with console and PNG output.

pub mod cli;
pub mod error;
pub mod life;
pub mod render;
pub use error::{LifeError, Result};
pub use life::{Grid, Run, Seed, StepEngine, initialize, run, step};
