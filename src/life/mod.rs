//! Edge-bounded Game of Life core: grid storage, seeding and stepping.

mod engine;
mod grid;
mod rules;
mod seed;

pub use engine::{Generations, Run, StepEngine, run, step};
pub use grid::{Direction, Grid};
pub use rules::RuleTable;
pub use seed::{Seed, initialize};
