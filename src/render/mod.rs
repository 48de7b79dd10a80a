//! Output collaborators for finished generations.

mod console;
mod raster;

pub use console::ConsoleRenderer;
pub use raster::{Polarity, Raster, RasterEncoder};
