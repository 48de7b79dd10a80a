//! Grayscale raster output.
//!
//! Each cell becomes a `block_size x block_size` square of 8-bit gray pixels.
//! With the default [`Polarity::AliveDark`] live cells are black (0) and dead
//! cells white (255).

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{LifeError, Result};
use crate::life::Grid;

const ALIVE_DARK: u8 = 0;
const DEAD_LIGHT: u8 = 255;

/// Mapping from cell state to pixel value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Polarity {
    /// Alive = 0, dead = 255.
    #[default]
    AliveDark,
    /// Alive = 255, dead = 0.
    AliveLight,
}

impl Polarity {
    #[inline]
    pub fn shade(self, alive: bool) -> u8 {
        match (self, alive) {
            (Polarity::AliveDark, true) | (Polarity::AliveLight, false) => ALIVE_DARK,
            (Polarity::AliveDark, false) | (Polarity::AliveLight, true) => DEAD_LIGHT,
        }
    }
}

/// An 8-bit single-channel image, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterEncoder {
    block_size: usize,
    polarity: Polarity,
}

fn scaled(cells: usize, block_size: usize, what: &'static str) -> Result<u32> {
    cells
        .checked_mul(block_size)
        .and_then(|px| u32::try_from(px).ok())
        .ok_or(LifeError::InvalidDimension { what, value: cells })
}

impl RasterEncoder {
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(LifeError::InvalidDimension {
                what: "pixel block size",
                value: block_size,
            });
        }
        Ok(Self {
            block_size,
            polarity: Polarity::default(),
        })
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn rasterize(&self, grid: &Grid) -> Result<Raster> {
        let s = self.block_size;
        let width = scaled(grid.width(), s, "raster width")?;
        let height = scaled(grid.height(), s, "raster height")?;
        let total = (width as usize)
            .checked_mul(height as usize)
            .ok_or(LifeError::InvalidDimension {
                what: "raster size",
                value: grid.len(),
            })?;

        let mut pixels = Vec::with_capacity(total);
        let mut line = Vec::with_capacity(width as usize);
        for row in grid.rows() {
            line.clear();
            for &alive in row {
                line.extend(std::iter::repeat_n(self.polarity.shade(alive), s));
            }
            for _ in 0..s {
                pixels.extend_from_slice(&line);
            }
        }
        Ok(Raster { width, height, pixels })
    }

    /// Encode `grid` as a grayscale PNG at `path`.
    ///
    /// The image is staged in a sibling temporary file and renamed over
    /// `path` only after it was written completely.
    pub fn write_png(&self, grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let raster = self.rasterize(grid)?;
        let staging = staging_path(path);
        let io_err = |source| LifeError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Err(err) = encode_png(&raster, &staging) {
            let _ = fs::remove_file(&staging);
            return Err(io_err(err));
        }
        if let Err(err) = fs::rename(&staging, path) {
            let _ = fs::remove_file(&staging);
            return Err(io_err(err));
        }
        log::info!(
            "wrote {}x{} image to {}",
            raster.width(),
            raster.height(),
            path.display()
        );
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "conway.png".to_string());
    path.with_file_name(format!(".{name}.{}.partial", std::process::id()))
}

fn encode_png(raster: &Raster, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(&mut w, raster.width(), raster.height());
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    encoder
        .add_text_chunk("Title".to_string(), "nth_conway".to_string())
        .map_err(io::Error::other)?;

    let mut writer = encoder.write_header().map_err(io::Error::other)?;
    writer
        .write_image_data(raster.pixels())
        .map_err(io::Error::other)?;
    writer.finish().map_err(io::Error::other)?;
    w.flush()
}
