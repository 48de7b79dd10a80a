use std::io::{self, Write};

use crate::life::Grid;

/// Text renderer: one line per row, one glyph per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsoleRenderer {
    pub alive: char,
    pub dead: char,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self {
            alive: '█',
            dead: ' ',
        }
    }
}

impl ConsoleRenderer {
    pub fn alive(mut self, glyph: char) -> Self {
        self.alive = glyph;
        self
    }

    pub fn dead(mut self, glyph: char) -> Self {
        self.dead = glyph;
        self
    }

    pub fn render(&self, grid: &Grid) -> String {
        let line_len = grid.width() * self.alive.len_utf8().max(self.dead.len_utf8()) + 1;
        let mut out = String::with_capacity(line_len * grid.height());
        for row in grid.rows() {
            out.extend(row.iter().map(|&alive| if alive { self.alive } else { self.dead }));
            out.push('\n');
        }
        out
    }

    /// Write `grid` followed by a blank separator line.
    pub fn write_generation<W: Write + ?Sized>(&self, out: &mut W, grid: &Grid) -> io::Result<()> {
        out.write_all(self.render(grid).as_bytes())?;
        out.write_all(b"\n")
    }
}
