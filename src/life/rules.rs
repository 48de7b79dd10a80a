//! Rule table generation for B3/S23.

/// Next-state lookup indexed by `(alive, live neighbor count)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    table: [[bool; 9]; 2],
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTable {
    pub fn new() -> Self {
        let mut table = [[false; 9]; 2];
        for (alive, row) in table.iter_mut().enumerate() {
            for (neighbors, out) in row.iter_mut().enumerate() {
                *out = output_for(alive == 1, neighbors as u8);
            }
        }
        Self { table }
    }

    /// Whether a cell is alive in the next generation. A count above 8
    /// cannot occur on a grid and yields dead.
    #[inline(always)]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        self.table[alive as usize]
            .get(neighbors as usize)
            .copied()
            .unwrap_or(false)
    }
}

fn output_for(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}
