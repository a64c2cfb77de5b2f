use std::fmt;

use maze_core::{Grid, Pos};

/// Figures derived from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Whether the goal was reached.
    pub found: bool,
    /// Number of cells settled, i.e. the length of the exploration trace.
    pub explored: usize,
    /// Largest number of entries the open list held at once.
    pub peak_frontier: usize,
    /// Cells on the final path, both endpoints included. Zero if not found.
    pub path_length: usize,
    /// Sum of the base weights of every path cell, start included.
    pub path_cost: i64,
    /// Wall-clock duration of the bare search loop.
    pub elapsed_micros: u64,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cells Explored: {}", self.explored)?;
        if self.found {
            writeln!(f, "Path Length: {}", self.path_length)?;
            writeln!(f, "Total Cost: {}", self.path_cost)?;
        } else {
            writeln!(f, "Path Length: -")?;
            writeln!(f, "Total Cost: -")?;
        }
        write!(f, "Time: {} \u{b5}s", self.elapsed_micros)
    }
}

/// Sum of the grid's own weights along `path`.
///
/// Searches over a penalised view never write the penalty back into the
/// grid, so summing the grid's weights reports the true cost even when the
/// path runs through penalised cells.
pub(crate) fn path_cost(grid: &Grid, path: &[Pos]) -> i64 {
    path.iter()
        .filter_map(|&p| grid.weight(p))
        .map(i64::from)
        .sum()
}
