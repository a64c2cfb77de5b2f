//! Cost overlay used to steer a search away from a previous path.

use maze_core::{Grid, Pos};

use crate::distance::manhattan;
use crate::solver::UNREACHABLE;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Extra cost of entering a cell that lies on the previous path.
pub const ALT_PATH_PENALTY: i32 = 1000;

/// A read-only view of a [`Grid`] where entering any of a set of cells costs
/// an extra fixed penalty. The grid itself is never modified.
pub struct Penalized<'a> {
    grid: &'a Grid,
    penalized: Vec<bool>,
    penalty: i32,
}

impl<'a> Penalized<'a> {
    /// Penalise every on-grid cell of `cells`. Duplicates are penalised once.
    pub fn new(grid: &'a Grid, cells: &[Pos], penalty: i32) -> Self {
        let mut penalized = vec![false; grid.len()];
        for &p in cells {
            if let Some(i) = grid.idx(p) {
                penalized[i] = true;
            }
        }
        Self {
            grid,
            penalized,
            penalty,
        }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Whether entering `p` pays the penalty.
    pub fn is_penalized(&self, p: Pos) -> bool {
        self.grid.idx(p).is_some_and(|i| self.penalized[i])
    }

    /// Weight of `p` as seen by the search.
    pub fn weight(&self, p: Pos) -> Option<i32> {
        let w = self.grid.weight(p)?;
        if self.is_penalized(p) {
            Some(w.saturating_add(self.penalty))
        } else {
            Some(w)
        }
    }
}

impl Pather for Penalized<'_> {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        self.grid.neighbors(p, buf);
    }
}

impl WeightedPather for Penalized<'_> {
    fn cost(&self, _from: Pos, to: Pos) -> i32 {
        self.weight(to).unwrap_or(UNREACHABLE)
    }
}

impl AstarPather for Penalized<'_> {
    fn estimate(&self, from: Pos, to: Pos) -> i32 {
        manhattan(from, to)
    }
}
