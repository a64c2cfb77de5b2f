use maze_core::{Grid, Pos};

use crate::distance::manhattan;
use crate::solver::UNREACHABLE;

/// Minimal search interface: passable neighbour enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with weighted (positive-cost) moves.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Pos, to: Pos) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Pos, to: Pos) -> i32;
}

impl Pather for Grid {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        Grid::neighbors(self, p, buf);
    }
}

/// Entering a cell costs that cell's weight.
impl WeightedPather for Grid {
    fn cost(&self, _from: Pos, to: Pos) -> i32 {
        self.weight(to).unwrap_or(UNREACHABLE)
    }
}

/// Every step costs at least 1, so the Manhattan distance never
/// overestimates.
impl AstarPather for Grid {
    fn estimate(&self, from: Pos, to: Pos) -> i32 {
        manhattan(from, to)
    }
}
