use std::fmt;

use crate::geom::{Pos, Side};

/// Contract violations on a maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Rows and columns must both be at least 1.
    InvalidDimensions { rows: i32, cols: i32 },
    /// A passage can only join two orthogonally adjacent cells.
    NotAdjacent { a: Pos, b: Pos },
    /// The position lies outside the grid.
    OutOfBounds(Pos),
    /// Weights must be at least 1.
    InvalidWeight { pos: Pos, weight: i32 },
    /// Stored cells do not match the stated dimensions.
    CellCount { expected: usize, found: usize },
    /// A wall is open on one side of a boundary but standing on the other.
    MismatchedWall { pos: Pos, side: Side },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "maze: invalid dimensions {rows}x{cols}, both must be >= 1")
            }
            Self::NotAdjacent { a, b } => {
                write!(f, "maze: cannot carve between non-adjacent cells {a} and {b}")
            }
            Self::OutOfBounds(p) => write!(f, "maze: position {p} is out of bounds"),
            Self::InvalidWeight { pos, weight } => {
                write!(f, "maze: weight {weight} at {pos} must be >= 1")
            }
            Self::CellCount { expected, found } => {
                write!(f, "maze: expected {expected} cells, found {found}")
            }
            Self::MismatchedWall { pos, side } => {
                write!(f, "maze: {side:?} wall of {pos} disagrees with its neighbour")
            }
        }
    }
}

impl std::error::Error for MazeError {}
