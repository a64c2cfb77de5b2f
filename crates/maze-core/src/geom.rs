//! Geometry primitives: [`Pos`] and [`Side`].
//!
//! Positions are `(row, col)` pairs with rows growing downwards, so `(0, 0)`
//! is the top-left corner of a grid.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid position. Coordinates are signed so that neighbour arithmetic can
/// step off the grid and be rejected by a bounds check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The neighbour across `side`. May lie outside any grid.
    #[inline]
    pub const fn step(self, side: Side) -> Self {
        let (dr, dc) = side.delta();
        self.shift(dr, dc)
    }

    /// The four orthogonal neighbours, in [`Side::ALL`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Pos; 4] {
        Side::ALL.map(|s| self.step(s))
    }

    /// The side of `self` facing `other`, or `None` when the two positions
    /// are not orthogonally adjacent.
    pub fn side_towards(self, other: Pos) -> Option<Side> {
        match (other.row - self.row, other.col - self.col) {
            (-1, 0) => Some(Side::Top),
            (0, 1) => Some(Side::Right),
            (1, 0) => Some(Side::Bottom),
            (0, -1) => Some(Side::Left),
            _ => None,
        }
    }

    /// Whether `other` differs from `self` by exactly one row or one column.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.side_towards(other).is_some()
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// One of the four sides of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides, clockwise from the top.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Row/column offset of the neighbour across this side.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Side::Top => (-1, 0),
            Side::Right => (0, 1),
            Side::Bottom => (1, 0),
            Side::Left => (0, -1),
        }
    }

    /// The mirrored side, as seen from the neighbour.
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }
}
