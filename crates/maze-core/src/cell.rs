//! Maze cells: [`Walls`] bitmask and [`Cell`].

use std::ops::BitOr;

use crate::geom::Side;
use crate::terrain::Terrain;

// ---------------------------------------------------------------------------
// Walls
// ---------------------------------------------------------------------------

/// Bitmask of the walls standing around a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls(pub u8);

impl Walls {
    pub const NONE: Self = Self(0);
    pub const TOP: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const BOTTOM: Self = Self(1 << 2);
    pub const LEFT: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    /// The single-bit mask for `side`.
    #[inline]
    pub const fn of(side: Side) -> Self {
        match side {
            Side::Top => Self::TOP,
            Side::Right => Self::RIGHT,
            Side::Bottom => Self::BOTTOM,
            Side::Left => Self::LEFT,
        }
    }

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the wall on `side` is standing.
    #[inline]
    pub const fn has(self, side: Side) -> bool {
        self.contains(Self::of(side))
    }

    /// Knock down the wall on `side`.
    #[inline]
    pub fn remove(&mut self, side: Side) {
        self.0 &= !Self::of(side).0;
    }

    /// Number of standing walls.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for Walls {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One grid position's persistent state: walls, terrain and weight.
///
/// Search bookkeeping does not live here; see the solver crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell {
    pub(crate) walls: Walls,
    terrain: Terrain,
    weight: i32,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            walls: Walls::ALL,
            terrain: Terrain::Default,
            weight: Terrain::Default.weight(),
        }
    }
}

impl Cell {
    /// Walls currently standing around the cell.
    #[inline]
    pub fn walls(&self) -> Walls {
        self.walls
    }

    /// Terrain kind of the cell.
    #[inline]
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Traversal cost of entering the cell. Always at least 1.
    #[inline]
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Set the terrain, which also sets the weight.
    pub fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
        self.weight = terrain.weight();
    }

    /// Override the weight without touching the terrain kind. Values below 1
    /// are rejected by [`Grid::set_weight`](crate::Grid::set_weight).
    pub(crate) fn force_weight(&mut self, weight: i32) {
        self.weight = weight;
    }
}

/// Serialized form of a [`Cell`], checked by the grid before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub(crate) struct RawCell {
    pub(crate) walls: Walls,
    pub(crate) terrain: Terrain,
    pub(crate) weight: i32,
}

#[cfg(feature = "serde")]
impl From<RawCell> for Cell {
    fn from(raw: RawCell) -> Self {
        Self {
            // Bits above the four sides carry no meaning.
            walls: Walls(raw.walls.0 & Walls::ALL.0),
            terrain: raw.terrain,
            weight: raw.weight,
        }
    }
}
