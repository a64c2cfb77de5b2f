//! A rectangular maze grid.
//!
//! [`Grid`] owns a row-major array of [`Cell`] values and answers adjacency
//! queries derived from wall state. Walls are only ever removed in mirrored
//! pairs, so the wall on side `S` of a cell and the wall on the opposite side
//! of its neighbour always agree.

use crate::cell::Cell;
use crate::error::MazeError;
use crate::geom::{Pos, Side};
use crate::terrain::Terrain;

/// Order in which [`Grid::neighbors`] reports passable neighbours. Searches
/// expand in this order, so it fixes BFS/DFS traces and equal-cost ties.
pub const NEIGHBOR_ORDER: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

/// A `rows` x `cols` grid of maze cells. Start is `(0, 0)`, goal is
/// `(rows - 1, cols - 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every wall standing and default terrain.
    pub fn new(rows: i32, cols: i32) -> Result<Self, MazeError> {
        if rows < 1 || cols < 1 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); (rows as usize) * (cols as usize)],
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The fixed start position.
    #[inline]
    pub fn start(&self) -> Pos {
        Pos::ZERO
    }

    /// The fixed goal position.
    #[inline]
    pub fn goal(&self) -> Pos {
        Pos::new(self.rows - 1, self.cols - 1)
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flat index `row * cols + col`, or `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let cols = self.cols as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Get the cell at a position, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Weight of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn weight(&self, p: Pos) -> Option<i32> {
        self.at(p).map(Cell::weight)
    }

    /// Iterate over `(Pos, &Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, c)| (self.pos(i), c))
    }

    // -----------------------------------------------------------------------
    // Walls and passages
    // -----------------------------------------------------------------------

    /// Whether the wall on `side` of `p` is standing. Out-of-range positions
    /// report every wall as standing.
    pub fn has_wall(&self, p: Pos, side: Side) -> bool {
        self.at(p).is_none_or(|c| c.walls.has(side))
    }

    /// Whether `a` and `b` are adjacent and joined by a passage.
    pub fn is_open(&self, a: Pos, b: Pos) -> bool {
        match a.side_towards(b) {
            Some(side) => self.contains(b) && !self.has_wall(a, side),
            None => false,
        }
    }

    /// Append the passable neighbours of `p` into `buf`, in
    /// [`NEIGHBOR_ORDER`]. The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        let Some(cell) = self.at(p) else {
            return;
        };
        for side in NEIGHBOR_ORDER {
            let n = p.step(side);
            if !cell.walls.has(side) && self.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Append every on-grid orthogonal neighbour of `p`, ignoring walls.
    pub fn geometric_neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        for n in p.neighbors_4() {
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Remove the wall on `side` of `p` together with the mirrored wall of
    /// the neighbour. Returns `false`, changing nothing, when the neighbour
    /// lies off the grid.
    pub fn carve(&mut self, p: Pos, side: Side) -> bool {
        let n = p.step(side);
        let (Some(i), Some(j)) = (self.idx(p), self.idx(n)) else {
            return false;
        };
        self.cells[i].walls.remove(side);
        self.cells[j].walls.remove(side.opposite());
        true
    }

    /// Open a passage between two orthogonally adjacent cells.
    pub fn carve_passage(&mut self, a: Pos, b: Pos) -> Result<(), MazeError> {
        if !self.contains(a) {
            return Err(MazeError::OutOfBounds(a));
        }
        if !self.contains(b) {
            return Err(MazeError::OutOfBounds(b));
        }
        let side = a.side_towards(b).ok_or(MazeError::NotAdjacent { a, b })?;
        self.carve(a, side);
        Ok(())
    }

    /// Every interior boundary exactly once, as `(cell, side)` with side
    /// [`Side::Bottom`] or [`Side::Right`], visiting cells in row-major order
    /// and the bottom boundary before the right one.
    pub fn edges(&self) -> impl Iterator<Item = (Pos, Side)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols).flat_map(move |c| {
                let p = Pos::new(r, c);
                let down = (r < self.rows - 1).then_some((p, Side::Bottom));
                let right = (c < self.cols - 1).then_some((p, Side::Right));
                down.into_iter().chain(right)
            })
        })
    }

    /// Number of interior boundaries, open or not.
    pub fn edge_count(&self) -> usize {
        let (r, c) = (self.rows as usize, self.cols as usize);
        (r - 1) * c + r * (c - 1)
    }

    /// Number of open passages between cells.
    pub fn passage_count(&self) -> usize {
        self.edges()
            .filter(|&(p, side)| !self.has_wall(p, side))
            .count()
    }

    /// Remove every interior wall. Border walls stay.
    pub fn open_all(&mut self) {
        let edges: Vec<(Pos, Side)> = self.edges().collect();
        for (p, side) in edges {
            self.carve(p, side);
        }
    }

    /// Raise every wall and restore default terrain.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    // -----------------------------------------------------------------------
    // Terrain
    // -----------------------------------------------------------------------

    /// Set the terrain (and therefore weight) of the cell at `p`.
    pub fn set_terrain(&mut self, p: Pos, terrain: Terrain) -> Result<(), MazeError> {
        let i = self.idx(p).ok_or(MazeError::OutOfBounds(p))?;
        self.cells[i].set_terrain(terrain);
        Ok(())
    }

    /// Assign terrain to every cell using a function of its position.
    pub fn fill_terrain(&mut self, mut f: impl FnMut(Pos) -> Terrain) {
        let cols = self.cols as usize;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let p = Pos::new((i / cols) as i32, (i % cols) as i32);
            cell.set_terrain(f(p));
        }
    }

    /// Force the weight of the cell at `p`, leaving its terrain kind alone.
    pub fn set_weight(&mut self, p: Pos, weight: i32) -> Result<(), MazeError> {
        let i = self.idx(p).ok_or(MazeError::OutOfBounds(p))?;
        if weight < 1 {
            return Err(MazeError::InvalidWeight { pos: p, weight });
        }
        self.cells[i].force_weight(weight);
        Ok(())
    }

    /// Sum of all cell weights.
    pub fn total_weight(&self) -> i64 {
        self.cells.iter().map(|c| c.weight() as i64).sum()
    }
}

/// Serialized form of a [`Grid`]. Loading goes through the same checks as
/// building a grid by hand.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    rows: i32,
    cols: i32,
    cells: Vec<crate::cell::RawCell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = MazeError;

    fn try_from(raw: RawGrid) -> Result<Self, MazeError> {
        if raw.rows < 1 || raw.cols < 1 {
            return Err(MazeError::InvalidDimensions {
                rows: raw.rows,
                cols: raw.cols,
            });
        }
        // Compare before allocating so oversized dimensions are cheap to reject.
        let expected = (raw.rows as usize).saturating_mul(raw.cols as usize);
        if raw.cells.len() != expected {
            return Err(MazeError::CellCount {
                expected,
                found: raw.cells.len(),
            });
        }
        let mut grid = Grid::new(raw.rows, raw.cols)?;
        for (i, cell) in raw.cells.into_iter().enumerate() {
            if cell.weight < 1 {
                return Err(MazeError::InvalidWeight {
                    pos: grid.pos(i),
                    weight: cell.weight,
                });
            }
            grid.cells[i] = Cell::from(cell);
        }
        for (p, side) in grid.edges() {
            let n = p.step(side);
            if grid.has_wall(p, side) != grid.has_wall(n, side.opposite()) {
                return Err(MazeError::MismatchedWall { pos: p, side });
            }
        }
        Ok(grid)
    }
}
