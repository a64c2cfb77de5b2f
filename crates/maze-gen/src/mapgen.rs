//! Maze generation algorithms.
//!
//! Provides two spanning-tree builders:
//! - **Randomized Prim's**: grows the maze from the start cell by repeatedly
//!   attaching a random frontier cell to a random visited neighbour.
//! - **Randomized Kruskal's**: visits every interior edge in random order and
//!   carves it when it joins two disjoint regions.
//!
//! Both leave a perfect maze (a spanning tree over the cells). Loops and
//! weighted terrain can be layered on top afterwards.

use maze_core::{Grid, MazeError, Pos, Side, Terrain};
use rand::{Rng, RngExt};
use rand::seq::SliceRandom;

use crate::config::{MazeConfig, Spanning};
use crate::dsu::DisjointSet;

/// Maze generator operating on an owned [`Grid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new MazeGen with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Create a new MazeGen over a fresh `rows` x `cols` grid.
    pub fn new(rows: i32, cols: i32, rng: R) -> Result<Self, MazeError> {
        Ok(Self::with_grid(Grid::new(rows, cols)?, rng))
    }

    /// Replace the grid with a fresh one of the given dimensions.
    pub fn resize(&mut self, rows: i32, cols: i32) -> Result<(), MazeError> {
        self.grid = Grid::new(rows, cols)?;
        log::debug!("mapgen: resized to {rows}x{cols}");
        Ok(())
    }

    /// The grid being generated.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the generator, keeping the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Build a whole maze from `cfg`: resize, spanning tree, optional loops,
    /// optional terrain.
    pub fn generate(&mut self, cfg: &MazeConfig) -> Result<(), MazeError> {
        self.resize(cfg.rows, cfg.cols)?;
        self.spanning_tree(cfg.spanning);
        if let Some(p) = cfg.loop_probability {
            self.add_loops(p);
        }
        if cfg.terrain {
            self.generate_terrain();
        }
        Ok(())
    }

    /// Carve a perfect maze with the chosen algorithm. Returns the number of
    /// passages carved, always `rows * cols - 1`.
    pub fn spanning_tree(&mut self, algorithm: Spanning) -> usize {
        match algorithm {
            Spanning::Prim => self.generate_prim(),
            Spanning::Kruskal => self.generate_kruskal(),
        }
    }

    /// Randomized Prim's algorithm.
    ///
    /// Resets the grid, marks the start visited and seeds the frontier with
    /// its neighbours. Each step removes a uniformly random frontier cell,
    /// joins it to a uniformly random visited neighbour, marks it visited and
    /// pushes its unvisited neighbours. A cell is never in the frontier twice.
    pub fn generate_prim(&mut self) -> usize {
        self.grid.reset();
        let len = self.grid.len();
        let mut visited = vec![false; len];
        let mut in_frontier = vec![false; len];
        let mut frontier: Vec<Pos> = Vec::new();
        let mut nbuf: Vec<Pos> = Vec::with_capacity(4);
        let mut carved = 0usize;

        let start = self.grid.start();
        if let Some(si) = self.grid.idx(start) {
            visited[si] = true;
        }
        extend_frontier(&self.grid, start, &visited, &mut in_frontier, &mut frontier, &mut nbuf);

        while !frontier.is_empty() {
            let current = frontier.swap_remove(self.rng.random_range(0..frontier.len()));
            let Some(ci) = self.grid.idx(current) else {
                continue;
            };

            nbuf.clear();
            self.grid.geometric_neighbors(current, &mut nbuf);
            nbuf.retain(|&n| self.grid.idx(n).is_some_and(|ni| visited[ni]));
            if nbuf.is_empty() {
                continue;
            }
            let neighbor = nbuf[self.rng.random_range(0..nbuf.len())];
            if let Some(side) = current.side_towards(neighbor) {
                if self.grid.carve(current, side) {
                    carved += 1;
                }
            }

            visited[ci] = true;
            extend_frontier(&self.grid, current, &visited, &mut in_frontier, &mut frontier, &mut nbuf);
        }

        log::debug!(
            "mapgen: prim carved {carved} passages in {}x{} grid",
            self.grid.rows(),
            self.grid.cols()
        );
        carved
    }

    /// Randomized Kruskal's algorithm.
    ///
    /// Resets the grid, shuffles every interior edge and carves an edge iff
    /// its endpoints still belong to different sets, merging them.
    pub fn generate_kruskal(&mut self) -> usize {
        self.grid.reset();
        let mut edges: Vec<(Pos, Side)> = self.grid.edges().collect();
        edges.shuffle(&mut self.rng);

        let mut sets = DisjointSet::new(self.grid.len());
        let mut carved = 0usize;

        for (p, side) in edges {
            let (Some(a), Some(b)) = (self.grid.idx(p), self.grid.idx(p.step(side))) else {
                continue;
            };
            if sets.union(a, b) && self.grid.carve(p, side) {
                carved += 1;
            }
        }

        log::debug!(
            "mapgen: kruskal carved {carved} passages in {}x{} grid",
            self.grid.rows(),
            self.grid.cols()
        );
        carved
    }

    /// Independently remove each interior wall with the given probability,
    /// regardless of connectivity. Border walls are never touched.
    ///
    /// Returns the number of walls that were standing and got removed.
    pub fn add_loops(&mut self, probability: f64) -> usize {
        let edges: Vec<(Pos, Side)> = self.grid.edges().collect();
        let mut removed = 0usize;
        for (p, side) in edges {
            let roll: f64 = self.rng.random();
            if roll < probability && self.grid.has_wall(p, side) {
                self.grid.carve(p, side);
                removed += 1;
            }
        }
        log::debug!("mapgen: loops removed {removed} walls (p = {probability})");
        removed
    }

    /// Scatter weighted terrain. Start and goal are always
    /// [`Terrain::Default`]; every other cell draws one uniform roll.
    pub fn generate_terrain(&mut self) {
        let start = self.grid.start();
        let goal = self.grid.goal();
        let rng = &mut self.rng;
        self.grid.fill_terrain(|p| {
            if p == start || p == goal {
                return Terrain::Default;
            }
            Terrain::from_roll(rng.random())
        });
    }
}

/// Push every unvisited on-grid neighbour of `p` that is not already queued.
fn extend_frontier(
    grid: &Grid,
    p: Pos,
    visited: &[bool],
    in_frontier: &mut [bool],
    frontier: &mut Vec<Pos>,
    nbuf: &mut Vec<Pos>,
) {
    nbuf.clear();
    grid.geometric_neighbors(p, nbuf);
    for &n in nbuf.iter() {
        let Some(ni) = grid.idx(n) else {
            continue;
        };
        if !visited[ni] && !in_frontier[ni] {
            in_frontier[ni] = true;
            frontier.push(n);
        }
    }
}
