use std::time::Instant;

use maze_core::{Grid, Pos};

use crate::algorithm::Algorithm;
use crate::penalty::{ALT_PATH_PENALTY, Penalized};
use crate::stats::{SearchStats, path_cost};
use crate::traits::AstarPather;

/// Sentinel cost meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-search node state
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) discovered: bool,
    pub(crate) closed: bool,
    pub(crate) on_path: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            f: 0,
            parent: NO_PARENT,
            generation: 0,
            discovered: false,
            closed: false,
            on_path: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Runs searches from a grid's start to its goal and keeps the results of
/// the most recent one.
///
/// All bookkeeping (costs, parents, closed flags) lives here, in flat arrays
/// indexed like the grid, not in the grid's cells. Nodes are invalidated
/// lazily through a generation counter, so a reset is O(1).
pub struct Solver {
    pub(crate) rows: i32,
    pub(crate) cols: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) trace: Vec<Pos>,
    pub(crate) path: Vec<Pos>,
    pub(crate) stats: SearchStats,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Pos>,
}

impl Solver {
    /// Create a solver sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            nodes: vec![Node::default(); grid.len()],
            generation: 0,
            trace: Vec::new(),
            path: Vec::new(),
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Adapt to a grid of possibly different dimensions.
    ///
    /// If the new size fits within existing capacity, the node array is
    /// kept and only the generation is bumped. Otherwise it is reallocated.
    pub fn fit(&mut self, grid: &Grid) {
        if grid.rows() == self.rows && grid.cols() == self.cols {
            return;
        }
        self.rows = grid.rows();
        self.cols = grid.cols();
        if grid.len() > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(grid.len(), Node::default());
            self.generation = 0;
        }
        self.reset_solver_state();
    }

    /// Forget everything about the previous search: closed and path flags,
    /// parents, costs, trace, path and stats.
    pub fn reset_solver_state(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes could alias the new generation.
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
        self.trace.clear();
        self.path.clear();
        self.stats = SearchStats::default();
    }

    // -----------------------------------------------------------------------
    // Entry points
    // -----------------------------------------------------------------------

    /// Search from `grid.start()` to `grid.goal()` with `algorithm`.
    ///
    /// Returns whether the goal was reached. On failure the path is empty and
    /// only the trace and explored count are meaningful.
    pub fn solve(&mut self, grid: &Grid, algorithm: Algorithm) -> bool {
        self.run(grid, grid, algorithm)
    }

    /// Search again while every cell of `previous` costs an extra
    /// [`ALT_PATH_PENALTY`] to enter.
    ///
    /// Weighted searches route around the previous path wherever a detour
    /// exists. BFS and DFS ignore costs and may reuse it. The grid's weights
    /// are untouched, and the reported path cost uses them.
    pub fn solve_alternative(&mut self, grid: &Grid, algorithm: Algorithm, previous: &[Pos]) -> bool {
        let view = Penalized::new(grid, previous, ALT_PATH_PENALTY);
        self.run(grid, &view, algorithm)
    }

    fn run<P: AstarPather>(&mut self, grid: &Grid, pather: &P, algorithm: Algorithm) -> bool {
        self.fit(grid);
        self.reset_solver_state();

        let (Some(start), Some(goal)) = (grid.idx(grid.start()), grid.idx(grid.goal())) else {
            return false;
        };

        let t0 = Instant::now();
        let found = self.search(pather, algorithm, start, goal);
        let elapsed = t0.elapsed();

        self.stats.found = found;
        self.stats.explored = self.trace.len();
        self.stats.elapsed_micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        if found {
            self.reconstruct(goal);
            self.stats.path_length = self.path.len();
            self.stats.path_cost = path_cost(grid, &self.path);
        }

        log::debug!(
            "solver: {algorithm} on {}x{} found={found} explored={} length={} cost={} in {}us",
            self.rows,
            self.cols,
            self.stats.explored,
            self.stats.path_length,
            self.stats.path_cost,
            self.stats.elapsed_micros
        );
        found
    }

    fn reconstruct(&mut self, goal: usize) {
        let mut ci = goal;
        while ci != NO_PARENT {
            self.nodes[ci].on_path = true;
            let p = self.point(ci);
            self.path.push(p);
            ci = self.nodes[ci].parent;
        }
        self.path.reverse();
    }

    // -----------------------------------------------------------------------
    // Results
    // -----------------------------------------------------------------------

    /// Cells in the order they were settled by the last search.
    pub fn trace(&self) -> &[Pos] {
        &self.trace
    }

    /// Start-to-goal path of the last search, empty if none was found.
    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    /// Figures for the last search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn cells_explored(&self) -> usize {
        self.stats.explored
    }

    pub fn path_length(&self) -> usize {
        self.stats.path_length
    }

    pub fn path_cost(&self) -> i64 {
        self.stats.path_cost
    }

    pub fn elapsed_micros(&self) -> u64 {
        self.stats.elapsed_micros
    }

    /// Whether `p` was settled (closed) by the last search.
    pub fn is_searched(&self, p: Pos) -> bool {
        self.node(p).is_some_and(|n| n.closed)
    }

    /// Whether `p` lies on the last search's final path.
    pub fn on_final_path(&self, p: Pos) -> bool {
        self.node(p).is_some_and(|n| n.on_path)
    }

    /// Best known cost-to-reach of `p`. For BFS and DFS this is the hop
    /// depth at discovery.
    pub fn g_cost(&self, p: Pos) -> Option<i32> {
        self.node(p).map(|n| n.g).filter(|&g| g != UNREACHABLE)
    }

    /// Heuristic estimate recorded for `p`; zero for searches without one.
    pub fn h_cost(&self, p: Pos) -> Option<i32> {
        self.node(p).filter(|n| n.discovered).map(|n| n.h)
    }

    /// `g + h` recorded for `p`.
    pub fn f_cost(&self, p: Pos) -> Option<i32> {
        self.node(p).filter(|n| n.discovered).map(|n| n.f)
    }

    /// The cell `p` was reached from.
    pub fn parent(&self, p: Pos) -> Option<Pos> {
        self.node(p)
            .map(|n| n.parent)
            .filter(|&i| i != NO_PARENT)
            .map(|i| self.point(i))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a position to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Pos {
        let cols = self.cols as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Node for `p` if it was touched by the current search.
    fn node(&self, p: Pos) -> Option<&Node> {
        let n = &self.nodes[self.idx(p)?];
        (n.generation == self.generation).then_some(n)
    }

    /// Node at `idx`, reinitialised first if it belongs to an older search.
    #[inline]
    pub(crate) fn touch(&mut self, idx: usize) -> &mut Node {
        let generation = self.generation;
        let n = &mut self.nodes[idx];
        if n.generation != generation {
            *n = Node {
                generation,
                ..Node::default()
            };
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Terrain;

    fn open(rows: i32, cols: i32) -> Grid {
        let mut g = Grid::new(rows, cols).unwrap();
        g.open_all();
        g
    }

    #[test]
    fn trace_lists_each_cell_once() {
        let g = open(6, 6);
        let mut s = Solver::new(&g);
        for a in Algorithm::ALL {
            assert!(s.solve(&g, a));
            let mut seen = s.trace().to_vec();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), s.trace().len(), "{a}");
            assert_eq!(s.trace().first(), Some(&g.start()));
            assert_eq!(s.trace().last(), Some(&g.goal()));
            assert_eq!(s.cells_explored(), s.trace().len());
        }
    }

    #[test]
    fn path_is_connected_start_to_goal() {
        let mut g = open(5, 7);
        g.set_terrain(Pos::new(2, 3), Terrain::Water).unwrap();
        let mut s = Solver::new(&g);
        for a in Algorithm::ALL {
            assert!(s.solve(&g, a));
            let path = s.path();
            assert_eq!(path.first(), Some(&g.start()));
            assert_eq!(path.last(), Some(&g.goal()));
            for w in path.windows(2) {
                assert!(g.is_open(w[0], w[1]), "{a}: {} -> {}", w[0], w[1]);
            }
            assert!(path.iter().all(|&p| s.on_final_path(p)));
            assert_eq!(s.parent(g.start()), None);
        }
    }

    #[test]
    fn bfs_expands_top_bottom_left_right() {
        let g = open(2, 2);
        let mut s = Solver::new(&g);
        assert!(s.solve(&g, Algorithm::Bfs));
        assert_eq!(
            s.trace(),
            &[Pos::new(0, 0), Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1)]
        );
        assert_eq!(s.path(), &[Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1)]);
    }

    #[test]
    fn bfs_shortest_by_hops() {
        let g = open(4, 9);
        let mut s = Solver::new(&g);
        assert!(s.solve(&g, Algorithm::Bfs));
        assert_eq!(s.path_length(), 4 + 9 - 1);
        assert_eq!(s.g_cost(g.goal()), Some(4 + 9 - 2));
    }

    #[test]
    fn astar_costs_are_consistent() {
        let mut g = open(5, 5);
        g.set_weight(Pos::new(1, 1), 7).unwrap();
        let mut s = Solver::new(&g);
        assert!(s.solve(&g, Algorithm::AStar));
        for p in s.trace().to_vec() {
            let (g_, h, f) = (s.g_cost(p).unwrap(), s.h_cost(p).unwrap(), s.f_cost(p).unwrap());
            assert_eq!(f, g_ + h);
            assert_eq!(h, crate::manhattan(p, g.goal()));
        }
        assert_eq!(s.g_cost(g.start()), Some(0));
    }

    #[test]
    fn dijkstra_g_excludes_start_weight() {
        let g = open(3, 3);
        let mut s = Solver::new(&g);
        assert!(s.solve(&g, Algorithm::Dijkstra));
        assert_eq!(s.g_cost(g.goal()), Some(4));
        assert_eq!(s.path_cost(), 5);
        assert_eq!(s.h_cost(g.goal()), Some(0));
    }

    #[test]
    fn failure_leaves_empty_path() {
        let mut g = Grid::new(3, 3).unwrap();
        g.carve_passage(Pos::new(0, 0), Pos::new(0, 1)).unwrap();
        g.carve_passage(Pos::new(0, 0), Pos::new(1, 0)).unwrap();
        let mut s = Solver::new(&g);
        for a in Algorithm::ALL {
            assert!(!s.solve(&g, a));
            assert!(s.path().is_empty());
            assert_eq!(s.cells_explored(), 3);
            assert_eq!(s.path_length(), 0);
            assert_eq!(s.path_cost(), 0);
            assert!(!s.stats().found);
        }
    }

    #[test]
    fn reset_clears_previous_flags() {
        let g = open(4, 4);
        let mut s = Solver::new(&g);
        assert!(s.solve(&g, Algorithm::Dfs));
        let first_path = s.path().to_vec();
        let mut closed = Grid::new(4, 4).unwrap();
        closed.carve_passage(Pos::new(0, 0), Pos::new(0, 1)).unwrap();
        assert!(!s.solve(&closed, Algorithm::Bfs));
        for p in first_path {
            assert!(!s.on_final_path(p));
        }
        assert!(!s.is_searched(Pos::new(3, 3)));
        assert!(s.is_searched(Pos::new(0, 1)));
        s.reset_solver_state();
        assert!(!s.is_searched(Pos::new(0, 0)));
        assert!(s.trace().is_empty());
        assert_eq!(s.g_cost(Pos::new(0, 0)), None);
    }

    #[test]
    fn fit_follows_grid_size() {
        let small = open(2, 2);
        let big = open(6, 5);
        let mut s = Solver::new(&small);
        assert!(s.solve(&big, Algorithm::Bfs));
        assert_eq!(s.nodes.len(), 30);
        assert_eq!(s.path().last(), Some(&Pos::new(5, 4)));
        assert!(s.solve(&small, Algorithm::Bfs));
        assert_eq!(s.nodes.len(), 30);
        assert_eq!(s.path_length(), 3);
    }

    #[test]
    fn single_cell_is_trivially_solved() {
        let g = Grid::new(1, 1).unwrap();
        let mut s = Solver::new(&g);
        for a in Algorithm::ALL {
            assert!(s.solve(&g, a));
            assert_eq!(s.path(), &[Pos::ZERO]);
            assert_eq!(s.path_cost(), 1);
        }
    }

    #[test]
    fn generation_wrap_resets_nodes() {
        let g = open(2, 2);
        let mut s = Solver::new(&g);
        assert!(s.solve(&g, Algorithm::Bfs));
        s.generation = u32::MAX;
        s.reset_solver_state();
        assert_eq!(s.generation, 1);
        assert!(!s.is_searched(Pos::ZERO));
    }

    #[test]
    fn equal_runs_give_equal_traces() {
        let mut g = open(8, 8);
        g.set_weight(Pos::new(3, 3), 4).unwrap();
        let mut a = Solver::new(&g);
        let mut b = Solver::new(&g);
        for alg in Algorithm::ALL {
            a.solve(&g, alg);
            b.solve(&g, alg);
            assert_eq!(a.trace(), b.trace());
            assert_eq!(a.path(), b.path());
        }
    }
}
