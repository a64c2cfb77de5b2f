//! Connected-component labelling over passable adjacency.

use maze_core::{Grid, Pos};

use crate::traits::Pather;

/// Component label of every cell of a grid.
pub struct Components {
    labels: Vec<i32>,
    count: usize,
    cols: i32,
}

impl Components {
    /// Label every cell of `grid` with a connected-component ID, using
    /// `pather` for adjacency.
    ///
    /// Two cells share a label if there is a path of neighbours between them.
    pub fn label<P: Pather>(grid: &Grid, pather: &P) -> Self {
        let len = grid.len();
        let mut labels = vec![-1; len];
        let mut stack: Vec<usize> = Vec::new();
        let mut nbuf: Vec<Pos> = Vec::with_capacity(4);
        let mut label: i32 = 0;

        for start in 0..len {
            if labels[start] >= 0 {
                continue;
            }

            // Iterative DFS from `start`.
            stack.clear();
            stack.push(start);
            labels[start] = label;

            while let Some(ci) = stack.pop() {
                nbuf.clear();
                pather.neighbors(grid.pos(ci), &mut nbuf);
                for &np in nbuf.iter() {
                    if let Some(ni) = grid.idx(np) {
                        if labels[ni] < 0 {
                            labels[ni] = label;
                            stack.push(ni);
                        }
                    }
                }
            }

            label += 1;
        }

        Self {
            labels,
            count: label as usize,
            cols: grid.cols(),
        }
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Component of `p`, or `None` if out of range.
    pub fn at(&self, p: Pos) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.col >= self.cols {
            return None;
        }
        let i = (p.row * self.cols + p.col) as usize;
        self.labels.get(i).map(|&l| l as usize)
    }

    /// Whether every cell is reachable from every other.
    pub fn is_connected(&self) -> bool {
        self.count == 1
    }
}

/// Every cell reachable from `from` through open passages, `from` first.
pub fn reachable(grid: &Grid, from: Pos) -> Vec<Pos> {
    let mut result = Vec::new();
    let Some(si) = grid.idx(from) else {
        return result;
    };
    let mut seen = vec![false; grid.len()];
    let mut stack = vec![si];
    let mut nbuf: Vec<Pos> = Vec::with_capacity(4);
    seen[si] = true;
    result.push(from);

    while let Some(ci) = stack.pop() {
        nbuf.clear();
        grid.neighbors(grid.pos(ci), &mut nbuf);
        for &np in nbuf.iter() {
            if let Some(ni) = grid.idx(np) {
                if !seen[ni] {
                    seen[ni] = true;
                    stack.push(ni);
                    result.push(np);
                }
            }
        }
    }
    result
}

/// Whether the passages of `grid` form a spanning tree: connected, and
/// exactly one fewer passage than cells.
pub fn is_perfect(grid: &Grid) -> bool {
    grid.passage_count() + 1 == grid.len() && Components::label(grid, grid).is_connected()
}
