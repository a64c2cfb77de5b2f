//! The expansion loop shared by every [`Algorithm`].
//!
//! A cell enters the exploration trace exactly once, when it is popped from
//! the frontier and was not already closed. The search stops the moment the
//! goal is popped, or fails when the frontier runs dry.
//!
//! BFS and DFS push a cell once, on first discovery, and set its parent then.
//! Dijkstra and A* push a cell every time its cost-to-reach improves
//! (`g(current) + cost(current, next) < g(next)`); the closed check discards
//! the stale copies.

use crate::Solver;
use crate::algorithm::Algorithm;
use crate::frontier::Frontier;
use crate::traits::AstarPather;

impl Solver {
    pub(crate) fn search<P: AstarPather>(
        &mut self,
        pather: &P,
        algorithm: Algorithm,
        start: usize,
        goal: usize,
    ) -> bool {
        let goal_point = self.point(goal);
        let heuristic = algorithm == Algorithm::AStar;
        let mut frontier = Frontier::for_algorithm(algorithm);
        let mut seq: u64 = 0;

        // Initialise the start node.
        {
            let h = if heuristic {
                pather.estimate(self.point(start), goal_point)
            } else {
                0
            };
            let node = self.touch(start);
            node.g = 0;
            node.h = h;
            node.f = h;
            node.discovered = true;
        }
        frontier.push(start, self.nodes[start].f, seq);
        self.stats.peak_frontier = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = frontier.pop() else {
                break 'search false;
            };

            // Skip stale entries.
            if self.touch(ci).closed {
                continue;
            }
            self.nodes[ci].closed = true;
            let current_point = self.point(ci);
            self.trace.push(current_point);

            if ci == goal {
                break 'search true;
            }

            let current_g = self.nodes[ci].g;
            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };

                let priority = if algorithm.is_weighted() {
                    let tentative_g = current_g.saturating_add(pather.cost(current_point, np));
                    let h = if heuristic {
                        pather.estimate(np, goal_point)
                    } else {
                        0
                    };
                    let n = self.touch(ni);
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                    n.g = tentative_g;
                    n.h = h;
                    n.f = tentative_g.saturating_add(h);
                    n.parent = ci;
                    n.discovered = true;
                    n.f
                } else {
                    let n = self.touch(ni);
                    if n.discovered {
                        continue;
                    }
                    n.g = current_g + 1;
                    n.f = n.g;
                    n.parent = ci;
                    n.discovered = true;
                    0
                };

                seq += 1;
                frontier.push(ni, priority, seq);
            }
            self.stats.peak_frontier = self.stats.peak_frontier.max(frontier.len());
        };

        self.nbuf = nbuf;
        found
    }
}
