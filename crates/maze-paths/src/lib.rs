//! Maze solving on maze-core grids.
//!
//! This crate searches from a grid's start `(0, 0)` to its goal
//! `(rows - 1, cols - 1)` with one of four strategies:
//!
//! - **BFS**: fewest steps, weights ignored
//! - **DFS**: some path, no optimality
//! - **Dijkstra**: minimum total weight
//! - **A\***: minimum total weight, guided by Manhattan distance
//!
//! All of them run through [`Solver`], which records the exploration trace
//! (cells in the order they were settled), the final path and
//! [`SearchStats`]. [`Solver::solve_alternative`] repeats a search while
//! penalising a previous path so that weighted searches look for another way.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, connected components |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`Grid`](maze_core::Grid) implements all three, with the cost of a move
//! being the weight of the destination cell.

mod algorithm;
pub mod components;
mod distance;
mod frontier;
mod penalty;
mod search;
mod solver;
mod stats;
mod traits;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use components::{Components, is_perfect, reachable};
pub use distance::manhattan;
pub use penalty::{ALT_PATH_PENALTY, Penalized};
pub use solver::{Solver, UNREACHABLE};
pub use stats::SearchStats;
pub use traits::{AstarPather, Pather, WeightedPather};
