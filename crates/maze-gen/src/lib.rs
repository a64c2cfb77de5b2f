//! Maze generation for maze-core grids: randomized Prim's and Kruskal's
//! spanning trees, loop injection and weighted terrain.

pub mod config;
pub mod dsu;
pub mod mapgen;

pub use config::{DEFAULT_LOOP_PROBABILITY, MazeConfig, Spanning, UnknownSpanning};
pub use dsu::DisjointSet;
pub use mapgen::MazeGen;
