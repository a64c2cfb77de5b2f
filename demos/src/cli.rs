//! Command-line arguments for the `maze` binary.

use std::str::FromStr;

use clap::Parser;
use maze_gen::{MazeConfig, Spanning};
use maze_paths::Algorithm;

/// Generate a random maze and solve it.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "maze", version, about, long_about = None)]
pub struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i32).range(1..=1000))]
    pub rows: i32,

    /// Number of columns
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i32).range(1..=1000))]
    pub cols: i32,

    /// Spanning-tree generator: prim or kruskal
    #[arg(long, value_name = "NAME", default_value_t = Spanning::Prim, value_parser = Spanning::from_str)]
    pub generator: Spanning,

    /// Shorthand for --generator kruskal
    #[arg(long, conflicts_with = "generator")]
    pub kruskal: bool,

    /// Knock down extra walls with probability P to create loops
    #[arg(
        long,
        value_name = "P",
        num_args = 0..=1,
        default_missing_value = "0.05",
        value_parser = probability
    )]
    pub loops: Option<f64>,

    /// Scatter weighted terrain (grass, mud, water)
    #[arg(long)]
    pub terrain: bool,

    /// Search algorithm: bfs, dfs, dijkstra or astar
    #[arg(long, value_name = "NAME", default_value_t = Algorithm::AStar, value_parser = Algorithm::from_str)]
    pub algo: Algorithm,

    /// Also search for a route avoiding the first one
    #[arg(long)]
    pub alt: bool,

    /// Random seed for a reproducible maze
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the exploration order
    #[arg(long)]
    pub trace: bool,
}

impl Args {
    /// Generation settings selected on the command line.
    pub fn config(&self) -> MazeConfig {
        MazeConfig {
            rows: self.rows,
            cols: self.cols,
            spanning: if self.kruskal {
                Spanning::Kruskal
            } else {
                self.generator
            },
            loop_probability: self.loops,
            terrain: self.terrain,
        }
    }
}

fn probability(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{p} is not in 0..=1"))
    }
}
