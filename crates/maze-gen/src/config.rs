//! Generation settings.

use std::fmt;
use std::str::FromStr;

/// Wall-removal probability used when loops are requested without an
/// explicit value.
pub const DEFAULT_LOOP_PROBABILITY: f64 = 0.05;

/// Spanning-tree algorithm used to carve the base maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spanning {
    /// Randomized Prim's: grow from the start cell through a random frontier.
    #[default]
    Prim,
    /// Randomized Kruskal's: shuffle all edges, join disjoint sets.
    Kruskal,
}

impl fmt::Display for Spanning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spanning::Prim => f.write_str("Prim"),
            Spanning::Kruskal => f.write_str("Kruskal"),
        }
    }
}

/// A name that does not match any known generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpanning(pub String);

impl fmt::Display for UnknownSpanning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown maze generator \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownSpanning {}

impl FromStr for Spanning {
    type Err = UnknownSpanning;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prim" | "prims" | "prim's" => Ok(Spanning::Prim),
            "kruskal" | "kruskals" | "kruskal's" => Ok(Spanning::Kruskal),
            _ => Err(UnknownSpanning(s.to_string())),
        }
    }
}

/// Everything [`MazeGen::generate`](crate::MazeGen::generate) needs to
/// build a maze from scratch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: i32,
    pub cols: i32,
    pub spanning: Spanning,
    /// Per-wall removal probability after the spanning tree is built.
    /// `None` keeps the maze perfect.
    pub loop_probability: Option<f64>,
    /// Whether to scatter weighted terrain.
    pub terrain: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            spanning: Spanning::Prim,
            loop_probability: None,
            terrain: false,
        }
    }
}
