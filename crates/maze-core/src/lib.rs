//! **maze-core**: grid types for maze generation and search.
//!
//! A [`Grid`] is a rectangle of [`Cell`] values. Each cell carries four wall
//! flags, a [`Terrain`] kind and a traversal weight. Passable adjacency is
//! derived from the walls; see [`Grid::neighbors`].

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod terrain;

pub use cell::{Cell, Walls};
pub use error::MazeError;
pub use geom::{Pos, Side};
pub use grid::{Grid, NEIGHBOR_ORDER};
pub use terrain::Terrain;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(2, 3).unwrap();
        g.carve_passage(Pos::new(0, 0), Pos::new(1, 0)).unwrap();
        g.set_terrain(Pos::new(1, 2), Terrain::Mud).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    fn cell(walls: u8, weight: i32) -> String {
        format!(r#"{{"walls":{walls},"terrain":"Default","weight":{weight}}}"#)
    }

    fn load(rows: i32, cols: i32, cells: &[String]) -> Result<Grid, serde_json::Error> {
        let json = format!(r#"{{"rows":{rows},"cols":{cols},"cells":[{}]}}"#, cells.join(","));
        serde_json::from_str(&json)
    }

    #[test]
    fn loading_accepts_consistent_grid() {
        // 1x2 with the shared wall open on both sides.
        let g = load(1, 2, &[cell(0b1101, 1), cell(0b0111, 3)]).unwrap();
        assert!(g.is_open(Pos::new(0, 0), Pos::new(0, 1)));
        assert_eq!(g.weight(Pos::new(0, 1)), Some(3));
    }

    #[test]
    fn loading_rejects_weight_below_one() {
        let err = load(1, 3, &[cell(15, 1), cell(15, -5), cell(15, 1)]).unwrap_err();
        assert!(err.to_string().contains("weight -5 at (0, 1)"), "{err}");
    }

    #[test]
    fn loading_rejects_wrong_cell_count() {
        let err = load(2, 2, &[]).unwrap_err();
        assert!(err.to_string().contains("expected 4 cells, found 0"), "{err}");
    }

    #[test]
    fn loading_rejects_bad_dimensions() {
        let err = load(0, 2, &[]).unwrap_err();
        assert!(err.to_string().contains("invalid dimensions 0x2"), "{err}");
    }

    #[test]
    fn loading_rejects_one_sided_wall() {
        let err = load(1, 2, &[cell(0b1101, 1), cell(15, 1)]).unwrap_err();
        assert!(err.to_string().contains("Right wall of (0, 0)"), "{err}");
    }
}
