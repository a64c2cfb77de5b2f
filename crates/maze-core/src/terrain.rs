//! Terrain kinds and their traversal weights.

use std::fmt;

/// Roll below this is water.
pub const WATER_CHANCE: f64 = 0.03;
/// Roll below this (and not water) is mud.
pub const MUD_CHANCE: f64 = 0.08;
/// Roll below this (and not mud) is grass.
pub const GRASS_CHANCE: f64 = 0.15;

/// Descriptive terrain kind of a cell. Determines the cell's weight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Default,
    Grass,
    Mud,
    Water,
}

impl Terrain {
    pub const ALL: [Terrain; 4] = [Terrain::Default, Terrain::Grass, Terrain::Mud, Terrain::Water];

    /// Traversal cost of entering a cell of this kind.
    #[inline]
    pub const fn weight(self) -> i32 {
        match self {
            Terrain::Default => 1,
            Terrain::Grass => 2,
            Terrain::Mud => 5,
            Terrain::Water => 10,
        }
    }

    /// Classify a uniform roll in `[0, 1)` using the fixed cumulative
    /// thresholds.
    pub fn from_roll(roll: f64) -> Terrain {
        if roll < WATER_CHANCE {
            Terrain::Water
        } else if roll < MUD_CHANCE {
            Terrain::Mud
        } else if roll < GRASS_CHANCE {
            Terrain::Grass
        } else {
            Terrain::Default
        }
    }

    /// Character representation used by text renderers.
    pub const fn rune(self) -> char {
        match self {
            Terrain::Default => ' ',
            Terrain::Grass => '"',
            Terrain::Mud => '~',
            Terrain::Water => '=',
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Default => "Default",
            Terrain::Grass => "Grass",
            Terrain::Mud => "Mud",
            Terrain::Water => "Water",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights() {
        let w: Vec<i32> = Terrain::ALL.iter().map(|t| t.weight()).collect();
        assert_eq!(w, vec![1, 2, 5, 10]);
    }

    #[test]
    fn roll_thresholds() {
        assert_eq!(Terrain::from_roll(0.0), Terrain::Water);
        assert_eq!(Terrain::from_roll(0.0299), Terrain::Water);
        assert_eq!(Terrain::from_roll(0.03), Terrain::Mud);
        assert_eq!(Terrain::from_roll(0.079), Terrain::Mud);
        assert_eq!(Terrain::from_roll(0.08), Terrain::Grass);
        assert_eq!(Terrain::from_roll(0.149), Terrain::Grass);
        assert_eq!(Terrain::from_roll(0.15), Terrain::Default);
        assert_eq!(Terrain::from_roll(0.999), Terrain::Default);
    }
}
