use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Sides of a walkable cell that face something solid and need a wall
    /// surface. North is toward negative `z`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct WallFaces: u8 {
        const NORTH = 1;
        const EAST  = 2;
        const SOUTH = 4;
        const WEST  = 8;
    }
}

impl WallFaces {
    /// Flags in the same order as [`crate::Position::neighbors4`].
    pub const ORDER: [WallFaces; 4] = [Self::NORTH, Self::EAST, Self::SOUTH, Self::WEST];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values() {
        assert_eq!(WallFaces::NORTH.bits(), 1);
        assert_eq!(WallFaces::WEST.bits(), 8);
        assert_eq!(WallFaces::all().bits(), 15);
    }

    #[test]
    fn combinations() {
        let corner = WallFaces::NORTH | WallFaces::WEST;
        assert!(corner.contains(WallFaces::NORTH));
        assert!(!corner.contains(WallFaces::EAST));
        assert_eq!(corner.iter().count(), 2);
    }
}
