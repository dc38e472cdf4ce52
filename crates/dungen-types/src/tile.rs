use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr};

/// Classification of a single dungeon grid cell.
///
/// The discriminants double as the byte values stored in exported map files.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount,
    FromRepr,
)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Void = 0,
    Floor = 1,
    Wall = 2,
    Door = 3,
}

impl Tile {
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::Floor | Self::Door)
    }

    /// Character used when drawing the minimap.
    pub const fn glyph(self) -> char {
        match self {
            Self::Void => ' ',
            Self::Floor => '.',
            Self::Wall => '#',
            Self::Door => '+',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn count() {
        assert_eq!(Tile::COUNT, 4);
    }

    #[test]
    fn discriminants() {
        assert_eq!(Tile::Void as u8, 0);
        assert_eq!(Tile::Floor as u8, 1);
        assert_eq!(Tile::Wall as u8, 2);
        assert_eq!(Tile::Door as u8, 3);
    }

    #[test]
    fn walkable_classification() {
        assert!(Tile::Floor.is_walkable());
        assert!(Tile::Door.is_walkable());
        assert!(!Tile::Wall.is_walkable());
        assert!(!Tile::Void.is_walkable());
    }

    #[test]
    fn glyphs_are_distinct() {
        let glyphs: std::collections::HashSet<char> = Tile::iter().map(Tile::glyph).collect();
        assert_eq!(glyphs.len(), Tile::COUNT);
        assert!(!glyphs.contains(&'@'));
    }

    #[test]
    fn round_trip() {
        for tile in Tile::iter() {
            assert_eq!(Tile::from_repr(tile as u8), Some(tile));
        }
        assert_eq!(Tile::from_repr(4), None);
    }
}
