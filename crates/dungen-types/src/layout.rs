use serde::{Deserialize, Serialize};

use crate::corridor::Corridor;
use crate::grid::TileGrid;
use crate::position::Position;
use crate::room::{Room, RoomId};
use crate::tile::Tile;
use crate::wall_faces::WallFaces;

/// A finished dungeon floor: classified tiles plus the rooms and corridors
/// they were built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub seed: u64,
    pub grid: TileGrid,
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
    pub spawn: Position,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutStats {
    pub rooms: usize,
    pub corridors: usize,
    pub floor: usize,
    pub wall: usize,
    pub door: usize,
    pub void: usize,
}

impl Layout {
    pub const fn width(&self) -> i32 {
        self.grid.width()
    }

    pub const fn depth(&self) -> i32 {
        self.grid.depth()
    }

    pub fn tile(&self, p: Position) -> Option<Tile> {
        self.grid.get(p)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// The room whose floor contains `p`. Walls and doors belong to no room.
    pub fn room_at(&self, p: Position) -> Option<&Room> {
        self.rooms.iter().find(|r| r.rect.contains(p))
    }

    pub fn walkable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.grid
            .iter()
            .filter(|(_, t)| t.is_walkable())
            .map(|(p, _)| p)
    }

    /// Sides of a walkable tile that need wall geometry; empty for
    /// non-walkable tiles. The grid edge counts as solid.
    pub fn wall_faces(&self, p: Position) -> WallFaces {
        if !self.grid.is_walkable(p) {
            return WallFaces::empty();
        }
        p.neighbors4()
            .into_iter()
            .zip(WallFaces::ORDER)
            .filter(|(n, _)| !self.grid.is_walkable(*n))
            .fold(WallFaces::empty(), |acc, (_, face)| acc | face)
    }

    pub fn stats(&self) -> LayoutStats {
        LayoutStats {
            rooms: self.rooms.len(),
            corridors: self.corridors.len(),
            floor: self.grid.count(Tile::Floor),
            wall: self.grid.count(Tile::Wall),
            door: self.grid.count(Tile::Door),
            void: self.grid.count(Tile::Void),
        }
    }
}
