//! Turns rooms and corridors into a classified tile grid.

use dungen_types::{Corridor, Position, Rect, Room, Tile, TileGrid};

use crate::chunk::ChunkMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkReport {
    pub visited: usize,
    pub skipped: usize,
}

/// Cell ownership while classifying: which room floor, if any, covers it.
struct Ownership {
    width: usize,
    owner: Vec<Option<u32>>,
}

impl Ownership {
    fn new(grid: &TileGrid, rooms: &[Room]) -> Self {
        let width = grid.width() as usize;
        let mut owner = vec![None; width * grid.depth() as usize];
        for room in rooms {
            for p in room.rect.positions().filter(|p| grid.in_bounds(*p)) {
                owner[p.z as usize * width + p.x as usize] = Some(room.id.0);
            }
        }
        Self { width, owner }
    }

    fn is_room(&self, grid: &TileGrid, p: Position) -> bool {
        grid.in_bounds(p) && self.owner[p.z as usize * self.width + p.x as usize].is_some()
    }
}

pub(crate) fn classify(
    width: i32,
    depth: i32,
    rooms: &[Room],
    corridors: &[Corridor],
    chunk_size: i32,
) -> (TileGrid, ChunkReport) {
    let mut grid = TileGrid::new(width, depth);
    let ownership = Ownership::new(&grid, rooms);

    for room in rooms {
        for p in room.rect.positions() {
            grid.set(p, Tile::Floor);
        }
    }

    // Corridors stay off the outermost ring so walls always fit around them.
    let interior = Rect::new(1, 1, width - 2, depth - 2);
    let mut corridor_cells = Vec::new();
    for corridor in corridors {
        for p in corridor.cells().filter(|p| interior.contains(*p)) {
            if grid.get(p) == Some(Tile::Void) {
                grid.set(p, Tile::Floor);
                corridor_cells.push(p);
            }
        }
    }

    let mut doors = 0;
    for p in corridor_cells {
        if p.neighbors4().iter().any(|n| ownership.is_room(&grid, *n)) {
            grid.set(p, Tile::Door);
            doors += 1;
        }
    }
    log::debug!("marked {doors} door tiles");

    let report = build_walls(&mut grid, chunk_size);
    (grid, report)
}

/// Every void cell touching a walkable cell (8-neighborhood) becomes wall.
/// Chunks with no walkable tile in their neighborhood are skipped.
fn build_walls(grid: &mut TileGrid, chunk_size: i32) -> ChunkReport {
    let chunks = ChunkMap::new(grid, chunk_size);
    let mut report = ChunkReport::default();

    for (cx, cz) in chunks.chunks() {
        if !chunks.is_active(cx, cz) {
            report.skipped += 1;
            continue;
        }
        report.visited += 1;
        for p in chunks.bounds(cx, cz, grid).positions() {
            if grid.get(p) != Some(Tile::Void) {
                continue;
            }
            if p.neighbors8().iter().any(|n| grid.is_walkable(*n)) {
                grid.set(p, Tile::Wall);
            }
        }
    }
    report
}
