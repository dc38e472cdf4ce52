use dungen_types::{Rect, TileGrid};

/// Splits a grid into square chunks and tracks which ones hold walkable
/// tiles, so whole empty regions can be skipped.
#[derive(Debug, Clone)]
pub struct ChunkMap {
    chunk_size: i32,
    cols: i32,
    rows: i32,
    walkable: Vec<u32>,
}

impl ChunkMap {
    pub fn new(grid: &TileGrid, chunk_size: i32) -> Self {
        let chunk_size = chunk_size.max(1);
        let cols = (grid.width() as u32).div_ceil(chunk_size as u32) as i32;
        let rows = (grid.depth() as u32).div_ceil(chunk_size as u32) as i32;
        let mut walkable = vec![0u32; cols as usize * rows as usize];
        for (p, tile) in grid.iter() {
            if tile.is_walkable() {
                let idx = (p.z / chunk_size) as usize * cols as usize + (p.x / chunk_size) as usize;
                walkable[idx] += 1;
            }
        }
        Self {
            chunk_size,
            cols,
            rows,
            walkable,
        }
    }

    pub const fn cols(&self) -> i32 {
        self.cols
    }

    pub const fn rows(&self) -> i32 {
        self.rows
    }

    pub fn walkable_count(&self, cx: i32, cz: i32) -> u32 {
        if cx < 0 || cz < 0 || cx >= self.cols || cz >= self.rows {
            return 0;
        }
        self.walkable[cz as usize * self.cols as usize + cx as usize]
    }

    /// A chunk needs work when it or any chunk touching it holds a walkable
    /// tile. Walls sit at most one cell from a walkable tile, so with chunks
    /// of at least one cell nothing outside that neighborhood matters.
    pub fn is_active(&self, cx: i32, cz: i32) -> bool {
        (-1..=1).any(|dz| (-1..=1).any(|dx| self.walkable_count(cx + dx, cz + dz) > 0))
    }

    /// Cell rect of a chunk, clipped to the grid.
    pub fn bounds(&self, cx: i32, cz: i32, grid: &TileGrid) -> Rect {
        let x = cx * self.chunk_size;
        let z = cz * self.chunk_size;
        Rect::new(
            x,
            z,
            self.chunk_size.min(grid.width() - x),
            self.chunk_size.min(grid.depth() - z),
        )
    }

    /// Chunk coordinates in row order.
    pub fn chunks(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let (cols, rows) = (self.cols, self.rows);
        (0..rows).flat_map(move |cz| (0..cols).map(move |cx| (cx, cz)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungen_types::{Position, Tile};

    #[test]
    fn partial_chunks_at_edges() {
        let grid = TileGrid::new(40, 20);
        let chunks = ChunkMap::new(&grid, 16);
        assert_eq!((chunks.cols(), chunks.rows()), (3, 2));
        assert_eq!(chunks.bounds(2, 1, &grid), Rect::new(32, 16, 8, 4));
        assert_eq!(chunks.chunks().count(), 6);
    }

    #[test]
    fn chunk_larger_than_grid_is_one_chunk() {
        let grid = TileGrid::new(40, 20);
        let chunks = ChunkMap::new(&grid, i32::MAX);
        assert_eq!((chunks.cols(), chunks.rows()), (1, 1));
        assert_eq!(chunks.bounds(0, 0, &grid), Rect::new(0, 0, 40, 20));
    }

    #[test]
    fn activity_spreads_to_neighbors_only() {
        let mut grid = TileGrid::new(64, 64);
        grid.set(Position::new(20, 20), Tile::Floor);
        let chunks = ChunkMap::new(&grid, 16);
        assert_eq!(chunks.walkable_count(1, 1), 1);
        assert!(chunks.is_active(1, 1));
        assert!(chunks.is_active(0, 0));
        assert!(chunks.is_active(2, 2));
        assert!(!chunks.is_active(3, 3));
        assert!(!chunks.is_active(3, 0));
    }

    #[test]
    fn empty_grid_is_inactive() {
        let grid = TileGrid::new(32, 32);
        let chunks = ChunkMap::new(&grid, 8);
        assert!(chunks.chunks().all(|(cx, cz)| !chunks.is_active(cx, cz)));
    }
}
