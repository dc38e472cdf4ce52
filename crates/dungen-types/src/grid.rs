use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::tile::Tile;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("expected {expected} cells for a {width}x{depth} grid, got {actual}")]
    Size {
        width: i32,
        depth: i32,
        expected: usize,
        actual: usize,
    },
    #[error("invalid tile value {value} at ({x}, {z})")]
    Tile { value: u8, x: i32, z: i32 },
    #[error("a {width}x{depth} grid exceeds {max} cells")]
    TooLarge { width: i32, depth: i32, max: usize },
}

/// Dense width×depth tile storage, row-major by `z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: i32,
    depth: i32,
    cells: Vec<Tile>,
}

impl TileGrid {
    /// Largest grid accepted from configs and map files.
    pub const MAX_CELLS: usize = 4096 * 4096;

    /// Cell count of a `width`×`depth` grid; negative sides count as zero.
    pub fn cell_count(width: i32, depth: i32) -> Result<usize, GridError> {
        (width.max(0) as usize)
            .checked_mul(depth.max(0) as usize)
            .filter(|&cells| cells <= Self::MAX_CELLS)
            .ok_or(GridError::TooLarge {
                width,
                depth,
                max: Self::MAX_CELLS,
            })
    }

    /// An all-void grid. Sizes from untrusted input are checked with
    /// [`TileGrid::cell_count`] first.
    pub fn new(width: i32, depth: i32) -> Self {
        let width = width.max(0);
        let depth = depth.max(0);
        Self {
            width,
            depth,
            cells: vec![Tile::Void; (width as usize).saturating_mul(depth as usize)],
        }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn depth(&self) -> i32 {
        self.depth
    }

    pub const fn in_bounds(&self, p: Position) -> bool {
        p.x >= 0 && p.x < self.width && p.z >= 0 && p.z < self.depth
    }

    fn index(&self, p: Position) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.z as usize * self.width as usize + p.x as usize)
    }

    pub fn get(&self, p: Position) -> Option<Tile> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are ignored; returns whether the cell was set.
    pub fn set(&mut self, p: Position, tile: Tile) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    pub fn is_walkable(&self, p: Position) -> bool {
        self.get(p).is_some_and(Tile::is_walkable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &t)| (Position::new((i % width) as i32, (i / width) as i32), t))
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Tile bytes in column-major order (x outer, z inner).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.cells.len());
        let width = self.width as usize;
        for x in 0..width {
            for z in 0..self.depth as usize {
                out.push(self.cells[z * width + x] as u8);
            }
        }
        out
    }

    /// Inverse of [`TileGrid::to_bytes`].
    pub fn from_bytes(width: i32, depth: i32, bytes: &[u8]) -> Result<Self, GridError> {
        let expected = Self::cell_count(width, depth)?;
        if bytes.len() != expected {
            return Err(GridError::Size {
                width,
                depth,
                expected,
                actual: bytes.len(),
            });
        }
        let mut grid = Self::new(width, depth);
        let (columns, rows) = (grid.width as usize, grid.depth as usize);
        for (i, &value) in bytes.iter().enumerate() {
            let (x, z) = (i / rows, i % rows);
            let tile = Tile::from_repr(value).ok_or(GridError::Tile {
                value,
                x: x as i32,
                z: z as i32,
            })?;
            grid.cells[z * columns + x] = tile;
        }
        Ok(grid)
    }
}
