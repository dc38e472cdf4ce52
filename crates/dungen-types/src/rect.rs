use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Axis-aligned rectangle of cells, half-open on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub z: i32,
    pub width: i32,
    pub depth: i32,
}

impl Rect {
    pub const fn new(x: i32, z: i32, width: i32, depth: i32) -> Self {
        Self {
            x,
            z,
            width,
            depth,
        }
    }

    // Edges saturate so rects read from map files cannot overflow.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> i32 {
        self.z.saturating_add(self.depth)
    }

    pub const fn area(&self) -> i32 {
        self.width.saturating_mul(self.depth)
    }

    pub const fn center(&self) -> Position {
        Position::new(
            self.x.saturating_add(self.width / 2),
            self.z.saturating_add(self.depth / 2),
        )
    }

    pub const fn contains(&self, p: Position) -> bool {
        p.x >= self.x && p.x < self.right() && p.z >= self.z && p.z < self.bottom()
    }

    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.z < other.bottom()
            && other.z < self.bottom()
    }

    /// Grow by `amount` cells on every side.
    pub const fn inflate(&self, amount: i32) -> Rect {
        Rect::new(
            self.x.saturating_sub(amount),
            self.z.saturating_sub(amount),
            self.width.saturating_add(amount.saturating_mul(2)),
            self.depth.saturating_add(amount.saturating_mul(2)),
        )
    }

    /// True when the two rectangles overlap or are separated by fewer than
    /// `padding` cells on both axes.
    pub const fn overlaps_padded(&self, other: &Rect, padding: i32) -> bool {
        self.inflate(padding).intersects(other)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (x, z, right, bottom) = (self.x, self.z, self.right(), self.bottom());
        (z..bottom).flat_map(move |pz| (x..right).map(move |px| Position::new(px, pz)))
    }
}
