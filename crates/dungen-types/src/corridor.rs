use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::rect::Rect;
use crate::room::RoomId;

/// An L-shaped, fixed-width passage between two room centers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub from: RoomId,
    pub to: RoomId,
    pub start: Position,
    pub end: Position,
    /// Corner where the two legs meet.
    pub bend: Position,
    pub horizontal_first: bool,
    pub width: i32,
}

impl Corridor {
    pub fn new(
        from: RoomId,
        to: RoomId,
        start: Position,
        end: Position,
        horizontal_first: bool,
        width: i32,
    ) -> Self {
        let bend = if horizontal_first {
            Position::new(end.x, start.z)
        } else {
            Position::new(start.x, end.z)
        };
        Self {
            from,
            to,
            start,
            end,
            bend,
            horizontal_first,
            width,
        }
    }

    /// The two legs as strips `width` cells wide. A leg of zero length
    /// still covers a `width`×`width` square at its corner.
    pub fn legs(&self) -> [Rect; 2] {
        [
            leg(self.start, self.bend, self.width),
            leg(self.bend, self.end, self.width),
        ]
    }

    /// Every cell of both legs; cells at the bend appear twice.
    pub fn cells(&self) -> impl Iterator<Item = Position> + use<> {
        let [a, b] = self.legs();
        a.positions().chain(b.positions())
    }
}

fn leg(a: Position, b: Position, width: i32) -> Rect {
    let lo = -(width - 1) / 2;
    let x0 = a.x.min(b.x) + lo;
    let z0 = a.z.min(b.z) + lo;
    let x1 = a.x.max(b.x) + lo + width;
    let z1 = a.z.max(b.z) + lo + width;
    Rect::new(x0, z0, x1 - x0, z1 - z0)
}
