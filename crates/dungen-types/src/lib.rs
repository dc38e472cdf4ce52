pub mod corridor;
pub mod grid;
pub mod layout;
pub mod position;
pub mod rect;
pub mod room;
pub mod tile;
pub mod wall_faces;

pub use corridor::Corridor;
pub use grid::{GridError, TileGrid};
pub use layout::{Layout, LayoutStats};
pub use position::Position;
pub use rect::Rect;
pub use room::{Room, RoomId, RoomKind};
pub use tile::Tile;
pub use wall_faces::WallFaces;
