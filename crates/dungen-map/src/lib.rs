//! Map files: the JSON hand-off format between the layout generator and the
//! engine-side builders, plus content population on top of a layout.

pub mod content;
pub mod map_file;
pub mod populate;
pub mod tile_data;

pub use content::{MonsterKind, PropKind};
pub use map_file::{EnemySpawn, MapFile, PlacedProp, RoomRecord};
pub use populate::{PopulateConfig, PopulateReport, populate};

use dungen_types::GridError;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("tile data is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("run marker at byte {offset} has no length")]
    TruncatedRun { offset: usize },
    #[error("tile data holds {actual} cells, expected {expected}")]
    ShortTileData { expected: usize, actual: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("invalid populate config: {0}")]
    Config(&'static str),
}
