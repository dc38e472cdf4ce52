use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use dungen_types::{Layout, Position, Rect, Room, RoomId, RoomKind, TileGrid};
use serde::{Deserialize, Serialize};

use crate::{MapError, tile_data};

const DEFAULT_SIZE: i32 = 100;

fn default_size() -> i32 {
    DEFAULT_SIZE
}

fn default_name() -> String {
    "Map".to_owned()
}

/// A map file as exchanged with the game. Keys the generator does not know
/// are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_size")]
    pub width: i32,
    #[serde(default = "default_size")]
    pub depth: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawn_position: Option<Position>,
    #[serde(default)]
    pub tile_data: String,
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
    #[serde(default)]
    pub placed_props: Vec<PlacedProp>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: u32,
    pub kind: RoomKind,
    pub x: i32,
    pub z: i32,
    pub width: i32,
    pub depth: i32,
    pub height: u8,
}

impl RoomRecord {
    pub const fn rect(&self) -> Rect {
        Rect::new(self.x, self.z, self.width, self.depth)
    }

    pub fn to_room(&self) -> Room {
        Room {
            id: RoomId(self.id),
            kind: self.kind,
            rect: self.rect(),
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemySpawn {
    #[serde(rename = "type")]
    pub kind: String,
    /// Room containing the spawn, or -1.
    pub room_id: i32,
    pub position: Position,
    pub level: u8,
    pub is_boss: bool,
    pub rotation_y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedProp {
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rotation_y: f32,
    pub scale: f32,
}

impl MapFile {
    pub fn from_layout(layout: &Layout, name: impl Into<String>) -> Result<Self, MapError> {
        let rooms = layout
            .rooms
            .iter()
            .map(|r| RoomRecord {
                id: r.id.0,
                kind: r.kind,
                x: r.rect.x,
                z: r.rect.z,
                width: r.rect.width,
                depth: r.rect.depth,
                height: r.height,
            })
            .collect();
        Ok(Self {
            name: name.into(),
            width: layout.width(),
            depth: layout.depth(),
            seed: Some(layout.seed),
            spawn_position: Some(layout.spawn),
            tile_data: tile_data::encode(&layout.grid)?,
            rooms,
            enemies: Vec::new(),
            placed_props: Vec::new(),
            extra: serde_json::Map::new(),
        })
    }

    pub fn grid(&self) -> Result<TileGrid, MapError> {
        tile_data::decode(&self.tile_data, self.width, self.depth)
    }

    /// Rebuilds a layout from the file. Corridors are not stored, so the
    /// result has none.
    pub fn layout(&self) -> Result<Layout, MapError> {
        Ok(Layout {
            seed: self.seed.unwrap_or_default(),
            grid: self.grid()?,
            rooms: self.rooms.iter().map(RoomRecord::to_room).collect(),
            corridors: Vec::new(),
            spawn: self.spawn(),
        })
    }

    /// Recorded spawn, or the map center when the file has none.
    pub fn spawn(&self) -> Position {
        self.spawn_position
            .unwrap_or(Position::new(self.width / 2, self.depth / 2))
    }

    pub fn room_id_at(&self, p: Position) -> i32 {
        self.rooms
            .iter()
            .find(|r| r.rect().contains(p))
            .map_or(-1, |r| r.id as i32)
    }

    pub fn from_json(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, MapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let map = serde_json::from_reader(reader)?;
        log::debug!("loaded map from {}", path.as_ref().display());
        Ok(map)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MapError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        log::debug!("saved map to {}", path.as_ref().display());
        Ok(())
    }
}
