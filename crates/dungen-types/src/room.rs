use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl RoomId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Semantic purpose of a room, used by content builders to theme it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoomKind {
    Entrance,
    Crypt,
    Library,
    Armory,
    Treasury,
    Shrine,
    Barracks,
    Storage,
    Prison,
    Boss,
}

impl RoomKind {
    /// Letter shown for the room's floor on the annotated minimap.
    pub const fn letter(self) -> char {
        match self {
            Self::Entrance => 'E',
            Self::Crypt => 'C',
            Self::Library => 'L',
            Self::Armory => 'A',
            Self::Treasury => 'T',
            Self::Shrine => 'S',
            Self::Barracks => 'B',
            Self::Storage => 'G',
            Self::Prison => 'P',
            Self::Boss => 'X',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub kind: RoomKind,
    /// Floor area; the surrounding wall ring lies outside it.
    pub rect: Rect,
    /// Ceiling height in vertical units.
    pub height: u8,
}
