use dungen_types::{GridError, TileGrid};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{depth}")]
    EmptyGrid { width: i32, depth: i32 },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("room_count must be at least 1")]
    NoRoomsRequested,
    #[error("room size range {min}..={max} is invalid")]
    RoomSize { min: i32, max: i32 },
    #[error("rooms up to {room_max_size} cells with border {border} do not fit a {width}x{depth} grid")]
    RoomsDoNotFit {
        room_max_size: i32,
        border: i32,
        width: i32,
        depth: i32,
    },
    #[error("corridor_width {width} must be between 1 and room_min_size ({room_min_size})")]
    CorridorWidth { width: i32, room_min_size: i32 },
    #[error("chunk_size must be at least 1")]
    ChunkSize,
    #[error("room height range {min}..={max} is invalid")]
    RoomHeight { min: u8, max: u8 },
    #[error("{field} is negative: {value}")]
    Negative { field: &'static str, value: i32 },
    #[error("extra_corridor_percent {0} is above 100")]
    Percent(u32),
}

/// Tunables for [`crate::generate`]. Sizes are in grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: i32,
    pub depth: i32,
    /// Rooms to place; fewer may fit.
    pub room_count: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    /// Minimum empty cells between two room floors.
    pub room_padding: i32,
    /// Void margin kept between room walls and the grid edge.
    pub border: i32,
    pub max_placement_attempts: u32,
    pub corridor_width: i32,
    /// Per-room chance of an extra loop corridor.
    pub extra_corridor_percent: u32,
    pub chunk_size: i32,
    pub room_height_min: u8,
    pub room_height_max: u8,
}

impl GeneratorConfig {
    pub const DEFAULT_WIDTH: i32 = 100;
    pub const DEFAULT_DEPTH: i32 = 100;
    pub const DEFAULT_ROOM_COUNT: u32 = 12;
    pub const DEFAULT_CHUNK_SIZE: i32 = 16;

    pub fn with_size(width: i32, depth: i32) -> Self {
        Self {
            width,
            depth,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.depth <= 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                depth: self.depth,
            });
        }
        TileGrid::cell_count(self.width, self.depth)?;
        if self.room_count == 0 {
            return Err(ConfigError::NoRoomsRequested);
        }
        if self.room_min_size < 1 || self.room_min_size > self.room_max_size {
            return Err(ConfigError::RoomSize {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        for (field, value) in [("room_padding", self.room_padding), ("border", self.border)] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        // Floor, one wall ring and the border on both sides.
        let needed = i64::from(self.room_max_size) + 2 * (i64::from(self.border) + 1);
        if needed > i64::from(self.width.min(self.depth)) {
            return Err(ConfigError::RoomsDoNotFit {
                room_max_size: self.room_max_size,
                border: self.border,
                width: self.width,
                depth: self.depth,
            });
        }
        if self.corridor_width < 1 || self.corridor_width > self.room_min_size {
            return Err(ConfigError::CorridorWidth {
                width: self.corridor_width,
                room_min_size: self.room_min_size,
            });
        }
        if self.chunk_size < 1 {
            return Err(ConfigError::ChunkSize);
        }
        if self.room_height_min == 0 || self.room_height_min > self.room_height_max {
            return Err(ConfigError::RoomHeight {
                min: self.room_height_min,
                max: self.room_height_max,
            });
        }
        if self.extra_corridor_percent > 100 {
            return Err(ConfigError::Percent(self.extra_corridor_percent));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            depth: Self::DEFAULT_DEPTH,
            room_count: Self::DEFAULT_ROOM_COUNT,
            room_min_size: 5,
            room_max_size: 14,
            room_padding: 2,
            border: 1,
            max_placement_attempts: 500,
            corridor_width: 3,
            extra_corridor_percent: 15,
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            room_height_min: 3,
            room_height_max: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_grid() {
        let config = GeneratorConfig::with_size(0, 50);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn rejects_oversized_grid() {
        let config = GeneratorConfig::with_size(50_000, 50_000);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Grid(GridError::TooLarge { .. }))
        ));
        assert_eq!(GeneratorConfig::with_size(4096, 4096).validate(), Ok(()));
        assert!(GeneratorConfig::with_size(4097, 4096).validate().is_err());
    }

    #[test]
    fn huge_border_does_not_overflow() {
        let config = GeneratorConfig {
            border: i32::MAX,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RoomsDoNotFit { .. })
        ));
    }

    #[test]
    fn rejects_rooms_larger_than_grid() {
        let config = GeneratorConfig::with_size(16, 16);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RoomsDoNotFit { .. })
        ));

        // 14 + 2 * (1 + 1) = 18 is the smallest grid that fits.
        assert_eq!(GeneratorConfig::with_size(18, 18).validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_ranges() {
        let config = GeneratorConfig {
            room_min_size: 9,
            room_max_size: 8,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::RoomSize { min: 9, max: 8 })
        );

        let config = GeneratorConfig {
            room_height_min: 5,
            room_height_max: 4,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::RoomHeight { min: 5, max: 4 })
        );
    }

    #[test]
    fn corridor_must_fit_smallest_room() {
        let config = GeneratorConfig {
            corridor_width: 6,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CorridorWidth { width: 6, .. })
        ));
    }

    #[test]
    fn misc_field_checks() {
        let zero_rooms = GeneratorConfig {
            room_count: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(zero_rooms.validate(), Err(ConfigError::NoRoomsRequested));

        let bad_chunk = GeneratorConfig {
            chunk_size: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(bad_chunk.validate(), Err(ConfigError::ChunkSize));

        let negative = GeneratorConfig {
            room_padding: -1,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            negative.validate(),
            Err(ConfigError::Negative {
                field: "room_padding",
                value: -1
            })
        );

        let percent = GeneratorConfig {
            extra_corridor_percent: 101,
            ..GeneratorConfig::default()
        };
        assert_eq!(percent.validate(), Err(ConfigError::Percent(101)));
    }
}
