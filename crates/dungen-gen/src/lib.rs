//! Procedural dungeon layout generation.
//!
//! A layout is built in fixed phases, all driven by one seeded
//! [`DungeonRng`] so the same config and seed always give the same floor:
//!
//! 1. rooms are placed by rejection sampling with padding between them
//! 2. rooms are typed (entrance, boss, and weighted themes)
//! 3. a minimum spanning tree over room centers plus a few random loops
//!    decides which rooms connect
//! 4. each connection becomes an L-shaped, fixed-width corridor
//! 5. tiles are classified into floor, door and wall, walking the grid in
//!    chunks and skipping empty ones

pub mod chunk;
mod classify;
pub mod config;
mod connect;
pub mod minimap;
mod placement;

use dungen_rng::DungeonRng;
use dungen_types::Layout;

pub use chunk::ChunkMap;
pub use classify::ChunkReport;
pub use config::{ConfigError, GeneratorConfig};
pub use minimap::{render_minimap, render_rooms};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid generator config: {0}")]
    Config(#[from] ConfigError),
    #[error("no room could be placed in {attempts} attempts")]
    NoRooms { attempts: u32 },
}

/// Generates a layout from `config` with a fresh RNG seeded by `seed`.
pub fn generate(config: &GeneratorConfig, seed: u64) -> Result<Layout, GenerateError> {
    let mut rng = DungeonRng::new(seed);
    LayoutGenerator::new(config, &mut rng).generate(seed)
}

/// Runs the generation phases against a caller-owned RNG.
pub struct LayoutGenerator<'a> {
    config: &'a GeneratorConfig,
    rng: &'a mut DungeonRng,
}

impl<'a> LayoutGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig, rng: &'a mut DungeonRng) -> Self {
        Self { config, rng }
    }

    /// `seed` is recorded in the layout; the RNG is used as given.
    pub fn generate(self, seed: u64) -> Result<Layout, GenerateError> {
        let config = self.config;
        config.validate()?;

        let (rects, attempts) = placement::place_rooms(config, self.rng);
        if rects.is_empty() {
            return Err(GenerateError::NoRooms { attempts });
        }
        if rects.len() < config.room_count as usize {
            log::warn!(
                "placed {} of {} rooms in {attempts} attempts",
                rects.len(),
                config.room_count
            );
        }

        let rooms = placement::assign_kinds(rects, config, self.rng);
        let centers: Vec<_> = rooms.iter().map(|r| r.rect.center()).collect();
        let mut links = connect::spanning_links(&centers);
        let extras = connect::extra_links(&centers, &links, config.extra_corridor_percent, self.rng);
        log::debug!("{} tree links, {} loop links", links.len(), extras.len());
        links.extend(extras);

        let corridors = connect::build_corridors(&rooms, &links, config.corridor_width, self.rng);
        let (grid, chunks) = classify::classify(
            config.width,
            config.depth,
            &rooms,
            &corridors,
            config.chunk_size,
        );
        log::debug!(
            "wall pass visited {} chunks, skipped {}",
            chunks.visited,
            chunks.skipped
        );

        let spawn = rooms[0].rect.center();
        let layout = Layout {
            seed,
            grid,
            rooms,
            corridors,
            spawn,
        };
        let stats = layout.stats();
        log::info!(
            "generated {}x{} layout (seed {seed}): {} rooms, {} corridors, {} floor, {} doors",
            config.width,
            config.depth,
            stats.rooms,
            stats.corridors,
            stats.floor,
            stats.door
        );
        Ok(layout)
    }
}
