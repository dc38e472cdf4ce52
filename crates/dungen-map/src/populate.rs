//! Scatters monsters, props and monster groups over a map's floor.
//!
//! Difficulty grows with distance from the spawn point. Anything that decides
//! *what* goes *where* draws from the layout stream; rotation, scale and
//! sub-tile jitter draw from the decor stream.

use dungen_rng::DungeonRng;
use dungen_types::{Position, Tile, TileGrid};
use serde::{Deserialize, Serialize};

use crate::content::{
    BOSSES, CAMP_PROPS, DUNGEON_PROPS, MonsterKind, NATURE_PROPS, PropKind, SPOOKY_PROPS,
    TREASURE_PROPS,
};
use crate::{EnemySpawn, MapError, MapFile, PlacedProp};

/// Full turn, in radians, used for random facing.
const FULL_TURN: f32 = std::f32::consts::TAU;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulateConfig {
    /// One monster per this many floor tiles.
    pub monster_density: u32,
    /// One prop per this many floor tiles.
    pub prop_density: u32,
    /// No single monsters closer than this to the spawn.
    pub safe_radius: f32,
    pub monster_spacing: f32,
    pub prop_spacing: f32,
    /// Upper distance bounds of tiers 1-4; anything farther is tier 5.
    pub tier_distances: [f32; 4],
    pub boss_distance: f32,
    pub boss_percent: u32,
    /// Upper distance bounds for the camp, nature and mixed prop themes.
    pub prop_theme_distances: [f32; 3],
    pub prop_jitter: f32,
    pub prop_scale_min: f32,
    pub prop_scale_max: f32,
    pub max_groups: u32,
    /// One group per this many floor tiles, capped by `max_groups`.
    pub group_density: u32,
    /// Only every n-th shuffled floor tile is tried as a group center.
    pub group_stride: usize,
    pub group_min_distance: f32,
    pub group_spacing: f32,
    pub group_size_min: i32,
    pub group_size_max: i32,
    /// Members land up to this many cells from the group center.
    pub group_spread: f32,
}

impl Default for PopulateConfig {
    fn default() -> Self {
        Self {
            monster_density: 100,
            prop_density: 50,
            safe_radius: 15.0,
            monster_spacing: 5.0,
            prop_spacing: 2.0,
            tier_distances: [30.0, 60.0, 100.0, 150.0],
            boss_distance: 120.0,
            boss_percent: 2,
            prop_theme_distances: [30.0, 80.0, 130.0],
            prop_jitter: 0.3,
            prop_scale_min: 0.8,
            prop_scale_max: 1.2,
            max_groups: 20,
            group_density: 500,
            group_stride: 50,
            group_min_distance: 40.0,
            group_spacing: 10.0,
            group_size_min: 3,
            group_size_max: 5,
            group_spread: 4.0,
        }
    }
}

impl PopulateConfig {
    pub fn validate(&self) -> Result<(), MapError> {
        if self.monster_density == 0 || self.prop_density == 0 || self.group_density == 0 {
            return Err(MapError::Config("densities must be at least 1"));
        }
        if self.group_stride == 0 {
            return Err(MapError::Config("group_stride must be at least 1"));
        }
        if self.group_size_min < 1 || self.group_size_min > self.group_size_max {
            return Err(MapError::Config("group size range is invalid"));
        }
        if self.prop_scale_min > self.prop_scale_max {
            return Err(MapError::Config("prop scale range is invalid"));
        }
        Ok(())
    }

    /// Tier 1-5 for a distance from the spawn.
    pub fn tier_for(&self, distance: f32) -> u8 {
        self.tier_distances
            .iter()
            .position(|&limit| distance < limit)
            .map_or(5, |i| i as u8 + 1)
    }

    /// Props get darker and richer the deeper they are.
    pub fn prop_pool(&self, distance: f32) -> Vec<PropKind> {
        let [camp, nature, mixed] = self.prop_theme_distances;
        if distance < camp {
            [DUNGEON_PROPS, CAMP_PROPS].concat()
        } else if distance < nature {
            [DUNGEON_PROPS, NATURE_PROPS].concat()
        } else if distance < mixed {
            [DUNGEON_PROPS, SPOOKY_PROPS, TREASURE_PROPS].concat()
        } else {
            [SPOOKY_PROPS, TREASURE_PROPS].concat()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PopulateReport {
    pub monsters: usize,
    pub props: usize,
    pub groups: usize,
    pub group_members: usize,
}

/// Points already taken, checked by Euclidean distance.
struct Occupancy(Vec<Position>);

impl Occupancy {
    fn is_clear(&self, p: Position, min_distance: f32) -> bool {
        self.0.iter().all(|o| o.distance(p) >= min_distance)
    }
}

/// Adds monsters, props and groups to `map`, keeping whatever it already
/// holds, and marks the name as populated.
pub fn populate(
    map: &mut MapFile,
    config: &PopulateConfig,
    rng: &mut DungeonRng,
) -> Result<PopulateReport, MapError> {
    config.validate()?;
    let grid = map.grid()?;
    let spawn = map.spawn();

    let mut floor: Vec<Position> = grid
        .iter()
        .filter(|(_, t)| *t == Tile::Floor)
        .map(|(p, _)| p)
        .collect();
    log::debug!("{} floor tiles, spawn at {spawn:?}", floor.len());
    rng.shuffle(&mut floor);

    let mut taken = Occupancy(Vec::with_capacity(floor.len() / 20 + 1));
    taken.0.push(spawn);
    taken.0.extend(map.enemies.iter().map(|e| e.position));

    let mut report = PopulateReport::default();
    let mut enemies = Vec::new();
    let mut props = Vec::new();

    let target = floor.len() / config.monster_density as usize;
    for &p in &floor {
        if report.monsters >= target {
            break;
        }
        let distance = p.distance(spawn);
        if distance < config.safe_radius || !taken.is_clear(p, config.monster_spacing) {
            continue;
        }
        let tier = config.tier_for(distance);
        let mut kind = *rng
            .pick(MonsterKind::for_tier(tier))
            .unwrap_or(&MonsterKind::DungeonRat);
        let mut is_boss = false;
        if distance > config.boss_distance && rng.percent(config.boss_percent) {
            kind = *rng.pick(BOSSES).unwrap_or(&MonsterKind::SkeletonLord);
            is_boss = true;
        }
        enemies.push(EnemySpawn {
            kind: kind.to_string(),
            room_id: map.room_id_at(p),
            position: p,
            level: tier.max(1),
            is_boss,
            rotation_y: rng.decor_range(0.0, FULL_TURN),
        });
        taken.0.push(p);
        report.monsters += 1;
    }

    let target = floor.len() / config.prop_density as usize;
    for &p in &floor {
        if report.props >= target {
            break;
        }
        if !taken.is_clear(p, config.prop_spacing) {
            continue;
        }
        let pool = config.prop_pool(p.distance(spawn));
        let kind = *rng.pick(&pool).unwrap_or(&PropKind::Barrel);
        let jitter = config.prop_jitter;
        props.push(PlacedProp {
            kind: kind.to_string(),
            x: p.x as f32 + rng.decor_range(-jitter, jitter),
            y: 0.0,
            z: p.z as f32 + rng.decor_range(-jitter, jitter),
            rotation_y: rng.decor_range(0.0, FULL_TURN),
            scale: rng.decor_range(config.prop_scale_min, config.prop_scale_max),
        });
        taken.0.push(p);
        report.props += 1;
    }

    let target = (config.max_groups as usize).min(floor.len() / config.group_density as usize);
    for &center in floor.iter().step_by(config.group_stride) {
        if report.groups >= target {
            break;
        }
        let distance = center.distance(spawn);
        if distance < config.group_min_distance || !taken.is_clear(center, config.group_spacing) {
            continue;
        }
        let size = rng.range(config.group_size_min, config.group_size_max);
        let tier = config.tier_for(distance);
        let pool = MonsterKind::group_pool(tier);

        for _ in 0..size {
            let spread = config.group_spread;
            // Truncation toward zero keeps members on whole cells.
            let p = Position::new(
                (center.x as f32 + rng.uniform(-spread, spread)) as i32,
                (center.z as f32 + rng.uniform(-spread, spread)) as i32,
            );
            if !is_floor(&grid, p) {
                continue;
            }
            let kind = *rng.pick(&pool).unwrap_or(&MonsterKind::DungeonRat);
            enemies.push(EnemySpawn {
                kind: kind.to_string(),
                room_id: map.room_id_at(p),
                position: p,
                level: tier.max(1),
                is_boss: false,
                rotation_y: rng.decor_range(0.0, FULL_TURN),
            });
            report.group_members += 1;
        }
        taken.0.push(center);
        report.groups += 1;
    }

    log::info!(
        "populated '{}': {} monsters, {} props, {} groups ({} members)",
        map.name,
        report.monsters,
        report.props,
        report.groups,
        report.group_members
    );
    map.enemies.extend(enemies);
    map.placed_props.extend(props);
    map.name.push_str(" (Populated)");
    Ok(report)
}

fn is_floor(grid: &TileGrid, p: Position) -> bool {
    grid.get(p) == Some(Tile::Floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_by_distance() {
        let config = PopulateConfig::default();
        assert_eq!(config.tier_for(0.0), 1);
        assert_eq!(config.tier_for(29.9), 1);
        assert_eq!(config.tier_for(30.0), 2);
        assert_eq!(config.tier_for(99.0), 3);
        assert_eq!(config.tier_for(149.0), 4);
        assert_eq!(config.tier_for(500.0), 5);
    }

    #[test]
    fn prop_themes_by_distance() {
        let config = PopulateConfig::default();
        assert!(config.prop_pool(10.0).contains(&PropKind::Campfire));
        assert!(config.prop_pool(50.0).contains(&PropKind::MossPatch));
        assert!(config.prop_pool(100.0).contains(&PropKind::Barrel));
        assert!(config.prop_pool(100.0).contains(&PropKind::Chest));
        assert!(!config.prop_pool(200.0).contains(&PropKind::Barrel));
    }

    #[test]
    fn occupancy_spacing() {
        let taken = Occupancy(vec![Position::new(0, 0)]);
        assert!(!taken.is_clear(Position::new(3, 0), 5.0));
        assert!(taken.is_clear(Position::new(3, 4), 5.0));
    }

    #[test]
    fn invalid_configs() {
        let zero = PopulateConfig {
            prop_density: 0,
            ..PopulateConfig::default()
        };
        assert!(matches!(zero.validate(), Err(MapError::Config(_))));
        let stride = PopulateConfig {
            group_stride: 0,
            ..PopulateConfig::default()
        };
        assert!(matches!(stride.validate(), Err(MapError::Config(_))));
        assert!(PopulateConfig::default().validate().is_ok());
    }
}
