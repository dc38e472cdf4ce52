//! Room placement by rejection sampling, and room typing.

use dungen_rng::DungeonRng;
use dungen_types::{Rect, Room, RoomId, RoomKind};

use crate::config::GeneratorConfig;

/// Weights for rooms that are neither the entrance nor the boss room.
const KIND_WEIGHTS: [(RoomKind, u32); 8] = [
    (RoomKind::Storage, 20),
    (RoomKind::Barracks, 15),
    (RoomKind::Crypt, 15),
    (RoomKind::Library, 12),
    (RoomKind::Armory, 12),
    (RoomKind::Prison, 10),
    (RoomKind::Shrine, 8),
    (RoomKind::Treasury, 8),
];

/// Draws candidate rooms until `room_count` fit or the attempt budget runs
/// out. Returns the floor rects in placement order and the attempts used.
pub(crate) fn place_rooms(config: &GeneratorConfig, rng: &mut DungeonRng) -> (Vec<Rect>, u32) {
    let target = config.room_count as usize;
    let margin = config.border + 1;
    // Any padding wider than the grid already rules out a second room.
    let padding = config.room_padding.min(config.width.max(config.depth));
    let mut rooms: Vec<Rect> = Vec::new();
    let mut attempts = 0;

    while rooms.len() < target && attempts < config.max_placement_attempts {
        attempts += 1;
        let width = rng.range(config.room_min_size, config.room_max_size);
        let depth = rng.range(config.room_min_size, config.room_max_size);
        let x = rng.range(margin, config.width - margin - width);
        let z = rng.range(margin, config.depth - margin - depth);
        let candidate = Rect::new(x, z, width, depth);

        if rooms
            .iter()
            .any(|r| r.overlaps_padded(&candidate, padding))
        {
            continue;
        }
        log::debug!("placed room {} at {candidate:?} after {attempts} attempts", rooms.len());
        rooms.push(candidate);
    }

    (rooms, attempts)
}

/// Turns placed rects into typed rooms: the first is the entrance, the one
/// farthest from it becomes the boss room once there are three or more.
pub(crate) fn assign_kinds(
    rects: Vec<Rect>,
    config: &GeneratorConfig,
    rng: &mut DungeonRng,
) -> Vec<Room> {
    let boss = boss_index(&rects);
    rects
        .into_iter()
        .enumerate()
        .map(|(i, rect)| {
            let kind = if i == 0 {
                RoomKind::Entrance
            } else if Some(i) == boss {
                RoomKind::Boss
            } else {
                rng.pick_weighted(&KIND_WEIGHTS)
                    .copied()
                    .unwrap_or(RoomKind::Storage)
            };
            let height = rng.range(
                config.room_height_min as i32,
                config.room_height_max as i32,
            ) as u8;
            Room {
                id: RoomId(i as u32),
                kind,
                rect,
                height,
            }
        })
        .collect()
}

fn boss_index(rects: &[Rect]) -> Option<usize> {
    if rects.len() < 3 {
        return None;
    }
    let entrance = rects[0].center();
    let mut best: Option<(usize, f32)> = None;
    for (i, rect) in rects.iter().enumerate().skip(1) {
        let d = entrance.distance(rect.center());
        if best.is_none_or(|(_, bd)| d > bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
