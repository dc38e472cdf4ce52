use rand_core::{RngCore, SeedableRng};
use rand_isaac::Isaac64Rng;

/// Dual-stream seeded RNG for dungeon generation.
///
/// Two independent ISAAC64 streams are kept:
/// - **Layout**: every draw that decides where rooms, corridors and spawns go
/// - **Decor**: cosmetic values (rotations, scale, jitter), so tweaking how
///   content looks never reshuffles the dungeon itself
#[derive(Clone)]
pub struct DungeonRng {
    layout: Isaac64Rng,
    decor: Isaac64Rng,
}

/// Mixed into the seed of the decor stream when only one seed is given.
const DECOR_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

impl DungeonRng {
    pub fn new(seed: u64) -> Self {
        Self::new_dual(seed, seed ^ DECOR_SALT)
    }

    pub fn new_dual(layout_seed: u64, decor_seed: u64) -> Self {
        Self {
            layout: Isaac64Rng::seed_from_u64(layout_seed),
            decor: Isaac64Rng::seed_from_u64(decor_seed),
        }
    }

    /// `0 <= rn2(x) < x` on the layout stream.
    pub fn rn2(&mut self, x: i32) -> i32 {
        if x <= 0 {
            log::warn!("rn2({x}) attempted");
            return 0;
        }
        (self.layout.next_u64() % x as u64) as i32
    }

    /// `1 <= rnd(x) <= x` on the layout stream.
    pub fn rnd(&mut self, x: i32) -> i32 {
        if x <= 0 {
            log::warn!("rnd({x}) attempted");
            return 1;
        }
        self.rn2(x) + 1
    }

    /// `lo <= range(lo, hi) <= hi` on the layout stream.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi < lo {
            log::warn!("range({lo}, {hi}) attempted");
            return lo;
        }
        let span = (hi as i64 - lo as i64 + 1) as u64;
        (lo as i64 + (self.layout.next_u64() % span) as i64) as i32
    }

    /// True with `pct` percent probability.
    pub fn percent(&mut self, pct: u32) -> bool {
        self.rn2(100) < pct.min(100) as i32
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let len = i32::try_from(items.len()).unwrap_or(i32::MAX);
        items.get(self.rn2(len) as usize)
    }

    /// Picks from `(item, weight)` pairs proportionally to weight.
    pub fn pick_weighted<'a, T>(&mut self, table: &'a [(T, u32)]) -> Option<&'a T> {
        let total: u64 = table.iter().map(|(_, w)| *w as u64).sum();
        if total == 0 {
            log::warn!("pick_weighted over zero total weight");
            return None;
        }
        let mut roll = self.layout.next_u64() % total;
        for (item, weight) in table {
            let weight = *weight as u64;
            if roll < weight {
                return Some(item);
            }
            roll -= weight;
        }
        None
    }

    /// Fisher-Yates shuffle on the layout stream.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.layout.next_u64() % (i as u64 + 1)) as usize;
            items.swap(i, j);
        }
    }

    /// Uniform `[lo, hi)` on the layout stream, for positional offsets.
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi < lo {
            log::warn!("uniform({lo}, {hi}) attempted");
            return lo;
        }
        lo + (hi - lo) * unit_f32(self.layout.next_u32())
    }

    /// Uniform `[0, 1)` on the decor stream.
    pub fn decor_unit(&mut self) -> f32 {
        unit_f32(self.decor.next_u32())
    }

    /// Uniform `[lo, hi)` on the decor stream.
    pub fn decor_range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi < lo {
            log::warn!("decor_range({lo}, {hi}) attempted");
            return lo;
        }
        lo + (hi - lo) * self.decor_unit()
    }
}

/// Maps the top 24 bits onto `[0, 1)`; an f32 mantissa holds them exactly.
fn unit_f32(bits: u32) -> f32 {
    (bits >> 8) as f32 / (1u32 << 24) as f32
}
