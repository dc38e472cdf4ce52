//! Monster and prop catalogs used when populating a map.

use strum::{Display, EnumCount, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum MonsterKind {
    DungeonRat,
    Slime,
    Goblin,
    GoblinShaman,
    GoblinThrower,
    Spider,
    Mushroom,
    Bat,
    Skeleton,
    Wolf,
    Lizard,
    Eye,
    Badlama,
    CrawlerKiller,
    ShadowStalker,
    Mimic,
    FleshGolem,
    LivingArmor,
    PlagueBearer,
    LavaElemental,
    VoidSpawn,
    SkeletonLord,
    DragonKing,
    SpiderQueen,
    TheButcher,
    Mordecai,
    Mongo,
}

/// Difficulty tiers 1 through 5.
pub const MONSTER_TIERS: [&[MonsterKind]; 5] = [
    &[MonsterKind::DungeonRat, MonsterKind::Slime, MonsterKind::Goblin],
    &[
        MonsterKind::GoblinShaman,
        MonsterKind::GoblinThrower,
        MonsterKind::Spider,
        MonsterKind::Mushroom,
        MonsterKind::Bat,
    ],
    &[
        MonsterKind::Skeleton,
        MonsterKind::Wolf,
        MonsterKind::Lizard,
        MonsterKind::Eye,
        MonsterKind::Badlama,
    ],
    &[
        MonsterKind::CrawlerKiller,
        MonsterKind::ShadowStalker,
        MonsterKind::Mimic,
        MonsterKind::FleshGolem,
    ],
    &[
        MonsterKind::LivingArmor,
        MonsterKind::PlagueBearer,
        MonsterKind::LavaElemental,
        MonsterKind::VoidSpawn,
    ],
];

pub const BOSSES: &[MonsterKind] = &[
    MonsterKind::SkeletonLord,
    MonsterKind::DragonKing,
    MonsterKind::SpiderQueen,
    MonsterKind::TheButcher,
    MonsterKind::Mordecai,
    MonsterKind::Mongo,
];

impl MonsterKind {
    pub fn is_boss(self) -> bool {
        BOSSES.contains(&self)
    }

    /// Monsters of a single tier; out-of-range tiers clamp to 1..=5.
    pub fn for_tier(tier: u8) -> &'static [MonsterKind] {
        MONSTER_TIERS[tier.clamp(1, 5) as usize - 1]
    }

    /// Pool for a roaming group: mixes the tier with its neighbor.
    pub fn group_pool(tier: u8) -> Vec<MonsterKind> {
        let (a, b) = match tier {
            0..=2 => (1, 2),
            3 => (2, 3),
            _ => (3, 4),
        };
        [Self::for_tier(a), Self::for_tier(b)].concat()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum PropKind {
    Barrel,
    Crate,
    Pot,
    Torch,
    BonePile,
    SkullPile,
    RubbleHeap,
    Chest,
    TreasureChest,
    ScatteredCoins,
    AncientScroll,
    BloodPool,
    CoiledChains,
    Manacles,
    DiscardedSword,
    ForgottenShield,
    MossPatch,
    GlowingMushrooms,
    WaterPuddle,
    ThornyVines,
    Campfire,
    AbandonedCampfire,
    RatNest,
    MoldyBread,
}

pub const DUNGEON_PROPS: &[PropKind] = &[
    PropKind::Barrel,
    PropKind::Crate,
    PropKind::Pot,
    PropKind::Torch,
    PropKind::BonePile,
    PropKind::SkullPile,
    PropKind::RubbleHeap,
];
pub const TREASURE_PROPS: &[PropKind] = &[
    PropKind::Chest,
    PropKind::TreasureChest,
    PropKind::ScatteredCoins,
    PropKind::AncientScroll,
];
pub const SPOOKY_PROPS: &[PropKind] = &[
    PropKind::BloodPool,
    PropKind::CoiledChains,
    PropKind::Manacles,
    PropKind::DiscardedSword,
    PropKind::ForgottenShield,
];
pub const NATURE_PROPS: &[PropKind] = &[
    PropKind::MossPatch,
    PropKind::GlowingMushrooms,
    PropKind::WaterPuddle,
    PropKind::ThornyVines,
];
pub const CAMP_PROPS: &[PropKind] = &[
    PropKind::Campfire,
    PropKind::AbandonedCampfire,
    PropKind::RatNest,
    PropKind::MoldyBread,
];
