//! Static game data: wall variants and spawn tables.

use std::collections::HashMap;

use glam::Vec2;
use once_cell::sync::Lazy;

use crate::renderer::Rgb;

/// Visual identity of one wall variant. The grid stores the variant id;
/// everything cosmetic hangs off this table.
#[derive(Debug)]
pub struct WallKind {
    pub variant: u8,
    pub id: &'static str,
    /// Colour at full brightness, before distance shading.
    pub base: Rgb,
}

/// Entry 0 doubles as the fallback for ids the table does not carry.
pub static WALL_KINDS: &[WallKind] = &[
    WallKind {
        variant: 1,
        id: "BRICK",
        base: Rgb::new(255, 127, 85),
    },
    WallKind {
        variant: 2,
        id: "STONE",
        base: Rgb::new(170, 170, 180),
    },
    WallKind {
        variant: 3,
        id: "MOSS",
        base: Rgb::new(110, 200, 120),
    },
    WallKind {
        variant: 4,
        id: "RUST",
        base: Rgb::new(200, 110, 70),
    },
];

static BY_VARIANT: Lazy<HashMap<u8, &'static WallKind>> =
    Lazy::new(|| WALL_KINDS.iter().map(|k| (k.variant, k)).collect());

/// Look up a wall variant, falling back to the first table entry.
pub fn wall_kind(variant: u8) -> &'static WallKind {
    BY_VARIANT.get(&variant).copied().unwrap_or(&WALL_KINDS[0])
}

/// Player spawn pose: centre of the first open cell, facing east.
pub const PLAYER_SPAWN: Vec2 = Vec2::new(1.5, 1.5);
pub const SPAWN_YAW: f32 = 0.0;

/// Fixed enemy roster for the stock arena. Enemies never move; death
/// only clears their alive flag, so positions double as respawn points.
/// Every entry must sit in an open cell of [`crate::world::GridMap::arena`],
/// or it can never be shot and the round cannot be won.
pub static ENEMY_SPAWNS: &[Vec2] = &[
    Vec2::new(3.5, 3.5),
    Vec2::new(5.5, 4.5),
    Vec2::new(2.5, 5.5),
    Vec2::new(4.5, 1.5),
];
