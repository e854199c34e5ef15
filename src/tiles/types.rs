use bevy::math::IVec2;
use serde::{Deserialize, Serialize};

/// Every kind of tile the world knows about.
///
/// The discriminants are the legacy numeric codes (0-8). They only matter at
/// the encoding boundary, see [`TileKind::legacy_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TileKind {
    Water = 0,
    Sand = 1,
    Grass = 2,
    Forest = 3,
    RockBig = 4,
    RockMedium = 5,
    FlowerA = 6,
    FlowerB = 7,
    Bush = 8,
}

impl TileKind {
    pub const ALL: [TileKind; 9] = [
        TileKind::Water,
        TileKind::Sand,
        TileKind::Grass,
        TileKind::Forest,
        TileKind::RockBig,
        TileKind::RockMedium,
        TileKind::FlowerA,
        TileKind::FlowerB,
        TileKind::Bush,
    ];

    pub const fn legacy_code(self) -> u8 {
        self as u8
    }

    pub fn from_legacy_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

/// Base layer biome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Water,
    Sand,
    Grass,
}

impl Terrain {
    pub const ALL: [Terrain; 3] = [Terrain::Water, Terrain::Sand, Terrain::Grass];

    /// Whether the character may stand on this terrain
    pub const fn is_passable(self) -> bool {
        !matches!(self, Terrain::Water)
    }

    pub const fn asset_name(self) -> &'static str {
        match self {
            Terrain::Water => "water",
            Terrain::Sand => "sand",
            Terrain::Grass => "grass",
        }
    }
}

impl From<Terrain> for TileKind {
    fn from(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Water => TileKind::Water,
            Terrain::Sand => TileKind::Sand,
            Terrain::Grass => TileKind::Grass,
        }
    }
}

/// Decorative overlay placed on top of grass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prop {
    Forest,
    RockBig,
    RockMedium,
    FlowerA,
    FlowerB,
    Bush,
}

impl Prop {
    pub const ALL: [Prop; 6] = [
        Prop::Forest,
        Prop::RockBig,
        Prop::RockMedium,
        Prop::FlowerA,
        Prop::FlowerB,
        Prop::Bush,
    ];

    pub const fn asset_name(self) -> &'static str {
        match self {
            Prop::Forest => "forest",
            Prop::RockBig => "rock_big",
            Prop::RockMedium => "rock_medium",
            Prop::FlowerA => "flower_a",
            Prop::FlowerB => "flower_b",
            Prop::Bush => "bush",
        }
    }

    /// Sprite edge length for a given tile edge length.
    /// Small props are drawn at their own size, anchored on the tile corner.
    pub const fn sprite_size(self, tile_size: u32) -> u32 {
        match self {
            Prop::Forest | Prop::RockBig => tile_size,
            Prop::RockMedium => tile_size / 5,
            Prop::FlowerA | Prop::FlowerB | Prop::Bush => tile_size / 3,
        }
    }
}

impl From<Prop> for TileKind {
    fn from(prop: Prop) -> Self {
        match prop {
            Prop::Forest => TileKind::Forest,
            Prop::RockBig => TileKind::RockBig,
            Prop::RockMedium => TileKind::RockMedium,
            Prop::FlowerA => TileKind::FlowerA,
            Prop::FlowerB => TileKind::FlowerB,
            Prop::Bush => TileKind::Bush,
        }
    }
}

/// Position in tile coordinates (not world/pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Tile owning a world pixel. Negative pixels land in negative tiles.
    pub fn from_pixel(pixel: IVec2, tile_size: u32) -> Self {
        let size = tile_size as i32;
        Self {
            x: pixel.x.div_euclid(size),
            y: pixel.y.div_euclid(size),
        }
    }

    /// World pixel of the tile's top-left corner
    pub fn to_pixel(self, tile_size: u32) -> IVec2 {
        IVec2::new(self.x * tile_size as i32, self.y * tile_size as i32)
    }

    /// The 4-connected neighbours (up, down, left, right)
    pub fn neighbours4(self) -> [TilePos; 4] {
        [
            TilePos::new(self.x, self.y - 1),
            TilePos::new(self.x, self.y + 1),
            TilePos::new(self.x - 1, self.y),
            TilePos::new(self.x + 1, self.y),
        ]
    }
}

impl From<(i32, i32)> for TilePos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<IVec2> for TilePos {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<TilePos> for IVec2 {
    fn from(pos: TilePos) -> Self {
        IVec2::new(pos.x, pos.y)
    }
}
