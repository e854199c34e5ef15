/// Default map width in tiles
pub const DEFAULT_MAP_WIDTH: usize = 50;

/// Default map height in tiles
pub const DEFAULT_MAP_HEIGHT: usize = 50;

/// Default pixel edge length of a tile
pub const DEFAULT_TILE_SIZE: u32 = 50;

/// Smallest grid the generator accepts (a water ring plus one interior cell)
pub const MIN_MAP_DIMENSION: usize = 3;

/// Smallest tile that still gives every prop sprite a non-zero size
pub const MIN_TILE_SIZE: u32 = 5;
