//! World configuration.
//!
//! Every tunable the simulation uses lives here and is handed to
//! constructors explicitly. Defaults reproduce the classic 50x50 island.

use crate::error::ConfigError;
use crate::tiles::{Prop, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_TILE_SIZE, MIN_MAP_DIMENSION, MIN_TILE_SIZE};
use bevy::math::UVec2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Map width in tiles
    pub map_width: usize,
    /// Map height in tiles
    pub map_height: usize,
    /// Pixel edge length of one tile
    pub tile_size: u32,
    /// Generation seed. `None` picks one from entropy at startup.
    pub seed: Option<u64>,
    pub terrain: TerrainConfig,
    pub props: PropTable,
    pub character: CharacterConfig,
    /// Initial viewport size in pixels
    pub viewport: ViewportSize,
    /// Simulation ticks per second
    pub target_fps: u32,
    /// Directory the texture provider resolves asset paths against
    pub asset_root: PathBuf,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            seed: None,
            terrain: TerrainConfig::default(),
            props: PropTable::default(),
            character: CharacterConfig::default(),
            viewport: ViewportSize::default(),
            target_fps: 60,
            asset_root: PathBuf::from("assets"),
        }
    }
}

impl WorldConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Configured seed, or a fresh one from entropy
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// World size in pixels
    pub fn map_pixel_size(&self) -> UVec2 {
        UVec2::new(
            self.map_width as u32 * self.tile_size,
            self.map_height as u32 * self.tile_size,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_width < MIN_MAP_DIMENSION || self.map_height < MIN_MAP_DIMENSION {
            return Err(ConfigError::invalid(
                "map_width/map_height",
                format!("map must be at least {MIN_MAP_DIMENSION}x{MIN_MAP_DIMENSION} tiles"),
            ));
        }
        if self.tile_size < MIN_TILE_SIZE {
            return Err(ConfigError::invalid(
                "tile_size",
                format!("must be at least {MIN_TILE_SIZE}, got {}", self.tile_size),
            ));
        }
        if pixel_extent(self.map_width, self.tile_size).is_none()
            || pixel_extent(self.map_height, self.tile_size).is_none()
        {
            return Err(ConfigError::invalid(
                "map_width/map_height",
                "map size in pixels must fit in i32",
            ));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::invalid("target_fps", "must be positive"));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::invalid("viewport", "must be non-empty"));
        }
        if i32::try_from(self.viewport.width).is_err() || i32::try_from(self.viewport.height).is_err() {
            return Err(ConfigError::invalid("viewport", "must fit in i32"));
        }
        self.terrain.validate()?;
        self.props.validate()?;
        self.character.validate()
    }
}

/// `cells * tile` in pixels, if it fits in i32
fn pixel_extent(cells: usize, tile: u32) -> Option<i32> {
    let cells = i32::try_from(cells).ok()?;
    let tile = i32::try_from(tile).ok()?;
    cells.checked_mul(tile)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
        }
    }
}

impl From<ViewportSize> for UVec2 {
    fn from(size: ViewportSize) -> Self {
        UVec2::new(size.width, size.height)
    }
}

/// Roll thresholds for the base biome. A roll in `0..=roll_max` below
/// `water_below` is water, below `sand_below` is sand, anything else grass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub roll_max: u32,
    pub water_below: u32,
    pub sand_below: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            roll_max: 10,
            water_below: 2,
            sand_below: 5,
        }
    }
}

impl TerrainConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.water_below > self.sand_below || self.sand_below > self.roll_max + 1 {
            return Err(ConfigError::invalid(
                "terrain",
                "expected water_below <= sand_below <= roll_max + 1",
            ));
        }
        Ok(())
    }
}

/// Chance of one prop being placed on a bare grass cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropChance {
    pub prop: Prop,
    pub chance: f64,
}

/// Ordered Bernoulli trials; the first success on a cell wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropTable(pub Vec<PropChance>);

impl Default for PropTable {
    fn default() -> Self {
        Self(vec![
            PropChance { prop: Prop::Forest, chance: 0.10 },
            PropChance { prop: Prop::RockBig, chance: 0.05 },
            PropChance { prop: Prop::RockMedium, chance: 0.05 },
            PropChance { prop: Prop::FlowerA, chance: 0.02 },
            PropChance { prop: Prop::FlowerB, chance: 0.02 },
            PropChance { prop: Prop::Bush, chance: 0.02 },
        ])
    }
}

impl PropTable {
    pub fn entries(&self) -> &[PropChance] {
        &self.0
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.0 {
            if !(0.0..=1.0).contains(&entry.chance) {
                return Err(ConfigError::invalid(
                    "props",
                    format!("chance for {:?} must be within 0..=1, got {}", entry.prop, entry.chance),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Bounding box edge length in pixels
    pub size: u32,
    /// Pixels moved per tick while walking
    pub speed: i32,
    /// Speed multiplier while the run modifier is held
    pub run_multiplier: i32,
    /// Ticks per animation frame
    pub frame_threshold: u32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            size: 50,
            speed: 5,
            run_multiplier: 2,
            frame_threshold: 10,
        }
    }
}

impl CharacterConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || i32::try_from(self.size).is_err() {
            return Err(ConfigError::invalid("character.size", "must be positive and fit in i32"));
        }
        if self.speed < 0 || self.run_multiplier < 1 {
            return Err(ConfigError::invalid(
                "character.speed",
                "speed must be >= 0 and run_multiplier >= 1",
            ));
        }
        if self.speed.checked_mul(self.run_multiplier).is_none() {
            return Err(ConfigError::invalid(
                "character.run_multiplier",
                "speed * run_multiplier must fit in i32",
            ));
        }
        if self.frame_threshold == 0 {
            return Err(ConfigError::invalid("character.frame_threshold", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.map_pixel_size(), UVec2::new(2500, 2500));
        assert_eq!(config.props.entries()[0].prop, Prop::Forest);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WorldConfig::from_json_str(r#"{ "tile_size": 150, "seed": 7 }"#).unwrap();
        assert_eq!(config.tile_size, 150);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.map_width, 50);
        assert_eq!(config.character.speed, 5);
    }

    #[test]
    fn test_prop_table_from_json() {
        let json = r#"{ "props": [ { "prop": "Bush", "chance": 0.5 } ] }"#;
        let config = WorldConfig::from_json_str(json).unwrap();
        assert_eq!(config.props.entries().len(), 1);
        assert_eq!(config.props.entries()[0].prop, Prop::Bush);
    }

    #[test]
    fn test_rejects_tiny_map() {
        let err = WorldConfig::from_json_str(r#"{ "map_width": 2 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_tile_too_small_for_props() {
        let err = WorldConfig::from_json_str(r#"{ "tile_size": 4 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tile_size", .. }));
        assert!(WorldConfig::from_json_str(r#"{ "tile_size": 5 }"#).is_ok());
        assert_eq!(Prop::RockMedium.sprite_size(MIN_TILE_SIZE), 1);
    }

    #[test]
    fn test_rejects_map_wider_than_i32_pixels() {
        let err = WorldConfig::from_json_str(r#"{ "tile_size": 50000000 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "map_width/map_height", .. }));

        let err = WorldConfig::from_json_str(r#"{ "map_height": 50000000, "tile_size": 50 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "map_width/map_height", .. }));

        // 42_949_673 * 50 fits in u32 but not in i32
        let json = r#"{ "map_width": 42949673, "tile_size": 50 }"#;
        assert!(WorldConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_accepts_largest_i32_map() {
        let config = WorldConfig {
            map_width: 1000,
            tile_size: 2_000_000,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_overflowing_run_speed() {
        let json = r#"{ "character": { "speed": 2000000000, "run_multiplier": 2 } }"#;
        let err = WorldConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "character.run_multiplier", .. }));
    }

    #[test]
    fn test_rejects_huge_viewport() {
        let json = r#"{ "viewport": { "width": 3000000000, "height": 500 } }"#;
        let err = WorldConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "viewport", .. }));
    }

    #[test]
    fn test_rejects_bad_chance() {
        let json = r#"{ "props": [ { "prop": "Forest", "chance": 1.5 } ] }"#;
        assert!(WorldConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = WorldConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.json");
        assert_eq!(WorldConfig::load(path).unwrap(), WorldConfig::default());
    }

    #[test]
    fn test_fixed_seed_is_kept() {
        let config = WorldConfig {
            seed: Some(99),
            ..Default::default()
        };
        assert_eq!(config.seed_or_random(), 99);
    }

    #[test]
    fn test_missing_file() {
        let err = WorldConfig::load("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
