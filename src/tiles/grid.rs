use super::layer::Layer;
use super::types::{Prop, Terrain, TileKind, TilePos};
use bevy::math::{IVec2, UVec2};
use std::collections::HashMap;

/// The authoritative terrain + prop matrices of a world.
///
/// Built once from generator output and never edited afterwards, so it can
/// be shared freely between the renderer and collision checks.
#[derive(Debug, Clone)]
pub struct TileGrid {
    terrain: Layer<Terrain>,
    props: Layer<Option<Prop>>,
    tile_size: u32,
}

impl TileGrid {
    /// Compose a grid from its two layers.
    ///
    /// Props that would break the grid invariants (not on grass, or on the
    /// border ring) are dropped.
    pub fn new(terrain: Layer<Terrain>, mut props: Layer<Option<Prop>>, tile_size: u32) -> Self {
        debug_assert_eq!(terrain.width(), props.width());
        debug_assert_eq!(terrain.height(), props.height());

        let misplaced: Vec<(usize, usize)> = props
            .iter()
            .filter(|&(x, y, prop)| {
                prop.is_some()
                    && (terrain.is_border(x, y)
                        || terrain.get(TilePos::new(x as i32, y as i32)) != Some(Terrain::Grass))
            })
            .map(|(x, y, _)| (x, y))
            .collect();
        for (x, y) in misplaced {
            props.set(x, y, None);
        }

        Self {
            terrain,
            props,
            tile_size,
        }
    }

    pub fn width(&self) -> usize {
        self.terrain.width()
    }

    pub fn height(&self) -> usize {
        self.terrain.height()
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// World size in pixels
    pub fn pixel_size(&self) -> UVec2 {
        UVec2::new(
            self.width() as u32 * self.tile_size,
            self.height() as u32 * self.tile_size,
        )
    }

    pub fn terrain_at(&self, x: i32, y: i32) -> Option<Terrain> {
        self.terrain.get(TilePos::new(x, y))
    }

    /// Prop on a cell. Out-of-range cells have no prop.
    pub fn prop_at(&self, x: i32, y: i32) -> Option<Prop> {
        self.props.get(TilePos::new(x, y)).flatten()
    }

    /// Out-of-range cells are never passable. Props never block.
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.terrain_at(x, y).is_some_and(Terrain::is_passable)
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        self.terrain.contains(pos)
    }

    /// Tile owning a world pixel (may lie outside the grid)
    pub fn tile_at_pixel(&self, pixel: IVec2) -> TilePos {
        TilePos::from_pixel(pixel, self.tile_size)
    }

    /// Merged legacy encoding: prop code where a prop sits, terrain code otherwise
    pub fn legacy_matrix(&self) -> Vec<Vec<u8>> {
        let mut rows = vec![Vec::with_capacity(self.width()); self.height()];
        for (x, y, terrain) in self.terrain.iter() {
            let kind = match self.prop_at(x as i32, y as i32) {
                Some(prop) => TileKind::from(prop),
                None => TileKind::from(terrain),
            };
            rows[y].push(kind.legacy_code());
        }
        rows
    }

    /// CRC32 of the legacy encoding, used to compare generated worlds
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&(self.width() as u32).to_le_bytes());
        hasher.update(&(self.height() as u32).to_le_bytes());
        for row in self.legacy_matrix() {
            hasher.update(&row);
        }
        hasher.finalize()
    }

    /// Count tiles of each kind
    pub fn stats(&self) -> GridStats {
        let mut counts: HashMap<TileKind, usize> = HashMap::new();
        for (x, y, terrain) in self.terrain.iter() {
            *counts.entry(terrain.into()).or_default() += 1;
            if let Some(prop) = self.prop_at(x as i32, y as i32) {
                *counts.entry(prop.into()).or_default() += 1;
            }
        }
        GridStats {
            width: self.width(),
            height: self.height(),
            counts,
        }
    }
}

/// Statistics about a generated grid
#[derive(Debug, Clone)]
pub struct GridStats {
    pub width: usize,
    pub height: usize,
    pub counts: HashMap<TileKind, usize>,
}

impl GridStats {
    pub fn count(&self, kind: TileKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn prop_count(&self) -> usize {
        Prop::ALL.iter().map(|&p| self.count(p.into())).sum()
    }
}

impl std::fmt::Display for GridStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} | Water: {}, Sand: {}, Grass: {} | Props: {}",
            self.width,
            self.height,
            self.count(TileKind::Water),
            self.count(TileKind::Sand),
            self.count(TileKind::Grass),
            self.prop_count()
        )
    }
}
