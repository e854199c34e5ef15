use super::assets::AssetTable;
use super::culling::{visible_tile_range, VisibleRange};
use super::surface::{DrawCall, DrawLayer, RenderSurface};
use crate::camera::Camera;
use crate::entities::Character;
use crate::tiles::{TileGrid, TilePos};
use bevy::math::{IRect, IVec2};
#[cfg(feature = "debug_culling")]
use bevy::log::debug;

/// What one frame put on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub visible_tiles: usize,
    pub terrain_draws: usize,
    pub prop_draws: usize,
    pub character_draws: usize,
}

impl FrameStats {
    pub fn total_draws(&self) -> usize {
        self.terrain_draws + self.prop_draws + self.character_draws
    }
}

/// Turns the world into draw calls, one layer at a time.
#[derive(Debug, Clone)]
pub struct Renderer<H> {
    assets: AssetTable<H>,
}

impl<H: Clone> Renderer<H> {
    pub fn new(assets: AssetTable<H>) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &AssetTable<H> {
        &self.assets
    }

    /// Draw terrain, then props, then the character, and present.
    ///
    /// Only tiles inside the camera's visible range are visited.
    pub fn render<S>(&self, grid: &TileGrid, camera: &Camera, character: &Character, surface: &mut S) -> FrameStats
    where
        S: RenderSurface<H>,
    {
        let range = visible_tile_range(camera, grid);
        let mut stats = FrameStats {
            visible_tiles: range.len(),
            ..Default::default()
        };

        stats.terrain_draws = self.draw_terrain(grid, camera, &range, surface);
        stats.prop_draws = self.draw_props(grid, camera, &range, surface);
        stats.character_draws = self.draw_character(camera, character, surface);
        surface.present();

        #[cfg(feature = "debug_culling")]
        debug!(
            "Culled to tiles x {:?} y {:?}: {} visible of {}, {} draws",
            range.x,
            range.y,
            stats.visible_tiles,
            grid.width() * grid.height(),
            stats.total_draws()
        );

        stats
    }

    fn draw_terrain<S: RenderSurface<H>>(
        &self,
        grid: &TileGrid,
        camera: &Camera,
        range: &VisibleRange,
        surface: &mut S,
    ) -> usize {
        let tile = grid.tile_size();
        let mut draws = 0;
        for (x, y) in range.iter() {
            let Some(terrain) = grid.terrain_at(x as i32, y as i32) else {
                continue;
            };
            let Some(texture) = self.assets.terrain(terrain) else {
                continue;
            };
            surface.draw(DrawCall {
                texture: texture.clone(),
                dest: camera.apply(tile_rect(x, y, tile, tile)),
                flip_x: false,
                layer: DrawLayer::Terrain,
            });
            draws += 1;
        }
        draws
    }

    fn draw_props<S: RenderSurface<H>>(
        &self,
        grid: &TileGrid,
        camera: &Camera,
        range: &VisibleRange,
        surface: &mut S,
    ) -> usize {
        let tile = grid.tile_size();
        let mut draws = 0;
        for (x, y) in range.iter() {
            let Some(prop) = grid.prop_at(x as i32, y as i32) else {
                continue;
            };
            let Some(texture) = self.assets.prop(prop) else {
                continue;
            };
            // Small props keep their own size, anchored on the tile corner
            surface.draw(DrawCall {
                texture: texture.clone(),
                dest: camera.apply(tile_rect(x, y, tile, prop.sprite_size(tile))),
                flip_x: false,
                layer: DrawLayer::Props,
            });
            draws += 1;
        }
        draws
    }

    fn draw_character<S: RenderSurface<H>>(&self, camera: &Camera, character: &Character, surface: &mut S) -> usize {
        let sprite = character.sprite();
        let Some(texture) = self.assets.character(sprite) else {
            return 0;
        };
        surface.draw(DrawCall {
            texture: texture.clone(),
            dest: camera.apply(character.rect()),
            flip_x: sprite.flip_x,
            layer: DrawLayer::Character,
        });
        1
    }
}

fn tile_rect(x: usize, y: usize, tile: u32, size: u32) -> IRect {
    let min = TilePos::new(x as i32, y as i32).to_pixel(tile);
    IRect::from_corners(min, min + IVec2::splat(size as i32))
}
