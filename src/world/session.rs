use super::generator::TerrainGenerator;
use super::props::PropPlacer;
use crate::camera::{Camera, ZOOM_STEP};
use crate::config::WorldConfig;
use crate::entities::{Character, MoveOutcome};
use crate::render::{FrameStats, RenderSurface, Renderer};
use crate::sim::KeyState;
use crate::tiles::TileGrid;
use bevy::log::info;
use bevy::math::UVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate the grid for a seed.
///
/// Terrain and props draw from one seeded stream, terrain first, so the
/// whole grid is a function of the seed and the config.
pub fn build_grid(config: &WorldConfig, seed: u64) -> TileGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let terrain = TerrainGenerator::new(config.terrain).generate_with(config.map_width, config.map_height, &mut rng);
    let props = PropPlacer::new(config.props.clone()).place(&terrain, &mut rng);
    TileGrid::new(terrain, props, config.tile_size)
}

/// One running world: the grid, the character walking on it and the
/// camera following them.
#[derive(Debug, Clone)]
pub struct Session {
    seed: u64,
    grid: TileGrid,
    character: Character,
    camera: Camera,
}

impl Session {
    pub fn new(config: &WorldConfig, seed: u64) -> Self {
        let grid = build_grid(config, seed);
        info!(
            "Generated {}x{} world from seed {} (fingerprint {:08x})",
            grid.width(),
            grid.height(),
            seed,
            grid.fingerprint()
        );
        info!("{}", grid.stats());

        let character = Character::spawn_centered(&config.character, grid.pixel_size());
        let mut camera = Camera::new(config.viewport.into(), grid.pixel_size());
        camera.update(character.center());

        Self {
            seed,
            grid,
            character,
            camera,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Move the character, then re-centre the camera on them
    pub fn tick(&mut self, keys: &KeyState) -> MoveOutcome {
        let outcome = self.character.update(keys, &self.grid);
        self.camera.update(self.character.center());
        outcome
    }

    pub fn resize(&mut self, viewport: UVec2) {
        self.camera.resize(viewport.x, viewport.y);
        self.camera.follow(self.character.center());
    }

    /// Move the zoom target by `steps` notches. The camera eases towards it
    /// on the following ticks.
    pub fn zoom(&mut self, steps: i32) {
        if steps != 0 {
            self.camera.adjust_zoom(steps as f32 * ZOOM_STEP);
        }
    }

    pub fn render<H, S>(&self, renderer: &Renderer<H>, surface: &mut S) -> FrameStats
    where
        H: Clone,
        S: RenderSurface<H>,
    {
        renderer.render(&self.grid, &self.camera, &self.character, surface)
    }
}
