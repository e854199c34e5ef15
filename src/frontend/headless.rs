//! Windowless run of the same loop, driven by scripted input.

use bevy::log::info;
use std::path::Path;
use tileworld::error::AssetError;
use tileworld::render::{AssetManifest, AssetTable, DrawList, Renderer, TextureProvider};
use tileworld::sim::{FrameLimiter, RunSummary, ScriptedInput, SimulationLoop};
use tileworld::world::Session;
use tileworld::{StartupError, WorldConfig};
use tracing_subscriber::EnvFilter;

/// Ticks spent on each side of the patrol square
const PATROL_LEG: usize = 30;

/// Hands out asset names instead of textures
struct NameProvider;

impl TextureProvider for NameProvider {
    type Handle = String;

    fn load(&mut self, name: &str, _path: &Path, _size: bevy::math::UVec2) -> Result<String, AssetError> {
        Ok(name.to_string())
    }
}

pub fn run(config: &WorldConfig, seed: u64, ticks: usize) -> Result<RunSummary, StartupError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| StartupError::Logging(err.to_string()))?;

    let manifest = AssetManifest::standard(config.tile_size, config.character.size);
    let assets = AssetTable::load(&manifest, &mut NameProvider)?;

    let session = Session::new(config, seed);
    let mut sim = SimulationLoop::new(session, Renderer::new(assets));
    let mut surface = DrawList::new();
    let mut input = ScriptedInput::patrol(ticks, PATROL_LEG);
    let mut limiter = FrameLimiter::new(config.target_fps);

    let summary = sim.run(&mut input, &mut surface, &mut limiter);
    let character = sim.session().character();
    info!(
        "Character ended at {:?} facing {:?}, camera offset {:?}, {:.1} fps",
        character.position(),
        character.facing(),
        sim.session().camera().offset(),
        summary.fps
    );
    Ok(summary)
}
