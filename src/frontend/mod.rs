//! Bevy window front end.

pub mod assets;
pub mod headless;
pub mod input;
pub mod sprites;

use self::assets::BevyTextureProvider;
use self::input::{collect_window_input, key_state, PendingInput};
use self::sprites::{sync_sprites, FrameBuffer, SpritePool};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use tileworld::render::{AssetManifest, AssetTable, FileTextureProvider, Renderer};
use tileworld::sim::SimulationLoop;
use tileworld::world::Session;
use tileworld::{AssetError, WorldConfig};

/// The running simulation
#[derive(Resource)]
pub struct WorldSim(pub SimulationLoop<Handle<Image>>);

#[derive(Resource)]
struct WorldSettings {
    config: WorldConfig,
    seed: u64,
}

/// Check every manifest entry exists on disk before opening a window
pub fn preflight(config: &WorldConfig) -> Result<(), AssetError> {
    let manifest = AssetManifest::standard(config.tile_size, config.character.size);
    let mut provider = FileTextureProvider::new(&config.asset_root);
    AssetTable::load(&manifest, &mut provider)?;
    Ok(())
}

pub fn run_windowed(config: WorldConfig, seed: u64) -> AppExit {
    let asset_root = config.asset_root.to_string_lossy().into_owned();
    let target_fps = f64::from(config.target_fps);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(AssetPlugin {
                    file_path: asset_root,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "tileworld".into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(Color::srgb(1.0, 0.0, 0.0)))
        .insert_resource(Time::<Fixed>::from_hz(target_fps))
        .insert_resource(WorldSettings { config, seed })
        .init_resource::<PendingInput>()
        .init_resource::<FrameBuffer>()
        .init_resource::<SpritePool>()
        .add_systems(Startup, setup_world)
        .add_systems(Update, collect_window_input)
        .add_systems(FixedUpdate, step_simulation.run_if(resource_exists::<WorldSim>))
        .add_systems(PostUpdate, sync_sprites.run_if(resource_exists::<WorldSim>))
        .run()
}

fn setup_world(
    mut commands: Commands,
    server: Res<AssetServer>,
    settings: Res<WorldSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut exit: MessageWriter<AppExit>,
) {
    commands.spawn(Camera2d);

    let config = &settings.config;
    let manifest = AssetManifest::standard(config.tile_size, config.character.size);
    let assets = match AssetTable::load(&manifest, &mut BevyTextureProvider::new(&server)) {
        Ok(assets) => assets,
        Err(err) => {
            error!("Cannot start: {}", err);
            exit.write(AppExit::error());
            return;
        }
    };

    let mut session = Session::new(config, settings.seed);
    if let Ok(window) = windows.single() {
        session.resize(UVec2::new(window.width() as u32, window.height() as u32));
    }

    commands.insert_resource(WorldSim(SimulationLoop::new(session, Renderer::new(assets))));
    info!("World ready, {} textures loaded", manifest.len());
}

/// One simulation tick per fixed step
fn step_simulation(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingInput>,
    mut sim: ResMut<WorldSim>,
    mut frame: ResMut<FrameBuffer>,
    mut exit: MessageWriter<AppExit>,
) {
    let input = pending.take(key_state(&keyboard));
    sim.0.step(input, &mut frame.0);
    if sim.0.is_finished() {
        info!("Quit requested after {} ticks", sim.0.ticks());
        exit.write(AppExit::Success);
    }
}
