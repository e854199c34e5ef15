//! Procedurally generated 2D tile world with a walking character.
//!
//! A seeded [`world::TerrainGenerator`] and [`world::PropPlacer`] build a
//! [`tiles::TileGrid`]. A [`world::Session`] puts a [`entities::Character`]
//! and a [`camera::Camera`] on it, and [`sim::SimulationLoop`] drives the
//! session at a fixed rate, handing viewport-culled draw calls from
//! [`render::Renderer`] to whatever surface the front end provides.

pub mod camera;
pub mod config;
pub mod entities;
pub mod error;
pub mod render;
pub mod sim;
pub mod tiles;
pub mod world;

pub use camera::Camera;
pub use config::WorldConfig;
pub use error::{AssetError, ConfigError, StartupError};
