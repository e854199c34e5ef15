pub mod constants;
pub mod grid;
pub mod layer;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use grid::{GridStats, TileGrid};
pub use layer::Layer;
pub use types::{Prop, Terrain, TileKind, TilePos};
