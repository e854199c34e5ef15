pub mod assets;
pub mod culling;
pub mod renderer;
pub mod surface;

pub use assets::{AssetEntry, AssetKey, AssetManifest, AssetTable, FileTextureProvider, TextureProvider};
pub use culling::{visible_tile_range, VisibleRange};
pub use renderer::{FrameStats, Renderer};
pub use surface::{DrawCall, DrawLayer, DrawList, RenderSurface};
