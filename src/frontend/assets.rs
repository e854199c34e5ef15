use bevy::prelude::*;
use std::path::Path;
use tileworld::error::AssetError;
use tileworld::render::TextureProvider;

/// Loads textures through bevy's asset server.
///
/// Files are checked up front by the preflight pass in `main`, so this
/// only rejects degenerate sizes.
pub struct BevyTextureProvider<'a> {
    server: &'a AssetServer,
}

impl<'a> BevyTextureProvider<'a> {
    pub fn new(server: &'a AssetServer) -> Self {
        Self { server }
    }
}

impl TextureProvider for BevyTextureProvider<'_> {
    type Handle = Handle<Image>;

    fn load(&mut self, name: &str, path: &Path, size: UVec2) -> Result<Handle<Image>, AssetError> {
        if size.x == 0 || size.y == 0 {
            return Err(AssetError::EmptySize { name: name.to_string() });
        }
        // Asset paths always use forward slashes
        let asset_path = path.to_string_lossy().replace('\\', "/");
        Ok(self.server.load(asset_path))
    }
}
