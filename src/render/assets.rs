//! Logical asset names and the texture table built from them.
//!
//! Every texture the world draws is listed in an [`AssetManifest`]. At
//! startup a [`TextureProvider`] resolves each entry into a handle, and the
//! resulting [`AssetTable`] is handed to the renderer. A single missing
//! entry aborts startup.

use crate::entities::{AnimationClip, SpriteFrame};
use crate::error::AssetError;
use crate::tiles::{Prop, Terrain};
use bevy::math::UVec2;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Terrain(Terrain),
    Prop(Prop),
    Character(AnimationClip, usize),
}

impl AssetKey {
    pub fn character(frame: SpriteFrame) -> Self {
        AssetKey::Character(frame.clip, frame.index % frame.clip.len())
    }

    /// Logical name, unique per key
    pub fn name(self) -> String {
        match self {
            AssetKey::Terrain(terrain) => terrain.asset_name().to_string(),
            AssetKey::Prop(prop) => prop.asset_name().to_string(),
            AssetKey::Character(clip, index) => clip.frame_name(index),
        }
    }

    /// Path relative to the asset root
    pub fn relative_path(self) -> PathBuf {
        match self {
            // Sand shares the grass texture
            AssetKey::Terrain(Terrain::Water) => PathBuf::from("water.png"),
            AssetKey::Terrain(Terrain::Sand | Terrain::Grass) => PathBuf::from("center.png"),
            AssetKey::Prop(prop) => PathBuf::from(match prop {
                Prop::Forest => "forest.png",
                Prop::RockBig => "rock_big.png",
                Prop::RockMedium => "rock_medium.png",
                Prop::FlowerA => "romashka_big.png",
                Prop::FlowerB => "flower2_big.png",
                Prop::Bush => "bush_big.png",
            }),
            AssetKey::Character(clip, index) => {
                Path::new("Character").join(format!("{}.png", clip.frame_name(index)))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub key: AssetKey,
    pub name: String,
    pub path: PathBuf,
    /// Size the texture is drawn at
    pub size: UVec2,
}

impl AssetEntry {
    fn new(key: AssetKey, size: u32) -> Self {
        Self {
            key,
            name: key.name(),
            path: key.relative_path(),
            size: UVec2::splat(size),
        }
    }
}

/// Every texture a world with the given sizes needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    entries: Vec<AssetEntry>,
}

impl AssetManifest {
    pub fn standard(tile_size: u32, character_size: u32) -> Self {
        let terrain = Terrain::ALL
            .into_iter()
            .map(|t| AssetEntry::new(AssetKey::Terrain(t), tile_size));
        let props = Prop::ALL
            .into_iter()
            .map(|p| AssetEntry::new(AssetKey::Prop(p), p.sprite_size(tile_size)));
        let character = AnimationClip::ALL.into_iter().flat_map(|clip| {
            (0..clip.len()).map(move |i| AssetEntry::new(AssetKey::Character(clip, i), character_size))
        });

        Self {
            entries: terrain.chain(props).chain(character).collect(),
        }
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves a logical asset into something a surface can draw
pub trait TextureProvider {
    type Handle: Clone;

    fn load(&mut self, name: &str, path: &Path, size: UVec2) -> Result<Self::Handle, AssetError>;
}

/// Handles for every manifest entry
#[derive(Debug, Clone)]
pub struct AssetTable<H> {
    handles: HashMap<AssetKey, H>,
}

impl<H: Clone> AssetTable<H> {
    /// Resolve the whole manifest, failing on the first missing asset
    pub fn load<P>(manifest: &AssetManifest, provider: &mut P) -> Result<Self, AssetError>
    where
        P: TextureProvider<Handle = H>,
    {
        let mut handles = HashMap::with_capacity(manifest.len());
        for entry in manifest.entries() {
            let handle = provider.load(&entry.name, &entry.path, entry.size)?;
            handles.insert(entry.key, handle);
        }
        Ok(Self { handles })
    }

    pub fn get(&self, key: AssetKey) -> Option<&H> {
        self.handles.get(&key)
    }

    pub fn terrain(&self, terrain: Terrain) -> Option<&H> {
        self.get(AssetKey::Terrain(terrain))
    }

    pub fn prop(&self, prop: Prop) -> Option<&H> {
        self.get(AssetKey::Prop(prop))
    }

    pub fn character(&self, frame: SpriteFrame) -> Option<&H> {
        self.get(AssetKey::character(frame))
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Provider that checks files exist under a root directory and hands back
/// their full paths.
#[derive(Debug, Clone)]
pub struct FileTextureProvider {
    root: PathBuf,
}

impl FileTextureProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TextureProvider for FileTextureProvider {
    type Handle = PathBuf;

    fn load(&mut self, name: &str, path: &Path, size: UVec2) -> Result<PathBuf, AssetError> {
        if size.x == 0 || size.y == 0 {
            return Err(AssetError::EmptySize { name: name.to_string() });
        }
        let full = self.root.join(path);
        if !full.is_file() {
            return Err(AssetError::Missing {
                name: name.to_string(),
                path: full,
            });
        }
        Ok(full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out sequential ids and refuses one name
    struct CountingProvider {
        next: u32,
        refuse: Option<&'static str>,
    }

    impl TextureProvider for CountingProvider {
        type Handle = u32;

        fn load(&mut self, name: &str, path: &Path, _size: UVec2) -> Result<u32, AssetError> {
            if self.refuse == Some(name) {
                return Err(AssetError::Missing {
                    name: name.to_string(),
                    path: path.to_path_buf(),
                });
            }
            self.next += 1;
            Ok(self.next)
        }
    }

    #[test]
    fn test_standard_manifest() {
        let manifest = AssetManifest::standard(150, 50);
        // 3 terrain + 6 props + s1 + 3 walk clips of 6 + 2 run frames
        assert_eq!(manifest.len(), 3 + 6 + 1 + 18 + 2);

        let rock = manifest
            .entries()
            .iter()
            .find(|e| e.key == AssetKey::Prop(Prop::RockMedium))
            .unwrap();
        assert_eq!(rock.size, UVec2::splat(30));
        assert_eq!(rock.path, PathBuf::from("rock_medium.png"));

        let flower = manifest
            .entries()
            .iter()
            .find(|e| e.key == AssetKey::Prop(Prop::FlowerA))
            .unwrap();
        assert_eq!(flower.size, UVec2::splat(50));
    }

    #[test]
    fn test_character_paths() {
        let key = AssetKey::Character(AnimationClip::WalkDown, 2);
        assert_eq!(key.name(), "d3");
        assert_eq!(key.relative_path(), Path::new("Character").join("d3.png"));
        assert_eq!(
            AssetKey::Character(AnimationClip::Idle, 0).relative_path(),
            Path::new("Character").join("s1.png")
        );
    }

    #[test]
    fn test_table_resolves_everything() {
        let manifest = AssetManifest::standard(50, 50);
        let mut provider = CountingProvider { next: 0, refuse: None };
        let table = AssetTable::load(&manifest, &mut provider).unwrap();
        assert_eq!(table.len(), manifest.len());
        assert!(table.terrain(Terrain::Sand).is_some());
        assert!(table.prop(Prop::Bush).is_some());
        assert!(table.get(AssetKey::Character(AnimationClip::Run, 1)).is_some());
    }

    #[test]
    fn test_missing_asset_is_fatal() {
        let manifest = AssetManifest::standard(50, 50);
        let mut provider = CountingProvider {
            next: 0,
            refuse: Some("bush"),
        };
        let err = AssetTable::load(&manifest, &mut provider).unwrap_err();
        assert!(matches!(err, AssetError::Missing { ref name, .. } if name == "bush"));
    }

    #[test]
    fn test_file_provider_reports_missing() {
        let mut provider = FileTextureProvider::new("no/such/root");
        let err = provider
            .load("water", Path::new("water.png"), UVec2::splat(50))
            .unwrap_err();
        assert!(matches!(err, AssetError::Missing { .. }));

        let err = provider.load("water", Path::new("water.png"), UVec2::ZERO).unwrap_err();
        assert!(matches!(err, AssetError::EmptySize { .. }));
    }
}
