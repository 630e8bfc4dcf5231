//! Inventory of texture files a scene depends on.

use crate::job::TextureRef;
use crate::scene::{ImageAsset, SceneSnapshotProvider};
use std::path::PathBuf;

/// Image names the host uses for internal buffers rather than files.
pub const RESERVED_IMAGE_NAMES: [&str; 2] = ["Render Result", "Viewer Node"];

/// A referenced texture whose file is not on disk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("File not found: {} (texture {name:?})", path.display())]
pub struct MissingAsset {
    pub name: String,
    pub path: PathBuf,
}

/// Textures found on disk, plus the ones that were referenced but missing.
///
/// Missing textures are excluded from `textures`; the caller decides how to
/// report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextureInventory {
    pub textures: Vec<TextureRef>,
    pub missing: Vec<MissingAsset>,
}

impl TextureInventory {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl FromIterator<Result<TextureRef, MissingAsset>> for TextureInventory {
    fn from_iter<I: IntoIterator<Item = Result<TextureRef, MissingAsset>>>(iter: I) -> Self {
        let mut inventory = Self::default();
        for entry in iter {
            match entry {
                Ok(texture) => inventory.textures.push(texture),
                Err(missing) => inventory.missing.push(missing),
            }
        }
        inventory
    }
}

/// Resolve one registered image.
///
/// Returns `None` for images that are not texture files the farm needs:
/// unused, reserved internal buffers, and images packed into the scene.
pub fn resolve_texture<S>(scene: &S, image: &ImageAsset) -> Option<Result<TextureRef, MissingAsset>>
where
    S: SceneSnapshotProvider + ?Sized,
{
    if image.users == 0 {
        return None;
    }
    if RESERVED_IMAGE_NAMES.contains(&image.name.as_str()) {
        return None;
    }
    if image.packed {
        return None;
    }

    let resolved = scene.resolve_path(&image.filepath);
    let entry = match resolved {
        Some(path) if path.exists() => Ok(TextureRef {
            name: image.name.clone(),
            absolute_path: path.to_string_lossy().into_owned(),
        }),
        Some(path) => Err(MissingAsset {
            name: image.name.clone(),
            path,
        }),
        None => Err(MissingAsset {
            name: image.name.clone(),
            path: PathBuf::from(&image.filepath),
        }),
    };
    Some(entry)
}
