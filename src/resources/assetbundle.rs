//! Loaded demo assets.
//!
//! [`AssetBundle`] is the explicit result of loading a variant's images:
//! the texture keys and pixel sizes of the background and of every sprite
//! frame. It is produced once at startup by
//! [`load_assets`](crate::game::load_assets) and handed to the setup system,
//! which spawns entities from it. The textures themselves live in the
//! [`TextureStore`](crate::resources::texturestore::TextureStore).

use std::fs;
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;

/// Image extensions raylib can decode.
const IMAGE_EXTENSIONS: [&str; 7] = ["png", "bmp", "tga", "jpg", "jpeg", "gif", "qoi"];

/// Key and pixel size of a loaded texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    pub key: String,
    pub width: i32,
    pub height: i32,
}

impl TextureInfo {
    pub fn new(key: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }
}

/// Everything a variant needs on screen, already loaded.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct AssetBundle {
    pub background: Option<TextureInfo>,
    /// Sprite frames in playback order. Never empty.
    frames: Vec<TextureInfo>,
}

impl AssetBundle {
    /// Build a bundle; fails when there are no sprite frames.
    pub fn new(background: Option<TextureInfo>, frames: Vec<TextureInfo>) -> Result<Self, String> {
        if frames.is_empty() {
            return Err("Asset bundle has no sprite frames".to_string());
        }
        Ok(Self { background, frames })
    }

    /// Sprite frames in playback order.
    pub fn frames(&self) -> &[TextureInfo] {
        &self.frames
    }

    /// Frame shown before the animation starts.
    pub fn first_frame(&self) -> &TextureInfo {
        // non-empty since `new` is the only constructor
        &self.frames[0]
    }

    /// Size of the first frame, used as the sprite's unscaled box.
    pub fn sprite_size(&self) -> (i32, i32) {
        let first = self.first_frame();
        (first.width, first.height)
    }

    pub fn frame_keys(&self) -> Vec<String> {
        self.frames.iter().map(|f| f.key.clone()).collect()
    }
}

/// List the image files of a frame directory, sorted by file name.
///
/// Hidden files and files without a known image extension are skipped.
pub fn list_frame_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read frame directory {:?}: {}", dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read entry in {:?}: {}", dir, e))?;
        let path = entry.path();
        if !path.is_file() || !is_image_file(&path) {
            continue;
        }
        files.push(path);
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if files.is_empty() {
        return Err(format!("No image files found in {:?}", dir));
    }
    Ok(files)
}

fn is_image_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'));
    let known = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
    !hidden && known
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "spritebounce-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn frames_are_sorted_and_filtered() {
        let dir = scratch_dir("sorted");
        for name in ["walk_2.png", "walk_0.png", "walk_1.PNG", "notes.txt", ".hidden.png"] {
            fs::write(dir.join(name), b"").unwrap();
        }
        fs::create_dir(dir.join("nested.png")).unwrap();

        let files = list_frame_files(&dir).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["walk_0.png", "walk_1.PNG", "walk_2.png"]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = scratch_dir("empty");
        let err = list_frame_files(&dir).unwrap_err();
        assert!(err.starts_with("No image files"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = list_frame_files(Path::new("./no/such/frames")).unwrap_err();
        assert!(err.starts_with("Failed to read frame directory"));
    }

    #[test]
    fn bundle_requires_frames() {
        assert!(AssetBundle::new(None, Vec::new()).is_err());
        let bundle = AssetBundle::new(
            Some(TextureInfo::new("background", 1000, 740)),
            vec![TextureInfo::new("frame_0", 200, 240), TextureInfo::new("frame_1", 10, 10)],
        )
        .unwrap();
        assert_eq!(bundle.sprite_size(), (200, 240));
        assert_eq!(bundle.frame_keys(), vec!["frame_0", "frame_1"]);
    }

    #[test]
    fn frames_keep_playback_order() {
        let bundle = AssetBundle::new(
            None,
            vec![TextureInfo::new("frame_1", 10, 20), TextureInfo::new("frame_0", 30, 40)],
        )
        .unwrap();
        assert_eq!(bundle.frames().len(), 2);
        assert_eq!(bundle.first_frame(), &TextureInfo::new("frame_1", 10, 20));
        assert_eq!(bundle.frames()[1].key, "frame_0");
        assert!(bundle.background.is_none());
    }
}
