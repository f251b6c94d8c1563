//! Texture resource manager
//!
//! Textures are loaded from `<root>/<id>.<extension>` once and shared by
//! `Arc` afterwards. Lookups of textures that were never loaded fall back to
//! the default texture instead of failing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use crate::{AssetError, TextureData};

/// Cache of loaded textures keyed by id
#[derive(Debug)]
pub struct ResourceManager {
    root: PathBuf,
    extension: String,
    default_name: String,
    textures: HashMap<String, Arc<TextureData>>,
    default_texture: Option<Arc<TextureData>>,
}

impl ResourceManager {
    /// Create a manager rooted at `root`
    ///
    /// `extension` is used for the default texture file
    /// (`<root>/<default_name>.<extension>`).
    pub fn new(root: impl Into<PathBuf>, extension: &str, default_name: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.to_string(),
            default_name: default_name.to_string(),
            textures: HashMap::new(),
            default_texture: None,
        }
    }

    /// Directory textures are loaded from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Extension of the default texture file
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Load `<root>/<id>.<extension>` into the cache
    ///
    /// A texture already in the cache is returned without touching the disk.
    pub fn load_texture(&mut self, id: &str, extension: &str) -> Result<Arc<TextureData>, AssetError> {
        if let Some(texture) = self.textures.get(id) {
            return Ok(Arc::clone(texture));
        }

        let path = self.root.join(format!("{}.{}", id, extension));
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        let texture = Arc::new(TextureData::from_file(&path)?);
        log::debug!("Loaded texture '{}' ({}x{})", id, texture.width, texture.height);
        self.textures.insert(id.to_string(), Arc::clone(&texture));
        Ok(texture)
    }

    /// A previously loaded texture
    pub fn get_texture(&self, id: &str) -> Option<Arc<TextureData>> {
        self.textures.get(id).cloned()
    }

    /// A previously loaded texture, or the default texture if `id` was never loaded
    pub fn texture_or_default(&mut self, id: &str) -> Arc<TextureData> {
        match self.get_texture(id) {
            Some(texture) => texture,
            None => {
                log::warn!("Texture '{}' is not loaded, using default", id);
                self.default_texture()
            }
        }
    }

    /// The default texture
    ///
    /// Loaded from `<root>/<default_name>.<extension>` on first use; if that
    /// file is unusable the built-in 1x1 white texture is used instead.
    pub fn default_texture(&mut self) -> Arc<TextureData> {
        if let Some(texture) = &self.default_texture {
            return Arc::clone(texture);
        }

        let path = self.root.join(format!("{}.{}", self.default_name, self.extension));
        let data = match TextureData::from_file(&path) {
            Ok(data) => data,
            Err(e) => {
                log::debug!("No default texture at '{}' ({}), using built-in", path.display(), e);
                TextureData::builtin_default()
            }
        };
        let texture = Arc::new(data);
        self.default_texture = Some(Arc::clone(&texture));
        texture
    }

    /// Number of cached textures, not counting the default
    #[inline]
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn write_png(dir: &Path, name: &str, color: [u8; 4]) {
        let path = dir.join(format!("{}.png", name));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        image::RgbaImage::from_pixel(2, 2, image::Rgba(color))
            .save(&path)
            .unwrap();
    }

    #[test]
    fn test_load_and_get() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "Circuit", [255, 0, 0, 255]);

        let mut resources = ResourceManager::new(dir.path(), "png", "Default");
        let tex = resources.load_texture("Circuit", "png").unwrap();
        assert_eq!(tex.pixel(0, 0), Some(Color::RED));
        assert!(resources.get_texture("Circuit").is_some());
        assert_eq!(resources.texture_count(), 1);
    }

    #[test]
    fn test_nested_id() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "Characters/tile000", [0, 0, 255, 255]);

        let mut resources = ResourceManager::new(dir.path(), "png", "Default");
        assert!(resources.load_texture("Characters/tile000", "png").is_ok());
        assert!(resources.get_texture("Characters/tile000").is_some());
    }

    #[test]
    fn test_load_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "a", [0, 0, 0, 255]);

        let mut resources = ResourceManager::new(dir.path(), "png", "Default");
        let first = resources.load_texture("a", "png").unwrap();
        std::fs::remove_file(dir.path().join("a.png")).unwrap();
        let second = resources.load_texture("a", "png").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_missing_texture_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut resources = ResourceManager::new(dir.path(), "png", "Default");
        let result = resources.load_texture("nope", "png");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
        assert!(resources.get_texture("nope").is_none());
        assert_eq!(resources.texture_count(), 0);
    }

    #[test]
    fn test_corrupt_texture_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();
        let mut resources = ResourceManager::new(dir.path(), "png", "Default");
        let result = resources.load_texture("broken", "png");
        assert!(matches!(result, Err(AssetError::Decode(_))));
    }

    #[test]
    fn test_default_is_builtin_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut resources = ResourceManager::new(dir.path(), "png", "Default");
        let tex = resources.texture_or_default("missing");
        assert_eq!(tex.name, TextureData::DEFAULT_NAME);
        assert_eq!((tex.width, tex.height), (1, 1));
    }

    #[test]
    fn test_default_from_file() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "Default", [0, 255, 0, 255]);
        let mut resources = ResourceManager::new(dir.path(), "png", "Default");
        let tex = resources.texture_or_default("missing");
        assert_eq!((tex.width, tex.height), (2, 2));
        assert_eq!(tex.pixel(1, 1), Some(Color::GREEN));
    }
}
