//! Textures
//!
//! [`TextureData`] is decoded RGBA8 pixel data. [`Texture`] is the component
//! that carries a texture on an actor; when its file cannot be loaded it
//! falls back to the built-in default texture and logs a warning.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use crate::{AssetError, Behavior, Color, Surface};

/// Decoded texture pixels
#[derive(Clone, PartialEq, Eq)]
pub struct TextureData {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row-major, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

impl fmt::Debug for TextureData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureData")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl TextureData {
    /// Name of the built-in fallback texture
    pub const DEFAULT_NAME: &'static str = "Default";

    /// A texture filled with one colour
    pub fn solid(name: impl Into<String>, width: u32, height: u32, color: Color) -> Self {
        let pixels = [color.r, color.g, color.b, color.a]
            .iter()
            .copied()
            .cycle()
            .take((width as usize) * (height as usize) * 4)
            .collect();
        Self {
            name: name.into(),
            width,
            height,
            pixels,
        }
    }

    /// The built-in 1x1 white texture
    pub fn builtin_default() -> Self {
        Self::solid(Self::DEFAULT_NAME, 1, 1, Color::WHITE)
    }

    /// Decode an image file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let img = image::open(path)?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            name,
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    /// Colour of the pixel at (x, y), if inside the texture
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some(Color::rgba(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ))
    }
}

/// Texture component
#[derive(Clone, Debug)]
pub struct Texture {
    name: String,
    extension: String,
    data: Arc<TextureData>,
    fallback: bool,
}

impl Texture {
    /// Load `<dir>/<name>.<extension>`
    ///
    /// A texture that fails to load is replaced by the built-in default.
    pub fn load(dir: &Path, name: &str, extension: &str) -> Self {
        let path = dir.join(format!("{}.{}", name, extension));
        match TextureData::from_file(&path) {
            Ok(data) => Self::from_data(name, extension, Arc::new(data)),
            Err(e) => {
                log::warn!("Texture '{}' failed to load ({}), using default", path.display(), e);
                Self::fallback(name, extension, Arc::new(TextureData::builtin_default()))
            }
        }
    }

    /// Wrap already loaded texture data
    pub fn from_data(name: &str, extension: &str, data: Arc<TextureData>) -> Self {
        Self {
            name: name.to_string(),
            extension: extension.to_string(),
            data,
            fallback: false,
        }
    }

    /// A texture named `name` whose pixels are a stand-in default
    pub fn fallback(name: &str, extension: &str, default: Arc<TextureData>) -> Self {
        Self {
            fallback: true,
            ..Self::from_data(name, extension, default)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The shared pixel data
    pub fn data(&self) -> &Arc<TextureData> {
        &self.data
    }

    /// Whether the default texture stands in for a failed load
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

impl Behavior for Texture {
    fn update(&mut self, _dt: f32) {}

    fn render(&self, _surface: &mut dyn Surface) {}
}
