use image::RgbaImage;
use std::path::PathBuf;

/// A decoded asset together with the path it was loaded from.
/// Transforms work on RGBA8 only, so every input is converted on load.
#[derive(Debug, Clone)]
pub struct Image {
    pub path: PathBuf,
    pub pixels: RgbaImage,
}

impl Image {
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}
