use std::path::Path;

use image::RgbImage;

use super::AssetError;

/// A decoded image, downsampled to a small RGB grid for half-block rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Picture {
    /// Longest side kept after decoding; terminals cannot show more detail.
    pub const MAX_SIDE: u32 = 160;

    pub fn from_rgb(rgb: &RgbImage) -> Self {
        Self {
            width: rgb.width(),
            height: rgb.height(),
            pixels: rgb.pixels().map(|p| p.0).collect(),
        }
    }

    /// Read and decode `path`, shrinking it to fit `MAX_SIDE`.
    pub fn decode(path: &Path) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let img = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgb = img.thumbnail(Self::MAX_SIDE, Self::MAX_SIDE).to_rgb8();
        Ok(Self::from_rgb(&rgb))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Nearest pixel for normalised coordinates in `0.0..1.0`.
    pub fn sample(&self, fx: f32, fy: f32) -> [u8; 3] {
        if self.pixels.is_empty() {
            return [0, 0, 0];
        }
        let x = ((fx.clamp(0.0, 1.0) * self.width as f32) as u32).min(self.width - 1);
        let y = ((fy.clamp(0.0, 1.0) * self.height as f32) as u32).min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }
}
