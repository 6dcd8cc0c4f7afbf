//! Decoded background images (feature `utils`).

use std::path::Path;

use crate::geom::PixelPoint;

/// RGBA8 pixels of a decoded image, ready to be uploaded by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl BackgroundImage {
    /// Wraps raw RGBA8 pixel data.
    ///
    /// # Errors
    /// Returns an error if the data length doesn't match width * height * 4.
    pub fn new_from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> anyhow::Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(anyhow::anyhow!(
                "RGBA data length {} does not match {}x{} image ({} bytes)",
                rgba.len(),
                width,
                height,
                expected
            ));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Decodes any format supported by the `image` crate.
    pub fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::new_from_rgba8(width, height, rgba.into_raw())
    }

    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| anyhow::anyhow!("Failed to load image from {}: {}", path.display(), e))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::new_from_rgba8(width, height, rgba.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> PixelPoint {
        PixelPoint::new(self.width as i32, self.height as i32)
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}
