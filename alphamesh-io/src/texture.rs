//! Encoded texture assets with scoped readable access
//!
//! A [`TextureAsset`] keeps the encoded bytes of an image and decodes them
//! only while it is marked readable. [`TextureAsset::readable`] hands out a
//! guard that makes the asset readable for the guard's lifetime and puts the
//! previous state back when the guard is dropped, whether generation returns
//! normally, fails with an error, or unwinds.

use crate::error::Result;
use crate::image_source::ImageAlpha;
use alphamesh_core::PixelSource;
use image::RgbaImage;
use std::path::Path;
use tracing::debug;

/// An image asset whose pixels are only available while readable
#[derive(Debug, Clone)]
pub struct TextureAsset {
    encoded: Vec<u8>,
    readable: bool,
    pixels: RgbaImage,
}

impl TextureAsset {
    /// Wrap encoded image bytes; the asset starts out not readable
    pub fn from_encoded(encoded: Vec<u8>) -> Self {
        Self {
            encoded,
            readable: false,
            pixels: RgbaImage::default(),
        }
    }

    /// Read the encoded bytes of the image at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let encoded = std::fs::read(path.as_ref())?;
        debug!(path = %path.as_ref().display(), bytes = encoded.len(), "loaded texture asset");
        Ok(Self::from_encoded(encoded))
    }

    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }

    pub fn is_readable(&self) -> bool {
        self.readable
    }

    /// Whether decoded pixels are currently held in memory
    pub fn is_decoded(&self) -> bool {
        self.pixels.width() > 0 && self.pixels.height() > 0
    }

    /// Change the readable flag, decoding or releasing pixels as needed
    pub fn set_readable(&mut self, readable: bool) -> Result<()> {
        if readable && !self.readable {
            self.pixels = image::load_from_memory(&self.encoded)?.to_rgba8();
            debug!(
                width = self.pixels.width(),
                height = self.pixels.height(),
                "decoded texture"
            );
        } else if !readable {
            self.pixels = RgbaImage::default();
        }
        self.readable = readable;
        Ok(())
    }

    /// Make the asset readable until the returned guard is dropped
    pub fn readable(&mut self) -> Result<ReadableTexture<'_>> {
        let was_readable = self.readable;
        self.set_readable(true)?;
        Ok(ReadableTexture {
            asset: self,
            was_readable,
        })
    }
}

/// Readable access to a [`TextureAsset`]; restores the prior state on drop
#[derive(Debug)]
pub struct ReadableTexture<'a> {
    asset: &'a mut TextureAsset,
    was_readable: bool,
}

impl ReadableTexture<'_> {
    /// Decoded RGBA pixels
    pub fn image(&self) -> &RgbaImage {
        &self.asset.pixels
    }

    /// Alpha view of the decoded pixels
    pub fn alpha(&self, flip_y: bool) -> ImageAlpha<'_> {
        ImageAlpha::new(&self.asset.pixels).with_flip_y(flip_y)
    }
}

impl PixelSource for ReadableTexture<'_> {
    fn width(&self) -> u32 {
        self.asset.pixels.width()
    }

    fn height(&self) -> u32 {
        self.asset.pixels.height()
    }

    fn alpha_at(&self, x: u32, y: u32) -> f32 {
        self.asset.pixels.get_pixel(x, y)[3] as f32 / 255.0
    }
}

impl Drop for ReadableTexture<'_> {
    fn drop(&mut self) {
        if !self.was_readable {
            self.asset.readable = false;
            self.asset.pixels = RgbaImage::default();
            debug!("released texture pixels");
        }
    }
}
