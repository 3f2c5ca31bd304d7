//! Pixel sources backed by decoded RGBA images

use alphamesh_core::{AlphaGrid, PixelSource};
use image::RgbaImage;

/// Alpha channel view over an [`RgbaImage`].
///
/// Alpha bytes are mapped to `[0, 1]` by dividing by 255. With `flip_y` set,
/// row 0 of the source is the bottom row of the image, which matches textures
/// whose origin is the lower-left corner.
#[derive(Debug, Clone, Copy)]
pub struct ImageAlpha<'a> {
    image: &'a RgbaImage,
    flip_y: bool,
}

impl<'a> ImageAlpha<'a> {
    pub fn new(image: &'a RgbaImage) -> Self {
        Self {
            image,
            flip_y: false,
        }
    }

    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    pub fn is_flipped(&self) -> bool {
        self.flip_y
    }

    /// Copy the alpha channel into an owned grid
    pub fn to_alpha_grid(&self) -> AlphaGrid {
        AlphaGrid::from_fn(self.width(), self.height(), |x, y| self.alpha_at(x, y))
    }
}

impl PixelSource for ImageAlpha<'_> {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn alpha_at(&self, x: u32, y: u32) -> f32 {
        let row = if self.flip_y {
            self.image.height() - 1 - y
        } else {
            y
        };
        self.image.get_pixel(x, row)[3] as f32 / 255.0
    }
}
