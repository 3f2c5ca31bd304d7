//! In-memory alpha buffer usable as a pixel source

use crate::geometry::Rect;
use crate::traits::PixelSource;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A row-major grid of alpha values in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaGrid {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl AlphaGrid {
    /// Create a fully transparent grid
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0.0)
    }

    /// Create a grid with every pixel set to `alpha`
    pub fn filled(width: u32, height: u32, alpha: f32) -> Self {
        Self {
            width,
            height,
            values: vec![alpha.clamp(0.0, 1.0); width as usize * height as usize],
        }
    }

    /// Create a grid by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> f32,
    {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y).clamp(0.0, 1.0));
            }
        }
        Self { width, height, values }
    }

    /// Wrap an existing row-major buffer
    pub fn from_values(width: u32, height: u32, values: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(Error::InvalidData(format!(
                "Alpha buffer has {} values, expected {} for {}x{}",
                values.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self { width, height, values })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the alpha at `(x, y)` (with bounds checking)
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.values[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set the alpha at `(x, y)`
    pub fn set(&mut self, x: u32, y: u32, alpha: f32) -> Result<()> {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.values[i] = alpha.clamp(0.0, 1.0);
            Ok(())
        } else {
            Err(Error::InvalidData(format!(
                "Pixel ({}, {}) out of bounds for {}x{} grid",
                x, y, self.width, self.height
            )))
        }
    }

    /// Set every pixel inside `rect` to `alpha`; pixels outside the grid are ignored
    pub fn fill_rect(&mut self, rect: Rect, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        for y in rect.min_y..rect.max_y.min(self.height) {
            for x in rect.min_x..rect.max_x.min(self.width) {
                let i = self.index(x, y);
                self.values[i] = alpha;
            }
        }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

impl PixelSource for AlphaGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn alpha_at(&self, x: u32, y: u32) -> f32 {
        self.values[self.index(x, y)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = AlphaGrid::new(3, 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.values().iter().all(|&a| a == 0.0));
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = AlphaGrid::from_fn(4, 2, |x, y| if x == 3 && y == 1 { 1.0 } else { 0.0 });
        assert_eq!(grid.values()[7], 1.0);
        assert_eq!(grid.alpha_at(3, 1), 1.0);
        assert_eq!(grid.alpha_at(0, 1), 0.0);
    }

    #[test]
    fn test_values_are_clamped() {
        let mut grid = AlphaGrid::filled(2, 2, 3.0);
        assert_eq!(grid.alpha_at(0, 0), 1.0);
        grid.set(1, 1, -1.0).unwrap();
        assert_eq!(grid.get(1, 1), Some(0.0));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = AlphaGrid::new(2, 2);
        assert!(grid.set(2, 0, 1.0).is_err());
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_fill_rect() {
        let mut grid = AlphaGrid::new(4, 4);
        grid.fill_rect(Rect::new(2, 2, 6, 6), 1.0);
        assert_eq!(grid.alpha_at(1, 1), 0.0);
        assert_eq!(grid.alpha_at(2, 2), 1.0);
        assert_eq!(grid.alpha_at(3, 3), 1.0);
        assert_eq!(grid.values().iter().filter(|&&a| a == 1.0).count(), 4);
    }

    #[test]
    fn test_from_values_length_mismatch() {
        assert!(AlphaGrid::from_values(2, 2, vec![0.0; 3]).is_err());
        assert!(AlphaGrid::from_values(2, 2, vec![0.0; 4]).is_ok());
    }
}
